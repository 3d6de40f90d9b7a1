//! Bilinear interpolation over a regular latitude/longitude grid of
//! scaled integer samples.
//!
//! This is the weighted-mean formulation: each corner of the enclosing
//! cell contributes in proportion to its proximity along each axis. On a
//! grid node the blend degenerates to an exact table lookup, so no
//! rounding drift is introduced where a query lands exactly on a sample.
//!
//! Queries are total. Coordinates outside the grid clamp to the nearest
//! boundary instead of extrapolating or failing, since the tabulated
//! model is undefined off the grid but callers must still receive a
//! deterministic answer. Latitude is a closed interval with the poles as
//! end rows and is never wrapped; longitude is physically periodic, but
//! the tables duplicate the +/-180 degree meridian in the first and last
//! columns, so plain closed-interval interpolation is correct there too
//! and no modulo arithmetic is needed.
//!
//! ```rust
//! use geomag_grid::bilinear::{GridGeometry, SampleGrid};
//!
//! // A 2 x 3 grid covering one cell of latitude and two of longitude
//! let geometry = GridGeometry::new(10.0_f64, 0.0, 10.0, 0.0, 20.0, 2, 3).unwrap();
//! let samples = [0_i16, 100, 200, 1000, 1100, 1200];
//! let grid = SampleGrid::new(&samples, 2, 3).unwrap();
//!
//! // Halfway up the first cell, on its left edge
//! let v: f64 = grid.blend(&geometry.cell(5.0, 0.0));
//! assert_eq!(v, 500.0);
//! ```
//!
//! References
//! * https://en.wikipedia.org/wiki/Bilinear_interpolation#Weighted_mean
use num_traits::{Float, NumCast};

/// Sampling parameters of a regular mesh covering closed latitude and
/// longitude intervals with uniform spacing on both axes.
///
/// One instance is shared by every table sampled on the same mesh.
/// Invariants, enforced by [`GridGeometry::new`]:
/// * `rows = (max_lat - min_lat) / resolution + 1`
/// * `cols = (max_lon - min_lon) / resolution + 1`
/// * at least two rows and columns, so every query has a full cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry<T: Float> {
    /// Grid spacing along both axes, degrees
    pub(crate) resolution: T,

    /// Latitude of the first row, degrees
    pub(crate) min_lat: T,

    /// Latitude of the last row, degrees
    pub(crate) max_lat: T,

    /// Longitude of the first column, degrees
    pub(crate) min_lon: T,

    /// Longitude of the last column, degrees
    pub(crate) max_lon: T,

    /// Number of latitude rows
    pub(crate) rows: usize,

    /// Number of longitude columns
    pub(crate) cols: usize,
}

impl<T: Float> GridGeometry<T> {
    /// Build a validated geometry.
    ///
    /// # Errors
    /// * If there are fewer than two rows or columns
    /// * If the resolution is not strictly positive
    /// * If the highest grid index is not representable in `T`
    /// * If the bounds are not exactly spanned by `resolution` steps
    ///   over the given row and column counts
    pub fn new(
        resolution: T,
        min_lat: T,
        max_lat: T,
        min_lon: T,
        max_lon: T,
        rows: usize,
        cols: usize,
    ) -> Result<Self, &'static str> {
        if rows < 2 || cols < 2 {
            return Err("Grids must have at least two rows and columns");
        }
        if !(resolution > T::zero()) {
            return Err("Resolution must be positive");
        }

        // The highest indices the engine derives must be representable in T
        let (nrows, ncols) = match (
            <T as NumCast>::from(rows - 1),
            <T as NumCast>::from(cols - 1),
        ) {
            (Some(r), Some(c)) => (r, c),
            _ => return Err("Unrepresentable grid dimension"),
        };

        // row_count = (max_lat - min_lat) / resolution + 1 and likewise for
        // columns. Whole-degree sampling parameters make the check exact.
        if min_lat + resolution * nrows != max_lat {
            return Err("Latitude bounds do not match resolution and row count");
        }
        if min_lon + resolution * ncols != max_lon {
            return Err("Longitude bounds do not match resolution and column count");
        }

        Ok(Self {
            resolution,
            min_lat,
            max_lat,
            min_lon,
            max_lon,
            rows,
            cols,
        })
    }

    /// Grid spacing along both axes, degrees.
    pub fn resolution(&self) -> T {
        self.resolution
    }

    /// Latitude of the first row, degrees.
    pub fn min_lat(&self) -> T {
        self.min_lat
    }

    /// Latitude of the last row, degrees.
    pub fn max_lat(&self) -> T {
        self.max_lat
    }

    /// Longitude of the first column, degrees.
    pub fn min_lon(&self) -> T {
        self.min_lon
    }

    /// Longitude of the last column, degrees.
    pub fn max_lon(&self) -> T {
        self.max_lon
    }

    /// Number of latitude rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of longitude columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Resolve a coordinate in degrees to the enclosing cell and the
    /// fractional position inside it.
    ///
    /// This is the only place grid indices are derived, which is what
    /// guarantees the bounds invariant for every table read: the lower
    /// corner never exceeds `rows - 2` / `cols - 2`, so the `+ 1`
    /// neighbor always exists.
    ///
    /// Total over all inputs. Out-of-range coordinates clamp to the
    /// nearest boundary; latitude is never wrapped. NaN clamps to the
    /// low bound.
    #[inline(always)]
    pub fn cell(&self, lat: T, lon: T) -> CellIndex<T> {
        let lat = lat.max(self.min_lat).min(self.max_lat);
        let lon = lon.max(self.min_lon).min(self.max_lon);

        let row_f = (lat - self.min_lat) / self.resolution;
        let col_f = (lon - self.min_lon) / self.resolution;

        let (row, dy) = Self::lower_corner(row_f, self.rows);
        let (col, dx) = Self::lower_corner(col_f, self.cols);

        CellIndex { row, col, dy, dx }
    }

    /// Get the next-lower-or-exact index along a dimension for a fractional
    /// grid position, clipped so that `index + 1` stays on the grid.
    ///
    /// `frac` is already clamped to `[0, n - 1]`, so the weight comes out
    /// in `[0, 1]` and reaches 1 only on the high boundary.
    #[inline(always)]
    fn lower_corner(frac: T, n: usize) -> (usize, T) {
        // The clamped fractional position is finite and non-negative,
        // and the index was checked representable at construction,
        // so neither cast can fail.
        let i = <usize as NumCast>::from(frac.floor()).unwrap_or(0).min(n - 2);
        let w = frac - <T as NumCast>::from(i).unwrap_or_else(T::zero);
        (i, w)
    }
}

/// Lower-corner grid indices and fractional weights for one query point.
///
/// `row + 1` and `col + 1` are always on the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellIndex<T> {
    /// Row index of the cell's low-latitude corner
    pub row: usize,

    /// Column index of the cell's low-longitude corner
    pub col: usize,

    /// Fractional position between `row` and `row + 1`, in `[0, 1]`
    pub dy: T,

    /// Fractional position between `col` and `col + 1`, in `[0, 1]`
    pub dx: T,
}

/// An immutable row-major table of scaled `i16` samples on a regular mesh.
///
/// The store only reads; there are no mutation operations, so shared
/// access from any number of threads needs no synchronization.
#[derive(Clone, Copy, Debug)]
pub struct SampleGrid<'a> {
    /// Scaled samples in row-major order, size rows * cols
    pub(crate) samples: &'a [i16],

    /// Number of latitude rows
    pub(crate) rows: usize,

    /// Number of longitude columns
    pub(crate) cols: usize,
}

impl<'a> SampleGrid<'a> {
    /// Build a grid over borrowed samples.
    ///
    /// # Errors
    /// * If there are fewer than two rows or columns
    /// * If the sample count does not match the dimensions
    pub fn new(samples: &'a [i16], rows: usize, cols: usize) -> Result<Self, &'static str> {
        if rows < 2 || cols < 2 {
            return Err("Grids must have at least two rows and columns");
        }
        if samples.len() != rows * cols {
            return Err("Sample count does not match grid dimensions");
        }
        Ok(Self {
            samples,
            rows,
            cols,
        })
    }

    /// Raw scaled sample at a grid node.
    ///
    /// # Panics
    /// * If `row` or `col` is off the grid. Indices are engine-derived,
    ///   never caller-supplied, so a violation is a defect in index
    ///   derivation rather than a runtime condition.
    #[inline(always)]
    pub fn sample(&self, row: usize, col: usize) -> i16 {
        assert!(
            row < self.rows && col < self.cols,
            "Grid index out of bounds"
        );
        self.samples[row * self.cols + col]
    }

    /// Bilinear blend of the four corner samples enclosing `cell`.
    ///
    /// With both weights at zero this reduces to exactly the raw sample
    /// at the lower corner.
    #[inline(always)]
    pub fn blend<T: Float + From<i16>>(&self, cell: &CellIndex<T>) -> T {
        let v00: T = self.sample(cell.row, cell.col).into();
        let v01: T = self.sample(cell.row, cell.col + 1).into();
        let v10: T = self.sample(cell.row + 1, cell.col).into();
        let v11: T = self.sample(cell.row + 1, cell.col + 1).into();

        let one = T::one();
        let (dy, dx) = (cell.dy, cell.dx);

        v00 * (one - dx) * (one - dy)
            + v01 * dx * (one - dy)
            + v10 * (one - dx) * dy
            + v11 * dx * dy
    }
}
