//! Magnetic declination, inclination, and total field strength from the
//! embedded WMM-2020 grid tables.
//!
//! The three tables share one geometry, so a query derives the enclosing
//! cell once and blends each table with the same weights. A query is a
//! fixed number of table reads and float operations with no allocation,
//! no locking, and no mutable state, so it is safe from any number of
//! threads and from hard-real-time call sites.
//!
//! ```rust
//! use geomag_grid::wmm::MagneticModel;
//!
//! let model = MagneticModel::<f32>::wmm2020();
//! let est = model.estimate(0.0, 0.0);
//!
//! assert!((est.declination + 0.0799).abs() < 1e-6); // radians
//! assert!((est.strength - 319.4).abs() < 1e-3); // milliGauss
//! ```
use num_traits::Float;

use crate::bilinear::{GridGeometry, SampleGrid};
use crate::tables;

/// Which of the three tabulated quantities to address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    /// Angle between magnetic north and true north, radians * 1e4
    Declination,
    /// Dip angle below the horizontal plane, radians * 1e4
    Inclination,
    /// Total field magnitude, 0.1 milliGauss counts
    Strength,
}

/// Field quantities at one query coordinate, in physical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldEstimate<T> {
    /// Magnetic declination, radians, positive east of true north
    pub declination: T,

    /// Magnetic inclination (dip), radians, positive below horizontal
    pub inclination: T,

    /// Total field strength, milliGauss
    pub strength: T,
}

impl<T: Float + From<i16>> FieldEstimate<T> {
    /// Declination in degrees.
    pub fn declination_degrees(&self) -> T {
        self.declination.to_degrees()
    }

    /// Inclination in degrees.
    pub fn inclination_degrees(&self) -> T {
        self.inclination.to_degrees()
    }

    /// Field strength in Gauss.
    pub fn strength_gauss(&self) -> T {
        let mg_per_gauss: T = 1000_i16.into();
        self.strength / mg_per_gauss
    }

    /// Field strength in nanotesla.
    pub fn strength_nanotesla(&self) -> T {
        let nt_per_mg: T = 100_i16.into();
        self.strength * nt_per_mg
    }
}

/// The angle tables store radians * 1e4.
#[inline(always)]
fn decode_angle<T: Float + From<i16>>(blend: T) -> T {
    let counts_per_radian: T = 10_000_i16.into();
    blend / counts_per_radian
}

/// The strength table stores counts of 0.1 milliGauss.
#[inline(always)]
fn decode_strength<T: Float + From<i16>>(blend: T) -> T {
    let counts_per_milligauss: T = 10_i16.into();
    blend / counts_per_milligauss
}

/// Three tabulated field quantities on one shared mesh, with bilinear
/// sampling at arbitrary coordinates.
///
/// Fully immutable after construction; queries never write, block, or
/// allocate.
#[derive(Clone, Copy, Debug)]
pub struct MagneticModel<'a, T: Float> {
    /// Mesh parameters shared by all three tables
    geometry: GridGeometry<T>,

    /// Declination samples, radians * 1e4
    declination: SampleGrid<'a>,

    /// Inclination samples, radians * 1e4
    inclination: SampleGrid<'a>,

    /// Strength samples, 0.1 milliGauss counts
    strength: SampleGrid<'a>,
}

impl<'a, T: Float + From<i16>> MagneticModel<'a, T> {
    /// Build a model over caller-supplied tables sharing `geometry`.
    ///
    /// # Errors
    /// * If any table's sample count does not match the geometry
    pub fn new(
        geometry: GridGeometry<T>,
        declination: &'a [i16],
        inclination: &'a [i16],
        strength: &'a [i16],
    ) -> Result<Self, &'static str> {
        let (rows, cols) = (geometry.rows(), geometry.cols());
        Ok(Self {
            geometry,
            declination: SampleGrid::new(declination, rows, cols)?,
            inclination: SampleGrid::new(inclination, rows, cols)?,
            strength: SampleGrid::new(strength, rows, cols)?,
        })
    }

    /// The shared mesh parameters.
    pub fn geometry(&self) -> &GridGeometry<T> {
        &self.geometry
    }

    /// Raw scaled sample of one table at a grid node.
    ///
    /// # Panics
    /// * If `row` or `col` is off the grid
    pub fn sample(&self, table: Table, row: usize, col: usize) -> i16 {
        match table {
            Table::Declination => self.declination.sample(row, col),
            Table::Inclination => self.inclination.sample(row, col),
            Table::Strength => self.strength.sample(row, col),
        }
    }

    /// All three field quantities at a coordinate in degrees.
    ///
    /// Total over all inputs: out-of-range coordinates clamp to the grid
    /// boundary, latitude without wrapping. Repeated calls with the same
    /// inputs produce bit-identical output.
    #[inline(always)]
    pub fn estimate(&self, lat_deg: T, lon_deg: T) -> FieldEstimate<T> {
        let cell = self.geometry.cell(lat_deg, lon_deg);
        FieldEstimate {
            declination: decode_angle(self.declination.blend(&cell)),
            inclination: decode_angle(self.inclination.blend(&cell)),
            strength: decode_strength(self.strength.blend(&cell)),
        }
    }

    /// Declination in radians at a coordinate in degrees.
    #[inline(always)]
    pub fn declination_radians(&self, lat_deg: T, lon_deg: T) -> T {
        decode_angle(self.declination.blend(&self.geometry.cell(lat_deg, lon_deg)))
    }

    /// Declination in degrees at a coordinate in degrees.
    #[inline(always)]
    pub fn declination_degrees(&self, lat_deg: T, lon_deg: T) -> T {
        self.declination_radians(lat_deg, lon_deg).to_degrees()
    }

    /// Inclination in radians at a coordinate in degrees.
    #[inline(always)]
    pub fn inclination_radians(&self, lat_deg: T, lon_deg: T) -> T {
        decode_angle(self.inclination.blend(&self.geometry.cell(lat_deg, lon_deg)))
    }

    /// Inclination in degrees at a coordinate in degrees.
    #[inline(always)]
    pub fn inclination_degrees(&self, lat_deg: T, lon_deg: T) -> T {
        self.inclination_radians(lat_deg, lon_deg).to_degrees()
    }

    /// Field strength in milliGauss at a coordinate in degrees.
    #[inline(always)]
    pub fn strength_milligauss(&self, lat_deg: T, lon_deg: T) -> T {
        decode_strength(self.strength.blend(&self.geometry.cell(lat_deg, lon_deg)))
    }

    /// Field strength in Gauss at a coordinate in degrees.
    #[inline(always)]
    pub fn strength_gauss(&self, lat_deg: T, lon_deg: T) -> T {
        let mg_per_gauss: T = 1000_i16.into();
        self.strength_milligauss(lat_deg, lon_deg) / mg_per_gauss
    }

    /// Field strength in nanotesla at a coordinate in degrees.
    #[inline(always)]
    pub fn strength_nanotesla(&self, lat_deg: T, lon_deg: T) -> T {
        let nt_per_mg: T = 100_i16.into();
        self.strength_milligauss(lat_deg, lon_deg) * nt_per_mg
    }
}

impl<T: Float + From<i16>> MagneticModel<'static, T> {
    /// The embedded WMM-2020 model.
    ///
    /// Construction is a handful of integer-to-float conversions, so
    /// building the model at the call site is cheap even when evaluating
    /// one query at a time. The sampling parameters here are those of the
    /// generated asset; their consistency with the embedded tables is
    /// pinned by unit tests, so the validating constructors are not
    /// needed on this path and it cannot fail.
    pub fn wmm2020() -> Self {
        let geometry = GridGeometry {
            resolution: tables::SAMPLING_RES.into(),
            min_lat: tables::SAMPLING_MIN_LAT.into(),
            max_lat: tables::SAMPLING_MAX_LAT.into(),
            min_lon: tables::SAMPLING_MIN_LON.into(),
            max_lon: tables::SAMPLING_MAX_LON.into(),
            rows: tables::LAT_DIM,
            cols: tables::LON_DIM,
        };
        Self {
            geometry,
            declination: SampleGrid {
                samples: &tables::DECLINATION_TABLE,
                rows: tables::LAT_DIM,
                cols: tables::LON_DIM,
            },
            inclination: SampleGrid {
                samples: &tables::INCLINATION_TABLE,
                rows: tables::LAT_DIM,
                cols: tables::LON_DIM,
            },
            strength: SampleGrid {
                samples: &tables::STRENGTH_TABLE,
                rows: tables::LAT_DIM,
                cols: tables::LON_DIM,
            },
        }
    }
}

/// All three field quantities at a coordinate in degrees, from the
/// embedded WMM-2020 model.
///
/// This is a convenience function; callers making many queries can hold a
/// [`MagneticModel`] instead, though the construction overhead is minimal.
#[inline(always)]
pub fn estimate<T: Float + From<i16>>(lat_deg: T, lon_deg: T) -> FieldEstimate<T> {
    MagneticModel::wmm2020().estimate(lat_deg, lon_deg)
}

/// Magnetic declination in radians at a coordinate in degrees, from the
/// embedded WMM-2020 model.
#[inline(always)]
pub fn declination_radians<T: Float + From<i16>>(lat_deg: T, lon_deg: T) -> T {
    MagneticModel::wmm2020().declination_radians(lat_deg, lon_deg)
}

/// Magnetic inclination in radians at a coordinate in degrees, from the
/// embedded WMM-2020 model.
#[inline(always)]
pub fn inclination_radians<T: Float + From<i16>>(lat_deg: T, lon_deg: T) -> T {
    MagneticModel::wmm2020().inclination_radians(lat_deg, lon_deg)
}

/// Total field strength in Gauss at a coordinate in degrees, from the
/// embedded WMM-2020 model.
#[inline(always)]
pub fn strength_gauss<T: Float + From<i16>>(lat_deg: T, lon_deg: T) -> T {
    MagneticModel::wmm2020().strength_gauss(lat_deg, lon_deg)
}

#[cfg(test)]
mod test {
    use super::{estimate, MagneticModel, Table};
    use crate::bilinear::GridGeometry;
    use crate::tables::{
        DECLINATION_TABLE, INCLINATION_TABLE, LAT_DIM, LON_DIM, STRENGTH_TABLE,
    };
    use crate::testing::*;
    use crate::utils::linspace;

    const TABLES: [Table; 3] = [Table::Declination, Table::Inclination, Table::Strength];

    fn decode(table: Table, raw: f64) -> f64 {
        match table {
            Table::Declination | Table::Inclination => raw / 1e4,
            Table::Strength => raw / 10.0,
        }
    }

    fn by_table(est: &super::FieldEstimate<f64>, table: Table) -> f64 {
        match table {
            Table::Declination => est.declination,
            Table::Inclination => est.inclination,
            Table::Strength => est.strength,
        }
    }

    /// The embedded asset must satisfy the same invariants the validating
    /// constructors enforce, since `wmm2020` bypasses them.
    #[test]
    fn test_embedded_asset_passes_validation() {
        let geometry =
            GridGeometry::new(10.0_f64, -90.0, 90.0, -180.0, 180.0, LAT_DIM, LON_DIM).unwrap();
        assert_eq!(*MagneticModel::<f64>::wmm2020().geometry(), geometry);

        assert!(MagneticModel::<f64>::new(
            geometry,
            &DECLINATION_TABLE,
            &INCLINATION_TABLE,
            &STRENGTH_TABLE
        )
        .is_ok());

        assert!(MagneticModel::<f64>::new(
            geometry,
            &DECLINATION_TABLE[..10],
            &INCLINATION_TABLE,
            &STRENGTH_TABLE
        )
        .is_err());
    }

    /// The -180 and +180 degree columns describe the same meridian and
    /// must hold identical samples in every table.
    #[test]
    fn test_seam_columns_duplicated() {
        let model = MagneticModel::<f64>::wmm2020();
        for table in TABLES {
            for row in 0..LAT_DIM {
                assert_eq!(
                    model.sample(table, row, 0),
                    model.sample(table, row, LON_DIM - 1)
                );
            }
        }
    }

    /// On every grid vertex the estimate equals the decoded raw sample,
    /// with zero interpolation error.
    #[test]
    fn test_vertex_exactness() {
        let model = MagneticModel::<f64>::wmm2020();
        for row in 0..LAT_DIM {
            for col in 0..LON_DIM {
                let lat = -90.0 + 10.0 * row as f64;
                let lon = -180.0 + 10.0 * col as f64;
                let est = model.estimate(lat, lon);
                for table in TABLES {
                    let expected = decode(table, model.sample(table, row, col) as f64);
                    assert_eq!(by_table(&est, table), expected);
                }
            }
        }
    }

    #[test]
    fn test_vertex_exactness_f32() {
        let model = MagneticModel::<f32>::wmm2020();
        for row in 0..LAT_DIM {
            for col in 0..LON_DIM {
                let lat = -90.0 + 10.0 * row as f32;
                let lon = -180.0 + 10.0 * col as f32;
                let est = model.estimate(lat, lon);
                assert_eq!(
                    est.declination,
                    model.sample(Table::Declination, row, col) as f32 / 1e4
                );
                assert_eq!(
                    est.strength,
                    model.sample(Table::Strength, row, col) as f32 / 10.0
                );
            }
        }
    }

    /// Longitude -180 and +180 give identical results at every latitude,
    /// without any special-casing in the engine.
    #[test]
    fn test_longitude_seam_equivalence() {
        let model = MagneticModel::<f64>::wmm2020();
        for &lat in linspace(-90.0, 90.0, 181).iter() {
            assert_eq!(model.estimate(lat, -180.0), model.estimate(lat, 180.0));
        }
    }

    /// Out-of-range coordinates behave exactly like the nearest boundary.
    #[test]
    fn test_clamping_equivalence() {
        let model = MagneticModel::<f64>::wmm2020();

        for &lat in linspace(-90.0, 90.0, 19).iter() {
            assert_eq!(model.estimate(lat, 190.0), model.estimate(lat, 180.0));
            assert_eq!(model.estimate(lat, -200.0), model.estimate(lat, -180.0));
        }
        for &lon in linspace(-180.0, 180.0, 37).iter() {
            assert_eq!(model.estimate(91.0, lon), model.estimate(90.0, lon));
            assert_eq!(model.estimate(-95.0, lon), model.estimate(-90.0, lon));
        }
    }

    /// Known raw cells at the equator/Greenwich vertex: declination -799
    /// (radians * 1e4) and strength 3194 (0.1 milliGauss).
    #[test]
    fn test_reference_point_equator_greenwich() {
        let est = estimate::<f32>(0.0, 0.0);
        assert!((est.declination + 0.0799).abs() < 1e-6);
        assert!((est.inclination + 0.5260).abs() < 1e-6);
        assert!((est.strength - 319.4).abs() < 1e-3);

        // Unit conversions from the same point
        assert!((est.strength_gauss() - 0.3194).abs() < 1e-6);
        assert!((est.strength_nanotesla() - 31940.0).abs() < 1e-1);
    }

    /// The center of a cell is the plain average of its four corners.
    #[test]
    fn test_cell_midpoint_is_corner_average() {
        let model = MagneticModel::<f64>::wmm2020();
        let est = model.estimate(5.0, 5.0);

        // (5, 5) sits in the cell whose low corner is (lat 0, lon 0)
        let (row, col) = (9, 18);
        for table in TABLES {
            let sum = model.sample(table, row, col) as f64
                + model.sample(table, row, col + 1) as f64
                + model.sample(table, row + 1, col) as f64
                + model.sample(table, row + 1, col + 1) as f64;
            let expected = decode(table, sum / 4.0);
            assert!((by_table(&est, table) - expected).abs() < 1e-12);
        }
    }

    /// Bilinear interpolation never overshoots the bounds of the four
    /// enclosing corner samples.
    #[test]
    fn test_interior_points_within_corner_bounds() {
        let model = MagneticModel::<f64>::wmm2020();
        let mut rng = rng_fixed_seed();

        let lats = rand_uniform(&mut rng, -90.0, 90.0, 500);
        let lons = rand_uniform(&mut rng, -180.0, 180.0, 500);
        for (&lat, &lon) in lats.iter().zip(lons.iter()) {
            let est = model.estimate(lat, lon);
            let cell = model.geometry().cell(lat, lon);
            for table in TABLES {
                let corners = [
                    model.sample(table, cell.row, cell.col),
                    model.sample(table, cell.row, cell.col + 1),
                    model.sample(table, cell.row + 1, cell.col),
                    model.sample(table, cell.row + 1, cell.col + 1),
                ];
                let lo = decode(table, *corners.iter().min().unwrap() as f64);
                let hi = decode(table, *corners.iter().max().unwrap() as f64);

                let v = by_table(&est, table);
                assert!(v >= lo - 1e-12 && v <= hi + 1e-12);
            }
        }
    }

    /// Pure function: identical inputs give bit-identical outputs.
    #[test]
    fn test_repeat_queries_bit_identical() {
        let a = estimate::<f32>(37.7, -122.4);
        let b = estimate::<f32>(37.7, -122.4);
        assert_eq!(a.declination.to_bits(), b.declination.to_bits());
        assert_eq!(a.inclination.to_bits(), b.inclination.to_bits());
        assert_eq!(a.strength.to_bits(), b.strength.to_bits());
    }

    /// The per-quantity accessors agree with the combined estimate.
    #[test]
    fn test_per_quantity_accessors_match_estimate() {
        let model = MagneticModel::<f64>::wmm2020();
        let mut rng = rng_fixed_seed();

        let lats = rand_uniform(&mut rng, -90.0, 90.0, 50);
        let lons = rand_uniform(&mut rng, -180.0, 180.0, 50);
        for (&lat, &lon) in lats.iter().zip(lons.iter()) {
            let est = model.estimate(lat, lon);

            assert_eq!(model.declination_radians(lat, lon), est.declination);
            assert_eq!(model.inclination_radians(lat, lon), est.inclination);
            assert_eq!(model.strength_milligauss(lat, lon), est.strength);

            assert_eq!(
                model.declination_degrees(lat, lon),
                est.declination_degrees()
            );
            assert_eq!(
                model.inclination_degrees(lat, lon),
                est.inclination_degrees()
            );
            assert_eq!(model.strength_gauss(lat, lon), est.strength_gauss());
            assert_eq!(model.strength_nanotesla(lat, lon), est.strength_nanotesla());

            // Free functions run over the same embedded model
            assert_eq!(super::declination_radians(lat, lon), est.declination);
            assert_eq!(super::inclination_radians(lat, lon), est.inclination);
            assert_eq!(super::strength_gauss(lat, lon), est.strength_gauss());
        }
    }

    /// f32 and f64 evaluations agree to within f32 rounding.
    #[test]
    fn test_f32_f64_agreement() {
        let m32 = MagneticModel::<f32>::wmm2020();
        let m64 = MagneticModel::<f64>::wmm2020();

        for &lat in linspace(-90.0_f64, 90.0, 37).iter() {
            for &lon in linspace(-180.0_f64, 180.0, 73).iter() {
                let e32 = m32.estimate(lat as f32, lon as f32);
                let e64 = m64.estimate(lat, lon);
                assert!((e32.declination as f64 - e64.declination).abs() < 1e-4);
                assert!((e32.inclination as f64 - e64.inclination).abs() < 1e-4);
                assert!((e32.strength as f64 - e64.strength).abs() < 1e-1);
            }
        }
    }
}
