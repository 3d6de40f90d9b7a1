//! Magnetic field reference values from a tabulated World Magnetic Model.
//!
//! Estimates declination, inclination, and total field strength at an
//! arbitrary latitude/longitude by bilinear interpolation over coarse
//! precomputed WMM-2020 grids (10 degree mesh, 19 x 37 samples per table).
//! Intended for resource-constrained navigation systems that need magnetic
//! reference values without a spherical-harmonic evaluator or network
//! access: a query is a fixed number of table reads and float operations,
//! allocation-free and read-only over statically embedded data.
//!
//! ```rust
//! use geomag_grid::estimate;
//!
//! // Field estimate near Zurich
//! let est = estimate::<f32>(47.4, 8.5);
//!
//! assert!(est.declination_degrees() > 0.0); // declination is east here
//! assert!(est.inclination_degrees() > 60.0); // steep dip at high latitude
//! assert!(est.strength > 0.0); // milliGauss
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub mod bilinear;
pub mod tables;
pub mod wmm;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;

pub use bilinear::{CellIndex, GridGeometry, SampleGrid};
pub use wmm::{
    declination_radians, estimate, inclination_radians, strength_gauss, FieldEstimate,
    MagneticModel, Table,
};
