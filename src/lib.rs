//! Design calculations and 2D layout for **planar toothed log-periodic antennas**.
//!
//! A design is a handful of numbers: the scaling factor Γ, the tooth angle α,
//! the effective permittivity of the substrate, the number of tooth pairs and
//! a seed (either the first radius or the lowest frequency). From those the
//! crate computes the radius/frequency sequence of every tooth pair, lays the
//! teeth out as annular sectors around a central feed gap and exports the
//! layout as SVG (screen) or DXF (CAD, millimetres).
//!
//! ```
//! use toothed_lpa::{DesignParameters, Seed, build_geometry, calculate};
//!
//! let params = DesignParameters::new(1.2, 30.0, 2.0, 4, Seed::Radius(0.1));
//! let calc = calculate(&params).unwrap();
//! let geometry = build_geometry(&calc.results, &params);
//! assert_eq!(geometry.teeth.len(), 6);
//! ```
//!
//! # Features
//! #### Default
//! - [**svg-io**](https://en.wikipedia.org/wiki/SVG): `.svg` export of the layout
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` export of the layout

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod calculator;
pub mod errors;
pub mod float_types;
pub mod geometry;
pub mod io;
pub mod math;
pub mod params;
pub mod traits;
pub mod units;

pub use aabb::Bounds;
pub use calculator::{Calculation, ToothResult, calculate};
pub use errors::{AntennaError, CalculationError, Field, ValidationError};
pub use geometry::{AntennaGeometry, build_geometry};
pub use params::{DesignParameters, Seed};
pub use units::FrequencyUnit;
