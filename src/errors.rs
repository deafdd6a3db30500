//! Error types with diagnostics using miette
//!
//! Every error here is a precondition violation on the caller's side. An
//! empty clip result is not an error and never shows up in this enum.

use miette::Diagnostic;
use thiserror::Error;

/// Errors reported by the rasterizer, the clipper and the family builder
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("angle is not finite: {theta}")]
    #[diagnostic(
        code(sweeplines::angle::non_finite),
        help("pass the orientation in radians as a finite number")
    )]
    NonFiniteAngle { theta: f64 },

    #[error("invalid line length: {rho}")]
    #[diagnostic(
        code(sweeplines::length::invalid),
        help("the length must be finite and not negative")
    )]
    InvalidLength { rho: f64 },

    #[error("line length {rho} does not fit the pixel coordinate range")]
    #[diagnostic(code(sweeplines::length::out_of_range))]
    LengthOutOfRange { rho: f64 },

    #[error("invalid bounds: {height}x{width}")]
    #[diagnostic(
        code(sweeplines::bounds::invalid),
        help("height and width must both be at least 1")
    )]
    InvalidBounds { height: i32, width: i32 },

    #[error("invalid seed length factor: {factor}")]
    #[diagnostic(
        code(sweeplines::config::seed_factor),
        help("the factor must be finite and at least sqrt(2) so the seed spans the rectangle")
    )]
    InvalidSeedFactor { factor: f64 },

    #[error("seed line misses the {height}x{width} rectangle")]
    #[diagnostic(
        code(sweeplines::raster::empty_seed),
        help("the digital-line primitive must start its run at the first endpoint")
    )]
    EmptySeed { height: i32, width: i32 },
}
