//! Default settings for family construction

/// Seed length as a multiple of the larger rectangle side.
///
/// Any factor of at least `sqrt(2)` makes the seed outrun the rectangle in
/// both axes from whichever corner it is anchored at.
pub const SEED_LENGTH_FACTOR: f64 = 2.0;

/// Smallest seed factor the builder accepts.
pub const MIN_SEED_LENGTH_FACTOR: f64 = std::f64::consts::SQRT_2;
