//! Rasterizing oriented segments into pixel runs.
//!
//! The digital-line algorithm itself sits behind [`DigitalLine`] so callers
//! can swap it out. [`Bresenham`] is the stock implementation.
//!
//! Endpoints are rounded half-to-even: a horizontal length of `2.5` ends at
//! column 2 and a length of `3.5` at column 4.

use glam::DVec2;

use crate::errors::SweepError;
use crate::types::{Line, Pixel};

/// A digital-line primitive: produces the ordered, 8-connected pixels of the
/// segment between two endpoints, both included.
///
/// Implementations must keep each axis monotonic along the run; the clipper
/// relies on it.
pub trait DigitalLine {
    fn segment(&self, from: Pixel, to: Pixel) -> Line;
}

impl<F> DigitalLine for F
where
    F: Fn(Pixel, Pixel) -> Line,
{
    fn segment(&self, from: Pixel, to: Pixel) -> Line {
        self(from, to)
    }
}

/// Integer Bresenham.
///
/// Steps the major axis one pixel at a time, so a segment always has
/// `max(|drow|, |dcol|) + 1` pixels. When both deltas are equal the column
/// is treated as the major axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bresenham;

impl DigitalLine for Bresenham {
    fn segment(&self, from: Pixel, to: Pixel) -> Line {
        // Work in (major, minor) so one loop handles every octant.
        let steep = from.row.abs_diff(to.row) > from.col.abs_diff(to.col);
        let swap = |p: Pixel| if steep { (p.row, p.col) } else { (p.col, p.row) };
        let unswap = |major: i32, minor: i32| {
            if steep {
                Pixel::new(major, minor)
            } else {
                Pixel::new(minor, major)
            }
        };

        let (mut major, mut minor) = swap(from);
        let (major_end, minor_end) = swap(to);
        let d_major = i64::from(major_end) - i64::from(major);
        let d_minor = i64::from(minor_end) - i64::from(minor);
        let step_major = if d_major > 0 { 1 } else { -1 };
        let step_minor = if d_minor > 0 { 1 } else { -1 };
        let (d_major, d_minor) = (d_major.abs(), d_minor.abs());

        let count = d_major as usize;
        let mut points = Vec::with_capacity(count + 1);
        let mut err = 2 * d_minor - d_major;
        for _ in 0..count {
            points.push(unswap(major, minor));
            while err >= 0 {
                minor += step_minor;
                err -= 2 * d_major;
            }
            major += step_major;
            err += 2 * d_minor;
        }
        points.push(to);
        Line::new(points)
    }
}

/// Rasterize a line of length `rho` leaving the origin at angle `theta`.
///
/// `theta` is in radians, counter-clockwise from the positive column axis,
/// with positive `sin` mapped to increasing rows. Uses [`Bresenham`].
pub fn rasterize(theta: f64, rho: f64) -> Result<Line, SweepError> {
    rasterize_with(&Bresenham, theta, rho)
}

/// Like [`rasterize`], with a caller-supplied digital-line primitive.
pub fn rasterize_with<D: DigitalLine + ?Sized>(
    rasterizer: &D,
    theta: f64,
    rho: f64,
) -> Result<Line, SweepError> {
    let end = endpoint(theta, rho)?;
    Ok(rasterizer.segment(Pixel::ORIGIN, end))
}

/// Pixel reached by travelling `rho` from the origin at angle `theta`.
pub(crate) fn endpoint(theta: f64, rho: f64) -> Result<Pixel, SweepError> {
    if !theta.is_finite() {
        return Err(SweepError::NonFiniteAngle { theta });
    }
    if !rho.is_finite() || rho < 0.0 {
        return Err(SweepError::InvalidLength { rho });
    }

    let tip = DVec2::from_angle(theta) * rho;
    let to_coord = |v: f64| {
        let v = v.round_ties_even();
        if v < f64::from(i32::MIN) || v > f64::from(i32::MAX) {
            Err(SweepError::LengthOutOfRange { rho })
        } else {
            Ok(v as i32)
        }
    };
    // x is the column, y the row.
    Ok(Pixel::new(to_coord(tip.y)?, to_coord(tip.x)?))
}
