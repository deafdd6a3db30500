//! Families of parallel lines sweeping a rectangle.
//!
//! A family is built from one long seed line. The seed is rasterized through
//! the origin, flipped so rows count up from the bottom edge, and moved so it
//! starts at the rectangle corner it points away from. Copies shifted one
//! pixel at a time along the seed's minor axis are clipped to the rectangle
//! until a copy falls completely outside, in both directions.
//!
//! Row-shifted families hold one pixel per column per line and
//! column-shifted families one pixel per row per line, so the members of a
//! family partition the rectangle: every pixel belongs to exactly one line.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::ops::{Deref, Range};

use glam::IVec2;

use crate::clip::restrict_to;
use crate::defaults;
use crate::errors::SweepError;
use crate::raster::{Bresenham, DigitalLine, rasterize_with};
use crate::types::{Axis, Bounds, Corner, Line, Pixel};

/// Which quarter turn a normalized angle falls in.
///
/// The boundaries follow the anchoring rule: `π/2` belongs to the first
/// quadrant and `π`, `3π/2` to the third.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `[0, π/2]`
    First,
    /// `(π/2, π)`
    Second,
    /// `[π, 3π/2]`
    Third,
    /// `(3π/2, 2π)`
    Fourth,
}

impl Quadrant {
    /// Quadrant of an angle already reduced to `[0, 2π]`.
    pub fn of(theta: f64) -> Self {
        if theta <= FRAC_PI_2 {
            Quadrant::First
        } else if theta < PI {
            Quadrant::Second
        } else if theta <= 3.0 * FRAC_PI_2 {
            Quadrant::Third
        } else {
            Quadrant::Fourth
        }
    }

    /// Corner a seed pointing into this quadrant has to start from so it
    /// crosses the whole rectangle.
    pub fn corner(self) -> Corner {
        match self {
            Quadrant::First => Corner::BottomLeft,
            Quadrant::Second => Corner::BottomRight,
            Quadrant::Third => Corner::TopRight,
            Quadrant::Fourth => Corner::TopLeft,
        }
    }
}

/// Translation that moves a bottom-left anchored seed onto `corner`.
fn anchor_offset(corner: Corner, bounds: Bounds) -> IVec2 {
    let (up, right) = (-(bounds.height() - 1), bounds.width() - 1);
    match corner {
        Corner::BottomLeft => IVec2::ZERO,
        Corner::BottomRight => IVec2::new(right, 0),
        Corner::TopRight => IVec2::new(right, up),
        Corner::TopLeft => IVec2::new(0, up),
    }
}

/// Reduce an angle to `[0, 2π)`, rejecting NaN and infinities.
pub fn normalize_angle(theta: f64) -> Result<f64, SweepError> {
    if !theta.is_finite() {
        return Err(SweepError::NonFiniteAngle { theta });
    }
    Ok(theta.rem_euclid(TAU))
}

/// Flip rows so the origin sits on the bottom edge and rows grow upward.
fn reorient(line: &Line, bounds: Bounds) -> Line {
    let bottom = bounds.height() - 1;
    line.iter().map(|p| Pixel::new(bottom - p.row, p.col)).collect()
}

/// Builds [`LineFamily`] values for one rectangle.
///
/// ```
/// use sweeplines::FamilyBuilder;
///
/// let family = FamilyBuilder::new(4, 6)?.build(0.3)?;
/// assert!(family.iter().all(|line| !line.is_empty()));
/// # Ok::<(), sweeplines::SweepError>(())
/// ```
#[derive(Clone, Debug)]
pub struct FamilyBuilder<D = Bresenham> {
    bounds: Bounds,
    seed_factor: f64,
    rasterizer: D,
}

impl FamilyBuilder<Bresenham> {
    pub fn new(height: i32, width: i32) -> Result<Self, SweepError> {
        Ok(Self::for_bounds(Bounds::new(height, width)?))
    }

    pub fn for_bounds(bounds: Bounds) -> Self {
        Self {
            bounds,
            seed_factor: defaults::SEED_LENGTH_FACTOR,
            rasterizer: Bresenham,
        }
    }
}

impl<D: DigitalLine> FamilyBuilder<D> {
    /// Seed length as a multiple of the larger side.
    pub fn seed_factor(mut self, factor: f64) -> Result<Self, SweepError> {
        if !factor.is_finite() || factor < defaults::MIN_SEED_LENGTH_FACTOR {
            return Err(SweepError::InvalidSeedFactor { factor });
        }
        self.seed_factor = factor;
        Ok(self)
    }

    /// Swap in another digital-line primitive.
    pub fn rasterizer<R: DigitalLine>(self, rasterizer: R) -> FamilyBuilder<R> {
        FamilyBuilder {
            bounds: self.bounds,
            seed_factor: self.seed_factor,
            rasterizer,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The family of lines at angle `theta` (radians) covering the bounds.
    pub fn build(&self, theta: f64) -> Result<LineFamily, SweepError> {
        let theta = normalize_angle(theta)?;
        let bounds = self.bounds;
        let (height, width) = (bounds.height(), bounds.width());

        let rho = self.seed_factor * f64::from(height.max(width));
        // Shifted copies move up to height + width pixels past the seed.
        if rho + 2.0 * (f64::from(height) + f64::from(width)) > f64::from(i32::MAX) {
            return Err(SweepError::LengthOutOfRange { rho });
        }

        let seed = rasterize_with(&self.rasterizer, theta, rho)?;
        let corner = Quadrant::of(theta).corner();
        let seed = reorient(&seed, bounds).translated(anchor_offset(corner, bounds));

        // Decided once for the whole sweep, from the unclipped seed.
        let axis = if seed.row_extent() <= seed.col_extent() {
            Axis::Row
        } else {
            Axis::Col
        };
        crate::log::debug!(
            theta,
            rho,
            ?corner,
            ?axis,
            seed_len = seed.len(),
            "anchored seed line"
        );

        // A conforming primitive starts on the anchor corner, so this only
        // trips for injected rasterizers.
        let base = restrict_to(&seed, bounds);
        if base.is_empty() {
            return Err(SweepError::EmptySeed { height, width });
        }

        let limit = (height + width + 1) as usize;
        let step = axis.unit();
        let below = sweep(&seed, bounds, -step, limit);
        let above = sweep(&seed, bounds, step, limit);
        crate::log::debug!(below = below.len(), above = above.len(), "sweep done");

        let first_offset = -(below.len() as i32);
        let mut lines = Vec::with_capacity(below.len() + 1 + above.len());
        lines.extend(below.into_iter().rev());
        lines.push(base);
        lines.extend(above);

        Ok(LineFamily {
            theta,
            bounds,
            corner,
            axis,
            first_offset,
            lines,
        })
    }
}

/// Clipped copies of `seed` shifted by `step`, `2 * step`, ... up to the
/// first copy that misses the rectangle.
fn sweep(seed: &Line, bounds: Bounds, step: IVec2, limit: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    for k in 1..=limit as i32 {
        let candidate = restrict_to(&seed.translated(step * k), bounds);
        crate::log::trace!(k, len = candidate.len(), "shifted candidate");
        if candidate.is_empty() {
            return lines;
        }
        lines.push(candidate);
    }
    crate::log::warn!(limit, "sweep stopped at the step limit");
    lines
}

/// The complete set of parallel lines of one orientation across a rectangle.
///
/// Members are ordered by their shift offset relative to the anchored seed,
/// which is always present at offset 0. Offsets are consecutive integers.
#[derive(Clone, Debug, PartialEq)]
pub struct LineFamily {
    theta: f64,
    bounds: Bounds,
    corner: Corner,
    axis: Axis,
    first_offset: i32,
    lines: Vec<Line>,
}

impl LineFamily {
    /// Orientation, normalized to `[0, 2π)`.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Corner the seed line starts from.
    pub fn corner(&self) -> Corner {
        self.corner
    }

    /// Axis the members are shifted along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// Shift offsets of the members, in order.
    pub fn offsets(&self) -> Range<i32> {
        self.first_offset..self.first_offset + self.lines.len() as i32
    }

    pub fn iter_with_offsets(&self) -> impl Iterator<Item = (i32, &Line)> {
        self.offsets().zip(self.lines.iter())
    }

    /// The clipped seed line.
    pub fn seed(&self) -> &Line {
        &self.lines[(-self.first_offset) as usize]
    }

    /// How many members touch each pixel, row major.
    pub fn coverage(&self) -> Vec<u32> {
        let mut hits = vec![0u32; self.bounds.area()];
        for p in self.lines.iter().flat_map(|line| line.iter()) {
            if let Some(i) = self.bounds.index_of(*p) {
                hits[i] += 1;
            }
        }
        hits
    }

    /// Text picture of the family: each pixel shows the base-36 index of the
    /// member covering it, `.` when uncovered and `#` when shared.
    pub fn render_ascii(&self) -> String {
        let width = self.bounds.width() as usize;
        let mut cells = vec!['.'; self.bounds.area()];
        for (index, line) in self.lines.iter().enumerate() {
            let label = char::from_digit((index % 36) as u32, 36).unwrap_or('?');
            for p in line.iter() {
                if let Some(i) = self.bounds.index_of(*p) {
                    cells[i] = if cells[i] == '.' { label } else { '#' };
                }
            }
        }
        cells
            .chunks(width)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Deref for LineFamily {
    type Target = [Line];

    fn deref(&self) -> &[Line] {
        &self.lines
    }
}

impl IntoIterator for LineFamily {
    type Item = Line;
    type IntoIter = std::vec::IntoIter<Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a LineFamily {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Family of parallel lines at `theta` covering `height × width`, with the
/// default seed length and [`Bresenham`].
pub fn line_family(theta: f64, height: i32, width: i32) -> Result<LineFamily, SweepError> {
    // Angle first so a bad angle is reported even with bad bounds.
    normalize_angle(theta)?;
    FamilyBuilder::new(height, width)?.build(theta)
}

/// The lines of [`line_family`], in sweep order.
pub fn parallel_lines(theta: f64, height: i32, width: i32) -> Result<Vec<Line>, SweepError> {
    Ok(line_family(theta, height, width)?.into_lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    fn pairs(line: &Line) -> Vec<(i32, i32)> {
        line.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn quadrant_boundaries() {
        assert_eq!(Quadrant::of(0.0), Quadrant::First);
        assert_eq!(Quadrant::of(FRAC_PI_2), Quadrant::First);
        assert_eq!(Quadrant::of(FRAC_PI_2 + 1e-9), Quadrant::Second);
        assert_eq!(Quadrant::of(PI), Quadrant::Third);
        assert_eq!(Quadrant::of(3.0 * FRAC_PI_2), Quadrant::Third);
        assert_eq!(Quadrant::of(3.0 * FRAC_PI_2 + 1e-9), Quadrant::Fourth);
        assert_eq!(Quadrant::of(TAU - 1e-9), Quadrant::Fourth);
    }

    #[test]
    fn quadrants_map_to_distinct_corners() {
        assert_eq!(Quadrant::First.corner(), Corner::BottomLeft);
        assert_eq!(Quadrant::Second.corner(), Corner::BottomRight);
        assert_eq!(Quadrant::Third.corner(), Corner::TopRight);
        assert_eq!(Quadrant::Fourth.corner(), Corner::TopLeft);
    }

    #[test]
    fn anchor_lands_the_origin_on_the_corner() {
        let bounds = Bounds::new(3, 5).unwrap();
        let flipped_origin = bounds.corner(Corner::BottomLeft);
        for corner in [
            Corner::BottomLeft,
            Corner::BottomRight,
            Corner::TopRight,
            Corner::TopLeft,
        ] {
            assert_eq!(
                flipped_origin + anchor_offset(corner, bounds),
                bounds.corner(corner)
            );
        }
    }

    #[test]
    fn normalization_wraps_negative_angles() {
        let theta = normalize_angle(-PI / 2.0).unwrap();
        assert!((theta - 3.0 * FRAC_PI_2).abs() < 1e-12);
        let family = line_family(-PI / 2.0, 2, 2).unwrap();
        assert_eq!(family.theta(), theta);
        assert!(normalize_angle(f64::INFINITY).is_err());
    }

    #[test]
    fn horizontal_family_has_one_line_per_row() {
        let family = line_family(0.0, 5, 5).unwrap();
        assert_eq!(family.len(), 5);
        assert_eq!(family.axis(), Axis::Row);
        assert_eq!(family.corner(), Corner::BottomLeft);
        assert_eq!(family.offsets(), -4..1);
        assert_eq!(family.theta(), 0.0);
        for (row, line) in family.iter().enumerate() {
            let expected: Vec<_> = (0..5).map(|col| (row as i32, col)).collect();
            assert_eq!(pairs(line), expected);
        }
        assert_eq!(pairs(family.seed()), vec![(4, 0), (4, 1), (4, 2), (4, 3), (4, 4)]);
    }

    #[test]
    fn vertical_family_shifts_columns() {
        let family = line_family(FRAC_PI_2, 5, 5).unwrap();
        assert_eq!(family.axis(), Axis::Col);
        assert_eq!(family.offsets(), 0..5);
        for (col, line) in family.iter().enumerate() {
            let expected: Vec<_> = (0..5).rev().map(|row| (row, col as i32)).collect();
            assert_eq!(pairs(line), expected);
        }
    }

    #[test]
    fn backwards_family_starts_top_right() {
        let family = line_family(PI, 3, 4).unwrap();
        assert_eq!(family.corner(), Corner::TopRight);
        assert_eq!(family.offsets(), 0..3);
        assert_eq!(pairs(&family[0]), vec![(0, 3), (0, 2), (0, 1), (0, 0)]);
        assert_eq!(pairs(&family[2]), vec![(2, 3), (2, 2), (2, 1), (2, 0)]);
    }

    #[test]
    fn diagonal_family_partitions_square() {
        let family = line_family(FRAC_PI_4, 3, 3).unwrap();
        assert_eq!(family.offsets(), -2..3);
        assert_eq!(pairs(&family[0]), vec![(0, 0)]);
        assert_eq!(pairs(&family[2]), vec![(2, 0), (1, 1), (0, 2)]);
        assert_eq!(pairs(&family[4]), vec![(2, 2)]);
        assert!(family.coverage().iter().all(|&hits| hits == 1));
    }

    #[test]
    fn single_pixel_rectangle() {
        for theta in [0.0, 1.0, 2.5, PI, 4.0, 5.5, -7.0] {
            let lines = parallel_lines(theta, 1, 1).unwrap();
            assert_eq!(lines.len(), 1, "theta {theta}");
            assert_eq!(pairs(&lines[0]), vec![(0, 0)]);
        }
    }

    #[test]
    fn builder_validates_seed_factor() {
        let builder = FamilyBuilder::new(3, 3).unwrap();
        assert!(matches!(
            builder.clone().seed_factor(1.0),
            Err(SweepError::InvalidSeedFactor { .. })
        ));
        assert!(builder.clone().seed_factor(f64::NAN).is_err());
        let family = builder.seed_factor(4.0).unwrap().build(0.2).unwrap();
        assert_eq!(family, line_family(0.2, 3, 3).unwrap());
    }

    #[test]
    fn builder_uses_injected_rasterizer() {
        let calls = std::cell::Cell::new(0);
        let counting = |a: Pixel, b: Pixel| {
            calls.set(calls.get() + 1);
            Bresenham.segment(a, b)
        };
        let family = FamilyBuilder::new(4, 4)
            .unwrap()
            .rasterizer(counting)
            .build(0.5)
            .unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(family, line_family(0.5, 4, 4).unwrap());
    }

    #[test]
    fn builder_rejects_seed_outside_the_rectangle() {
        let builder = FamilyBuilder::new(3, 3).unwrap();
        assert_eq!(builder.bounds(), Bounds::new(3, 3).unwrap());

        let empty = builder.clone().rasterizer(|_: Pixel, _: Pixel| Line::EMPTY);
        assert_eq!(
            empty.build(0.3),
            Err(SweepError::EmptySeed { height: 3, width: 3 })
        );

        let off_origin = builder.rasterizer(|_: Pixel, to: Pixel| Line::new(vec![to]));
        assert!(matches!(
            off_origin.build(0.3),
            Err(SweepError::EmptySeed { .. })
        ));
    }

    #[test]
    fn errors_leave_nothing_behind() {
        assert!(matches!(
            parallel_lines(f64::NAN, 4, 4),
            Err(SweepError::NonFiniteAngle { .. })
        ));
        assert_eq!(
            parallel_lines(0.0, 0, 4),
            Err(SweepError::InvalidBounds { height: 0, width: 4 })
        );
        assert_eq!(
            parallel_lines(0.0, 4, -2),
            Err(SweepError::InvalidBounds { height: 4, width: -2 })
        );
        assert!(matches!(
            parallel_lines(0.0, i32::MAX, 1),
            Err(SweepError::LengthOutOfRange { .. })
        ));
    }
}
