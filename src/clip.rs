//! Clipping monotonic lines to a rectangle.
//!
//! Each axis of a rasterized line only ever moves one way, so the positions
//! that are in range for that axis form one contiguous run. Intersecting the
//! row run with the column run gives the in-bounds part of the line, found
//! with two binary searches per axis instead of a scan.

use std::ops::Range;

use crate::errors::SweepError;
use crate::types::{Axis, Bounds, Line, Pixel};

/// Keep the maximal contiguous part of `line` inside `height × width`.
///
/// Returns an empty line when nothing is inside. The input is left untouched
/// and the result is always a fresh copy.
pub fn restrict(line: &Line, height: i32, width: i32) -> Result<Line, SweepError> {
    let bounds = Bounds::new(height, width)?;
    Ok(restrict_to(line, bounds))
}

/// [`restrict`] against already validated bounds.
pub fn restrict_to(line: &Line, bounds: Bounds) -> Line {
    let span = in_bounds_span(line, bounds);
    Line::new(line.as_slice()[span].to_vec())
}

/// Index range of `line` that lies inside `bounds`; empty when none does.
pub fn in_bounds_span(line: &Line, bounds: Bounds) -> Range<usize> {
    let rows = axis_span(line, Axis::Row, bounds.size(Axis::Row));
    let cols = axis_span(line, Axis::Col, bounds.size(Axis::Col));
    let start = rows.start.max(cols.start);
    let end = rows.end.min(cols.end);
    if start < end { start..end } else { 0..0 }
}

/// Indices whose `axis` coordinate falls in `0..size`.
fn axis_span(points: &[Pixel], axis: Axis, size: i32) -> Range<usize> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return 0..0;
    };
    let value = |p: &Pixel| p.get(axis);

    if value(first) <= value(last) {
        // Non-decreasing: skip what is below zero, stop at the first value >= size.
        let left = points.partition_point(|p| value(p) < 0);
        let right = points.partition_point(|p| value(p) < size);
        left..right.max(left)
    } else {
        // Non-increasing: skip what is >= size, stop at the first negative value.
        let left = points.partition_point(|p| value(p) >= size);
        let right = points.partition_point(|p| value(p) >= 0);
        left..right.max(left)
    }
}
