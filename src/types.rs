//! Pixel-level primitives: coordinates, lines and bounding rectangles.
//!
//! Everything here is integer-valued. Rows grow downward and columns grow to
//! the right, so `(0, 0)` is the top-left pixel of an image.

use std::fmt;
use std::ops::{Add, Deref};

use glam::IVec2;

use crate::errors::SweepError;

/// A single pixel position in (row, column) form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pixel {
    pub row: i32,
    pub col: i32,
}

impl Pixel {
    pub const ORIGIN: Pixel = Pixel { row: 0, col: 0 };

    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate along `axis`.
    #[inline]
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::Row => self.row,
            Axis::Col => self.col,
        }
    }
}

/// Translation by an integer offset: `x` moves columns, `y` moves rows.
impl Add<IVec2> for Pixel {
    type Output = Pixel;

    #[inline]
    fn add(self, delta: IVec2) -> Pixel {
        Pixel::new(self.row + delta.y, self.col + delta.x)
    }
}

impl From<(i32, i32)> for Pixel {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Pixel::new(row, col)
    }
}

impl From<Pixel> for (i32, i32) {
    #[inline]
    fn from(p: Pixel) -> Self {
        (p.row, p.col)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the two grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Col,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Row, Axis::Col];

    /// Unit step along this axis, as a translation vector.
    #[inline]
    pub fn unit(self) -> IVec2 {
        match self {
            Axis::Row => IVec2::new(0, 1),
            Axis::Col => IVec2::new(1, 0),
        }
    }
}

/// An ordered run of pixels approximating a straight segment.
///
/// Lines coming out of a [`DigitalLine`](crate::DigitalLine) are monotonic in
/// both axes; translation preserves that and clipping takes a sub-slice, so
/// every line this crate hands out keeps the property. Lines are never
/// modified in place: operations that change a line return a new one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Line {
    points: Vec<Pixel>,
}

impl Line {
    /// The line with no pixels.
    pub const EMPTY: Line = Line { points: Vec::new() };

    pub fn new(points: Vec<Pixel>) -> Self {
        Self { points }
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Pixel> {
        self.points
    }

    /// Row coordinates in travel order.
    pub fn rows(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.row).collect()
    }

    /// Column coordinates in travel order.
    pub fn cols(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.col).collect()
    }

    /// Absolute distance between the first and last pixel along `axis`.
    ///
    /// Zero for empty and single-pixel lines.
    pub fn extent(&self, axis: Axis) -> u32 {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => a.get(axis).abs_diff(b.get(axis)),
            _ => 0,
        }
    }

    pub fn row_extent(&self) -> u32 {
        self.extent(Axis::Row)
    }

    pub fn col_extent(&self) -> u32 {
        self.extent(Axis::Col)
    }

    /// A copy of this line moved by `delta`.
    pub fn translated(&self, delta: IVec2) -> Line {
        self.points.iter().map(|&p| p + delta).collect()
    }

    /// Whether every axis is either non-decreasing or non-increasing.
    pub fn is_monotonic(&self) -> bool {
        Axis::BOTH.iter().all(|&axis| {
            let ascending = self.points.windows(2).all(|w| w[0].get(axis) <= w[1].get(axis));
            let descending = self.points.windows(2).all(|w| w[0].get(axis) >= w[1].get(axis));
            ascending || descending
        })
    }

    /// Whether consecutive pixels touch, diagonals included.
    pub fn is_connected(&self) -> bool {
        self.points.windows(2).all(|w| {
            let (a, b) = (w[0], w[1]);
            a != b && a.row.abs_diff(b.row) <= 1 && a.col.abs_diff(b.col) <= 1
        })
    }
}

impl Deref for Line {
    type Target = [Pixel];

    fn deref(&self) -> &[Pixel] {
        &self.points
    }
}

impl FromIterator<Pixel> for Line {
    fn from_iter<I: IntoIterator<Item = Pixel>>(iter: I) -> Self {
        Line::new(iter.into_iter().collect())
    }
}

impl FromIterator<(i32, i32)> for Line {
    fn from_iter<I: IntoIterator<Item = (i32, i32)>>(iter: I) -> Self {
        iter.into_iter().map(Pixel::from).collect()
    }
}

impl From<Vec<Pixel>> for Line {
    fn from(points: Vec<Pixel>) -> Self {
        Line::new(points)
    }
}

impl IntoIterator for Line {
    type Item = Pixel;
    type IntoIter = std::vec::IntoIter<Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Pixel;
    type IntoIter = std::slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Corners of a bounding rectangle, as seen on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    BottomLeft,
    BottomRight,
    TopRight,
    TopLeft,
}

/// A validated `height × width` pixel rectangle anchored at `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    height: i32,
    width: i32,
}

impl Bounds {
    /// Create bounds, rejecting non-positive dimensions.
    pub fn new(height: i32, width: i32) -> Result<Self, SweepError> {
        if height <= 0 || width <= 0 {
            return Err(SweepError::InvalidBounds { height, width });
        }
        Ok(Self { height, width })
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    /// Size along `axis`: height for rows, width for columns.
    #[inline]
    pub fn size(self, axis: Axis) -> i32 {
        match axis {
            Axis::Row => self.height,
            Axis::Col => self.width,
        }
    }

    /// Number of pixels inside the rectangle.
    pub fn area(self) -> usize {
        self.height as usize * self.width as usize
    }

    #[inline]
    pub fn contains(self, p: Pixel) -> bool {
        (0..self.height).contains(&p.row) && (0..self.width).contains(&p.col)
    }

    /// Row-major index of an in-bounds pixel.
    pub fn index_of(self, p: Pixel) -> Option<usize> {
        self.contains(p).then(|| p.row as usize * self.width as usize + p.col as usize)
    }

    pub fn corner(self, corner: Corner) -> Pixel {
        let (bottom, right) = (self.height - 1, self.width - 1);
        match corner {
            Corner::BottomLeft => Pixel::new(bottom, 0),
            Corner::BottomRight => Pixel::new(bottom, right),
            Corner::TopRight => Pixel::new(0, right),
            Corner::TopLeft => Pixel::new(0, 0),
        }
    }
}
