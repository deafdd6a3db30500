//! Families of discrete parallel lines covering a pixel grid.
//!
//! Given an orientation and a `height × width` rectangle, [`parallel_lines`]
//! returns every rasterized line of that orientation crossing the rectangle,
//! ordered from one edge to the other, with no gaps and no repeats. The
//! building blocks are exposed too: [`rasterize`] draws a single line
//! through the origin and [`restrict`] clips a line to a rectangle.
//!
//! ```
//! let lines = sweeplines::parallel_lines(0.0, 3, 4)?;
//! assert_eq!(lines.len(), 3);
//! assert_eq!(lines[1].cols(), vec![0, 1, 2, 3]);
//! # Ok::<(), sweeplines::SweepError>(())
//! ```

pub mod clip;
pub mod defaults;
pub mod errors;
pub mod family;
pub mod log;
pub mod raster;
pub mod types;

pub use clip::{restrict, restrict_to};
pub use errors::SweepError;
pub use family::{FamilyBuilder, LineFamily, Quadrant, line_family, parallel_lines};
pub use raster::{Bresenham, DigitalLine, rasterize, rasterize_with};
pub use types::{Axis, Bounds, Corner, Line, Pixel};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_thread_safe() {
        assert_send_sync::<Line>();
        assert_send_sync::<LineFamily>();
        assert_send_sync::<FamilyBuilder>();
        assert_send_sync::<SweepError>();
    }

    #[test]
    fn families_for_many_angles_in_parallel() {
        let handles: Vec<_> = (0..8)
            .map(|i| std::thread::spawn(move || parallel_lines(i as f64 * 0.7, 6, 9)))
            .collect();
        for handle in handles {
            let lines = handle.join().unwrap().unwrap();
            assert!(!lines.is_empty());
        }
    }
}
