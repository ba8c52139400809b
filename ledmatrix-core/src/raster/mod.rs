//! Primitive rasterization
//!
//! Turns shape parameters into pixel writes on a [`PixelSurface`]. Every
//! function takes the brightness to draw with; 0 erases.
//!
//! Intermediate coordinates are computed in `i32`. Points that fall outside
//! the `u8` coordinate space cannot be addressed and are dropped here; all
//! other points go to the surface unclipped.

pub mod circle;
pub mod line;
pub mod rect;
pub mod triangle;

pub use circle::{draw_circle, draw_filled_circle};
pub use line::{directed_path, draw_line, LinePoints, MAX_PATH_LEN};
pub use rect::{draw_filled_rectangle, draw_hline, draw_rectangle, draw_vline};
pub use triangle::{draw_filled_triangle, draw_triangle};

use crate::traits::PixelSurface;

/// Write one pixel given signed coordinates
///
/// Does nothing for points outside the `u8` coordinate space.
#[inline]
pub(crate) fn plot<S: PixelSurface + ?Sized>(surface: &mut S, x: i32, y: i32, brightness: u8) {
    if let (Ok(x), Ok(y)) = (u8::try_from(x), u8::try_from(y)) {
        surface.draw_pixel(x, y, brightness);
    }
}

/// Horizontal run of `len` pixels starting at `(x, y)`
pub(crate) fn span<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    len: i32,
    brightness: u8,
) {
    for i in 0..len.max(0) {
        plot(surface, x + i, y, brightness);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Canvas;
    use super::*;

    #[test]
    fn test_plot_drops_unaddressable_points() {
        let mut canvas = Canvas::new(4, 4);
        plot(&mut canvas, -1, 0, 255);
        plot(&mut canvas, 0, 256, 255);
        assert!(canvas.writes.is_empty());

        plot(&mut canvas, 2, 3, 255);
        assert_eq!(canvas.writes.as_slice(), &[(2, 3, 255)]);
    }

    #[test]
    fn test_span_forwards_off_canvas_points() {
        // The surface decides what to do with x = 4..5, not the rasterizer
        let mut canvas = Canvas::new(4, 4);
        span(&mut canvas, 2, 1, 4, 10);
        assert_eq!(canvas.writes.len(), 4);
        assert_eq!(canvas.get_pixel(3, 1), 10);
        assert_eq!(canvas.lit().len(), 2);
    }
}
