//! Pixel surface trait
//!
//! The only contact point between the engine and a physical display.

/// Full brightness
pub const MAX_BRIGHTNESS: u8 = 255;

/// A canvas of brightness-level pixels
///
/// Implementations own the pixel storage (or the hardware behind it).
/// Coordinates outside `0..width` x `0..height` must be tolerated: writes
/// there are ignored and reads return 0. The engine relies on this and does
/// no clipping of its own.
///
/// `fill_screen`, `clear` and `draw_line` have portable defaults built on
/// `draw_pixel`. Drivers with a faster bulk path should override them.
pub trait PixelSurface {
    /// Canvas dimensions as `(width, height)` in pixels
    fn size(&self) -> (u8, u8);

    /// Set the brightness of one pixel (0 = off)
    fn draw_pixel(&mut self, x: u8, y: u8, brightness: u8);

    /// Read back the brightness of one pixel
    fn get_pixel(&self, x: u8, y: u8) -> u8;

    /// Set every pixel of the canvas to `brightness`
    fn fill_screen(&mut self, brightness: u8) {
        let (width, height) = self.size();
        for y in 0..height {
            for x in 0..width {
                self.draw_pixel(x, y, brightness);
            }
        }
    }

    /// Turn every pixel off
    fn clear(&mut self) {
        self.fill_screen(0);
    }

    /// Draw a straight line between two points (inclusive)
    ///
    /// The default walks the Bresenham path; see [`crate::raster::line`].
    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, brightness: u8) {
        for (x, y) in crate::raster::LinePoints::new(x0, y0, x1, y1) {
            self.draw_pixel(x, y, brightness);
        }
    }
}

impl<S: PixelSurface + ?Sized> PixelSurface for &mut S {
    fn size(&self) -> (u8, u8) {
        (**self).size()
    }

    fn draw_pixel(&mut self, x: u8, y: u8, brightness: u8) {
        (**self).draw_pixel(x, y, brightness)
    }

    fn get_pixel(&self, x: u8, y: u8) -> u8 {
        (**self).get_pixel(x, y)
    }

    fn fill_screen(&mut self, brightness: u8) {
        (**self).fill_screen(brightness)
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, brightness: u8) {
        (**self).draw_line(x0, y0, x1, y1, brightness)
    }
}
