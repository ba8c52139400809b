//! Whole-canvas rotation
//!
//! The canvas is read into a scratch buffer of exactly `width * height`
//! bytes, then every source pixel is written once to its rotated position.
//! The buffer lives only for the duration of the call.
//!
//! On a square canvas four clockwise turns, or one clockwise and one
//! anticlockwise turn, restore the original content. On a rectangular canvas
//! rotated pixels that land outside the surface are dropped by the surface,
//! and pixels no source maps onto keep their old value.

use alloc::vec::Vec;

use crate::config::MatrixConfig;
use crate::raster::plot;
use crate::traits::PixelSurface;

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// `(x, y)` moves to `(y, width - 1 - x)`
    Clockwise,
    /// `(x, y)` moves to `(height - 1 - y, x)`
    AntiClockwise,
}

impl Rotation {
    /// The turn that undoes this one
    pub const fn inverse(self) -> Self {
        match self {
            Rotation::Clockwise => Rotation::AntiClockwise,
            Rotation::AntiClockwise => Rotation::Clockwise,
        }
    }

    /// Destination of source pixel `(x, y)` on a `width` x `height` canvas
    pub const fn map(self, x: u8, y: u8, width: u8, height: u8) -> (i32, i32) {
        let (x, y) = (x as i32, y as i32);
        match self {
            Rotation::Clockwise => (y, width as i32 - 1 - x),
            Rotation::AntiClockwise => (height as i32 - 1 - y, x),
        }
    }
}

/// Read every pixel of the canvas, row-major
pub fn snapshot<S: PixelSurface + ?Sized>(surface: &S, config: &MatrixConfig) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(config.pixel_count());
    for y in 0..config.height() {
        for x in 0..config.width() {
            buffer.push(surface.get_pixel(x, y));
        }
    }
    buffer
}

/// Rotate the canvas content a quarter turn
pub fn rotate<S: PixelSurface + ?Sized>(
    surface: &mut S,
    config: &MatrixConfig,
    rotation: Rotation,
) {
    let (width, height) = (config.width(), config.height());
    trace!("rotating {}x{} canvas", width, height);

    let buffer = snapshot(surface, config);
    for y in 0..height {
        for x in 0..width {
            let brightness = buffer[y as usize * width as usize + x as usize];
            let (dx, dy) = rotation.map(x, y, width, height);
            plot(surface, dx, dy, brightness);
        }
    }
}

/// Rotate the canvas content 90 degrees clockwise
pub fn rotate_content_cw<S: PixelSurface + ?Sized>(surface: &mut S, config: &MatrixConfig) {
    rotate(surface, config, Rotation::Clockwise);
}

/// Rotate the canvas content 90 degrees anticlockwise
pub fn rotate_content_acw<S: PixelSurface + ?Sized>(surface: &mut S, config: &MatrixConfig) {
    rotate(surface, config, Rotation::AntiClockwise);
}
