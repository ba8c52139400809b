//! In-memory canvas
//!
//! A plain `W` x `H` array of brightness bytes. Useful on its own for
//! off-screen composition and as the canvas of host-side tests.

use ledmatrix_core::PixelSurface;

/// Row-major brightness buffer of `W` x `H` pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    pixels: [[u8; W]; H],
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    /// Both axes must fit the `u8` coordinate space
    const VALID_SIZE: () = assert!(W > 0 && W <= 255 && H > 0 && H <= 255);

    /// Create an all-off buffer
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_SIZE;
        Self {
            pixels: [[0; W]; H],
        }
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> &[[u8; W]; H] {
        &self.pixels
    }

    /// One row, or `None` below the canvas
    pub fn row(&self, y: u8) -> Option<&[u8; W]> {
        self.pixels.get(y as usize)
    }

    /// Number of pixels with non-zero brightness
    pub fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&b| b != 0)
            .count()
    }
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> PixelSurface for FrameBuffer<W, H> {
    fn size(&self) -> (u8, u8) {
        (W as u8, H as u8)
    }

    fn draw_pixel(&mut self, x: u8, y: u8, brightness: u8) {
        if let Some(px) = self
            .pixels
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *px = brightness;
        }
    }

    fn get_pixel(&self, x: u8, y: u8) -> u8 {
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(0)
    }

    fn fill_screen(&mut self, brightness: u8) {
        for row in self.pixels.iter_mut() {
            row.fill(brightness);
        }
    }
}
