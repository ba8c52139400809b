//! embedded-graphics adapter
//!
//! Wraps any [`PixelSurface`] in a [`DrawTarget`] with [`Gray8`] color, so
//! fonts, images and primitives from the embedded-graphics ecosystem can be
//! drawn on an LED matrix. Gray level maps one to one onto brightness.
//!
//! ```ignore
//! use embedded_graphics::{
//!     pixelcolor::Gray8,
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//! };
//!
//! let mut display = GraphicsSurface::new(FrameBuffer::<16, 9>::new());
//! Circle::new(Point::new(2, 1), 7)
//!     .into_styled(PrimitiveStyle::with_stroke(Gray8::WHITE, 1))
//!     .draw(&mut display)?;
//! ```

use core::convert::Infallible;
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::{Gray8, GrayColor},
    Pixel,
};
use ledmatrix_core::PixelSurface;

/// [`DrawTarget`] view of a pixel surface
pub struct GraphicsSurface<S> {
    surface: S,
}

impl<S: PixelSurface> GraphicsSurface<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn inner(&self) -> &S {
        &self.surface
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_inner(self) -> S {
        self.surface
    }
}

impl<S: PixelSurface> DrawTarget for GraphicsSurface<S> {
    type Color = Gray8;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            // Anything outside u8 range can't be addressed; the surface
            // drops the rest
            if let (Ok(x), Ok(y)) = (u8::try_from(x), u8::try_from(y)) {
                self.surface.draw_pixel(x, y, color.luma());
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.surface.fill_screen(color.luma());
        Ok(())
    }
}

impl<S: PixelSurface> OriginDimensions for GraphicsSurface<S> {
    fn size(&self) -> Size {
        let (width, height) = self.surface.size();
        Size::new(width as u32, height as u32)
    }
}
