//! LED matrix facade
//!
//! [`LedMatrix`] bundles a [`PixelSurface`] with a delay and exposes the
//! whole engine as methods. The canvas size is recorded once at
//! construction; all later calls use that configuration.

use embedded_hal::delay::DelayNs;

use crate::animation;
use crate::bitmap::{self, Picture};
use crate::config::{ConfigError, MatrixConfig};
use crate::raster;
use crate::text;
use crate::traits::{PixelSurface, MAX_BRIGHTNESS};
use crate::transform;

/// Drawing engine bound to one display
pub struct LedMatrix<S, D> {
    surface: S,
    delay: D,
    config: MatrixConfig,
}

impl<S: PixelSurface, D: DelayNs> LedMatrix<S, D> {
    /// Create an engine sized to the surface
    pub fn new(surface: S, delay: D) -> Result<Self, ConfigError> {
        let (width, height) = surface.size();
        let config = MatrixConfig::new(width, height)?;
        Ok(Self::with_config(surface, delay, config))
    }

    /// Create an engine with an explicit canvas size
    ///
    /// The size does not have to match the surface's own. Writes the engine
    /// makes past the surface's edge are ignored by the surface.
    pub fn with_config(surface: S, delay: D, config: MatrixConfig) -> Self {
        debug!("led matrix {}x{}", config.width(), config.height());
        Self {
            surface,
            delay,
            config,
        }
    }

    pub fn width(&self) -> u8 {
        self.config.width()
    }

    pub fn height(&self) -> u8 {
        self.config.height()
    }

    pub fn config(&self) -> &MatrixConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Give back the surface and delay
    pub fn into_parts(self) -> (S, D) {
        (self.surface, self.delay)
    }

    // Pixels

    pub fn set_pixel(&mut self, x: u8, y: u8, brightness: u8) {
        self.surface.draw_pixel(x, y, brightness);
    }

    pub fn clear_pixel(&mut self, x: u8, y: u8) {
        self.surface.draw_pixel(x, y, 0);
    }

    /// Set a pixel to full brightness
    pub fn light_pixel(&mut self, x: u8, y: u8) {
        self.surface.draw_pixel(x, y, MAX_BRIGHTNESS);
    }

    pub fn get_pixel(&self, x: u8, y: u8) -> u8 {
        self.surface.get_pixel(x, y)
    }

    pub fn fill_screen(&mut self, brightness: u8) {
        self.surface.fill_screen(brightness);
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    // Primitives

    pub fn draw_hline(&mut self, x: u8, y: u8, l: u8, brightness: u8) {
        raster::draw_hline(&mut self.surface, x, y, l, brightness);
    }

    pub fn draw_vline(&mut self, x: u8, y: u8, h: u8, brightness: u8) {
        raster::draw_vline(&mut self.surface, x, y, h, brightness);
    }

    pub fn draw_rectangle(&mut self, x: u8, y: u8, l: u8, h: u8, brightness: u8) {
        raster::draw_rectangle(&mut self.surface, x, y, l, h, brightness);
    }

    pub fn draw_filled_rectangle(&mut self, x: u8, y: u8, l: u8, h: u8, brightness: u8) {
        raster::draw_filled_rectangle(&mut self.surface, x, y, l, h, brightness);
    }

    pub fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, brightness: u8) {
        self.surface.draw_line(x0, y0, x1, y1, brightness);
    }

    pub fn draw_circle(&mut self, x0: u8, y0: u8, r: u8, brightness: u8) {
        raster::draw_circle(&mut self.surface, x0, y0, r, brightness);
    }

    pub fn draw_filled_circle(&mut self, x0: u8, y0: u8, r: u8, brightness: u8) {
        raster::draw_filled_circle(&mut self.surface, x0, y0, r, brightness);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x0: u8,
        y0: u8,
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        brightness: u8,
    ) {
        raster::draw_triangle(&mut self.surface, x0, y0, x1, y1, x2, y2, brightness);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_filled_triangle(
        &mut self,
        x0: u8,
        y0: u8,
        x1: u8,
        y1: u8,
        x2: u8,
        y2: u8,
        brightness: u8,
    ) {
        raster::draw_filled_triangle(&mut self.surface, x0, y0, x1, y1, x2, y2, brightness);
    }

    // Text and pictures

    pub fn draw_char(&mut self, x: u8, y: u8, c: char, brightness: u8) {
        text::draw_char(&mut self.surface, x, y, c, brightness);
    }

    pub fn draw_string(&mut self, x: u8, y: u8, s: &str, brightness: u8) {
        text::draw_string(&mut self.surface, x, y, s, brightness);
    }

    /// Blit an `l` x `h` row-major brightness image
    pub fn draw_picture(&mut self, x0: u8, y0: u8, l: u8, h: u8, image: &[u8]) {
        bitmap::draw_picture(&mut self.surface, x0, y0, l, h, image);
    }

    /// Blit one of the built-in 8x8 pictures
    pub fn draw_builtin(&mut self, x0: u8, y0: u8, picture: &Picture) {
        bitmap::draw_builtin(&mut self.surface, x0, y0, picture);
    }

    // Whole canvas

    pub fn rotate_content_cw(&mut self) {
        transform::rotate_content_cw(&mut self.surface, &self.config);
    }

    pub fn rotate_content_acw(&mut self) {
        transform::rotate_content_acw(&mut self.surface, &self.config);
    }

    // Animation

    pub fn move_pixel(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) {
        animation::move_pixel(&mut self.surface, x0, y0, x1, y1);
    }

    /// Slide a pixel along a line, `step_speed` ms per step
    pub fn animate_pixel(&mut self, x0: u8, y0: u8, x1: u8, y1: u8, step_speed: u16) {
        animation::animate_pixel(
            &mut self.surface,
            &mut self.delay,
            x0,
            y0,
            x1,
            y1,
            step_speed,
        );
    }

    /// Scroll a string across the canvas from column `x` to off the left edge
    pub fn running_text(&mut self, x: u8, y: u8, s: &str, brightness: u8, step_speed: u16) {
        animation::running_text(
            &mut self.surface,
            &mut self.delay,
            self.config.width(),
            x,
            y,
            s,
            brightness,
            step_speed,
        );
    }
}
