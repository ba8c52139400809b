//! Axis-aligned lines and rectangles

use super::{plot, span};
use crate::traits::PixelSurface;

/// `l` pixels from `(x, y)` to the right
pub fn draw_hline<S: PixelSurface + ?Sized>(surface: &mut S, x: u8, y: u8, l: u8, brightness: u8) {
    span(surface, x as i32, y as i32, l as i32, brightness);
}

/// `h` pixels from `(x, y)` downwards
pub fn draw_vline<S: PixelSurface + ?Sized>(surface: &mut S, x: u8, y: u8, h: u8, brightness: u8) {
    for i in 0..h as i32 {
        plot(surface, x as i32, y as i32 + i, brightness);
    }
}

/// Hollow box with outer size `l` x `h`
pub fn draw_rectangle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x: u8,
    y: u8,
    l: u8,
    h: u8,
    brightness: u8,
) {
    if l == 0 || h == 0 {
        return;
    }
    let (x, y, l, h) = (x as i32, y as i32, l as i32, h as i32);

    span(surface, x, y, l, brightness);
    span(surface, x, y + h - 1, l, brightness);
    for i in 0..h {
        plot(surface, x, y + i, brightness);
        plot(surface, x + l - 1, y + i, brightness);
    }
}

/// Solid box with size `l` x `h`
pub fn draw_filled_rectangle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x: u8,
    y: u8,
    l: u8,
    h: u8,
    brightness: u8,
) {
    for row in 0..h as i32 {
        span(surface, x as i32, y as i32 + row, l as i32, brightness);
    }
}
