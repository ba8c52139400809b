//! Midpoint circle rasterization

use super::plot;
use crate::traits::PixelSurface;

/// Circle outline of radius `r` centred on `(x0, y0)`
///
/// Walks one octant with the integer decision variable `d = 3 - 2r` and
/// mirrors each point into the other seven. `r = 0` lights the centre.
pub fn draw_circle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x0: u8,
    y0: u8,
    r: u8,
    brightness: u8,
) {
    let (cx, cy) = (x0 as i32, y0 as i32);
    let mut x = 0i32;
    let mut y = r as i32;
    let mut d = 3 - 2 * y;

    while x <= y {
        plot(surface, cx + x, cy + y, brightness);
        plot(surface, cx - x, cy + y, brightness);
        plot(surface, cx + x, cy - y, brightness);
        plot(surface, cx - x, cy - y, brightness);
        plot(surface, cx + y, cy + x, brightness);
        plot(surface, cx - y, cy + x, brightness);
        plot(surface, cx + y, cy - x, brightness);
        plot(surface, cx - y, cy - x, brightness);

        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
    }
}

/// Disk of radius `r` centred on `(x0, y0)`
///
/// Drawn as concentric outlines for every radius `0..=r`. Rewriting a pixel
/// at the same brightness is harmless. Larger radii can show single-pixel
/// gaps between rings.
pub fn draw_filled_circle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x0: u8,
    y0: u8,
    r: u8,
    brightness: u8,
) {
    for radius in 0..=r {
        draw_circle(surface, x0, y0, radius, brightness);
    }
}
