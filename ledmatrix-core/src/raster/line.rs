//! Bresenham line rasterization
//!
//! The walk always starts from the lexicographically smaller endpoint, so a
//! line drawn from `a` to `b` lights exactly the same pixels as one drawn
//! from `b` to `a`. Callers that care about direction (the pixel animation)
//! use [`directed_path`], which reverses the canonical walk when needed.

use heapless::Vec;

use crate::traits::PixelSurface;

/// Longest possible path on a `u8` grid: one point per step on the major axis
pub const MAX_PATH_LEN: usize = 256;

/// Iterator over the pixels of a line, endpoints included
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i16,
    y: i16,
    x1: i16,
    y1: i16,
    dx: i16,
    dy: i16,
    sx: i16,
    sy: i16,
    err: i16,
    done: bool,
}

impl LinePoints {
    /// Create the walk between two points
    pub fn new(x0: u8, y0: u8, x1: u8, y1: u8) -> Self {
        let ((x0, y0), (x1, y1)) = canonical((x0, y0), (x1, y1));
        let (x0, y0, x1, y1) = (x0 as i16, y0 as i16, x1 as i16, y1 as i16);
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: (x1 - x0).signum(),
            sy: (y1 - y0).signum(),
            err: dx - dy,
            done: false,
        }
    }

    /// Number of points the full walk produces
    pub fn total_len(&self) -> usize {
        self.dx.max(self.dy) as usize + 1
    }
}

impl Iterator for LinePoints {
    type Item = (u8, u8);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // x and y never leave the bounding box of the endpoints
        let point = (self.x as u8, self.y as u8);

        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 > -self.dy {
                self.err -= self.dy;
                self.x += self.sx;
            }
            if e2 < self.dx {
                self.err += self.dx;
                self.y += self.sy;
            }
        }

        Some(point)
    }
}

impl core::iter::FusedIterator for LinePoints {}

/// Order two endpoints by `(x, y)`
fn canonical(a: (u8, u8), b: (u8, u8)) -> ((u8, u8), (u8, u8)) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

/// The Bresenham path from `(x0, y0)` to `(x1, y1)` in travel order
///
/// Same pixel set as [`LinePoints`], first element is always the source.
pub fn directed_path(x0: u8, y0: u8, x1: u8, y1: u8) -> Vec<(u8, u8), MAX_PATH_LEN> {
    let mut path: Vec<(u8, u8), MAX_PATH_LEN> = LinePoints::new(x0, y0, x1, y1).collect();
    if path.first() != Some(&(x0, y0)) {
        path.reverse();
    }
    path
}

/// Draw a line through the surface's own `draw_line`
///
/// Goes through the trait method so drivers that override it keep their
/// fast path when called from the triangle code.
pub fn draw_line<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x0: u8,
    y0: u8,
    x1: u8,
    y1: u8,
    brightness: u8,
) {
    surface.draw_line(x0, y0, x1, y1, brightness);
}
