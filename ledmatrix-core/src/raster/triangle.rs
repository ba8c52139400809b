//! Triangle outlines and scanline fill

use super::line::draw_line;
use super::span;
use crate::traits::PixelSurface;

/// Triangle outline, edges drawn in the order 0->1, 1->2, 2->0
#[allow(clippy::too_many_arguments)]
pub fn draw_triangle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x0: u8,
    y0: u8,
    x1: u8,
    y1: u8,
    x2: u8,
    y2: u8,
    brightness: u8,
) {
    draw_line(surface, x0, y0, x1, y1, brightness);
    draw_line(surface, x1, y1, x2, y2, brightness);
    draw_line(surface, x2, y2, x0, y0, brightness);
}

/// Solid triangle
///
/// Vertices are sorted by y. The upper part (down to the middle vertex) is
/// filled between the short edge 0->1 and the long edge 0->2, the lower part
/// between 1->2 and 0->2. Each edge's x is interpolated with integer
/// accumulators, so every span stays inside the vertices' bounding box.
///
/// A triangle whose vertices share one row collapses to a single span
/// covering all three x values.
#[allow(clippy::too_many_arguments)]
pub fn draw_filled_triangle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x0: u8,
    y0: u8,
    x1: u8,
    y1: u8,
    x2: u8,
    y2: u8,
    brightness: u8,
) {
    let mut v = [
        (x0 as i32, y0 as i32),
        (x1 as i32, y1 as i32),
        (x2 as i32, y2 as i32),
    ];
    v.sort_by_key(|&(_, y)| y);
    let [(x0, y0), (x1, y1), (x2, y2)] = v;

    if y0 == y2 {
        let a = x0.min(x1).min(x2);
        let b = x0.max(x1).max(x2);
        span(surface, a, y0, b - a + 1, brightness);
        return;
    }

    let (dx01, dy01) = (x1 - x0, y1 - y0);
    let (dx02, dy02) = (x2 - x0, y2 - y0);
    let (dx12, dy12) = (x2 - x1, y2 - y1);

    // Flat bottom: include the middle row in the upper part. Otherwise the
    // lower part owns it, so it isn't filled twice.
    let last = if y1 == y2 { y1 } else { y1 - 1 };

    // dy01 == 0 (flat top) makes this range empty
    let mut y = y0;
    while y <= last {
        let a = x0 + dx01 * (y - y0) / dy01;
        let b = x0 + dx02 * (y - y0) / dy02;
        fill_between(surface, a, b, y, brightness);
        y += 1;
    }

    // dy12 == 0 only when y1 == y2, in which case y > y2 here
    while y <= y2 {
        let a = x1 + dx12 * (y - y1) / dy12;
        let b = x0 + dx02 * (y - y0) / dy02;
        fill_between(surface, a, b, y, brightness);
        y += 1;
    }
}

fn fill_between<S: PixelSurface + ?Sized>(surface: &mut S, a: i32, b: i32, y: i32, brightness: u8) {
    let (a, b) = if a > b { (b, a) } else { (a, b) };
    span(surface, a, y, b - a + 1, brightness);
}

#[cfg(test)]
mod tests {
    use super::super::testing::Canvas;
    use super::*;
    use alloc::collections::BTreeSet;
    use proptest::prelude::*;

    #[test]
    fn test_outline_edges() {
        let mut canvas = Canvas::new(8, 8);
        draw_triangle(&mut canvas, 0, 0, 4, 0, 0, 4, 255);

        let lit = canvas.lit();
        for i in 0..=4 {
            assert!(lit.contains(&(i, 0)));
            assert!(lit.contains(&(0, i)));
            assert!(lit.contains(&(i, 4 - i)));
        }
        assert!(!lit.contains(&(1, 1)));
    }

    #[test]
    fn test_flat_top_fill() {
        let mut canvas = Canvas::new(8, 8);
        draw_filled_triangle(&mut canvas, 0, 0, 4, 0, 0, 4, 255);

        let mut expected = BTreeSet::new();
        for y in 0..=4u8 {
            for x in 0..=(4 - y) {
                expected.insert((x, y));
            }
        }
        assert_eq!(canvas.lit(), expected);
    }

    #[test]
    fn test_flat_bottom_fill() {
        let mut canvas = Canvas::new(8, 8);
        draw_filled_triangle(&mut canvas, 2, 0, 0, 2, 4, 2, 255);

        let mut expected = BTreeSet::new();
        expected.insert((2, 0));
        for x in 1..=3 {
            expected.insert((x, 1));
        }
        for x in 0..=4 {
            expected.insert((x, 2));
        }
        assert_eq!(canvas.lit(), expected);
    }

    #[test]
    fn test_each_row_filled_once() {
        let mut canvas = Canvas::new(16, 16);
        draw_filled_triangle(&mut canvas, 1, 1, 12, 5, 3, 14, 255);

        let written = canvas.writes.len();
        assert_eq!(written, canvas.written().len());
    }

    #[test]
    fn test_horizontal_degenerate() {
        let mut canvas = Canvas::new(8, 8);
        draw_filled_triangle(&mut canvas, 5, 3, 1, 3, 3, 3, 255);

        let expected: BTreeSet<_> = (1..=5).map(|x| (x, 3)).collect();
        assert_eq!(canvas.lit(), expected);
    }

    #[test]
    fn test_single_point() {
        let mut canvas = Canvas::new(8, 8);
        draw_filled_triangle(&mut canvas, 2, 2, 2, 2, 2, 2, 7);
        assert_eq!(canvas.writes.as_slice(), &[(2, 2, 7)]);
    }

    #[test]
    fn test_vertex_order_does_not_matter() {
        let mut a = Canvas::new(16, 16);
        let mut b = Canvas::new(16, 16);
        draw_filled_triangle(&mut a, 0, 0, 10, 4, 3, 12, 255);
        draw_filled_triangle(&mut b, 3, 12, 0, 0, 10, 4, 255);
        assert_eq!(a.lit(), b.lit());
    }

    proptest! {
        #[test]
        fn prop_fill_stays_in_bounding_box(
            x0 in 0u8..32, y0 in 0u8..32,
            x1 in 0u8..32, y1 in 0u8..32,
            x2 in 0u8..32, y2 in 0u8..32
        ) {
            let mut recorder = Canvas::recorder();
            draw_filled_triangle(&mut recorder, x0, y0, x1, y1, x2, y2, 255);

            let (min_x, max_x) = (x0.min(x1).min(x2), x0.max(x1).max(x2));
            let (min_y, max_y) = (y0.min(y1).min(y2), y0.max(y1).max(y2));
            for &(x, y, _) in &recorder.writes {
                prop_assert!((min_x..=max_x).contains(&x));
                prop_assert!((min_y..=max_y).contains(&y));
            }

            // Every vertex is covered and every row of the extent is touched
            let written = recorder.written();
            prop_assert!(written.contains(&(x0, y0)));
            prop_assert!(written.contains(&(x1, y1)));
            prop_assert!(written.contains(&(x2, y2)));
            for y in min_y..=max_y {
                prop_assert!(written.iter().any(|&(_, wy)| wy == y));
            }
        }

        #[test]
        fn prop_collinear_terminates_inside_box(x0 in 0u8..64, y0 in 0u8..64, k in 0u8..4) {
            // Three points on one line through (x0, y0)
            let (x1, y1) = (x0 + k, y0 + 2 * k);
            let (x2, y2) = (x0 + 2 * k, y0 + 4 * k);
            let mut recorder = Canvas::recorder();
            draw_filled_triangle(&mut recorder, x0, y0, x1, y1, x2, y2, 255);

            for &(x, y, _) in &recorder.writes {
                prop_assert!(x >= x0 && x <= x2);
                prop_assert!(y >= y0 && y <= y2);
            }
        }
    }
}
