//! Single-pixel moves

use embedded_hal::delay::DelayNs;

use crate::raster::directed_path;
use crate::traits::{PixelSurface, MAX_BRIGHTNESS};

/// Turn `(x0, y0)` off and `(x1, y1)` fully on
///
/// The brightness the source had is not carried over. When both points are
/// the same the pixel ends up lit.
pub fn move_pixel<S: PixelSurface + ?Sized>(surface: &mut S, x0: u8, y0: u8, x1: u8, y1: u8) {
    surface.draw_pixel(x0, y0, 0);
    surface.draw_pixel(x1, y1, MAX_BRIGHTNESS);
}

/// Slide a lit pixel from `(x0, y0)` to `(x1, y1)` along the line between
/// them
///
/// Each point of the path is lit, held for `step_speed` ms and turned off
/// again. The destination stays lit and is not followed by a delay, so a
/// path of `n` points takes `n - 1` steps.
#[allow(clippy::too_many_arguments)]
pub fn animate_pixel<S, D>(
    surface: &mut S,
    delay: &mut D,
    x0: u8,
    y0: u8,
    x1: u8,
    y1: u8,
    step_speed: u16,
) where
    S: PixelSurface + ?Sized,
    D: DelayNs + ?Sized,
{
    let path = directed_path(x0, y0, x1, y1);
    trace!("animating pixel over {} steps", path.len());

    let mut points = path.iter().peekable();
    while let Some(&(x, y)) = points.next() {
        surface.draw_pixel(x, y, MAX_BRIGHTNESS);
        if points.peek().is_none() {
            break;
        }
        delay.delay_ms(step_speed as u32);
        surface.draw_pixel(x, y, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingDelay;
    use super::*;
    use crate::raster::testing::Canvas;
    use alloc::collections::BTreeSet;
    use proptest::prelude::*;

    #[test]
    fn test_move_pixel_diagonal() {
        let mut canvas = Canvas::new(8, 8);
        canvas.draw_pixel(0, 0, 255);

        move_pixel(&mut canvas, 0, 0, 1, 1);

        assert_eq!(canvas.get_pixel(0, 0), 0);
        assert_eq!(canvas.get_pixel(1, 1), 255);
        assert_eq!(canvas.lit().len(), 1);
    }

    #[test]
    fn test_move_pixel_onto_itself() {
        let mut canvas = Canvas::new(4, 4);
        move_pixel(&mut canvas, 2, 2, 2, 2);
        assert_eq!(canvas.get_pixel(2, 2), 255);
    }

    #[test]
    fn test_animate_horizontal() {
        let mut canvas = Canvas::new(8, 8);
        let mut delay = RecordingDelay::default();

        animate_pixel(&mut canvas, &mut delay, 0, 3, 3, 3, 40);

        assert_eq!(delay.calls_ms.as_slice(), &[40, 40, 40]);
        assert_eq!(
            canvas.writes.as_slice(),
            &[
                (0, 3, 255),
                (0, 3, 0),
                (1, 3, 255),
                (1, 3, 0),
                (2, 3, 255),
                (2, 3, 0),
                (3, 3, 255),
            ]
        );
    }

    #[test]
    fn test_animate_travels_from_source() {
        let mut canvas = Canvas::new(8, 8);
        let mut delay = RecordingDelay::default();

        // Right to left, against the canonical walk order
        animate_pixel(&mut canvas, &mut delay, 5, 1, 0, 0, 1);

        assert_eq!(canvas.writes.first(), Some(&(5, 1, 255)));
        assert_eq!(canvas.writes.last(), Some(&(0, 0, 255)));
        let lit: BTreeSet<_> = [(0, 0)].into_iter().collect();
        assert_eq!(canvas.lit(), lit);
    }

    #[test]
    fn test_animate_in_place() {
        let mut canvas = Canvas::new(4, 4);
        let mut delay = RecordingDelay::default();

        animate_pixel(&mut canvas, &mut delay, 1, 1, 1, 1, 100);

        assert!(delay.calls_ms.is_empty());
        assert_eq!(canvas.get_pixel(1, 1), 255);
    }

    proptest! {
        #[test]
        fn prop_animation_leaves_only_destination(
            x0 in 0u8..16, y0 in 0u8..16,
            x1 in 0u8..16, y1 in 0u8..16
        ) {
            let mut canvas = Canvas::new(16, 16);
            let mut delay = RecordingDelay::default();

            animate_pixel(&mut canvas, &mut delay, x0, y0, x1, y1, 5);

            let steps = directed_path(x0, y0, x1, y1).len() - 1;
            prop_assert_eq!(delay.calls_ms.len(), steps);
            let expected: BTreeSet<_> = [(x1, y1)].into_iter().collect();
            prop_assert_eq!(canvas.lit(), expected);
        }
    }
}
