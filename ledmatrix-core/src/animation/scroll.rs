//! Right-to-left scrolling text

use embedded_hal::delay::DelayNs;

use crate::text::{draw_string_at, text_width};
use crate::traits::PixelSurface;

/// Number of frames [`running_text`] shows on a canvas `width` pixels wide
pub fn scroll_frames(width: u8, text: &str) -> usize {
    width as usize + text_width(text)
}

/// Scroll `text` leftwards, starting with its first column at `x`
///
/// Frame `i` draws the string at column `x - i`, waits `step_speed` ms and
/// erases it again by redrawing at brightness 0. Runs for
/// [`scroll_frames`] frames; columns pushed past the left edge are dropped.
/// Pixels the text overlaps are left off afterwards.
#[allow(clippy::too_many_arguments)]
pub fn running_text<S, D>(
    surface: &mut S,
    delay: &mut D,
    width: u8,
    x: u8,
    y: u8,
    text: &str,
    brightness: u8,
    step_speed: u16,
) where
    S: PixelSurface + ?Sized,
    D: DelayNs + ?Sized,
{
    let frames = scroll_frames(width, text);
    debug!("running text over {} frames", frames);

    for i in 0..frames {
        let column = x as i32 - i as i32;
        draw_string_at(surface, column, y as i32, text, brightness);
        delay.delay_ms(step_speed as u32);
        draw_string_at(surface, column, y as i32, text, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingDelay;
    use super::*;
    use crate::raster::testing::Canvas;

    #[test]
    fn test_single_char_frame_count() {
        let mut canvas = Canvas::new(8, 8);
        let mut delay = RecordingDelay::default();

        running_text(&mut canvas, &mut delay, 8, 7, 1, "A", 255, 50);

        assert_eq!(scroll_frames(8, "A"), 12);
        assert_eq!(delay.calls_ms.len(), 12);
        assert!(delay.calls_ms.iter().all(|&ms| ms == 50));
    }

    #[test]
    fn test_canvas_is_dark_afterwards() {
        let mut canvas = Canvas::new(16, 8);
        let mut delay = RecordingDelay::default();

        running_text(&mut canvas, &mut delay, 16, 15, 0, "HI!", 200, 1);

        assert!(canvas.lit().is_empty());
        assert!(canvas.written().contains(&(0, 0)));
    }

    #[test]
    fn test_first_frame_at_start_column() {
        let mut canvas = Canvas::new(8, 8);
        let mut delay = RecordingDelay::default();

        running_text(&mut canvas, &mut delay, 8, 4, 0, "1", 255, 1);

        // '1' lights its right column only
        assert_eq!(canvas.writes.first(), Some(&(6, 0, 255)));
    }

    #[test]
    fn test_empty_text_still_waits_per_column() {
        let mut canvas = Canvas::new(8, 8);
        let mut delay = RecordingDelay::default();

        running_text(&mut canvas, &mut delay, 8, 7, 0, "", 255, 3);

        assert_eq!(delay.calls_ms.len(), 8);
        assert!(canvas.writes.is_empty());
    }
}
