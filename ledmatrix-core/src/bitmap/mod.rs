//! Picture blitting

pub mod assets;

pub use assets::{Picture, PICTURES, PICTURE_HEIGHT, PICTURE_LEN, PICTURE_WIDTH};

use crate::raster::plot;
use crate::traits::PixelSurface;

/// Copy an `l` x `h` row-major brightness image onto the canvas at `(x0, y0)`
///
/// Every source byte becomes one write, zeros included, so the target area
/// is fully replaced. An image shorter than `l * h` bytes is drawn as far as
/// it goes.
pub fn draw_picture<S: PixelSurface + ?Sized>(
    surface: &mut S,
    x0: u8,
    y0: u8,
    l: u8,
    h: u8,
    image: &[u8],
) {
    if l == 0 {
        return;
    }
    let rows = image.chunks(l as usize).take(h as usize);
    for (row, pixels) in rows.enumerate() {
        for (col, &brightness) in pixels.iter().enumerate() {
            plot(
                surface,
                x0 as i32 + col as i32,
                y0 as i32 + row as i32,
                brightness,
            );
        }
    }
}

/// Draw one of the 8x8 pictures with its top-left corner at `(x0, y0)`
pub fn draw_builtin<S: PixelSurface + ?Sized>(surface: &mut S, x0: u8, y0: u8, picture: &Picture) {
    draw_picture(
        surface,
        x0,
        y0,
        PICTURE_WIDTH as u8,
        PICTURE_HEIGHT as u8,
        picture,
    );
}

#[cfg(test)]
mod tests {
    use super::assets::{HEART, TICK};
    use super::*;
    use crate::raster::testing::Canvas;

    #[test]
    fn test_every_asset_round_trips() {
        for picture in PICTURES.iter() {
            let mut canvas = Canvas::new(8, 8);
            canvas.fill_screen(7);
            draw_builtin(&mut canvas, 0, 0, picture);

            for y in 0..8u8 {
                for x in 0..8u8 {
                    let idx = y as usize * PICTURE_WIDTH + x as usize;
                    assert_eq!(canvas.get_pixel(x, y), picture[idx]);
                }
            }
        }
    }

    #[test]
    fn test_one_write_per_byte() {
        let mut canvas = Canvas::new(8, 8);
        draw_builtin(&mut canvas, 0, 0, &HEART);
        assert_eq!(canvas.writes.len(), PICTURE_LEN);
    }

    #[test]
    fn test_offset_blit() {
        let mut canvas = Canvas::new(16, 16);
        draw_builtin(&mut canvas, 4, 2, &TICK);

        // Frame of the tick picture
        assert_eq!(canvas.get_pixel(4, 2), 0xFF);
        assert_eq!(canvas.get_pixel(11, 9), 0xFF);
        assert_eq!(canvas.get_pixel(5, 3), 0x00);
        assert_eq!(canvas.get_pixel(3, 2), 0);
    }

    #[test]
    fn test_arbitrary_size_and_levels() {
        let image = [1, 2, 3, 4, 5, 6];
        let mut canvas = Canvas::new(4, 4);
        draw_picture(&mut canvas, 1, 1, 3, 2, &image);

        assert_eq!(canvas.get_pixel(1, 1), 1);
        assert_eq!(canvas.get_pixel(3, 1), 3);
        assert_eq!(canvas.get_pixel(1, 2), 4);
        assert_eq!(canvas.get_pixel(3, 2), 6);
    }

    #[test]
    fn test_short_image_stops_early() {
        let image = [9, 9, 9, 9];
        let mut canvas = Canvas::new(4, 4);
        draw_picture(&mut canvas, 0, 0, 3, 3, &image);
        assert_eq!(canvas.writes.len(), 4);

        canvas.writes.clear();
        draw_picture(&mut canvas, 0, 0, 0, 3, &image);
        assert!(canvas.writes.is_empty());
    }
}
