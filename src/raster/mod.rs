//! Software drawing into a caller-owned pixel buffer, in the byte layout the SSD1306 uses in
//! horizontal addressing mode: byte `(y / 8) * width + x` holds column `x` of page `y / 8`, and bit
//! `y % 8` of that byte is pixel `(x, y)`, set for lit. A buffer drawn here can be handed straight
//! to `Display::render_frame`.
//!
//! Nothing in here touches the display.

pub mod font;

use crate::config::PanelSize;
use crate::display::PixelCoord;
use crate::error::Error;

pub use self::font::glyph_index;

/// Width and height of a glyph cell, in pixels.
pub const GLYPH_SIZE: i16 = 8;

/// A drawing surface over a full-panel pixel buffer.
pub struct Canvas<'buf> {
    buf: &'buf mut [u8],
    size: PanelSize,
}

impl<'buf> Canvas<'buf> {
    /// Wrap `buf`, which must be exactly `size.buffer_len()` bytes. The contents are kept.
    pub fn new(buf: &'buf mut [u8], size: PanelSize) -> Result<Self, Error> {
        if buf.len() != size.buffer_len() {
            return Err(Error::BufferSizeMismatch);
        }
        Ok(Canvas { buf, size })
    }

    pub fn size(&self) -> PanelSize {
        self.size
    }

    /// The underlying buffer, ready to render.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..]
    }

    /// Flat byte index and bit mask of a pixel. Panics if the pixel is off the panel.
    fn locate(&self, p: PixelCoord) -> (usize, u8) {
        let PixelCoord(x, y) = p;
        assert!(
            x >= 0 && x < self.size.width() as i16 && y >= 0 && y < self.size.height() as i16,
            "pixel ({}, {}) outside the panel",
            x,
            y
        );
        let idx = (y as usize / 8) * self.size.width() as usize + x as usize;
        (idx, 1 << (y % 8))
    }

    /// Light or clear one pixel, leaving the other seven rows sharing its byte alone.
    ///
    /// # Panics
    ///
    /// If `p` is outside the panel.
    pub fn set_pixel(&mut self, p: PixelCoord, on: bool) {
        let (idx, mask) = self.locate(p);
        if on {
            self.buf[idx] |= mask;
        } else {
            self.buf[idx] &= !mask;
        }
    }

    /// Whether a pixel is lit.
    ///
    /// # Panics
    ///
    /// If `p` is outside the panel.
    pub fn pixel(&self, p: PixelCoord) -> bool {
        let (idx, mask) = self.locate(p);
        self.buf[idx] & mask != 0
    }

    /// Light or clear every pixel.
    pub fn fill(&mut self, on: bool) {
        let byte = if on { 0xFF } else { 0x00 };
        for b in self.buf.iter_mut() {
            *b = byte;
        }
    }

    pub fn clear(&mut self) {
        self.fill(false)
    }

    /// Draw a line between two pixels, both included, with Bresenham's algorithm.
    ///
    /// Where the ideal line passes exactly halfway between two pixels the error term breaks the
    /// tie the same way for both axes, so swapping the endpoints can move such pixels by one.
    ///
    /// # Panics
    ///
    /// If any pixel of the line is outside the panel.
    pub fn draw_line(&mut self, from: PixelCoord, to: PixelCoord, on: bool) {
        let (mut x, mut y) = (from.0 as i32, from.1 as i32);
        let (x1, y1) = (to.0 as i32, to.1 as i32);
        let dx = (x1 - x).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let dy = -(y1 - y).abs();
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(PixelCoord(x as i16, y as i16), on);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Copy the glyph for `ch` into the 8 columns starting at `at`.
    ///
    /// Glyphs only land on page boundaries: `at.1` is rounded down to a multiple of 8, and the
    /// glyph's column bytes replace whatever was there rather than being merged with it. Does
    /// nothing if the cell would not fit entirely on the panel.
    pub fn write_char(&mut self, at: PixelCoord, ch: char) {
        if !self.cell_fits(at) {
            return;
        }
        let start = (at.1 as usize / 8) * self.size.width() as usize + at.0 as usize;
        self.buf[start..start + GLYPH_SIZE as usize].copy_from_slice(font::glyph(ch));
    }

    /// Write `text` left to right from `at`, one 8-pixel cell per character, with the placement
    /// rules of `write_char`. Nothing is drawn if the first cell does not fit; characters running
    /// off the right edge are dropped.
    pub fn write_string(&mut self, at: PixelCoord, text: &str) {
        if !self.cell_fits(at) {
            return;
        }
        let mut x = at.0;
        for ch in text.chars() {
            if !self.cell_fits(PixelCoord(x, at.1)) {
                break;
            }
            self.write_char(PixelCoord(x, at.1), ch);
            x = x.saturating_add(GLYPH_SIZE);
        }
    }

    fn cell_fits(&self, at: PixelCoord) -> bool {
        let PixelCoord(x, y) = at;
        x >= 0
            && y >= 0
            && x <= self.size.width() as i16 - GLYPH_SIZE
            && y <= self.size.height() as i16 - GLYPH_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::vec::Vec;

    const SIZE: PanelSize = PanelSize::SIZE_128X32;

    fn lit(buf: &mut [u8]) -> HashSet<(i16, i16)> {
        let canvas = Canvas::new(buf, SIZE).unwrap();
        iproduct!(0..128i16, 0..32i16)
            .filter(|&(x, y)| canvas.pixel(PixelCoord(x, y)))
            .collect()
    }

    fn line(from: (i16, i16), to: (i16, i16)) -> Vec<u8> {
        let mut buf = vec![0u8; SIZE.buffer_len()];
        Canvas::new(&mut buf, SIZE).unwrap().draw_line(
            PixelCoord(from.0, from.1),
            PixelCoord(to.0, to.1),
            true,
        );
        buf
    }

    #[test]
    fn buffer_length_must_match() {
        let mut short = [0u8; 511];
        assert!(Canvas::new(&mut short, SIZE).is_err());
        let mut long = [0u8; 1024];
        assert_eq!(
            Canvas::new(&mut long, SIZE).err(),
            Some(Error::BufferSizeMismatch)
        );
        let mut full = [0u8; 1024];
        assert!(Canvas::new(&mut full, PanelSize::SIZE_128X64).is_ok());
    }

    #[test]
    fn pixel_layout() {
        let mut buf = [0u8; 512];
        let mut canvas = Canvas::new(&mut buf, SIZE).unwrap();
        canvas.set_pixel(PixelCoord(0, 0), true);
        canvas.set_pixel(PixelCoord(1, 7), true);
        canvas.set_pixel(PixelCoord(5, 8), true);
        canvas.set_pixel(PixelCoord(127, 31), true);
        assert_eq!(buf[0], 0x01);
        assert_eq!(buf[1], 0x80);
        assert_eq!(buf[128 + 5], 0x01);
        assert_eq!(buf[3 * 128 + 127], 0x80);
        assert_eq!(buf.iter().filter(|&&b| b != 0).count(), 4);
    }

    #[test]
    fn clear_pixel_keeps_neighbours() {
        let mut buf = [0xFFu8; 512];
        let mut canvas = Canvas::new(&mut buf, SIZE).unwrap();
        canvas.set_pixel(PixelCoord(3, 10), false);
        assert!(!canvas.pixel(PixelCoord(3, 10)));
        assert_eq!(buf[128 + 3], 0b1111_1011);
    }

    #[test]
    #[should_panic]
    fn set_pixel_out_of_bounds() {
        let mut buf = [0u8; 512];
        Canvas::new(&mut buf, SIZE)
            .unwrap()
            .set_pixel(PixelCoord(128, 0), true);
    }

    #[test]
    #[should_panic]
    fn set_pixel_negative() {
        let mut buf = [0u8; 512];
        Canvas::new(&mut buf, SIZE)
            .unwrap()
            .set_pixel(PixelCoord(0, -1), true);
    }

    #[test]
    fn fill_and_clear() {
        let mut buf = [0u8; 512];
        let mut canvas = Canvas::new(&mut buf, SIZE).unwrap();
        canvas.fill(true);
        assert!(canvas.as_bytes().iter().all(|&b| b == 0xFF));
        canvas.clear();
        assert!(canvas.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn line_pixels_match_bresenham() {
        let mut buf = line((0, 0), (5, 2));
        let expected: HashSet<_> = [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]
            .iter()
            .cloned()
            .collect();
        assert_eq!(lit(&mut buf), expected);

        let mut buf = line((2, 1), (4, 7));
        let expected: HashSet<_> = [(2, 1), (2, 2), (3, 3), (3, 4), (3, 5), (4, 6), (4, 7)]
            .iter()
            .cloned()
            .collect();
        assert_eq!(lit(&mut buf), expected);
    }

    #[test]
    fn line_ties_step_both_axes() {
        // Error term lands exactly on `dx`: x and y both advance.
        let mut buf = line((0, 0), (2, 1));
        let expected: HashSet<_> = [(0, 0), (1, 1), (2, 1)].iter().cloned().collect();
        assert_eq!(lit(&mut buf), expected);

        // Error term lands exactly on `dy`: x and y both advance.
        let mut buf = line((0, 0), (1, 2));
        let expected: HashSet<_> = [(0, 0), (1, 1), (1, 2)].iter().cloned().collect();
        assert_eq!(lit(&mut buf), expected);

        // Halves round away from the starting point, whichever end that is.
        let mut buf = line((6, 4), (0, 1));
        let expected: HashSet<_> = [(6, 4), (5, 3), (4, 3), (3, 2), (2, 2), (1, 1), (0, 1)]
            .iter()
            .cloned()
            .collect();
        assert_eq!(lit(&mut buf), expected);
    }

    /// Pixels of a line, stepping along the major axis and rounding the minor coordinate to the
    /// nearest pixel.
    fn model_line(from: (i16, i16), to: (i16, i16)) -> HashSet<(i16, i16)> {
        let (x0, y0) = (from.0 as i64, from.1 as i64);
        let (x1, y1) = (to.0 as i64, to.1 as i64);
        let (dx, dy) = ((x1 - x0).abs(), (y1 - y0).abs());
        let (sx, sy) = (if x0 < x1 { 1 } else { -1 }, if y0 < y1 { 1 } else { -1 });
        // Minor offset after `i` major steps is `i * minor / major`, rounded to nearest with
        // exact halves going away from the start.
        let round = |num: i64, den: i64| (2 * num + den) / (2 * den);
        (0..=dx.max(dy))
            .map(|i| {
                if dx >= dy {
                    (x0 + sx * i, y0 + sy * round(i * dy, dx.max(1)))
                } else {
                    (x0 + sx * round(i * dx, dy), y0 + sy * i)
                }
            })
            .map(|(x, y)| (x as i16, y as i16))
            .collect()
    }

    #[test]
    fn single_point_line() {
        let mut buf = line((9, 9), (9, 9));
        let expected: HashSet<_> = [(9, 9)].iter().cloned().collect();
        assert_eq!(lit(&mut buf), expected);
    }

    #[test]
    fn straight_lines_are_symmetric() {
        for &(a, b) in [
            ((0, 0), (127, 0)),
            ((5, 31), (5, 0)),
            ((0, 0), (31, 31)),
            ((40, 3), (12, 31)),
            ((10, 3), (3, 10)),
        ]
        .iter()
        {
            assert_eq!(line(a, b), line(b, a));
        }
    }

    #[test]
    fn erase_line() {
        let mut buf = [0xFFu8; 512];
        let mut canvas = Canvas::new(&mut buf, SIZE).unwrap();
        canvas.draw_line(PixelCoord(0, 0), PixelCoord(127, 31), false);
        assert!(!canvas.pixel(PixelCoord(0, 0)));
        assert!(!canvas.pixel(PixelCoord(127, 31)));
        assert!(canvas.pixel(PixelCoord(127, 0)));
    }

    #[test]
    fn write_string_offsets() {
        let mut buf = [0u8; 512];
        Canvas::new(&mut buf, SIZE)
            .unwrap()
            .write_string(PixelCoord(5, 0), "AB");
        assert_eq!(&buf[5..13], font::glyph('A'));
        assert_eq!(&buf[13..21], font::glyph('B'));
        assert!(buf[..5].iter().all(|&b| b == 0));
        assert!(buf[21..].iter().all(|&b| b == 0));
    }

    #[test]
    fn write_char_snaps_to_page() {
        let mut buf = [0u8; 512];
        let mut canvas = Canvas::new(&mut buf, SIZE).unwrap();
        canvas.write_char(PixelCoord(5, 20), 'c');
        assert_eq!(&buf[2 * 128 + 5..2 * 128 + 13], font::glyph('C'));
    }

    #[test]
    fn write_char_overwrites_columns() {
        let mut buf = [0xFFu8; 512];
        let mut canvas = Canvas::new(&mut buf, SIZE).unwrap();
        canvas.write_char(PixelCoord(0, 0), ' ');
        assert_eq!(&buf[..8], &[0u8; 8]);
        assert_eq!(buf[8], 0xFF);
    }

    #[test]
    fn write_char_must_fit() {
        let mut buf = [0u8; 512];
        let mut canvas = Canvas::new(&mut buf, SIZE).unwrap();
        canvas.write_char(PixelCoord(121, 0), 'A');
        canvas.write_char(PixelCoord(0, 25), 'A');
        canvas.write_char(PixelCoord(-1, 0), 'A');
        canvas.write_char(PixelCoord(0, -8), 'A');
        assert!(buf.iter().all(|&b| b == 0));

        let mut canvas = Canvas::new(&mut buf, SIZE).unwrap();
        canvas.write_char(PixelCoord(120, 24), 'A');
        assert_eq!(&buf[3 * 128 + 120..], font::glyph('A'));
    }

    #[test]
    fn write_string_runs_off_right_edge() {
        let mut buf = [0u8; 512];
        Canvas::new(&mut buf, SIZE)
            .unwrap()
            .write_string(PixelCoord(112, 8), "XYZ");
        assert_eq!(&buf[128 + 112..128 + 120], font::glyph('X'));
        assert_eq!(&buf[128 + 120..256], font::glyph('Y'));
        // `Z` would start at column 128; nothing wraps onto the next page.
        assert!(buf[256..].iter().all(|&b| b == 0));
    }

    #[test]
    fn write_string_start_must_fit() {
        let mut buf = [0u8; 512];
        Canvas::new(&mut buf, SIZE)
            .unwrap()
            .write_string(PixelCoord(5, 30), "HELLO");
        assert!(buf.iter().all(|&b| b == 0));
    }

    proptest! {
        #[test]
        fn set_pixel_touches_one_bit(
            x in 0i16..128, y in 0i16..32, on in any::<bool>(), seed in any::<u8>(),
        ) {
            let mut buf = [seed; 512];
            let before = buf;
            let mut canvas = Canvas::new(&mut buf, SIZE).unwrap();
            canvas.set_pixel(PixelCoord(x, y), on);
            prop_assert_eq!(canvas.pixel(PixelCoord(x, y)), on);

            let idx = (y as usize / 8) * 128 + x as usize;
            let mask = 1u8 << (y % 8);
            for (i, (&a, &b)) in before.iter().zip(buf.iter()).enumerate() {
                if i == idx {
                    prop_assert_eq!(a & !mask, b & !mask);
                } else {
                    prop_assert_eq!(a, b);
                }
            }
        }

        #[test]
        fn line_endpoints_and_length(
            x0 in 0i16..128, y0 in 0i16..32, x1 in 0i16..128, y1 in 0i16..32,
        ) {
            let steps = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            for &(a, b) in [((x0, y0), (x1, y1)), ((x1, y1), (x0, y0))].iter() {
                let mut buf = line(a, b);
                let pixels = lit(&mut buf);
                prop_assert!(pixels.contains(&(x0, y0)));
                prop_assert!(pixels.contains(&(x1, y1)));
                prop_assert_eq!(pixels.len(), steps);
            }
        }

        #[test]
        fn line_matches_model(
            x0 in 0i16..128, y0 in 0i16..32, x1 in 0i16..128, y1 in 0i16..32,
        ) {
            let mut buf = line((x0, y0), (x1, y1));
            prop_assert_eq!(lit(&mut buf), model_line((x0, y0), (x1, y1)));
        }
    }
}
