//! An 8x8 bitmap font covering space, `A`-`Z` and `0`-`9`.
//!
//! Each glyph is 8 column bytes, left to right. The table below is drawn with the top row in the
//! most significant bit, which is upside down for the SSD1306 (top row in bit 0), so the glyphs
//! handed out are the bit-reversed copy computed at compile time.

/// Number of glyphs in the font.
pub const GLYPH_COUNT: usize = 37;

#[cfg_attr(rustfmt, rustfmt_skip)]
const FONT: [[u8; 8]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x1e, 0x28, 0x48, 0x88, 0x48, 0x28, 0x1e, 0x00], // A
    [0xfe, 0x92, 0x92, 0x92, 0x92, 0x92, 0x6c, 0x00], // B
    [0x7c, 0x82, 0x82, 0x82, 0x82, 0x82, 0x44, 0x00], // C
    [0xfe, 0x82, 0x82, 0x82, 0x82, 0x44, 0x38, 0x00], // D
    [0xfe, 0x92, 0x92, 0x92, 0x92, 0x82, 0x82, 0x00], // E
    [0xfe, 0x90, 0x90, 0x90, 0x90, 0x80, 0x80, 0x00], // F
    [0x7c, 0x82, 0x82, 0x82, 0x8a, 0x8a, 0x4e, 0x00], // G
    [0xfe, 0x10, 0x10, 0x10, 0x10, 0x10, 0xfe, 0x00], // H
    [0x00, 0x00, 0x82, 0xfe, 0x82, 0x00, 0x00, 0x00], // I
    [0x04, 0x02, 0x02, 0x82, 0xfc, 0x80, 0x80, 0x00], // J
    [0xfe, 0x10, 0x10, 0x28, 0x44, 0x82, 0x00, 0x00], // K
    [0xfe, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x00], // L
    [0xfe, 0x40, 0x20, 0x10, 0x20, 0x40, 0xfe, 0x00], // M
    [0xfe, 0x40, 0x20, 0x10, 0x08, 0x04, 0xfe, 0x00], // N
    [0x7c, 0x82, 0x82, 0x82, 0x82, 0x82, 0x7c, 0x00], // O
    [0xfe, 0x90, 0x90, 0x90, 0x90, 0x90, 0x60, 0x00], // P
    [0x7c, 0x82, 0x82, 0x8a, 0x84, 0x7a, 0x00, 0x00], // Q
    [0xfe, 0x90, 0x90, 0x98, 0x94, 0x92, 0x60, 0x00], // R
    [0x64, 0x92, 0x92, 0x92, 0x92, 0x92, 0x4c, 0x00], // S
    [0x80, 0x80, 0x80, 0xfe, 0x80, 0x80, 0x80, 0x00], // T
    [0xfc, 0x02, 0x02, 0x02, 0x02, 0x02, 0xfc, 0x00], // U
    [0xf0, 0x08, 0x04, 0x02, 0x04, 0x08, 0xf0, 0x00], // V
    [0xfe, 0x04, 0x08, 0x10, 0x08, 0x04, 0xfe, 0x00], // W
    [0x82, 0x44, 0x28, 0x10, 0x28, 0x44, 0x82, 0x00], // X
    [0x80, 0x40, 0x20, 0x1e, 0x20, 0x40, 0x80, 0x00], // Y
    [0x82, 0x86, 0x8a, 0x92, 0xa2, 0xc2, 0x82, 0x00], // Z
    [0x00, 0x7c, 0x8a, 0x92, 0xa2, 0x7c, 0x00, 0x00], // 0
    [0x00, 0x00, 0x42, 0xfe, 0x02, 0x00, 0x00, 0x00], // 1
    [0x00, 0x46, 0x8a, 0x92, 0x92, 0x62, 0x00, 0x00], // 2
    [0x00, 0x44, 0x82, 0x92, 0x92, 0x6c, 0x00, 0x00], // 3
    [0x00, 0x18, 0x28, 0x48, 0xfe, 0x08, 0x00, 0x00], // 4
    [0x00, 0xf4, 0x92, 0x92, 0x92, 0x8c, 0x00, 0x00], // 5
    [0x00, 0x7c, 0x92, 0x92, 0x92, 0x4c, 0x00, 0x00], // 6
    [0x00, 0x80, 0x8e, 0x90, 0xa0, 0xc0, 0x00, 0x00], // 7
    [0x00, 0x6c, 0x92, 0x92, 0x92, 0x6c, 0x00, 0x00], // 8
    [0x00, 0x64, 0x92, 0x92, 0x92, 0x7c, 0x00, 0x00], // 9
];

const fn flip_rows(font: &[[u8; 8]; GLYPH_COUNT]) -> [[u8; 8]; GLYPH_COUNT] {
    let mut out = [[0u8; 8]; GLYPH_COUNT];
    let mut g = 0;
    while g < GLYPH_COUNT {
        let mut col = 0;
        while col < 8 {
            out[g][col] = font[g][col].reverse_bits();
            col += 1;
        }
        g += 1;
    }
    out
}

/// The font in display RAM order: top row in bit 0.
pub static GLYPHS: [[u8; 8]; GLYPH_COUNT] = flip_rows(&FONT);

/// Index of the glyph for `ch`, ignoring case. Space is 0, `A`-`Z` are 1-26 and `0`-`9` are
/// 27-36. Anything the font lacks maps to the blank glyph at 0.
pub fn glyph_index(ch: char) -> usize {
    match ch.to_ascii_uppercase() {
        c @ 'A'..='Z' => (c as u8 - b'A') as usize + 1,
        c @ '0'..='9' => (c as u8 - b'0') as usize + 27,
        _ => 0,
    }
}

/// The column bytes for `ch`, top row in bit 0.
pub fn glyph(ch: char) -> &'static [u8; 8] {
    &GLYPHS[glyph_index(ch)]
}
