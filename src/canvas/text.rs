//! Text metrics without a font rasterizer.
//!
//! Widths come from a proportional table of a sans-serif face in hundredths of
//! the average character width; characters outside printable ASCII count as
//! one full character.

/// Proportional widths of the printable ASCII characters `' '..='~'`.
#[rustfmt::skip]
const CHAR_WIDTHS: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Average character width relative to the font size
const CHAR_WIDTH_RATIO: f64 = 0.08 / 0.14;

/// Width of `text` in hundredths of an average character
pub fn proportional_length(text: &str) -> u32 {
    text.chars()
        .map(|c| {
            if (' '..='~').contains(&c) {
                CHAR_WIDTHS[(c as usize) - 0x20] as u32
            } else {
                100
            }
        })
        .sum()
}

/// Rendered width of `text` at `font_size`
pub fn text_width(text: &str, font_size: f64) -> f64 {
    proportional_length(text) as f64 * font_size * CHAR_WIDTH_RATIO * 0.01
}
