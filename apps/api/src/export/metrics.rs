//! Static Helvetica width table used to wrap exported text.
//!
//! Widths are in em units (glyph advance / 1000) for ASCII 0x20..=0x7E.
//! Index = (char as usize) - 32. Other characters use `AVERAGE_CHAR_WIDTH_EM`.

/// Millimetres per PostScript point.
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Fallback width for characters outside the table (width of a digit).
pub const AVERAGE_CHAR_WIDTH_EM: f32 = 0.556;

/// Slot layout:
/// ```text
/// [0]=sp [1]=! [2]=" [3]=# [4]=$ [5]=% [6]=& [7]=' [8]=( [9]=) [10]=* [11]=+
/// [12]=, [13]=- [14]=. [15]=/ [16..25]=0-9 [26]=: [27]=; [28]=< [29]== [30]=>
/// [31]=? [32]=@ [33..58]=A-Z [59]=[ [60]=\ [61]=] [62]=^ [63]=_ [64]=`
/// [65..90]=a-z [91]={ [92]=| [93]=} [94]=~
/// ```
#[rustfmt::skip]
const HELVETICA_WIDTHS: [f32; 95] = [
    0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, 0.333, 0.333, 0.389, 0.584,
    0.278, 0.333, 0.278, 0.278,
    0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556,
    0.278, 0.278, 0.584, 0.584, 0.584, 0.556, 1.015,
    0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, 0.722, 0.278, 0.500, 0.667, 0.556, 0.833,
    0.722, 0.778, 0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, 0.667, 0.667, 0.611,
    0.278, 0.278, 0.278, 0.469, 0.556, 0.333,
    0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, 0.556, 0.222, 0.222, 0.500, 0.222, 0.833,
    0.556, 0.556, 0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, 0.500, 0.500, 0.500,
    0.334, 0.260, 0.334, 0.584,
];

pub fn char_width_em(c: char) -> f32 {
    let code = c as usize;
    if (32..=126).contains(&code) {
        HELVETICA_WIDTHS[code - 32]
    } else {
        AVERAGE_CHAR_WIDTH_EM
    }
}

/// Rendered width of `s` in millimetres at `font_size_pt`.
pub fn text_width_mm(s: &str, font_size_pt: f32) -> f32 {
    let em: f32 = s.chars().map(char_width_em).sum();
    em * font_size_pt * MM_PER_PT
}
