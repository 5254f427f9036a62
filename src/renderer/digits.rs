//! 3x5 bitmap digit font for the score display.

use super::buffer::{PixelBuf, Rgb};

#[rustfmt::skip]
const GLYPHS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

pub const GLYPH_W: i32 = 3;
pub const GLYPH_H: i32 = 5;
/// Glyph width plus one pixel of spacing.
pub const ADVANCE: i32 = GLYPH_W + 1;

fn draw_digit(buf: &mut PixelBuf, x: i32, y: i32, d: u8, fg: Rgb, shadow: Option<Rgb>) {
    let glyph = &GLYPHS[d as usize];
    for row in 0..GLYPH_H {
        for col in 0..GLYPH_W {
            if glyph[(row * GLYPH_W + col) as usize] == 1 {
                if let Some(sc) = shadow {
                    buf.set(x + col + 1, y + row + 1, sc);
                }
                buf.set(x + col, y + row, fg);
            }
        }
    }
}

/// Draw `n` centered on `cx`, with an optional one-pixel drop shadow.
pub fn draw_number(buf: &mut PixelBuf, cx: i32, y: i32, n: u32, fg: Rgb, shadow: Option<Rgb>) {
    let s = n.to_string();
    let total_w = s.len() as i32 * ADVANCE - 1;
    let start_x = cx - total_w / 2;
    for (i, ch) in s.chars().enumerate() {
        let d = ch as u8 - b'0';
        draw_digit(buf, start_x + i as i32 * ADVANCE, y, d, fg, shadow);
    }
}
