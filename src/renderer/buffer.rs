//! RGB pixel buffer presented with Unicode half-blocks.
//!
//! One terminal cell carries two vertically stacked pixels via `▀`, so a
//! cols x rows terminal yields a cols x (rows * 2) surface. `present`
//! re-emits colors only when they change between cells, which keeps the
//! escape stream short enough for full-screen redraws at 30 fps.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Half-brightness version, used to dim the scene under an overlay.
    pub fn dimmed(self) -> Rgb {
        Rgb(self.0 / 2, self.1 / 2, self.2 / 2)
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb {
            r: c.0,
            g: c.1,
            b: c.2,
        }
    }
}

pub struct PixelBuf {
    w: usize,
    /// Pixel height, always twice the terminal row count.
    h: usize,
    px: Vec<Rgb>,
}

impl PixelBuf {
    pub fn new(w: usize, h: usize, fill: Rgb) -> Self {
        Self {
            w,
            h,
            px: vec![fill; w * h],
        }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    pub fn resize(&mut self, w: usize, h: usize, fill: Rgb) {
        self.w = w;
        self.h = h;
        self.px.clear();
        self.px.resize(w * h, fill);
    }

    /// Out-of-bounds writes are silently clipped.
    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    pub fn fill(&mut self, c: Rgb) {
        self.px.fill(c);
    }

    /// Darken every pixel; the scene stays visible under overlay panels.
    pub fn dim(&mut self) {
        for px in &mut self.px {
            *px = px.dimmed();
        }
    }

    /// Write the buffer to the terminal, two pixels per cell. Colors are
    /// tracked across cells and only re-queued on change.
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);

                if top == bot {
                    // one flat cell; only the background matters for a space
                    if bg != Some(top) {
                        queue!(out, style::SetBackgroundColor(top.into()))?;
                        bg = Some(top);
                    }
                    queue!(out, style::Print(' '))?;
                } else {
                    if fg != Some(top) {
                        queue!(out, style::SetForegroundColor(top.into()))?;
                        fg = Some(top);
                    }
                    if bg != Some(bot) {
                        queue!(out, style::SetBackgroundColor(bot.into()))?;
                        bg = Some(bot);
                    }
                    queue!(out, style::Print('\u{2580}'))?; // upper half block
                }
            }
            if row < rows - 1 {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                fg = None;
                bg = None;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}
