//! Scene painting: background, pipes, ground, bird, score and overlays.
//!
//! Draw order is fixed: background, pipes in spawn order, ground, then the
//! bird on top, then whichever HUD layer the current mode calls for.
//! Decorative pixel sizes are given in reference-surface units and scaled,
//! with a one-pixel floor so details survive small terminals.

use std::time::Duration;

use super::buffer::{PixelBuf, Rgb};
use super::digits;
use crate::config::{BASE_SURFACE, Config};
use crate::sim::{Bird, Game, Mode, Pipe};

// Grey handheld-LCD palette.
const SKY: Rgb = Rgb(0x8b, 0x8b, 0x8b);
const CLOUD: Rgb = Rgb(0x7a, 0x7a, 0x7a);
const PIPE_BODY: Rgb = Rgb(0x3a, 0x3a, 0x3a);
const PIPE_CAP: Rgb = Rgb(0x1a, 0x1a, 0x1a);
const PIPE_DETAIL: Rgb = Rgb(0x5a, 0x5a, 0x5a);
const GROUND: Rgb = Rgb(0x5a, 0x5a, 0x5a);
const GROUND_STUD: Rgb = Rgb(0x3a, 0x3a, 0x3a);
const GROUND_EDGE: Rgb = Rgb(0x1a, 0x1a, 0x1a);
const BIRD_BODY: Rgb = Rgb(0x1a, 0x1a, 0x1a);
const BIRD_WING: Rgb = Rgb(0x2e, 0x2e, 0x2e);
const BIRD_EYE: Rgb = Rgb(0xff, 0xff, 0xff);
const BIRD_BEAK: Rgb = Rgb(0x3a, 0x3a, 0x3a);
const TEXT: Rgb = Rgb(0xff, 0xff, 0xff);
const TEXT_SHADOW: Rgb = Rgb(0x1e, 0x1e, 0x1e);
const PANEL: Rgb = Rgb(0xc0, 0xc0, 0xc0);
const PANEL_EDGE: Rgb = Rgb(0x1a, 0x1a, 0x1a);

/// Paint one complete frame of the current state into `buf`.
pub fn draw(game: &Game, cfg: &Config, now: Duration, buf: &mut PixelBuf) {
    draw_sky(buf, cfg, now);
    for pipe in &game.pipes {
        draw_pipe(buf, cfg, pipe);
    }
    draw_ground(buf, cfg);
    draw_bird(buf, cfg, &game.bird, now);

    match game.mode {
        Mode::Playing => draw_score(buf, cfg, game.score),
        Mode::Start => draw_start_overlay(buf, cfg),
        Mode::GameOver => draw_game_over_overlay(buf, cfg, game.score),
    }
}

/// Scale a reference-space length, never collapsing below one pixel.
fn px(len: f32, scale: f32) -> i32 {
    ((len * scale) as i32).max(1)
}

fn draw_sky(buf: &mut PixelBuf, cfg: &Config, now: Duration) {
    buf.fill(SKY);

    // five clouds drifting left-to-right on a wrapping track
    let (sx, sy) = (cfg.scale_x(), cfg.scale_y());
    let drift = now.as_millis() as f32 / 50.0;
    for i in 0..5 {
        let track = (drift + i as f32 * 70.0) % (BASE_SURFACE + 40.0) - 20.0;
        let x = (track * sx) as i32;
        let y = ((30.0 + i as f32 * 25.0) * sy) as i32;
        buf.fill_rect(x, y, px(12.0, sx), px(6.0, sy), CLOUD);
        buf.fill_rect(x + px(4.0, sx), y - px(4.0, sy), px(8.0, sx), px(6.0, sy), CLOUD);
    }
}

fn draw_pipe(buf: &mut PixelBuf, cfg: &Config, pipe: &Pipe) {
    let (sx, sy) = (cfg.scale_x(), cfg.scale_y());
    let x = pipe.x as i32;
    let w = pipe.width as i32;
    let gap_top = pipe.gap_top as i32;
    let gap_bot = (pipe.gap_top + cfg.pipe_gap) as i32;

    // solid segments above and below the gap
    buf.fill_rect(x, 0, w, gap_top, PIPE_BODY);
    buf.fill_rect(x, gap_bot, w, cfg.surface_height as i32 - gap_bot, PIPE_BODY);

    // wider dark cap band at each gap lip
    let cap_ext = px(2.0, sx);
    let cap_h = px(8.0, sy).max(2);
    buf.fill_rect(x - cap_ext, gap_top - cap_h, w + 2 * cap_ext, cap_h, PIPE_CAP);
    buf.fill_rect(x - cap_ext, gap_bot, w + 2 * cap_ext, cap_h, PIPE_CAP);

    // light dashes along the body side of each cap
    let step = px(4.0, sx).max(2);
    let dash_w = px(2.0, sx);
    let dash_h = px(4.0, sy);
    let mut i = 0;
    while i < w {
        buf.fill_rect(x + i, gap_top - cap_h - dash_h, dash_w, dash_h, PIPE_DETAIL);
        buf.fill_rect(x + i, gap_bot + cap_h, dash_w, dash_h, PIPE_DETAIL);
        i += step;
    }
}

fn draw_ground(buf: &mut PixelBuf, cfg: &Config) {
    let (sx, sy) = (cfg.scale_x(), cfg.scale_y());
    let w = buf.width() as i32;
    let gy = cfg.ground_y() as i32;
    let gh = cfg.ground_height as i32;

    buf.fill_rect(0, gy, w, gh, GROUND);

    // tile studs along the top of the band
    let step = px(8.0, sx).max(2);
    let stud_w = px(4.0, sx);
    let stud_h = px(4.0, sy);
    let mut i = 0;
    while i < w {
        buf.fill_rect(i, gy, stud_w, stud_h, GROUND_STUD);
        i += step;
    }

    // dark top border
    buf.fill_rect(0, gy, w, px(2.0, sy), GROUND_EDGE);
}

/// Draw the bird rotated about its own center.
///
/// Output pixels around the center are rotated back into sprite space and
/// classified against the sprite's rects (beak, eye, wing, body, in paint
/// order priority). Sprite geometry is the reference 12 px bird scaled to
/// `bird_size`.
fn draw_bird(buf: &mut PixelBuf, cfg: &Config, bird: &Bird, now: Duration) {
    let s = cfg.bird_size / 12.0;
    let half = cfg.bird_size / 2.0;
    let wing_off = (now.as_millis() as f32 / 150.0).sin() * 2.0 * s;
    let (sin, cos) = bird.rotation.sin_cos();

    // the beak pokes 2 px (reference) past the body
    let reach = (half + 3.0 * s).ceil() as i32;
    let cx = bird.x as i32;
    let cy = bird.y as i32;

    for dy in -reach..=reach {
        for dx in -reach..=reach {
            // inverse-rotate the output offset into sprite space
            let lx = dx as f32 * cos + dy as f32 * sin;
            let ly = -(dx as f32) * sin + dy as f32 * cos;

            let color = if in_rect(lx, ly, half - 2.0 * s, -s, 4.0 * s, 2.0 * s) {
                Some(BIRD_BEAK)
            } else if in_rect(lx, ly, s, -3.0 * s, 3.0 * s, 3.0 * s) {
                Some(BIRD_EYE)
            } else if in_rect(lx, ly, -4.0 * s, -4.0 * s + wing_off, 8.0 * s, 4.0 * s) {
                Some(BIRD_WING)
            } else if in_rect(lx, ly, -half, -half, cfg.bird_size, cfg.bird_size) {
                Some(BIRD_BODY)
            } else {
                None
            };
            if let Some(c) = color {
                buf.set(cx + dx, cy + dy, c);
            }
        }
    }
}

fn in_rect(x: f32, y: f32, rx: f32, ry: f32, rw: f32, rh: f32) -> bool {
    x >= rx && x < rx + rw && y >= ry && y < ry + rh
}

fn draw_score(buf: &mut PixelBuf, cfg: &Config, score: u32) {
    let y = px(4.0, cfg.scale_y()).max(2);
    digits::draw_number(buf, buf.width() as i32 / 2, y, score, TEXT, Some(TEXT_SHADOW));
}

/// Blocky fake-text strip: one 3x3 block per character, spaces skipped.
fn prompt_blocks(buf: &mut PixelBuf, cx: i32, y: i32, text: &str, c: Rgb) {
    let total_w = text.len() as i32 * 4;
    let start_x = cx - total_w / 2;
    for (i, ch) in text.chars().enumerate() {
        if ch == ' ' {
            continue;
        }
        buf.fill_rect(start_x + i as i32 * 4, y, 3, 3, c);
    }
}

fn draw_start_overlay(buf: &mut PixelBuf, cfg: &Config) {
    let s = cfg.scale_y();
    let cx = buf.width() as i32 / 2;
    let cy = buf.height() as i32 / 4;

    // title banner: one solid block per letter
    let title = "FLAPJACK";
    let char_w = px(4.0, s).max(3);
    let char_h = px(6.0, s).max(4);
    let start_x = cx - title.len() as i32 * char_w / 2;
    for i in 0..title.len() as i32 {
        let bx = start_x + i * char_w;
        buf.fill_rect(bx, cy, char_w - 1, char_h, PIPE_CAP);
        buf.fill_rect(bx, cy, char_w - 1, 1, BIRD_WING);
    }

    prompt_blocks(buf, cx, cy + char_h + px(4.0, s), "PRESS SPACE", TEXT);
}

fn draw_game_over_overlay(buf: &mut PixelBuf, cfg: &Config, score: u32) {
    buf.dim();

    let (sx, sy) = (cfg.scale_x(), cfg.scale_y());
    let cx = buf.width() as i32 / 2;
    let cy = buf.height() as i32 / 2;
    let panel_w = px(100.0, sx).max(40);
    let panel_h = px(56.0, sy).max(22);
    let x = cx - panel_w / 2;
    let y = cy - panel_h / 2;

    buf.fill_rect(x - 1, y - 1, panel_w + 2, panel_h + 2, PANEL_EDGE);
    buf.fill_rect(x, y, panel_w, panel_h, PANEL);

    // final score, then a restart prompt
    digits::draw_number(buf, cx, y + px(8.0, sy), score, PIPE_CAP, None);
    prompt_blocks(buf, cx, y + panel_h - px(10.0, sy).max(5), "PRESS SPACE", PIPE_BODY);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Game;

    fn frame(game: &Game, cfg: &Config) -> PixelBuf {
        let mut buf = PixelBuf::new(
            cfg.surface_width as usize,
            cfg.surface_height as usize,
            SKY,
        );
        draw(game, cfg, Duration::from_millis(1234), &mut buf);
        buf
    }

    fn count(buf: &PixelBuf, c: Rgb) -> usize {
        let mut n = 0;
        for y in 0..buf.height() {
            for x in 0..buf.width() {
                if buf.get(x, y) == c {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn bird_is_drawn_on_top_of_everything() {
        let cfg = Config::default();
        let mut game = Game::new(&cfg, 0);
        game.start(&cfg, Duration::ZERO);
        // park a pipe segment right behind the bird
        game.pipes.push(Pipe {
            x: cfg.bird_x - cfg.pipe_width / 2.0,
            width: cfg.pipe_width,
            gap_top: 200.0,
            passed: false,
        });
        let buf = frame(&game, &cfg);
        // the bird body center pixel wins over the pipe body
        let c = buf.get(cfg.bird_x as usize, cfg.initial_bird_y() as usize);
        assert!(c == BIRD_BODY || c == BIRD_WING || c == BIRD_EYE);
    }

    #[test]
    fn ground_band_covers_the_bottom() {
        let cfg = Config::default();
        let game = Game::new(&cfg, 0);
        let buf = frame(&game, &cfg);
        let below = cfg.ground_y() as usize + 3;
        let c = buf.get(5, below);
        assert!(c == GROUND || c == GROUND_STUD || c == GROUND_EDGE);
    }

    #[test]
    fn score_appears_only_while_playing() {
        let cfg = Config::default();
        let mut game = Game::new(&cfg, 0);
        // start screen: no white score digits at the top
        let buf = frame(&game, &cfg);
        let top_white: usize = (0..buf.width())
            .filter(|&x| buf.get(x, 4) == TEXT || buf.get(x, 5) == TEXT)
            .count();
        assert_eq!(top_white, 0);

        game.start(&cfg, Duration::ZERO);
        let buf = frame(&game, &cfg);
        let top_white: usize = (0..buf.width())
            .filter(|&x| buf.get(x, 4) == TEXT || buf.get(x, 5) == TEXT)
            .count();
        assert!(top_white > 0);
    }

    #[test]
    fn game_over_dims_the_sky() {
        let cfg = Config::default();
        let mut game = Game::new(&cfg, 0);
        game.start(&cfg, Duration::ZERO);
        game.mode = Mode::GameOver;
        let buf = frame(&game, &cfg);
        assert_eq!(count(&buf, SKY), 0, "every sky pixel is dimmed or covered");
        assert!(count(&buf, SKY.dimmed()) > 0);
        assert!(count(&buf, PANEL) > 0);
    }
}
