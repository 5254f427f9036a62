//! Terminal frontend: raw-mode setup, keyboard polling, frame pacing.
//!
//! This is the UI glue around the headless core. It owns the real clock
//! (frames are stamped with time since startup), maps keys onto the state
//! machine's explicit inputs, and presents the painted buffer. One
//! consistent primary-action mapping: Space/Up/Enter starts, jumps, or
//! restarts depending on the current mode; `q`/Esc quits.

use std::io::{self, stdout};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute, terminal,
};

use flapjack::config::Config;
use flapjack::renderer::{self, PixelBuf, Rgb};
use flapjack::sim::{self, Game, Mode};

/// ~30 fps, matching the reference per-frame tuning.
const FRAME: Duration = Duration::from_millis(33);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let (cols, rows) = terminal::size().context("query terminal size")?;
    let cfg = Config::for_surface(cols as f32, rows as f32 * 2.0)
        .context("terminal is too small to play in")?;
    log::info!(
        "starting on a {}x{} pixel surface",
        cfg.surface_width,
        cfg.surface_height
    );

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
    )?;

    let result = run(&mut out, cfg);

    // restore the terminal on every exit path before reporting anything
    execute!(
        out,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run(out: &mut io::Stdout, mut cfg: Config) -> anyhow::Result<()> {
    let mut game = Game::new(&cfg, wall_clock_seed());
    let mut buf = PixelBuf::new(
        cfg.surface_width as usize,
        cfg.surface_height as usize,
        Rgb(0, 0, 0),
    );
    let epoch = Instant::now();

    loop {
        let frame_start = Instant::now();
        let now = epoch.elapsed();

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        log::info!("quit with score {}", game.score);
                        return Ok(());
                    }
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => match game.mode {
                        Mode::Start => game.start(&cfg, now),
                        Mode::Playing => game.jump(&cfg),
                        Mode::GameOver => game.restart(&cfg, now),
                    },
                    _ => {}
                },
                Event::Resize(new_cols, new_rows) => {
                    match Config::for_surface(new_cols as f32, new_rows as f32 * 2.0) {
                        Ok(new_cfg) => {
                            cfg = new_cfg;
                            buf.resize(
                                cfg.surface_width as usize,
                                cfg.surface_height as usize,
                                Rgb(0, 0, 0),
                            );
                            // tuning changed under the bird; back to the start screen
                            game = Game::new(&cfg, wall_clock_seed());
                            log::info!(
                                "resized to {}x{}",
                                cfg.surface_width,
                                cfg.surface_height
                            );
                        }
                        Err(err) => log::warn!("ignoring resize: {err}"),
                    }
                }
                _ => {}
            }
        }

        sim::advance(&mut game, &cfg, now);
        renderer::draw(&game, &cfg, now, &mut buf);
        buf.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
