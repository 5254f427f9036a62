//! Game state and the start / playing / game-over machine.
//!
//! Everything the frame loop mutates lives in one `Game` value. Input
//! arrives as explicit method calls; `Start` and `GameOver` only ever leave
//! through those calls, while `Playing` additionally exits on collision
//! (see `tick::advance`).

use std::time::Duration;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::Config;

/// Current mode of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Start,
    Playing,
    GameOver,
}

/// The player entity. `x` never changes; the world scrolls past instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    /// Display tilt in radians, derived from velocity each frame.
    pub rotation: f32,
}

impl Bird {
    fn spawned(cfg: &Config) -> Self {
        Self {
            x: cfg.bird_x,
            y: cfg.initial_bird_y(),
            velocity: 0.0,
            rotation: 0.0,
        }
    }
}

/// A scrolling obstacle with a passable gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: f32,
    pub width: f32,
    /// Top edge of the passable gap.
    pub gap_top: f32,
    /// Set once the bird clears the right edge; guards the score increment.
    pub passed: bool,
}

impl Pipe {
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// Full game context, owned by the frame loop and mutated in place.
#[derive(Debug)]
pub struct Game {
    pub mode: Mode,
    pub bird: Bird,
    /// Insertion-ordered by spawn time; oldest pipe first.
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub(crate) last_spawn: Duration,
    pub(crate) rng: Pcg32,
}

impl Game {
    pub fn new(cfg: &Config, seed: u64) -> Self {
        Self {
            mode: Mode::Start,
            bird: Bird::spawned(cfg),
            pipes: Vec::new(),
            score: 0,
            last_spawn: Duration::ZERO,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Reinitialize bird, pipes and score, stamping the spawn clock so the
    /// first obstacle arrives one full interval into the run.
    fn reset(&mut self, cfg: &Config, now: Duration) {
        self.bird = Bird::spawned(cfg);
        self.pipes.clear();
        self.score = 0;
        self.last_spawn = now;
    }

    /// Begin a run from the start screen. No-op in any other mode.
    pub fn start(&mut self, cfg: &Config, now: Duration) {
        if self.mode != Mode::Start {
            return;
        }
        self.reset(cfg, now);
        self.mode = Mode::Playing;
        log::info!("run started");
    }

    /// Begin a fresh run after a game over. No-op in any other mode.
    pub fn restart(&mut self, cfg: &Config, now: Duration) {
        if self.mode != Mode::GameOver {
            return;
        }
        log::info!("restarting after a {}-point run", self.score);
        self.reset(cfg, now);
        self.mode = Mode::Playing;
    }

    /// Upward impulse. The impulse velocity replaces the current velocity
    /// outright; it does not accumulate. No-op unless playing.
    pub fn jump(&mut self, cfg: &Config) {
        if self.mode != Mode::Playing {
            return;
        }
        self.bird.velocity = cfg.jump_impulse;
    }
}
