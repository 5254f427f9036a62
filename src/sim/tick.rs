//! Per-frame simulation step.
//!
//! One call per rendered frame: integrate the bird, scroll/spawn/cull the
//! pipes, update the score, then check for collision. Elapsed time is an
//! explicit parameter so the whole step is deterministic under a synthetic
//! clock.

use std::time::Duration;

use rand::Rng;

use super::collision;
use super::state::{Game, Mode, Pipe};
use crate::config::Config;

/// Advance the game by one frame.
///
/// Physics, spawning, scoring and the collision check run only while
/// `Playing`; in the other modes the scene is frozen and only external
/// input can move the machine.
pub fn advance(game: &mut Game, cfg: &Config, now: Duration) {
    if game.mode != Mode::Playing {
        return;
    }

    integrate(game, cfg);
    update_pipes(game, cfg, now);

    if collision::hit_anything(&game.bird, &game.pipes, cfg) {
        game.mode = Mode::GameOver;
        log::info!(
            "crashed at y={:.1}, final score {}",
            game.bird.y,
            game.score
        );
    }
}

/// Semi-implicit Euler, one step per frame. The tilt is a clamped linear
/// function of velocity and has no effect on collision.
fn integrate(game: &mut Game, cfg: &Config) {
    let bird = &mut game.bird;
    bird.velocity += cfg.gravity;
    bird.y += bird.velocity;
    bird.rotation = (bird.velocity * 0.05).clamp(-0.5, 0.5);
}

/// Spawn, scroll, score and cull pipes.
fn update_pipes(game: &mut Game, cfg: &Config, now: Duration) {
    if now.saturating_sub(game.last_spawn) > cfg.spawn_interval {
        let gap_top = game
            .rng
            .random_range(cfg.min_pipe_height..cfg.max_gap_top());
        game.pipes.push(Pipe {
            x: cfg.surface_width,
            width: cfg.pipe_width,
            gap_top,
            passed: false,
        });
        game.last_spawn = now;
    }

    for pipe in &mut game.pipes {
        pipe.x -= cfg.pipe_speed;
        if !pipe.passed && pipe.right_edge() < game.bird.x {
            pipe.passed = true;
            game.score += 1;
            log::debug!("passed pipe, score {}", game.score);
        }
    }

    game.pipes.retain(|pipe| pipe.right_edge() >= 0.0);
}
