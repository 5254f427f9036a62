//! Game tuning parameters.
//!
//! A `Config` is built once at startup and read-only afterwards. `Default`
//! is the reference tuning for a 280x280 surface; `for_surface` rescales it
//! so the game feels the same on whatever pixel surface the terminal gives
//! us. A config that would leave the spawner without a valid gap range is
//! rejected here, never discovered mid-game.

use std::time::Duration;

use thiserror::Error;

/// Surface edge length the reference tuning is calibrated for.
pub const BASE_SURFACE: f32 = 280.0;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("jump impulse must be upward (negative), got {0}")]
    DownwardJump(f32),
    #[error("spawn interval must be non-zero")]
    ZeroSpawnInterval,
    #[error(
        "no room to spawn: gap top range [{min:.1}, {max:.1}) is empty for a \
         {width:.0}x{height:.0} surface"
    )]
    NoSpawnRange {
        min: f32,
        max: f32,
        width: f32,
        height: f32,
    },
}

/// Immutable tuning record. Distances are surface pixels, speeds and
/// accelerations are per-frame, the spawn interval is wall-clock time.
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    /// Downward acceleration applied every frame.
    pub gravity: f32,
    /// Velocity assigned on a jump; negative is up.
    pub jump_impulse: f32,
    /// Horizontal obstacle speed.
    pub pipe_speed: f32,
    /// Vertical opening between a pipe's two segments.
    pub pipe_gap: f32,
    pub pipe_width: f32,
    /// Shortest allowed solid segment above or below the gap.
    pub min_pipe_height: f32,
    /// Wall-clock delay between obstacle spawns.
    pub spawn_interval: Duration,
    /// Side length of the (square) bird sprite.
    pub bird_size: f32,
    /// Fixed horizontal bird position; the world scrolls instead.
    pub bird_x: f32,
    pub ground_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: BASE_SURFACE,
            surface_height: BASE_SURFACE,
            gravity: 0.4,
            jump_impulse: -7.0,
            pipe_speed: 2.0,
            pipe_gap: 80.0,
            pipe_width: 30.0,
            min_pipe_height: 30.0,
            spawn_interval: Duration::from_millis(1800),
            bird_size: 12.0,
            bird_x: 50.0,
            ground_height: 20.0,
        }
    }
}

impl Config {
    /// Reference tuning rescaled to a `width` x `height` pixel surface.
    pub fn for_surface(width: f32, height: f32) -> Result<Self, ConfigError> {
        let base = Self::default();
        let sx = width / BASE_SURFACE;
        let sy = height / BASE_SURFACE;
        let cfg = Self {
            surface_width: width,
            surface_height: height,
            gravity: base.gravity * sy,
            jump_impulse: base.jump_impulse * sy,
            pipe_speed: base.pipe_speed * sx,
            pipe_gap: base.pipe_gap * sy,
            pipe_width: base.pipe_width * sx,
            min_pipe_height: base.min_pipe_height * sy,
            spawn_interval: base.spawn_interval,
            bird_size: base.bird_size * sy,
            bird_x: base.bird_x * sx,
            ground_height: base.ground_height * sy,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Fail fast on a record that could misbehave mid-game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("surface width", self.surface_width),
            ("surface height", self.surface_height),
            ("gravity", self.gravity),
            ("pipe speed", self.pipe_speed),
            ("pipe gap", self.pipe_gap),
            ("pipe width", self.pipe_width),
            ("minimum pipe height", self.min_pipe_height),
            ("bird size", self.bird_size),
            ("bird x", self.bird_x),
            ("ground height", self.ground_height),
        ];
        for (name, value) in positives {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.jump_impulse >= 0.0 {
            return Err(ConfigError::DownwardJump(self.jump_impulse));
        }
        if self.spawn_interval.is_zero() {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.max_gap_top() <= self.min_pipe_height {
            return Err(ConfigError::NoSpawnRange {
                min: self.min_pipe_height,
                max: self.max_gap_top(),
                width: self.surface_width,
                height: self.surface_height,
            });
        }
        Ok(())
    }

    /// Exclusive upper bound for a spawned gap top.
    pub fn max_gap_top(&self) -> f32 {
        self.surface_height - self.pipe_gap - self.min_pipe_height - self.ground_height
    }

    /// Top edge of the ground band.
    pub fn ground_y(&self) -> f32 {
        self.surface_height - self.ground_height
    }

    /// Where the bird (re)spawns vertically.
    pub fn initial_bird_y(&self) -> f32 {
        self.surface_height / 2.0
    }

    /// Horizontal scale relative to the reference surface, for decorative
    /// pixel sizes in the renderer.
    pub fn scale_x(&self) -> f32 {
        self.surface_width / BASE_SURFACE
    }

    /// Vertical scale relative to the reference surface.
    pub fn scale_y(&self) -> f32 {
        self.surface_height / BASE_SURFACE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn default_spawn_range_matches_reference() {
        let cfg = Config::default();
        // 280 - 80 (gap) - 30 (min segment) - 20 (ground) = 150
        assert_eq!(cfg.max_gap_top(), 150.0);
        assert_eq!(cfg.ground_y(), 260.0);
    }

    #[test]
    fn oversized_gap_is_rejected() {
        let cfg = Config {
            pipe_gap: 220.0,
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NoSpawnRange { .. })
        ));
    }

    #[test]
    fn downward_jump_is_rejected() {
        let cfg = Config {
            jump_impulse: 7.0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::DownwardJump(7.0)));
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let cfg = Config {
            gravity: 0.0,
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive {
                name: "gravity",
                ..
            })
        ));
    }

    #[test]
    fn zero_spawn_interval_is_rejected() {
        let cfg = Config {
            spawn_interval: Duration::ZERO,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSpawnInterval));
    }

    #[test]
    fn scaling_to_a_terminal_sized_surface_stays_valid() {
        // a typical 80x24 terminal gives an 80x48 pixel surface
        let cfg = Config::for_surface(80.0, 48.0).unwrap();
        assert!(cfg.max_gap_top() > cfg.min_pipe_height);
        assert!(cfg.gravity > 0.0 && cfg.gravity < 0.4);
        assert!(cfg.jump_impulse < 0.0);
    }

    #[test]
    fn scaling_to_a_degenerate_surface_fails_fast() {
        // proportional scaling keeps the gap range valid at any positive
        // size, so only a collapsed axis can fail
        assert!(Config::for_surface(280.0, 0.0).is_err());
        assert!(Config::for_surface(0.0, 280.0).is_err());
    }
}
