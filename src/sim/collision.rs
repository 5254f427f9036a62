//! Pure collision predicate.
//!
//! The bird is an axis-aligned square of side `bird_size` centered on
//! (x, y); display rotation is cosmetic and ignored here. Boundary
//! conventions: touching the ground counts as a hit, grazing a gap edge
//! exactly does not.

use super::state::{Bird, Pipe};
use crate::config::Config;

/// True iff the bird intersects the ground, the ceiling, or any pipe's
/// solid region. First hit short-circuits.
pub fn hit_anything(bird: &Bird, pipes: &[Pipe], cfg: &Config) -> bool {
    hit_ground(bird, cfg) || hit_ceiling(bird, cfg) || pipes.iter().any(|p| hit_pipe(bird, p, cfg))
}

fn hit_ground(bird: &Bird, cfg: &Config) -> bool {
    bird.y + cfg.bird_size / 2.0 >= cfg.ground_y()
}

fn hit_ceiling(bird: &Bird, cfg: &Config) -> bool {
    bird.y - cfg.bird_size / 2.0 < 0.0
}

fn hit_pipe(bird: &Bird, pipe: &Pipe, cfg: &Config) -> bool {
    let half = cfg.bird_size / 2.0;
    let overlaps_x = bird.x + half > pipe.x && bird.x - half < pipe.right_edge();
    let misses_gap =
        bird.y - half < pipe.gap_top || bird.y + half > pipe.gap_top + cfg.pipe_gap;
    overlaps_x && misses_gap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bird_at(y: f32, cfg: &Config) -> Bird {
        Bird {
            x: cfg.bird_x,
            y,
            velocity: 0.0,
            rotation: 0.0,
        }
    }

    fn pipe_at(x: f32, gap_top: f32, cfg: &Config) -> Pipe {
        Pipe {
            x,
            width: cfg.pipe_width,
            gap_top,
            passed: false,
        }
    }

    #[test]
    fn clear_sky_is_no_hit() {
        let cfg = Config::default();
        // mid-air, one pipe far off to the left with no horizontal overlap
        let pipes = [pipe_at(10.0, 50.0, &cfg)];
        assert!(!hit_anything(&bird_at(140.0, &cfg), &pipes, &cfg));
    }

    #[test]
    fn ground_hits_exactly_at_the_line() {
        let cfg = Config::default();
        // bottom edge at y + 6; the ground line is 260
        assert!(!hit_anything(&bird_at(253.9, &cfg), &[], &cfg));
        assert!(hit_anything(&bird_at(254.0, &cfg), &[], &cfg));
        assert!(hit_anything(&bird_at(270.0, &cfg), &[], &cfg));
    }

    #[test]
    fn ceiling_hits_just_past_zero() {
        let cfg = Config::default();
        // top edge at y - 6; exactly zero is still inside
        assert!(!hit_anything(&bird_at(6.0, &cfg), &[], &cfg));
        assert!(hit_anything(&bird_at(5.9, &cfg), &[], &cfg));
    }

    #[test]
    fn flying_through_the_gap_is_safe() {
        let cfg = Config::default();
        // pipe straddling the bird horizontally, gap spanning [100, 180]
        let pipes = [pipe_at(40.0, 100.0, &cfg)];
        assert!(!hit_anything(&bird_at(140.0, &cfg), &pipes, &cfg));
        // hugging the top and bottom gap edges exactly is still safe
        assert!(!hit_anything(&bird_at(106.0, &cfg), &pipes, &cfg));
        assert!(!hit_anything(&bird_at(174.0, &cfg), &pipes, &cfg));
    }

    #[test]
    fn grazing_a_gap_lip_collides() {
        let cfg = Config::default();
        let pipes = [pipe_at(40.0, 100.0, &cfg)];
        // a hair above the top lip, a hair below the bottom lip
        assert!(hit_anything(&bird_at(105.9999, &cfg), &pipes, &cfg));
        assert!(hit_anything(&bird_at(174.0001, &cfg), &pipes, &cfg));
    }

    #[test]
    fn horizontal_edges_are_exclusive() {
        let cfg = Config::default();
        // bird occupies [44, 56]; solid segment at gap_top 200 is below it
        let left_touch = pipe_at(56.0, 200.0, &cfg); // pipe starts where bird ends
        let right_touch = pipe_at(14.0, 200.0, &cfg); // pipe ends where bird starts
        assert!(!hit_anything(&bird_at(140.0, &cfg), &[left_touch], &cfg));
        assert!(!hit_anything(&bird_at(140.0, &cfg), &[right_touch], &cfg));
        // one pixel of real overlap on either side does collide
        let overlapping = pipe_at(55.0, 200.0, &cfg);
        assert!(hit_anything(&bird_at(140.0, &cfg), &[overlapping], &cfg));
    }

    #[test]
    fn any_pipe_in_the_sequence_can_hit() {
        let cfg = Config::default();
        let pipes = [
            pipe_at(200.0, 100.0, &cfg),       // far ahead, harmless
            pipe_at(40.0, 160.0, &cfg),        // gap too low, bird hits the lip
        ];
        assert!(hit_anything(&bird_at(140.0, &cfg), &pipes, &cfg));
    }
}
