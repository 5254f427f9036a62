//! Headless game simulation.
//!
//! Pure state plus arithmetic: no terminal, no wall-clock reads, no global
//! RNG. The frame loop owns a `Game` value and passes an explicit clock into
//! `advance`; tests drive the same API with synthetic time and fixed seeds.

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::hit_anything;
pub use state::{Bird, Game, Mode, Pipe};
pub use tick::advance;
