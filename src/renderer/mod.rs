//! Pixel-art rendering.
//!
//! Reads simulation state, never mutates it. Scene painting goes into an
//! RGB `PixelBuf` which is presented to the terminal with Unicode
//! half-block cells; painting whole pixels is what keeps the look blocky,
//! there is no smoothing anywhere to disable. The cosmetic clock passed to
//! `draw` moves the wing flap and cloud drift; game logic never reads it.

pub mod buffer;
pub mod digits;
pub mod scene;

pub use buffer::{PixelBuf, Rgb};
pub use scene::draw;
