//! Drawing and frame-driving seams
//!
//! The editor core never touches SDL2 directly. It draws through
//! [`Renderer`] and advances time through [`Frontend`], so every widget and
//! the editing session can be driven by a scripted frontend in tests.
//!
//! # Architecture
//!
//! - `Renderer`: immediate-mode primitives (clear, filled rect, tile blit)
//! - `Frontend`: a `Renderer` that also paces frames, polls input and flips
//!   the display
//!
//! See `sdl_frontend.rs` for the SDL2 implementation.

use crate::input_system::FrameInput;
use crate::run_flag::RunFlag;
use crate::tile::TileId;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::time::Instant;

/// Immediate-mode drawing surface
pub trait Renderer {
    /// Size of the drawable area in pixels
    fn screen_size(&self) -> (u32, u32);

    /// Fill the whole screen with a color
    fn clear(&mut self, color: Color) -> Result<(), String>;

    /// Fill a rectangle, blending when `color.a < 255`
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Blit the texture for `tile` stretched into `rect`
    ///
    /// Tiles without a texture are drawn as a marker instead of failing.
    fn draw_tile(&mut self, tile: TileId, rect: Rect) -> Result<(), String>;
}

/// A renderer that also owns the frame loop plumbing
pub trait Frontend: Renderer {
    /// Wait for the next frame slot and collect its input
    ///
    /// A quit request clears `run` as a side effect.
    fn next_frame(&mut self, run: &RunFlag) -> FrameInput;

    /// Show everything drawn since the last call
    fn present(&mut self);

    /// Current wall-clock time, used for real-time deadlines
    fn now(&self) -> Instant;
}
