//! SDL2 implementation of the drawing and frame seams

use crate::input_system::{FrameInput, InputSystem};
use crate::render::{Frontend, Renderer};
use crate::run_flag::RunFlag;
use crate::tile::TileId;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture};
use sdl2::video::Window;
use sdl2::EventPump;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Drawn in place of a tile id that has no texture
const MISSING_TILE_COLOR: Color = Color::RGB(255, 0, 255);

pub struct SdlFrontend<'a> {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    input: InputSystem,
    textures: &'a HashMap<TileId, Texture<'a>>,
    frame_duration: Duration,
    last_present: Instant,
}

impl<'a> SdlFrontend<'a> {
    pub fn new(
        canvas: Canvas<Window>,
        event_pump: EventPump,
        textures: &'a HashMap<TileId, Texture<'a>>,
        target_fps: u32,
    ) -> Self {
        SdlFrontend {
            canvas,
            event_pump,
            input: InputSystem::new(),
            textures,
            frame_duration: Duration::from_secs(1) / target_fps.max(1),
            last_present: Instant::now(),
        }
    }
}

impl Renderer for SdlFrontend<'_> {
    fn screen_size(&self) -> (u32, u32) {
        // Falls back to the window size if the renderer can't report it
        self.canvas
            .output_size()
            .unwrap_or_else(|_| self.canvas.window().size())
    }

    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        let translucent = color.a < 255;
        if translucent {
            self.canvas.set_blend_mode(BlendMode::Blend);
        }
        self.canvas.set_draw_color(color);
        let result = self.canvas.fill_rect(rect);
        if translucent {
            self.canvas.set_blend_mode(BlendMode::None);
        }
        result
    }

    fn draw_tile(&mut self, tile: TileId, rect: Rect) -> Result<(), String> {
        match self.textures.get(&tile) {
            Some(texture) => self.canvas.copy(texture, None, rect),
            None => self.fill_rect(rect, MISSING_TILE_COLOR),
        }
    }
}

impl Frontend for SdlFrontend<'_> {
    fn next_frame(&mut self, run: &RunFlag) -> FrameInput {
        if let Some(remaining) = self.frame_duration.checked_sub(self.last_present.elapsed()) {
            std::thread::sleep(remaining);
        }
        let screen = self.screen_size();
        self.input.poll(&mut self.event_pump, run, screen)
    }

    fn present(&mut self) {
        self.canvas.present();
        self.last_present = Instant::now();
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}
