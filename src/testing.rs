//! Scripted frontend for driving widgets and flows in tests
//!
//! Frames are consumed in order; once the script runs out the frontend
//! behaves like a closed window and clears the run flag. The clock is
//! simulated, advancing by one frame period (or a custom step) per frame.

use crate::input_system::{FrameInput, InputEvent};
use crate::render::{Frontend, Renderer};
use crate::run_flag::RunFlag;
use crate::tile::TileId;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const FRAME: Duration = Duration::from_micros(16_667);

#[derive(Debug, Clone, Copy)]
pub struct ScriptFrame {
    pub event: Option<InputEvent>,
    /// `None` keeps the cursor where the previous frame left it
    pub mouse: Option<(i32, i32)>,
    pub held: bool,
    pub step: Duration,
}

impl ScriptFrame {
    pub fn idle() -> Self {
        ScriptFrame {
            event: None,
            mouse: None,
            held: false,
            step: FRAME,
        }
    }

    pub fn hover(x: i32, y: i32) -> Self {
        ScriptFrame {
            mouse: Some((x, y)),
            ..Self::idle()
        }
    }

    pub fn click_at(x: i32, y: i32) -> Self {
        ScriptFrame {
            event: Some(InputEvent::Click),
            mouse: Some((x, y)),
            held: true,
            step: FRAME,
        }
    }

    /// Primary button held over a point, no discrete event
    pub fn hold(x: i32, y: i32) -> Self {
        ScriptFrame {
            mouse: Some((x, y)),
            held: true,
            ..Self::idle()
        }
    }

    pub fn key(event: InputEvent) -> Self {
        ScriptFrame {
            event: Some(event),
            ..Self::idle()
        }
    }

    pub fn scroll(delta: i32) -> Self {
        Self::key(InputEvent::Scroll(delta))
    }

    /// An idle frame that takes `step` of wall-clock time
    pub fn wait(step: Duration) -> Self {
        ScriptFrame { step, ..Self::idle() }
    }

    pub fn typed(text: &str) -> Vec<Self> {
        text.chars().map(|c| Self::key(InputEvent::Char(c))).collect()
    }
}

pub struct ScriptedFrontend {
    script: VecDeque<ScriptFrame>,
    clock: Instant,
    mouse: (i32, i32),
    screen: (u32, u32),
    pub frames_presented: usize,
    pub tiles_drawn: Vec<(TileId, Rect)>,
    pub fills: Vec<(Rect, Color)>,
}

impl ScriptedFrontend {
    pub fn new() -> Self {
        Self::with_script(Vec::new())
    }

    pub fn with_script(script: Vec<ScriptFrame>) -> Self {
        ScriptedFrontend {
            script: script.into(),
            clock: Instant::now(),
            mouse: (0, 0),
            screen: (800, 900),
            frames_presented: 0,
            tiles_drawn: Vec::new(),
            fills: Vec::new(),
        }
    }

    /// Turn a script frame into input without touching any run flag
    pub fn frame(&mut self, frame: ScriptFrame) -> FrameInput {
        self.clock += frame.step;
        if let Some(mouse) = frame.mouse {
            self.mouse = mouse;
        }
        FrameInput {
            event: frame.event,
            mouse: self.mouse,
            primary_held: frame.held,
            dt: frame.step,
            now: self.clock,
            screen: self.screen,
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Renderer for ScriptedFrontend {
    fn screen_size(&self) -> (u32, u32) {
        self.screen
    }

    fn clear(&mut self, _color: Color) -> Result<(), String> {
        self.tiles_drawn.clear();
        self.fills.clear();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.fills.push((rect, color));
        Ok(())
    }

    fn draw_tile(&mut self, tile: TileId, rect: Rect) -> Result<(), String> {
        self.tiles_drawn.push((tile, rect));
        Ok(())
    }
}

impl Frontend for ScriptedFrontend {
    fn next_frame(&mut self, run: &RunFlag) -> FrameInput {
        let frame = match self.script.pop_front() {
            Some(frame) => frame,
            None => ScriptFrame::key(InputEvent::Quit),
        };
        if frame.event == Some(InputEvent::Quit) {
            run.stop();
        }
        self.frame(frame)
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }

    fn now(&self) -> Instant {
        self.clock
    }
}
