//! Timed message screen
//!
//! Shows a single centered label until a wall-clock deadline passes or the
//! label is clicked. The deadline is real time, so it does not depend on
//! how fast frames are being produced.

use super::button::{Button, BACKGROUND_COLOR};
use super::widget::{Status, Widget};
use crate::input_system::FrameInput;
use crate::render::Renderer;
use std::time::{Duration, Instant};

pub struct Alert {
    label: Button,
    deadline: Instant,
}

impl Alert {
    /// Create an alert that expires `duration` after `start`
    pub fn new(message: &str, duration: Duration, start: Instant) -> Self {
        Alert {
            label: Button::new(message, 0.5, 0.5),
            deadline: start + duration,
        }
    }
}

impl Widget for Alert {
    type Output = ();

    fn tick(&mut self, input: &FrameInput) -> Status<()> {
        if input.now >= self.deadline {
            return Status::Done(());
        }
        if self.label.update_hover(input.mouse, input.screen) && input.clicked() {
            return Status::Done(());
        }
        Status::Pending
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        renderer.clear(BACKGROUND_COLOR)?;
        self.label.render(renderer)
    }
}
