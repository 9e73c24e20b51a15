//! Digit entry screen
//!
//! Shows a fixed prompt, the text typed so far and a SUBMIT button.
//! Enter, or a click on SUBMIT, resolves with the accumulated text.

use super::button::{Button, BACKGROUND_COLOR};
use super::widget::{Status, Widget};
use crate::input_system::{FrameInput, InputEvent};
use crate::render::Renderer;
use crate::text::draw_centered_text;
use sdl2::pixels::Color;

const PROMPT_COLOR: Color = Color::RGB(30, 30, 40);
const TEXT_SCALE: u32 = 5;

pub struct TextPrompt {
    prompt: String,
    text: String,
    submit: Button,
}

impl TextPrompt {
    pub fn new(prompt: &str) -> Self {
        TextPrompt {
            prompt: format!("[{}]", prompt),
            text: String::new(),
            submit: Button::new("SUBMIT", 0.5, 0.8),
        }
    }

    /// Text accumulated so far
    #[allow(dead_code)] // Submitted text is returned through tick
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for TextPrompt {
    type Output = String;

    fn tick(&mut self, input: &FrameInput) -> Status<String> {
        let submit_hovered = self.submit.update_hover(input.mouse, input.screen);

        match input.event {
            Some(InputEvent::Char(c)) => self.text.push(c),
            Some(InputEvent::Backspace) => {
                self.text.pop();
            }
            Some(InputEvent::Enter) => return Status::Done(self.text.clone()),
            Some(InputEvent::Click) if submit_hovered => return Status::Done(self.text.clone()),
            _ => {}
        }
        Status::Pending
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        renderer.clear(BACKGROUND_COLOR)?;
        let (w, h) = renderer.screen_size();
        let cx = w as i32 / 2;

        draw_centered_text(renderer, &self.prompt, cx, (h as f32 * 0.1) as i32, PROMPT_COLOR, TEXT_SCALE)?;
        draw_centered_text(
            renderer,
            &format!("[{}]", self.text),
            cx,
            (h as f32 * 0.2) as i32,
            PROMPT_COLOR,
            TEXT_SCALE,
        )?;
        self.submit.render(renderer)
    }
}
