//! Three-way choice screen
//!
//! Lays out three buttons down the middle of the screen and resolves with
//! whichever one is clicked first.

use super::button::{Button, BACKGROUND_COLOR};
use super::widget::{Status, Widget};
use crate::input_system::FrameInput;
use crate::render::Renderer;

/// Vertical positions of the three buttons, as fractions of screen height
const ROWS: [f32; 3] = [0.30, 0.45, 0.60];

/// A closed set of three options shown by [`MultiChoice`]
pub trait Choice: Copy {
    /// Options in on-screen order, top to bottom
    const ALL: [Self; 3];

    /// Uppercase text shown on the button
    fn label(self) -> &'static str;

    /// Canonical lowercase identifier
    fn id(self) -> String {
        self.label().to_lowercase()
    }
}

/// Main menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    New,
    Edit,
    Exit,
}

impl Choice for MainMenuChoice {
    const ALL: [Self; 3] = [MainMenuChoice::New, MainMenuChoice::Edit, MainMenuChoice::Exit];

    fn label(self) -> &'static str {
        match self {
            MainMenuChoice::New => "NEW",
            MainMenuChoice::Edit => "EDIT",
            MainMenuChoice::Exit => "EXIT",
        }
    }
}

/// How a new level gets its id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewLevelChoice {
    Custom,
    Auto,
    Back,
}

impl Choice for NewLevelChoice {
    const ALL: [Self; 3] = [NewLevelChoice::Custom, NewLevelChoice::Auto, NewLevelChoice::Back];

    fn label(self) -> &'static str {
        match self {
            NewLevelChoice::Custom => "CUSTOM",
            NewLevelChoice::Auto => "AUTO",
            NewLevelChoice::Back => "BACK",
        }
    }
}

/// Options offered when leaving the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitChoice {
    Save,
    Discard,
    Resume,
}

impl Choice for ExitChoice {
    const ALL: [Self; 3] = [ExitChoice::Save, ExitChoice::Discard, ExitChoice::Resume];

    fn label(self) -> &'static str {
        match self {
            ExitChoice::Save => "SAVE",
            ExitChoice::Discard => "DISCARD",
            ExitChoice::Resume => "RESUME",
        }
    }
}

pub struct MultiChoice<T: Choice> {
    options: Vec<(T, Button)>,
}

impl<T: Choice> MultiChoice<T> {
    pub fn new() -> Self {
        let options = T::ALL
            .iter()
            .zip(ROWS)
            .map(|(&choice, rel_y)| (choice, Button::new(choice.label(), 0.5, rel_y)))
            .collect();
        MultiChoice { options }
    }
}

impl<T: Choice> Default for MultiChoice<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Choice> Widget for MultiChoice<T> {
    type Output = T;

    fn tick(&mut self, input: &FrameInput) -> Status<T> {
        let clicked = input.clicked();
        for (choice, button) in &mut self.options {
            if button.update_hover(input.mouse, input.screen) && clicked {
                return Status::Done(*choice);
            }
        }
        Status::Pending
    }

    fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        renderer.clear(BACKGROUND_COLOR)?;
        for (_, button) in &self.options {
            button.render(renderer)?;
        }
        Ok(())
    }
}
