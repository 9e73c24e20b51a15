//! Button Component
//!
//! A labelled rectangle placed by screen fractions. The button only knows
//! whether the cursor is over it; callers combine that with the frame's
//! click to detect activation.

use crate::text::{draw_simple_text, text_size};
use crate::render::Renderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Fill color when the cursor is elsewhere
    pub fill_color: Color,

    /// Fill color while hovered
    pub hover_color: Color,

    /// Label color
    pub text_color: Color,

    /// Space between label and edge, per side
    pub padding: u32,

    /// Bitmap font scale
    pub scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            fill_color: Color::RGB(30, 30, 40),
            hover_color: Color::RGB(80, 100, 140),
            text_color: Color::RGB(220, 220, 240),
            padding: 5,
            scale: 5,
        }
    }
}

/// Background color shared by every full-screen widget
pub const BACKGROUND_COLOR: Color = Color::RGB(235, 235, 240);

#[derive(Debug, Clone)]
pub struct Button {
    text: String,
    rel_x: f32,
    rel_y: f32,
    hovered: bool,
    style: ButtonStyle,
}

impl Button {
    /// Create a button centered at (`rel_x`, `rel_y`) fractions of the screen
    ///
    /// The label is drawn in brackets, e.g. `[SAVE]`.
    pub fn new(label: &str, rel_x: f32, rel_y: f32) -> Self {
        Button {
            text: format!("[{}]", label),
            rel_x,
            rel_y,
            hovered: false,
            style: ButtonStyle::default(),
        }
    }

    /// Pixel rectangle for a given screen size
    pub fn rect(&self, screen: (u32, u32)) -> Rect {
        let (text_w, text_h) = text_size(&self.text, self.style.scale);
        let w = text_w + self.style.padding * 2;
        let h = text_h + self.style.padding * 2;
        let cx = (screen.0 as f32 * self.rel_x) as i32;
        let cy = (screen.1 as f32 * self.rel_y) as i32;
        Rect::new(cx - w as i32 / 2, cy - h as i32 / 2, w, h)
    }

    /// Hit-test the cursor and remember the result for rendering
    ///
    /// Bounds are inclusive on all four edges.
    pub fn update_hover(&mut self, mouse: (i32, i32), screen: (u32, u32)) -> bool {
        let rect = self.rect(screen);
        let (mx, my) = mouse;
        self.hovered = mx >= rect.left() && mx <= rect.right() && my >= rect.top() && my <= rect.bottom();
        self.hovered
    }

    #[allow(dead_code)] // Callers use the return value of update_hover
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn render(&self, renderer: &mut dyn Renderer) -> Result<(), String> {
        let rect = self.rect(renderer.screen_size());
        let fill = if self.hovered {
            self.style.hover_color
        } else {
            self.style.fill_color
        };
        renderer.fill_rect(rect, fill)?;

        let pad = self.style.padding as i32;
        draw_simple_text(
            renderer,
            &self.text,
            rect.x() + pad,
            rect.y() + pad,
            self.style.text_color,
            self.style.scale,
        )
    }
}
