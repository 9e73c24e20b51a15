use crate::run_flag::RunFlag;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;
use std::time::{Duration, Instant};

/// Discrete input token produced by one poll
///
/// Each frame yields at most one of these. Everything the widgets and the
/// editor react to as an "event" arrives through this enum; continuous
/// state (cursor position, held button) travels in [`FrameInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary (left) mouse button pressed
    Click,
    /// Mouse wheel moved; positive is away from the user
    Scroll(i32),
    /// A decimal digit was typed
    Char(char),
    Backspace,
    Enter,
    Space,
    /// Window close requested
    Quit,
}

/// Everything a widget needs to know about one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// The single event kept for this frame, if any
    pub event: Option<InputEvent>,
    /// Cursor position in screen pixels
    pub mouse: (i32, i32),
    /// Whether the primary button is currently held (level-triggered)
    pub primary_held: bool,
    /// Time elapsed since the previous frame
    pub dt: Duration,
    /// Wall-clock time at the start of this frame
    pub now: Instant,
    /// Screen size in pixels
    pub screen: (u32, u32),
}

impl FrameInput {
    /// Returns true if this frame's event is a primary click
    pub fn clicked(&self) -> bool {
        self.event == Some(InputEvent::Click)
    }
}

/// Translate one raw SDL2 event into an [`InputEvent`]
///
/// Returns `None` for events the editor does not care about. Digits come
/// from text input so the keyboard layout is respected.
pub fn translate_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            ..
        } => Some(InputEvent::Click),
        Event::MouseWheel { y, .. } if *y != 0 => Some(InputEvent::Scroll(*y)),
        Event::KeyDown {
            scancode: Some(scancode),
            ..
        } => translate_scancode(*scancode),
        Event::TextInput { text, .. } => text
            .chars()
            .next()
            .filter(|c| c.is_ascii_digit())
            .map(InputEvent::Char),
        _ => None,
    }
}

/// Map the non-text keys the editor uses
fn translate_scancode(scancode: Scancode) -> Option<InputEvent> {
    match scancode {
        Scancode::Return | Scancode::KpEnter => Some(InputEvent::Enter),
        Scancode::Backspace => Some(InputEvent::Backspace),
        Scancode::Space => Some(InputEvent::Space),
        _ => None,
    }
}

/// Reduce a frame's worth of translated events to a single slot
///
/// The first recognised event wins and the rest are dropped, which bounds
/// latency to one frame per event at the cost of losing simultaneous
/// inputs. A quit anywhere in the batch still clears the run flag.
pub fn first_event<I>(events: I, run: &RunFlag) -> Option<InputEvent>
where
    I: IntoIterator<Item = Option<InputEvent>>,
{
    let mut kept = None;
    for event in events.into_iter().flatten() {
        if event == InputEvent::Quit {
            run.stop();
        }
        if kept.is_none() {
            kept = Some(event);
        }
    }
    kept
}

/// InputSystem turns the SDL2 event queue into one [`FrameInput`] per frame
pub struct InputSystem {
    last_frame: Instant,
}

impl InputSystem {
    pub fn new() -> Self {
        InputSystem {
            last_frame: Instant::now(),
        }
    }

    /// Drain the event queue and snapshot the pointer
    ///
    /// Must be called exactly once per frame; `dt` is measured between calls.
    pub fn poll(&mut self, event_pump: &mut EventPump, run: &RunFlag, screen: (u32, u32)) -> FrameInput {
        let event = first_event(event_pump.poll_iter().map(|e| translate_event(&e)), run);

        let mouse_state = event_pump.mouse_state();
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame);
        self.last_frame = now;

        FrameInput {
            event,
            mouse: (mouse_state.x(), mouse_state.y()),
            primary_held: mouse_state.left(),
            dt,
            now,
            screen,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
