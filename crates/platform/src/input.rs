//! Input handling for keyboard and mouse.

use std::collections::HashSet;

use glam::DVec2;

pub use winit::keyboard::KeyCode;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            winit::event::MouseButton::Back => MouseButton::Back,
            winit::event::MouseButton::Forward => MouseButton::Forward,
            winit::event::MouseButton::Other(id) => MouseButton::Other(id),
        }
    }
}

/// Map a pointer position in pixels to normalized device coordinates.
///
/// The top-left corner maps to `(-1, 1)` and the bottom-right to `(1, -1)`.
pub fn pointer_to_ndc(x: f64, y: f64, width: u32, height: u32) -> DVec2 {
    DVec2::new(
        x / f64::from(width.max(1)) * 2.0 - 1.0,
        -(y / f64::from(height.max(1)) * 2.0 - 1.0),
    )
}

/// Tracks the current state of keyboard and mouse input.
///
/// A left press followed by a release counts as a click as long as the
/// cursor never strayed more than [`InputState::CLICK_SLOP`] pixels from the
/// press position. Once it does, the press becomes a drag and only then is
/// movement reported through [`InputState::drag_delta`]. Other buttons never
/// click or drag.
#[derive(Debug, Default)]
pub struct InputState {
    /// Currently pressed keys
    pressed_keys: HashSet<KeyCode>,
    /// Keys that were just pressed this frame
    just_pressed_keys: HashSet<KeyCode>,

    /// Currently pressed mouse buttons
    pressed_buttons: HashSet<MouseButton>,

    /// Current cursor position in pixels
    cursor: (f64, f64),
    /// Cursor movement since last frame while the left button is held
    drag_delta: (f64, f64),
    /// Cursor position when the left button went down
    press_origin: Option<(f64, f64)>,
    /// The current left press has travelled past the click slop
    dragging: bool,
    /// Click completed since the last `take_click`
    click: Option<(f64, f64)>,
    /// Scroll since last frame, in lines
    scroll_delta: f64,
}

impl InputState {
    /// Maximum pointer travel in pixels for a press/release to count as a click.
    pub const CLICK_SLOP: f64 = 4.0;

    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the beginning of each frame to clear per-frame state.
    pub fn begin_frame(&mut self) {
        self.just_pressed_keys.clear();
        self.drag_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    /// Handle a key press event.
    pub fn on_key_pressed(&mut self, key: KeyCode) {
        if self.pressed_keys.insert(key) {
            self.just_pressed_keys.insert(key);
        }
    }

    /// Handle a key release event.
    pub fn on_key_released(&mut self, key: KeyCode) {
        self.pressed_keys.remove(&key);
    }

    /// Handle a mouse button press event.
    pub fn on_mouse_pressed(&mut self, button: MouseButton) {
        self.pressed_buttons.insert(button);
        if button == MouseButton::Left {
            self.press_origin = Some(self.cursor);
            self.dragging = false;
        }
    }

    /// Handle a mouse button release event.
    pub fn on_mouse_released(&mut self, button: MouseButton) {
        self.pressed_buttons.remove(&button);
        if button != MouseButton::Left {
            return;
        }
        if self.press_origin.take().is_some() && !self.dragging {
            self.click = Some(self.cursor);
        }
        self.dragging = false;
    }

    /// Handle cursor movement.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
        let (old_x, old_y) = self.cursor;
        self.cursor = (x, y);
        let Some((ox, oy)) = self.press_origin else {
            return;
        };
        if self.dragging {
            self.drag_delta.0 += x - old_x;
            self.drag_delta.1 += y - old_y;
        } else if (x - ox).hypot(y - oy) > Self::CLICK_SLOP {
            // Movement inside the slop was held back; report it all now.
            self.dragging = true;
            self.drag_delta.0 += x - ox;
            self.drag_delta.1 += y - oy;
        }
    }

    /// Handle mouse scroll, in lines.
    pub fn on_scroll(&mut self, delta: f64) {
        self.scroll_delta += delta;
    }

    /// Check if a key is currently pressed.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Check if a key was just pressed this frame.
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed_keys.contains(&key)
    }

    /// Check if a mouse button is currently pressed.
    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Current cursor position in pixels.
    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    /// Movement with the left button held since last frame.
    pub fn drag_delta(&self) -> (f64, f64) {
        self.drag_delta
    }

    /// Scroll since last frame.
    pub fn scroll_delta(&self) -> f64 {
        self.scroll_delta
    }

    /// Take the position of a completed click, if any.
    pub fn take_click(&mut self) -> Option<(f64, f64)> {
        self.click.take()
    }
}
