use super::event::MouseButton;

/// Tracks cursor position and which drag buttons are held.
///
/// Button events carry no position, so the last cursor position is kept
/// to anchor presses and releases.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    pub(crate) mouse_pos: (f32, f32),
    pub(crate) left_down: bool,
    pub(crate) middle_down: bool,
}

impl InputState {
    /// Create a new input state with no buttons held.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Update cursor position.
    pub(crate) fn handle_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_pos = (x, y);
    }

    /// Record a press or release. Returns `false` when the event does not
    /// change the held state (a repeated press, or a release without a
    /// matching press), which callers treat as noise.
    pub(crate) fn set_button(&mut self, button: MouseButton, pressed: bool) -> bool {
        let held = match button {
            MouseButton::Left => &mut self.left_down,
            MouseButton::Middle => &mut self.middle_down,
            MouseButton::Right | MouseButton::Other => return false,
        };
        if *held == pressed {
            return false;
        }
        *held = pressed;
        true
    }

    /// Forget all held buttons.
    pub(crate) fn release_all(&mut self) {
        self.left_down = false;
        self.middle_down = false;
    }
}
