//! Converts raw platform events into view commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! held buttons) and the key-binding map. It is the only thing that sits
//! between raw window events and the engine's
//! [`execute`](crate::engine::ViewEngine::execute) method.

use super::event::{InputEvent, MouseButton};
use super::mouse::InputState;
use crate::engine::ViewCommand;
use crate::input::KeyAction;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`ViewCommand`]s.
///
/// Left drags rotate through the trackball, middle drags zoom. Both can be
/// active at once, in which case a cursor move yields one command for each.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// for cmd in input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Cursor position and held buttons.
    state: InputState,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            state: InputState::new(),
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> (f32, f32) {
        self.state.mouse_pos
    }

    /// Whether the rotate button is held.
    #[must_use]
    pub fn rotating(&self) -> bool {
        self.state.left_down
    }

    /// Whether the zoom button is held.
    #[must_use]
    pub fn zooming(&self) -> bool {
        self.state.middle_down
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Release every held button, finishing any drag in progress at the
    /// last known cursor position.
    ///
    /// Used when the window loses focus and the matching release events
    /// will never arrive.
    pub fn release_all(&mut self) -> Vec<ViewCommand> {
        let (x, y) = self.state.mouse_pos;
        let mut commands = Vec::new();
        if self.state.left_down {
            commands.push(ViewCommand::EndRotate { x, y });
        }
        if self.state.middle_down {
            commands.push(ViewCommand::EndZoom);
        }
        self.state.release_all();
        commands
    }

    /// Process a raw input event and return the resulting commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Vec<ViewCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed).into_iter().collect()
            }
            InputEvent::Scroll { delta } => vec![ViewCommand::Zoom { delta }],
            InputEvent::Resized { width, height } => {
                if width == 0 || height == 0 {
                    // minimized windows report 0x0; keep the last size
                    log::warn!("ignoring resize to {width}x{height}");
                    return Vec::new();
                }
                vec![ViewCommand::Resize { width, height }]
            }
            InputEvent::Key { code } => {
                self.handle_key_press(&code).into_iter().collect()
            }
        }
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewCommand> {
        self.key_bindings.lookup(key).map(|action| match action {
            KeyAction::Quit => ViewCommand::Quit,
            KeyAction::ResetView => ViewCommand::ResetView,
        })
    }

    /// Cursor moved — continue whichever drags are active.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Vec<ViewCommand> {
        self.state.handle_mouse_position(x, y);

        let mut commands = Vec::new();
        if self.state.left_down {
            commands.push(ViewCommand::UpdateRotate { x, y });
        }
        if self.state.middle_down {
            commands.push(ViewCommand::UpdateZoom { y });
        }
        commands
    }

    /// Mouse button press/release — start or finish a drag at the cursor.
    fn handle_mouse_button(
        &mut self,
        button: MouseButton,
        pressed: bool,
    ) -> Option<ViewCommand> {
        if !self.state.set_button(button, pressed) {
            return None;
        }

        let (x, y) = self.state.mouse_pos;
        match (button, pressed) {
            (MouseButton::Left, true) => Some(ViewCommand::BeginRotate { x, y }),
            (MouseButton::Left, false) => Some(ViewCommand::EndRotate { x, y }),
            (MouseButton::Middle, true) => Some(ViewCommand::BeginZoom { y }),
            (MouseButton::Middle, false) => Some(ViewCommand::EndZoom),
            (MouseButton::Right | MouseButton::Other, _) => None,
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn button(button: MouseButton, pressed: bool) -> InputEvent {
        InputEvent::MouseButton { button, pressed }
    }

    #[test]
    fn left_drag_emits_rotate_sequence() {
        let mut input = InputProcessor::new();
        assert!(input.handle_event(moved(100.0, 200.0)).is_empty());
        assert_eq!(
            input.handle_event(button(MouseButton::Left, true)),
            vec![ViewCommand::BeginRotate { x: 100.0, y: 200.0 }]
        );
        assert_eq!(
            input.handle_event(moved(120.0, 210.0)),
            vec![ViewCommand::UpdateRotate { x: 120.0, y: 210.0 }]
        );
        assert_eq!(
            input.handle_event(button(MouseButton::Left, false)),
            vec![ViewCommand::EndRotate { x: 120.0, y: 210.0 }]
        );
        assert!(input.handle_event(moved(130.0, 220.0)).is_empty());
    }

    #[test]
    fn middle_drag_emits_zoom_sequence() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(0.0, 50.0));
        assert_eq!(
            input.handle_event(button(MouseButton::Middle, true)),
            vec![ViewCommand::BeginZoom { y: 50.0 }]
        );
        assert_eq!(
            input.handle_event(moved(5.0, 60.0)),
            vec![ViewCommand::UpdateZoom { y: 60.0 }]
        );
        assert_eq!(
            input.handle_event(button(MouseButton::Middle, false)),
            vec![ViewCommand::EndZoom]
        );
    }

    #[test]
    fn both_buttons_held_rotate_and_zoom() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(button(MouseButton::Left, true));
        let _ = input.handle_event(button(MouseButton::Middle, true));
        assert_eq!(
            input.handle_event(moved(10.0, 20.0)),
            vec![
                ViewCommand::UpdateRotate { x: 10.0, y: 20.0 },
                ViewCommand::UpdateZoom { y: 20.0 },
            ]
        );
    }

    #[test]
    fn unmatched_release_and_right_button_are_ignored() {
        let mut input = InputProcessor::new();
        assert!(input.handle_event(button(MouseButton::Left, false)).is_empty());
        assert!(input.handle_event(button(MouseButton::Right, true)).is_empty());
        assert!(!input.rotating());
    }

    #[test]
    fn extra_buttons_never_rotate() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(10.0, 10.0));
        assert!(input.handle_event(button(MouseButton::Other, true)).is_empty());
        assert!(input.handle_event(moved(50.0, 40.0)).is_empty());
        assert!(input.handle_event(button(MouseButton::Other, false)).is_empty());
        assert!(!input.rotating() && !input.zooming());
    }

    #[cfg(feature = "viewer")]
    #[test]
    fn winit_back_and_forward_buttons_are_ignored() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(10.0, 10.0));
        for winit_button in [
            winit::event::MouseButton::Back,
            winit::event::MouseButton::Forward,
            winit::event::MouseButton::Other(8),
        ] {
            let converted = MouseButton::from(winit_button);
            assert_eq!(converted, MouseButton::Other);
            assert!(input.handle_event(button(converted, true)).is_empty());
            assert!(input.handle_event(button(converted, false)).is_empty());
        }
        assert_eq!(
            MouseButton::from(winit::event::MouseButton::Left),
            MouseButton::Left
        );
    }

    #[test]
    fn zero_sized_resize_is_dropped() {
        let mut input = InputProcessor::new();
        assert!(input
            .handle_event(InputEvent::Resized { width: 0, height: 0 })
            .is_empty());
        assert_eq!(
            input.handle_event(InputEvent::Resized {
                width: 1024,
                height: 768
            }),
            vec![ViewCommand::Resize {
                width: 1024,
                height: 768
            }]
        );
    }

    #[test]
    fn keys_map_through_bindings() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Key {
                code: "Escape".into()
            }),
            vec![ViewCommand::Quit]
        );
        assert_eq!(input.handle_key_press("KeyR"), Some(ViewCommand::ResetView));
        assert_eq!(input.handle_key_press("KeyX"), None);
    }

    #[test]
    fn release_all_finishes_open_drags() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(moved(300.0, 300.0));
        let _ = input.handle_event(button(MouseButton::Left, true));
        let _ = input.handle_event(button(MouseButton::Middle, true));
        assert_eq!(
            input.release_all(),
            vec![
                ViewCommand::EndRotate { x: 300.0, y: 300.0 },
                ViewCommand::EndZoom,
            ]
        );
        assert!(!input.rotating() && !input.zooming());
        assert!(input.release_all().is_empty());
    }
}
