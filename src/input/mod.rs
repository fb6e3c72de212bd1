//! Input handling: event types, pointer tracking, and the input processor
//! that converts raw window events into view commands.

/// Platform-agnostic input events.
pub mod event;
/// Key-bindable actions.
pub mod keyboard;
/// Cursor position and held-button tracking.
pub(crate) mod mouse;
/// Converts raw events into view commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
