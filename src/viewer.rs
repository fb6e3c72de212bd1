//! Standalone viewer window backed by winit.
//!
//! The viewer owns the event loop and the [`ViewEngine`]: window events go
//! through the [`InputProcessor`], the resulting commands are executed, and
//! every redraw assembles the frame's [`ViewUniform`](crate::camera::ViewUniform).
//! Drawing the volume itself is left to the renderer that consumes it.
//!
//! ```no_run
//! # use volview::Viewer;
//! Viewer::builder()
//!     .with_title("bonsai")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    engine::{ViewCommand, ViewEngine},
    error::VolviewError,
    input::{InputEvent, InputProcessor},
    options::Options,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with sensible defaults (title "volview", default
    /// options).
    fn new() -> Self {
        Self {
            options: None,
            title: "volview".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that lets the user rotate and zoom a volume view.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), VolviewError> {
        let input =
            InputProcessor::with_key_bindings(self.options.keybindings.clone());
        let engine = ViewEngine::new(self.options)?;

        let event_loop =
            EventLoop::new().map_err(|e| VolviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine,
            input,
            title: self.title,
            error: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| VolviewError::Viewer(e.to_string()))?;

        app.error.map_or(Ok(()), Err)
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: ViewEngine,
    input: InputProcessor,
    title: String,
    /// Failure that ended the event loop early.
    error: Option<VolviewError>,
}

impl ViewerApp {
    /// Run every command the event produced; exits on [`ViewCommand::Quit`].
    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: InputEvent) {
        let commands = self.input.handle_event(event);
        self.execute_all(event_loop, commands);
    }

    fn execute_all(
        &mut self,
        event_loop: &ActiveEventLoop,
        commands: Vec<ViewCommand>,
    ) {
        let mut changed = false;
        for command in commands {
            if command == ViewCommand::Quit {
                log::info!("quit requested");
                event_loop.exit();
                return;
            }
            changed |= self.engine.execute(command);
        }

        if changed || self.engine.needs_redraw() {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn redraw(&self) {
        let uniform = self.engine.frame_uniform();
        log::trace!(
            "frame: fovy {:.2}, rotation {:?}",
            self.engine.zoom().fovy(),
            uniform.rotation_matrix()
        );
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let viewport = &self.engine.options().viewport;
        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                viewport.width,
                viewport.height,
            ));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                let window = Arc::new(window);
                self.dispatch(
                    event_loop,
                    InputEvent::Resized {
                        width: size.width,
                        height: size.height,
                    },
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                self.error = Some(VolviewError::Viewer(e.to_string()));
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => self.dispatch(
                event_loop,
                InputEvent::Resized {
                    width: size.width,
                    height: size.height,
                },
            ),

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::Focused(false) => {
                let commands = self.input.release_all();
                self.execute_all(event_loop, commands);
            }

            WindowEvent::MouseInput { button, state, .. } => self.dispatch(
                event_loop,
                InputEvent::MouseButton {
                    button: button.into(),
                    pressed: state == ElementState::Pressed,
                },
            ),

            WindowEvent::CursorMoved { position, .. } => self.dispatch(
                event_loop,
                InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                },
            ),

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.dispatch(event_loop, InputEvent::Scroll { delta });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.dispatch(
                            event_loop,
                            InputEvent::Key {
                                code: format!("{code:?}"),
                            },
                        );
                    }
                }
            }

            _ => (),
        }
    }
}
