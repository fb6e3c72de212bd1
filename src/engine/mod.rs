//! View state owned by the host application.
//!
//! [`ViewEngine`] is the render context for one window: it owns the
//! trackball, the zoom controller and the active options, executes
//! [`ViewCommand`]s produced by the input processor, and hands the renderer
//! a [`ViewUniform`] once per frame.

/// The command vocabulary executed by the engine.
pub mod command;

pub use command::ViewCommand;

use crate::camera::{Projection, TrackballController, ViewUniform, ZoomController};
use crate::error::VolviewError;
use crate::options::Options;

/// Orientation, zoom and configuration for a single volume view.
#[derive(Debug, Clone)]
pub struct ViewEngine {
    trackball: TrackballController,
    zoom: ZoomController,
    options: Options,
}

impl ViewEngine {
    /// Create an engine sized to the options' initial viewport.
    pub fn new(options: Options) -> Result<Self, VolviewError> {
        options.validate()?;
        let trackball = TrackballController::new(
            options.viewport.width,
            options.viewport.height,
        );
        let zoom = ZoomController::new(&options.camera);
        log::debug!(
            "view engine: {}x{} viewport, volume {:?}",
            options.viewport.width,
            options.viewport.height,
            options.volume.resolution
        );
        Ok(Self {
            trackball,
            zoom,
            options,
        })
    }

    /// Apply a command. Returns whether the view changed and should be
    /// redrawn.
    ///
    /// [`ViewCommand::Quit`] is not handled here; hosts check for it before
    /// executing, and the engine treats it as a no-op.
    pub fn execute(&mut self, command: ViewCommand) -> bool {
        match command {
            ViewCommand::BeginRotate { x, y } => {
                self.trackball.begin_drag(x, y);
                true
            }
            ViewCommand::UpdateRotate { x, y } => {
                self.trackball.update_drag(x, y);
                true
            }
            ViewCommand::EndRotate { x, y } => {
                self.trackball.end_drag(x, y);
                true
            }
            ViewCommand::BeginZoom { y } => {
                self.zoom.begin(y);
                false
            }
            ViewCommand::UpdateZoom { y } => self.zoom.update(y),
            ViewCommand::EndZoom => {
                self.zoom.end();
                false
            }
            ViewCommand::Zoom { delta } => self.zoom.zoom_by(delta),
            ViewCommand::Resize { width, height } => {
                self.resize(width, height);
                true
            }
            ViewCommand::ResetView => {
                self.reset_view();
                true
            }
            ViewCommand::Quit => false,
        }
    }

    /// Track a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("view engine: resized to {width}x{height}");
        self.trackball.resize(width, height);
    }

    /// Restore the initial orientation and field of view.
    pub fn reset_view(&mut self) {
        self.trackball.reset();
        self.zoom.set_fovy(self.options.camera.fovy);
    }

    /// Whether a drag is in progress, so the host should keep redrawing.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.trackball.is_dragging() || self.zoom.is_dragging()
    }

    /// Projection at the current field of view.
    #[must_use]
    pub fn projection(&self) -> Projection {
        Projection {
            fovy: self.zoom.fovy(),
            ..Projection::from_options(&self.options.camera)
        }
    }

    /// Uniform block for the frame about to be drawn.
    #[must_use]
    pub fn frame_uniform(&self) -> ViewUniform {
        ViewUniform::build(
            &self.projection(),
            self.trackball.normal_matrix(),
            self.options.volume.extent(),
            self.options.camera.forward,
        )
    }

    /// The trackball driving the orientation.
    #[must_use]
    pub fn trackball(&self) -> &TrackballController {
        &self.trackball
    }

    /// The zoom controller driving the field of view.
    #[must_use]
    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options and push camera changes to the zoom controller.
    ///
    /// The orientation and viewport size are kept.
    pub fn set_options(&mut self, options: Options) -> Result<(), VolviewError> {
        options.validate()?;
        self.zoom.apply_options(&options.camera);
        self.options = options;
        Ok(())
    }
}
