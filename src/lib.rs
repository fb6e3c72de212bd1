// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Interactive viewing core for 3D scalar volumes.
//!
//! The heart of the crate is a virtual-sphere trackball that turns 2D mouse
//! drags into stable, composable 3D rotations. Around it sit a field-of-view
//! zoom, a per-frame uniform block for the renderer, a platform-agnostic
//! input layer, and an optional winit viewer window.
//!
//! # Key entry points
//!
//! - [`camera::TrackballController`] - pixel drags to rotations
//! - [`engine::ViewEngine`] - the host's render context; executes commands
//!   and produces [`camera::ViewUniform`] each frame
//! - [`input::InputProcessor`] - raw window events to
//!   [`engine::ViewCommand`]s
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Example
//!
//! ```
//! use volview::camera::TrackballController;
//!
//! let mut trackball = TrackballController::new(800, 800);
//! trackball.begin_drag(400.0, 400.0);
//! trackball.update_drag(500.0, 380.0);
//! trackball.end_drag(520.0, 380.0);
//!
//! let rotation = trackball.current_rotation();
//! assert!((rotation.determinant() - 1.0).abs() < 1e-4);
//! ```

pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::{TrackballController, ViewUniform, ZoomController};
pub use engine::{ViewCommand, ViewEngine};
pub use error::VolviewError;
pub use input::{InputEvent, InputProcessor, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
