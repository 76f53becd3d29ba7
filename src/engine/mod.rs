//! Vector overlay engine: load phase and frame-change redraw.
//!
//! - [`load::load_vector_scene`] reads the trajectories and builds the
//!   cache (blocking, once)
//! - [`controller::FrameChangeController`] redraws the cached arrows on
//!   every frame change
//! - [`handles::GraphicsHandleSet`] tracks what is on screen

pub mod controller;
pub mod handles;
pub mod load;

pub use controller::{ControllerState, FrameChangeController, RedrawOutcome};
pub use handles::GraphicsHandleSet;
pub use load::{load_vector_scene, LoadedScene};
