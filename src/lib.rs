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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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

//! Force vector overlays for molecular dynamics trajectories.
//!
//! Forcevis draws per-atom 3-D vectors (forces, velocities, gradients) as
//! arrows anchored on a reference trajectory, replacing them on every
//! animation frame. The host application owns the scene, camera and frame
//! counter; this crate talks to it through [`host::SceneHost`].
//!
//! # Key entry points
//!
//! - [`engine::load_vector_scene`] - read trajectories and build the cache
//! - [`engine::FrameChangeController`] - redraws arrows on frame changes
//! - [`renderer::ArrowRenderer`] - camera-aware two-primitive arrows
//! - [`options::Options`] - TOML configuration
//!
//! # Architecture
//!
//! Loading is a single blocking phase: every series is validated against
//! the reference shape and every frame's vector fields are precomputed
//! into a [`field::TrajectoryCache`]. Only then can a controller be
//! subscribed to a [`host::playback::Playback`]. Each frame change deletes
//! the previous arrows before drawing the new frame's, on the caller's
//! thread.

pub mod colorize;
pub mod engine;
pub mod error;
pub mod field;
pub mod host;
pub mod options;
pub mod palette;
pub mod renderer;
pub mod trajectory;
