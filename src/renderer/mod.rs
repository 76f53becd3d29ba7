//! Primitive renderers for vector overlays.
//!
//! [`arrow::ArrowRenderer`] turns one anchor/vector pair into a cylinder
//! body and a cone head on the host scene.

pub mod arrow;

pub use arrow::{ArrowGeometry, ArrowHandles, ArrowRenderer};
