//! Capabilities the vector overlay consumes from its host application.
//!
//! The host owns the scene graph, the camera, and the animation frame
//! counter. The overlay only asks it to create and delete primitives,
//! reads the camera orientation, and listens for frame changes.
//!
//! - [`SceneHost`] - primitive creation/deletion and camera queries
//! - [`FrameListener`] - callback invoked on every frame change
//! - [`playback::Playback`] - frame-change notification source
//! - [`recording::RecordingHost`] - headless host that records primitives

/// Look-at camera backing the headless host.
pub mod camera;
pub mod playback;
pub mod recording;

use glam::{Mat4, Vec3};
use serde::Serialize;

/// Host-assigned identifier of a live primitive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
pub struct PrimitiveHandle(pub u64);

/// Drawable geometry the host knows how to create.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Capped cylinder between two points.
    Cylinder {
        /// First cap center.
        start: Vec3,
        /// Second cap center.
        end: Vec3,
        /// Cylinder radius.
        radius: f32,
        /// Tessellation segments around the axis.
        resolution: u32,
    },
    /// Cone from a circular base to a point.
    Cone {
        /// Base center.
        base: Vec3,
        /// Apex.
        tip: Vec3,
        /// Base radius.
        radius: f32,
        /// Tessellation segments around the axis.
        resolution: u32,
    },
}

/// Color and material applied to a created primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrimitiveStyle {
    /// RGB color.
    pub color: [f32; 3],
    /// Host material name.
    pub material: String,
}

/// Per-atom scalar representation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarRepresentation {
    /// Representation style (e.g. space-filling `"VDW"`).
    pub style: String,
    /// Host material name.
    pub material: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Scene, camera and frame capabilities provided by the host.
pub trait SceneHost {
    /// World-to-view matrix of the active camera.
    fn view_matrix(&self) -> Mat4;

    /// Unit vector the camera looks along, in world space.
    fn view_direction(&self) -> Vec3 {
        view_direction(&self.view_matrix())
    }

    /// Frame index currently shown by the host.
    fn current_frame(&self) -> usize;

    /// Move the host's own frame counter. Reference geometry follows this
    /// independently of any listener.
    fn set_current_frame(&mut self, frame: usize);

    /// Create a primitive and return its handle.
    fn create_primitive(
        &mut self,
        primitive: &Primitive,
        style: &PrimitiveStyle,
    ) -> PrimitiveHandle;

    /// Delete a primitive. Unknown handles are ignored.
    fn delete_primitive(&mut self, handle: PrimitiveHandle);

    /// Assign one scalar per atom and switch to the given representation.
    fn apply_atom_scalars(
        &mut self,
        values: &[f32],
        representation: &ScalarRepresentation,
    );
}

/// Receives frame-change notifications, synchronously and one at a time.
pub trait FrameListener {
    /// Called after the host's frame counter moved to `frame`.
    fn frame_changed(&mut self, host: &mut dyn SceneHost, frame: usize);
}

/// Camera forward direction encoded in a world-to-view matrix.
///
/// Right-handed view space looks down -Z, so the forward direction is the
/// inverse rotation applied to -Z.
#[must_use]
pub fn view_direction(view: &Mat4) -> Vec3 {
    view.inverse()
        .transform_vector3(Vec3::NEG_Z)
        .normalize_or_zero()
}
