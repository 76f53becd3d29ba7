//! Headless host that keeps live primitives in memory.
//!
//! Used by the command-line tool to export per-frame scenes and by tests
//! to observe exactly what was created and deleted.

use glam::Mat4;
use rustc_hash::FxHashMap;
use serde::Serialize;

use super::camera::Camera;
use super::{
    Primitive, PrimitiveHandle, PrimitiveStyle, ScalarRepresentation,
    SceneHost,
};

/// A live primitive together with its style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedPrimitive {
    /// Handle assigned at creation.
    pub handle: PrimitiveHandle,
    /// Geometry.
    pub primitive: Primitive,
    /// Color and material.
    pub style: PrimitiveStyle,
}

/// Serializable view of the host's scene at one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    /// Frame shown when the snapshot was taken.
    pub frame: usize,
    /// Live primitives ordered by handle.
    pub primitives: Vec<RecordedPrimitive>,
}

/// Per-atom scalars most recently applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomScalars {
    /// One value per atom.
    pub values: Vec<f32>,
    /// Requested representation.
    pub representation: ScalarRepresentation,
}

/// In-memory [`SceneHost`].
#[derive(Debug, Default)]
pub struct RecordingHost {
    camera: Camera,
    current_frame: usize,
    next_handle: u64,
    live: FxHashMap<PrimitiveHandle, RecordedPrimitive>,
    created: u64,
    deleted: u64,
    atom_scalars: Option<AtomScalars>,
}

impl RecordingHost {
    /// Host viewing the scene through `camera`.
    #[must_use]
    pub fn with_camera(camera: Camera) -> Self {
        Self {
            camera,
            ..Self::default()
        }
    }

    /// Replace the active camera.
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    /// Active camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Number of live primitives.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.live.len()
    }

    /// Live primitive by handle.
    #[must_use]
    pub fn primitive(
        &self,
        handle: PrimitiveHandle,
    ) -> Option<&RecordedPrimitive> {
        self.live.get(&handle)
    }

    /// Total primitives created over the host's lifetime.
    #[must_use]
    pub fn created_total(&self) -> u64 {
        self.created
    }

    /// Total primitives deleted over the host's lifetime.
    #[must_use]
    pub fn deleted_total(&self) -> u64 {
        self.deleted
    }

    /// Scalars from the last [`SceneHost::apply_atom_scalars`] call.
    #[must_use]
    pub fn atom_scalars(&self) -> Option<&AtomScalars> {
        self.atom_scalars.as_ref()
    }

    /// Snapshot of every live primitive, ordered by handle.
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        let mut primitives: Vec<RecordedPrimitive> =
            self.live.values().cloned().collect();
        primitives.sort_by_key(|p| p.handle);
        SceneSnapshot {
            frame: self.current_frame,
            primitives,
        }
    }
}

impl SceneHost for RecordingHost {
    fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    fn current_frame(&self) -> usize {
        self.current_frame
    }

    fn set_current_frame(&mut self, frame: usize) {
        self.current_frame = frame;
    }

    fn create_primitive(
        &mut self,
        primitive: &Primitive,
        style: &PrimitiveStyle,
    ) -> PrimitiveHandle {
        let handle = PrimitiveHandle(self.next_handle);
        self.next_handle += 1;
        self.created += 1;
        let _ = self.live.insert(
            handle,
            RecordedPrimitive {
                handle,
                primitive: primitive.clone(),
                style: style.clone(),
            },
        );
        handle
    }

    fn delete_primitive(&mut self, handle: PrimitiveHandle) {
        if self.live.remove(&handle).is_some() {
            self.deleted += 1;
        }
    }

    fn apply_atom_scalars(
        &mut self,
        values: &[f32],
        representation: &ScalarRepresentation,
    ) {
        self.atom_scalars = Some(AtomScalars {
            values: values.to_vec(),
            representation: representation.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn cylinder() -> Primitive {
        Primitive::Cylinder {
            start: Vec3::ZERO,
            end: Vec3::X,
            radius: 0.1,
            resolution: 6,
        }
    }

    fn style() -> PrimitiveStyle {
        PrimitiveStyle {
            color: [1.0, 0.0, 0.0],
            material: "Opaque".to_owned(),
        }
    }

    #[test]
    fn handles_are_unique_and_deletable() {
        let mut host = RecordingHost::default();
        let a = host.create_primitive(&cylinder(), &style());
        let b = host.create_primitive(&cylinder(), &style());
        assert_ne!(a, b);
        assert_eq!(host.primitive_count(), 2);

        host.delete_primitive(a);
        host.delete_primitive(a);
        assert_eq!(host.primitive_count(), 1);
        assert_eq!(host.deleted_total(), 1);
        assert!(host.primitive(b).is_some());
    }

    #[test]
    fn snapshot_is_ordered_by_handle() {
        let mut host = RecordingHost::default();
        let handles: Vec<PrimitiveHandle> = (0..5)
            .map(|_| host.create_primitive(&cylinder(), &style()))
            .collect();
        host.set_current_frame(3);

        let snap = host.snapshot();
        assert_eq!(snap.frame, 3);
        let order: Vec<PrimitiveHandle> =
            snap.primitives.iter().map(|p| p.handle).collect();
        assert_eq!(order, handles);
    }

    #[test]
    fn view_direction_follows_camera() {
        let host = RecordingHost::with_camera(Camera::new(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::ZERO,
            Vec3::Y,
        ));
        assert!((host.view_direction() - Vec3::NEG_X).length() < 1e-5);
    }
}
