//! Camera-aware arrow for one anchor/vector pair.
//!
//! Each arrow is a cylinder body plus a cone head. Arrows of different
//! series at the same anchor are pushed apart along the axis
//! perpendicular to both the view direction and the vector, so
//! overlapping series stay distinguishable from the current viewpoint.
//!
//! The offset axis is computed per vector, not once per redraw; two
//! arrows at the same anchor with different directions are separated
//! along different axes.

use glam::Vec3;

use crate::field::VectorFieldEntry;
use crate::host::{Primitive, PrimitiveHandle, PrimitiveStyle, SceneHost};
use crate::options::ArrowOptions;

/// Resolved geometry for one arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowGeometry {
    /// Anchor after the per-series offset.
    pub start: Vec3,
    /// Where the body ends and the head begins.
    pub body_end: Vec3,
    /// Head apex.
    pub tip: Vec3,
    /// Body (cylinder) radius.
    pub body_radius: f32,
    /// Head (cone) base radius.
    pub head_radius: f32,
    /// Unit axis used for the series offset; zero when degenerate.
    pub offset_axis: Vec3,
}

impl ArrowGeometry {
    /// Cylinder from `start` to `body_end`.
    #[must_use]
    pub fn body(&self, resolution: u32) -> Primitive {
        Primitive::Cylinder {
            start: self.start,
            end: self.body_end,
            radius: self.body_radius,
            resolution,
        }
    }

    /// Cone from `body_end` to `tip`.
    #[must_use]
    pub fn head(&self, resolution: u32) -> Primitive {
        Primitive::Cone {
            base: self.body_end,
            tip: self.tip,
            radius: self.head_radius,
            resolution,
        }
    }
}

/// Handles of the two primitives that make up one arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowHandles {
    /// Cylinder body.
    pub body: PrimitiveHandle,
    /// Cone head.
    pub head: PrimitiveHandle,
}

/// Draws vectors as two-primitive arrows.
#[derive(Debug, Clone, Default)]
pub struct ArrowRenderer {
    options: ArrowOptions,
}

impl ArrowRenderer {
    /// Renderer using the given arrow options.
    #[must_use]
    pub fn new(options: ArrowOptions) -> Self {
        Self { options }
    }

    /// Compute arrow geometry without touching the host.
    ///
    /// - `view_dir`: camera view direction (normalized here)
    /// - `series`: series index; the anchor moves by `(series - 0.5) *
    ///   separation` along the offset axis, so two series straddle the
    ///   true anchor
    ///
    /// A zero vector, or one parallel to the view direction, has no
    /// perpendicular axis and is drawn without offset.
    #[must_use]
    pub fn geometry(
        &self,
        view_dir: Vec3,
        anchor: Vec3,
        vector: Vec3,
        series: usize,
    ) -> ArrowGeometry {
        let opts = &self.options;
        let v_cam = view_dir.normalize_or_zero();
        let v_dir = vector.normalize_or_zero();
        let offset_axis = v_cam.cross(v_dir).normalize_or_zero();
        if offset_axis == Vec3::ZERO {
            log::debug!(
                "no offset axis for vector {vector} (zero or parallel to view)"
            );
        }

        let start = anchor
            + offset_axis * ((series as f32 - 0.5) * opts.separation);
        let full = vector * opts.scale;
        let body_end = start + full * opts.body_fraction;
        let tip = start + full;

        let body_radius =
            (opts.radius_fraction * vector.length()).min(opts.radius);
        let head_radius = opts.head_radius_factor * body_radius;

        ArrowGeometry {
            start,
            body_end,
            tip,
            body_radius,
            head_radius,
            offset_axis,
        }
    }

    /// Draw one arrow for `entry` and return the handles of its body and
    /// head. Always creates exactly two primitives.
    pub fn draw(
        &self,
        host: &mut dyn SceneHost,
        entry: &VectorFieldEntry,
        series: usize,
        color: [f32; 3],
    ) -> ArrowHandles {
        let geometry = self.geometry(
            host.view_direction(),
            entry.anchor,
            entry.vector,
            series,
        );
        let style = PrimitiveStyle {
            color,
            material: self.options.material.clone(),
        };
        let resolution = self.options.resolution;
        let body = host.create_primitive(&geometry.body(resolution), &style);
        let head = host.create_primitive(&geometry.head(resolution), &style);
        ArrowHandles { body, head }
    }
}
