//! Owned set of primitives currently displayed for the active frame.

use crate::host::{PrimitiveHandle, SceneHost};
use crate::renderer::ArrowHandles;

/// Primitive handles for the frame on screen, grouped by series.
///
/// Only ever replaced wholesale: [`clear`](Self::clear) deletes every
/// member from the host before forgetting it.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GraphicsHandleSet {
    handles: Vec<PrimitiveHandle>,
    /// Primitive count per series index.
    per_series: Vec<usize>,
}

impl GraphicsHandleSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record both primitives of an arrow drawn for `series`.
    pub fn push_arrow(&mut self, series: usize, arrow: ArrowHandles) {
        if self.per_series.len() <= series {
            self.per_series.resize(series + 1, 0);
        }
        self.per_series[series] += 2;
        self.handles.push(arrow.body);
        self.handles.push(arrow.head);
    }

    /// Delete every member from the host, then empty the set.
    pub fn clear(&mut self, host: &mut dyn SceneHost) {
        for handle in self.handles.drain(..) {
            host.delete_primitive(handle);
        }
        self.per_series.clear();
    }

    /// Number of primitives held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether nothing is displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Primitive count per series, indexed by series.
    #[must_use]
    pub fn per_series(&self) -> &[usize] {
        &self.per_series
    }

    /// Handles in creation order.
    pub fn iter(&self) -> impl Iterator<Item = PrimitiveHandle> + '_ {
        self.handles.iter().copied()
    }
}
