//! Per-frame atom coordinate trajectories.
//!
//! A [`Trajectory`] is an ordered list of frames, each holding one 3-D
//! triple per atom. The same type carries both the reference geometry
//! (anchors) and the vector series (raw XYZ components); interpretation is
//! up to the caller.

pub mod xyz;

use glam::Vec3;

use crate::error::ForcevisError;

/// Ordered frames of per-atom 3-D triples with a constant atom count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trajectory {
    frames: Vec<Vec<Vec3>>,
    atom_count: usize,
}

impl Trajectory {
    /// Build a trajectory, rejecting frames whose atom count differs from
    /// the first frame.
    pub fn from_frames(frames: Vec<Vec<Vec3>>) -> Result<Self, ForcevisError> {
        let atom_count = frames.first().map_or(0, Vec::len);
        if let Some((frame, bad)) = frames
            .iter()
            .enumerate()
            .find(|(_, f)| f.len() != atom_count)
        {
            return Err(ForcevisError::InconsistentFrame {
                frame,
                expected: atom_count,
                found: bad.len(),
            });
        }
        Ok(Self { frames, atom_count })
    }

    /// Number of frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of atoms in every frame.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// Whether the trajectory holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Coordinates of one frame, or `None` past the end.
    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&[Vec3]> {
        self.frames.get(index).map(Vec::as_slice)
    }

    /// `(frames, atoms)` pair used for shape comparisons.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.frames.len(), self.atom_count)
    }
}
