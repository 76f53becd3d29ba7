//! Anchor/vector pairs for one frame of one vector series.
//!
//! The reference trajectory supplies anchors; each series trajectory
//! supplies raw vector components for the same atom in the same frame.
//! Series values are used as-is, so callers pre-scale them to order-1
//! magnitudes before loading.

pub mod cache;

use glam::Vec3;
use serde::Serialize;

use crate::error::ForcevisError;
use crate::trajectory::Trajectory;

pub use cache::TrajectoryCache;

/// One arrow to draw: where it starts and what it points along.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VectorFieldEntry {
    /// Reference atom position.
    pub anchor: Vec3,
    /// Series value for the same atom, as direction and magnitude.
    pub vector: Vec3,
}

/// One frame of one series, ordered by atom index.
pub type VectorField = Vec<VectorFieldEntry>;

/// Check that `series` has the same frame and atom counts as `reference`.
pub fn check_shape(
    reference: &Trajectory,
    series: &Trajectory,
    series_index: usize,
) -> Result<(), ForcevisError> {
    let (expected_frames, expected_atoms) = reference.shape();
    let (found_frames, found_atoms) = series.shape();
    if (expected_frames, expected_atoms) == (found_frames, found_atoms) {
        return Ok(());
    }
    Err(ForcevisError::ShapeMismatch {
        series: series_index,
        expected_frames,
        found_frames,
        expected_atoms,
        found_atoms,
    })
}

/// Assembles per-frame vector fields from a reference and its series.
///
/// Shapes are validated once at construction, so [`build`](Self::build)
/// only has to bounds-check indices.
pub struct VectorFieldBuilder<'a> {
    reference: &'a Trajectory,
    series: &'a [Trajectory],
}

impl<'a> VectorFieldBuilder<'a> {
    /// Validate every series against the reference.
    ///
    /// Fails with [`ForcevisError::ShapeMismatch`] on the first series
    /// whose frame or atom count differs.
    pub fn new(
        reference: &'a Trajectory,
        series: &'a [Trajectory],
    ) -> Result<Self, ForcevisError> {
        for (index, s) in series.iter().enumerate() {
            check_shape(reference, s, index)?;
        }
        Ok(Self { reference, series })
    }

    /// Number of series this builder draws from.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Vector field for `series` at `frame`, or `None` if either index is
    /// out of range.
    #[must_use]
    pub fn build(&self, frame: usize, series: usize) -> Option<VectorField> {
        let anchors = self.reference.frame(frame)?;
        let vectors = self.series.get(series)?.frame(frame)?;
        Some(
            anchors
                .iter()
                .zip(vectors)
                .map(|(&anchor, &vector)| VectorFieldEntry { anchor, vector })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn traj(frames: Vec<Vec<Vec3>>) -> Trajectory {
        Trajectory::from_frames(frames).unwrap()
    }

    #[test]
    fn entries_pair_reference_and_series_by_atom() {
        let reference = traj(vec![vec![Vec3::ZERO, Vec3::ONE]]);
        let series = [traj(vec![vec![Vec3::X, Vec3::Y]])];
        let builder = VectorFieldBuilder::new(&reference, &series).unwrap();

        let field = builder.build(0, 0).unwrap();
        assert_eq!(
            field,
            vec![
                VectorFieldEntry {
                    anchor: Vec3::ZERO,
                    vector: Vec3::X
                },
                VectorFieldEntry {
                    anchor: Vec3::ONE,
                    vector: Vec3::Y
                },
            ]
        );
    }

    #[test]
    fn vectors_are_not_relative_to_anchor() {
        let reference = traj(vec![vec![Vec3::new(10.0, 10.0, 10.0)]]);
        let series = [traj(vec![vec![Vec3::new(0.5, 0.0, 0.0)]])];
        let builder = VectorFieldBuilder::new(&reference, &series).unwrap();
        assert_eq!(builder.build(0, 0).unwrap()[0].vector.x, 0.5);
    }

    #[test]
    fn atom_count_mismatch() {
        let reference = traj(vec![vec![Vec3::ZERO; 2]]);
        let series = [traj(vec![vec![Vec3::X; 3]])];
        let err = VectorFieldBuilder::new(&reference, &series)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ForcevisError::ShapeMismatch {
                series: 0,
                expected_atoms: 2,
                found_atoms: 3,
                ..
            }
        ));
    }

    #[test]
    fn frame_count_mismatch_names_the_series() {
        let reference = traj(vec![vec![Vec3::ZERO]; 2]);
        let series =
            [traj(vec![vec![Vec3::X]; 2]), traj(vec![vec![Vec3::X]; 3])];
        let err = VectorFieldBuilder::new(&reference, &series)
            .err()
            .unwrap();
        assert!(matches!(
            err,
            ForcevisError::ShapeMismatch {
                series: 1,
                expected_frames: 2,
                found_frames: 3,
                ..
            }
        ));
    }

    #[test]
    fn out_of_range_indices() {
        let reference = traj(vec![vec![Vec3::ZERO]]);
        let series = [traj(vec![vec![Vec3::X]])];
        let builder = VectorFieldBuilder::new(&reference, &series).unwrap();
        assert!(builder.build(1, 0).is_none());
        assert!(builder.build(0, 1).is_none());
    }
}
