//! Precomputed vector fields for every frame and every series.
//!
//! Built once during loading, then read-only. Redraws only look up a frame;
//! nothing is recomputed while scrubbing.

use crate::error::ForcevisError;
use crate::trajectory::Trajectory;

use super::{VectorField, VectorFieldBuilder};

/// Frame index → per-series vector fields, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct TrajectoryCache {
    /// `frames[f][s]` is series `s` at frame `f`.
    frames: Vec<Vec<VectorField>>,
    series_count: usize,
    atom_count: usize,
}

impl TrajectoryCache {
    /// Build fields for every frame in `[0, frame_count)` and every series.
    ///
    /// Fails with [`ForcevisError::ShapeMismatch`] before anything is
    /// cached if any series disagrees with the reference shape.
    pub fn build(
        reference: &Trajectory,
        series: &[Trajectory],
    ) -> Result<Self, ForcevisError> {
        let builder = VectorFieldBuilder::new(reference, series)?;
        let series_count = builder.series_count();

        let mut frames = Vec::with_capacity(reference.frame_count());
        for frame in 0..reference.frame_count() {
            let fields: Vec<VectorField> = (0..series_count)
                .filter_map(|s| builder.build(frame, s))
                .collect();
            frames.push(fields);
        }

        log::debug!(
            "trajectory cache: {} frames x {series_count} series x {} atoms",
            frames.len(),
            reference.atom_count()
        );

        Ok(Self {
            frames,
            series_count,
            atom_count: reference.atom_count(),
        })
    }

    /// Cached per-series fields for `frame`, in series order.
    ///
    /// `None` when the frame is out of range or no series were loaded.
    #[must_use]
    pub fn get(&self, frame: usize) -> Option<&[VectorField]> {
        if self.series_count == 0 {
            return None;
        }
        self.frames.get(frame).map(Vec::as_slice)
    }

    /// Number of cached frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Number of series per frame.
    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series_count
    }

    /// Number of atoms (entries) per field.
    #[must_use]
    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    /// Whether any frame has vector data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series_count == 0 || self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn traj(frames: Vec<Vec<Vec3>>) -> Trajectory {
        Trajectory::from_frames(frames).unwrap()
    }

    #[test]
    fn every_entry_matches_its_sources() {
        let reference = traj(
            (0..4)
                .map(|f| {
                    (0..3).map(|a| Vec3::splat((f * 10 + a) as f32)).collect()
                })
                .collect(),
        );
        let series: Vec<Trajectory> = (0..2)
            .map(|s| {
                traj(
                    (0..4)
                        .map(|f| {
                            (0..3)
                                .map(|a| {
                                    Vec3::new(s as f32, f as f32, a as f32)
                                })
                                .collect()
                        })
                        .collect(),
                )
            })
            .collect();

        let cache = TrajectoryCache::build(&reference, &series).unwrap();
        assert_eq!(cache.frame_count(), 4);
        assert_eq!(cache.series_count(), 2);

        for f in 0..4 {
            let fields = cache.get(f).unwrap();
            assert_eq!(fields.len(), 2);
            for (s, field) in fields.iter().enumerate() {
                for (a, entry) in field.iter().enumerate() {
                    assert_eq!(entry.anchor, reference.frame(f).unwrap()[a]);
                    assert_eq!(entry.vector, series[s].frame(f).unwrap()[a]);
                }
            }
        }
    }

    #[test]
    fn no_series_means_no_cached_frames() {
        let reference = traj(vec![vec![Vec3::ZERO]; 3]);
        let cache = TrajectoryCache::build(&reference, &[]).unwrap();
        assert!(cache.is_empty());
        assert!(cache.get(0).is_none());
    }

    #[test]
    fn out_of_range_frame_has_no_entry() {
        let reference = traj(vec![vec![Vec3::ZERO]; 2]);
        let series = [traj(vec![vec![Vec3::X]; 2])];
        let cache = TrajectoryCache::build(&reference, &series).unwrap();
        assert!(cache.get(1).is_some());
        assert!(cache.get(2).is_none());
    }

    #[test]
    fn shape_mismatch_builds_nothing() {
        let reference = traj(vec![vec![Vec3::ZERO; 2]; 2]);
        let series = [traj(vec![vec![Vec3::X; 3]; 2])];
        assert!(matches!(
            TrajectoryCache::build(&reference, &series),
            Err(ForcevisError::ShapeMismatch { .. })
        ));
    }
}
