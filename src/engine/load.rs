//! One-time load phase: read trajectories, validate shapes, build the cache.
//!
//! Everything here completes before a controller exists, so no redraw can
//! ever see a partially built cache.

use std::path::Path;
use std::sync::Arc;

use crate::error::ForcevisError;
use crate::field::TrajectoryCache;
use crate::options::Options;
use crate::renderer::ArrowRenderer;
use crate::trajectory::xyz::load_xyz;
use crate::trajectory::Trajectory;

use super::controller::FrameChangeController;

/// Reference geometry plus the vector cache built from it.
#[derive(Debug, Clone)]
pub struct LoadedScene {
    /// Anchor trajectory.
    pub reference: Trajectory,
    /// Per-frame, per-series vector fields.
    pub cache: Arc<TrajectoryCache>,
}

impl LoadedScene {
    /// Validate `series` against `reference` and build the cache.
    pub fn from_trajectories(
        reference: Trajectory,
        series: &[Trajectory],
    ) -> Result<Self, ForcevisError> {
        let cache = TrajectoryCache::build(&reference, series)?;
        log::info!(
            "loaded {} frames x {} atoms with {} vector series",
            reference.frame_count(),
            reference.atom_count(),
            cache.series_count()
        );
        Ok(Self {
            reference,
            cache: Arc::new(cache),
        })
    }

    /// Number of frames in the reference trajectory.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.reference.frame_count()
    }

    /// Controller drawing this scene with the arrow and palette settings
    /// from `options`.
    #[must_use]
    pub fn controller(&self, options: &Options) -> FrameChangeController {
        FrameChangeController::new(
            Arc::clone(&self.cache),
            ArrowRenderer::new(options.arrow.clone()),
            options.palette.to_palette(),
        )
    }
}

/// Read the reference and every vector file, then build the cache.
///
/// Series order follows `series_paths` and fixes each series' color and
/// offset. Fails with [`ForcevisError::FileUnreadable`] on the first
/// unreadable file and [`ForcevisError::ShapeMismatch`] on the first series
/// whose shape differs from the reference.
pub fn load_vector_scene<P: AsRef<Path>>(
    reference_path: &Path,
    series_paths: &[P],
) -> Result<LoadedScene, ForcevisError> {
    let reference = load_xyz(reference_path)?;
    log::debug!(
        "reference {}: {} frames x {} atoms",
        reference_path.display(),
        reference.frame_count(),
        reference.atom_count()
    );

    let mut series = Vec::with_capacity(series_paths.len());
    for path in series_paths {
        let path = path.as_ref();
        let traj = load_xyz(path)?;
        log::debug!(
            "  series {} ({}): {} frames x {} atoms",
            series.len(),
            path.display(),
            traj.frame_count(),
            traj.atom_count()
        );
        series.push(traj);
    }

    LoadedScene::from_trajectories(reference, &series)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use glam::Vec3;

    use super::*;

    #[test]
    fn missing_vector_file_aborts_loading() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("ref.xyz");
        std::fs::write(&reference, "1\nref\nC 0 0 0\n").unwrap();

        let err = load_vector_scene(&reference, &[PathBuf::from("nope.xyz")])
            .unwrap_err();
        assert!(matches!(err, ForcevisError::FileUnreadable { .. }));
    }

    #[test]
    fn controller_shares_the_cache() {
        let reference =
            Trajectory::from_frames(vec![vec![Vec3::ZERO]; 2]).unwrap();
        let series = [Trajectory::from_frames(vec![vec![Vec3::X]; 2]).unwrap()];
        let scene = LoadedScene::from_trajectories(reference, &series).unwrap();
        let ctl = scene.controller(&Options::default());
        assert!(Arc::ptr_eq(ctl.cache(), &scene.cache));
        assert_eq!(scene.frame_count(), 2);
    }
}
