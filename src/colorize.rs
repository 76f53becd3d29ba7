//! Per-atom scalar coloring (e.g. electrostatic potential or charges).
//!
//! Reads one value per line and hands them to the host as per-atom
//! scalars with a transparent, scalar-colored space-filling representation.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ForcevisError;
use crate::host::{ScalarRepresentation, SceneHost};
use crate::options::ColorizeOptions;
use crate::trajectory::Trajectory;

/// Parse newline-separated floats. Blank lines are skipped.
pub fn read_scalars<R: BufRead>(
    reader: R,
    label: &str,
) -> Result<Vec<f32>, ForcevisError> {
    let mut values = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line =
            line.map_err(|e| ForcevisError::line_read(label, idx + 1, e))?;
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        let value = token.parse().map_err(|_| ForcevisError::Parse {
            path: label.to_owned(),
            line: idx + 1,
            message: format!("invalid scalar value {token:?}"),
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Read a scalar file from disk.
pub fn load_scalars(path: &Path) -> Result<Vec<f32>, ForcevisError> {
    let unreadable = |source| ForcevisError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unreadable)?;
    read_scalars(BufReader::new(file), &path.display().to_string()).map_err(
        |e| match e {
            ForcevisError::Io(source) => unreadable(source),
            other => other,
        },
    )
}

/// Applies per-atom scalars to the host.
#[derive(Debug, Clone, Default)]
pub struct ScalarColorizer {
    options: ColorizeOptions,
}

impl ScalarColorizer {
    /// Colorizer using the given representation options.
    #[must_use]
    pub fn new(options: ColorizeOptions) -> Self {
        Self { options }
    }

    /// Representation requested from the host.
    #[must_use]
    pub fn representation(&self) -> ScalarRepresentation {
        ScalarRepresentation {
            style: self.options.representation.clone(),
            material: self.options.material.clone(),
            opacity: self.options.opacity,
        }
    }

    /// Assign `values` to the atoms of `reference`.
    ///
    /// Fails with [`ForcevisError::ScalarCountMismatch`] unless there is
    /// exactly one value per atom.
    pub fn apply(
        &self,
        host: &mut dyn SceneHost,
        reference: &Trajectory,
        values: &[f32],
    ) -> Result<(), ForcevisError> {
        if values.len() != reference.atom_count() {
            return Err(ForcevisError::ScalarCountMismatch {
                expected: reference.atom_count(),
                found: values.len(),
            });
        }

        let (min, max) = values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        log::info!(
            "coloring {} atoms by scalar (range {min} .. {max})",
            values.len()
        );

        host.apply_atom_scalars(values, &self.representation());
        Ok(())
    }
}
