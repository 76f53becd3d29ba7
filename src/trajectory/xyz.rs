//! Multi-frame XYZ reader.
//!
//! Each frame is an atom-count line, a comment line, then one
//! `<label> <x> <y> <z>` line per atom. Columns past `z` are ignored and a
//! bare `x y z` line (no label) is accepted. Blank lines between frames are
//! skipped; an empty file is a zero-frame trajectory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::Vec3;

use super::Trajectory;
use crate::error::ForcevisError;

/// Load a trajectory from a multi-frame XYZ file.
pub fn load_xyz(path: &Path) -> Result<Trajectory, ForcevisError> {
    let unreadable = |source| ForcevisError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unreadable)?;
    let label = path.display().to_string();
    parse_xyz(BufReader::new(file), &label).map_err(|e| match e {
        ForcevisError::Io(source) => unreadable(source),
        other => other,
    })
}

/// Parse multi-frame XYZ text from any buffered reader.
///
/// `label` names the source in parse errors.
pub fn parse_xyz<R: BufRead>(
    reader: R,
    label: &str,
) -> Result<Trajectory, ForcevisError> {
    let mut lines = reader.lines().enumerate();
    let mut frames: Vec<Vec<Vec3>> = Vec::new();

    let parse_err = |line: usize, message: String| ForcevisError::Parse {
        path: label.to_owned(),
        line: line + 1,
        message,
    };

    while let Some((idx, line)) = lines.next() {
        let line =
            line.map_err(|e| ForcevisError::line_read(label, idx + 1, e))?;
        let header = line.trim();
        if header.is_empty() {
            continue;
        }

        let atom_count: usize = header.parse().map_err(|_| {
            parse_err(idx, format!("expected atom count, found {header:?}"))
        })?;

        let Some((comment_idx, comment)) = lines.next() else {
            return Err(parse_err(
                idx + 1,
                format!("frame {} is missing its comment line", frames.len()),
            ));
        };
        let _ = comment.map_err(|e| {
            ForcevisError::line_read(label, comment_idx + 1, e)
        })?;

        // The header is untrusted; grow as atom lines arrive.
        let mut coords = Vec::new();
        for read in 0..atom_count {
            let Some((atom_idx, atom_line)) = lines.next() else {
                return Err(parse_err(
                    idx + 2 + read,
                    format!(
                        "frame {} ends after {read} of {atom_count} atoms",
                        frames.len()
                    ),
                ));
            };
            let atom_line = atom_line.map_err(|e| {
                ForcevisError::line_read(label, atom_idx + 1, e)
            })?;
            let pos = parse_atom_line(&atom_line)
                .map_err(|message| parse_err(atom_idx, message))?;
            coords.push(pos);
        }
        frames.push(coords);
    }

    Trajectory::from_frames(frames)
}

/// Parse one atom record into its coordinate triple.
fn parse_atom_line(line: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let xyz = match parts.len() {
        3 => &parts[..],
        n if n >= 4 => &parts[1..4],
        _ => return Err(format!("invalid atom record: {line:?}")),
    };

    let mut v = [0.0_f32; 3];
    for (slot, token) in v.iter_mut().zip(xyz) {
        *slot = token
            .parse()
            .map_err(|_| format!("invalid coordinate {token:?}"))?;
    }
    Ok(Vec3::from_array(v))
}
