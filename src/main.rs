//! `forcevis` command-line tool.
//!
//! Loads a reference trajectory and its vector series, plays every frame
//! through a headless host, and optionally exports the drawn arrows per
//! frame as JSON.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use forcevis::colorize::{load_scalars, ScalarColorizer};
use forcevis::engine::load_vector_scene;
use forcevis::error::ForcevisError;
use forcevis::host::camera::Camera;
use forcevis::host::playback::Playback;
use forcevis::host::recording::{RecordingHost, SceneSnapshot};
use forcevis::options::Options;
use forcevis::trajectory::xyz::load_xyz;

#[derive(Parser)]
#[command(
    name = "forcevis",
    version,
    about = "Force vector overlays for molecular trajectories"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw vector series over a reference trajectory, frame by frame.
    Render {
        /// Reference coordinate trajectory (multi-frame XYZ).
        reference: PathBuf,
        /// Vector trajectories; their order sets each series' color and
        /// offset.
        vectors: Vec<PathBuf>,
        /// TOML options file.
        #[arg(long)]
        options: Option<PathBuf>,
        /// Draw only this frame instead of playing every frame.
        #[arg(long)]
        frame: Option<usize>,
        /// Write per-frame scene snapshots to this JSON file.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Color atoms by one scalar value per atom.
    Colorize {
        /// Reference coordinate trajectory (multi-frame XYZ).
        reference: PathBuf,
        /// Newline-separated values, one per atom.
        values: PathBuf,
        /// TOML options file.
        #[arg(long)]
        options: Option<PathBuf>,
    },
    /// Print the JSON Schema of the options file.
    Schema,
}

fn load_options(path: Option<&Path>) -> Result<Options, ForcevisError> {
    path.map_or_else(|| Ok(Options::default()), Options::load)
}

fn render(
    reference: &Path,
    vectors: &[PathBuf],
    options: &Options,
    frame: Option<usize>,
    export: Option<&Path>,
) -> Result<(), ForcevisError> {
    let scene = load_vector_scene(reference, vectors)?;

    let host = RecordingHost::with_camera(Camera::from(&options.camera));
    let controller = Rc::new(RefCell::new(scene.controller(options)));
    let mut playback = Playback::new(host, scene.frame_count());
    playback.set_looping(false);
    playback.subscribe(Box::new(Rc::clone(&controller)));

    let mut snapshots: Vec<SceneSnapshot> = Vec::new();
    let mut record = |playback: &Playback<RecordingHost>| {
        let ctl = controller.borrow();
        log::info!(
            "frame {}: {} primitives (per series: {:?})",
            playback.current_frame(),
            playback.host().primitive_count(),
            ctl.handles().per_series()
        );
        if export.is_some() {
            snapshots.push(playback.host().snapshot());
        }
    };

    match frame {
        Some(f) => {
            if !playback.seek(f) {
                return Err(ForcevisError::FrameOutOfRange {
                    frame: f,
                    frames: playback.total_frames(),
                });
            }
            record(&playback);
        }
        None if playback.total_frames() > 0 => {
            let _ = playback.seek(0);
            record(&playback);
            while playback.step().is_some() {
                record(&playback);
            }
        }
        None => log::warn!("reference trajectory has no frames"),
    }

    if let Some(path) = export {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &snapshots)
            .map_err(|e| ForcevisError::Io(e.into()))?;
        writer.flush()?;
        log::info!("wrote {} frames to {}", snapshots.len(), path.display());
    }
    Ok(())
}

fn colorize(
    reference: &Path,
    values: &Path,
    options: &Options,
) -> Result<(), ForcevisError> {
    let reference = load_xyz(reference)?;
    let values = load_scalars(values)?;
    let mut host = RecordingHost::default();
    ScalarColorizer::new(options.colorize.clone()).apply(
        &mut host,
        &reference,
        &values,
    )
}

fn run(cli: Cli) -> Result<(), ForcevisError> {
    match cli.command {
        Command::Render {
            reference,
            vectors,
            options,
            frame,
            export,
        } => {
            let options = load_options(options.as_deref())?;
            render(&reference, &vectors, &options, frame, export.as_deref())
        }
        Command::Colorize {
            reference,
            values,
            options,
        } => {
            let options = load_options(options.as_deref())?;
            colorize(&reference, &values, &options)
        }
        Command::Schema => {
            let mut out = io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &Options::json_schema())
                .map_err(|e| ForcevisError::Io(e.into()))?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
