use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mm_spr::Spr;

use super::*;

use crate::modules::export::{export_frames, ExportReport};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct ExportCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rasterizes sprite frames into PNG files
    Export {
        /// Path to .spr file
        path: PathBuf,
        /// Output folder
        ///
        /// Defaults to `out_dir` from config.toml, then to the folder of the sprite
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Only exports this frame (zero-based)
        #[arg(short, long)]
        frame: Option<usize>,
        /// Path to config.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub struct Export;

impl Cli for Export {
    fn name(&self) -> &'static str {
        "export"
    }

    fn cli(&self) -> CliRes {
        let cli = ExportCli::parse();

        let Commands::Export {
            path,
            out_dir,
            frame,
            config,
        } = cli.command;

        let report = match run(path, out_dir, frame, config) {
            Ok(report) => report,
            Err(err) => {
                println!("{}", err);
                return CliRes::Err;
            }
        };

        for path in &report.written {
            println!("{}", path.display());
        }

        for (frame_index, err) in &report.failed {
            println!("Cannot export frame {}: {}", frame_index, err);
        }

        if report.failed.is_empty() {
            CliRes::Ok
        } else {
            CliRes::Err
        }
    }

    fn cli_help(&self) {
        // handled by clap
        unreachable!()
    }
}

fn run(
    path: PathBuf,
    out_dir: Option<PathBuf>,
    frame: Option<usize>,
    config: Option<PathBuf>,
) -> eyre::Result<ExportReport> {
    let config = load_config(config.as_deref())?;

    let data = std::fs::read(path.as_path())?;
    let spr = Spr::open_with_limits(data, config.limits())?;

    let out_dir = out_dir
        .or(config.out_dir.map(PathBuf::from))
        .or_else(|| path.parent().map(|parent| parent.to_path_buf()))
        .unwrap_or_default();

    let frames: Vec<usize> = match frame {
        Some(frame) => vec![frame],
        None => (0..spr.frame_count()).collect(),
    };

    export_frames(&spr, path.as_path(), out_dir.as_path(), &frames)
}
