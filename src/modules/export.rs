use std::path::{Path, PathBuf};

use eyre::eyre;
use log::info;
use mm_spr::{Spr, SprError};
use rayon::prelude::*;

#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(usize, SprError)>,
}

/// `<NNN>.png`, one-based and zero padded to the width of the frame count.
pub fn frame_file_name(frame_index: usize, frame_count: usize) -> String {
    let pad = frame_count.to_string().len();

    format!("{:0pad$}.png", frame_index + 1)
}

/// Writes the given frames as PNG into `<out_dir>/<sprite stem>/`.
///
/// A frame that fails to rasterize is reported and skipped, the rest are still written.
pub fn export_frames(
    spr: &Spr,
    sprite_path: &Path,
    out_dir: &Path,
    frames: &[usize],
) -> eyre::Result<ExportReport> {
    let stem = sprite_path
        .file_stem()
        .ok_or_else(|| eyre!("Cannot get file name of `{}`", sprite_path.display()))?;

    let folder = out_dir.join(stem);
    std::fs::create_dir_all(folder.as_path())?;

    let results = frames
        .par_iter()
        .map(|&frame_index| -> eyre::Result<PathBuf> {
            let image = spr.to_rgba8(frame_index)?;
            let path = folder.join(frame_file_name(frame_index, spr.frame_count()));

            image
                .save(path.as_path())
                .map_err(|op| eyre!("Cannot save `{}`: {}", path.display(), op))?;

            info!(
                "exported frame {} of {} to {}",
                frame_index + 1,
                spr.frame_count(),
                path.display()
            );

            Ok(path)
        })
        .collect::<Vec<_>>();

    let mut report = ExportReport::default();

    for (&frame_index, result) in frames.iter().zip(results) {
        match result {
            Ok(path) => report.written.push(path),
            Err(err) => match err.downcast::<SprError>() {
                Ok(err) => report.failed.push((frame_index, err)),
                // file system problems are not per frame
                Err(err) => return Err(err),
            },
        }
    }

    Ok(report)
}
