//! Expands a frame's row run-length tables into RGBA.
//!
//! Each scanline has two offsets into the frame record. The delta offset points at a
//! table of run lengths alternating between transparent (even index) and opaque
//! (odd index) runs. The pixel offset points at palette indices for the opaque runs.
//!
//! Tables carry no length. A row's table ends where the next row's table starts, and
//! the last row's table ends where the first row's pixel data starts.
use crate::{cursor::ByteCursor, error::SprError, Rgba, SprFrame, SprPalette};

const BYTES_PER_PIXEL: usize = 4;
/// Longest run one table byte describes.
const MAX_RUN: usize = u8::MAX as usize;

/// Rasterizes `frame` into a `width * height * 4` RGBA buffer, row-major, top to bottom.
///
/// `data` is the whole archive the frame was parsed from.
pub fn rasterize_frame(
    data: &[u8],
    frame: &SprFrame,
    palette: &SprPalette,
) -> Result<Vec<u8>, SprError> {
    let width = frame.width as usize;
    let height = frame.height as usize;

    let overflow = |pixel: usize| SprError::RasterOverflow {
        width: frame.width,
        height: frame.height,
        pixel,
    };

    // a frame's pixels are described by run bytes stored in the archive
    let max_pixels = data.len().saturating_mul(MAX_RUN);

    if frame.pixel_count() > max_pixels as u64 {
        return Err(SprError::LimitExceeded {
            message: format!(
                "{}x{} frame is larger than a {} byte archive can describe",
                frame.width,
                frame.height,
                data.len()
            ),
        });
    }

    let pixel_count = width.checked_mul(height).ok_or_else(|| overflow(usize::MAX))?;
    let buffer_len = pixel_count
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or_else(|| overflow(pixel_count))?;

    let mut buffer = Vec::new();

    buffer
        .try_reserve_exact(buffer_len)
        .map_err(|_| SprError::LimitExceeded {
            message: format!(
                "cannot allocate {buffer_len} bytes for a {}x{} frame",
                frame.width, frame.height
            ),
        })?;

    // untouched pixels stay transparent
    buffer.resize(buffer_len, 0);
    let mut cursor = ByteCursor::new(data);

    let Some(first_row) = frame.rows.first() else {
        return Ok(buffer);
    };

    for (y, row) in frame.rows.iter().enumerate().take(height) {
        let next_anchor = frame
            .rows
            .get(y + 1)
            .map(|next| next.delta_offset)
            .unwrap_or(first_row.pixel_offset);

        // an anchor before our own table means an empty table
        let delta_length = next_anchor.saturating_sub(row.delta_offset) as usize;

        cursor.seek(frame.begin_offset.saturating_add(row.delta_offset as usize));
        let runs = cursor.read_bytes(delta_length)?;

        let pixel_start = frame.begin_offset.saturating_add(row.pixel_offset as usize);
        let mut pixel = y * width;

        for (run_index, &run) in runs.iter().enumerate() {
            let run = run as usize;
            let run_end = pixel + run;

            if run_end > pixel_count {
                return Err(overflow(run_end - 1));
            }

            if run_index % 2 == 0 {
                buffer[pixel * BYTES_PER_PIXEL..run_end * BYTES_PER_PIXEL]
                    .chunks_exact_mut(BYTES_PER_PIXEL)
                    .for_each(|out| out.copy_from_slice(&Rgba::TRANSPARENT.to_array()));
            } else {
                // every opaque run starts over at the row's pixel offset
                cursor.seek(pixel_start);
                let indices = cursor.read_bytes(run)?;

                buffer[pixel * BYTES_PER_PIXEL..run_end * BYTES_PER_PIXEL]
                    .chunks_exact_mut(BYTES_PER_PIXEL)
                    .zip(indices)
                    .for_each(|(out, &index)| {
                        out.copy_from_slice(&Rgba::from(palette[index]).to_array())
                    });
            }

            pixel = run_end;
        }
    }

    Ok(buffer)
}
