use log::{debug, warn};

use crate::{
    cursor::ByteCursor, error::SprError, RowOffsets, SprFrame, SprHeader, SprPalette, Rgb,
    PALETTE_BYTES, PALETTE_SIZE, SPR_SIGNATURE,
};

/// size, width, height, center x/y, name, palette index.
const FRAME_FIXED_BYTES: usize = 4 * 5 + 8 + 4;
const FRAME_RESERVED_BYTES: usize = 4 * 2;
const ROW_BYTES: usize = 4 * 2;
const FRAME_NAME_LENGTH: usize = 8;

/// Everything the directory walk produces, before the archive bytes are attached.
pub(crate) struct SprLayout {
    pub header: SprHeader,
    pub palettes: Vec<SprPalette>,
    pub frame_table_len: usize,
    pub frames: Vec<SprFrame>,
}

pub fn parse_header(cursor: &mut ByteCursor) -> Result<SprHeader, SprError> {
    let bytes = cursor.read_bytes(4)?;
    let signature = [bytes[0], bytes[1], bytes[2], bytes[3]];

    if signature != SPR_SIGNATURE {
        return Err(SprError::InvalidSignature { signature });
    }

    Ok(SprHeader {
        signature,
        size: cursor.read_u32()?,
        version: cursor.read_u32()?,
        frame_count: cursor.read_u32()?,
        palette_count: cursor.read_u32()?,
        reserved: cursor.read_u32()?,
    })
}

pub fn parse_palette(cursor: &mut ByteCursor) -> Result<SprPalette, SprError> {
    let bytes = cursor.read_bytes(PALETTE_BYTES)?;
    let mut colors = [Rgb::default(); PALETTE_SIZE];

    colors
        .iter_mut()
        .zip(bytes.chunks_exact(3))
        .for_each(|(color, rgb)| {
            *color = Rgb {
                r: rgb[0],
                g: rgb[1],
                b: rgb[2],
            }
        });

    Ok(SprPalette(colors))
}

/// Reads `palette_count` palettes, or makes up a greyscale one if there are none.
pub fn parse_palettes(
    cursor: &mut ByteCursor,
    palette_count: u32,
) -> Result<Vec<SprPalette>, SprError> {
    if palette_count == 0 {
        return Ok(vec![SprPalette::greyscale()]);
    }

    let palette_count = palette_count as usize;
    let mut palettes = Vec::with_capacity(palette_count.min(cursor.remaining() / PALETTE_BYTES));

    for _ in 0..palette_count {
        palettes.push(parse_palette(cursor)?);
    }

    Ok(palettes)
}

/// Length of the offset block sitting between the palettes and the first frame.
///
/// Version 2 archives are missing the last entry.
pub fn frame_table_len(header: &SprHeader) -> usize {
    let len = (header.frame_count as usize).saturating_mul(4);

    if header.version == 2 {
        len.saturating_sub(4)
    } else {
        len
    }
}

pub fn parse_frame(
    cursor: &mut ByteCursor,
    version: u32,
    palette_count: usize,
) -> Result<SprFrame, SprError> {
    let begin_offset = cursor.position();

    let size = cursor.read_u32()?;
    let raw_width = cursor.read_u32()?;
    let raw_height = cursor.read_u32()?;
    let center_x = cursor.read_i32()?;
    let center_y = cursor.read_i32()?;

    let mut name = cursor.read_text(FRAME_NAME_LENGTH)?;

    if let Some(null) = name.find('\0') {
        name.truncate(null);
    }

    let raw_palette_index = cursor.read_u32()?;

    let reserved = if version > 2 {
        Some([cursor.read_u32()?, cursor.read_u32()?])
    } else {
        None
    };

    // some archives have unused frames with everything zeroed
    let width = raw_width.max(1);
    let height = raw_height.max(1);

    if raw_width == 0 || raw_height == 0 {
        warn!(
            "frame at {begin_offset:#x} has zero size {raw_width}x{raw_height}, using {width}x{height}"
        );
    }

    // and some have garbage palette indices
    let palette_index = if (raw_palette_index as usize) < palette_count {
        raw_palette_index
    } else {
        warn!(
            "frame at {begin_offset:#x} uses palette {raw_palette_index} of {palette_count}, using palette 0"
        );
        0
    };

    let mut rows = Vec::with_capacity((height as usize).min(cursor.remaining() / ROW_BYTES));

    for _ in 0..height {
        rows.push(RowOffsets {
            delta_offset: cursor.read_u32()?,
            pixel_offset: cursor.read_u32()?,
        });
    }

    // the declared size is the only reliable way to the next record
    cursor.seek(begin_offset.saturating_add(size as usize));

    debug!("frame \"{name}\" at {begin_offset:#x}: {size} bytes, {width}x{height}");

    Ok(SprFrame {
        begin_offset,
        size,
        width,
        height,
        center_x,
        center_y,
        name,
        palette_index,
        raw_palette_index,
        reserved,
        rows,
    })
}

pub fn parse_frames(
    cursor: &mut ByteCursor,
    header: &SprHeader,
    palette_count: usize,
) -> Result<Vec<SprFrame>, SprError> {
    let frame_count = header.frame_count as usize;

    let smallest_frame = FRAME_FIXED_BYTES
        + ROW_BYTES
        + if header.version > 2 {
            FRAME_RESERVED_BYTES
        } else {
            0
        };

    // records do not overlap, so a frame count the buffer cannot hold is truncation
    let wanted = frame_count.saturating_mul(smallest_frame);

    if wanted > cursor.remaining() {
        return Err(SprError::UnexpectedEndOfData {
            offset: cursor.position(),
            wanted,
        });
    }

    let mut frames = Vec::with_capacity(frame_count);

    for _ in 0..frame_count {
        frames.push(parse_frame(cursor, header.version, palette_count)?);
    }

    Ok(frames)
}

pub(crate) fn parse_spr(data: &[u8]) -> Result<SprLayout, SprError> {
    let mut cursor = ByteCursor::new(data);

    let header = parse_header(&mut cursor)?;

    if header.size as usize != data.len() {
        warn!(
            "sprite declares {} bytes but has {} bytes",
            header.size,
            data.len()
        );
    }

    let palettes = parse_palettes(&mut cursor, header.palette_count)?;

    let frame_table_len = frame_table_len(&header);
    cursor.seek(cursor.position().saturating_add(frame_table_len));

    let frames = parse_frames(&mut cursor, &header, palettes.len())?;

    debug!(
        "sprite version {}: {} palettes, {} frames",
        header.version,
        palettes.len(),
        frames.len()
    );

    Ok(SprLayout {
        header,
        palettes,
        frame_table_len,
        frames,
    })
}
