use std::{ops::Index, sync::OnceLock};

use crate::limits::Limits;

pub const SPR_SIGNATURE: [u8; 4] = *b"SPR\0";
pub const PALETTE_SIZE: usize = 256;
/// 256 RGB triples, no padding.
pub const PALETTE_BYTES: usize = PALETTE_SIZE * 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprHeader {
    pub signature: [u8; 4],
    /// Declared archive length. Informational only.
    pub size: u32,
    /// 2 is the older layout with a shorter offset block and no frame reserved fields.
    pub version: u32,
    pub frame_count: u32,
    pub palette_count: u32,
    pub reserved: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Rgb> for Rgba {
    fn from(Rgb { r, g, b }: Rgb) -> Self {
        Rgba { r, g, b, a: 255 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprPalette(pub [Rgb; PALETTE_SIZE]);

impl SprPalette {
    /// Stand-in palette for archives that carry none.
    pub fn greyscale() -> Self {
        Self(std::array::from_fn(|i| Rgb {
            r: i as u8,
            g: i as u8,
            b: i as u8,
        }))
    }

    pub fn colors(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.0
    }
}

impl Index<u8> for SprPalette {
    type Output = Rgb;

    fn index(&self, index: u8) -> &Self::Output {
        &self.0[index as usize]
    }
}

/// Offsets of one scanline, relative to the start of the frame record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowOffsets {
    /// Start of the run-length table.
    pub delta_offset: u32,
    /// Start of the palette index bytes.
    pub pixel_offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprFrame {
    /// Archive offset of the record, base for every row offset.
    pub begin_offset: usize,
    /// Record length, including anything after the row table.
    pub size: u32,
    /// Never 0, a raw 0 is read as 1.
    pub width: u32,
    /// Never 0, a raw 0 is read as 1.
    pub height: u32,
    pub center_x: i32,
    pub center_y: i32,
    pub name: String,
    /// Always a valid palette index.
    pub palette_index: u32,
    /// As stored in the archive.
    pub raw_palette_index: u32,
    /// Only present when the header version is above 2.
    pub reserved: Option<[u32; 2]>,
    /// Exactly `height` entries.
    pub rows: Vec<RowOffsets>,
}

impl SprFrame {
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

#[derive(Debug)]
pub struct Spr {
    pub header: SprHeader,
    /// Never empty.
    pub palettes: Vec<SprPalette>,
    pub frames: Vec<SprFrame>,
    /// Length of the skipped block between the palettes and the first frame.
    pub frame_table_len: usize,
    pub(crate) data: Vec<u8>,
    pub(crate) limits: Limits,
    pub(crate) rasters: Vec<OnceLock<Vec<u8>>>,
}
