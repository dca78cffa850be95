use std::{ffi::OsStr, path::Path, sync::OnceLock};

use image::RgbaImage;

use crate::{
    error::SprError, limits::Limits, parser::parse_spr, raster::rasterize_frame, Spr, SprFrame,
    SprPalette,
};

impl Spr {
    pub fn open_from_bytes(i: &[u8]) -> Result<Spr, SprError> {
        Self::open_with_limits(i.to_vec(), Limits::default())
    }

    pub fn open_from_file(path: impl AsRef<OsStr> + AsRef<Path>) -> Result<Spr, SprError> {
        let file = std::fs::read(path)?;

        Self::open_with_limits(file, Limits::default())
    }

    /// Takes ownership of the archive bytes, frames are rasterized from them on demand.
    pub fn open_with_limits(data: Vec<u8>, limits: Limits) -> Result<Spr, SprError> {
        let layout = parse_spr(&data)?;
        let rasters = layout.frames.iter().map(|_| OnceLock::new()).collect();

        Ok(Spr {
            header: layout.header,
            palettes: layout.palettes,
            frames: layout.frames,
            frame_table_len: layout.frame_table_len,
            data,
            limits,
            rasters,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn palette_count(&self) -> usize {
        self.palettes.len()
    }

    pub fn frames(&self) -> &[SprFrame] {
        &self.frames
    }

    pub fn palettes(&self) -> &[SprPalette] {
        &self.palettes
    }

    pub fn frame(&self, index: usize) -> Result<&SprFrame, SprError> {
        self.frames.get(index).ok_or(SprError::IndexOutOfRange {
            index,
            frame_count: self.frames.len(),
        })
    }

    pub fn palette_for(&self, frame: &SprFrame) -> &SprPalette {
        // palette index is coerced while parsing
        &self.palettes[frame.palette_index as usize]
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// RGBA bytes of a frame, `width * height * 4` long.
    ///
    /// Computed on first access and cached. Failures are not cached and only affect this frame.
    pub fn rasterize(&self, frame_index: usize) -> Result<&[u8], SprError> {
        let frame = self.frame(frame_index)?;
        let cell = &self.rasters[frame_index];

        if let Some(raster) = cell.get() {
            return Ok(raster);
        }

        self.limits.check(frame.width, frame.height)?;

        let raster = rasterize_frame(&self.data, frame, self.palette_for(frame))?;

        // another thread may have won, either result is identical
        Ok(cell.get_or_init(|| raster))
    }

    pub fn to_rgba8(&self, frame_index: usize) -> Result<RgbaImage, SprError> {
        let raster = self.rasterize(frame_index)?;
        let frame = &self.frames[frame_index];

        let mut pixels = Vec::new();

        pixels
            .try_reserve_exact(raster.len())
            .map_err(|_| SprError::LimitExceeded {
                message: format!("cannot allocate {} bytes for frame {frame_index}", raster.len()),
            })?;
        pixels.extend_from_slice(raster);

        RgbaImage::from_raw(frame.width, frame.height, pixels).ok_or(
            SprError::RasterOverflow {
                width: frame.width,
                height: frame.height,
                pixel: raster.len() / 4,
            },
        )
    }
}
