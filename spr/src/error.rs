#[derive(Debug, thiserror::Error)]
pub enum SprError {
    #[error("Invalid sprite signature: {signature:?}")]
    InvalidSignature { signature: [u8; 4] },
    #[error("Unexpected end of data at offset {offset:#x} (wanted {wanted} bytes)")]
    UnexpectedEndOfData { offset: usize, wanted: usize },
    #[error("Frame index {index} is out of range ({frame_count} frames)")]
    IndexOutOfRange { index: usize, frame_count: usize },
    #[error("Raster overflow for {width}x{height} frame: pixel {pixel} is outside the buffer")]
    RasterOverflow { width: u32, height: u32, pixel: usize },
    #[error("Limit exceeded: {message}")]
    LimitExceeded { message: String },
    #[error("Error opening sprite: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}
