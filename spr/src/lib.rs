//! Magic & Mayhem sprite archive (`.spr`) decoding.
//!
//! An archive holds a header, up to N 256 colour palettes and a list of frames whose
//! scanlines are stored as alternating transparent/opaque runs. Frames are rasterized
//! into RGBA on demand.
pub mod cursor;
pub mod error;
pub mod limits;
mod parser;
pub mod raster;
mod types;
mod utils;

pub use cursor::ByteCursor;
pub use error::SprError;
pub use limits::Limits;
pub use parser::{frame_table_len, parse_frame, parse_frames, parse_header, parse_palettes};
pub use types::*;
