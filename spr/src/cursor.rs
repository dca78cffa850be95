//! Sequential little-endian reader over an archive buffer.
//!
//! Every parsing step gets its own cursor, so nothing here is shared between callers.
use nom::{
    bytes::complete::take,
    number::complete::{
        le_f32, le_f64, le_i16, le_i32, le_i64, le_i8, le_u16, le_u32, le_u64, le_u8,
    },
    Parser,
};

use crate::error::SprError;

type NomError<'a> = nom::error::Error<&'a [u8]>;

pub struct ByteCursor<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    /// Sets the absolute position. Seeking past the end is allowed, the next read fails.
    pub fn seek(&mut self, offset: usize) {
        self.offset = offset;
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.offset)
    }

    // Position only moves when the whole value was read.
    fn read_with<T, P>(&mut self, wanted: usize, mut parser: P) -> Result<T, SprError>
    where
        P: Parser<&'a [u8], Output = T, Error = NomError<'a>>,
    {
        let rest = self.data.get(self.offset..).unwrap_or(&[]);

        match parser.parse(rest) {
            Ok((after, value)) => {
                self.offset += rest.len() - after.len();
                Ok(value)
            }
            Err(_) => Err(SprError::UnexpectedEndOfData {
                offset: self.offset,
                wanted,
            }),
        }
    }

    pub fn read_u8(&mut self) -> Result<u8, SprError> {
        self.read_with(1, le_u8)
    }

    pub fn read_i8(&mut self) -> Result<i8, SprError> {
        self.read_with(1, le_i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, SprError> {
        self.read_with(2, le_u16)
    }

    pub fn read_i16(&mut self) -> Result<i16, SprError> {
        self.read_with(2, le_i16)
    }

    pub fn read_u32(&mut self) -> Result<u32, SprError> {
        self.read_with(4, le_u32)
    }

    pub fn read_i32(&mut self) -> Result<i32, SprError> {
        self.read_with(4, le_i32)
    }

    pub fn read_u64(&mut self) -> Result<u64, SprError> {
        self.read_with(8, le_u64)
    }

    pub fn read_i64(&mut self) -> Result<i64, SprError> {
        self.read_with(8, le_i64)
    }

    pub fn read_f32(&mut self) -> Result<f32, SprError> {
        self.read_with(4, le_f32)
    }

    pub fn read_f64(&mut self) -> Result<f64, SprError> {
        self.read_with(8, le_f64)
    }

    /// Borrows `n` raw bytes from the underlying buffer.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], SprError> {
        self.read_with(n, take(n))
    }

    /// Reads `n` bytes as text. Embedded nulls are kept, callers trim them.
    pub fn read_text(&mut self, n: usize) -> Result<String, SprError> {
        let bytes = self.read_bytes(n)?;

        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_little_endian() {
        let data = [
            0x01, 0xfe, 0x34, 0x12, 0xff, 0xff, 0x78, 0x56, 0x34, 0x12, 0xfe, 0xff, 0xff, 0xff,
        ];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u8().unwrap(), 1);
        assert_eq!(cursor.read_i8().unwrap(), -2);
        assert_eq!(cursor.read_u16().unwrap(), 0x1234);
        assert_eq!(cursor.read_i16().unwrap(), -1);
        assert_eq!(cursor.read_u32().unwrap(), 0x12345678);
        assert_eq!(cursor.read_i32().unwrap(), -2);
        assert_eq!(cursor.position(), data.len());
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn reads_wide_values() {
        let mut data = vec![];
        data.extend(u64::MAX.to_le_bytes());
        data.extend((-5i64).to_le_bytes());
        data.extend(1.5f32.to_le_bytes());
        data.extend((-0.25f64).to_le_bytes());

        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read_u64().unwrap(), u64::MAX);
        assert_eq!(cursor.read_i64().unwrap(), -5);
        assert_eq!(cursor.read_f32().unwrap(), 1.5);
        assert_eq!(cursor.read_f64().unwrap(), -0.25);
    }

    #[test]
    fn short_read_fails_without_moving() {
        let data = [1, 2, 3];
        let mut cursor = ByteCursor::new(&data);

        cursor.seek(1);

        assert!(matches!(
            cursor.read_u32(),
            Err(SprError::UnexpectedEndOfData {
                offset: 1,
                wanted: 4
            })
        ));
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.read_u16().unwrap(), 0x0302);
    }

    #[test]
    fn seek_past_end_then_read() {
        let data = [0u8; 4];
        let mut cursor = ByteCursor::new(&data);

        cursor.seek(100);

        assert_eq!(cursor.remaining(), 0);
        assert!(cursor.read_u8().is_err());
        assert_eq!(cursor.read_bytes(0).unwrap(), &[] as &[u8]);
    }

    #[test]
    fn text_keeps_nulls() {
        let data = b"ab\0cd";
        let mut cursor = ByteCursor::new(data);

        assert_eq!(cursor.read_text(5).unwrap(), "ab\0cd");
        assert!(!cursor.is_empty());
    }
}
