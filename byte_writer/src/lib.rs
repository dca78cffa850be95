//! Little-endian byte builder.
//!
//! The decoder never writes archives, so this only exists to hand-assemble
//! sprite archives for tests.

pub struct ByteWriter {
    pub data: Vec<u8>,
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Current length, which is also the offset of the next appended byte.
    pub fn get_offset(&self) -> usize {
        self.data.len()
    }

    pub fn append_u32(&mut self, i: u32) -> &mut Self {
        self.data.extend(i.to_le_bytes());
        self
    }

    pub fn append_i32(&mut self, i: i32) -> &mut Self {
        self.data.extend(i.to_le_bytes());
        self
    }

    pub fn append_u8(&mut self, i: u8) -> &mut Self {
        self.data.push(i);
        self
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) -> &mut Self {
        self.data.extend_from_slice(i);
        self
    }

    /// Writes `s` into a field of exactly `len` bytes, null padded or truncated.
    pub fn append_fixed_string(&mut self, s: &str, len: usize) -> &mut Self {
        let bytes = s.as_bytes();
        let taken = bytes.len().min(len);

        self.data.extend_from_slice(&bytes[..taken]);
        self.data.resize(self.data.len() + (len - taken), 0);
        self
    }

    pub fn replace(&mut self, start: usize, slice: &[u8]) {
        self.data[start..(start + slice.len())].copy_from_slice(slice);
    }

    pub fn replace_with_u32(&mut self, start: usize, val: u32) {
        self.replace(start, &val.to_le_bytes());
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fixed_string_pads_and_truncates() {
        let mut writer = ByteWriter::new();

        writer
            .append_fixed_string("abc", 5)
            .append_fixed_string("abcdefghij", 8);

        assert_eq!(writer.data, b"abc\0\0abcdefgh");
    }

    #[test]
    fn replace_u32_in_place() {
        let mut writer = ByteWriter::new();

        writer.append_u32(0).append_u8(7);
        writer.replace_with_u32(0, 0xdeadbeef);

        assert_eq!(writer.data, [0xef, 0xbe, 0xad, 0xde, 7]);
        assert_eq!(writer.get_offset(), 5);
    }
}
