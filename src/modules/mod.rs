pub mod export;
pub mod info;

/// Version 4 sprite without palettes whose frame `i` is a 2x1 "dot" row: one
/// transparent pixel then palette index `i`.
#[cfg(test)]
pub(crate) fn test_sprite(frame_count: u32) -> Vec<u8> {
    use byte_writer::ByteWriter;

    let mut writer = ByteWriter::new();

    writer
        .append_u8_slice(b"SPR\0")
        .append_u32(0)
        .append_u32(4)
        .append_u32(frame_count)
        .append_u32(0)
        .append_u32(0)
        .append_u8_slice(&vec![0; 4 * frame_count as usize]);

    for i in 0..frame_count {
        // fixed fields, reserved fields, one row entry
        let row_table_end = 32 + 8 + 8;

        writer
            .append_u32(row_table_end + 3)
            .append_u32(2)
            .append_u32(1)
            .append_i32(0)
            .append_i32(0)
            .append_fixed_string("dot", 8)
            .append_u32(0)
            .append_u32(0)
            .append_u32(0)
            .append_u32(row_table_end)
            .append_u32(row_table_end + 2)
            .append_u8_slice(&[1, 1, i as u8]);
    }

    let size = writer.get_offset() as u32;
    writer.replace_with_u32(4, size);

    writer.data
}
