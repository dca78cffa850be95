use mm_spr::Spr;

/// Header and per-frame directory listing, one frame per line.
pub fn describe(spr: &Spr) -> String {
    let header = &spr.header;
    let mut out = String::new();

    out.push_str(&format!(
        "size={} version={} frames={} palettes={} reserved={:#x} offset_block={}\n",
        header.size,
        header.version,
        header.frame_count,
        header.palette_count,
        header.reserved,
        spr.frame_table_len
    ));

    if header.size as usize != spr.data().len() {
        out.push_str(&format!(
            "declared size {} does not match file size {}\n",
            header.size,
            spr.data().len()
        ));
    }

    for (index, frame) in spr.frames.iter().enumerate() {
        out.push_str(&format!(
            "{index},{}: offset={:#x} size={:#x} {}x{} center=({}, {}) palette={} ({})\n",
            frame.name,
            frame.begin_offset,
            frame.size,
            frame.width,
            frame.height,
            frame.center_x,
            frame.center_y,
            frame.raw_palette_index,
            frame.palette_index,
        ));
    }

    out
}
