//! Vertical flip of RGBA8 images.
//!
//! Legacy cache entries store rows bottom-to-top, decoded images are top-down.

/// Bytes per pixel of a decoded RGBA8 buffer.
pub const RGBA8_BYTES_PER_PIXEL: usize = 4;

/// Reverses the row order of an RGBA8 buffer in place.
///
/// Row `i` is swapped with row `height - 1 - i`; the middle row of an odd-height
/// image stays put. The caller guarantees `pixels.len() == width * height * 4`.
pub fn flip_rows(pixels: &mut [u8], width: u32, height: u32) {
    let line_size = width as usize * RGBA8_BYTES_PER_PIXEL;
    let height = height as usize;
    if line_size == 0 || height < 2 {
        return;
    }

    let (top, bottom) = pixels[..line_size * height].split_at_mut(line_size * (height / 2));
    // For odd heights the first row of `bottom` is the untouched middle row.
    let bottom_start = (height % 2) * line_size;
    let top_rows = top.chunks_exact_mut(line_size);
    let bottom_rows = bottom[bottom_start..].chunks_exact_mut(line_size).rev();

    for (upper, lower) in top_rows.zip(bottom_rows) {
        upper.swap_with_slice(lower);
    }
}
