//! Legacy cache key hashing.
//!
//! The legacy cache names its files after CityHash64 (v1.1) of the flipped,
//! natively encoded pixel data.

use crate::flip::flip_rows;
use crate::format::PixelFormat;
use crate::pixels::PixelBuffer;

/// CityHash64 v1.1 over `data`.
pub fn city_hash64(data: &[u8]) -> u64 {
    cityhasher::hash::<u64>(data)
}

/// Reconstructs the legacy hash of a decoded texture.
///
/// Flips the rows, encodes every pixel into `format` and hashes the encoded bytes.
/// Consumes the buffer since the flip happens in place.
pub fn legacy_hash(pixels: PixelBuffer, format: PixelFormat) -> u64 {
    let (width, height) = (pixels.width(), pixels.height());
    let mut data = pixels.into_bytes();

    flip_rows(&mut data, width, height);
    let encoded = format.encode_buffer(&data);

    city_hash64(&encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pseudo-random bytes from the CityHash reference test suite.
    fn reference_data(len: usize) -> Vec<u8> {
        const K0: u64 = 0xc3a5_c85c_97cb_3127;
        let (mut a, mut b) = (9u64, 777u64);
        (0..len)
            .map(|i| {
                a = a.wrapping_add(b);
                b = b.wrapping_add(a);
                a = (a ^ (a >> 41)).wrapping_mul(K0);
                b = (b ^ (b >> 41)).wrapping_mul(K0).wrapping_add(i as u64);
                (b >> 37) as u8
            })
            .collect()
    }

    fn test_pixels(width: u32, height: u32) -> PixelBuffer {
        let data = (0..width * height * 4)
            .map(|i| (i.wrapping_mul(37) ^ (i >> 5)) as u8)
            .collect();
        PixelBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn test_reference_vectors() {
        let data = reference_data(200 * 200 + 200);
        // (length, expected) where the input is data[len * len..][..len]
        let vectors = [
            (0, 0x9ae1_6a3b_2f90_404f),
            (3, 0xef92_3a7a_1af7_8eab),
            (8, 0xa0f1_0149_a0e5_38d6),
            (20, 0x4182_832b_52d6_3735),
            (40, 0x4ec0_b54c_f156_6aff),
            (100, 0x6369_1635_6581_4de6),
            (200, 0x07fc_9800_6e25_cac9),
        ];

        for (len, expected) in vectors {
            let offset = len * len;
            assert_eq!(
                city_hash64(&data[offset..offset + len]),
                expected,
                "len {len}"
            );
        }
    }

    #[test]
    fn test_legacy_hash_known_rgb565_texture() {
        assert_eq!(
            legacy_hash(test_pixels(64, 64), PixelFormat::Rgb565),
            0x1520_FFAB_8661_1BAF
        );
    }

    #[test]
    fn test_legacy_hash_flips_before_encoding() {
        // 1x2 image: top row red, bottom row blue
        let top_down = [[0xFF, 0, 0, 0xFF], [0, 0, 0xFF, 0xFF]].concat();
        // bottom-up RGB565: blue (0x001F) then red (0xF800), little-endian
        let expected = city_hash64(&[0x1F, 0x00, 0x00, 0xF8]);

        let buffer = PixelBuffer::new(1, 2, top_down).unwrap();
        assert_eq!(legacy_hash(buffer, PixelFormat::Rgb565), expected);
    }

    #[test]
    fn test_legacy_hash_depends_on_format() {
        let hashes: std::collections::HashSet<u64> = (0..=4)
            .map(|tag| legacy_hash(test_pixels(8, 8), PixelFormat::from_tag(tag)))
            .collect();
        assert_eq!(hashes.len(), 5);
    }
}
