//! Cache entry filename grammar.
//!
//! New-format entries are named `tex1_{W}x{H}_{HASH}_{FORMAT}_mip{MIP}.png`, legacy
//! entries drop the mip suffix: `tex1_{W}x{H}_{HASH}_{FORMAT}.png`. Hashes are always
//! written as 16 uppercase hex digits.

use std::sync::LazyLock;

use regex::Regex;

/// The only container extension the caches use.
pub const PNG_EXTENSION: &str = "png";

static TEXTURE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^tex1_(\d+)x(\d+)_([0-9A-Fa-f]{16})_(\d+)_mip(\d+)\.(\S+)$")
        .expect("texture name pattern must compile")
});

/// Key of a new-format cache entry, parsed from its filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureKey {
    pub width: u32,
    pub height: u32,
    /// Hash over the decoded RGBA8 pixels.
    pub hash: u64,
    /// Pixel format tag, see [`PixelFormat`](crate::PixelFormat).
    pub format: u32,
    pub mip: u32,
    pub extension: String,
}

impl TextureKey {
    /// Parses a filename like `tex1_64x64_ABCDEF0123456789_3_mip0.png`.
    ///
    /// Returns `None` if any field is missing or not a well-formed number. The
    /// extension is captured as-is; use [`is_png`](Self::is_png) to check it.
    pub fn parse(name: &str) -> Option<Self> {
        let captures = TEXTURE_NAME.captures(name)?;

        Some(Self {
            width: captures[1].parse().ok()?,
            height: captures[2].parse().ok()?,
            hash: u64::from_str_radix(&captures[3], 16).ok()?,
            format: captures[4].parse().ok()?,
            mip: captures[5].parse().ok()?,
            extension: captures[6].to_string(),
        })
    }

    /// Whether the entry uses the PNG container (case-sensitive).
    pub fn is_png(&self) -> bool {
        self.extension == PNG_EXTENSION
    }

    /// The legacy key for this texture, given the reconstructed legacy hash.
    pub fn legacy_key(&self, old_hash: u64) -> LegacyKey {
        LegacyKey {
            width: self.width,
            height: self.height,
            old_hash,
            format: self.format,
        }
    }

    /// Filename this entry is migrated to. Always rendered with a `.png` extension.
    pub fn migrated_name(&self) -> String {
        format_migrated_name(self.width, self.height, self.hash, self.format, self.mip)
    }
}

/// Key of a legacy cache entry. The hash is always computed, never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyKey {
    pub width: u32,
    pub height: u32,
    pub old_hash: u64,
    pub format: u32,
}

impl LegacyKey {
    /// Filename of this entry in the legacy pack.
    pub fn file_name(&self) -> String {
        format_legacy_name(self.width, self.height, self.old_hash, self.format)
    }
}

/// Renders `tex1_{width}x{height}_{old_hash:016X}_{format}.png`.
pub fn format_legacy_name(width: u32, height: u32, old_hash: u64, format: u32) -> String {
    format!("tex1_{}x{}_{:016X}_{}.png", width, height, old_hash, format)
}

/// Renders `tex1_{width}x{height}_{hash:016X}_{format}_mip{mip}.png`.
pub fn format_migrated_name(width: u32, height: u32, hash: u64, format: u32, mip: u32) -> String {
    format!(
        "tex1_{}x{}_{:016X}_{}_mip{}.png",
        width, height, hash, format, mip
    )
}
