//! Texture replacement cache keys and legacy cache migration.
//!
//! Texture packs dumped by newer builds are keyed by a hash over the decoded RGBA8
//! pixels, while legacy packs are keyed by a CityHash64 over the pixels re-encoded
//! into the texture's native GPU format after a vertical flip. This crate rebuilds
//! the legacy byte layout for each new-format entry so the matching legacy file can
//! be found and copied under the new key.
//!
//! The pieces compose as follows:
//!
//! 1. [`TextureKey::parse`] reads the structured filename of a cache entry.
//! 2. An [`ImageCodec`] (by default [`PngCodec`]) decodes the image into RGBA8.
//! 3. [`PixelBuffer::new`] validates the decoded size against the key.
//! 4. [`legacy_hash`] flips the rows, encodes each pixel with [`PixelFormat`] and
//!    hashes the result with [`city_hash64`].
//! 5. [`Migrator`] drives all of the above over a directory and copies the legacy
//!    file to its migrated name.

pub mod codec;
pub mod error;
pub mod flip;
pub mod format;
pub mod hash;
pub mod key;
pub mod migrate;
pub mod pixels;

pub use codec::{DecodedImage, ImageCodec, PngCodec};
pub use error::{EntryError, Error, Result};
pub use flip::flip_rows;
pub use format::PixelFormat;
pub use hash::{city_hash64, legacy_hash};
pub use key::{format_legacy_name, format_migrated_name, LegacyKey, TextureKey};
pub use migrate::{EntryOutcome, MigrationProgress, MigrationReport, Migrator, SkipReason};
pub use pixels::PixelBuffer;
