//! Wwise SoundBank extractor for packed asset modules.
//!
//! Game audio ships as `.bnk` SoundBanks embedded inside the per-tag data
//! blobs of the game's asset modules. The module container itself is handled
//! by external tooling (see [`module::ModuleSource`]); this crate owns the
//! part that is actually reverse-engineered: finding the SoundBank inside a
//! decompressed tag blob, and naming the output files.
//!
//! # Tag blob layout
//!
//! All offsets are relative to the start of the decompressed tag data and
//! were derived from observed content, not a published schema:
//!
//! - `string_data_offset + string_length + 16`: resource chunk magic
//!   (`0x9b555ad2`). The tag kind this crate handles always carries a
//!   zero-length string section.
//! - magic offset + 8: resource count. `0` means the tag carries no
//!   SoundBank; otherwise `0x13` is the only value seen in the wild.
//! - count offset + `8 + count*4 + 2 + 4`: SoundBank byte length (u32).
//! - length offset + 4: SoundBank payload, beginning with `"BKHD"`.

pub mod csv;
pub mod extract;
pub mod locate;
pub mod manifest;
pub mod module;
pub mod report;
pub mod tagnames;

pub use extract::{Extractor, Outcome};
pub use locate::{locate_soundbank, SoundBank};
pub use manifest::ManifestModule;
pub use module::{ModuleItem, ModuleSource, TagHeader};
pub use report::Report;
pub use tagnames::TagNames;

/// Container-type tag of SoundBank items (big-endian bytes spell `sbnk`).
pub const TAG_TYPE_SOUNDBANK: u32 = 0x7362_6e6b;

/// Magic of the resource chunk that precedes the embedded SoundBank.
pub const RESOURCE_MAGIC: u32 = 0x9b55_5ad2;

/// Resource count observed whenever a SoundBank payload is present.
pub const RESOURCE_COUNT_PRESENT: u32 = 0x13;

/// Leading signature of a SoundBank payload: `"BKHD"` read little-endian.
pub const SOUNDBANK_MAGIC: u32 = u32::from_le_bytes(*b"BKHD");

/// Errors from tag parsing and extraction.
///
/// The structural variants mean the blob contradicts the layout above:
/// either the input is corrupt or the content revision changed the format.
/// They are scoped to a single item so one bad tag cannot abort a run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid module manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("manifest tag_type {tag:?} is not a 4-char tag")]
    BadTagType { tag: String },

    #[error("module returned no data for item")]
    NoItemData,

    #[error("decompressed size mismatch: item metadata says {expected}, module returned {actual}")]
    DecompressedSize { expected: usize, actual: usize },

    #[error("tag header has nonzero string section length {length}, offset chain does not apply")]
    NonzeroStringSection { length: u32 },

    #[error("tag data too short: need {needed} bytes, got {actual}")]
    DataTooShort { needed: usize, actual: usize },

    #[error("bad resource magic at offset {offset:#x}: expected {expected:#010x}, got {found:#010x}")]
    ResourceMagicMismatch {
        offset: usize,
        expected: u32,
        found: u32,
    },

    #[error("unexpected resource count at offset {offset:#x}: expected {expected:#x}, got {found:#x}")]
    UnexpectedResourceCount {
        offset: usize,
        expected: u32,
        found: u32,
    },

    #[error("SoundBank length {length} at offset {offset:#x} exceeds tag data size {buffer}")]
    PayloadOutOfBounds {
        offset: usize,
        length: u32,
        buffer: usize,
    },

    #[error("bad SoundBank signature: expected {expected:#010x} (\"BKHD\"), got {found:#010x}")]
    PayloadMagicMismatch { expected: u32, found: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
