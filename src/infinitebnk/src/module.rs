//! Boundary to the module-management subsystem.
//!
//! Modules (the host container format) are not parsed here. Whatever reads
//! them only has to hand over per-item metadata and decompressed bytes
//! through [`ModuleSource`]; the shipped implementation is the JSON manifest
//! backend in [`crate::manifest`].

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::Result;

/// Raw header fields of a tag item, as reported by the module subsystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagHeader {
    /// Byte offset of the tag's string data section.
    pub string_data_offset: u32,
    /// Byte length of the string data section (zero for SoundBank tags).
    pub string_length: u32,
}

/// Metadata of one packed item inside a module.
#[derive(Debug, Clone, Copy)]
pub struct ModuleItem {
    /// 32-bit asset identifier in the subsystem's native byte order.
    pub asset_id: u32,
    /// Container-type tag (big-endian bytes spell the 4-char tag).
    pub tag_type: u32,
    /// Item flags as stored in the module.
    pub flags: u16,
    /// Total size of the item's data once decompressed.
    pub decompressed_size: u32,
    /// Tag header fields needed by the offset chain.
    pub header: TagHeader,
}

impl ModuleItem {
    /// The 4-char rendering of the container-type tag, e.g. `sbnk`.
    pub fn tag_chars(&self) -> String {
        self.tag_type
            .to_be_bytes()
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() {
                    b as char
                } else {
                    '?'
                }
            })
            .collect()
    }
}

/// One loaded module, as seen through the subsystem boundary.
pub trait ModuleSource {
    /// Path of the module, for diagnostics and the CSV dump.
    fn path(&self) -> &Path;

    /// All items packed in this module.
    fn items(&self) -> &[ModuleItem];

    /// Decompressed bytes of one item, as a buffer owned by the caller.
    ///
    /// Errors and empty buffers are per-item failures; the caller skips the
    /// item and keeps going.
    fn read_item(&self, item: &ModuleItem) -> Result<Vec<u8>>;
}

/// Find module manifests under `dir`, in directory-walk order.
pub fn find_manifests(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.file_name()
                    .to_str()
                    .is_some_and(|n| n.ends_with(".module.json"))
        })
        .map(|e| e.into_path())
        .collect()
}
