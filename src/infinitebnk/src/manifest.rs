//! JSON manifest backend for pre-dumped modules.
//!
//! The proprietary module container stays out of scope; companion dump
//! tooling materializes each module as a `<name>.module.json` manifest plus
//! one blob file of decompressed tag data per item:
//!
//! ```json
//! {
//!   "module": "deploy/ds/audio-rtx-new.module",
//!   "items": [
//!     { "asset_id": 3735928559,
//!       "tag_type": "sbnk",
//!       "flags": 0,
//!       "string_data_offset": 0,
//!       "string_length": 0,
//!       "decompressed_size": 4096,
//!       "data": "blobs/deadbeef.bin" }
//!   ]
//! }
//! ```
//!
//! `data` paths are resolved relative to the manifest's directory. Unknown
//! fields are ignored so richer dumps stay loadable.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::module::{ModuleItem, ModuleSource, TagHeader};
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct ManifestDoc {
    /// Path of the original module, used for reporting when present.
    #[serde(default)]
    module: Option<String>,
    items: Vec<ManifestItem>,
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    asset_id: u32,
    tag_type: String,
    #[serde(default)]
    flags: u16,
    #[serde(default)]
    string_data_offset: u32,
    #[serde(default)]
    string_length: u32,
    decompressed_size: u32,
    data: String,
}

/// One module, loaded from its dump manifest.
pub struct ManifestModule {
    path: PathBuf,
    items: Vec<ModuleItem>,
    data_files: HashMap<u32, PathBuf>,
}

impl ManifestModule {
    /// Open and parse a `.module.json` manifest.
    pub fn open(manifest_path: &Path) -> Result<Self> {
        let text = fs::read_to_string(manifest_path)?;
        let doc: ManifestDoc = serde_json::from_str(&text)?;

        let dir = manifest_path.parent().unwrap_or(Path::new("."));
        let mut items = Vec::with_capacity(doc.items.len());
        let mut data_files = HashMap::with_capacity(doc.items.len());
        for entry in doc.items {
            items.push(ModuleItem {
                asset_id: entry.asset_id,
                tag_type: tag_from_chars(&entry.tag_type)?,
                flags: entry.flags,
                decompressed_size: entry.decompressed_size,
                header: TagHeader {
                    string_data_offset: entry.string_data_offset,
                    string_length: entry.string_length,
                },
            });
            data_files.insert(entry.asset_id, dir.join(entry.data));
        }

        let path = doc
            .module
            .map(PathBuf::from)
            .unwrap_or_else(|| manifest_path.to_path_buf());

        Ok(Self {
            path,
            items,
            data_files,
        })
    }
}

impl ModuleSource for ManifestModule {
    fn path(&self) -> &Path {
        &self.path
    }

    fn items(&self) -> &[ModuleItem] {
        &self.items
    }

    fn read_item(&self, item: &ModuleItem) -> Result<Vec<u8>> {
        let file = self
            .data_files
            .get(&item.asset_id)
            .ok_or(Error::NoItemData)?;
        Ok(fs::read(file)?)
    }
}

/// Pack a 4-char tag like `"sbnk"` so its big-endian bytes spell the tag.
fn tag_from_chars(tag: &str) -> Result<u32> {
    let bytes: [u8; 4] = tag
        .as_bytes()
        .try_into()
        .map_err(|_| Error::BadTagType {
            tag: tag.to_string(),
        })?;
    Ok(u32::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TAG_TYPE_SOUNDBANK;

    #[test]
    fn packs_tag_chars_big_endian() {
        assert_eq!(tag_from_chars("sbnk").unwrap(), TAG_TYPE_SOUNDBANK);
        assert!(matches!(
            tag_from_chars("bank!"),
            Err(Error::BadTagType { .. })
        ));
    }
}
