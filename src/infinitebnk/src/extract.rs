//! Per-item extraction: read, locate, name, write.

use std::fs;
use std::path::PathBuf;

use crate::locate::{locate_soundbank, SoundBank};
use crate::module::{ModuleItem, ModuleSource};
use crate::tagnames::TagNames;
use crate::{Error, Result};

/// What happened to one qualifying tag item.
#[derive(Debug)]
pub enum Outcome {
    /// Payload written to `path`.
    Extracted { path: PathBuf, bytes: usize },
    /// Resource count was zero; nothing to extract.
    SkippedMissing,
    /// Length field was zero; nothing worth writing.
    SkippedEmpty,
    /// Item could not be read, parsed, or written. The run continues.
    Failed(Error),
}

/// Writes located SoundBanks under a fixed output root.
pub struct Extractor<'a> {
    root: PathBuf,
    names: &'a TagNames,
}

impl<'a> Extractor<'a> {
    pub fn new(root: impl Into<PathBuf>, names: &'a TagNames) -> Self {
        Self {
            root: root.into(),
            names,
        }
    }

    /// Extract one item. Never panics and never aborts the run; every
    /// problem is folded into the returned [`Outcome`].
    pub fn extract_item(&self, source: &dyn ModuleSource, item: &ModuleItem) -> Outcome {
        match self.try_extract(source, item) {
            Ok(outcome) => outcome,
            Err(err) => Outcome::Failed(err),
        }
    }

    fn try_extract(&self, source: &dyn ModuleSource, item: &ModuleItem) -> Result<Outcome> {
        let data = source.read_item(item)?;
        if data.is_empty() {
            return Err(Error::NoItemData);
        }
        // The locator bounds everything against the buffer; make sure the
        // buffer is the size the module metadata promised.
        if data.len() != item.decompressed_size as usize {
            return Err(Error::DecompressedSize {
                expected: item.decompressed_size as usize,
                actual: data.len(),
            });
        }

        let payload = match locate_soundbank(&data, &item.header)? {
            SoundBank::Missing => return Ok(Outcome::SkippedMissing),
            SoundBank::Empty => return Ok(Outcome::SkippedEmpty),
            SoundBank::Found(payload) => payload,
        };
        // The payload is an owned copy; the decompressed buffer is done.
        drop(data);

        let path = self.output_path(item.asset_id);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &payload)?;

        Ok(Outcome::Extracted {
            path,
            bytes: payload.len(),
        })
    }

    /// Output path for an asset: the tagnames path when known, otherwise a
    /// hex file name in display byte order.
    pub fn output_path(&self, asset_id: u32) -> PathBuf {
        match self.names.resolve(asset_id) {
            Some(rel) => self.root.join(rel),
            None => self
                .root
                .join(format!("{:#010x}.bnk", asset_id.swap_bytes())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn fallback_name_uses_display_byte_order() {
        let names = TagNames::default();
        let extractor = Extractor::new("out", &names);
        assert_eq!(
            extractor.output_path(0xefbeadde),
            Path::new("out").join("0xdeadbeef.bnk")
        );
    }

    #[test]
    fn known_asset_resolves_through_the_index() {
        let names = TagNames::parse("deadbeef : music/combat.soundbank".as_bytes());
        let extractor = Extractor::new("out", &names);
        assert_eq!(
            extractor.output_path(0xdeadbeef_u32.swap_bytes()),
            Path::new("out").join("music/combat.bnk")
        );
    }
}
