//! Side-loaded tag-name index.
//!
//! The tagnames file is a community-maintained text dump mapping asset ids
//! to source paths, one record per line:
//!
//! ```text
//! <8 hex chars><3 filler chars><relative path>
//! ```
//!
//! Only rows for `.soundbank` assets matter here. The hex key is stored
//! big-endian on disk; in-memory lookups use the subsystem's native order,
//! so the parsed value is byte-swapped before insertion.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Byte offset of the path portion within a row.
const PATH_START: usize = 11;

/// Rows are relevant only for this asset kind.
const SOUNDBANK_SUFFIX: &str = ".soundbank";

/// Immutable asset-id-to-output-path index, built once at startup.
#[derive(Debug, Default)]
pub struct TagNames {
    paths: HashMap<u32, PathBuf>,
}

impl TagNames {
    /// Load the index from a tagnames file.
    ///
    /// An unopenable file is not fatal to a run; the caller warns and falls
    /// back to an empty index (hex-named output for every asset).
    pub fn load(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::parse(BufReader::new(file)))
    }

    /// Build the index from line-oriented text, dropping malformed rows.
    pub fn parse<R: BufRead>(reader: R) -> Self {
        let mut paths = HashMap::new();
        for row in reader.lines().map_while(io::Result::ok) {
            if let Some((id, path)) = parse_row(&row) {
                // First occurrence wins.
                paths.entry(id).or_insert(path);
            }
        }
        Self { paths }
    }

    /// Output path for an asset id in native byte order, if the index has one.
    pub fn resolve(&self, asset_id: u32) -> Option<&Path> {
        self.paths.get(&asset_id).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Parse one row into `(native-order id, output path)`.
///
/// Returns `None` for rows that are not SoundBank records or do not carry
/// exactly 8 leading hex digits; such rows are dropped silently.
fn parse_row(row: &str) -> Option<(u32, PathBuf)> {
    if !row.ends_with(SOUNDBANK_SUFFIX) {
        return None;
    }

    let hex = row.get(..8)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        // from_str_radix would also take a sign; require 8 hex digits proper.
        return None;
    }
    let id_be = u32::from_str_radix(hex, 16).ok()?;

    let path = row.get(PATH_START..)?;
    if path.is_empty() {
        return None;
    }
    let path = PathBuf::from(path).with_extension("bnk");

    Some((id_be.swap_bytes(), path))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(rows: &[&str]) -> TagNames {
        TagNames::parse(rows.join("\n").as_bytes())
    }

    #[test]
    fn parses_row_with_swapped_key_and_bnk_extension() {
        let names = index(&["deadbeef : sound/banks/music.soundbank"]);
        assert_eq!(names.len(), 1);
        assert_eq!(
            names.resolve(0xdeadbeef_u32.swap_bytes()),
            Some(Path::new("sound/banks/music.bnk"))
        );
    }

    #[test]
    fn lookup_uses_native_order_not_on_disk_order() {
        let names = index(&["0000beef : a.soundbank"]);
        assert_eq!(names.resolve(0x0000beef), None);
        assert!(names.resolve(0xefbe0000).is_some());
    }

    #[test]
    fn first_duplicate_wins() {
        let names = index(&[
            "deadbeef : x/y.soundbank",
            "deadbeef : x/z.soundbank",
        ]);
        assert_eq!(names.len(), 1);
        assert_eq!(
            names.resolve(0xdeadbeef_u32.swap_bytes()),
            Some(Path::new("x/y.bnk"))
        );
    }

    #[test]
    fn ignores_rows_for_other_asset_kinds() {
        let names = index(&[
            "deadbeef : x/y.model",
            "cafebabe : x/y.soundbank.meta",
        ]);
        assert!(names.is_empty());
    }

    #[test]
    fn drops_rows_without_eight_hex_digits() {
        let names = index(&[
            "dead : short.soundbank",
            "notahex! : bad.soundbank",
            "12GB4567 : partial.soundbank",
        ]);
        assert!(names.is_empty());
    }

    #[test]
    fn drops_truncated_rows() {
        assert!(index(&[".soundbank"]).is_empty());
    }

    #[test]
    fn unopenable_file_is_an_error_not_a_panic() {
        assert!(TagNames::load(Path::new("/nonexistent/tagnames.txt")).is_err());
    }
}
