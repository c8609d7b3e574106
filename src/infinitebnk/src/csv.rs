//! Debug CSV dump of every known item.
//!
//! Not part of extraction; handy when poking at unfamiliar content drops.

use std::io::{self, Write};

use crate::module::ModuleSource;

pub const HEADER: &str = "tag_type,asset_id,asset_id_be,flags,module_path";

/// Write one row per item across all modules, preceded by [`HEADER`].
pub fn write_items<'a, W, I>(out: &mut W, modules: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a dyn ModuleSource>,
{
    writeln!(out, "{HEADER}")?;
    for module in modules {
        for item in module.items() {
            writeln!(
                out,
                "{},{:#010x},{:08x},{:#018b},\"{}\"",
                item.tag_chars(),
                item.asset_id,
                item.asset_id.swap_bytes(),
                item.flags,
                module.path().display()
            )?;
        }
    }
    Ok(())
}
