//! Locating the SoundBank payload inside decompressed tag data.
//!
//! The offset chain here is the reverse-engineered heart of the tool (see
//! the layout notes in the crate docs). Each step reads one field at a
//! derived offset and either advances, classifies the tag as carrying no
//! payload, or fails with a typed structural error. Every read is bounds
//! checked; a truncated or reshaped blob surfaces as an [`Error`] for that
//! item instead of undefined behavior or a process abort.

use crate::module::TagHeader;
use crate::{Error, Result, RESOURCE_COUNT_PRESENT, RESOURCE_MAGIC, SOUNDBANK_MAGIC};

/// Distance from the end of the string section to the resource chunk magic.
const MAGIC_AFTER_STRINGS: usize = 16;

/// Distance from the resource magic to the resource count field.
const COUNT_AFTER_MAGIC: usize = 8;

/// What the offset chain found in one tag.
#[derive(Debug)]
pub enum SoundBank {
    /// A payload was present; bytes are an owned copy, independent of the
    /// source buffer.
    Found(Vec<u8>),
    /// Resource count was zero: this tag legitimately has no SoundBank.
    Missing,
    /// The length field was zero: present but empty.
    Empty,
}

/// Walk the offset chain over `data` and copy out the SoundBank payload.
///
/// `header` carries the string-section fields reported by the module
/// subsystem for this item. SoundBank tags always have an empty string
/// section; a nonzero length invalidates the rest of the arithmetic and is
/// reported as a structural error.
pub fn locate_soundbank(data: &[u8], header: &TagHeader) -> Result<SoundBank> {
    if header.string_length != 0 {
        return Err(Error::NonzeroStringSection {
            length: header.string_length,
        });
    }

    let magic_offset =
        header.string_data_offset as usize + header.string_length as usize + MAGIC_AFTER_STRINGS;
    let magic = read_u32(data, magic_offset)?;
    if magic != RESOURCE_MAGIC {
        return Err(Error::ResourceMagicMismatch {
            offset: magic_offset,
            expected: RESOURCE_MAGIC,
            found: magic,
        });
    }

    let count_offset = magic_offset + COUNT_AFTER_MAGIC;
    let count = read_u32(data, count_offset)?;
    if count == 0 {
        return Ok(SoundBank::Missing);
    }
    if count != RESOURCE_COUNT_PRESENT {
        return Err(Error::UnexpectedResourceCount {
            offset: count_offset,
            expected: RESOURCE_COUNT_PRESENT,
            found: count,
        });
    }

    // 8 bytes of chunk fields, the count's u32 table, then a 6-byte gap.
    let length_offset = count_offset + 8 + count as usize * 4 + 2 + 4;
    let length = read_u32(data, length_offset)?;
    if length as usize >= data.len() {
        return Err(Error::PayloadOutOfBounds {
            offset: length_offset,
            length,
            buffer: data.len(),
        });
    }
    if length == 0 {
        return Ok(SoundBank::Empty);
    }

    let start = length_offset + 4;
    let end = start + length as usize;
    if end > data.len() {
        return Err(Error::DataTooShort {
            needed: end,
            actual: data.len(),
        });
    }
    let payload = data[start..end].to_vec();

    let signature = read_u32(&payload, 0)?;
    if signature != SOUNDBANK_MAGIC {
        return Err(Error::PayloadMagicMismatch {
            expected: SOUNDBANK_MAGIC,
            found: signature,
        });
    }

    Ok(SoundBank::Found(payload))
}

/// Read a little-endian u32 at `offset`, bounds checked.
fn read_u32(data: &[u8], offset: usize) -> Result<u32> {
    match data.get(offset..offset + 4) {
        Some(bytes) => Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
        None => Err(Error::DataTooShort {
            needed: offset + 4,
            actual: data.len(),
        }),
    }
}
