//! Parsing and validation of IDX file headers.

use std::io::{self, Read};

use crate::endian::u32_from_file_bytes;
use crate::error::IdxError;

/// Magic number opening a label file.
pub const LABEL_MAGIC: u32 = 0x0000_0801;
/// Magic number opening an image file.
pub const IMAGE_MAGIC: u32 = 0x0000_0803;

/// Validated header of a label file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelHeader {
    pub item_count: u32,
}

/// Validated header of an image file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub image_count: u32,
    pub row_count: u32,
    pub column_count: u32,
}

/// Reads one big-endian `u32` header field.
/// A short read anywhere inside the field counts as a truncated header.
fn read_field<R: Read>(reader: &mut R) -> Result<u32, IdxError> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => IdxError::TruncatedHeader,
        _ => IdxError::Io(e),
    })?;
    Ok(u32_from_file_bytes(bytes))
}

fn check_magic<R: Read>(reader: &mut R, expected: u32) -> Result<(), IdxError> {
    let found = read_field(reader)?;
    if found != expected {
        return Err(IdxError::MagicMismatch { expected, found });
    }
    Ok(())
}

impl LabelHeader {
    /// Parses and validates a label header, leaving `reader` at the
    /// first payload byte.
    pub fn parse<R: Read>(reader: &mut R) -> Result<LabelHeader, IdxError> {
        check_magic(reader, LABEL_MAGIC)?;
        let item_count = read_field(reader)?;
        Ok(LabelHeader { item_count })
    }
}

impl ImageHeader {
    /// Parses and validates an image header, leaving `reader` at the
    /// first payload byte.
    pub fn parse<R: Read>(reader: &mut R) -> Result<ImageHeader, IdxError> {
        check_magic(reader, IMAGE_MAGIC)?;
        let image_count = read_field(reader)?;
        let row_count = read_field(reader)?;
        let column_count = read_field(reader)?;
        Ok(ImageHeader {
            image_count,
            row_count,
            column_count,
        })
    }
}
