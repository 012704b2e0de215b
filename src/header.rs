use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

use crate::error::{Result, VersionError};

pub const CLASS_MAGIC: u32 = 0xCAFEBABE;

/// The leading fields of a class file. Minor precedes major on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassFileHeader {
    pub magic: u32,
    pub minor: u16,
    pub major: u16,
}

/// Reads the 8-byte header from `reader`. `source_name` is only used for errors.
pub fn read_header<R: Read>(reader: &mut R, source_name: &str) -> Result<ClassFileHeader> {
    let truncated = |e: std::io::Error| VersionError::InvalidFormat {
        name: source_name.to_string(),
        source: Some(e),
    };

    let magic = reader.read_u32::<BigEndian>().map_err(truncated)?;
    let minor = reader.read_u16::<BigEndian>().map_err(truncated)?;
    let major = reader.read_u16::<BigEndian>().map_err(truncated)?;

    if magic != CLASS_MAGIC {
        return Err(VersionError::invalid_format(source_name));
    }

    let header = ClassFileHeader {
        magic,
        minor,
        major,
    };
    log::debug!("{source_name}: {header:?}");
    Ok(header)
}
