use memmap2::Mmap;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;
use zip::ZipArchive;

use crate::error::{Result, VersionError};
use crate::header::read_header;
use crate::version::ClassVersion;

const CLASS_SUFFIX: &str = ".class";
const JAR_SUFFIX: &str = ".jar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Class,
    Jar,
}

impl SourceKind {
    /// Case-sensitive suffix match on the whole path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = path.as_os_str().to_string_lossy();
        if raw.ends_with(CLASS_SUFFIX) {
            Ok(SourceKind::Class)
        } else if raw.ends_with(JAR_SUFFIX) {
            Ok(SourceKind::Jar)
        } else {
            Err(VersionError::UnsupportedType)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// The class file path, or the entry name inside a jar.
    pub source_name: String,
    pub version: ClassVersion,
}

pub fn inspect(path: &Path) -> Result<Inspection> {
    let kind = SourceKind::from_path(path)?;
    log::debug!("{} resolved as {kind:?}", path.display());
    match kind {
        SourceKind::Class => read_class_file(path),
        SourceKind::Jar => read_jar_file(path),
    }
}

pub fn read_class_file(path: &Path) -> Result<Inspection> {
    let file = File::open(path).map_err(|e| VersionError::open(path, e))?;
    let source_name = path.display().to_string();
    let header = read_header(&mut BufReader::new(file), &source_name)?;
    Ok(Inspection {
        source_name,
        version: ClassVersion::from(&header),
    })
}

/// Reads the header of the first `.class` entry, in archive order, that can be opened.
pub fn read_jar_file(jar_path: &Path) -> Result<Inspection> {
    let file = File::open(jar_path).map_err(|e| VersionError::open(jar_path, e))?;
    // SAFETY: The file is opened read-only and outlives the mapping.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| VersionError::open(jar_path, e))?;
    let mut archive =
        ZipArchive::new(Cursor::new(&mmap[..])).map_err(|e| VersionError::open(jar_path, e))?;

    for i in 0..archive.len() {
        let name = match archive.by_index_raw(i) {
            Ok(entry) => entry.name().to_string(),
            Err(e) => {
                log::debug!("skipping entry #{i} of {}: {e}", jar_path.display());
                continue;
            }
        };
        if !name.ends_with(CLASS_SUFFIX) {
            continue;
        }

        let mut entry = match archive.by_index(i) {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("skipping {name} in {}: {e}", jar_path.display());
                continue;
            }
        };

        log::debug!("using {name} from {}", jar_path.display());
        let header = read_header(&mut entry, &name)?;
        return Ok(Inspection {
            source_name: name,
            version: ClassVersion::from(&header),
        });
    }

    Err(VersionError::NotFound {
        path: jar_path.to_path_buf(),
    })
}
