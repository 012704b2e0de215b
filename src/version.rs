use std::fmt;

use crate::header::ClassFileHeader;

/// Known (major, minor) pairs. Anything else is reported as [`FALLBACK_LABEL`].
pub const VERSION_TABLE: &[((u16, u16), &str)] = &[
    ((45, 3), "1.1"),
    ((46, 0), "1.2"),
    ((47, 0), "1.3"),
    ((48, 0), "1.4"),
    ((49, 0), "1.5"),
    ((50, 0), "1.6"),
    ((51, 0), "1.7"),
];

pub const FALLBACK_LABEL: &str = "1.8";

pub fn java_version(major: u16, minor: u16) -> &'static str {
    VERSION_TABLE
        .iter()
        .find(|(key, _)| *key == (major, minor))
        .map(|(_, label)| *label)
        .unwrap_or(FALLBACK_LABEL)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassVersion {
    pub major: u16,
    pub minor: u16,
    pub label: &'static str,
}

impl From<&ClassFileHeader> for ClassVersion {
    fn from(header: &ClassFileHeader) -> Self {
        ClassVersion {
            major: header.major,
            minor: header.minor,
            label: java_version(header.major, header.minor),
        }
    }
}

impl fmt::Display for ClassVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Class version : {}.{}", self.major, self.minor)?;
        write!(f, "Java version  : {}", self.label)
    }
}
