use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum VersionError {
    #[error("Only .class or .jar file is supported")]
    UnsupportedType,

    #[error("Unable to read {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: OpenCause,
    },

    #[error("Unable to find a class file in {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid class file: {name}")]
    InvalidFormat {
        name: String,
        #[source]
        source: Option<std::io::Error>,
    },
}

/// Why a file or archive could not be opened.
#[derive(thiserror::Error, Debug)]
pub enum OpenCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),
}

impl VersionError {
    pub fn open(path: impl Into<PathBuf>, source: impl Into<OpenCause>) -> Self {
        VersionError::Open {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn invalid_format(name: impl Into<String>) -> Self {
        VersionError::InvalidFormat {
            name: name.into(),
            source: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, VersionError>;
