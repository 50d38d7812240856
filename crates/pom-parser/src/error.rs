//! Errors produced while reading and decoding pom.xml files.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PomError {
    #[error("can't read file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file {} is too large: {size} bytes (max: {limit} bytes)", path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("malformed pom.xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("unable to decode pom.xml: {0}")]
    Decode(#[from] quick_xml::de::DeError),

    #[error("expected <project> root element, found <{found}>")]
    UnexpectedRoot { found: String },

    #[error("pom.xml has no root element")]
    MissingRoot,
}

impl PomError {
    /// True when the file itself could not be opened, sized or read.
    pub fn is_file_access_error(&self) -> bool {
        matches!(self, Self::FileAccess { .. } | Self::FileTooLarge { .. })
    }

    /// True when the content was read but is not a decodable POM.
    pub fn is_decode_error(&self) -> bool {
        !self.is_file_access_error()
    }
}

pub type Result<T> = std::result::Result<T, PomError>;
