//! Decoder options.

use serde::Deserialize;

/// Maximum accepted pom.xml size in bytes (50MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50_000_000;

/// Options controlling how a pom.xml is read and decoded.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial configuration section is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Files larger than this are rejected before being read.
    pub max_file_size: u64,
    /// Reject documents whose root element is not `<project>`.
    pub require_project_root: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            require_project_root: true,
        }
    }
}
