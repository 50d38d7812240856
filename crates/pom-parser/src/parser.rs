//! pom.xml decoding.
//!
//! Decoding happens in two steps: a quick-xml `Reader` scan locates the
//! root element and checks it is `<project>`, then `quick_xml::de` maps the
//! whole document onto [`Project`]. Elements are matched by local name, so
//! the usual `xmlns="http://maven.apache.org/POM/4.0.0"` is transparent.
//!
//! # Error Handling
//!
//! Every failure is returned to the caller as a [`PomError`]; nothing here
//! aborts the process. Either a fully populated project or an error comes
//! back, never a partial result.

use crate::config::ParseOptions;
use crate::error::{PomError, Result};
use crate::types::Project;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads and decodes the pom.xml at `path` with default options.
///
/// # Errors
///
/// - `PomError::FileAccess` - file missing, unreadable or permission denied
/// - `PomError::FileTooLarge` - file exceeds the default size limit
/// - `PomError::Xml` / `PomError::Decode` - content is not a well-formed POM
/// - `PomError::UnexpectedRoot` - root element is not `<project>`
///
/// # Examples
///
/// ```no_run
/// let project = pom_parser::parse("pom.xml")?;
/// println!("{}", project.coordinates());
/// if let Some(java) = project.get_property("java.version") {
///     println!("java {java}");
/// }
/// # Ok::<(), pom_parser::PomError>(())
/// ```
pub fn parse(path: impl AsRef<Path>) -> Result<Project> {
    parse_with_options(path, &ParseOptions::default())
}

/// Reads and decodes the pom.xml at `path`.
pub fn parse_with_options(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Project> {
    let path = path.as_ref();
    tracing::debug!("Parsing pom.xml: {}", path.display());

    let content = read_file(path, options.max_file_size)?;
    parse_bytes(&content, options)
}

/// Decodes pom.xml content already held in memory.
pub fn parse_str(content: &str) -> Result<Project> {
    parse_bytes(content.as_bytes(), &ParseOptions::default())
}

/// Decodes raw pom.xml bytes (UTF-8).
pub fn parse_bytes(content: &[u8], options: &ParseOptions) -> Result<Project> {
    let root = root_element(content)?;
    if options.require_project_root && root != "project" {
        tracing::debug!("Rejecting document with root <{}>", root);
        return Err(PomError::UnexpectedRoot { found: root });
    }

    let project: Project = quick_xml::de::from_reader(content).map_err(|e| {
        tracing::debug!("Failed to decode pom.xml: {}", e);
        PomError::Decode(e)
    })?;

    tracing::debug!(
        "Parsed pom.xml {}: {} dependencies, {} managed, {} properties",
        project.coordinates(),
        project.dependencies.len(),
        project.dependency_management.dependencies.len(),
        project.properties.len()
    );

    Ok(project)
}

/// Opens, sizes and reads the file. The handle is closed when `file` drops,
/// on success and on every error path.
fn read_file(path: &Path, max_file_size: u64) -> Result<Vec<u8>> {
    let access = |source: std::io::Error| {
        tracing::debug!("Failed to read file {}: {}", path.display(), source);
        PomError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    };

    let mut file = File::open(path).map_err(access)?;
    let size = file.metadata().map_err(access)?.len();

    if size > max_file_size {
        tracing::warn!(
            "pom.xml exceeds maximum size: {} bytes (limit: {} bytes)",
            size,
            max_file_size
        );
        return Err(PomError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: max_file_size,
        });
    }
    tracing::trace!("File size: {} bytes", size);

    let mut content = Vec::with_capacity(size as usize);
    file.read_to_end(&mut content).map_err(access)?;
    Ok(content)
}

/// Local name of the first element in the document.
fn root_element(content: &[u8]) -> Result<String> {
    let mut reader = Reader::from_reader(content);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Event::Eof => return Err(PomError::MissingRoot),
            _ => {}
        }
        buf.clear();
    }
}
