//! Typed pom.xml decoding.
//!
//! Reads a Maven Project Object Model file and decodes it into a
//! [`Project`] tree: coordinates, parent reference, repositories,
//! properties, dependency management, dependencies, profiles, build
//! plugins and plugin repositories.
//!
//! The result is the file as written. Parent POMs are not fetched,
//! `${...}` placeholders are not interpolated and profiles are not
//! activated; consumers needing those semantics build them on top.

mod de;
pub mod config;
pub mod error;
pub mod parser;
pub mod properties;
pub mod types;

pub use config::ParseOptions;
pub use error::{PomError, Result};
pub use parser::{parse, parse_bytes, parse_str, parse_with_options};
pub use properties::Properties;
pub use types::{
    Build, Dependency, DependencyManagement, Exclusion, MavenScope, Parent, Plugin,
    PluginRepository, Profile, Project, Repository,
};
