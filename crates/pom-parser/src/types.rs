//! Typed model of a pom.xml document.
//!
//! Field names follow the POM tags (`groupId`, `artifactId`, ...). Scalars
//! default to the empty string and lists to an empty `Vec` when the element
//! is absent. Content without a field here (plugin `configuration` and
//! `executions`, profile `activation`, `reporting`, ...) is discarded.

use crate::de::{ListItem, list};
use crate::properties::Properties;
use serde::{Deserialize, Serialize};

/// Root `<project>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub model_version: String,
    /// All fields empty when the POM has no `<parent>`.
    pub parent: Parent,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub name: String,
    #[serde(deserialize_with = "list")]
    pub repositories: Vec<Repository>,
    pub properties: Properties,
    pub dependency_management: DependencyManagement,
    #[serde(deserialize_with = "list")]
    pub dependencies: Vec<Dependency>,
    #[serde(deserialize_with = "list")]
    pub profiles: Vec<Profile>,
    pub build: Build,
    #[serde(deserialize_with = "list")]
    pub plugin_repositories: Vec<PluginRepository>,
}

impl Project {
    /// Case-insensitive property lookup.
    ///
    /// See [`Properties::get_ignore_case`].
    pub fn get_property(&self, key: &str) -> Option<&str> {
        self.properties.get_ignore_case(key)
    }

    /// "{groupId}:{artifactId}:{version}" as written in the file.
    ///
    /// Missing groupId and version are taken from `<parent>`, the only
    /// inheritance that needs no parent POM to be fetched.
    pub fn coordinates(&self) -> String {
        let group_id = if self.group_id.is_empty() {
            &self.parent.group_id
        } else {
            &self.group_id
        };
        let version = if self.version.is_empty() {
            &self.parent.version
        } else {
            &self.version
        };
        format!("{group_id}:{}:{version}", self.artifact_id)
    }
}

/// `<parent>` reference. Stored as written, never resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parent {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Parent {
    /// True when the POM declared no parent.
    pub fn is_empty(&self) -> bool {
        self.group_id.is_empty() && self.artifact_id.is_empty() && self.version.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub scope: String,
    #[serde(deserialize_with = "list")]
    pub exclusions: Vec<Exclusion>,
}

impl ListItem for Dependency {
    const TAG: &'static str = "dependency";
}

impl Dependency {
    /// Canonical identifier: "{groupId}:{artifactId}"
    pub fn coordinates(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// Declared scope, `Compile` when absent or unrecognized.
    pub fn scope_kind(&self) -> MavenScope {
        self.scope.parse().unwrap_or_default()
    }

    /// Whether an `<exclusion>` of this dependency matches the given artifact.
    ///
    /// `*` in either exclusion field matches anything.
    pub fn is_excluded(&self, group_id: &str, artifact_id: &str) -> bool {
        self.exclusions.iter().any(|e| e.matches(group_id, artifact_id))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Exclusion {
    pub group_id: String,
    pub artifact_id: String,
}

impl ListItem for Exclusion {
    const TAG: &'static str = "exclusion";
}

impl Exclusion {
    pub fn matches(&self, group_id: &str, artifact_id: &str) -> bool {
        (self.group_id == "*" || self.group_id == group_id)
            && (self.artifact_id == "*" || self.artifact_id == artifact_id)
    }
}

/// `<dependencyManagement>`: version and scope defaults, not dependency edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DependencyManagement {
    #[serde(deserialize_with = "list")]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Repository {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl ListItem for Repository {
    const TAG: &'static str = "repository";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginRepository {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl ListItem for PluginRepository {
    const TAG: &'static str = "pluginRepository";
}

/// `<profile>`. Activation is not evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub build: Build,
}

impl ListItem for Profile {
    const TAG: &'static str = "profile";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Build {
    #[serde(deserialize_with = "list")]
    pub plugins: Vec<Plugin>,
}

// TODO: model <executions> and <configuration> once a consumer needs them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Plugin {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ListItem for Plugin {
    const TAG: &'static str = "plugin";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MavenScope {
    #[default]
    Compile,
    Test,
    Runtime,
    Provided,
    System,
    Import,
}

impl std::str::FromStr for MavenScope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "test" => Self::Test,
            "runtime" => Self::Runtime,
            "provided" => Self::Provided,
            "system" => Self::System,
            "import" => Self::Import,
            _ => Self::Compile,
        })
    }
}
