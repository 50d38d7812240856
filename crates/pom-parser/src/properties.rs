//! The `<properties>` block of a POM.
//!
//! Property tags are chosen by the project author, so they cannot be bound
//! to named fields. Each child element becomes one entry keyed by its local
//! tag name, with its text content as the value:
//!
//! ```xml
//! <properties>
//!   <java.version>17</java.version>
//!   <project.build.sourceEncoding>UTF-8</project.build.sourceEncoding>
//! </properties>
//! ```
//!
//! Values are stored verbatim; `${...}` references are not interpolated.

use serde::Serialize;
use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;

/// Property name to value mapping.
///
/// Backed by a sorted map, so iteration order (and therefore the result of
/// [`Properties::get_ignore_case`] when keys differ only by case) is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Case-insensitive lookup.
    ///
    /// Scans entries in key order and returns the first whose lowercased
    /// name equals the lowercased `key`. With `project.version` and
    /// `Project.Version` both declared, `Project.Version` wins because it
    /// sorts first.
    pub fn get_ignore_case(&self, key: &str) -> Option<&str> {
        let wanted = key.to_lowercase();
        self.0
            .iter()
            .find(|(name, _)| name.to_lowercase() == wanted)
            .map(|(_, value)| value.as_str())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Folds `(name, value)` pairs into a map, last occurrence wins.
impl FromIterator<(String, String)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = deserializer.deserialize_map(EntriesVisitor)?;
        Ok(entries.into_iter().collect())
    }
}

/// Collects every child element of `<properties>` in document order.
struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = Vec<(String, String)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a <properties> element")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some(name) = map.next_key::<String>()? {
            // `@attr` and `$text` keys are not property elements
            if name.starts_with(['@', '$']) {
                map.next_value::<IgnoredAny>()?;
                continue;
            }
            let value = map.next_value::<String>()?;
            entries.push((name, value));
        }
        Ok(entries)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Vec::new())
    }

    fn visit_str<E>(self, _value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Vec::new())
    }
}
