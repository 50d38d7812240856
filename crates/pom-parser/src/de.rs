//! Decoding of `<container><item/>...</container>` lists.
//!
//! POM lists never appear bare: `<dependencies>` holds `<dependency>`
//! children, `<repositories>` holds `<repository>` children and so on.
//! [`list`] decodes such a container straight into a `Vec` of items, so the
//! model never carries the intermediate wrapper type.

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// A model type that appears as the repeated child of a container element.
pub(crate) trait ListItem {
    /// Local tag name of one item inside its container.
    const TAG: &'static str;
}

/// Decodes a container element into its `T::TAG` children.
///
/// Children with any other name, attributes and stray text are skipped.
/// Used with `#[serde(default, deserialize_with = "...")]` so an absent
/// container yields an empty list.
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + ListItem,
{
    deserializer.deserialize_map(ListVisitor(PhantomData))
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for ListVisitor<T>
where
    T: Deserialize<'de> + ListItem,
{
    type Value = Vec<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a container of <{}> elements", T::TAG)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key == T::TAG {
                items.push(map.next_value::<T>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(items)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Vec::new())
    }

    // whitespace-only container
    fn visit_str<E>(self, _value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Vec::new())
    }
}
