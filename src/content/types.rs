//! Types describing a content document as supplied to the engine

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::scalar;

/// `null` is read as the type's default.
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Any scalar is read as its display text, `null` as empty.
fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar(&value))
}

/// A whole page worth of content. Immutable once handed to the engine; each
/// call to `Engine::init()` replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub section: Option<Section>,
    #[serde(default, deserialize_with = "or_default")]
    pub topics: Vec<TopicItem>,
    #[serde(default)]
    pub sidebar: Option<Sidebar>,
    #[serde(default)]
    pub navigation: Option<Navigation>,
}

impl ContentDocument {
    pub fn layout(&self) -> LayoutKind {
        self.section
            .as_ref()
            .map(|section| {
                section
                    .layout
                    .kind
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub layout: Layout,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(rename = "type", default)]
    pub kind: LayoutKind,
    #[serde(default)]
    pub sidebar_sticky: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Sidebar,
    #[default]
    #[serde(other)]
    Standard,
}

/// One discrete unit of content. The `kind` tag selects how it is rendered;
/// `content` is interpreted according to that tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopicItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    /// Missing or unusable tags are kept as text so the topic still
    /// reaches the unknown-type fallback.
    #[serde(rename = "type", default, deserialize_with = "text")]
    pub kind: String,
    #[serde(default)]
    pub content: Value,
}

impl TopicItem {
    pub fn new(kind: &str, title: &str, content: Value) -> Self {
        TopicItem {
            id: None,
            title: title.to_string(),
            kind: kind.to_string(),
            content,
        }
    }

    /// Interpret the content record as the given variant's shape. Absent
    /// content is treated as an empty record.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        if self
            .content
            .is_null()
        {
            let empty = Value::Object(Map::new());
            T::deserialize(&empty)
        } else {
            T::deserialize(&self.content)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sidebar {
    #[serde(default, deserialize_with = "text")]
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub examples: Vec<SidebarExample>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SidebarExample {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub runnable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Navigation {
    #[serde(default)]
    pub prev: Option<Link>,
    #[serde(default)]
    pub next: Option<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}
