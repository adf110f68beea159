//! Engine configuration: the serialisable settings, feature switches,
//! custom type handlers, and lifecycle hooks.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::warn;

use super::Engine;
use crate::content::{scalar, ContentDocument, TopicItem};
use crate::rendering::{Context, Registry};

/// Optional behaviours. Every switch is on unless explicitly set to
/// `false`, except `trusted_examples` which is off unless explicitly set
/// to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default = "enabled", deserialize_with = "unless_false")]
    pub code_runner: bool,
    #[serde(default = "enabled", deserialize_with = "unless_false")]
    pub live_preview: bool,
    #[serde(default = "enabled", deserialize_with = "unless_false")]
    pub copy_code: bool,
    #[serde(default = "enabled", deserialize_with = "unless_false")]
    pub syntax_highlight: bool,
    /// Run sidebar examples in the host page instead of a sandboxed frame.
    #[serde(default, deserialize_with = "only_true")]
    pub trusted_examples: bool,
}

impl Default for Features {
    fn default() -> Self {
        Features {
            code_runner: true,
            live_preview: true,
            copy_code: true,
            syntax_highlight: true,
            trusted_examples: false,
        }
    }
}

fn enabled() -> bool {
    true
}

fn unless_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value != Some(Value::Bool(false)))
}

fn only_true<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value == Some(Value::Bool(true)))
}

/// The part of the configuration which can be read from a file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub subject: String,
    pub namespace: String,
    pub theme: Map<String, Value>,
    pub layout: Value,
    pub features: Features,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            subject: "default".to_string(),
            namespace: "contentData".to_string(),
            theme: Map::new(),
            layout: Value::Object(Map::new()),
            features: Features::default(),
        }
    }
}

impl Settings {
    /// Theme entries with scalar values, as CSS custom property name and
    /// value pairs. Nested entries are skipped, as are entries which could
    /// end the declaration or the style element they are written into.
    pub fn theme_variables(&self) -> Vec<(String, String)> {
        self.theme
            .iter()
            .filter(|(_, value)| !value.is_object() && !value.is_array() && !value.is_null())
            .map(|(name, value)| (name.clone(), scalar(value)))
            .filter(|(name, value)| {
                let usable = !name.is_empty()
                    && name
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
                    && !value.contains(|c| matches!(c, '<' | '>' | ';' | '{' | '}'));
                if !usable {
                    warn!("Ignoring theme entry '{}'", name);
                }
                usable
            })
            .collect()
    }
}

pub type RenderHook<G> = Box<dyn Fn(&Engine<G>, &ContentDocument)>;
pub type TopicHook<G> = Box<dyn Fn(&Engine<G>, &TopicItem)>;
pub type RenderedHook<G> = Box<dyn Fn(&Engine<G>, &TopicItem, &str)>;

/// Callbacks invoked around rendering. Their return values, if any, are
/// ignored; they observe but cannot alter the output.
pub struct Hooks<G> {
    pub(crate) before_render: Option<RenderHook<G>>,
    pub(crate) after_render: Option<RenderHook<G>>,
    pub(crate) before_topic_render: Option<TopicHook<G>>,
    pub(crate) after_topic_render: Option<RenderedHook<G>>,
}

impl<G> Default for Hooks<G> {
    fn default() -> Self {
        Hooks {
            before_render: None,
            after_render: None,
            before_topic_render: None,
            after_topic_render: None,
        }
    }
}

/// Everything an engine is constructed from. Fixed for the engine's
/// lifetime.
pub struct Configuration<G> {
    pub settings: Settings,
    pub(crate) registry: Registry,
    pub(crate) hooks: Hooks<G>,
}

impl<G> Configuration<G> {
    pub fn new() -> Self {
        Configuration::from_settings(Settings::default())
    }

    pub fn from_settings(settings: Settings) -> Self {
        Configuration {
            settings,
            registry: Registry::new(),
            hooks: Hooks::default(),
        }
    }

    /// Render topics of the given type with a caller supplied function. This
    /// takes priority over any built-in renderer of the same name, and a
    /// later registration replaces an earlier one.
    pub fn with_type(
        mut self,
        name: impl Into<String>,
        handler: impl Fn(&Context, &TopicItem) -> String + 'static,
    ) -> Self {
        self.registry
            .register(name, Box::new(handler));
        self
    }

    pub fn on_before_render(mut self, hook: impl Fn(&Engine<G>, &ContentDocument) + 'static) -> Self {
        self.hooks
            .before_render = Some(Box::new(hook));
        self
    }

    pub fn on_after_render(mut self, hook: impl Fn(&Engine<G>, &ContentDocument) + 'static) -> Self {
        self.hooks
            .after_render = Some(Box::new(hook));
        self
    }

    pub fn on_before_topic_render(mut self, hook: impl Fn(&Engine<G>, &TopicItem) + 'static) -> Self {
        self.hooks
            .before_topic_render = Some(Box::new(hook));
        self
    }

    pub fn on_after_topic_render(
        mut self,
        hook: impl Fn(&Engine<G>, &TopicItem, &str) + 'static,
    ) -> Self {
        self.hooks
            .after_topic_render = Some(Box::new(hook));
        self
    }
}

impl<G> Default for Configuration<G> {
    fn default() -> Self {
        Configuration::new()
    }
}
