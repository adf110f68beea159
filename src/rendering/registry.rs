//! Mapping from a topic's type tag to the function that renders it.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use super::Context;
use crate::content::TopicItem;

/// A caller-supplied render function for a topic type.
pub type Handler = Box<dyn Fn(&Context, &TopicItem) -> String>;

/// The built-in topic variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Concept,
    CodeExample,
    Principle,
    Comparison,
    BestPractice,
    Checklist,
    LiveCode,
    Playground,
    SplitView,
    TabContent,
    VisualDemo,
    ColorPalette,
    ComponentDemo,
    PropsTable,
    Quiz,
    QuizMulti,
    QuizBool,
    QuizCode,
}

impl Variant {
    pub const ALL: [Variant; 18] = [
        Variant::Concept,
        Variant::CodeExample,
        Variant::Principle,
        Variant::Comparison,
        Variant::BestPractice,
        Variant::Checklist,
        Variant::LiveCode,
        Variant::Playground,
        Variant::SplitView,
        Variant::TabContent,
        Variant::VisualDemo,
        Variant::ColorPalette,
        Variant::ComponentDemo,
        Variant::PropsTable,
        Variant::Quiz,
        Variant::QuizMulti,
        Variant::QuizBool,
        Variant::QuizCode,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Variant::Concept => "concept",
            Variant::CodeExample => "code-example",
            Variant::Principle => "principle",
            Variant::Comparison => "comparison",
            Variant::BestPractice => "best-practice",
            Variant::Checklist => "checklist",
            Variant::LiveCode => "live-code",
            Variant::Playground => "playground",
            Variant::SplitView => "split-view",
            Variant::TabContent => "tab-content",
            Variant::VisualDemo => "visual-demo",
            Variant::ColorPalette => "color-palette",
            Variant::ComponentDemo => "component-demo",
            Variant::PropsTable => "props-table",
            Variant::Quiz => "quiz",
            Variant::QuizMulti => "quiz-multi",
            Variant::QuizBool => "quiz-bool",
            Variant::QuizCode => "quiz-code",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Variant> {
        Variant::ALL
            .iter()
            .copied()
            .find(|variant| variant.tag() == tag)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What a type tag resolved to.
pub enum Resolved<'r> {
    Custom(&'r Handler),
    Builtin(Variant),
}

/// Custom handlers registered by the caller, consulted before the
/// built-in variants. Only mutated while the engine is being constructed.
#[derive(Default)]
pub struct Registry {
    custom: HashMap<String, Handler>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            custom: HashMap::new(),
        }
    }

    /// Store a handler under the given type name, replacing (and returning)
    /// any handler previously registered under that name.
    pub fn register(&mut self, name: impl Into<String>, handler: Handler) -> Option<Handler> {
        let name = name.into();
        debug!("Registering custom handler for '{}'", name);
        self.custom
            .insert(name, handler)
    }

    /// Custom handlers win over built-ins of the same name.
    pub fn resolve(&self, name: &str) -> Option<Resolved<'_>> {
        if let Some(handler) = self
            .custom
            .get(name)
        {
            return Some(Resolved::Custom(handler));
        }
        Variant::from_tag(name).map(Resolved::Builtin)
    }
}
