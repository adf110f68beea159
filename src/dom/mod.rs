//! The boundary between the engine and whatever hosts the page.
//!
//! The engine never reaches for a global document. Everything it does to a
//! page goes through a [`Gateway`]: injecting rendered fragments into the
//! page chrome's [`Slot`]s, and then (from the interactive runtime) updating
//! individual elements identified by a [`Target`]. A `Target` knows the CSS
//! selector that finds its element in the markup emitted by the renderers,
//! so a browser-backed gateway can resolve it directly.

use std::fmt;
use std::time::Duration;

mod page;

pub use page::{Element, Head, Page};

/// Injection points provided by the surrounding page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Title,
    Content,
    Navigation,
    Container,
}

impl Slot {
    pub fn selector(&self) -> &'static str {
        match self {
            Slot::Title => "#section-title",
            Slot::Content => "#content-container",
            Slot::Navigation => "#nav-links",
            Slot::Container => ".container",
        }
    }
}

/// The three editor regions of a live-code sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Html,
    Css,
    Js,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Html => "html",
            Lang::Css => "css",
            Lang::Js => "js",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lang::Html => "HTML",
            Lang::Css => "CSS",
            Lang::Js => "JavaScript",
        }
    }
}

/// The source panels of a component demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodePanel {
    Template,
    Script,
    Style,
}

impl CodePanel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodePanel::Template => "template",
            CodePanel::Script => "script",
            CodePanel::Style => "style",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CodePanel::Template => "Template",
            CodePanel::Script => "Script",
            CodePanel::Style => "Style",
        }
    }
}

/// An element within rendered content that the runtime reads or updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    QuizOption { quiz: String, index: usize },
    QuizSubmit { quiz: String },
    QuizFeedback { quiz: String },
    QuizFeedbackContent { quiz: String },
    TabHeader { group: String, index: usize },
    TabPanel { group: String, index: usize },
    Editor { topic: String, lang: Lang },
    PreviewFrame { topic: String },
    ExampleOutput { example: String },
    ExampleFrame { example: String },
    CodeTab { demo: String, panel: CodePanel },
    CodePanel { demo: String, panel: CodePanel },
    ControlValue { demo: String, property: String },
    DemoPreview { demo: String },
}

impl Target {
    /// The selector matching this element in rendered markup. These must
    /// stay in step with the attributes written by the renderers.
    pub fn selector(&self) -> String {
        match self {
            Target::QuizOption { quiz, index } => {
                format!("[data-quiz-id=\"{}\"] .quiz-option[data-index=\"{}\"]", quiz, index)
            }
            Target::QuizSubmit { quiz } => format!(".btn-check-answer[data-quiz=\"{}\"]", quiz),
            Target::QuizFeedback { quiz } => format!("[data-quiz-id=\"{}\"] .quiz-feedback", quiz),
            Target::QuizFeedbackContent { quiz } => {
                format!("[data-quiz-id=\"{}\"] .feedback-content", quiz)
            }
            Target::TabHeader { group, index } => {
                format!(".tab-header[data-tab=\"{}-{}\"]", group, index)
            }
            Target::TabPanel { group, index } => {
                format!(".tab-content[data-tab=\"{}-{}\"]", group, index)
            }
            Target::Editor { topic, lang } => format!(
                "[data-topic-id=\"{}\"] .code-editor[data-lang=\"{}\"]",
                topic,
                lang.as_str()
            ),
            Target::PreviewFrame { topic } => {
                format!("[data-topic-id=\"{}\"] .preview-frame", topic)
            }
            Target::ExampleOutput { example } => format!("#{}-output", example),
            Target::ExampleFrame { example } => format!("#{}-output .example-frame", example),
            Target::CodeTab { demo, panel } => format!(
                "[data-demo-id=\"{}\"] .code-tabs button[data-code=\"{}\"]",
                demo,
                panel.as_str()
            ),
            Target::CodePanel { demo, panel } => format!(
                "[data-demo-id=\"{}\"] .code-panel[data-code=\"{}\"]",
                demo,
                panel.as_str()
            ),
            Target::ControlValue { demo, property } => format!("#value-{}-{}", demo, property),
            Target::DemoPreview { demo } => format!("#demo-{}", demo),
        }
    }
}

/// A transient notification. The gateway owns the animation: show after
/// `delay`, hold for `hold`, fade over `fade`, then remove the element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub delay: Duration,
    pub hold: Duration,
    pub fade: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            delay: Duration::from_millis(100),
            hold: Duration::from_millis(2000),
            fade: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError {
    pub reason: String,
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "clipboard unavailable: {}", self.reason)
    }
}

/// Everything the engine needs from a page. Slot operations return `false`
/// when the page does not provide that injection point, in which case the
/// engine skips that part of the page.
pub trait Gateway {
    fn set_text(&mut self, slot: Slot, text: &str) -> bool;

    /// Replace the slot's children with the given markup.
    fn set_html(&mut self, slot: Slot, html: &str) -> bool;

    fn set_slot_class(&mut self, slot: Slot, class: &str, present: bool) -> bool;

    /// Place the sidebar panel inside the container, replacing any sidebar
    /// panel put there by a previous render.
    fn attach_sidebar(&mut self, class: &str, html: &str) -> bool;

    fn detach_sidebar(&mut self);

    // operations on elements within rendered content

    fn add_class(&mut self, target: &Target, class: &str);

    fn remove_class(&mut self, target: &Target, class: &str);

    fn set_disabled(&mut self, target: &Target, disabled: bool);

    fn set_visible(&mut self, target: &Target, visible: bool);

    fn set_inner_html(&mut self, target: &Target, html: &str);

    fn set_text_content(&mut self, target: &Target, text: &str);

    fn set_style(&mut self, target: &Target, property: &str, value: &str);

    /// Whether the input belonging to the target is checked.
    fn is_checked(&self, target: &Target) -> bool;

    /// The current value of a form control, if the user has changed it.
    fn value(&self, target: &Target) -> Option<String>;

    /// Replace the document inside a frame (open, write, close).
    fn write_frame(&mut self, target: &Target, document: &str);

    /// A blocking message to the user.
    fn alert(&mut self, message: &str);

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;

    fn toast(&mut self, toast: &Toast);

    /// Run code in the host page's own context, returning the lines it
    /// logged or the message of the exception it raised. Only reached when
    /// examples are explicitly trusted.
    fn evaluate(&mut self, _code: &str) -> Result<Vec<String>, String> {
        Err("code evaluation is not available on this page".to_string())
    }
}
