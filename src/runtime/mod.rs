//! The interactive runtime.
//!
//! Rendering produces a manifest of [`Widget`]s alongside the markup. Once
//! that markup is on the page the runtime takes ownership of the manifest
//! and responds to user [`Action`]s, keeping each widget's state itself and
//! projecting changes onto the page through the [`Gateway`].

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::dom::{CodePanel, Gateway, Toast};

mod quiz;
mod sandbox;
mod tabs;

pub use quiz::{evaluate, QuizKind, QuizState, QuizWidget, PROMPT};
pub use sandbox::{compose, error_panel, example_document, info_panel, success_panel, ExampleRunner, Sandbox};
pub use tabs::{CodeTabs, DemoControl, DemoWidget, TabGroup};

/// An interactive element emitted by a render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Quiz(QuizWidget),
    Tabs(TabGroup),
    CodeTabs(CodeTabs),
    LiveCode(Sandbox),
    Example(ExampleRunner),
    /// A colour swatch, by the value it copies.
    Swatch(String),
    Demo(DemoWidget),
}

/// Something the user did on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CheckAnswer { quiz: String },
    SelectTab { group: String, index: usize },
    SelectCode { demo: String, panel: CodePanel },
    RunLiveCode { topic: String },
    RunExample { example: String },
    CopyColor { value: String },
    AdjustControl { demo: String, property: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action was applied and the page updated.
    Handled,
    /// The action was refused and the user prompted; nothing changed.
    Prompted,
    /// Nothing on the current page responds to this action.
    Ignored,
}

#[derive(Debug, Default)]
pub struct Runtime {
    trusted: bool,
    quizzes: HashMap<String, QuizWidget>,
    tabs: HashMap<String, TabGroup>,
    code_tabs: HashMap<String, CodeTabs>,
    sandboxes: HashMap<String, Sandbox>,
    examples: HashMap<String, ExampleRunner>,
    swatches: Vec<String>,
    demos: HashMap<String, DemoWidget>,
}

impl Runtime {
    /// If `trusted`, sidebar examples are evaluated by the host page rather
    /// than inside a sandboxed frame.
    pub fn new(trusted: bool) -> Self {
        Runtime {
            trusted,
            ..Runtime::default()
        }
    }

    /// Take over the widgets of a freshly rendered page, discarding those of
    /// any previous render. Live-code sandboxes marked to run automatically
    /// are run now.
    pub fn attach(&mut self, widgets: Vec<Widget>, gateway: &mut dyn Gateway) {
        *self = Runtime::new(self.trusted);

        let count = widgets.len();
        for widget in widgets {
            match widget {
                Widget::Quiz(quiz) => {
                    self.quizzes
                        .insert(quiz.id().to_string(), quiz);
                }
                Widget::Tabs(group) => {
                    self.tabs
                        .insert(group.id().to_string(), group);
                }
                Widget::CodeTabs(tabs) => {
                    self.code_tabs
                        .insert(tabs.id().to_string(), tabs);
                }
                Widget::LiveCode(sandbox) => {
                    if sandbox.autorun() {
                        sandbox.run(gateway);
                    }
                    self.sandboxes
                        .insert(sandbox.topic().to_string(), sandbox);
                }
                Widget::Example(example) => {
                    self.examples
                        .insert(example.id().to_string(), example);
                }
                Widget::Swatch(value) => self
                    .swatches
                    .push(value),
                Widget::Demo(demo) => {
                    self.demos
                        .insert(demo.id().to_string(), demo);
                }
            }
        }
        info!("Wired {} interactive elements", count);
    }

    pub fn dispatch(&mut self, action: &Action, gateway: &mut dyn Gateway) -> Outcome {
        let outcome = match action {
            Action::CheckAnswer { quiz } => match self
                .quizzes
                .get_mut(quiz)
            {
                Some(quiz) => quiz.submit(gateway),
                None => Outcome::Ignored,
            },
            Action::SelectTab { group, index } => match self
                .tabs
                .get_mut(group)
            {
                Some(group) => group.select(*index, gateway),
                None => Outcome::Ignored,
            },
            Action::SelectCode { demo, panel } => match self
                .code_tabs
                .get_mut(demo)
            {
                Some(tabs) => tabs.select(*panel, gateway),
                None => Outcome::Ignored,
            },
            Action::RunLiveCode { topic } => match self
                .sandboxes
                .get(topic)
            {
                Some(sandbox) => {
                    sandbox.run(gateway);
                    Outcome::Handled
                }
                None => Outcome::Ignored,
            },
            Action::RunExample { example } => match self
                .examples
                .get(example)
            {
                Some(example) => {
                    example.run(gateway, self.trusted);
                    Outcome::Handled
                }
                None => Outcome::Ignored,
            },
            Action::CopyColor { value } => {
                if self
                    .swatches
                    .contains(value)
                {
                    copy(value, gateway);
                    Outcome::Handled
                } else {
                    Outcome::Ignored
                }
            }
            Action::AdjustControl {
                demo,
                property,
                value,
            } => match self
                .demos
                .get(demo)
            {
                Some(demo) => demo.adjust(property, value, gateway),
                None => Outcome::Ignored,
            },
        };

        if outcome == Outcome::Ignored {
            debug!("Nothing wired for {:?}", action);
        }
        outcome
    }

    pub fn quiz(&self, id: &str) -> Option<&QuizWidget> {
        self.quizzes
            .get(id)
    }

    pub fn tab_group(&self, id: &str) -> Option<&TabGroup> {
        self.tabs
            .get(id)
    }

    pub fn len(&self) -> usize {
        self.quizzes
            .len()
            + self
                .tabs
                .len()
            + self
                .code_tabs
                .len()
            + self
                .sandboxes
                .len()
            + self
                .examples
                .len()
            + self
                .swatches
                .len()
            + self
                .demos
                .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Copy a swatch's value, confirming with a toast. A failed write is
/// reported the same way and not retried.
fn copy(value: &str, gateway: &mut dyn Gateway) {
    match gateway.write_clipboard(value) {
        Ok(()) => gateway.toast(&Toast::new(format!("Copied: {}", value))),
        Err(error) => {
            warn!("Unable to copy {}: {}", value, error);
            gateway.toast(&Toast::new(format!("Could not copy {}", value)));
        }
    }
}

#[cfg(test)]
mod check {
    use super::*;
    use crate::dom::{Page, Target};

    fn quiz(id: &str) -> Widget {
        Widget::Quiz(QuizWidget::new(
            id.to_string(),
            QuizKind::Single,
            vec![false, true],
        ))
    }

    #[test]
    fn attach_replaces_previous_widgets() {
        let mut page = Page::new();
        let mut runtime = Runtime::new(false);

        runtime.attach(vec![quiz("a"), Widget::Swatch("#fff".to_string())], &mut page);
        assert_eq!(runtime.len(), 2);

        runtime.attach(vec![quiz("b")], &mut page);
        assert_eq!(runtime.len(), 1);
        assert!(runtime
            .quiz("a")
            .is_none());
        assert_eq!(
            runtime.dispatch(&Action::CheckAnswer { quiz: "a".to_string() }, &mut page),
            Outcome::Ignored
        );
    }

    #[test]
    fn autorun_writes_preview_on_attach() {
        let mut page = Page::new();
        let mut runtime = Runtime::new(false);
        let sandbox = Sandbox::new(
            "t".to_string(),
            vec![(crate::dom::Lang::Html, "<p>auto</p>".to_string())],
            true,
        );

        runtime.attach(vec![Widget::LiveCode(sandbox)], &mut page);
        let frame = page
            .element(&Target::PreviewFrame {
                topic: "t".to_string(),
            })
            .and_then(|element| {
                element
                    .frame
                    .clone()
            })
            .unwrap();
        assert!(frame.contains("<p>auto</p>"));
    }

    #[test]
    fn copy_failure_is_reported() {
        let mut page = Page::new().deny_clipboard();
        let mut runtime = Runtime::new(false);
        runtime.attach(vec![Widget::Swatch("#42b883".to_string())], &mut page);

        let outcome = runtime.dispatch(
            &Action::CopyColor {
                value: "#42b883".to_string(),
            },
            &mut page,
        );
        assert_eq!(outcome, Outcome::Handled);
        assert_eq!(page.clipboard(), None);
        assert_eq!(page.toasts()[0].message, "Could not copy #42b883");
    }

    #[test]
    fn unknown_swatch_ignored() {
        let mut page = Page::new();
        let mut runtime = Runtime::new(false);
        let outcome = runtime.dispatch(
            &Action::CopyColor {
                value: "#000".to_string(),
            },
            &mut page,
        );
        assert_eq!(outcome, Outcome::Ignored);
        assert!(page
            .toasts()
            .is_empty());
    }
}
