//! An in-memory page. Used by the command line tool to produce static HTML,
//! and by tests in place of a browser.

use serde::Serialize;
use std::collections::HashMap;
use tinytemplate::TinyTemplate;
use tracing::debug;

use super::{ClipboardError, Gateway, Slot, Target, Toast};

static TEMPLATE: &'static str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
{{ if has_stylesheet }}<link rel="stylesheet" href="{stylesheet}">
{{ endif }}{{ if has_theme }}<style>
:root \{
{{ for variable in theme }}    --{variable.name}: {variable.value | unescaped};
{{ endfor }}}
</style>
{{ endif }}</head>
<body data-subject="{subject}">
{{ if has_container }}<div class="{container}">
{{ endif }}{{ if has_title }}<h1 id="section-title">{heading}</h1>
{{ endif }}{{ if has_content }}<div id="content-container">{content | unescaped}</div>
{{ endif }}{{ if has_sidebar }}<aside class="{sidebar_class}">{sidebar | unescaped}</aside>
{{ endif }}{{ if has_navigation }}<div id="nav-links">{navigation | unescaped}</div>
{{ endif }}{{ if has_container }}</div>
{{ endif }}</body>
</html>
"#;

/// Observable state of one element, as far as the runtime has touched it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub classes: Vec<String>,
    pub disabled: bool,
    pub visible: Option<bool>,
    pub checked: bool,
    pub value: Option<String>,
    pub inner_html: Option<String>,
    pub text: Option<String>,
    pub style: Vec<(String, String)>,
    pub frame: Option<String>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes
            .iter()
            .any(|c| c == class)
    }
}

/// Things that go in the page's head rather than into any slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Head {
    pub title: String,
    pub subject: String,
    pub stylesheet: Option<String>,
    pub theme: Vec<(String, String)>,
}

type Evaluator = Box<dyn FnMut(&str) -> Result<Vec<String>, String>>;

pub struct Page {
    title: Option<String>,
    content: Option<String>,
    navigation: Option<String>,
    container: Option<Vec<String>>,
    sidebar: Option<(String, String)>,
    elements: HashMap<Target, Element>,
    alerts: Vec<String>,
    toasts: Vec<Toast>,
    clipboard: Option<String>,
    clipboard_denied: bool,
    evaluator: Option<Evaluator>,
}

impl Page {
    /// A page providing every slot.
    pub fn new() -> Self {
        Page {
            title: Some(String::new()),
            content: Some(String::new()),
            navigation: Some(String::new()),
            container: Some(vec!["container".to_string()]),
            sidebar: None,
            elements: HashMap::new(),
            alerts: Vec::new(),
            toasts: Vec::new(),
            clipboard: None,
            clipboard_denied: false,
            evaluator: None,
        }
    }

    /// The same page, but lacking the given slot.
    pub fn without(mut self, slot: Slot) -> Self {
        match slot {
            Slot::Title => self.title = None,
            Slot::Content => self.content = None,
            Slot::Navigation => self.navigation = None,
            Slot::Container => self.container = None,
        }
        self
    }

    /// Make clipboard writes fail, as when the page lacks permission.
    pub fn deny_clipboard(mut self) -> Self {
        self.clipboard_denied = true;
        self
    }

    /// Provide a way to evaluate code in the host context.
    pub fn with_evaluator(
        mut self,
        evaluator: impl FnMut(&str) -> Result<Vec<String>, String> + 'static,
    ) -> Self {
        self.evaluator = Some(Box::new(evaluator));
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title
            .as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.content
            .as_deref()
    }

    pub fn navigation(&self) -> Option<&str> {
        self.navigation
            .as_deref()
    }

    pub fn container_classes(&self) -> Option<&[String]> {
        self.container
            .as_deref()
    }

    /// The sidebar panel's class and markup, if one is attached.
    pub fn sidebar(&self) -> Option<(&str, &str)> {
        self.sidebar
            .as_ref()
            .map(|(class, html)| (class.as_str(), html.as_str()))
    }

    pub fn element(&self, target: &Target) -> Option<&Element> {
        self.elements
            .get(target)
    }

    pub fn has_class(&self, target: &Target, class: &str) -> bool {
        self.element(target)
            .map(|element| element.has_class(class))
            .unwrap_or(false)
    }

    pub fn is_disabled(&self, target: &Target) -> bool {
        self.element(target)
            .map(|element| element.disabled)
            .unwrap_or(false)
    }

    /// Simulate the user ticking an option.
    pub fn check(&mut self, target: &Target) {
        self.touch(target)
            .checked = true;
    }

    pub fn uncheck(&mut self, target: &Target) {
        self.touch(target)
            .checked = false;
    }

    /// Simulate the user editing a form control.
    pub fn type_into(&mut self, target: &Target, value: &str) {
        self.touch(target)
            .value = Some(value.to_string());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard
            .as_deref()
    }

    fn touch(&mut self, target: &Target) -> &mut Element {
        self.elements
            .entry(target.clone())
            .or_default()
    }

    /// Serialise the page as a complete HTML document.
    pub fn to_html(&self, head: &Head) -> Result<String, tinytemplate::error::Error> {
        let mut tt = TinyTemplate::new();
        tt.add_template("page", TEMPLATE)?;

        let context = Context {
            title: head
                .title
                .clone(),
            subject: head
                .subject
                .clone(),
            has_stylesheet: head
                .stylesheet
                .is_some(),
            stylesheet: head
                .stylesheet
                .clone()
                .unwrap_or_default(),
            has_theme: !head
                .theme
                .is_empty(),
            theme: head
                .theme
                .iter()
                .map(|(name, value)| Variable {
                    name: name.clone(),
                    value: value.clone(),
                })
                .collect(),
            has_container: self
                .container
                .is_some(),
            container: self
                .container
                .as_ref()
                .map(|classes| classes.join(" "))
                .unwrap_or_default(),
            has_title: self
                .title
                .is_some(),
            heading: self
                .title
                .clone()
                .unwrap_or_default(),
            has_content: self
                .content
                .is_some(),
            content: self
                .content
                .clone()
                .unwrap_or_default(),
            has_sidebar: self
                .sidebar
                .is_some(),
            sidebar_class: self
                .sidebar
                .as_ref()
                .map(|(class, _)| class.clone())
                .unwrap_or_default(),
            sidebar: self
                .sidebar
                .as_ref()
                .map(|(_, html)| html.clone())
                .unwrap_or_default(),
            has_navigation: self
                .navigation
                .is_some(),
            navigation: self
                .navigation
                .clone()
                .unwrap_or_default(),
        };

        tt.render("page", &context)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::new()
    }
}

#[derive(Serialize)]
struct Variable {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct Context {
    title: String,
    subject: String,
    has_stylesheet: bool,
    stylesheet: String,
    has_theme: bool,
    theme: Vec<Variable>,
    has_container: bool,
    container: String,
    has_title: bool,
    heading: String,
    has_content: bool,
    content: String,
    has_sidebar: bool,
    sidebar_class: String,
    sidebar: String,
    has_navigation: bool,
    navigation: String,
}

/// Elements living in the sidebar panel rather than the content slot.
fn is_sidebar(target: &Target) -> bool {
    matches!(
        target,
        Target::ExampleOutput { .. } | Target::ExampleFrame { .. }
    )
}

impl Gateway for Page {
    fn set_text(&mut self, slot: Slot, text: &str) -> bool {
        // Text and markup only differ once serialised, and the title is the
        // only slot which receives text.
        self.set_html(slot, text)
    }

    fn set_html(&mut self, slot: Slot, html: &str) -> bool {
        let place = match slot {
            Slot::Title => &mut self.title,
            Slot::Content => &mut self.content,
            Slot::Navigation => &mut self.navigation,
            Slot::Container => {
                debug!("Refusing to replace the whole container");
                return false;
            }
        };
        match place {
            Some(existing) => {
                *existing = html.to_string();
                if slot == Slot::Content {
                    self.elements
                        .retain(|target, _| is_sidebar(target));
                }
                true
            }
            None => false,
        }
    }

    fn set_slot_class(&mut self, slot: Slot, class: &str, present: bool) -> bool {
        if slot != Slot::Container {
            return false;
        }
        match &mut self.container {
            Some(classes) => {
                classes.retain(|c| c != class);
                if present {
                    classes.push(class.to_string());
                }
                true
            }
            None => false,
        }
    }

    fn attach_sidebar(&mut self, class: &str, html: &str) -> bool {
        if self
            .container
            .is_none()
        {
            return false;
        }
        self.sidebar = Some((class.to_string(), html.to_string()));
        self.elements
            .retain(|target, _| !is_sidebar(target));
        true
    }

    fn detach_sidebar(&mut self) {
        self.sidebar = None;
        self.elements
            .retain(|target, _| !is_sidebar(target));
    }

    fn add_class(&mut self, target: &Target, class: &str) {
        let element = self.touch(target);
        if !element.has_class(class) {
            element
                .classes
                .push(class.to_string());
        }
    }

    fn remove_class(&mut self, target: &Target, class: &str) {
        self.touch(target)
            .classes
            .retain(|c| c != class);
    }

    fn set_disabled(&mut self, target: &Target, disabled: bool) {
        self.touch(target)
            .disabled = disabled;
    }

    fn set_visible(&mut self, target: &Target, visible: bool) {
        self.touch(target)
            .visible = Some(visible);
    }

    fn set_inner_html(&mut self, target: &Target, html: &str) {
        self.touch(target)
            .inner_html = Some(html.to_string());
    }

    fn set_text_content(&mut self, target: &Target, text: &str) {
        self.touch(target)
            .text = Some(text.to_string());
    }

    fn set_style(&mut self, target: &Target, property: &str, value: &str) {
        let element = self.touch(target);
        element
            .style
            .retain(|(p, _)| p != property);
        element
            .style
            .push((property.to_string(), value.to_string()));
    }

    fn is_checked(&self, target: &Target) -> bool {
        self.element(target)
            .map(|element| element.checked)
            .unwrap_or(false)
    }

    fn value(&self, target: &Target) -> Option<String> {
        self.element(target)
            .and_then(|element| {
                element
                    .value
                    .clone()
            })
    }

    fn write_frame(&mut self, target: &Target, document: &str) {
        self.touch(target)
            .frame = Some(document.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts
            .push(message.to_string());
    }

    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.clipboard_denied {
            return Err(ClipboardError {
                reason: "permission denied".to_string(),
            });
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn toast(&mut self, toast: &Toast) {
        self.toasts
            .push(toast.clone());
    }

    fn evaluate(&mut self, code: &str) -> Result<Vec<String>, String> {
        match &mut self.evaluator {
            Some(evaluator) => evaluator(code),
            None => Err("code evaluation is not available on this page".to_string()),
        }
    }
}
