//! Turn content into HTML fragments.
//!
//! Every render function here is pure with respect to the page: it reads a
//! topic (or the sidebar, or the navigation links) and returns a String.
//! Getting those strings onto a page is the engine's job. The only state a
//! render pass accumulates lives in its [`Context`]: freshly generated ids
//! and the manifest of widgets that the interactive runtime will wire up
//! afterwards.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};

use crate::content::prepare;
use crate::engine::Features;
use crate::runtime::Widget;

mod document;
mod highlight;
mod quiz;
mod registry;
mod topics;

pub use document::{heading, render_navigation, render_sidebar};
pub use highlight::highlight;
pub use quiz::{difficulty, letter, Difficulty};
pub use registry::{Handler, Registry, Resolved, Variant};
pub use topics::{render_malformed, render_unknown, render_variant, validate};

/// Make text safe for inclusion in HTML, either as element content or as a
/// quoted attribute value.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Source of the ids which correlate rendered markup with the widgets the
/// runtime wires up. Ids only need to be unique within one page; random ids
/// are not checked for collisions.
#[derive(Debug)]
pub enum Ids {
    Random,
    Sequential(Cell<u64>),
}

impl Ids {
    pub fn random() -> Self {
        Ids::Random
    }

    /// Predictable ids (`id-1`, `id-2`, …) for when output must be stable.
    pub fn sequential() -> Self {
        Ids::Sequential(Cell::new(0))
    }

    pub fn generate(&self) -> String {
        match self {
            Ids::Random => {
                // nine base-36 digits
                let n = rand::random::<u64>() % 36u64.pow(9);
                format!("id-{}", base36(n, 9))
            }
            Ids::Sequential(counter) => {
                let n = counter.get() + 1;
                counter.set(n);
                format!("id-{}", base36(n, 1))
            }
        }
    }
}

fn base36(mut n: u64, width: usize) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut digits = Vec::with_capacity(width.max(13));
    while n > 0 {
        digits.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    while digits.len() < width {
        digits.push(b'0');
    }
    digits
        .iter()
        .rev()
        .map(|&d| d as char)
        .collect()
}

/// State carried through a single render pass.
pub struct Context<'a> {
    pub features: &'a Features,
    ids: &'a Ids,
    widgets: RefCell<Vec<Widget>>,
}

impl<'a> Context<'a> {
    pub fn new(features: &'a Features, ids: &'a Ids) -> Self {
        Context {
            features,
            ids,
            widgets: RefCell::new(Vec::new()),
        }
    }

    pub fn generate_id(&self) -> String {
        self.ids
            .generate()
    }

    /// Register an interactive element so the runtime will respond to it
    /// once the rendered markup is on the page. Custom type handlers call
    /// this for any widgets they emit.
    pub fn wire(&self, widget: Widget) {
        self.widgets
            .borrow_mut()
            .push(widget);
    }

    pub fn into_widgets(self) -> Vec<Widget> {
        self.widgets
            .into_inner()
    }

    /// Code prepared for display: legacy escapes undone, then either
    /// highlighted or plainly escaped.
    pub fn code(&self, code: &str, language: Option<&str>) -> String {
        let code = prepare(code, language);
        if self
            .features
            .syntax_highlight
            && highlight::applies(language)
        {
            highlight(&code)
        } else {
            escape(&code).into_owned()
        }
    }

    /// A complete code block.
    pub fn code_block(&self, code: &str, language: Option<&str>) -> String {
        let class = match language {
            Some(language) => format!(" class=\"language-{}\"", escape(language)),
            None => String::new(),
        };
        format!(
            "<div class=\"code-block\"><pre><code{}>{}</code></pre></div>\n",
            class,
            self.code(code, language)
        )
    }
}
