//! Page-level fragments: the section heading, the sidebar panel, and the
//! previous/next navigation links.

use super::{escape, Context};
use crate::content::{prepare, Link, Navigation, Section, Sidebar, SidebarExample};
use crate::runtime::{ExampleRunner, Widget};

/// Text for the title slot: icon and title separated by a space.
pub fn heading(section: &Section) -> String {
    let icon = section
        .icon
        .as_deref()
        .unwrap_or("");
    format!("{} {}", icon, section.title)
        .trim()
        .to_string()
}

/// Render the sidebar panel, returning the class for the panel element
/// along with its inner markup.
pub fn render_sidebar(context: &Context, sidebar: &Sidebar, sticky: bool) -> (String, String) {
    let class = if sticky {
        "sidebar-panel sidebar-sticky"
    } else {
        "sidebar-panel"
    };

    let mut output = format!(
        "<div class=\"sidebar-header\">\n<h3>{} {}</h3>\n</div>\n<div class=\"sidebar-examples\">\n",
        escape(
            sidebar
                .icon
                .as_deref()
                .unwrap_or("📋")
        ),
        escape(&sidebar.title)
    );
    for (index, example) in sidebar
        .examples
        .iter()
        .enumerate()
    {
        output.push_str(&render_example(context, example, index));
    }
    output.push_str("</div>\n");

    (class.to_string(), output)
}

fn render_example(context: &Context, example: &SidebarExample, index: usize) -> String {
    let id = format!("sidebar-ex-{}", index);
    let language = example
        .language
        .as_deref()
        .unwrap_or("javascript");

    let mut output = format!(
        "<div class=\"example-card\" data-example-id=\"{}\">\n<div class=\"example-header\">\n<h4>{}</h4>\n",
        id,
        escape(&example.title)
    );
    if let Some(description) = &example.description {
        output.push_str(&format!(
            "<p class=\"example-desc\">{}</p>\n",
            escape(description)
        ));
    }
    output.push_str(&format!(
        "</div>\n<div class=\"code-block dark-theme\"><pre><code class=\"language-{}\">{}</code></pre></div>\n",
        escape(language),
        context.code(&example.code, Some(language))
    ));

    if example.runnable
        && context
            .features
            .code_runner
    {
        let frame = if context
            .features
            .trusted_examples
        {
            ""
        } else {
            "<iframe class=\"example-frame\" sandbox=\"allow-scripts\"></iframe>"
        };
        output.push_str(&format!(
            "<button class=\"btn-run\" data-target=\"{}\">▶ Run code</button>\n<div class=\"output-panel\" id=\"{}-output\">{}</div>\n",
            id, id, frame
        ));
        context.wire(Widget::Example(ExampleRunner::new(
            id,
            prepare(&example.code, Some(language)).into_owned(),
        )));
    }

    output.push_str("</div>\n");
    output
}

fn link(link: &Link, class: &str, label: &str) -> String {
    let text = format!(
        "<span class=\"nav-text\">\n<span class=\"nav-label\">{}</span>\n<span class=\"nav-title\">{}</span>\n</span>",
        label,
        escape(&link.title)
    );
    let (before, after) = match class {
        "prev-button" => ("<span class=\"nav-arrow\">←</span>\n", String::new()),
        _ => ("", "\n<span class=\"nav-arrow\">→</span>".to_string()),
    };
    format!(
        "<a href=\"{}\" class=\"nav-button {}\">\n{}{}{}\n</a>\n",
        escape(&link.url),
        class,
        before,
        text,
        after
    )
}

pub fn render_navigation(navigation: &Navigation) -> String {
    let mut output = String::from("<div class=\"navigation\">\n");
    match &navigation.prev {
        Some(prev) => output.push_str(&link(prev, "prev-button", "Previous")),
        // keeps "next" on the right
        None => output.push_str("<div></div>\n"),
    }
    if let Some(next) = &navigation.next {
        output.push_str(&link(next, "next-button", "Next"));
    }
    output.push_str("</div>\n");
    output
}
