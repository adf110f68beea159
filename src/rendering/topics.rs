//! Render functions for the built-in topic variants.

use serde::de::DeserializeOwned;
use tracing::warn;

use super::{escape, quiz, Context, Variant};
use crate::content::*;
use crate::dom::{CodePanel as Panel, Lang};
use crate::runtime::{CodeTabs, DemoControl, DemoWidget, Sandbox, TabGroup, Widget};

/// Render a topic as one of the built-in variants. If the topic's content
/// doesn't have the shape that variant needs, a placeholder block naming
/// the problem is rendered instead.
pub fn render_variant(context: &Context, variant: Variant, topic: &TopicItem) -> String {
    match variant {
        Variant::Concept => decode(topic, variant, |c| concept(topic, &c)),
        Variant::CodeExample => decode(topic, variant, |c| code_example(context, topic, &c)),
        Variant::Principle => decode(topic, variant, |c| principle(topic, &c)),
        Variant::Comparison => decode(topic, variant, |c| comparison(topic, &c)),
        Variant::BestPractice => decode(topic, variant, |c| best_practice(context, topic, &c)),
        Variant::Checklist => decode(topic, variant, |c| checklist(topic, &c)),
        Variant::LiveCode => decode(topic, variant, |c| live_code(context, topic, &c)),
        Variant::Playground => decode(topic, variant, |c| playground(topic, &c)),
        Variant::SplitView => decode(topic, variant, |c| split_view(topic, &c)),
        Variant::TabContent => decode(topic, variant, |c| tab_content(context, topic, &c)),
        Variant::VisualDemo => decode(topic, variant, |c| visual_demo(context, topic, &c)),
        Variant::ColorPalette => decode(topic, variant, |c| color_palette(context, topic, &c)),
        Variant::ComponentDemo => decode(topic, variant, |c| component_demo(context, topic, &c)),
        Variant::PropsTable => decode(topic, variant, |c| props_table(topic, &c)),
        Variant::Quiz => decode(topic, variant, |c| quiz::single(context, topic, &c)),
        Variant::QuizMulti => decode(topic, variant, |c| quiz::multi(context, topic, &c)),
        Variant::QuizBool => decode(topic, variant, |c| quiz::boolean(context, topic, &c)),
        Variant::QuizCode => decode(topic, variant, |c| quiz::code(context, topic, &c)),
    }
}

/// Check that a topic's content has the shape its variant needs, without
/// rendering it.
pub fn validate(variant: Variant, topic: &TopicItem) -> Result<(), serde_json::Error> {
    match variant {
        Variant::Concept => topic.decode::<Concept>().map(drop),
        Variant::CodeExample => topic.decode::<CodeExample>().map(drop),
        Variant::Principle => topic.decode::<Principle>().map(drop),
        Variant::Comparison => topic.decode::<Comparison>().map(drop),
        Variant::BestPractice => topic.decode::<BestPractice>().map(drop),
        Variant::Checklist => topic.decode::<Checklist>().map(drop),
        Variant::LiveCode => topic.decode::<LiveCode>().map(drop),
        Variant::Playground => topic.decode::<Playground>().map(drop),
        Variant::SplitView => topic.decode::<SplitView>().map(drop),
        Variant::TabContent => topic.decode::<TabContent>().map(drop),
        Variant::VisualDemo => topic.decode::<VisualDemo>().map(drop),
        Variant::ColorPalette => topic.decode::<ColorPalette>().map(drop),
        Variant::ComponentDemo => topic.decode::<ComponentDemo>().map(drop),
        Variant::PropsTable => topic.decode::<PropsTable>().map(drop),
        Variant::Quiz => topic.decode::<Quiz>().map(drop),
        Variant::QuizMulti => topic.decode::<QuizMulti>().map(drop),
        Variant::QuizBool => topic.decode::<QuizBool>().map(drop),
        Variant::QuizCode => topic.decode::<QuizCode>().map(drop),
    }
}

fn decode<T: DeserializeOwned>(
    topic: &TopicItem,
    variant: Variant,
    render: impl FnOnce(T) -> String,
) -> String {
    match topic.decode::<T>() {
        Ok(content) => render(content),
        Err(error) => {
            warn!("Content of '{}' doesn't fit {}: {}", topic.title, variant, error);
            render_malformed(topic, &error.to_string())
        }
    }
}

/// Fallback for a type tag nothing is registered for.
pub fn render_unknown(topic: &TopicItem) -> String {
    format!(
        "<div class=\"topic-section unknown-topic\"{}>\n<h2 class=\"topic-title\">{}</h2>\n<p>Unknown type: {}</p>\n</div>\n",
        anchor(topic),
        escape(&topic.title),
        escape(&topic.kind)
    )
}

pub fn render_malformed(topic: &TopicItem, problem: &str) -> String {
    format!(
        "<div class=\"topic-section malformed-topic\"{}>\n<h2 class=\"topic-title\">{}</h2>\n<p>Unable to display {} content: {}</p>\n</div>\n",
        anchor(topic),
        escape(&topic.title),
        escape(&topic.kind),
        escape(problem)
    )
}

/// An id attribute so that topics can be linked to, when the content
/// supplies one.
pub(super) fn anchor(topic: &TopicItem) -> String {
    match &topic.id {
        Some(id) => format!(" id=\"{}\"", escape(id)),
        None => String::new(),
    }
}

pub(super) fn open(topic: &TopicItem, class: &str, icon: &str) -> String {
    let icon = if icon.is_empty() {
        String::new()
    } else {
        format!("{} ", icon)
    };
    format!(
        "<div class=\"topic-section {}\"{}>\n<h2 class=\"topic-title\">{}{}</h2>\n",
        class,
        anchor(topic),
        icon,
        escape(&topic.title)
    )
}

fn description(text: &str) -> String {
    format!("<p class=\"description\">{}</p>\n", escape(text))
}

pub(super) fn list(items: &[String]) -> String {
    let mut output = String::from("<ul>\n");
    for item in items {
        output.push_str("<li>");
        output.push_str(&escape(item));
        output.push_str("</li>\n");
    }
    output.push_str("</ul>\n");
    output
}

fn key_points(points: &Option<Vec<String>>) -> String {
    match points {
        Some(points) => format!(
            "<div class=\"key-points\">\n<h3>Key points</h3>\n{}</div>\n",
            list(points)
        ),
        None => String::new(),
    }
}

fn present(text: &Option<String>) -> Option<&str> {
    text.as_deref()
        .filter(|text| !text.is_empty())
}

fn concept(topic: &TopicItem, content: &Concept) -> String {
    let mut output = open(topic, "concept-section", "");
    output.push_str("<div class=\"concept-content\">\n");
    output.push_str(&description(&content.description));
    output.push_str(&key_points(&content.key_points));
    if let Some(mdn) = present(&content.mdn) {
        output.push_str(&format!(
            "<div class=\"mdn-link\">\n<a href=\"{}\" target=\"_blank\" rel=\"noopener\">📖 MDN documentation</a>\n</div>\n",
            escape(mdn)
        ));
    }
    output.push_str("</div>\n</div>\n");
    output
}

fn code_example(context: &Context, topic: &TopicItem, content: &CodeExample) -> String {
    let mut output = open(topic, "code-section", "");
    output.push_str(&description(&content.description));
    for example in &content.examples {
        output.push_str("<div class=\"example-block\">\n");
        output.push_str(&format!(
            "<h3 class=\"example-title\">{}</h3>\n",
            escape(&example.title)
        ));
        output.push_str(&context.code_block(
            &example.code,
            example
                .language
                .as_deref(),
        ));
        if let Some(result) = present(&example.result) {
            output.push_str(&format!(
                "<div class=\"result-box\"><strong>Result: </strong>{}</div>\n",
                escape(result)
            ));
        }
        if let Some(notes) = present(&example.notes) {
            output.push_str(&format!(
                "<div class=\"notes-box\"><strong>Notes: </strong>{}</div>\n",
                escape(notes)
            ));
        }
        output.push_str("</div>\n");
    }
    output.push_str("</div>\n");
    output
}

fn principle(topic: &TopicItem, content: &Principle) -> String {
    let mut output = open(topic, "principle-section", "");
    output.push_str(&description(&content.description));
    if let Some(mechanism) = present(&content.mechanism) {
        output.push_str(&format!(
            "<div class=\"mechanism-box\">\n<h3>How it works</h3>\n<p>{}</p>\n</div>\n",
            escape(mechanism)
        ));
    }
    output.push_str(&key_points(&content.key_points));
    output.push_str("</div>\n");
    output
}

fn comparison(topic: &TopicItem, content: &Comparison) -> String {
    let mut output = open(topic, "comparison-section", "");
    output.push_str(&description(&content.description));
    output.push_str("<div class=\"comparison-grid\">\n");
    for item in &content.items {
        output.push_str("<div class=\"comparison-item\">\n");
        output.push_str(&format!(
            "<h3 class=\"item-name\">{}</h3>\n",
            escape(&item.name)
        ));
        if let Some(pros) = &item.pros {
            output.push_str(&format!(
                "<div class=\"pros\">\n<h4>✅ Advantages</h4>\n{}</div>\n",
                list(pros)
            ));
        }
        if let Some(cons) = &item.cons {
            output.push_str(&format!(
                "<div class=\"cons\">\n<h4>❌ Drawbacks</h4>\n{}</div>\n",
                list(cons)
            ));
        }
        output.push_str("</div>\n");
    }
    output.push_str("</div>\n</div>\n");
    output
}

fn best_practice(context: &Context, topic: &TopicItem, content: &BestPractice) -> String {
    let mut output = open(topic, "best-practice-section", "💡");
    output.push_str(&description(&content.description));
    if let Some(practices) = &content.practices {
        output.push_str("<div class=\"practices-list\">\n");
        for (i, practice) in practices
            .iter()
            .enumerate()
        {
            output.push_str(&format!(
                "<div class=\"practice-item\">\n<h3>{}. {}</h3>\n<p>{}</p>\n",
                i + 1,
                escape(&practice.title),
                escape(&practice.description)
            ));
            if let Some(example) = present(&practice.example) {
                output.push_str(&context.code_block(
                    example,
                    practice
                        .language
                        .as_deref(),
                ));
            }
            output.push_str("</div>\n");
        }
        output.push_str("</div>\n");
    }
    output.push_str("</div>\n");
    output
}

fn checklist(topic: &TopicItem, content: &Checklist) -> String {
    let mut output = open(topic, "checklist-section", "✓");
    output.push_str(&description(&content.description));
    if let Some(items) = &content.items {
        output.push_str("<div class=\"checklist\">\n");
        for item in items {
            let id = item
                .id
                .as_deref()
                .unwrap_or("");
            output.push_str(&format!(
                "<div class=\"checklist-item\">\n<input type=\"checkbox\" id=\"{}\">\n<label for=\"{}\">{}</label>\n</div>\n",
                escape(id),
                escape(id),
                escape(&item.text)
            ));
        }
        output.push_str("</div>\n");
    }
    output.push_str("</div>\n");
    output
}

fn live_code(context: &Context, topic: &TopicItem, content: &LiveCode) -> String {
    let id = context.generate_id();

    let editors: Vec<(Lang, String)> = [
        (Lang::Html, &content.html),
        (Lang::Css, &content.css),
        (Lang::Js, &content.js),
    ]
    .into_iter()
    .filter_map(|(lang, code)| present(code).map(|code| (lang, code.to_string())))
    .collect();

    let mut output = format!(
        "<div class=\"topic-section live-code-section\"{} data-topic-id=\"{}\">\n<h2 class=\"topic-title\">⚡ {}</h2>\n",
        anchor(topic),
        id,
        escape(&topic.title)
    );
    output.push_str(&description(&content.description));
    output.push_str("<div class=\"live-code-container\">\n<div class=\"code-editors\">\n");
    for (lang, code) in &editors {
        output.push_str(&format!(
            "<div class=\"editor-panel\">\n<div class=\"editor-header\">{}</div>\n<textarea class=\"code-editor\" data-lang=\"{}\"{}>{}</textarea>\n</div>\n",
            lang.label(),
            lang.as_str(),
            if content.editable { "" } else { " readonly" },
            escape(code)
        ));
    }
    output.push_str("</div>\n");

    if context
        .features
        .live_preview
    {
        output.push_str(&format!(
            "<div class=\"preview-panel\">\n<div class=\"preview-header\">\n<span>Preview</span>\n<button class=\"btn-run\" data-target=\"{}\">▶ Run</button>\n</div>\n<iframe class=\"preview-frame\" sandbox=\"allow-scripts\"></iframe>\n</div>\n",
            id
        ));
        context.wire(Widget::LiveCode(Sandbox::new(id, editors, content.autorun)));
    }

    output.push_str("</div>\n</div>\n");
    output
}

fn playground(topic: &TopicItem, content: &Playground) -> String {
    let mut output = open(topic, "playground-section", "🎮");
    if let Some(text) = present(&content.description) {
        output.push_str(&description(text));
    }
    output.push_str(
        "<div class=\"playground-notice\">\n<p>Embedded code editor: integrate Monaco Editor or CodeMirror here.</p>\n</div>\n",
    );
    output.push_str("</div>\n");
    output
}

fn pane(pane: &Pane) -> String {
    let body = match (present(&pane.code), &pane.html) {
        (Some(code), _) => format!("<pre><code>{}</code></pre>", escape(code)),
        (None, Some(html)) => html.clone(),
        (None, None) => String::new(),
    };
    format!(
        "<div class=\"split-pane\">\n<div class=\"pane-header\">{}</div>\n<div class=\"pane-content\">\n{}\n</div>\n</div>\n",
        escape(&pane.title),
        body
    )
}

fn split_view(topic: &TopicItem, content: &SplitView) -> String {
    let mut output = open(topic, "split-view-section", "⚡");
    output.push_str(&description(&content.description));
    output.push_str("<div class=\"split-container\">\n");
    output.push_str(&pane(&content.left));
    output.push_str(&pane(&content.right));
    output.push_str("</div>\n</div>\n");
    output
}

fn tab_content(context: &Context, topic: &TopicItem, content: &TabContent) -> String {
    let id = context.generate_id();

    let mut output = open(topic, "tab-section", "");
    output.push_str(&format!(
        "<div class=\"tab-container\" data-tab-group=\"{}\">\n<div class=\"tab-headers\">\n",
        id
    ));
    for (i, tab) in content
        .tabs
        .iter()
        .enumerate()
    {
        let icon = match &tab.icon {
            Some(icon) => format!("{} ", escape(icon)),
            None => String::new(),
        };
        output.push_str(&format!(
            "<button class=\"tab-header{}\" data-tab=\"{}-{}\">{}{}</button>\n",
            if i == 0 { " active" } else { "" },
            id,
            i,
            icon,
            escape(&tab.title)
        ));
    }
    output.push_str("</div>\n<div class=\"tab-contents\">\n");
    for (i, tab) in content
        .tabs
        .iter()
        .enumerate()
    {
        // tab bodies are authored markup
        let body = tab
            .content
            .as_deref()
            .or(tab
                .html
                .as_deref())
            .unwrap_or("");
        output.push_str(&format!(
            "<div class=\"tab-content{}\" data-tab=\"{}-{}\">\n{}\n</div>\n",
            if i == 0 { " active" } else { "" },
            id,
            i,
            body
        ));
    }
    output.push_str("</div>\n</div>\n</div>\n");

    if !content
        .tabs
        .is_empty()
    {
        context.wire(Widget::Tabs(TabGroup::new(
            id,
            content
                .tabs
                .len(),
        )));
    }

    output
}

fn control_input(control: &Control, demo: &str) -> String {
    let value = scalar(&control.value);
    let data = format!(
        "data-demo=\"{}\" data-prop=\"{}\"",
        demo,
        escape(&control.property)
    );
    match control.kind {
        ControlKind::Slider => format!(
            "<input type=\"range\" min=\"{}\" max=\"{}\" value=\"{}\" {}>",
            escape(&scalar(&control.min)),
            escape(&scalar(&control.max)),
            escape(&value),
            data
        ),
        ControlKind::Color => format!(
            "<input type=\"color\" value=\"{}\" {}>",
            escape(&value),
            data
        ),
        ControlKind::Select => {
            let mut output = format!("<select {}>\n", data);
            for option in &control.options {
                let option_value = scalar(&option.value);
                output.push_str(&format!(
                    "<option value=\"{}\"{}>{}</option>\n",
                    escape(&option_value),
                    if option_value == value { " selected" } else { "" },
                    escape(&option.label)
                ));
            }
            output.push_str("</select>");
            output
        }
        ControlKind::Unknown => String::new(),
    }
}

fn visual_demo(context: &Context, topic: &TopicItem, content: &VisualDemo) -> String {
    let id = context.generate_id();

    let mut output = open(topic, "visual-demo-section", "🎨");
    output.push_str(&description(&content.description));
    output.push_str("<div class=\"visual-demo-wrapper\">\n");

    let mut controls = Vec::new();
    if let Some(list) = &content.controls {
        output.push_str("<div class=\"demo-controls\">\n");
        for control in list {
            let unit = control
                .unit
                .clone()
                .unwrap_or_default();
            output.push_str(&format!(
                "<div class=\"control-group\">\n<label>{}</label>\n{}\n<span class=\"control-value\" id=\"value-{}-{}\">{}{}</span>\n</div>\n",
                escape(&control.label),
                control_input(control, &id),
                id,
                escape(&control.property),
                escape(&scalar(&control.value)),
                escape(&unit)
            ));
            if control.kind != ControlKind::Unknown {
                controls.push(DemoControl {
                    property: control
                        .property
                        .clone(),
                    unit,
                });
            }
        }
        output.push_str("</div>\n");
    }

    output.push_str(&format!(
        "<div class=\"demo-preview\" id=\"demo-{}\">\n{}\n</div>\n",
        id,
        content
            .demo_html
            .as_deref()
            .unwrap_or("")
    ));
    output.push_str("</div>\n</div>\n");

    if !controls.is_empty() {
        context.wire(Widget::Demo(DemoWidget::new(id, controls)));
    }

    output
}

fn color_palette(context: &Context, topic: &TopicItem, content: &ColorPalette) -> String {
    let mut output = open(topic, "color-palette-section", "🎨");
    output.push_str(&description(&content.description));
    output.push_str("<div class=\"color-palette-grid\">\n");
    for color in &content.colors {
        let value = escape(&color.value);
        output.push_str(&format!(
            "<div class=\"color-item\" data-color=\"{}\">\n<div class=\"color-swatch\" style=\"background: {}\"></div>\n<div class=\"color-info\">\n<div class=\"color-name\">{}</div>\n<code class=\"color-value\">{}</code>\n</div>\n</div>\n",
            value,
            value,
            escape(&color.name),
            value
        ));
        if context
            .features
            .copy_code
        {
            context.wire(Widget::Swatch(
                color
                    .value
                    .clone(),
            ));
        }
    }
    output.push_str("</div>\n</div>\n");
    output
}

fn component_demo(context: &Context, topic: &TopicItem, content: &ComponentDemo) -> String {
    let id = context.generate_id();

    let panels: Vec<(Panel, &str)> = [
        (Panel::Template, &content.template),
        (Panel::Script, &content.script),
        (Panel::Style, &content.style),
    ]
    .into_iter()
    .filter_map(|(panel, code)| present(code).map(|code| (panel, code)))
    .collect();

    let mut output = open(topic, "component-demo-section", "🧩");
    output.push_str(&description(&content.description));
    if let Some(preview) = present(&content.preview) {
        output.push_str(&format!(
            "<div class=\"component-preview\">\n{}\n</div>\n",
            preview
        ));
    }

    output.push_str(&format!(
        "<div class=\"component-code\" data-demo-id=\"{}\">\n<div class=\"code-tabs\">\n",
        id
    ));
    for (i, (panel, _)) in panels
        .iter()
        .enumerate()
    {
        output.push_str(&format!(
            "<button{} data-code=\"{}\">{}</button>\n",
            if i == 0 { " class=\"active\"" } else { "" },
            panel.as_str(),
            panel.label()
        ));
    }
    output.push_str("</div>\n");
    for (i, (panel, code)) in panels
        .iter()
        .enumerate()
    {
        output.push_str(&format!(
            "<pre class=\"code-panel{}\" data-code=\"{}\"><code>{}</code></pre>\n",
            if i == 0 { " active" } else { "" },
            panel.as_str(),
            escape(code)
        ));
    }
    output.push_str("</div>\n</div>\n");

    if !panels.is_empty() {
        context.wire(Widget::CodeTabs(CodeTabs::new(
            id,
            panels
                .iter()
                .map(|(panel, _)| *panel)
                .collect(),
        )));
    }

    output
}

fn props_table(topic: &TopicItem, content: &PropsTable) -> String {
    let mut output = open(topic, "props-table-section", "📋");
    output.push_str(
        "<div class=\"props-table-wrapper\">\n<table class=\"props-table\">\n<thead>\n<tr><th>Name</th><th>Type</th><th>Default</th><th>Description</th></tr>\n</thead>\n<tbody>\n",
    );
    for prop in &content.props {
        let default = scalar(&prop.default);
        let default = if default.is_empty() {
            "-".to_string()
        } else {
            format!("<code>{}</code>", escape(&default))
        };
        output.push_str(&format!(
            "<tr><td><code>{}</code></td><td><code>{}</code></td><td>{}</td><td>{}</td></tr>\n",
            escape(&prop.name),
            escape(&prop.kind),
            default,
            escape(&prop.description)
        ));
    }
    output.push_str("</tbody>\n</table>\n</div>\n</div>\n");
    output
}
