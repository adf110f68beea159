//! Running user code: live-code previews and sidebar examples.

use crate::dom::{Gateway, Lang, Target};
use crate::rendering::escape;

/// Build the document loaded into a live-code preview frame.
pub fn compose(html: &str, css: &str, js: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<style>{}</style>\n</head>\n<body>\n{}\n<script>{}</script>\n</body>\n</html>\n",
        css.replace("</style", "<\\/style"),
        html,
        js.replace("</script", "<\\/script")
    )
}

static EXAMPLE: &str = r#"<!DOCTYPE html>
<html>
<body>
<div id="output"></div>
<script>
(function () {
    var logs = [];
    var escape = function (text) {
        return String(text).replace(/[&<>"']/g, function (c) {
            return { "&": "&amp;", "<": "&lt;", ">": "&gt;", "\"": "&quot;", "'": "&#039;" }[c];
        });
    };
    console.log = function () {
        logs.push(Array.prototype.map.call(arguments, function (arg) {
            return typeof arg === "object" ? JSON.stringify(arg, null, 2) : String(arg);
        }).join(" "));
    };
    var output = document.getElementById("output");
    try {
        (0, eval)(__CODE__);
        output.innerHTML = logs.length > 0
            ? '<div class="output-success"><strong>Output:</strong><pre>' + escape(logs.join("\n")) + '</pre></div>'
            : '<div class="output-info">Ran successfully with no output</div>';
    } catch (error) {
        output.innerHTML = '<div class="output-error"><strong>Error:</strong><pre>' + escape(error.message) + '</pre></div>';
    }
})();
</script>
</body>
</html>
"#;

/// Build the document loaded into a sidebar example's sandboxed frame. The
/// code travels as a JSON string literal, so it cannot break out of the
/// script element.
pub fn example_document(code: &str) -> String {
    let literal = serde_json::to_string(code)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/");
    EXAMPLE.replace("__CODE__", &literal)
}

pub fn success_panel(lines: &[String]) -> String {
    format!(
        "<div class=\"output-success\"><strong>Output:</strong><pre>{}</pre></div>",
        escape(&lines.join("\n"))
    )
}

pub fn info_panel() -> String {
    "<div class=\"output-info\">Ran successfully with no output</div>".to_string()
}

pub fn error_panel(message: &str) -> String {
    format!(
        "<div class=\"output-error\"><strong>Error:</strong><pre>{}</pre></div>",
        escape(message)
    )
}

/// A live-code topic: its editors and the preview frame they feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sandbox {
    topic: String,
    editors: Vec<(Lang, String)>,
    autorun: bool,
}

impl Sandbox {
    /// `editors` holds the initial code of each editor that was rendered.
    pub fn new(topic: String, editors: Vec<(Lang, String)>, autorun: bool) -> Self {
        Sandbox {
            topic,
            editors,
            autorun,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn autorun(&self) -> bool {
        self.autorun
    }

    /// Current contents of an editor: whatever the user typed, else the
    /// code it was rendered with, else nothing.
    fn source(&self, gateway: &dyn Gateway, lang: Lang) -> String {
        let target = Target::Editor {
            topic: self
                .topic
                .clone(),
            lang,
        };
        gateway
            .value(&target)
            .or_else(|| {
                self.editors
                    .iter()
                    .find(|(l, _)| *l == lang)
                    .map(|(_, code)| code.clone())
            })
            .unwrap_or_default()
    }

    pub fn run(&self, gateway: &mut dyn Gateway) {
        let document = compose(
            &self.source(gateway, Lang::Html),
            &self.source(gateway, Lang::Css),
            &self.source(gateway, Lang::Js),
        );
        gateway.write_frame(
            &Target::PreviewFrame {
                topic: self
                    .topic
                    .clone(),
            },
            &document,
        );
    }
}

/// A runnable sidebar example.
#[derive(Debug, Clone, PartialEq)]
pub struct ExampleRunner {
    id: String,
    code: String,
}

impl ExampleRunner {
    pub fn new(id: String, code: String) -> Self {
        ExampleRunner { id, code }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Untrusted code runs inside the example's sandboxed frame, which
    /// renders its own output. Trusted code is handed to the host page.
    pub fn run(&self, gateway: &mut dyn Gateway, trusted: bool) {
        if !trusted {
            gateway.write_frame(
                &Target::ExampleFrame {
                    example: self
                        .id
                        .clone(),
                },
                &example_document(&self.code),
            );
            return;
        }

        let panel = match gateway.evaluate(&self.code) {
            Ok(lines) if lines.is_empty() => info_panel(),
            Ok(lines) => success_panel(&lines),
            Err(message) => error_panel(&message),
        };
        gateway.set_inner_html(
            &Target::ExampleOutput {
                example: self
                    .id
                    .clone(),
            },
            &panel,
        );
    }
}
