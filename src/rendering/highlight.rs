//! Lightweight highlighting for JavaScript-like code blocks.

use super::escape;

static KEYWORDS: &[&str] = &[
    "const",
    "let",
    "var",
    "function",
    "return",
    "if",
    "else",
    "for",
    "while",
    "do",
    "switch",
    "case",
    "break",
    "continue",
    "class",
    "extends",
    "constructor",
    "new",
    "this",
    "super",
    "async",
    "await",
    "try",
    "catch",
    "finally",
    "throw",
    "import",
    "export",
    "default",
    "from",
    "typeof",
    "instanceof",
];

/// Whether code in this language gets highlighted. Code with no declared
/// language is assumed to be JavaScript.
pub(crate) fn applies(language: Option<&str>) -> bool {
    match language {
        None => true,
        Some(language) => matches!(
            language
                .to_ascii_lowercase()
                .as_str(),
            "javascript" | "js" | "typescript" | "ts" | "jsx" | "tsx"
        ),
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn span(output: &mut String, class: &str, text: &str) {
    output.push_str("<span class=\"");
    output.push_str(class);
    output.push_str("\">");
    output.push_str(&escape(text));
    output.push_str("</span>");
}

/// Tokenise into keywords, strings, comments and numbers, wrapping each in
/// a span. Everything, marked up or not, comes out escaped.
pub fn highlight(code: &str) -> String {
    let mut output = String::with_capacity(code.len() * 2);
    let chars: Vec<(usize, char)> = code
        .char_indices()
        .collect();
    let end = code.len();
    let offset = |i: usize| {
        chars
            .get(i)
            .map(|&(o, _)| o)
            .unwrap_or(end)
    };

    let mut i = 0;
    while i < chars.len() {
        let (start, c) = chars[i];
        let next = chars
            .get(i + 1)
            .map(|&(_, c)| c);

        if c == '/' && next == Some('/') {
            let mut j = i;
            while j < chars.len() && chars[j].1 != '\n' {
                j += 1;
            }
            span(&mut output, "comment", &code[start..offset(j)]);
            i = j;
        } else if c == '/' && next == Some('*') {
            let mut j = i + 2;
            while j < chars.len() && !(chars[j].1 == '*' && chars.get(j + 1).map(|&(_, c)| c) == Some('/')) {
                j += 1;
            }
            j = (j + 2).min(chars.len());
            span(&mut output, "comment", &code[start..offset(j)]);
            i = j;
        } else if c == '"' || c == '\'' || c == '`' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].1 != c {
                if chars[j].1 == '\\' {
                    j += 1;
                }
                if c != '`' && j < chars.len() && chars[j].1 == '\n' {
                    break;
                }
                j += 1;
            }
            j = (j + 1).min(chars.len());
            span(&mut output, "string", &code[start..offset(j)]);
            i = j;
        } else if is_word(c) {
            let mut j = i;
            while j < chars.len() && is_word(chars[j].1) {
                j += 1;
            }
            let word = &code[start..offset(j)];
            if KEYWORDS.contains(&word) {
                span(&mut output, "keyword", word);
            } else if word
                .chars()
                .all(|c| c.is_ascii_digit())
            {
                span(&mut output, "number", word);
            } else {
                output.push_str(&escape(word));
            }
            i = j;
        } else {
            output.push_str(&escape(&code[start..offset(i + 1)]));
            i += 1;
        }
    }

    output
}
