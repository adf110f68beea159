//! Normalise code strings from content documents before display.
//!
//! Older content was authored inside template literals, so interpolation
//! sigils had to be escaped (`\${name}`, `\$HOME`). Those escapes are
//! reversed here according to the declared language. JSON is re-indented
//! when it is valid.

use std::borrow::Cow;

pub fn prepare<'a>(code: &'a str, language: Option<&str>) -> Cow<'a, str> {
    let language = match language {
        Some(language) => language.to_ascii_lowercase(),
        None => return Cow::Borrowed(code),
    };

    match language.as_str() {
        "javascript" | "js" | "typescript" | "ts" | "yaml" | "yml" => {
            unescape(code, |next| next == '{')
        }
        "bash" | "shell" | "sh" => unescape(code, |next| {
            next == '{' || next == '_' || next.is_ascii_uppercase()
        }),
        "json" => match serde_json::from_str::<serde_json::Value>(code) {
            Ok(value) => match serde_json::to_string_pretty(&value) {
                Ok(pretty) => Cow::Owned(pretty),
                Err(_) => Cow::Borrowed(code),
            },
            Err(_) => Cow::Borrowed(code),
        },
        _ => Cow::Borrowed(code),
    }
}

/// Drop the backslash from every `\$` whose following character satisfies
/// the predicate.
fn unescape<'a>(code: &'a str, follows: impl Fn(char) -> bool) -> Cow<'a, str> {
    if !code.contains("\\$") {
        return Cow::Borrowed(code);
    }

    let mut result = String::with_capacity(code.len());
    let mut chars = code
        .chars()
        .peekable();

    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&'$') {
            let mut ahead = chars.clone();
            ahead.next();
            match ahead.peek() {
                Some(&next) if follows(next) => continue,
                _ => {}
            }
        }
        result.push(c);
    }

    Cow::Owned(result)
}
