use lectern::content::{LoadingError, ParsingError, TopicItem};
use owo_colors::OwoColorize;
use std::path::Path;

/// Format a parsing error with full details including source code context
pub fn full_parsing_error(error: &ParsingError, source: &str) -> String {
    let line = error
        .line
        .max(1);
    let column = error
        .column
        .max(1);

    let code = source
        .lines()
        .nth(line - 1)
        .unwrap_or("?");
    let width = 3.max(
        line.to_string()
            .len(),
    );

    format!(
        r#"
{}: {}:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        "error".bright_red(),
        error
            .filename
            .to_string_lossy(),
        line,
        column,
        error
            .problem
            .bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        error.details
    )
    .trim_ascii()
    .to_string()
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error(error: &LoadingError) -> String {
    let details = if error
        .details
        .is_empty()
    {
        String::new()
    } else {
        format!(" ({})", error.details)
    };
    format!(
        "{}: {}: {}{}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold(),
        details
    )
}

/// Format a problem with one topic of an otherwise valid document. Topics
/// are numbered from one, in document order.
pub fn topic_problem(filename: &Path, index: usize, topic: &TopicItem, problem: &str) -> String {
    format!(
        "{}: {}: topic {} \"{}\" {}",
        "error".bright_red(),
        filename.display(),
        index + 1,
        topic.title,
        problem.bold()
    )
}
