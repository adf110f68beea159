use std::{fmt, path::Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

impl<'i> fmt::Display for LoadingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

/// A content document that was readable but not valid. Line and column are
/// one-origin, as reported by the JSON parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
    pub line: usize,
    pub column: usize,
}

impl<'i> ParsingError<'i> {
    pub fn from_json(filename: &'i Path, error: &serde_json::Error) -> Self {
        let problem = match error.classify() {
            serde_json::error::Category::Io => "Failed reading",
            serde_json::error::Category::Syntax => "Invalid JSON",
            serde_json::error::Category::Data => "Unexpected document structure",
            serde_json::error::Category::Eof => "Document ended unexpectedly",
        };

        // serde_json appends " at line L column C" to its messages; the
        // location is carried separately.
        let message = error.to_string();
        let details = match message.rfind(" at line ") {
            Some(i) => &message[..i],
            None => &message,
        };

        ParsingError {
            problem: problem.to_string(),
            details: details.to_string(),
            filename,
            line: error.line(),
            column: error.column(),
        }
    }
}

impl<'i> fmt::Display for ParsingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error: {}:{}:{} {}",
            self.filename
                .to_string_lossy(),
            self.line,
            self.column,
            self.problem
        )
    }
}
