//! Loading and parsing content documents

use std::path::Path;
use tracing::debug;

mod error;
mod prepare;
mod types;
mod variants;

// Re-export all public symbols
pub use error::*;
pub use prepare::prepare;
pub use types::*;
pub use variants::*;

/// Read a file and return an owned String. The caller keeps ownership of the
/// text so that errors from parse() below can be shown against it.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse JSON text into a ContentDocument, or return where it went wrong.
pub fn parse<'i>(filename: &'i Path, content: &str) -> Result<ContentDocument, ParsingError<'i>> {
    match serde_json::from_str::<ContentDocument>(content) {
        Ok(document) => {
            let count = document
                .topics
                .len();
            debug!("Found {} topic{}", count, if count == 1 { "" } else { "s" });
            if let Some(sidebar) = &document.sidebar {
                debug!(
                    "Found sidebar with {} example{}",
                    sidebar
                        .examples
                        .len(),
                    if sidebar
                        .examples
                        .len()
                        == 1
                    {
                        ""
                    } else {
                        "s"
                    }
                );
            }
            Ok(document)
        }
        Err(error) => {
            debug!(?error);
            Err(ParsingError::from_json(filename, &error))
        }
    }
}
