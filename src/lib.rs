//! Render educational content documents (concepts, code examples, quizzes,
//! live-code sandboxes, tabs, …) into interactive HTML pages.

pub mod content;
pub mod dom;
pub mod engine;
pub mod rendering;
pub mod runtime;
