// Presentation of load, parse, and topic validation failures on the terminal

mod format;

pub use format::*;
