//! Answer text processing: sanitization, formatting, greeting detection.

mod formatter;
mod greeting;
mod sanitizer;

pub use formatter::friendly_answer;
pub use greeting::is_opening_greeting;
pub use sanitizer::sanitize;
