mod comment;
mod sloc;

pub use comment::CommentDetector;
pub use sloc::{LineKind, LineStats, SlocCounter};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
