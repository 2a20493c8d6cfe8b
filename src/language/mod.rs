mod extension;
mod registry;

pub use extension::{NO_EXTENSION, extension_of};
pub use registry::{CommentStyle, LanguageRegistry};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
