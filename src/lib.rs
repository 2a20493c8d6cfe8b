pub mod cli;
pub mod counter;
pub mod error;
pub mod git;
pub mod language;
pub mod output;
pub mod report;
pub mod scanner;

pub use error::{LocTallyError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
mod test_fixtures;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
