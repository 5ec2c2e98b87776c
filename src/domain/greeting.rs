//! The immutable value threaded through the closure chain

use std::fmt;

/// Process-wide value printed at every nesting level.
pub const DEFAULT_WELCOME: &str = "Welcome";
/// Value bound locally by the outermost unit.
pub const DEFAULT_COURSE: &str = "Holberton";
/// Punctuation bound locally by the middle unit.
pub const DEFAULT_EXCLAMATION: &str = "!";

/// Values for one run of the chain.
///
/// Only `welcome` is visible from the start; `course` and `exclamation` are
/// bound by the units that own them when those units begin executing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub welcome: String,
    pub course: String,
    pub exclamation: String,
}

impl Greeting {
    pub fn new(
        welcome: impl Into<String>,
        course: impl Into<String>,
        exclamation: impl Into<String>,
    ) -> Self {
        Self {
            welcome: welcome.into(),
            course: course.into(),
            exclamation: exclamation.into(),
        }
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new(DEFAULT_WELCOME, DEFAULT_COURSE, DEFAULT_EXCLAMATION)
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "welcome={:?} course={:?} exclamation={:?}",
            self.welcome, self.course, self.exclamation
        )
    }
}
