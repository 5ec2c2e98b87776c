//! Domain layer: the greeting value and the closure chain
//!
//! This layer is independent of external concerns (no stdout, no CLI, no config loading).

pub mod greeting;
pub mod scope;

pub use greeting::{Greeting, DEFAULT_COURSE, DEFAULT_EXCLAMATION, DEFAULT_WELCOME};
pub use scope::{lines, outer};
