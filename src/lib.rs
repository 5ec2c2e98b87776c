//! scopechain: nested closures sharing enclosing bindings
//!
//! The binary prints four lines composed by three nested units. The
//! library exposes the same chain so it can be driven through any
//! [`infrastructure::traits::Alert`] implementation.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{lines, outer, Greeting};
