//! Error conversion helpers for output operations
//!
//! Provides an extension trait for cleaner error handling with context.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add action context to an output error.
    ///
    /// # Example
    /// ```ignore
    /// outer(greeting, |line| alert.alert(line))
    ///     .with_output_context("run closure chain")?;
    /// ```
    fn with_output_context(self, action: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_output_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Output {
            context: action.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_io_error_when_adding_context_then_keeps_source_kind() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));

        let err = result.with_output_context("write line").unwrap_err();

        assert_eq!(err.to_string(), "output failed: write line: gone");
        match err {
            ApplicationError::Output { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
