//! I/O boundary traits for testability
//!
//! The closure chain writes through [`Alert`], allowing services
//! to be tested with in-memory implementations.

use std::io::{self, Write};
use std::sync::Mutex;

/// Line-oriented output channel.
pub trait Alert: Send + Sync {
    /// Emit one line. The implementation appends the line terminator.
    fn alert(&self, message: &str) -> io::Result<()>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Writes each line to stdout and flushes.
#[derive(Debug, Default)]
pub struct StdoutAlert;

impl Alert for StdoutAlert {
    fn alert(&self, message: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", message)?;
        out.flush()
    }
}

/// Writes lines to an arbitrary writer.
#[derive(Debug)]
pub struct WriterAlert<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterAlert<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Take back the writer, e.g. to inspect a `Vec<u8>` buffer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Alert for WriterAlert<W> {
    fn alert(&self, message: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "writer lock poisoned"))?;
        writeln!(writer, "{}", message)?;
        writer.flush()
    }
}

// ============================================================
// IN-MEMORY IMPLEMENTATION
// ============================================================

/// Records lines instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingAlert {
    lines: Mutex<Vec<String>>,
}

impl RecordingAlert {
    /// Copy of everything recorded so far, in emission order.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) -> io::Result<()> {
        self.lines
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "recording lock poisoned"))?
            .push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_writer_alert_when_alerting_then_appends_newline() {
        let alert = WriterAlert::new(Vec::new());

        alert.alert("Welcome").unwrap();
        alert.alert("Welcome Holberton").unwrap();

        let written = String::from_utf8(alert.into_inner()).unwrap();
        assert_eq!(written, "Welcome\nWelcome Holberton\n");
    }

    #[test]
    fn given_recording_alert_when_alerting_then_keeps_order() {
        let alert = RecordingAlert::default();

        alert.alert("a").unwrap();
        alert.alert("b").unwrap();

        assert_eq!(alert.lines(), vec!["a", "b"]);
    }
}
