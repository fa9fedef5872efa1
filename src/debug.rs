//! Buffered debug printer
//!
//! Ad hoc diagnostics only: accumulate printable fragments, then flush one
//! tagged line to stderr. No format stability, not machine-readable, not a
//! substitute for the `log` facade.
//!
//! ```
//! use evocore::debug::DebugPrinter;
//!
//! DebugPrinter::new().push("budget = ").push(42).flush();
//! // stderr: "DEBUG: budget = 42"
//! ```

use std::fmt::{Display, Write};

/// Tag prefixed to every flushed line
const TAG: &str = "DEBUG: ";

/// Accumulates printable values and flushes them as one tagged line.
#[derive(Debug, Default)]
pub struct DebugPrinter {
    buffer: String,
}

impl DebugPrinter {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Append one printable value to the pending message.
    pub fn push(mut self, value: impl Display) -> Self {
        // Writing into a String cannot fail.
        let _ = write!(self.buffer, "{}", value);
        self
    }

    /// Current pending message, without the tag.
    pub fn message(&self) -> &str {
        &self.buffer
    }

    /// Write the tagged message to stderr and discard the printer.
    pub fn flush(self) {
        eprintln!("{}{}", TAG, self.buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_fragments_in_order() {
        let printer = DebugPrinter::new()
            .push("worker ")
            .push(3)
            .push(" remaining=")
            .push(1.5);
        assert_eq!(printer.message(), "worker 3 remaining=1.5");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(DebugPrinter::new().message(), "");
    }

    #[test]
    fn test_flush_consumes() {
        DebugPrinter::new().push("flushed").flush();
    }
}
