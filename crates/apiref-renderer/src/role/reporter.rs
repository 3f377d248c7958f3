//! Diagnostic reporting for role processing.

use std::fmt;
use std::path::PathBuf;

/// An error-level diagnostic tied to a source line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemMessage {
    /// Line the message refers to (1-indexed).
    pub line: usize,
    pub message: String,
    /// Document the message refers to (if known).
    pub source: Option<PathBuf>,
}

impl fmt::Display for SystemMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(
                f,
                "{}:{}: (ERROR) {}",
                source.display(),
                self.line,
                self.message
            ),
            None => write!(f, "line {}: (ERROR) {}", self.line, self.message),
        }
    }
}

/// Collects system messages for one document.
#[derive(Debug, Default)]
pub struct Reporter {
    source: Option<PathBuf>,
    messages: Vec<SystemMessage>,
}

impl Reporter {
    #[must_use]
    pub fn new(source: Option<PathBuf>) -> Self {
        Self {
            source,
            messages: Vec::new(),
        }
    }

    /// Record an error at `line`.
    ///
    /// Messages are also logged at debug level; presenting them to the user
    /// is left to whoever takes them.
    pub fn error(&mut self, line: usize, message: impl Into<String>) -> &SystemMessage {
        let message = message.into();
        let source = self.source.as_ref().map(|p| p.display());
        tracing::debug!(source = ?source, line, "{message}");

        let index = self.messages.len();
        self.messages.push(SystemMessage {
            line,
            message,
            source: self.source.clone(),
        });
        &self.messages[index]
    }

    #[must_use]
    pub fn messages(&self) -> &[SystemMessage] {
        &self.messages
    }

    /// Take all collected messages, leaving the reporter empty.
    pub fn take(&mut self) -> Vec<SystemMessage> {
        std::mem::take(&mut self.messages)
    }
}
