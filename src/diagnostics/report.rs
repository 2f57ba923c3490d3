use std::fmt;

use serde::{Deserialize, Serialize};

/// A captured callback failure.
///
/// `history` is the console history of the process-wide scope at the moment
/// the failure was caught, oldest line first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureReport {
    pub message: String,
    pub history: Vec<String>,
}

impl FailureReport {
    pub fn new(message: impl Into<String>, history: Vec<String>) -> Self {
        Self {
            message: message.into(),
            history,
        }
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "callback failed: {}", self.message)?;
        if !self.history.is_empty() {
            write!(f, "\n\nHistory:")?;
            for line in &self.history {
                write!(f, "\n  {}", line)?;
            }
        }
        Ok(())
    }
}
