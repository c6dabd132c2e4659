//! Core command definitions and types

/// Parameters of a ladder query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Word to start from
    pub start: String,
    /// Word to reach
    pub goal: String,
}

impl QueryParams {
    /// Create query parameters
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

/// Result of command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Output message to display
    pub output: String,
    /// Lines to write to the output file; empty when nothing was found
    pub lines: Vec<String>,
}

impl CommandResult {
    /// A result with a display message and file lines
    pub fn success(output: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            output: output.into(),
            lines,
        }
    }

    /// A result with nothing to write to the output file
    pub fn empty(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            lines: Vec::new(),
        }
    }

    /// Check whether there is anything to write
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
