//! Operation context submitted for judgment
//!
//! Typed representation of the editing operations a coding agent can
//! propose, plus the surrounding evidence (captured test output, todo
//! snapshot) the model needs to judge them. The serde shape matches the
//! agent's pre-tool-use hook payload: `tool_name` tags the variant,
//! `tool_input` carries its fields.

use serde::{Deserialize, Serialize};

/// One old-string/new-string replacement inside a MultiEdit operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditChange {
    /// Text to replace
    pub old_string: String,
    /// Replacement text
    pub new_string: String,
    /// Replace every occurrence instead of exactly one
    #[serde(default)]
    pub replace_all: bool,
}

/// A code-editing operation proposed by the agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool_name", content = "tool_input")]
pub enum Operation {
    /// Create or overwrite a file
    Write {
        /// Target file path
        file_path: String,
        /// Full new file content
        content: String,
    },
    /// Replace one string in an existing file
    Edit {
        /// Target file path
        file_path: String,
        /// Text being replaced
        old_string: String,
        /// Replacement text
        new_string: String,
    },
    /// Apply several replacements to one file atomically
    MultiEdit {
        /// Target file path
        file_path: String,
        /// Ordered replacements
        edits: Vec<EditChange>,
    },
}

impl Operation {
    /// Target file path of the operation
    #[inline]
    #[must_use]
    pub fn file_path(&self) -> &str {
        match self {
            Self::Write { file_path, .. }
            | Self::Edit { file_path, .. }
            | Self::MultiEdit { file_path, .. } => file_path,
        }
    }

    /// Operation label as the agent names it
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Write { .. } => "Write",
            Self::Edit { .. } => "Edit",
            Self::MultiEdit { .. } => "MultiEdit",
        }
    }
}

/// Everything the pipeline needs to judge one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    /// The proposed editing operation
    pub operation: Operation,
    /// Most recent captured test-run output, if any
    pub test_output: Option<String>,
    /// Current todo snapshot, if any
    pub todos: Option<String>,
}

impl ValidationContext {
    /// Context with no captured evidence
    #[inline]
    #[must_use]
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            test_output: None,
            todos: None,
        }
    }

    /// With captured test-run output
    #[inline]
    #[must_use]
    pub fn with_test_output(mut self, output: impl Into<String>) -> Self {
        self.test_output = Some(output.into());
        self
    }

    /// With a todo snapshot
    #[inline]
    #[must_use]
    pub fn with_todos(mut self, todos: impl Into<String>) -> Self {
        self.todos = Some(todos.into());
        self
    }
}
