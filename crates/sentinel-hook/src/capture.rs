//! Captured evidence store
//!
//! External test reporters drop the latest test-run output (and the
//! agent's todo snapshot) into a well-known data directory; the hook only
//! reads it. Missing or unreadable files simply mean "no evidence" - the
//! model is told so and judges accordingly.

use std::path::{Path, PathBuf};

const TEST_OUTPUT_FILE: &str = "test.txt";
const TODOS_FILE: &str = "todos.json";

/// Read-only view of the capture directory.
#[derive(Debug, Clone)]
pub struct CaptureStore {
    root: PathBuf,
}

impl CaptureStore {
    /// Default capture directory, relative to the project root
    pub const DEFAULT_ROOT: &'static str = ".sentinel/data";

    /// Store rooted at the given directory
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The capture directory
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Latest captured test-run output, if any
    #[must_use]
    pub fn test_output(&self) -> Option<String> {
        self.read(TEST_OUTPUT_FILE)
    }

    /// Latest todo snapshot, if any
    #[must_use]
    pub fn todos(&self) -> Option<String> {
        self.read(TODOS_FILE)
    }

    fn read(&self, name: &str) -> Option<String> {
        std::fs::read_to_string(self.root.join(name))
            .ok()
            .filter(|content| !content.trim().is_empty())
    }
}

impl Default for CaptureStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROOT)
    }
}
