//! CLI-delegate client
//!
//! Shells out to the locally installed `claude` binary. Needs no
//! credential of its own, which makes it the fallback of last resort when
//! a hosted backend is selected but unusable.

use super::ModelClient;
use crate::config::Settings;
use crate::error::{GuardError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;

/// Client that delegates the prompt to the `claude` command-line agent.
pub struct ClaudeCli {
    binary: PathBuf,
}

impl ClaudeCli {
    /// Create a client from resolved settings
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let binary = resolve_binary(settings.use_system_claude);
        tracing::debug!("using claude cli delegate at {}", binary.display());
        Self { binary }
    }
}

/// Pick the binary to spawn: the `claude` on PATH when requested, the
/// user-local install otherwise. Falls back to PATH lookup when no home
/// directory is known.
fn resolve_binary(use_system_claude: bool) -> PathBuf {
    if use_system_claude {
        return PathBuf::from("claude");
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".claude/local/claude"),
        None => PathBuf::from("claude"),
    }
}

#[async_trait]
impl ModelClient for ClaudeCli {
    async fn ask(&self, prompt: &str) -> Result<String> {
        let output = Command::new(&self.binary)
            .arg("-p")
            .arg(prompt)
            .output()
            .await?;

        if !output.status.success() {
            return Err(GuardError::AgentFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn name(&self) -> &'static str {
        "claude_cli"
    }
}
