//! Model backend clients
//!
//! One capability, three transports:
//! - [`ClaudeCli`] shells out to the locally installed `claude` binary
//! - [`AnthropicApi`] calls the Anthropic Messages API
//! - [`CerebrasApi`] calls the Cerebras chat-completions API with a
//!   mechanically enforced response schema
//!
//! Clients are single-shot: no retry, no pooling, no client-side timeout
//! beyond what the underlying transport enforces.

mod anthropic;
mod cerebras;
mod claude_cli;
mod provider;

pub use anthropic::AnthropicApi;
pub use cerebras::CerebrasApi;
pub use claude_cli::ClaudeCli;
pub use provider::select_client;

use crate::error::Result;
use async_trait::async_trait;

/// Capability contract shared by all backend variants: submit a prompt,
/// receive the model's text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Execute one validation prompt and return the raw model output.
    ///
    /// Errors are propagated unchanged; callers decide whether a failed
    /// round trip means fail-open or fail-closed.
    async fn ask(&self, prompt: &str) -> Result<String>;

    /// Diagnostic label for the backend variant.
    fn name(&self) -> &'static str;
}
