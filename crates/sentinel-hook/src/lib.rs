//! sentinel-hook - pre-tool-use hook entry for the edit guard
//!
//! Glue between a coding agent's hook protocol and the validation
//! pipeline: deserialize the event from stdin, attach captured evidence,
//! run one validation round trip, and render the verdict as JSON on
//! stdout. Policy decision made here, not in the library: pipeline
//! failures fail OPEN (approve with a diagnostic) so a broken backend
//! never wedges the editor.

pub mod capture;

pub use capture::CaptureStore;

use anyhow::Context as _;
use sentinel_core::{validate_with_client, ModelClient, Operation, ValidationContext, Verdict};
use serde::Deserialize;
use serde_json::Value;

/// Tool names the guard validates; everything else passes through.
pub const EDIT_TOOLS: [&str; 3] = ["Write", "Edit", "MultiEdit"];

/// A pre-tool-use hook event, as delivered on stdin.
///
/// Only the fields the guard consumes are modeled; the rest of the
/// payload (session id, transcript path, ...) is ignored.
#[derive(Debug, Deserialize)]
pub struct HookEvent {
    /// Name of the tool the agent is about to run
    pub tool_name: String,
    /// Tool call arguments
    #[serde(default)]
    pub tool_input: Value,
}

impl HookEvent {
    /// Parse an event from the raw stdin document
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("malformed hook payload")
    }

    /// The editing operation this event proposes, or `None` when the tool
    /// is not one the guard validates.
    pub fn operation(&self) -> anyhow::Result<Option<Operation>> {
        if !EDIT_TOOLS.contains(&self.tool_name.as_str()) {
            return Ok(None);
        }
        let tagged = serde_json::json!({
            "tool_name": self.tool_name,
            "tool_input": self.tool_input,
        });
        let operation = serde_json::from_value(tagged)
            .with_context(|| format!("malformed {} tool input", self.tool_name))?;
        Ok(Some(operation))
    }
}

/// Decide the fate of one hook event.
///
/// Never fails: passthrough tools and pipeline errors both resolve to an
/// approval, the latter with a diagnostic on the error stream first.
pub async fn decide(raw_event: &str, store: &CaptureStore, client: &dyn ModelClient) -> Verdict {
    match try_decide(raw_event, store, client).await {
        Ok(verdict) => verdict,
        Err(err) => {
            tracing::error!("validation pipeline failed: {err:#}");
            Verdict::approve(format!("Validation unavailable ({err}); allowing the edit"))
        }
    }
}

async fn try_decide(
    raw_event: &str,
    store: &CaptureStore,
    client: &dyn ModelClient,
) -> anyhow::Result<Verdict> {
    let event = HookEvent::parse(raw_event)?;
    let Some(operation) = event.operation()? else {
        tracing::debug!("tool {} passes through unvalidated", event.tool_name);
        return Ok(Verdict::approve("Not a code-editing operation"));
    };

    let mut ctx = ValidationContext::new(operation);
    if let Some(output) = store.test_output() {
        ctx = ctx.with_test_output(output);
    }
    if let Some(todos) = store.todos() {
        ctx = ctx.with_todos(todos);
    }

    Ok(validate_with_client(&ctx, client).await?)
}
