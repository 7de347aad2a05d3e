//! Pipeline entry point
//!
//! One validation request is one backend round trip: select a client,
//! compose the prompt, execute it, decode the verdict. Nothing is
//! retried, cached, or rate-limited; a transient backend failure
//! propagates to the caller, who owns the fail-open/fail-closed policy.

use crate::client::{select_client, ModelClient};
use crate::config::Settings;
use crate::context::ValidationContext;
use crate::error::Result;
use crate::prompts::build_prompt;
use crate::response::{decode_verdict, Verdict};

/// Validate one editing operation against TDD discipline.
///
/// Selects the backend from `settings` (with the selector's fallback
/// behavior) and runs the round trip.
pub async fn validate(ctx: &ValidationContext, settings: &Settings) -> Result<Verdict> {
    let client = select_client(settings);
    validate_with_client(ctx, client.as_ref()).await
}

/// Validate one editing operation through an explicit backend client.
///
/// Seam for callers that construct their own client (or a test double).
pub async fn validate_with_client(
    ctx: &ValidationContext,
    client: &dyn ModelClient,
) -> Result<Verdict> {
    let prompt = build_prompt(ctx);
    tracing::debug!(
        "validating {} of {} via {}",
        ctx.operation.kind(),
        ctx.operation.file_path(),
        client.name()
    );

    let raw = client.ask(&prompt).await?;
    tracing::debug!("decoding {} bytes of model output", raw.len());

    let verdict = decode_verdict(&raw)?;
    tracing::debug!("verdict: {}", verdict.decision.as_str());
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockModelClient;
    use crate::context::Operation;
    use crate::error::GuardError;
    use crate::response::Decision;

    fn test_context() -> ValidationContext {
        ValidationContext::new(Operation::Write {
            file_path: "src/calculator.py".to_string(),
            content: "class Calculator: pass".to_string(),
        })
    }

    fn mock_returning(reply: &str) -> MockModelClient {
        let reply = reply.to_string();
        let mut client = MockModelClient::new();
        client
            .expect_ask()
            .times(1)
            .returning(move |_| Ok(reply.clone()));
        client.expect_name().return_const("mock");
        client
    }

    #[tokio::test]
    async fn block_reply_becomes_block_verdict() {
        let client = mock_returning(r#"{"decision":"block","reason":"write the test first"}"#);
        let verdict = validate_with_client(&test_context(), &client).await.unwrap();
        assert_eq!(verdict.decision, Decision::Block);
        assert_eq!(verdict.reason, "write the test first");
    }

    #[tokio::test]
    async fn null_reply_becomes_approve_verdict() {
        let client = mock_returning(r#"{"decision":null,"reason":"safe refactoring"}"#);
        let verdict = validate_with_client(&test_context(), &client).await.unwrap();
        assert_eq!(verdict.decision, Decision::Approve);
    }

    #[tokio::test]
    async fn client_receives_the_composed_prompt() {
        let mut client = MockModelClient::new();
        client
            .expect_ask()
            .times(1)
            .withf(|prompt: &str| {
                prompt.contains("Proposed Write Operation")
                    && prompt.contains("src/calculator.py")
                    && prompt.contains("## Your Response")
            })
            .returning(|_| Ok(r#"{"decision":null,"reason":"ok"}"#.to_string()));
        client.expect_name().return_const("mock");

        validate_with_client(&test_context(), &client).await.unwrap();
    }

    #[tokio::test]
    async fn garbage_reply_is_a_malformed_response() {
        let client = mock_returning("the edit looks fine to me");
        let err = validate_with_client(&test_context(), &client)
            .await
            .unwrap_err();
        assert!(matches!(err, GuardError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn transport_errors_propagate_unchanged() {
        let mut client = MockModelClient::new();
        client.expect_ask().times(1).returning(|_| {
            Err(GuardError::AgentFailed {
                status: 1,
                stderr: "connection refused".to_string(),
            })
        });
        client.expect_name().return_const("mock");

        let err = validate_with_client(&test_context(), &client)
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
