//! Verdict types and the strict response decoder
//!
//! The decoder is the single source of truth for what counts as a valid
//! verdict, no matter which backend produced the text or whether its
//! transport already enforced a schema. Strict parse or explicit failure:
//! a silently-misparsed approval on a real violation is a worse failure
//! mode than a loud pipeline error.

use crate::error::{GuardError, Result};
use serde::{Deserialize, Serialize};

/// The guard's decision for one editing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// The operation violates TDD discipline and must not proceed
    Block,
    /// The operation is allowed
    Approve,
}

impl Decision {
    /// Lowercase wire label (`"block"`, `"approve"`)
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Approve => "approve",
        }
    }
}

/// Decoded result of a validation round trip: a decision plus a
/// human-readable reason. Immutable; lives for a single request/response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// The decision
    pub decision: Decision,
    /// Non-empty explanation; actionable next steps when blocking
    pub reason: String,
}

impl Verdict {
    /// Construct an approval verdict with the given justification
    #[inline]
    #[must_use]
    pub fn approve(reason: impl Into<String>) -> Self {
        Self {
            decision: Decision::Approve,
            reason: reason.into(),
        }
    }

    /// Whether this verdict blocks the operation
    #[inline]
    #[must_use]
    pub fn is_block(&self) -> bool {
        self.decision == Decision::Block
    }
}

/// Raw wire shape: `decision` may be `"block"`, `"approve"`, `null`, or
/// absent; `reason` is required. Unknown keys are rejected, mirroring the
/// `additionalProperties: false` schema the constrained backend enforces.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVerdict {
    #[serde(default)]
    decision: Option<String>,
    reason: String,
}

/// Decode raw backend text into a typed verdict.
///
/// Fails with [`GuardError::MalformedResponse`] when the text is not valid
/// JSON, carries unknown keys, lacks `reason`, has an empty `reason`, or a
/// `decision` outside {"block", "approve", null}. A null or absent
/// decision normalizes to approve. The decoder never extracts a verdict
/// from free text around the JSON envelope.
pub fn decode_verdict(raw: &str) -> Result<Verdict> {
    let parsed: RawVerdict = serde_json::from_str(raw)
        .map_err(|err| GuardError::MalformedResponse(err.to_string()))?;

    let decision = match parsed.decision.as_deref() {
        Some("block") => Decision::Block,
        Some("approve") | None => Decision::Approve,
        Some(other) => {
            return Err(GuardError::MalformedResponse(format!(
                "unknown decision value: {other:?}"
            )))
        }
    };

    if parsed.reason.is_empty() {
        return Err(GuardError::MalformedResponse(
            "reason must not be empty".to_string(),
        ));
    }

    Ok(Verdict {
        decision,
        reason: parsed.reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_block_with_reason() {
        let verdict = decode_verdict(r#"{"decision":"block","reason":"x"}"#).unwrap();
        assert_eq!(
            verdict,
            Verdict {
                decision: Decision::Block,
                reason: "x".to_string(),
            }
        );
        assert!(verdict.is_block());
    }

    #[test]
    fn null_decision_normalizes_to_approve() {
        let verdict = decode_verdict(r#"{"decision":null,"reason":"ok"}"#).unwrap();
        assert_eq!(verdict.decision, Decision::Approve);
        assert_eq!(verdict.reason, "ok");
    }

    #[test]
    fn absent_decision_normalizes_to_approve() {
        let verdict = decode_verdict(r#"{"reason":"safe refactoring"}"#).unwrap();
        assert_eq!(verdict.decision, Decision::Approve);
    }

    #[test]
    fn explicit_approve_is_accepted() {
        let verdict = decode_verdict(r#"{"decision":"approve","reason":"bug fix"}"#).unwrap();
        assert_eq!(verdict.decision, Decision::Approve);
    }

    #[test]
    fn empty_object_is_malformed() {
        let err = decode_verdict("{}").unwrap_err();
        assert!(matches!(err, GuardError::MalformedResponse(_)));
    }

    #[test]
    fn non_json_is_malformed() {
        let err = decode_verdict("not json").unwrap_err();
        assert!(matches!(err, GuardError::MalformedResponse(_)));
    }

    #[test]
    fn unknown_decision_value_is_malformed() {
        let err = decode_verdict(r#"{"decision":"maybe","reason":"hmm"}"#).unwrap_err();
        assert!(matches!(err, GuardError::MalformedResponse(_)));
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err =
            decode_verdict(r#"{"decision":"block","reason":"x","confidence":0.9}"#).unwrap_err();
        assert!(matches!(err, GuardError::MalformedResponse(_)));
    }

    #[test]
    fn empty_reason_is_malformed() {
        let err = decode_verdict(r#"{"decision":"block","reason":""}"#).unwrap_err();
        assert!(matches!(err, GuardError::MalformedResponse(_)));
    }

    #[test]
    fn verdict_never_inferred_from_surrounding_text() {
        let raw = r#"The edit looks fine. {"decision":null,"reason":"ok"}"#;
        let err = decode_verdict(raw).unwrap_err();
        assert!(matches!(err, GuardError::MalformedResponse(_)));
    }

    #[test]
    fn verdict_serializes_with_lowercase_decision() {
        let verdict = Verdict {
            decision: Decision::Block,
            reason: "write the test first".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&verdict).unwrap(),
            r#"{"decision":"block","reason":"write the test first"}"#
        );
    }
}
