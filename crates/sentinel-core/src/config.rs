//! Resolved guard settings
//!
//! An immutable configuration value consumed by the backend selector and
//! the clients. Defaults are resolved from the process environment once,
//! at construction; nothing re-reads the environment afterwards.

use serde::{Deserialize, Serialize};

/// Which model backend the guard should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Delegate to the locally installed `claude` CLI
    ClaudeCli,
    /// Anthropic Messages API
    AnthropicApi,
    /// Cerebras chat-completions API
    Cerebras,
}

impl ModelKind {
    /// Stable label, matching the configuration wire value
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClaudeCli => "claude_cli",
            Self::AnthropicApi => "anthropic_api",
            Self::Cerebras => "cerebras",
        }
    }

    /// Parse a configuration label; unrecognized labels route to the CLI
    /// delegate, the zero-credential backend of last resort.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "anthropic_api" => Self::AnthropicApi,
            "cerebras" => Self::Cerebras,
            _ => Self::ClaudeCli,
        }
    }
}

/// Environment variable naming the backend kind
const MODEL_TYPE_VAR: &str = "SENTINEL_MODEL_TYPE";
/// Guard-scoped Anthropic credential, preferred over the bare vendor variable
const ANTHROPIC_KEY_VAR: &str = "SENTINEL_ANTHROPIC_API_KEY";
const ANTHROPIC_KEY_FALLBACK_VAR: &str = "ANTHROPIC_API_KEY";
/// Guard-scoped Cerebras credential, preferred over the bare vendor variable
const CEREBRAS_KEY_VAR: &str = "SENTINEL_CEREBRAS_API_KEY";
const CEREBRAS_KEY_FALLBACK_VAR: &str = "CEREBRAS_API_KEY";
const USE_SYSTEM_CLAUDE_VAR: &str = "SENTINEL_USE_SYSTEM_CLAUDE";
const DEBUG_VAR: &str = "SENTINEL_DEBUG";

/// Resolved, immutable guard settings
#[derive(Debug, Clone)]
pub struct Settings {
    /// Selected backend kind
    pub model_kind: ModelKind,
    /// Anthropic API credential, if any
    pub anthropic_api_key: Option<String>,
    /// Cerebras API credential, if any
    pub cerebras_api_key: Option<String>,
    /// Use the `claude` binary on PATH instead of the user-local install
    pub use_system_claude: bool,
    /// Emit diagnostic lines on the error stream
    pub debug: bool,
}

impl Settings {
    /// Resolve settings from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup
    ///
    /// Empty values count as unset, so an exported-but-blank credential
    /// still triggers the selector's fallback path.
    pub fn resolve<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let model_kind = var(MODEL_TYPE_VAR)
            .map_or(ModelKind::Cerebras, |label| ModelKind::from_label(&label));

        Self {
            model_kind,
            anthropic_api_key: var(ANTHROPIC_KEY_VAR).or_else(|| var(ANTHROPIC_KEY_FALLBACK_VAR)),
            cerebras_api_key: var(CEREBRAS_KEY_VAR).or_else(|| var(CEREBRAS_KEY_FALLBACK_VAR)),
            use_system_claude: var(USE_SYSTEM_CLAUDE_VAR).is_some_and(|value| value == "true"),
            debug: var(DEBUG_VAR).is_some(),
        }
    }

    /// With backend kind
    #[inline]
    #[must_use]
    pub fn with_model_kind(mut self, kind: ModelKind) -> Self {
        self.model_kind = kind;
        self
    }

    /// With Anthropic credential
    #[inline]
    #[must_use]
    pub fn with_anthropic_api_key(mut self, key: impl Into<String>) -> Self {
        self.anthropic_api_key = Some(key.into());
        self
    }

    /// With Cerebras credential
    #[inline]
    #[must_use]
    pub fn with_cerebras_api_key(mut self, key: impl Into<String>) -> Self {
        self.cerebras_api_key = Some(key.into());
        self
    }

    /// With system-claude binary selection
    #[inline]
    #[must_use]
    pub fn with_system_claude(mut self, use_system: bool) -> Self {
        self.use_system_claude = use_system;
        self
    }

    /// With diagnostics enabled
    #[inline]
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_kind: ModelKind::Cerebras,
            anthropic_api_key: None,
            cerebras_api_key: None,
            use_system_claude: false,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve_from(vars: &[(&str, &str)]) -> Settings {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Settings::resolve(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let settings = resolve_from(&[]);
        assert_eq!(settings.model_kind, ModelKind::Cerebras);
        assert_eq!(settings.anthropic_api_key, None);
        assert_eq!(settings.cerebras_api_key, None);
        assert!(!settings.use_system_claude);
        assert!(!settings.debug);
    }

    #[test]
    fn model_kind_labels_round_trip() {
        for kind in [ModelKind::ClaudeCli, ModelKind::AnthropicApi, ModelKind::Cerebras] {
            assert_eq!(ModelKind::from_label(kind.as_str()), kind);
        }
    }

    #[test]
    fn unrecognized_model_type_routes_to_cli_delegate() {
        let settings = resolve_from(&[("SENTINEL_MODEL_TYPE", "gpt_api")]);
        assert_eq!(settings.model_kind, ModelKind::ClaudeCli);
    }

    #[test]
    fn guard_scoped_credential_wins_over_vendor_variable() {
        let settings = resolve_from(&[
            ("SENTINEL_CEREBRAS_API_KEY", "scoped"),
            ("CEREBRAS_API_KEY", "bare"),
        ]);
        assert_eq!(settings.cerebras_api_key.as_deref(), Some("scoped"));
    }

    #[test]
    fn vendor_variable_used_when_scoped_one_absent() {
        let settings = resolve_from(&[("ANTHROPIC_API_KEY", "bare")]);
        assert_eq!(settings.anthropic_api_key.as_deref(), Some("bare"));
    }

    #[test]
    fn blank_credential_counts_as_unset() {
        let settings = resolve_from(&[("CEREBRAS_API_KEY", "")]);
        assert_eq!(settings.cerebras_api_key, None);
    }

    #[test]
    fn system_claude_flag_requires_true() {
        assert!(resolve_from(&[("SENTINEL_USE_SYSTEM_CLAUDE", "true")]).use_system_claude);
        assert!(!resolve_from(&[("SENTINEL_USE_SYSTEM_CLAUDE", "yes")]).use_system_claude);
    }

    #[test]
    fn builder_overrides() {
        let settings = Settings::default()
            .with_model_kind(ModelKind::AnthropicApi)
            .with_anthropic_api_key("test-key")
            .with_debug(true);
        assert_eq!(settings.model_kind, ModelKind::AnthropicApi);
        assert_eq!(settings.anthropic_api_key.as_deref(), Some("test-key"));
        assert!(settings.debug);
    }
}
