//! Backend selector
//!
//! Total function from resolved settings to a usable client: the guard
//! must always be able to render some verdict mechanism, even under
//! misconfiguration, so selection never fails. The CLI delegate is the
//! zero-credential fallback of last resort.

use super::{AnthropicApi, CerebrasApi, ClaudeCli, ModelClient};
use crate::config::{ModelKind, Settings};

/// Choose and instantiate the backend client for these settings.
///
/// The Cerebras backend requires its credential: when it is absent the
/// selector silently substitutes the CLI delegate, emitting only a
/// diagnostic on the error stream. Direct construction of [`CerebrasApi`]
/// bypasses this fallback and fails fast instead.
#[must_use]
pub fn select_client(settings: &Settings) -> Box<dyn ModelClient> {
    tracing::debug!("model backend configured: {}", settings.model_kind.as_str());

    match settings.model_kind {
        ModelKind::AnthropicApi => Box::new(AnthropicApi::new(settings)),
        ModelKind::Cerebras => match CerebrasApi::new(settings) {
            Ok(client) => Box::new(client),
            Err(_) => {
                tracing::debug!("cerebras api key not found, falling back to claude cli");
                Box::new(ClaudeCli::new(settings))
            }
        },
        ModelKind::ClaudeCli => Box::new(ClaudeCli::new(settings)),
    }
}
