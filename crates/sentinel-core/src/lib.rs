//! sentinel-core - TDD edit guard validation pipeline
//!
//! Inspects code-editing operations (Write / Edit / MultiEdit) proposed by
//! an automated coding agent and decides whether to allow or block them:
//! - Selects a model backend from resolved settings, with deterministic
//!   fallback to the CLI delegate
//! - Presents one uniform `ask(prompt) -> text` capability over three
//!   vendor transports
//! - Reduces unconstrained model output to a typed verdict through one
//!   strict decoder
//!
//! # Example
//!
//! ```rust,ignore
//! use sentinel_core::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::from_env();
//! let operation = Operation::Write {
//!     file_path: "src/calculator.py".to_string(),
//!     content: "class Calculator: pass".to_string(),
//! };
//! let ctx = ValidationContext::new(operation);
//!
//! let verdict = validate(&ctx, &settings).await?;
//! println!("{}: {}", verdict.decision.as_str(), verdict.reason);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod prompts;
pub mod response;
pub mod validator;

// Re-exports for convenience
pub use client::{select_client, AnthropicApi, CerebrasApi, ClaudeCli, ModelClient};
pub use config::{ModelKind, Settings};
pub use context::{EditChange, Operation, ValidationContext};
pub use error::{GuardError, Result};
pub use prompts::build_prompt;
pub use response::{decode_verdict, Decision, Verdict};
pub use validator::{validate, validate_with_client};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the guard pipeline
    pub use crate::{
        decode_verdict, select_client, validate, validate_with_client, Decision, GuardError,
        ModelClient, ModelKind, Operation, Settings, ValidationContext, Verdict,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
