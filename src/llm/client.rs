//! Completion client: one system + user exchange with the configured provider.
//!
//! Failures never propagate as `Err`. They come back as
//! [`Completion::Failed`], and callers that need displayable text use
//! [`Completion::into_text`], which prefixes failures with [`ERROR_MARKER`].

use std::time::Instant;

use tracing::{debug, warn};

use crate::credential::Credential;
use crate::llm::LlmProvider;

/// Prefix of every rendered failure.
pub const ERROR_MARKER: &str = "Error: ";

/// Outcome of one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Text(String),
    Failed(String),
}

impl Completion {
    pub fn is_failure(&self) -> bool {
        matches!(self, Completion::Failed(_))
    }

    /// Text to show or store: the reply itself, or `"Error: <reason>"`.
    pub fn into_text(self) -> String {
        match self {
            Completion::Text(text) => text,
            Completion::Failed(reason) => format!("{ERROR_MARKER}{reason}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompletionClient {
    provider: LlmProvider,
}

impl CompletionClient {
    pub fn new(provider: LlmProvider) -> Self {
        Self { provider }
    }

    /// Send one request. No retries; transport, auth and service errors all
    /// become [`Completion::Failed`].
    pub async fn complete(
        &self,
        credential: &Credential,
        system_prompt: &str,
        user_message: &str,
    ) -> Completion {
        let started = Instant::now();
        match self
            .provider
            .complete(credential.expose(), system_prompt, user_message)
            .await
        {
            Ok(text) => {
                debug!(
                    provider = self.provider.name(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    reply_len = text.len(),
                    "completion ok"
                );
                Completion::Text(text)
            }
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "completion failed"
                );
                Completion::Failed(e.to_string())
            }
        }
    }
}
