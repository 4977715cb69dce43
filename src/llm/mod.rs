//! LLM provider abstraction.
//!
//! `LlmProvider` is an enum over concrete provider implementations.
//! Add a new variant + module in `providers/` for each additional backend.
//!
//! Provider instances are shared immutable capabilities — clone them freely.
//! The API key is passed on every call rather than stored, because it
//! belongs to the console session, not to the provider.
//!
//! Providers report failures as [`ProviderError`]; [`client::CompletionClient`]
//! turns that into the tagged [`client::Completion`] the rest of the app uses.

pub mod client;
pub mod providers;

use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("provider request failed: {0}")]
    Request(String),
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
///
/// Enum dispatch avoids `dyn` trait objects and the `async-trait` dependency.
/// Adding a backend = new module + new variant + new `complete` arm.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Dummy(providers::dummy::DummyProvider),
    OpenAiCompatible(providers::openai_compatible::OpenAiCompatibleProvider),
    #[cfg(test)]
    Scripted(providers::scripted::ScriptedProvider),
}

impl LlmProvider {
    /// One system + user exchange; returns the model's text reply.
    pub async fn complete(
        &self,
        api_key: &str,
        system: &str,
        content: &str,
    ) -> Result<String, ProviderError> {
        match self {
            LlmProvider::Dummy(p) => p.complete(content).await,
            LlmProvider::OpenAiCompatible(p) => p.complete(api_key, system, content).await,
            #[cfg(test)]
            LlmProvider::Scripted(p) => p.complete(api_key, system, content).await,
        }
    }

    /// Short backend label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            LlmProvider::Dummy(_) => "dummy",
            LlmProvider::OpenAiCompatible(_) => "openai",
            #[cfg(test)]
            LlmProvider::Scripted(_) => "scripted",
        }
    }
}
