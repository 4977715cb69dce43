//! The two user actions: find videos for a topic, and ask about them.
//!
//! ```text
//! find:  topic ─▶ list call ─▶ parser ─▶ summarizer (N calls) ─▶ session.videos
//! ask:   question + session.videos ─▶ qa call ─▶ session.qa_pairs
//! ```
//!
//! Input is validated here, before anything reaches the provider: no
//! credential, a blank topic/question, or asking before any find are
//! reported as [`GuideError`] and issue no request. Provider failures are
//! not errors at this level; they come back as text.

pub mod parser;
pub mod prompts;
pub mod qa;
pub mod summarizer;

use std::time::Instant;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Config, GuideConfig};
use crate::credential::Credential;
use crate::llm::client::{Completion, CompletionClient};
use crate::llm::{ProviderError, providers};
use crate::session::{QaPair, SessionState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuideError {
    #[error("please enter your OpenAI API key to proceed")]
    MissingCredential,
    #[error("enter a topic to learn about")]
    EmptyTopic,
    #[error("enter a question about the videos")]
    EmptyQuestion,
    #[error("find some videos first")]
    VideosNotLoaded,
}

/// What a completed find action produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOutcome {
    /// Records now in the session.
    pub videos: usize,
    /// Rendered failure of the listing call, if it failed. The session's
    /// video list is empty in that case.
    pub listing_failure: Option<String>,
}

pub struct Guide {
    client: CompletionClient,
    video_count: usize,
    summary_concurrency: usize,
}

impl Guide {
    pub fn new(client: CompletionClient, config: &GuideConfig) -> Self {
        Self {
            client,
            video_count: config.video_count,
            summary_concurrency: config.summary_concurrency,
        }
    }

    /// Build the provider named in `config` and wrap it.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let provider = providers::build(&config.llm)?;
        Ok(Self::new(CompletionClient::new(provider), &config.guide))
    }

    /// List candidate videos for `topic`, summarize each, and replace the
    /// session's video list with the result.
    pub async fn find_videos(
        &self,
        session: &mut SessionState,
        credential: Option<&Credential>,
        topic: &str,
    ) -> Result<FindOutcome, GuideError> {
        let credential = credential.ok_or(GuideError::MissingCredential)?;
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GuideError::EmptyTopic);
        }

        let started = Instant::now();
        info!(topic, count = self.video_count, "finding videos");

        let message = prompts::find_message(topic, self.video_count);
        let listing = self.client.complete(credential, prompts::FIND_SYSTEM, &message).await;

        let outcome = match listing {
            Completion::Text(raw) => {
                let candidates = parser::parse(&raw);
                if candidates.is_empty() {
                    warn!(topic, reply_len = raw.len(), "no parsable video lines in reply");
                }
                let records = summarizer::summarize(
                    &self.client,
                    credential,
                    candidates,
                    self.summary_concurrency,
                )
                .await;
                let videos = records.len();
                session.replace_videos(records);
                FindOutcome { videos, listing_failure: None }
            }
            failed @ Completion::Failed(_) => {
                session.replace_videos(Vec::new());
                FindOutcome { videos: 0, listing_failure: Some(failed.into_text()) }
            }
        };

        info!(
            topic,
            videos = outcome.videos,
            listing_failed = outcome.listing_failure.is_some(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "find videos done"
        );
        Ok(outcome)
    }

    /// Answer `question` from the current videos and append the pair to
    /// the session.
    pub async fn ask(
        &self,
        session: &mut SessionState,
        credential: Option<&Credential>,
        question: &str,
    ) -> Result<QaPair, GuideError> {
        let credential = credential.ok_or(GuideError::MissingCredential)?;
        if question.trim().is_empty() {
            return Err(GuideError::EmptyQuestion);
        }
        if !session.videos_loaded() {
            return Err(GuideError::VideosNotLoaded);
        }

        let started = Instant::now();
        let pair = qa::answer_into(&self.client, credential, session, question).await.clone();
        info!(
            answered = session.qa_pairs().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "question answered"
        );
        Ok(pair)
    }
}
