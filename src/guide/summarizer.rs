//! Turns parsed candidates into [`VideoRecord`]s, one summary call each.
//!
//! With `concurrency == 1` calls go out strictly one after another.
//! Larger values keep up to that many calls in flight; results are still
//! returned in input order. A failed call does not stop the batch: its
//! rendered failure text becomes that record's summary.

use futures::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::credential::Credential;
use crate::guide::parser::Candidate;
use crate::guide::prompts;
use crate::llm::client::CompletionClient;
use crate::session::VideoRecord;

pub async fn summarize(
    client: &CompletionClient,
    credential: &Credential,
    candidates: Vec<Candidate>,
    concurrency: usize,
) -> Vec<VideoRecord> {
    let total = candidates.len();
    stream::iter(candidates.into_iter().enumerate())
        .map(|(index, candidate)| summarize_one(client, credential, candidate, index, total))
        .buffered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await
}

async fn summarize_one(
    client: &CompletionClient,
    credential: &Credential,
    candidate: Candidate,
    index: usize,
    total: usize,
) -> VideoRecord {
    debug!(index, total, title = %candidate.title, "summarizing video");
    let message = prompts::summary_message(&candidate.url);
    let completion = client.complete(credential, prompts::SUMMARY_SYSTEM, &message).await;
    if completion.is_failure() {
        warn!(index, title = %candidate.title, "summary failed; storing error text");
    }
    VideoRecord { title: candidate.title, url: candidate.url, summary: completion.into_text() }
}
