//! Answers a free-form question using the current video summaries as context.

use tracing::debug;

use crate::credential::Credential;
use crate::guide::prompts;
use crate::llm::client::CompletionClient;
use crate::session::{QaPair, SessionState, VideoRecord};

/// `"{title}: {summary}"` per video, newline-joined, in list order.
pub fn build_context(videos: &[VideoRecord]) -> String {
    videos
        .iter()
        .map(|v| format!("{}: {}", v.title, v.summary))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ask the model and return its reply; a failed call yields the marked
/// failure text instead.
pub async fn answer(
    client: &CompletionClient,
    credential: &Credential,
    videos: &[VideoRecord],
    question: &str,
) -> String {
    let context = build_context(videos);
    debug!(videos = videos.len(), context_len = context.len(), "answering question");
    let message = prompts::qa_message(&context, question);
    client.complete(credential, prompts::QA_SYSTEM, &message).await.into_text()
}

/// [`answer`] against the session's videos, then record the pair.
pub async fn answer_into<'s>(
    client: &CompletionClient,
    credential: &Credential,
    session: &'s mut SessionState,
    question: &str,
) -> &'s QaPair {
    let reply = answer(client, credential, session.videos(), question).await;
    session.push_qa(question, reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmProvider;
    use crate::llm::client::ERROR_MARKER;
    use crate::llm::providers::scripted::ScriptedProvider;

    fn video(title: &str, url: &str, summary: &str) -> VideoRecord {
        VideoRecord { title: title.into(), url: url.into(), summary: summary.into() }
    }

    fn key() -> Credential {
        Credential::new("sk-test").unwrap()
    }

    #[test]
    fn context_joins_title_and_summary_in_order() {
        let videos = vec![
            video("ML Basics", "u1", "summary1"),
            video("Deep Learning", "u2", "summary2"),
        ];
        assert_eq!(build_context(&videos), "ML Basics: summary1\nDeep Learning: summary2");
    }

    #[test]
    fn empty_videos_give_empty_context() {
        assert_eq!(build_context(&[]), "");
    }

    #[tokio::test]
    async fn sends_context_then_question() {
        let scripted = ScriptedProvider::new().with_replies([Ok("Backprop is...")]);
        let client = CompletionClient::new(LlmProvider::Scripted(scripted.clone()));
        let videos = vec![video("ML Basics", "u1", "summary1")];

        let reply = answer(&client, &key(), &videos, "What is backprop?").await;
        assert_eq!(reply, "Backprop is...");

        let calls = scripted.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, prompts::QA_SYSTEM);
        assert_eq!(calls[0].content, "ML Basics: summary1\nUser Question: What is backprop?");
    }

    #[tokio::test]
    async fn answer_into_appends_exactly_one_pair() {
        let scripted = ScriptedProvider::new().with_replies([Ok("first"), Ok("second")]);
        let client = CompletionClient::new(LlmProvider::Scripted(scripted));
        let mut session = SessionState::new();
        session.replace_videos(vec![video("A", "u", "s")]);

        answer_into(&client, &key(), &mut session, "q1").await;
        let snapshot = session.qa_pairs().to_vec();
        let added = answer_into(&client, &key(), &mut session, "q2").await.clone();

        assert_eq!(added, QaPair { question: "q2".into(), answer: "second".into() });
        assert_eq!(session.qa_pairs().len(), 2);
        assert_eq!(&session.qa_pairs()[..1], snapshot.as_slice());
    }

    #[tokio::test]
    async fn failed_answer_is_still_recorded() {
        let scripted = ScriptedProvider::new().with_replies([Err("connection reset")]);
        let client = CompletionClient::new(LlmProvider::Scripted(scripted));
        let mut session = SessionState::new();

        let pair = answer_into(&client, &key(), &mut session, "q").await.clone();
        assert!(pair.answer.starts_with(ERROR_MARKER));
        assert_eq!(session.qa_pairs().len(), 1);
    }
}
