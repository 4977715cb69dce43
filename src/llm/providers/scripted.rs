//! Test-only provider: replays queued replies and records every request.
//!
//! Once the queue is drained it answers `[scripted] <content>`, so tests
//! that only care about call order or count need not queue anything.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::llm::ProviderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub api_key: String,
    pub system: String,
    pub content: String,
}

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<Result<String, String>>,
    calls: Vec<RecordedCall>,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    script: Arc<Mutex<Script>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue replies; `Err` entries become `ProviderError::Request`.
    pub fn with_replies<'a, I>(self, replies: I) -> Self
    where
        I: IntoIterator<Item = Result<&'a str, &'a str>>,
    {
        {
            let mut script = self.script.lock().unwrap();
            script
                .replies
                .extend(replies.into_iter().map(|r| r.map(str::to_string).map_err(str::to_string)));
        }
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.script.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.script.lock().unwrap().calls.len()
    }

    pub async fn complete(
        &self,
        api_key: &str,
        system: &str,
        content: &str,
    ) -> Result<String, ProviderError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(RecordedCall {
            api_key: api_key.to_string(),
            system: system.to_string(),
            content: content.to_string(),
        });
        match script.replies.pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(ProviderError::Request(message)),
            None => Ok(format!("[scripted] {content}")),
        }
    }
}
