//! Per-session state: the current video list and the Q&A log.
//!
//! One `SessionState` per console session, owned by that session and never
//! shared. Videos are replaced wholesale by each find action; Q&A pairs
//! only ever grow.

/// A suggested video with its model-written summary.
///
/// Nothing here is validated: titles and URLs are whatever the model
/// produced, and `summary` may be a rendered failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    pub title: String,
    pub url: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Default)]
pub struct SessionState {
    videos: Vec<VideoRecord>,
    qa_pairs: Vec<QaPair>,
    videos_loaded: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    pub fn qa_pairs(&self) -> &[QaPair] {
        &self.qa_pairs
    }

    /// True once any find action has completed, even one that found nothing.
    pub fn videos_loaded(&self) -> bool {
        self.videos_loaded
    }

    /// Install the result of a find action, dropping the previous list.
    pub fn replace_videos(&mut self, videos: Vec<VideoRecord>) {
        self.videos = videos;
        self.videos_loaded = true;
    }

    /// Append an answered question and return it.
    pub fn push_qa(&mut self, question: impl Into<String>, answer: impl Into<String>) -> &QaPair {
        self.qa_pairs.push(QaPair { question: question.into(), answer: answer.into() });
        &self.qa_pairs[self.qa_pairs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> VideoRecord {
        VideoRecord { title: title.into(), url: format!("https://youtu.be/{title}"), summary: "s".into() }
    }

    #[test]
    fn starts_empty_and_unloaded() {
        let s = SessionState::new();
        assert!(s.videos().is_empty());
        assert!(s.qa_pairs().is_empty());
        assert!(!s.videos_loaded());
    }

    #[test]
    fn empty_replace_still_marks_loaded() {
        let mut s = SessionState::new();
        s.replace_videos(Vec::new());
        assert!(s.videos_loaded());
        assert!(s.videos().is_empty());
    }

    #[test]
    fn replace_does_not_merge() {
        let mut s = SessionState::new();
        s.replace_videos(vec![record("a"), record("b")]);
        s.replace_videos(vec![record("c")]);
        assert_eq!(s.videos(), &[record("c")]);
        assert!(s.videos_loaded());
    }

    #[test]
    fn qa_pairs_only_grow() {
        let mut s = SessionState::new();
        s.push_qa("q1", "a1");
        let before = s.qa_pairs().to_vec();
        let added = s.push_qa("q2", "a2").clone();
        assert_eq!(added, QaPair { question: "q2".into(), answer: "a2".into() });
        assert_eq!(s.qa_pairs().len(), before.len() + 1);
        assert_eq!(&s.qa_pairs()[..before.len()], before.as_slice());
    }

    #[test]
    fn replacing_videos_keeps_qa_log() {
        let mut s = SessionState::new();
        s.push_qa("q", "a");
        s.replace_videos(vec![record("x")]);
        assert_eq!(s.qa_pairs().len(), 1);
    }
}
