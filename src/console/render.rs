//! Plain-text rendering of videos and Q&A for the console.

use crate::session::{QaPair, VideoRecord};

pub const VIDEOS_HEADER: &str = "📺 Recommended YouTube Videos";

/// Each video as a `### [title](url)` heading followed by its summary.
pub fn render_videos(videos: &[VideoRecord]) -> String {
    if videos.is_empty() {
        return format!("{VIDEOS_HEADER}\n\n(no videos found)");
    }
    let blocks: Vec<String> = videos
        .iter()
        .map(|v| format!("### [{}]({})\n{}", v.title, v.url, v.summary))
        .collect();
    format!("{VIDEOS_HEADER}\n\n{}", blocks.join("\n\n"))
}

pub fn render_qa(pair: &QaPair) -> String {
    format!("**Q:** {}\n**A:** {}", pair.question, pair.answer)
}

pub fn render_history(pairs: &[QaPair]) -> String {
    if pairs.is_empty() {
        return "(no questions asked yet)".to_string();
    }
    pairs.iter().map(render_qa).collect::<Vec<_>>().join("\n\n")
}

pub fn render_listing_failure(failure: &str) -> String {
    format!("❌ Could not get video recommendations: {failure}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn videos_render_as_linked_headings() {
        let out = render_videos(&[
            VideoRecord { title: "ML Basics".into(), url: "u1".into(), summary: "s1".into() },
            VideoRecord { title: "DL".into(), url: "u2".into(), summary: "s2".into() },
        ]);
        assert!(out.starts_with(VIDEOS_HEADER));
        assert!(out.contains("### [ML Basics](u1)\ns1"));
        assert!(out.ends_with("### [DL](u2)\ns2"));
        assert!(out.find("ML Basics").unwrap() < out.find("DL").unwrap());
    }

    #[test]
    fn no_videos_is_explicit() {
        assert!(render_videos(&[]).contains("(no videos found)"));
    }

    #[test]
    fn qa_and_history() {
        let a = QaPair { question: "q1".into(), answer: "a1".into() };
        let b = QaPair { question: "q2".into(), answer: "a2".into() };
        assert_eq!(render_qa(&a), "**Q:** q1\n**A:** a1");
        assert_eq!(render_history(&[a, b]), "**Q:** q1\n**A:** a1\n\n**Q:** q2\n**A:** a2");
        assert_eq!(render_history(&[]), "(no questions asked yet)");
    }
}
