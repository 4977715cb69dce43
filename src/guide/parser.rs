//! Extracts `(title, url)` candidates from a find-videos reply.
//!
//! Convention: one candidate per line, `<title> - <url>`. Lines without the
//! separator are skipped. Only the first separator splits, so the URL keeps
//! any later ` - `. Nothing is trimmed or validated.

/// Separator between title and URL.
pub const SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    pub url: String,
}

/// Parse every line carrying [`SEPARATOR`] into a [`Candidate`], in order.
pub fn parse(raw: &str) -> Vec<Candidate> {
    raw.lines()
        .filter_map(|line| line.split_once(SEPARATOR))
        .map(|(title, url)| Candidate { title: title.to_string(), url: url.to_string() })
        .collect()
}
