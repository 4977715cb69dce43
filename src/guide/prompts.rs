//! Fixed system instructions and user-message templates.
//!
//! Templates use `{{key}}` placeholders, substituted once by [`render`].

pub const FIND_SYSTEM: &str = "You are a helpful assistant that provides video recommendations.";
pub const FIND_TEMPLATE: &str =
    "Find the top {{count}} educational YouTube videos related to: {{topic}}";

pub const SUMMARY_SYSTEM: &str = "You are an AI that summarizes YouTube videos.";
pub const SUMMARY_TEMPLATE: &str = "Summarize the key insights from this video: {{url}}";

pub const QA_SYSTEM: &str = "You are an AI tutor answering questions based on video content.";
pub const QA_TEMPLATE: &str = "{{context}}\nUser Question: {{question}}";

/// Replace every `{{key}}` in `template` with its value.
///
/// Substitution is a single pass over the template, so values that
/// themselves contain `{{...}}` are left alone.
pub fn render<'a, I>(template: &str, vars: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let vars: Vec<(String, &str)> =
        vars.into_iter().map(|(k, v)| (format!("{{{{{k}}}}}"), v)).collect();

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    'scan: while let Some(start) = rest.find("{{") {
        for (placeholder, value) in &vars {
            if rest[start..].starts_with(placeholder.as_str()) {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &rest[start + placeholder.len()..];
                continue 'scan;
            }
        }
        out.push_str(&rest[..start + 2]);
        rest = &rest[start + 2..];
    }
    out.push_str(rest);
    out
}

pub fn find_message(topic: &str, count: usize) -> String {
    let count = count.to_string();
    render(FIND_TEMPLATE, [("count", count.as_str()), ("topic", topic)])
}

pub fn summary_message(url: &str) -> String {
    render(SUMMARY_TEMPLATE, [("url", url)])
}

pub fn qa_message(context: &str, question: &str) -> String {
    render(QA_TEMPLATE, [("context", context), ("question", question)])
}
