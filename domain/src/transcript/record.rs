//! Transcript record entity

use crate::transcript::markup::escape_markup;
use serde::{Deserialize, Serialize};

/// Who produced a transcript record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::Bot => "Bot",
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One line of the transcript (Entity)
///
/// Holds raw text. Markup is only produced by [`TranscriptRecord::render`],
/// which escapes the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptRecord {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }

    /// Render as a paragraph: `<p>User: text</p>`.
    pub fn render(&self) -> String {
        format!("<p>{}: {}</p>", self.speaker.label(), escape_markup(&self.text))
    }
}

/// Build the two records of one exchange, user first.
pub fn exchange_records(query: &str, reply: &str) -> [TranscriptRecord; 2] {
    [TranscriptRecord::user(query), TranscriptRecord::bot(reply)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_user_record() {
        assert_eq!(TranscriptRecord::user("hello").render(), "<p>User: hello</p>");
    }

    #[test]
    fn test_render_escapes_text() {
        assert_eq!(
            TranscriptRecord::bot("<img src=x onerror=alert(1)>").render(),
            "<p>Bot: &lt;img src=x onerror=alert(1)&gt;</p>"
        );
    }

    #[test]
    fn test_render_empty_text() {
        assert_eq!(TranscriptRecord::user("").render(), "<p>User: </p>");
    }

    #[test]
    fn test_exchange_order() {
        let [first, second] = exchange_records("q", "a");
        assert_eq!(first.speaker, Speaker::User);
        assert_eq!(first.text, "q");
        assert_eq!(second.speaker, Speaker::Bot);
        assert_eq!(second.text, "a");
    }
}
