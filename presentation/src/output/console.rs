//! Console output formatter for transcript records

use colored::Colorize;
use cvchat_domain::{Speaker, TranscriptRecord};

/// Formats transcript records for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one record as `Label: text`, indenting continuation lines
    pub fn format_record(record: &TranscriptRecord) -> String {
        let label = format!("{}:", record.speaker.label());
        let label = match record.speaker {
            Speaker::User => label.cyan().bold(),
            Speaker::Bot => label.green().bold(),
        };

        let mut lines = record.text.lines();
        let first = lines.next().unwrap_or("");
        let rest: Vec<_> = lines.collect();

        if rest.is_empty() {
            format!("{} {}", label, first)
        } else {
            format!("{} {}\n{}", label, first, Self::indent(&rest.join("\n"), "     "))
        }
    }

    /// Format the welcome banner for chat mode
    pub fn banner(endpoint: &str) -> String {
        let line = "─".repeat(45);
        format!(
            "╭{}╮\n│{:^45}│\n╰{}╯\n\n{} {}",
            line,
            "cvchat - CV Query Chat",
            line,
            "Endpoint:".dimmed(),
            endpoint
        )
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
