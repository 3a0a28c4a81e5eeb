//! Presentation layer for cvchat
//!
//! This crate contains the CLI definition, the terminal implementation of
//! the UI surface, transcript formatting and the interactive chat REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod surface;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use surface::{ConsoleTranscript, PromptInput, SendTrigger, TerminalSurface};
