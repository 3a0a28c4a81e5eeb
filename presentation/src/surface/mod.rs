//! Terminal implementation of the UI surface
//!
//! Controls live in a name-keyed registry so that a surface can be built
//! with any subset of them; the dispatcher decides whether that is enough.

mod controls;
mod terminal;

pub use controls::{ConsoleTranscript, PromptInput, SendTrigger};
pub use terminal::TerminalSurface;
