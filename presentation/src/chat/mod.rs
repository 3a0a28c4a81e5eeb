//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface that drives the
//! terminal surface the way a user drives a form.

mod repl;

pub use repl::ChatRepl;
