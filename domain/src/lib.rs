//! Domain layer for cvchat
//!
//! This crate contains the value objects exchanged with the CV query
//! endpoint and the transcript records rendered from them.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Query**: the raw text captured from the input control, sent verbatim
//! - **Reply**: the `response` field of the endpoint's JSON payload
//! - **Transcript**: an append-only sequence of rendered `User`/`Bot` records
//!
//! All text that reaches the transcript passes through [`escape_markup`].

pub mod core;
pub mod transcript;

// Re-export commonly used types
pub use core::query::{MISSING_REPLY_TEXT, QUERY_PATH, QueryRequest, QueryText, ResponsePayload};
pub use transcript::{
    markup::escape_markup,
    record::{Speaker, TranscriptRecord, exchange_records},
};
