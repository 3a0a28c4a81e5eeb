//! Core domain concepts.
//!
//! - [`query::QueryText`]: the text captured at dispatch time
//! - [`query::ResponsePayload`]: the endpoint's JSON reply

pub mod query;
