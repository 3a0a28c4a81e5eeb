//! HTTP adapter for the query endpoint
//!
//! Implements [`QueryGateway`](cvchat_application::QueryGateway) with a
//! shared `reqwest` client.

mod gateway;

pub use gateway::{HttpQueryGateway, query_url};
