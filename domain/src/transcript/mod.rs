//! Transcript records and the markup boundary they are rendered through.

pub mod markup;
pub mod record;
