//! Application layer for cvchat
//!
//! This crate contains the query dispatch use case and the ports it drives.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    query_gateway::{GatewayError, QueryGateway},
    ui_surface::{
        Activation, ActivationListener, INPUT_CONTROL, TRANSCRIPT_CONTROL, TRIGGER_CONTROL,
        TextInputControl, TranscriptControl, TriggerControl, UiSurface,
    },
};
pub use use_cases::dispatch_query::{
    DispatchHandle, DispatchOutcome, InitError, QueryDispatcher, RequestError,
};
