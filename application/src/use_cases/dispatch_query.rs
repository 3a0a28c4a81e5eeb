//! Dispatch Query use case.
//!
//! Wires the trigger control to a single POST against the query endpoint and
//! appends the exchange to the transcript.
//!
//! The flow of one dispatch:
//! 1. Read the input control verbatim
//! 2. Send `{"query": ...}` through the [`QueryGateway`]
//! 3. On success append `User` then `Bot` records and clear the input
//! 4. On failure log the error and leave the transcript and input untouched
//!
//! Dispatches never wait for each other. Each runs as its own task, so the
//! transcript follows completion order rather than send order.

use crate::ports::query_gateway::{GatewayError, QueryGateway};
use crate::ports::ui_surface::{
    Activation, INPUT_CONTROL, TRANSCRIPT_CONTROL, TRIGGER_CONTROL, TextInputControl,
    TranscriptControl, UiSurface,
};
use cvchat_domain::{QueryRequest, QueryText, exchange_records};
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info, warn};

/// Errors raised while installing the dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("Required controls not found: {}", .0.join(", "))]
    MissingControls(Vec<String>),

    #[error("No async runtime available to run dispatches")]
    NoRuntime,
}

/// Errors raised by a single dispatch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Request failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Dispatch task aborted: {0}")]
    Aborted(String),
}

/// How a dispatch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The exchange was appended and the input cleared.
    Appended { query: QueryText, reply: String },
    /// Nothing was changed; the error has been logged.
    Failed(RequestError),
}

impl DispatchOutcome {
    pub fn is_appended(&self) -> bool {
        matches!(self, DispatchOutcome::Appended { .. })
    }
}

/// Handle on an in-flight dispatch.
///
/// Dropping it does not cancel the request.
pub struct DispatchHandle {
    task: JoinHandle<DispatchOutcome>,
}

impl DispatchHandle {
    /// Wait for the dispatch to finish.
    pub async fn outcome(self) -> DispatchOutcome {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => DispatchOutcome::Failed(RequestError::Aborted(e.to_string())),
        }
    }
}

struct DispatcherInner {
    gateway: Arc<dyn QueryGateway>,
    input: Arc<dyn TextInputControl>,
    transcript: Arc<dyn TranscriptControl>,
    tracker: TaskTracker,
    runtime: Handle,
}

impl DispatcherInner {
    async fn complete(&self, query: QueryText) -> DispatchOutcome {
        let request = QueryRequest::new(query.clone());

        let reply = match self.gateway.send_query(&request).await {
            Ok(payload) => {
                if let Some(server_error) = payload.server_error() {
                    warn!("Server reported: {}", server_error);
                }
                Ok(payload.reply_text())
            }
            Err(e) => Err(RequestError::from(e)),
        };

        match reply {
            Ok(reply) => {
                self.transcript
                    .append(&exchange_records(query.as_str(), &reply));
                self.input.set_value("");
                debug!("Appended exchange ({} byte reply)", reply.len());
                DispatchOutcome::Appended { query, reply }
            }
            Err(e) => {
                error!("Error: {}", e);
                DispatchOutcome::Failed(e)
            }
        }
    }
}

/// Sends the input control's text to the query endpoint on every trigger
/// activation.
///
/// Cheap to clone; clones share the same controls and in-flight set.
#[derive(Clone)]
pub struct QueryDispatcher {
    inner: Arc<DispatcherInner>,
}

impl QueryDispatcher {
    /// Resolve the controls and register the trigger listener.
    ///
    /// Call once at startup, from within a Tokio runtime. If any control is
    /// missing nothing is registered, the error is logged and the feature
    /// stays inert; the lookup is never retried.
    pub fn install(
        surface: &dyn UiSurface,
        gateway: Arc<dyn QueryGateway>,
    ) -> Result<Self, InitError> {
        let trigger = surface.trigger(TRIGGER_CONTROL);
        let input = surface.text_input(INPUT_CONTROL);
        let transcript = surface.transcript(TRANSCRIPT_CONTROL);

        let missing: Vec<String> = [
            (TRIGGER_CONTROL, trigger.is_some()),
            (INPUT_CONTROL, input.is_some()),
            (TRANSCRIPT_CONTROL, transcript.is_some()),
        ]
        .into_iter()
        .filter(|(_, found)| !found)
        .map(|(name, _)| name.to_string())
        .collect();

        let (Some(trigger), Some(input), Some(transcript)) = (trigger, input, transcript) else {
            let err = InitError::MissingControls(missing);
            error!("{}", err);
            return Err(err);
        };

        let runtime = Handle::try_current().map_err(|_| {
            error!("{}", InitError::NoRuntime);
            InitError::NoRuntime
        })?;

        let dispatcher = Self {
            inner: Arc::new(DispatcherInner {
                gateway,
                input,
                transcript,
                tracker: TaskTracker::new(),
                runtime,
            }),
        };

        let listener = dispatcher.clone();
        trigger.add_listener(Arc::new(move |activation: &mut Activation| {
            activation.prevent_default();
            // Detached: the listener must return before the reply arrives.
            let _ = listener.dispatch();
        }));

        info!("Query dispatcher installed on '{}'", TRIGGER_CONTROL);
        Ok(dispatcher)
    }

    /// Capture the current input and send it.
    ///
    /// Returns immediately; the request completes on its own task.
    pub fn dispatch(&self) -> DispatchHandle {
        let query = QueryText::new(self.inner.input.value());
        debug!("Dispatching query ({} bytes)", query.as_str().len());

        let inner = Arc::clone(&self.inner);
        let task = self
            .inner
            .tracker
            .spawn_on(async move { inner.complete(query).await }, &self.inner.runtime);

        DispatchHandle { task }
    }

    /// Number of dispatches whose reply has not been handled yet.
    pub fn in_flight(&self) -> usize {
        self.inner.tracker.len()
    }

    /// Wait until every in-flight dispatch has finished.
    ///
    /// Dispatches started while waiting are waited for as well.
    pub async fn wait_idle(&self) {
        let tracker = &self.inner.tracker;
        tracker.close();
        tracker.wait().await;
        tracker.reopen();
    }
}
