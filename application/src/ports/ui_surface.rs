//! UI surface port
//!
//! The dispatcher only ever touches three named controls: a trigger, a text
//! input and a transcript. A surface resolves them by name; how they are
//! drawn (terminal, web view, test double) is the adapter's business.

use cvchat_domain::TranscriptRecord;
use std::sync::Arc;

/// Name of the control whose activation starts a dispatch.
pub const TRIGGER_CONTROL: &str = "sendButton";
/// Name of the control holding the query text.
pub const INPUT_CONTROL: &str = "queryInput";
/// Name of the control displaying the transcript.
pub const TRANSCRIPT_CONTROL: &str = "messages";

/// A single activation of a trigger control.
///
/// Listeners may suppress the control's default behavior (for example a
/// form submission) by calling [`Activation::prevent_default`].
#[derive(Debug, Default)]
pub struct Activation {
    default_prevented: bool,
}

impl Activation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Callback invoked synchronously on every activation.
pub type ActivationListener = Arc<dyn Fn(&mut Activation) + Send + Sync>;

/// A control that can be activated by the user.
pub trait TriggerControl: Send + Sync {
    /// Register a listener; listeners run in registration order.
    fn add_listener(&self, listener: ActivationListener);
}

/// A single-line text input.
pub trait TextInputControl: Send + Sync {
    fn value(&self) -> String;

    fn set_value(&self, value: &str);
}

/// An append-only transcript display.
pub trait TranscriptControl: Send + Sync {
    /// Append records at the end of the existing content.
    ///
    /// Implementations render each record with [`TranscriptRecord::render`]
    /// so that no raw text reaches the markup.
    fn append(&self, records: &[TranscriptRecord]);

    /// Rendered markup of everything appended so far.
    fn content(&self) -> String;
}

/// Resolves named controls.
///
/// Every lookup returns `None` when no control of that kind exists under
/// the name.
pub trait UiSurface: Send + Sync {
    fn trigger(&self, name: &str) -> Option<Arc<dyn TriggerControl>>;

    fn text_input(&self, name: &str) -> Option<Arc<dyn TextInputControl>>;

    fn transcript(&self, name: &str) -> Option<Arc<dyn TranscriptControl>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_default_not_prevented() {
        let activation = Activation::new();
        assert!(!activation.is_default_prevented());
    }

    #[test]
    fn test_prevent_default() {
        let mut activation = Activation::new();
        activation.prevent_default();
        assert!(activation.is_default_prevented());
    }
}
