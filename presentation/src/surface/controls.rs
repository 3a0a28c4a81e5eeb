//! Terminal controls

use crate::output::console::ConsoleFormatter;
use cvchat_application::{
    Activation, ActivationListener, TextInputControl, TranscriptControl, TriggerControl,
};
use cvchat_domain::TranscriptRecord;
use std::sync::Mutex;

/// Trigger activated by the REPL when a line is submitted
#[derive(Default)]
pub struct SendTrigger {
    listeners: Mutex<Vec<ActivationListener>>,
}

impl SendTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every listener in registration order.
    pub fn activate(&self) -> Activation {
        // Clone out so listeners may register further listeners.
        let listeners = self.listeners.lock().unwrap().clone();
        let mut activation = Activation::new();
        for listener in listeners {
            listener(&mut activation);
        }
        activation
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl TriggerControl for SendTrigger {
    fn add_listener(&self, listener: ActivationListener) {
        self.listeners.lock().unwrap().push(listener);
    }
}

/// Holds the line the user is about to send
#[derive(Default)]
pub struct PromptInput {
    value: Mutex<String>,
}

impl PromptInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextInputControl for PromptInput {
    fn value(&self) -> String {
        self.value.lock().unwrap().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.lock().unwrap() = value.to_string();
    }
}

type EchoSink = Box<dyn Fn(String) + Send + Sync>;

/// Transcript that keeps rendered markup and optionally echoes each
/// record to stdout
///
/// The echo can be redirected while a line editor owns the terminal.
pub struct ConsoleTranscript {
    markup: Mutex<Vec<String>>,
    echo: bool,
    sink: Mutex<Option<EchoSink>>,
}

impl ConsoleTranscript {
    pub fn new(echo: bool) -> Self {
        Self {
            markup: Mutex::new(Vec::new()),
            echo,
            sink: Mutex::new(None),
        }
    }

    /// Send echoed records to `sink` instead of stdout.
    pub fn redirect_echo(&self, sink: impl Fn(String) + Send + Sync + 'static) {
        *self.sink.lock().unwrap() = Some(Box::new(sink));
    }

    /// Echo to stdout again.
    pub fn restore_echo(&self) {
        *self.sink.lock().unwrap() = None;
    }

    /// Number of records appended so far
    pub fn len(&self) -> usize {
        self.markup.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TranscriptControl for ConsoleTranscript {
    fn append(&self, records: &[TranscriptRecord]) {
        // One lock for the whole batch keeps an exchange contiguous.
        let mut markup = self.markup.lock().unwrap();
        let sink = self.sink.lock().unwrap();
        for record in records {
            markup.push(record.render());
            if !self.echo {
                continue;
            }
            let line = ConsoleFormatter::format_record(record);
            match sink.as_ref() {
                Some(sink) => sink(line),
                None => println!("{}", line),
            }
        }
    }

    fn content(&self) -> String {
        self.markup.lock().unwrap().concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_trigger_runs_listeners_in_order() {
        let trigger = SendTrigger::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        for id in 0..3 {
            let calls = calls.clone();
            trigger.add_listener(Arc::new(move |_: &mut Activation| {
                calls.lock().unwrap().push(id);
            }));
        }
        trigger.activate();

        assert_eq!(*calls.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_trigger_without_listeners_keeps_default() {
        let trigger = SendTrigger::new();
        assert!(!trigger.activate().is_default_prevented());
        assert_eq!(trigger.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_prevent_default() {
        let trigger = SendTrigger::new();
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        trigger.add_listener(Arc::new(move |activation: &mut Activation| {
            seen.fetch_add(1, Ordering::SeqCst);
            activation.prevent_default();
        }));

        assert!(trigger.activate().is_default_prevented());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_prompt_input_round_trip() {
        let input = PromptInput::new();
        assert_eq!(input.value(), "");
        input.set_value(" spaced ");
        assert_eq!(input.value(), " spaced ");
    }

    #[test]
    fn test_transcript_keeps_escaped_markup() {
        let transcript = ConsoleTranscript::new(false);
        transcript.append(&[
            TranscriptRecord::user("a < b"),
            TranscriptRecord::bot("yes"),
        ]);

        assert_eq!(transcript.len(), 2);
        assert_eq!(
            transcript.content(),
            "<p>User: a &lt; b</p><p>Bot: yes</p>"
        );
    }

    #[test]
    fn test_redirected_echo_goes_to_sink() {
        colored::control::set_override(false);
        let transcript = ConsoleTranscript::new(true);
        let echoed = Arc::new(Mutex::new(Vec::new()));
        let captured = echoed.clone();
        transcript.redirect_echo(move |line| captured.lock().unwrap().push(line));

        transcript.append(&[TranscriptRecord::user("q"), TranscriptRecord::bot("a\nb")]);

        assert_eq!(
            *echoed.lock().unwrap(),
            vec!["User: q".to_string(), "Bot: a\n     b".to_string()]
        );

        transcript.restore_echo();
        transcript.append(&[TranscriptRecord::user("later")]);
        assert_eq!(echoed.lock().unwrap().len(), 2);
        assert_eq!(transcript.len(), 3);
    }
}
