//! Terminal surface: a registry of named controls

use crate::surface::controls::{ConsoleTranscript, PromptInput, SendTrigger};
use cvchat_application::{
    INPUT_CONTROL, TRANSCRIPT_CONTROL, TRIGGER_CONTROL, TextInputControl, TranscriptControl,
    TriggerControl, UiSurface,
};
use std::collections::HashMap;
use std::sync::Arc;

/// UI surface backed by terminal controls
#[derive(Default)]
pub struct TerminalSurface {
    triggers: HashMap<String, Arc<SendTrigger>>,
    inputs: HashMap<String, Arc<PromptInput>>,
    transcripts: HashMap<String, Arc<ConsoleTranscript>>,
}

impl TerminalSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with the trigger, input and transcript the
    /// dispatcher expects
    pub fn standard(echo: bool) -> Self {
        Self::new()
            .with_trigger(TRIGGER_CONTROL)
            .with_input(INPUT_CONTROL)
            .with_transcript(TRANSCRIPT_CONTROL, echo)
    }

    pub fn with_trigger(mut self, name: &str) -> Self {
        self.triggers
            .insert(name.to_string(), Arc::new(SendTrigger::new()));
        self
    }

    pub fn with_input(mut self, name: &str) -> Self {
        self.inputs
            .insert(name.to_string(), Arc::new(PromptInput::new()));
        self
    }

    pub fn with_transcript(mut self, name: &str, echo: bool) -> Self {
        self.transcripts
            .insert(name.to_string(), Arc::new(ConsoleTranscript::new(echo)));
        self
    }

    /// Concrete trigger, for code that needs to activate it
    pub fn send_trigger(&self, name: &str) -> Option<Arc<SendTrigger>> {
        self.triggers.get(name).cloned()
    }

    /// Concrete input
    pub fn prompt_input(&self, name: &str) -> Option<Arc<PromptInput>> {
        self.inputs.get(name).cloned()
    }

    /// Concrete transcript
    pub fn console_transcript(&self, name: &str) -> Option<Arc<ConsoleTranscript>> {
        self.transcripts.get(name).cloned()
    }
}

impl UiSurface for TerminalSurface {
    fn trigger(&self, name: &str) -> Option<Arc<dyn TriggerControl>> {
        self.send_trigger(name)
            .map(|t| t as Arc<dyn TriggerControl>)
    }

    fn text_input(&self, name: &str) -> Option<Arc<dyn TextInputControl>> {
        self.prompt_input(name)
            .map(|i| i as Arc<dyn TextInputControl>)
    }

    fn transcript(&self, name: &str) -> Option<Arc<dyn TranscriptControl>> {
        self.console_transcript(name)
            .map(|t| t as Arc<dyn TranscriptControl>)
    }
}
