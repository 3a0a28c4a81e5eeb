//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::surface::{ConsoleTranscript, PromptInput, SendTrigger, TerminalSurface};
use cvchat_application::{
    INPUT_CONTROL, QueryDispatcher, TRANSCRIPT_CONTROL, TRIGGER_CONTROL, TextInputControl,
    TranscriptControl,
};
use reedline::{
    DefaultPrompt, DefaultPromptSegment, ExternalPrinter, FileBackedHistory, Reedline, Signal,
};
use std::path::PathBuf;
use std::sync::Arc;

const HISTORY_CAPACITY: usize = 1000;
const PRINTER_CAPACITY: usize = 256;

/// What a line typed at the prompt asks for
#[derive(Debug, PartialEq, Eq)]
enum PromptLine<'a> {
    Command(&'a str),
    Query(&'a str),
}

impl<'a> PromptLine<'a> {
    /// `/cmd` is a command; `//text` sends `/text`; anything else is sent as typed.
    fn classify(line: &'a str) -> Self {
        match line.strip_prefix('/') {
            Some(rest) if rest.starts_with('/') => PromptLine::Query(rest),
            Some(_) => PromptLine::Command(line.trim()),
            None => PromptLine::Query(line),
        }
    }
}

/// Interactive chat REPL
///
/// Lines typed at the prompt go through the same controls the dispatcher
/// listens on: the line is copied into the input control and the send
/// trigger is activated.
pub struct ChatRepl {
    trigger: Arc<SendTrigger>,
    input: Arc<PromptInput>,
    transcript: Arc<ConsoleTranscript>,
    dispatcher: QueryDispatcher,
    endpoint: String,
    wait_for_reply: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    /// Bind the REPL to a surface the dispatcher is installed on.
    ///
    /// Returns `None` if the surface lacks any of the standard controls.
    pub fn attach(
        surface: &TerminalSurface,
        dispatcher: QueryDispatcher,
        endpoint: impl Into<String>,
    ) -> Option<Self> {
        Some(Self {
            trigger: surface.send_trigger(TRIGGER_CONTROL)?,
            input: surface.prompt_input(INPUT_CONTROL)?,
            transcript: surface.console_transcript(TRANSCRIPT_CONTROL)?,
            dispatcher,
            endpoint: endpoint.into(),
            wait_for_reply: true,
            history_file: None,
        })
    }

    /// Set whether to wait for each reply before prompting again
    pub fn with_wait_for_reply(mut self, wait: bool) -> Self {
        self.wait_for_reply = wait;
        self
    }

    /// Set the history file (a leading `~/` is expanded)
    pub fn with_history_file(mut self, path: Option<&str>) -> Self {
        self.history_file = path.map(expand_home);
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = self.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            // History is optional.
            if let Ok(history) = FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
                line_editor = line_editor.with_history(Box::new(history));
            }
        }

        if !self.wait_for_reply {
            // Replies arrive while the editor holds the terminal in raw mode.
            let printer = ExternalPrinter::<String>::new(PRINTER_CAPACITY);
            let sender = printer.sender();
            self.transcript.redirect_echo(move |line| {
                if let Err(e) = sender.try_send(line) {
                    println!("{}", e.into_inner());
                }
            });
            line_editor = line_editor.with_external_printer(printer);
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("cvchat".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => match PromptLine::classify(&line) {
                    PromptLine::Command(cmd) => {
                        if self.handle_command(cmd) {
                            break;
                        }
                    }
                    // Sent as typed, empty lines included.
                    PromptLine::Query(query) => self.submit(query).await,
                },
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        self.transcript.restore_echo();
        if self.dispatcher.in_flight() > 0 {
            println!("Waiting for {} pending replies...", self.dispatcher.in_flight());
        }
        self.dispatcher.wait_idle().await;

        Ok(())
    }

    /// Copy a line into the input control and activate the send trigger.
    pub async fn submit(&self, line: &str) {
        self.input.set_value(line);
        self.trigger.activate();

        if self.wait_for_reply {
            self.dispatcher.wait_idle().await;
        }
    }

    fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("cvchat").join("history.txt")))
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", ConsoleFormatter::banner(&self.endpoint));
        println!();
        print_commands();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                print_commands();
                false
            }
            "/transcript" => {
                println!();
                if self.transcript.is_empty() {
                    println!("(empty)");
                } else {
                    println!("{}", self.transcript.content());
                }
                println!();
                false
            }
            "/pending" => {
                println!("{} request(s) in flight", self.dispatcher.in_flight());
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }
}

fn print_commands() {
    println!("Commands:");
    println!("  /help, /h, /?    - Show this help");
    println!("  /transcript      - Print the transcript markup");
    println!("  /pending         - Show requests awaiting a reply");
    println!("  /quit, /exit, /q - Exit chat");
    println!();
    println!("Start a line with // to send a query beginning with /.");
    println!();
}

fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cvchat_application::{GatewayError, QueryGateway};
    use cvchat_domain::{QueryRequest, ResponsePayload};
    use std::sync::Mutex;

    /// Replies with `echo: <query>` and records every query
    #[derive(Default)]
    struct EchoGateway {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl QueryGateway for EchoGateway {
        async fn send_query(
            &self,
            request: &QueryRequest,
        ) -> Result<ResponsePayload, GatewayError> {
            let query = request.query.as_str().to_string();
            self.seen.lock().unwrap().push(query.clone());
            Ok(ResponsePayload {
                response: Some(format!("echo: {}", query).into()),
                error: None,
            })
        }
    }

    fn setup() -> (TerminalSurface, Arc<EchoGateway>, ChatRepl) {
        let surface = TerminalSurface::standard(false);
        let gateway = Arc::new(EchoGateway::default());
        let dispatcher = QueryDispatcher::install(&surface, gateway.clone()).unwrap();
        let repl = ChatRepl::attach(&surface, dispatcher, "http://127.0.0.1:5000").unwrap();
        (surface, gateway, repl)
    }

    #[tokio::test]
    async fn test_submit_appends_exchange_and_clears_input() {
        let (surface, gateway, repl) = setup();

        repl.submit("Who knows Rust?").await;

        let transcript = surface.console_transcript(TRANSCRIPT_CONTROL).unwrap();
        assert_eq!(
            transcript.content(),
            "<p>User: Who knows Rust?</p><p>Bot: echo: Who knows Rust?</p>"
        );
        assert_eq!(surface.prompt_input(INPUT_CONTROL).unwrap().value(), "");
        assert_eq!(*gateway.seen.lock().unwrap(), vec!["Who knows Rust?"]);
    }

    #[tokio::test]
    async fn test_submit_sends_empty_line() {
        let (_surface, gateway, repl) = setup();

        repl.submit("").await;

        assert_eq!(*gateway.seen.lock().unwrap(), vec![""]);
    }

    #[tokio::test]
    async fn test_submit_without_waiting() {
        let (surface, _gateway, repl) = setup();
        let repl = repl.with_wait_for_reply(false);

        repl.submit("one").await;
        repl.submit("two").await;
        repl.dispatcher.wait_idle().await;

        let transcript = surface.console_transcript(TRANSCRIPT_CONTROL).unwrap();
        assert_eq!(transcript.len(), 4);
        assert!(transcript.content().contains("<p>User: one</p>"));
        assert!(transcript.content().contains("<p>User: two</p>"));
    }

    #[test]
    fn test_attach_requires_standard_controls() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let _guard = runtime.enter();

        let full = TerminalSurface::standard(false);
        let dispatcher =
            QueryDispatcher::install(&full, Arc::new(EchoGateway::default())).unwrap();

        let partial = TerminalSurface::new().with_input(INPUT_CONTROL);
        assert!(ChatRepl::attach(&partial, dispatcher, "http://x").is_none());
    }

    #[test]
    fn test_classify_prompt_lines() {
        assert_eq!(PromptLine::classify("/help"), PromptLine::Command("/help"));
        assert_eq!(PromptLine::classify("/quit "), PromptLine::Command("/quit"));
        assert_eq!(PromptLine::classify("//etc/hosts"), PromptLine::Query("/etc/hosts"));
        assert_eq!(PromptLine::classify("//"), PromptLine::Query("/"));
        assert_eq!(PromptLine::classify(" /x"), PromptLine::Query(" /x"));
        assert_eq!(PromptLine::classify(""), PromptLine::Query(""));
    }

    #[tokio::test]
    async fn test_escaped_slash_line_is_sent() {
        let (_surface, gateway, repl) = setup();

        if let PromptLine::Query(query) = PromptLine::classify("//usr/bin") {
            repl.submit(query).await;
        }

        assert_eq!(*gateway.seen.lock().unwrap(), vec!["/usr/bin"]);
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/tmp/h.txt"), PathBuf::from("/tmp/h.txt"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/h.txt"), home.join("h.txt"));
        }
    }
}
