//! Interactive console — reads slash commands from stdin, runs the guide
//! actions, prints results to stdout.
//!
//! The console owns the session: the API key, the [`SessionState`] and the
//! [`Guide`]. Nothing here is fatal: validation messages and provider
//! failures are printed and the loop carries on. Runs until `/exit`, stdin
//! EOF, or the `shutdown` token is cancelled (Ctrl-C).

pub mod command;
pub mod render;

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::credential::Credential;
use crate::error::AppError;
use crate::guide::{Guide, GuideError};
use crate::session::SessionState;
use command::{Command, parse_command};

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Normal output for stdout.
    Output(String),
    /// A validation problem or failure to surface as a warning.
    Warning(String),
    Exit,
}

pub struct Console {
    guide: Guide,
    session: SessionState,
    credential: Option<Credential>,
    interactive: bool,
}

impl Console {
    pub fn new(guide: Guide) -> Self {
        Self {
            guide,
            session: SessionState::new(),
            credential: None,
            interactive: false,
        }
    }

    /// Enable terminal niceties (spinner, hidden key prompt).
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Execute one parsed command against the session.
    pub async fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Key(Some(raw)) => self.set_key(raw),
            Command::Key(None) => Reply::Warning("usage: /key <api-key>".to_string()),
            Command::Find(topic) => self.find(&topic).await,
            Command::Ask(question) => self.ask(&question).await,
            Command::Videos => {
                if self.session.videos_loaded() {
                    Reply::Output(render::render_videos(self.session.videos()))
                } else {
                    Reply::Warning(GuideError::VideosNotLoaded.to_string())
                }
            }
            Command::History => Reply::Output(render::render_history(self.session.qa_pairs())),
            Command::Help => Reply::Output(command::usage().to_string()),
            Command::Exit => Reply::Exit,
        }
    }

    fn set_key(&mut self, raw: String) -> Reply {
        match Credential::new(raw) {
            Ok(credential) => {
                self.credential = Some(credential);
                info!("api key set");
                Reply::Output("✓ API key accepted!".to_string())
            }
            Err(e) => {
                self.credential = None;
                Reply::Warning(e.to_string())
            }
        }
    }

    async fn find(&mut self, topic: &str) -> Reply {
        let spinner = self.spinner("Searching for the best educational videos...");
        let result = self
            .guide
            .find_videos(&mut self.session, self.credential.as_ref(), topic)
            .await;
        finish(spinner);

        match result {
            Ok(outcome) => match outcome.listing_failure {
                Some(failure) => Reply::Warning(render::render_listing_failure(&failure)),
                None => Reply::Output(render::render_videos(self.session.videos())),
            },
            Err(e) => Reply::Warning(e.to_string()),
        }
    }

    async fn ask(&mut self, question: &str) -> Reply {
        let spinner = self.spinner("Analyzing video content...");
        let result = self
            .guide
            .ask(&mut self.session, self.credential.as_ref(), question)
            .await;
        finish(spinner);

        match result {
            Ok(pair) => Reply::Output(render::render_qa(&pair)),
            Err(e) => Reply::Warning(e.to_string()),
        }
    }

    fn spinner(&self, message: &'static str) -> Option<ProgressBar> {
        if !self.interactive {
            return None;
        }
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(100));
        Some(bar)
    }

    /// Read commands until exit, EOF or shutdown.
    pub async fn run(mut self, shutdown: CancellationToken) -> Result<(), AppError> {
        info!("console started");
        println!("─────────────────────────────────────────");
        println!(" 🎥 AI YouTube Learning Guide  (/help, Ctrl-C to quit)");
        println!("─────────────────────────────────────────");
        if !self.has_credential() {
            println!("⚠️  {} (/key)", GuideError::MissingCredential);
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            if self.interactive {
                print!("> ");
                use std::io::Write as _;
                let _ = std::io::stdout().flush();
            }

            let input = tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    println!();
                    info!("console shutting down");
                    break;
                }

                line = lines.next_line() => match line {
                    Err(e) => {
                        warn!("console read error: {e}");
                        break;
                    }
                    Ok(None) => {
                        info!("console stdin closed");
                        break;
                    }
                    Ok(Some(input)) => input,
                },
            };

            let command = match parse_command(&input) {
                Ok(None) => continue,
                Ok(Some(command)) => command,
                Err(e) => {
                    eprintln!("{e}");
                    eprintln!("{}", command::usage());
                    continue;
                }
            };
            debug!(command = command.name(), "console command");

            let command = match command {
                Command::Key(None) if self.interactive => match prompt_hidden_key().await {
                    Ok(raw) => Command::Key(Some(raw)),
                    Err(e) => {
                        eprintln!("⚠️  {e}");
                        continue;
                    }
                },
                other => other,
            };

            match self.execute(command).await {
                Reply::Output(text) => println!("{text}"),
                Reply::Warning(text) => println!("⚠️  {text}"),
                Reply::Exit => break,
            }
        }

        Ok(())
    }
}

fn finish(spinner: Option<ProgressBar>) {
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
}

/// Hidden API-key entry on the terminal.
async fn prompt_hidden_key() -> Result<String, AppError> {
    tokio::task::spawn_blocking(|| {
        dialoguer::Password::new()
            .with_prompt("OpenAI API key")
            .allow_empty_password(true)
            .interact()
    })
    .await
    .map_err(|e| AppError::Io(std::io::Error::other(e)))?
    .map_err(|e| AppError::Io(std::io::Error::other(e.to_string())))
}

/// Whether both stdin and stdout are attached to a terminal.
pub fn is_interactive_tty() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}
