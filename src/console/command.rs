//! Slash-command line protocol for the console.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/key [secret]` — `None` asks for hidden entry.
    Key(Option<String>),
    Find(String),
    Ask(String),
    Videos,
    History,
    Help,
    Exit,
}

impl Command {
    /// Command word, for logs. Never includes arguments.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Key(_) => "key",
            Command::Find(_) => "find",
            Command::Ask(_) => "ask",
            Command::Videos => "videos",
            Command::History => "history",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let Some(cmdline) = trimmed.strip_prefix('/') else {
        return Err("expected a command (first non-whitespace character must be '/')".to_string());
    };

    let mut parts = cmdline.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or_default().trim();
    let rest = parts.next().unwrap_or_default().trim();

    match command {
        "key" => Ok(Some(Command::Key((!rest.is_empty()).then(|| rest.to_string())))),
        "find" => {
            if rest.is_empty() {
                Err("usage: /find <topic>".to_string())
            } else {
                Ok(Some(Command::Find(rest.to_string())))
            }
        }
        "ask" => {
            if rest.is_empty() {
                Err("usage: /ask <question>".to_string())
            } else {
                Ok(Some(Command::Ask(rest.to_string())))
            }
        }
        "videos" => ensure_no_args(rest, Command::Videos),
        "history" => ensure_no_args(rest, Command::History),
        "help" => ensure_no_args(rest, Command::Help),
        "exit" | "quit" => ensure_no_args(rest, Command::Exit),
        "" => Err("usage: /<command> [args]".to_string()),
        other => Err(format!("unknown command: /{other}")),
    }
}

fn ensure_no_args(rest: &str, command: Command) -> Result<Option<Command>, String> {
    if rest.is_empty() {
        Ok(Some(command))
    } else {
        Err("unexpected arguments".to_string())
    }
}

pub fn usage() -> &'static str {
    "commands:\n  \
     /key [api-key]     set the OpenAI API key (hidden prompt if omitted)\n  \
     /find <topic>      find educational videos on a topic\n  \
     /ask <question>    ask about the videos found\n  \
     /videos            show the current videos\n  \
     /history           show all questions and answers\n  \
     /help\n  \
     /exit"
}
