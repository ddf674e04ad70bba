use crate::{CliError, CliResult};

use dash_embed::Viewport;

const MAX_VIEWPORT_DIMENSION: u32 = 16_384;

/// One line of input to the headless view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Set the selection control. No argument selects nothing (default user).
    Select(String),
    Reload,
    Resize(Viewport),
    Status,
    Quit,
}

impl ViewCommand {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> CliResult<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        if verb.starts_with('#') {
            return Ok(None);
        }

        let args: Vec<&str> = words.collect();
        let command = match (verb, args.as_slice()) {
            ("select", []) => ViewCommand::Select(String::new()),
            ("select", [user]) => ViewCommand::Select(user.to_string()),
            ("reload", []) => ViewCommand::Reload,
            ("resize", [width, height]) => {
                ViewCommand::Resize(Viewport::new(dimension(width)?, dimension(height)?))
            }
            ("status", []) => ViewCommand::Status,
            ("quit" | "exit", []) => ViewCommand::Quit,
            ("select" | "reload" | "resize" | "status" | "quit" | "exit", _) => {
                return Err(CliError::command(format!(
                    "wrong arguments for '{verb}' (usage: {})",
                    usage(verb)
                )));
            }
            _ => {
                return Err(CliError::command(format!(
                    "unknown command '{verb}' (expected select, reload, resize, status or quit)"
                )));
            }
        };

        Ok(Some(command))
    }
}

fn dimension(value: &str) -> CliResult<u32> {
    match value.parse::<u32>() {
        Ok(n) if (1..=MAX_VIEWPORT_DIMENSION).contains(&n) => Ok(n),
        _ => Err(CliError::command(format!(
            "viewport dimension must be 1-{MAX_VIEWPORT_DIMENSION}, got '{value}'"
        ))),
    }
}

fn usage(verb: &str) -> &'static str {
    match verb {
        "select" => "select [user]",
        "resize" => "resize <width> <height>",
        "reload" => "reload",
        "status" => "status",
        _ => "quit",
    }
}
