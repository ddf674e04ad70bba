use crate::{CliError, CliResult};

use dash_config::Config;
use dash_embed::{GuestTokenClient, PolicyDescriptionTable, UserIdentity, describe};

use std::io::Write;

use clap::Subcommand;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum Commands {
    /// List simulated users with their row-level-security filters
    Users,

    /// Show the filter applied for one user
    Describe {
        /// User identifier (e.g. john_usa)
        user: String,
    },

    /// Fetch a guest token for a user and print a preview
    Token {
        /// User identifier (defaults to the configured default user)
        #[arg(long)]
        user: Option<String>,
    },

    /// Run the dashboard view, driven by commands on stdin
    View {
        /// User loaded on attach (defaults to the configured default user)
        #[arg(long)]
        user: Option<String>,
    },
}

pub fn list_users() -> Value {
    let users: Vec<Value> = PolicyDescriptionTable::global()
        .known_users()
        .map(|(user, policy)| {
            json!({
                "user": user,
                "policy": policy,
                "shape": policy.shape(),
            })
        })
        .collect();

    json!({ "users": users })
}

pub fn describe_user(user: &str) -> Value {
    let policy = describe(user);
    json!({
        "user": user,
        "policy": policy,
        "known": policy.is_known(),
    })
}

pub async fn fetch_token(config: &Config, user: &str) -> CliResult<Value> {
    let client = GuestTokenClient::from_config(&config.guest_token);
    let user = UserIdentity::new(user);
    let token = client.fetch_token(&user, &config.dashboard.id).await?;

    Ok(json!({
        "user": user,
        "dashboard_id": config.dashboard.id,
        "token_preview": token.preview(),
        "token_length": token.expose().len(),
    }))
}

/// Print `value` as one JSON document on stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> CliResult<()> {
    write_json(&mut std::io::stdout().lock(), value, pretty)
}

/// Write `value` as one JSON document followed by a newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T, pretty: bool) -> CliResult<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "{}", output).map_err(CliError::io)?;
    out.flush().map_err(CliError::io)
}
