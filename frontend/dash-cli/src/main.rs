//! dash - embedded dashboard viewer
//!
//! Loads the row-level-security scoped dashboard for a simulated user.
//!
//! # Examples
//!
//! ```bash
//! # List simulated users and their filters
//! dash users --pretty
//!
//! # Fetch a guest token for one user
//! dash token --user manager_emea
//!
//! # Drive the view from stdin (select/reload/resize/status/quit)
//! printf 'select john_usa\nreload\nquit\n' | dash view
//! ```

use dash_cli::{
    Cli, CliResult, Commands, describe_user, fetch_token, initialize_logger, list_users,
    print_json, run_view,
};
use dash_config::Config;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e.report());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    initialize_logger(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    match cli.command {
        Commands::Users => print_json(&list_users(), cli.pretty),
        Commands::Describe { user } => print_json(&describe_user(&user), cli.pretty),
        Commands::Token { user } => {
            let user = user.unwrap_or_else(|| config.session.default_user.clone());
            let token = fetch_token(&config, &user).await?;
            print_json(&token, cli.pretty)
        }
        Commands::View { user } => run_view(&config, user.as_deref(), cli.pretty).await,
    }
}
