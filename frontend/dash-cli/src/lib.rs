//! dash-cli library
//!
//! Hosts the embedded dashboard view headlessly: the selection control, the
//! reload trigger and the user/policy displays become stdin commands and
//! JSON snapshots.

mod cli;
mod commands;
mod error;
mod logger;
mod view;
mod view_command;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::{Commands, describe_user, fetch_token, list_users, print_json, write_json};
pub use error::{CliError, CliResult};
pub use logger::initialize as initialize_logger;
pub use view::{drive_view, run_view};
pub use view_command::ViewCommand;
