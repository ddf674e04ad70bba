use crate::commands::Commands;

use dash_config::Config;

use clap::Parser;

#[derive(Parser)]
#[command(name = "dash")]
#[command(about = "Embedded dashboard viewer with per-user row-level security")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Guest token endpoint (overrides config and DASH_GUEST_TOKEN_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Dashboard to embed (overrides config and DASH_DASHBOARD_ID)
    #[arg(long, global = true)]
    pub dashboard_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

impl Cli {
    /// Flags win over config file and environment.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref endpoint) = self.endpoint {
            config.guest_token.endpoint = endpoint.clone();
        }
        if let Some(ref dashboard_id) = self.dashboard_id {
            config.dashboard.id = dashboard_id.clone();
        }
    }
}
