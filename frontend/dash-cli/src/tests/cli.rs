use crate::{Cli, Commands};

use dash_config::Config;

use clap::Parser;
use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn given_view_with_user_when_parsed_then_user_captured() {
    let cli = Cli::try_parse_from(["dash", "view", "--user", "john_usa"]).unwrap();

    match cli.command {
        Commands::View { user } => assert_that!(user.as_deref(), some(eq("john_usa"))),
        _ => panic!("expected view command"),
    }
}

#[test]
fn given_token_without_user_when_parsed_then_user_none() {
    let cli = Cli::try_parse_from(["dash", "token"]).unwrap();

    match cli.command {
        Commands::Token { user } => assert_that!(user, none()),
        _ => panic!("expected token command"),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_accepted() {
    let cli = Cli::try_parse_from([
        "dash",
        "users",
        "--pretty",
        "--endpoint",
        "http://127.0.0.1:3000/api/superset/guest-token",
    ])
    .unwrap();

    assert!(cli.pretty);
    assert_that!(
        cli.endpoint.as_deref(),
        some(eq("http://127.0.0.1:3000/api/superset/guest-token"))
    );
}

#[test]
fn given_describe_without_user_when_parsed_then_error() {
    assert!(Cli::try_parse_from(["dash", "describe"]).is_err());
}

#[test]
fn given_flags_when_apply_overrides_then_config_updated() {
    let cli = Cli::try_parse_from([
        "dash",
        "--endpoint",
        "http://tokens.test/guest-token",
        "--dashboard-id",
        "abc-123",
        "users",
    ])
    .unwrap();
    let mut config = Config::default();

    cli.apply_overrides(&mut config);

    assert_that!(
        config.guest_token.endpoint.as_str(),
        eq("http://tokens.test/guest-token")
    );
    assert_that!(config.dashboard.id.as_str(), eq("abc-123"));
}

#[test]
fn given_no_flags_when_apply_overrides_then_config_unchanged() {
    let cli = Cli::try_parse_from(["dash", "users"]).unwrap();
    let mut config = Config::default();
    let before = config.guest_token.endpoint.clone();

    cli.apply_overrides(&mut config);

    assert_that!(config.guest_token.endpoint, eq(&before));
}
