use crate::Cli;
use crate::auth_commands::AuthCommands;
use crate::commands::Commands;
use crate::me_commands::MeCommands;
use crate::service_commands::ServiceCommands;

use clap::Parser;

#[test]
fn given_login_args_when_parsed_then_remember_me_flag_captured() {
    let cli = Cli::try_parse_from([
        "deadeye",
        "auth",
        "login",
        "--username",
        "alice",
        "--password",
        "x",
        "--remember-me",
    ])
    .unwrap();

    match cli.command {
        Commands::Auth {
            action:
                AuthCommands::Login {
                    username,
                    remember_me,
                    ..
                },
        } => {
            assert_eq!(username, "alice");
            assert!(remember_me);
        }
        _ => panic!("expected auth login"),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    let cli = Cli::try_parse_from([
        "deadeye",
        "service",
        "list",
        "--all",
        "--pretty",
        "--server",
        "http://api.example.com",
    ])
    .unwrap();

    assert!(cli.pretty);
    assert_eq!(cli.server.as_deref(), Some("http://api.example.com"));
    assert!(matches!(
        cli.command,
        Commands::Service {
            action: ServiceCommands::List { all: true }
        }
    ));
}

#[test]
fn given_password_without_confirmation_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["deadeye", "me", "update", "--password", "secret"]);
    assert!(result.is_err());
}

#[test]
fn given_password_with_confirmation_when_parsed_then_accepted() {
    let cli = Cli::try_parse_from([
        "deadeye",
        "me",
        "update",
        "--password",
        "secret",
        "--confirm-password",
        "secret",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Commands::Me {
            action: MeCommands::Update { .. }
        }
    ));
}

#[test]
fn given_route_command_when_parsed_then_path_kept() {
    let cli = Cli::try_parse_from(["deadeye", "route", "/admin/orders"]).unwrap();
    assert!(matches!(cli.command, Commands::Route { path } if path == "/admin/orders"));
}
