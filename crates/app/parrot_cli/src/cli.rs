use std::path::PathBuf;

use clap::{Parser, Subcommand};
use parrot_api_client::DEFAULT_BASE_URL;

#[derive(Parser, Debug)]
#[command(name = "parrot", about = "Terminal client for the Parrot mock chat backend")]
pub struct Cli {
    /// Preference file. Defaults to the platform config directory.
    #[arg(long, global = true, env = "PARROT_PREFERENCES", value_name = "FILE")]
    pub preferences: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive chat session
    Chat {
        #[arg(long, env = "PARROT_SERVER_URL", default_value = DEFAULT_BASE_URL)]
        server: String,

        /// Write the conversation as HTML on exit
        #[arg(long, value_name = "FILE")]
        transcript: Option<PathBuf>,
    },

    /// Probe the backend's health endpoint
    Health {
        #[arg(long, env = "PARROT_SERVER_URL", default_value = DEFAULT_BASE_URL)]
        server: String,
    },

    /// Show or toggle the saved light/dark theme
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Print version
    Version,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Print the saved theme
    Show,
    /// Flip between light and dark and save
    Toggle,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn theme_action_is_optional() {
        let cli = Cli::try_parse_from(["parrot", "theme"]).unwrap();
        assert!(matches!(cli.command, Commands::Theme { action: None }));
    }

    #[test]
    fn preferences_flag_is_global() {
        let cli =
            Cli::try_parse_from(["parrot", "theme", "toggle", "--preferences", "/tmp/p.json"])
                .unwrap();
        assert_eq!(cli.preferences, Some(PathBuf::from("/tmp/p.json")));
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: Some(ThemeAction::Toggle)
            }
        ));
    }

    #[test]
    fn chat_takes_transcript_path() {
        let cli = Cli::try_parse_from([
            "parrot",
            "chat",
            "--server",
            "http://127.0.0.1:9",
            "--transcript",
            "out.html",
        ])
        .unwrap();
        match cli.command {
            Commands::Chat { server, transcript } => {
                assert_eq!(server, "http://127.0.0.1:9");
                assert_eq!(transcript, Some(PathBuf::from("out.html")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
