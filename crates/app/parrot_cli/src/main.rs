// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use cli::{Cli, Commands, ThemeAction};
use parrot_api_client::HttpChatClient;
use parrot_core::MessageStore;
use parrot_core::preference::{FilePreferenceStore, PreferenceStore};
use parrot_core::render::{Palette, render_transcript};

mod cli;
mod logging;
mod repl;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let _logger = logging::init()?;

    let args = Cli::parse();
    let preferences = preference_store(args.preferences)?;

    match args.command {
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
        Commands::Theme { action } => {
            let mut current = preferences.load();
            if action == Some(ThemeAction::Toggle) {
                current = current.toggled();
                preferences.save(current)?;
            }
            println!("{}", current.mode_name());
        }
        Commands::Health { server } => {
            let client = HttpChatClient::new(&server)?;
            let health = client.health().await?;
            if !health.is_ok() {
                return Err(Error::Custom(format!(
                    "{server} reported status '{}'",
                    health.status
                )));
            }
            println!("{}", health.status);
        }
        Commands::Chat { server, transcript } => {
            let client = HttpChatClient::new(&server)?;
            let mut store = MessageStore::new(client);

            println!("Connected to {server}. Type {} to exit.", repl::QUIT);
            let mut stdout = std::io::stdout();
            repl::run(
                &mut store,
                &preferences,
                tokio::io::BufReader::new(tokio::io::stdin()),
                &mut stdout,
            )
            .await?;
            stdout.flush()?;

            if let Some(path) = transcript {
                let palette = Palette::for_preference(preferences.load());
                fs::write(&path, render_transcript(store.messages(), &palette))?;
                log::info!("transcript written to {}", path.display());
            }
        }
    }

    Ok(())
}

fn preference_store(path: Option<PathBuf>) -> Result<FilePreferenceStore> {
    match path {
        Some(path) => Ok(FilePreferenceStore::new(path)),
        None => Ok(FilePreferenceStore::default_location()?),
    }
}
