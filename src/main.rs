use std::path::PathBuf;

use axum::extract::FromRef;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod controllers;
mod error;
mod models;
mod names;
mod storage;
pub(crate) mod types;

pub(crate) use error::ApiResult;

use config::Config;
use names::NameGenerator;
use storage::{PasteStore, StoreConfig};

#[derive(Clone, FromRef)]
pub struct App {
    pub config: Config,
    pub store: PasteStore,
    pub names: NameGenerator,
}

#[derive(Debug, Parser)]
#[command(version, about = "A pastebin keeping one file per paste")]
struct Cli {
    /// Path to the config file.
    #[arg(short, long, env = "FLATPASTE_CONFIG", default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve pastes over HTTP.
    Serve,
    /// Store a new paste read from a file or stdin, printing its name.
    Submit(commands::submit::Args),
    /// Print a stored paste.
    Show(commands::show::Args),
    /// List public pastes, most recent first.
    List,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load(&cli.config).await?;
    let names = config.names.generator()?;
    let store = PasteStore::new(StoreConfig::from(&config.storage));

    if !store.dir().is_dir() {
        warn!(
            "paste directory {} does not exist, pastes can't be stored or read",
            store.dir().display()
        );
    }

    let app = App {
        config,
        store,
        names,
    };

    match cli.command {
        Command::Serve => commands::serve::run(app).await,
        Command::Submit(args) => commands::submit::run(app, args).await,
        Command::Show(args) => commands::show::run(app, args).await,
        Command::List => commands::list::run(app).await,
    }
}

#[cfg(test)]
impl App {
    /// App with default settings storing pastes in `dir`.
    pub(crate) fn for_dir(dir: &std::path::Path) -> App {
        let mut config = Config::default();
        config.storage.dir = dir.to_path_buf();
        App {
            store: PasteStore::new(StoreConfig::from(&config.storage)),
            names: NameGenerator::default(),
            config,
        }
    }
}
