use std::path::PathBuf;

use anyhow::Context;
use tokio::fs;
use tokio::io::{self, AsyncReadExt};

use crate::controllers;
use crate::models::NewPaste;
use crate::App;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// File to read the paste from, stdin if omitted.
    pub file: Option<PathBuf>,

    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Language to highlight the paste as.
    #[arg(long)]
    pub hl: Option<String>,

    /// Keep the paste out of public listings.
    #[arg(long)]
    pub private: bool,

    /// Store the paste under this name instead of a random one.
    #[arg(long)]
    pub name: Option<String>,
}

pub async fn run(app: App, args: Args) -> anyhow::Result<()> {
    let content = match &args.file {
        Some(path) => fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read stdin")?;
            buf
        }
    };

    let new_paste = NewPaste {
        title: args.title,
        content,
        highlight_alias: args.hl,
        is_private: args.private,
        name: args.name,
    };

    let paste = controllers::paste::submit(&app, new_paste)
        .await
        .context("failed to store paste")?;

    println!("{}", paste.name);

    Ok(())
}
