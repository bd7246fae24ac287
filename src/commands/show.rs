use anyhow::Context;

use crate::controllers;
use crate::App;

#[derive(Debug, clap::Args)]
pub struct Args {
    pub name: String,

    /// Print the whole record as JSON rather than just the content.
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, args: Args) -> anyhow::Result<()> {
    let paste = controllers::paste::fetch(&app, &args.name)
        .await
        .with_context(|| format!("failed to fetch paste {}", args.name))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&paste)?);
    } else {
        print!("{}", paste.content);
    }

    Ok(())
}
