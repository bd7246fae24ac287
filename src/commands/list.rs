use anyhow::Context;
use chrono::{TimeZone, Utc};

use crate::controllers;
use crate::models::Paste;
use crate::App;

pub async fn run(app: App) -> anyhow::Result<()> {
    let pastes = controllers::paste::list_public(&app)
        .await
        .context("failed to list pastes")?;

    for paste in &pastes {
        println!("{}", format_line(paste));
    }

    Ok(())
}

fn format_line(paste: &Paste) -> String {
    let date = Utc
        .timestamp_opt(paste.created_at, 0)
        .single()
        .map(|date| date.to_rfc3339())
        .unwrap_or_else(|| paste.created_at.to_string());
    format!("{}\t{date}\t{}", paste.name, paste.title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format() {
        let paste = Paste {
            name: "ABC123".into(),
            title: "notes".into(),
            content: String::new(),
            highlight_alias: "rust".into(),
            is_private: false,
            created_at: 0,
        };
        assert_eq!(
            format_line(&paste),
            "ABC123\t1970-01-01T00:00:00+00:00\tnotes"
        );
    }
}
