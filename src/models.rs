use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::names::NameGenerator;

/// Highlight alias used when a paste doesn't name a language.
pub const PLAIN_TEXT_ALIAS: &str = "Text only";

/// A stored paste. This is also the on-disk record, one JSON file per paste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paste {
    #[serde(default)]
    pub name: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "hl_alias")]
    pub highlight_alias: String,
    pub is_private: bool,
    /// Seconds since the unix epoch.
    #[serde(rename = "date")]
    pub created_at: i64,
}

impl Paste {
    /// Rebuild a paste read back from storage. The file name wins over whatever
    /// name the record itself carries.
    pub fn restore(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self.highlight_alias = alias_or_default(self.highlight_alias);
        self
    }
}

/// Raw submission fields, before a name and timestamp are assigned.
#[derive(Debug, Clone, Default)]
pub struct NewPaste {
    pub title: String,
    pub content: String,
    pub highlight_alias: Option<String>,
    pub is_private: bool,
    /// Caller-supplied name, used when importing pastes from elsewhere.
    pub name: Option<String>,
}

impl NewPaste {
    pub fn into_paste(self, names: &NameGenerator) -> Paste {
        Paste {
            name: self.name.unwrap_or_else(|| names.generate_name()),
            title: self.title,
            content: self.content,
            highlight_alias: alias_or_default(self.highlight_alias.unwrap_or_default()),
            is_private: self.is_private,
            created_at: Utc::now().timestamp(),
        }
    }
}

fn alias_or_default(alias: String) -> String {
    if alias.trim().is_empty() {
        PLAIN_TEXT_ALIAS.to_owned()
    } else {
        alias
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn blank_alias_defaults_to_plain_text() {
        let names = NameGenerator::default();
        for alias in [None, Some(""), Some("   ")] {
            let paste = NewPaste {
                highlight_alias: alias.map(str::to_owned),
                ..Default::default()
            }
            .into_paste(&names);
            assert_eq!(paste.highlight_alias, PLAIN_TEXT_ALIAS);
        }

        let paste = NewPaste {
            highlight_alias: Some("rust".into()),
            ..Default::default()
        }
        .into_paste(&names);
        assert_eq!(paste.highlight_alias, "rust");
    }

    #[test]
    fn new_paste_gets_name_and_timestamp() {
        let before = Utc::now().timestamp();
        let paste = NewPaste {
            title: "t".into(),
            content: "hello".into(),
            ..Default::default()
        }
        .into_paste(&NameGenerator::default());

        assert_eq!(paste.name.len(), 6);
        assert!(paste.created_at >= before);
        assert!(paste.created_at <= Utc::now().timestamp());
        assert!(!paste.is_private);
    }

    #[test]
    fn supplied_name_is_kept() {
        let paste = NewPaste {
            name: Some("imported-1".into()),
            ..Default::default()
        }
        .into_paste(&NameGenerator::default());
        assert_eq!(paste.name, "imported-1");
    }

    #[test]
    fn record_field_names() {
        let paste = Paste {
            name: "ABC123".into(),
            title: "t".into(),
            content: "c".into(),
            highlight_alias: "python".into(),
            is_private: true,
            created_at: 1234,
        };
        assert_eq!(
            serde_json::to_value(&paste).unwrap(),
            json!({
                "name": "ABC123",
                "title": "t",
                "content": "c",
                "hl_alias": "python",
                "is_private": true,
                "date": 1234,
            })
        );
    }

    #[test]
    fn restore_forces_name() {
        let record: Paste = serde_json::from_value(json!({
            "name": "WRONG1",
            "title": "",
            "content": "",
            "hl_alias": "",
            "is_private": false,
            "date": 5,
        }))
        .unwrap();

        let paste = record.restore("RIGHT1");
        assert_eq!(paste.name, "RIGHT1");
        assert_eq!(paste.highlight_alias, PLAIN_TEXT_ALIAS);
        assert_eq!(paste.created_at, 5);
    }
}
