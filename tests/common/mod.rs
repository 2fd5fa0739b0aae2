//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_graphql;

use country_explorer::country::{CountryRecord, FetchDispatcher, FetchRequest, Language};
use std::cell::RefCell;
use std::path::PathBuf;
use tempfile::TempDir;

/// Records every dispatched fetch instead of running it.
#[derive(Default)]
pub struct RecordingFetcher {
    pub requests: RefCell<Vec<FetchRequest>>,
}

impl RecordingFetcher {
    pub fn codes(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| r.code.to_string())
            .collect()
    }

    pub fn last(&self) -> FetchRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no fetch dispatched")
    }
}

impl FetchDispatcher for RecordingFetcher {
    fn dispatch(&self, request: FetchRequest) {
        self.requests.borrow_mut().push(request);
    }
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn brazil() -> CountryRecord {
    CountryRecord {
        name: "Brazil".into(),
        native: "Brasil".into(),
        capital: Some("Brasília".into()),
        emoji: "🇧🇷".into(),
        currency: Some("BRL".into()),
        languages: vec![Language {
            code: "pt".into(),
            name: "Portuguese".into(),
        }],
    }
}

pub fn france() -> CountryRecord {
    CountryRecord {
        name: "France".into(),
        native: "France".into(),
        capital: Some("Paris".into()),
        emoji: "🇫🇷".into(),
        currency: Some("EUR".into()),
        languages: vec![Language {
            code: "fr".into(),
            name: "French".into(),
        }],
    }
}

pub const BRAZIL_JSON: &str = r#"{
  "data": {
    "country": {
      "name": "Brazil",
      "native": "Brasil",
      "capital": "Brasília",
      "emoji": "🇧🇷",
      "currency": "BRL",
      "languages": [{ "code": "pt", "name": "Portuguese" }]
    }
  }
}"#;
