//! Personalized static content: the letter, theme colors and photo list.
//!
//! Embedded at compile time from `static/data/content.json` and parsed once.
//! A broken file degrades to the built-in defaults rather than a blank page.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONTENT_JSON: &str = include_str!("../static/data/content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("content has no letter body")]
    EmptyLetter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    pub greeting: String,
    pub body: String,
    pub closing: String,
    pub signature: String,
}

impl Letter {
    /// Body paragraphs, split on blank lines.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<&str> {
        self.body
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub text: String,
    pub button: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: String::from("#ffe4e6"),
            text: String::from("#be123c"),
            button: String::from("#e11d48"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    pub letter: Letter,
    #[serde(default)]
    pub colors: Theme,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            name: String::from("you"),
            author: String::new(),
            title: String::from("A Special Question..."),
            letter: Letter {
                greeting: String::from("My Dearest,"),
                body: String::from("You found every heart I hid. They were always yours."),
                closing: String::from("Yours, now and always,"),
                signature: String::from("With all my heart ❤️"),
            },
            colors: Theme::default(),
            images: Vec::new(),
        }
    }
}

impl SiteContent {
    /// Parse content from JSON.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the letter body is empty.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        if content.letter.paragraphs().is_empty() {
            return Err(ContentError::EmptyLetter);
        }
        Ok(content)
    }

    fn load_embedded() -> Self {
        Self::from_json(CONTENT_JSON).unwrap_or_else(|err| {
            log::error!("falling back to default content: {err}");
            Self::default()
        })
    }
}

static CONTENT: Lazy<SiteContent> = Lazy::new(SiteContent::load_embedded);

/// Shared, lazily parsed site content.
#[must_use]
pub fn site_content() -> &'static SiteContent {
    &CONTENT
}
