//! `document.cookie` backed flag store.
//!
//! Only values from the URI-unreserved alphabet are written, so what goes
//! into the jar is byte-for-byte what comes back out. Anything else found in
//! the jar (percent escapes, quotes, spaces) reads as malformed and therefore
//! absent.

use std::time::Duration;

use heart_hunt_game::FlagStore;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CookieError {
    #[error("cookie storage unavailable")]
    Unavailable,
    #[error("refusing to store unsafe cookie {name}")]
    Unsafe { name: String },
    #[error("cookie write failed: {0}")]
    Write(String),
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
}

fn is_safe(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_safe_char)
}

/// Build the `document.cookie` assignment for one flag.
///
/// # Errors
/// Returns [`CookieError::Unsafe`] when the name or value would need escaping.
pub fn format_cookie(name: &str, value: &str, ttl: Duration) -> Result<String, CookieError> {
    if !is_safe(name) || !is_safe(value) {
        return Err(CookieError::Unsafe {
            name: name.to_string(),
        });
    }
    Ok(format!(
        "{name}={value}; max-age={}; path=/; SameSite=Lax",
        ttl.as_secs()
    ))
}

/// Pull `name` out of a raw cookie jar string.
#[must_use]
pub fn parse_cookie(jar: &str, name: &str) -> Option<String> {
    let pattern = format!("(^| ){}=([^;]+)", regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    let value = re.captures(jar)?.get(2)?.as_str();
    is_safe(value).then(|| value.to_string())
}

/// Flag store writing short-lived cookies on the current document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CookieFlagStore;

impl FlagStore for CookieFlagStore {
    type Error = CookieError;

    fn write_flag(&self, key: &str, value: &str, ttl: Duration) -> Result<(), Self::Error> {
        let cookie = format_cookie(key, value, ttl)?;
        let doc = crate::dom::html_document().ok_or(CookieError::Unavailable)?;
        doc.set_cookie(&cookie)
            .map_err(|err| CookieError::Write(crate::dom::js_error_message(&err)))
    }

    fn read_flag(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let doc = crate::dom::html_document().ok_or(CookieError::Unavailable)?;
        let jar = doc.cookie().map_err(|_| CookieError::Unavailable)?;
        Ok(parse_cookie(&jar, key))
    }
}
