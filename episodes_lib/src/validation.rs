//! Input checks for user-supplied lookup and filter values.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::EpisodesError;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_PAGES: u32 = 50;

fn episode_code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^S\d{2}(E\d{2})?$").expect("static regex"))
}

/// Strip ASCII control characters, trim whitespace, and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, EpisodesError> {
    if input.len() > max_len {
        return Err(EpisodesError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let cleaned: String = input.chars().filter(|c| !c.is_ascii_control()).collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return Err(EpisodesError::InvalidInput(
            "input must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validate an episode name filter.
pub fn validate_name(input: &str) -> Result<String, EpisodesError> {
    sanitize_text(input, MAX_NAME_LENGTH)
}

/// Validate an episode id (must be >= 1).
pub fn validate_episode_id(id: i64) -> Result<i64, EpisodesError> {
    if id < 1 {
        return Err(EpisodesError::InvalidInput(
            "episode id must be >= 1".to_string(),
        ));
    }
    Ok(id)
}

/// Validate a character id (must be >= 1).
pub fn validate_character_id(id: i64) -> Result<i64, EpisodesError> {
    if id < 1 {
        return Err(EpisodesError::InvalidInput(
            "character id must be >= 1".to_string(),
        ));
    }
    Ok(id)
}

/// Validate how many pages to walk (must be 1..=MAX_PAGES).
pub fn validate_pages(pages: u32) -> Result<u32, EpisodesError> {
    if !(1..=MAX_PAGES).contains(&pages) {
        return Err(EpisodesError::InvalidInput(format!(
            "pages must be between 1 and {}",
            MAX_PAGES
        )));
    }
    Ok(pages)
}

/// Validate a season or season/episode code: `S01` or `S01E02`, case-insensitive.
pub fn validate_episode_code(input: &str) -> Result<String, EpisodesError> {
    let code = input.trim().to_uppercase();
    if !episode_code_regex().is_match(&code) {
        return Err(EpisodesError::InvalidInput(format!(
            "invalid episode code '{}'. Expected S01 or S01E02",
            input
        )));
    }
    Ok(code)
}
