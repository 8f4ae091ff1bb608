use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::application::errors::{ServiceError, ServiceResult};

pub const PROJECT_NAME: (usize, usize) = (3, 36);
pub const PROJECT_DESCRIPTION_MAX: usize = 256;
pub const MEETING_NAME: (usize, usize) = (3, 64);
pub const ITEM_TITLE: (usize, usize) = (3, 128);
pub const LABEL_TITLE: (usize, usize) = (1, 24);
pub const LONG_TEXT_MAX: usize = 4096;
pub const COMMENT_MAX: usize = 8192;
pub const USER_NAME: (usize, usize) = (3, 32);

// letters and digits of any script plus common punctuation
static EXTENDED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[\p{L}\p{N} _\-.,:;!?'"()\[\]&/+#@%*=]*$"#).unwrap());

static COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static USER_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap());

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Names and titles: bounded length, extended charset, no surrounding spaces.
pub fn title(field: &str, value: &str, (min, max): (usize, usize)) -> ServiceResult<()> {
    let len = char_len(value);
    if len < min || len > max {
        return Err(ServiceError::validation(format!(
            "{field} must be between {min} and {max} characters"
        )));
    }
    if value.starts_with(' ') || value.ends_with(' ') {
        return Err(ServiceError::validation(format!(
            "{field} must not start or end with a space"
        )));
    }
    extended(field, value)
}

/// Short free text restricted to the extended charset.
pub fn short_text(field: &str, value: &str, max: usize) -> ServiceResult<()> {
    if char_len(value) > max {
        return Err(ServiceError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    extended(field, value)
}

/// Markdown bodies: any characters, bounded length.
pub fn long_text(field: &str, value: &str, max: usize) -> ServiceResult<()> {
    if char_len(value) > max {
        return Err(ServiceError::validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

pub fn color(field: &str, value: &str) -> ServiceResult<()> {
    if COLOR_RE.is_match(value) {
        Ok(())
    } else {
        Err(ServiceError::validation(format!(
            "{field} must be a hex color like #aabbcc"
        )))
    }
}

pub fn user_name(value: &str) -> ServiceResult<()> {
    let (min, max) = USER_NAME;
    let len = char_len(value);
    if len < min || len > max {
        return Err(ServiceError::validation(format!(
            "name must be between {min} and {max} characters"
        )));
    }
    if !USER_NAME_RE.is_match(value) {
        return Err(ServiceError::validation(
            "name may only contain letters, digits, '_', '.' and '-'",
        ));
    }
    Ok(())
}

pub fn comment_content(value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation("content must not be empty"));
    }
    long_text("content", value, COMMENT_MAX)
}

pub fn date_range(start: DateTime<Utc>, end: DateTime<Utc>) -> ServiceResult<()> {
    if end < start {
        return Err(ServiceError::validation(
            "end_date must not be before start_date",
        ));
    }
    Ok(())
}

fn extended(field: &str, value: &str) -> ServiceResult<()> {
    if EXTENDED_RE.is_match(value) {
        Ok(())
    } else {
        Err(ServiceError::validation(format!(
            "{field} contains unsupported characters"
        )))
    }
}
