use crate::error::{AppError, Result};
use crate::util::time::validate_date;
use dashboard_core::{Credentials, DateRange};

pub const MISSING_FIELDS_MESSAGE: &str = "Please make sure all fields are filled correctly.";

const API_KEY_PREFIX: &str = "sess-";
const API_KEY_SUFFIX_LEN: usize = 40;
const ORG_KEY_PREFIX: &str = "org-";

/// Local format checks performed before any request goes out. Nothing here
/// verifies the keys against the server; a well-formed key can still be
/// rejected upstream.
pub fn validate_inputs(credentials: &Credentials, range: &DateRange) -> Result<()> {
    if credentials.api_key.is_empty()
        || credentials.organization_key.is_empty()
        || range.start.is_empty()
        || range.end.is_empty()
    {
        return Err(AppError::InvalidInput(MISSING_FIELDS_MESSAGE.to_string()));
    }
    validate_api_key(&credentials.api_key)?;
    validate_organization_key(&credentials.organization_key)?;
    validate_date(&range.start)?;
    validate_date(&range.end)?;
    Ok(())
}

pub fn validate_api_key(key: &str) -> Result<()> {
    let valid = key
        .strip_prefix(API_KEY_PREFIX)
        .is_some_and(|suffix| {
            suffix.len() == API_KEY_SUFFIX_LEN
                && suffix.chars().all(|ch| ch.is_ascii_alphanumeric())
        });
    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "Invalid API Key format. It should start with \"{}\" followed by {} alphanumeric characters.",
            API_KEY_PREFIX, API_KEY_SUFFIX_LEN
        )))
    }
}

pub fn validate_organization_key(key: &str) -> Result<()> {
    let valid = key
        .strip_prefix(ORG_KEY_PREFIX)
        .is_some_and(|suffix| {
            !suffix.is_empty() && suffix.chars().all(|ch| ch.is_ascii_alphanumeric())
        });
    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "Invalid Organization Key format. It should start with \"{}\".",
            ORG_KEY_PREFIX
        )))
    }
}
