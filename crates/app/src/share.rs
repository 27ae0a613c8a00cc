use url::Url;

use crate::error::{AppError, Result};
use dashboard_core::{Credentials, DateRange};

const API_KEY_PARAM: &str = "apiKey";
const ORG_KEY_PARAM: &str = "organizationKey";
const START_PARAM: &str = "startDate";
const END_PARAM: &str = "endDate";

/// Inputs recovered from a share link. Absent parameters stay `None` so
/// callers can layer link values over saved ones (link wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoredInputs {
    pub api_key: Option<String>,
    pub organization_key: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Serialize the current inputs as query parameters on the dashboard URL.
/// Empty fields are omitted.
pub fn share_link(base: &str, credentials: &Credentials, range: &DateRange) -> Result<String> {
    let mut url = parse_url(base)?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        if !credentials.api_key.is_empty() {
            pairs.append_pair(API_KEY_PARAM, &credentials.api_key);
        }
        if !credentials.organization_key.is_empty() {
            pairs.append_pair(ORG_KEY_PARAM, &credentials.organization_key);
        }
        if !range.start.is_empty() {
            pairs.append_pair(START_PARAM, &range.start);
        }
        if !range.end.is_empty() {
            pairs.append_pair(END_PARAM, &range.end);
        }
    }
    Ok(url.to_string())
}

/// Parse a share link back into inputs.
pub fn restore(link: &str) -> Result<RestoredInputs> {
    let url = parse_url(link)?;
    let mut inputs = RestoredInputs::default();
    for (key, value) in url.query_pairs() {
        let value = value.into_owned();
        match key.as_ref() {
            API_KEY_PARAM => inputs.api_key = Some(value),
            ORG_KEY_PARAM => inputs.organization_key = Some(value),
            START_PARAM => inputs.start_date = Some(value),
            END_PARAM => inputs.end_date = Some(value),
            _ => {}
        }
    }
    Ok(inputs)
}

fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value).map_err(|err| AppError::InvalidInput(format!("invalid url {}: {}", value, err)))
}
