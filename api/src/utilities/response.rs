use reqwest::StatusCode;
use serde_json::Value;

use crate::error::FetchError;

/// Any non-2xx status stops the run before the body is looked at.
pub fn check_status(url: &str, status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::HttpStatus {
            url: url.to_string(),
            status,
        })
    }
}

pub fn decode_record(url: &str, body: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
