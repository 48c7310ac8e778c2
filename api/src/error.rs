use thiserror::Error;

/// Every way a serial run can stop. None of them are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("response from {url} is not valid JSON")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("user record from {url} has no usable `{field}` field")]
    Schema { url: String, field: &'static str },

    #[error("invalid endpoint url {0:?}")]
    InvalidEndpoint(String),

    #[error("failed to write report line")]
    Output(#[from] std::io::Error),
}

impl FetchError {
    /// Url of the endpoint the error came from, if any.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Network { url, .. }
            | FetchError::HttpStatus { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::Schema { url, .. } => Some(url),
            FetchError::InvalidEndpoint(_) | FetchError::Output(_) => None,
        }
    }
}
