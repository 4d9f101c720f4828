use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: HTTP {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// True when the server answered 404 for the targeted item.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Api { status, .. } if *status == reqwest::StatusCode::NOT_FOUND)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
