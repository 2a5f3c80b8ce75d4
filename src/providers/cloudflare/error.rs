use crate::providers::cloudflare::types::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudflareError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<ApiError> for CloudflareError {
    fn from(err: ApiError) -> Self {
        CloudflareError::Api {
            code: err.code,
            message: err.message,
        }
    }
}

use crate::error::Error;

pub fn map_error(e: CloudflareError) -> Error {
    use CloudflareError::*;
    match e {
        Http(err) => Error::Transport(err.to_string()),
        Api { code, message } => Error::Transport(format!("Cloudflare API error {code}: {message}")),
        UnexpectedResponse(msg) => Error::Transport(msg),
    }
}
