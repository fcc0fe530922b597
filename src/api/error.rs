use thiserror::Error;

/// Failures talking to the remote recipe directory
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Directory answered {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Malformed directory payload: {0}")]
    Decode(#[from] serde_json::Error),
}
