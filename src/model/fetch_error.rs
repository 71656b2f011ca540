#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("response body is empty")]
    NoData,
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("currency {0} not found in response")]
    CurrencyNotFound(String),
}
