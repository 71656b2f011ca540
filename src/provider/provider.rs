use crate::model::FetchError;

/// Source of the current exchange rate. Each call is a single attempt.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync {
    fn name(&self) -> String;

    async fn fetch_rate(&self) -> Result<f64, FetchError>;
}
