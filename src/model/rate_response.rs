use super::FetchError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct RateResponse {
    pub rates: HashMap<String, f64>,
}

impl RateResponse {
    pub fn from_body(body: &[u8]) -> Result<RateResponse, FetchError> {
        if body.is_empty() {
            return Err(FetchError::NoData);
        }

        Ok(serde_json::from_slice(body)?)
    }

    pub fn rate(&self, currency: &str) -> Result<f64, FetchError> {
        self.rates
            .get(currency)
            .copied()
            .ok_or_else(|| FetchError::CurrencyNotFound(currency.to_string()))
    }
}
