use crate::{
    model::{FetchError, RateResponse},
    provider::RateProvider,
};
use anyhow::Result;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Exchange rates from open.er-api.com, or anything serving the same payload.
pub struct OpenErApi {
    conf: OpenErApiConf,
    client: Client,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenErApiConf {
    pub url: String,
    pub currency: String,
    pub delay_ms: u64,
}

impl OpenErApiConf {
    /// Pause applied before each result is handed back. Not a timeout.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl OpenErApi {
    pub fn new(conf: OpenErApiConf) -> Result<OpenErApi> {
        let client = Client::builder()
            .user_agent(concat!("usdbar/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(OpenErApi { conf, client })
    }

    async fn get(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        let res = self.client.get(url).send().await?;
        debug!(provider = %self.name(), status = %res.status(), "Got response");
        Ok(res.bytes().await?.to_vec())
    }
}

#[async_trait::async_trait]
impl RateProvider for OpenErApi {
    fn name(&self) -> String {
        "open-er-api".into()
    }

    async fn fetch_rate(&self) -> Result<f64, FetchError> {
        let url = Url::parse(&self.conf.url).map_err(|e| FetchError::InvalidUrl {
            url: self.conf.url.clone(),
            reason: e.to_string(),
        })?;

        let body = self.get(url).await;
        sleep(self.conf.delay()).await;

        RateResponse::from_body(&body?)?.rate(&self.conf.currency)
    }
}
