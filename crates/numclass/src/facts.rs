use crate::prelude::*;
use numclass_core::fact::{
    armstrong_fact, decode_fact, numbers_api_url, FactFailure, FactOutcome,
    DEFAULT_NUMBERS_API_URL,
};
use std::time::Duration;

/// Trivia provider settings shared by the server and the CLI
#[derive(Debug, Clone, clap::Args)]
pub struct FactsOptions {
    /// Base URL of the Numbers API trivia provider
    #[arg(long, env = "NUMBERS_API_BASE_URL", default_value = DEFAULT_NUMBERS_API_URL)]
    pub facts_url: String,

    /// Seconds to wait for the trivia provider before giving up
    #[arg(long, env = "FACT_TIMEOUT_SECS", default_value = "5")]
    pub fact_timeout: u64,
}

impl FactsOptions {
    pub fn client(&self) -> Result<NumbersApi> {
        NumbersApi::new(
            self.facts_url.clone(),
            Duration::from_secs(self.fact_timeout),
        )
    }
}

/// Client for the Numbers API trivia service
#[derive(Debug, Clone)]
pub struct NumbersApi {
    client: reqwest::Client,
    base_url: String,
}

impl NumbersApi {
    /// Create a client that gives up on the provider after `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("numclass/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve the fun fact for `n`
    ///
    /// Armstrong numbers get a synthesized explanation without touching the
    /// network; everything else is looked up remotely.
    pub async fn resolve(&self, n: i64) -> FactOutcome {
        match armstrong_fact(n) {
            Some(text) => FactOutcome::Synthesized(text),
            None => self.fetch(n).await,
        }
    }

    /// Fetch the math fact for `n` from the provider
    ///
    /// Single attempt. Every failure is returned as
    /// [`FactOutcome::Unavailable`] and logged, never raised.
    pub async fn fetch(&self, n: i64) -> FactOutcome {
        let url = numbers_api_url(&self.base_url, n);
        log::debug!("Fetching fact for {n} from {url}");

        let outcome = match self.try_fetch(&url).await {
            Ok(text) => FactOutcome::Fetched(text),
            Err(failure) => FactOutcome::Unavailable(failure),
        };

        if let FactOutcome::Unavailable(failure) = &outcome {
            log::warn!("No fun fact for {n}: {failure}");
        }

        outcome
    }

    async fn try_fetch(&self, url: &str) -> std::result::Result<String, FactFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FactFailure::Network(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(FactFailure::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FactFailure::Network(e.to_string()))?;

        decode_fact(&body)
    }
}
