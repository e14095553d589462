use std::time::Duration;

use futures_core::future::BoxFuture;
use reqwest::{Client, Url};
use tokio::time::timeout;

use crate::config::LookupConfig;
use crate::lookup::error::LookupError;
use crate::lookup::types::QueryResponse;

/// Source of nth-prime answers.
///
/// `Ok(None)` means the service answered but had no usable value;
/// `Err` means the request itself went wrong.
pub trait PrimeLookup: Send + Sync {
    fn nth_prime(&self, n: i64) -> BoxFuture<'_, Result<Option<i64>, LookupError>>;
}

/// Query text sent to the service for the `n`th prime.
pub fn nth_prime_query(n: i64) -> String {
    format!("prime {}", n)
}

/// Client for the WolframAlpha full results API.
pub struct WolframAlphaClient {
    client: Client,
    endpoint: Url,
    app_id: String,
    request_timeout: Duration,
}

impl WolframAlphaClient {
    pub fn new(config: &LookupConfig) -> Result<Self, LookupError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|e| LookupError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                message: e.to_string(),
            })?;

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(|e| LookupError::Client { source: e })?;

        Ok(Self {
            client,
            endpoint,
            app_id: config.app_id.clone(),
            request_timeout: Duration::from_secs(config.timeout_seconds.into()),
        })
    }

    /// Full request URL for `query`.
    pub fn query_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("input", query)
            .append_pair("format", "plaintext")
            .append_pair("output", "JSON")
            .append_pair("appid", &self.app_id);
        url
    }

    /// Run `query` and decode the response.
    pub async fn query(&self, query: &str) -> Result<QueryResponse, LookupError> {
        match timeout(self.request_timeout, self.do_query(query)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_query(&self, query: &str) -> Result<QueryResponse, LookupError> {
        let response = self
            .client
            .get(self.query_url(query))
            .send()
            .await
            .map_err(|e| LookupError::Request {
                query: query.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| LookupError::Request {
            query: query.to_string(),
            source: e,
        })?;

        serde_json::from_slice(&body).map_err(|e| LookupError::Decode { source: e })
    }
}

impl PrimeLookup for WolframAlphaClient {
    fn nth_prime(&self, n: i64) -> BoxFuture<'_, Result<Option<i64>, LookupError>> {
        Box::pin(async move {
            let query = nth_prime_query(n);
            let response = self.query(&query).await?;
            let answer = response.primary_answer();
            tracing::debug!(n, ?answer, "Nth prime lookup finished");
            Ok(answer)
        })
    }
}
