use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::http::{build_url, HttpClient, HttpError, HttpRequest};
use crate::{Bar, Symbol};

/// Errors surfaced by the remote symbol/bar provider client.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    #[error("upstream returned status {status} for {endpoint}: {body}")]
    Status {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error("could not decode {endpoint} payload: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Provider route for bar retrieval; option series live behind a separate
/// endpoint with an identical response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRoute {
    Stock,
    Option,
}

impl BarRoute {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Stock => "ohlc",
            Self::Option => "options-ohlc",
        }
    }
}

#[derive(Debug, Deserialize)]
struct SymbolEntry {
    symbol: String,
}

/// Typed client for the four provider endpoints.
#[derive(Clone)]
pub struct HistoryProvider {
    api_base: String,
    http: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl HistoryProvider {
    pub fn new(api_base: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            api_base: api_base.into(),
            http,
            timeout_ms: 10_000,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// `GET {api_base}/symbols` — the stock universe.
    pub async fn stock_symbols(&self) -> Result<Vec<Symbol>, ProviderError> {
        self.symbol_list("symbols").await
    }

    /// `GET {api_base}/options-symbols` — the option universe.
    pub async fn option_symbols(&self) -> Result<Vec<Symbol>, ProviderError> {
        self.symbol_list("options-symbols").await
    }

    async fn symbol_list(&self, endpoint: &'static str) -> Result<Vec<Symbol>, ProviderError> {
        let body = self.fetch(endpoint, &[]).await?;
        let entries: Vec<SymbolEntry> =
            serde_json::from_str(&body).map_err(|source| ProviderError::Decode {
                endpoint,
                source,
            })?;

        let mut symbols = Vec::with_capacity(entries.len());
        for entry in entries {
            match Symbol::parse(&entry.symbol) {
                Ok(symbol) => symbols.push(symbol),
                Err(error) => {
                    tracing::warn!(raw = %entry.symbol, %error, "skipping unparseable symbol")
                }
            }
        }
        Ok(symbols)
    }

    /// Fetch up to `count_back` bars ending at `to` (epoch seconds).
    ///
    /// An empty or non-array body decodes to an empty vec so the caller can
    /// take the no-data path; array elements that fail to decode are skipped.
    pub async fn bars(
        &self,
        route: BarRoute,
        symbol: &Symbol,
        to: i64,
        count_back: usize,
    ) -> Result<Vec<Bar>, ProviderError> {
        let endpoint = route.path();
        let body = self
            .fetch(
                endpoint,
                &[
                    ("symbol", symbol.as_str().to_owned()),
                    ("to", to.to_string()),
                    ("countBack", count_back.to_string()),
                ],
            )
            .await?;

        let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) else {
            tracing::warn!(%symbol, endpoint, "bars payload is not valid JSON");
            return Ok(Vec::new());
        };
        let Some(elements) = value.as_array() else {
            tracing::warn!(%symbol, endpoint, "bars payload is not an array");
            return Ok(Vec::new());
        };

        let mut bars = Vec::with_capacity(elements.len());
        for element in elements {
            match serde_json::from_value::<Bar>(element.clone()) {
                Ok(bar) => bars.push(bar),
                Err(error) => tracing::warn!(%symbol, endpoint, %error, "skipping malformed bar"),
            }
        }
        Ok(bars)
    }

    async fn fetch(
        &self,
        endpoint: &'static str,
        params: &[(&str, String)],
    ) -> Result<String, ProviderError> {
        let url = build_url(&self.api_base, endpoint, params);
        tracing::debug!(%url, "provider request");

        let request = HttpRequest::get(url).with_timeout_ms(self.timeout_ms);
        let response = self.http.execute(request).await?;

        if !response.is_success() {
            return Err(ProviderError::Status {
                endpoint,
                status: response.status,
                body: response.body,
            });
        }

        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::NoopHttpClient;

    #[tokio::test]
    async fn empty_symbol_list_decodes_to_empty_vec() {
        let provider = HistoryProvider::new("http://example.test/api", Arc::new(NoopHttpClient));
        let symbols = provider.stock_symbols().await.expect("must decode");
        assert!(symbols.is_empty());
    }

    #[tokio::test]
    async fn empty_bars_body_is_not_an_error() {
        let provider = HistoryProvider::new("http://example.test/api", Arc::new(NoopHttpClient));
        let symbol = Symbol::parse("TCS").expect("valid");
        let bars = provider
            .bars(BarRoute::Stock, &symbol, 1_700_000_000, 2_000)
            .await
            .expect("must succeed");
        assert!(bars.is_empty());
    }
}
