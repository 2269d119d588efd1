//! The datafeed adapter: the fixed callback surface a charting host
//! requires, backed by the symbol cache and the remote history provider.

use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;

use crate::cache::SymbolCache;
use crate::domain::{is_index_ticker, sort_ascending, Bar, InstrumentKind, Resolution, Symbol};
use crate::notify::Notifier;
use crate::provider::{BarRoute, HistoryProvider, ProviderError};

pub const EXCHANGE: &str = "NSE";
pub const EXCHANGE_DESCRIPTION: &str = "National Stock Exchange";
pub const SESSION: &str = "0915-1531";
pub const TIMEZONE: &str = "Asia/Kolkata";

/// Search responses are capped regardless of universe size.
pub const SEARCH_RESULT_LIMIT: usize = 50;

/// Bars requested when the host does not say how many it wants.
pub const DEFAULT_COUNT_BACK: usize = 2_000;

/// Fallback chart symbol used until the stock load designates a default.
pub const FALLBACK_SYMBOL: &str = "RELIANCE";

/// Exchange entry in the capability descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeDescriptor {
    pub value: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
}

/// Symbol-type entry in the capability descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolTypeDescriptor {
    pub name: &'static str,
    pub value: InstrumentKind,
}

/// Static capability descriptor handed to the host during readiness
/// negotiation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatafeedCapabilities {
    pub supported_resolutions: Vec<Resolution>,
    pub supports_marks: bool,
    pub supports_timescale_marks: bool,
    pub supports_time: bool,
    pub exchanges: Vec<ExchangeDescriptor>,
    pub symbols_types: Vec<SymbolTypeDescriptor>,
}

impl DatafeedCapabilities {
    pub fn descriptor() -> Self {
        Self {
            supported_resolutions: Resolution::ALL.to_vec(),
            supports_marks: false,
            supports_timescale_marks: false,
            supports_time: true,
            exchanges: vec![ExchangeDescriptor {
                value: EXCHANGE,
                name: EXCHANGE,
                desc: EXCHANGE_DESCRIPTION,
            }],
            symbols_types: vec![
                SymbolTypeDescriptor {
                    name: "Stock",
                    value: InstrumentKind::Stock,
                },
                SymbolTypeDescriptor {
                    name: "Option",
                    value: InstrumentKind::Option,
                },
            ],
        }
    }
}

/// One symbol-search match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub symbol: Symbol,
    pub full_name: String,
    pub description: String,
    pub exchange: &'static str,
    pub ticker: Symbol,
    #[serde(rename = "type")]
    pub kind: InstrumentKind,
}

/// Resolved symbol descriptor with fixed trading-session metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSymbol {
    pub name: Symbol,
    pub ticker: Symbol,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: InstrumentKind,
    pub session: &'static str,
    pub timezone: &'static str,
    pub exchange: &'static str,
    pub minmov: u32,
    pub pricescale: u32,
    pub has_intraday: bool,
    pub has_daily: bool,
    pub has_weekly_and_monthly: bool,
    pub supported_resolutions: Vec<Resolution>,
    pub volume_precision: u32,
    pub data_status: &'static str,
}

/// Host-supplied window for a history request. `to` is epoch seconds and
/// defaults to now; `count_back` defaults to [`DEFAULT_COUNT_BACK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodParams {
    pub to: Option<i64>,
    pub count_back: Option<usize>,
    pub first_request: bool,
}

impl PeriodParams {
    pub fn first(count_back: Option<usize>) -> Self {
        Self {
            to: None,
            count_back,
            first_request: true,
        }
    }
}

/// Outcome of a history request: bars in ascending time order, or a
/// distinct no-data signal the host uses to stop paginating.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "bars")]
pub enum HistoryResponse {
    Bars(Vec<Bar>),
    NoData,
}

impl HistoryResponse {
    pub fn bars(&self) -> &[Bar] {
        match self {
            Self::Bars(bars) => bars,
            Self::NoData => &[],
        }
    }

    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }
}

/// Error reported to the host's error channel when a history request fails.
#[derive(Debug, Error)]
pub enum DatafeedError {
    #[error("history request for '{symbol}' failed: {source}")]
    History {
        symbol: Symbol,
        #[source]
        source: ProviderError,
    },
}

/// The datafeed adapter.
///
/// Holds the shared symbol cache and the provider client; every operation
/// tolerates an unpopulated cache (spec'd read-before-write race): searches
/// come back empty and unknown symbols classify as stocks.
pub struct Datafeed {
    cache: SymbolCache,
    provider: HistoryProvider,
    notifier: Arc<dyn Notifier>,
}

impl Datafeed {
    pub fn new(cache: SymbolCache, provider: HistoryProvider, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            cache,
            provider,
            notifier,
        }
    }

    /// Readiness negotiation: a static descriptor.
    pub fn capabilities(&self) -> DatafeedCapabilities {
        DatafeedCapabilities::descriptor()
    }

    /// Case-insensitive substring search over the cached universes.
    ///
    /// A blank query yields nothing. With no kind filter both universes are
    /// pooled, stocks first, deduplicated; matches are classified by
    /// option-set membership (option wins when a symbol is in both). Results
    /// keep encounter order and are capped at [`SEARCH_RESULT_LIMIT`].
    pub async fn search_symbols(
        &self,
        query: &str,
        kind: Option<InstrumentKind>,
    ) -> Vec<SearchResult> {
        let query = query.trim().to_ascii_uppercase();
        if query.is_empty() {
            return Vec::new();
        }

        let (stocks, options) = self.cache.universe().await;
        let option_set: HashSet<&Symbol> = options.iter().collect();

        let mut pool: Vec<&Symbol> = Vec::new();
        if matches!(kind, None | Some(InstrumentKind::Stock)) {
            pool.extend(stocks.iter());
        }
        if matches!(kind, None | Some(InstrumentKind::Option)) {
            pool.extend(options.iter());
        }

        let mut seen: HashSet<&Symbol> = HashSet::new();
        let mut results = Vec::new();
        for symbol in pool {
            if !symbol.contains(&query) || !seen.insert(symbol) {
                continue;
            }

            let kind = if option_set.contains(symbol) {
                InstrumentKind::Option
            } else {
                InstrumentKind::Stock
            };
            results.push(SearchResult {
                symbol: symbol.clone(),
                full_name: symbol.as_str().to_owned(),
                description: symbol.as_str().to_owned(),
                exchange: EXCHANGE,
                ticker: symbol.clone(),
                kind,
            });

            if results.len() >= SEARCH_RESULT_LIMIT {
                break;
            }
        }
        results
    }

    /// Classify a symbol and return its fixed session descriptor.
    ///
    /// Precedence: index-ticker pattern, then option-set membership, then
    /// stock. Options trade at a price scale of 100; everything else at 1.
    pub async fn resolve_symbol(&self, name: &Symbol) -> ResolvedSymbol {
        let kind = if is_index_ticker(name) {
            InstrumentKind::Index
        } else if self.cache.is_option(name).await {
            InstrumentKind::Option
        } else {
            InstrumentKind::Stock
        };

        let pricescale = match kind {
            InstrumentKind::Option => 100,
            InstrumentKind::Stock | InstrumentKind::Index => 1,
        };

        ResolvedSymbol {
            name: name.clone(),
            ticker: name.clone(),
            description: name.as_str().to_owned(),
            kind,
            session: SESSION,
            timezone: TIMEZONE,
            exchange: EXCHANGE,
            minmov: 1,
            pricescale,
            has_intraday: true,
            has_daily: true,
            has_weekly_and_monthly: true,
            supported_resolutions: Resolution::ALL.to_vec(),
            volume_precision: 0,
            data_status: "streaming",
        }
    }

    /// Fetch history bars, routed by option-set membership.
    ///
    /// Empty provider responses signal no-data rather than an error. Bars
    /// are always returned ascending by time. Failures are reported on the
    /// error channel; the first request for a symbol additionally raises a
    /// user notification.
    pub async fn get_bars(
        &self,
        symbol: &Symbol,
        resolution: Resolution,
        params: &PeriodParams,
    ) -> Result<HistoryResponse, DatafeedError> {
        let route = if self.cache.is_option(symbol).await {
            BarRoute::Option
        } else {
            BarRoute::Stock
        };
        let to = params.to.unwrap_or_else(now_epoch_seconds);
        let count_back = params.count_back.unwrap_or(DEFAULT_COUNT_BACK);

        tracing::debug!(%symbol, %resolution, ?route, to, count_back, "requesting history");

        match self.provider.bars(route, symbol, to, count_back).await {
            Ok(bars) if bars.is_empty() => {
                tracing::warn!(%symbol, "no history data");
                Ok(HistoryResponse::NoData)
            }
            Ok(mut bars) => {
                sort_ascending(&mut bars);
                tracing::info!(%symbol, count = bars.len(), "loaded history bars");
                Ok(HistoryResponse::Bars(bars))
            }
            Err(source) => {
                tracing::error!(%symbol, %source, "history request failed");
                if params.first_request {
                    self.notifier
                        .error(&format!("Failed to load {symbol}: {source}"));
                }
                Err(DatafeedError::History {
                    symbol: symbol.clone(),
                    source,
                })
            }
        }
    }

    /// Live streaming is unsupported; the host's subscription is accepted
    /// and ignored.
    pub fn subscribe_bars(&self, _symbol: &Symbol, _resolution: Resolution, _subscriber_id: &str) {}

    pub fn unsubscribe_bars(&self, _subscriber_id: &str) {}
}

fn now_epoch_seconds() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}
