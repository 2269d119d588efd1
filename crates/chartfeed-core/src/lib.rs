//! Core contracts for chartfeed.
//!
//! This crate contains:
//! - Canonical domain types (symbols, bars, resolutions, instrument kinds)
//! - The shared symbol cache and its one-shot loaders
//! - The typed client for the remote symbol/bar provider
//! - The datafeed adapter implementing the chart host's callback contract

pub mod cache;
pub mod datafeed;
pub mod domain;
pub mod error;
pub mod http;
pub mod loader;
pub mod notify;
pub mod provider;

pub use cache::SymbolCache;
pub use datafeed::{
    Datafeed, DatafeedCapabilities, DatafeedError, ExchangeDescriptor, HistoryResponse,
    PeriodParams, ResolvedSymbol, SearchResult, SymbolTypeDescriptor, DEFAULT_COUNT_BACK,
    EXCHANGE, FALLBACK_SYMBOL, SEARCH_RESULT_LIMIT, SESSION, TIMEZONE,
};
pub use domain::{is_ascending, is_index_ticker, sort_ascending, Bar, InstrumentKind, Resolution, Symbol, INDEX_TICKERS};
pub use error::ValidationError;
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
pub use loader::{load_option_symbols, load_stock_symbols, spawn_symbol_loaders, LoaderGuard};
pub use notify::{LogNotifier, MemoryNotifier, Notifier, NotifyLevel, NullNotifier};
pub use provider::{BarRoute, HistoryProvider, ProviderError};
