//! In-memory symbol universes shared between the loaders and the datafeed.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::Symbol;

#[derive(Debug, Default)]
struct CacheInner {
    // Sorted, deduplicated lists for ordered iteration plus hash sets for
    // membership checks. Stock fields are written only by `store_stocks`,
    // option fields only by `store_options`.
    stocks: Vec<Symbol>,
    stock_set: HashSet<Symbol>,
    options: Vec<Symbol>,
    option_set: HashSet<Symbol>,
    default_symbol: Option<Symbol>,
    loading: bool,
}

/// Cheap-to-clone handle over the shared symbol cache.
///
/// Created empty by the host, populated once by the two symbol loaders, and
/// read by every datafeed callback. Readers must tolerate an unpopulated
/// cache: before the loads settle, searches come back empty and every symbol
/// classifies as a stock.
#[derive(Debug, Clone, Default)]
pub struct SymbolCache {
    inner: Arc<RwLock<CacheInner>>,
}

impl SymbolCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the stock universe: sort, dedupe, and designate the
    /// lexicographically-first entry as the default symbol on the first
    /// non-empty store.
    pub async fn store_stocks(&self, mut symbols: Vec<Symbol>) {
        symbols.sort();
        symbols.dedup();

        let mut inner = self.inner.write().await;
        if inner.default_symbol.is_none() {
            inner.default_symbol = symbols.first().cloned();
        }
        inner.stock_set = symbols.iter().cloned().collect();
        inner.stocks = symbols;
    }

    /// Store the option universe: sort and dedupe. Never touches the
    /// default symbol; only a stock load may designate it.
    pub async fn store_options(&self, mut symbols: Vec<Symbol>) {
        symbols.sort();
        symbols.dedup();

        let mut inner = self.inner.write().await;
        inner.option_set = symbols.iter().cloned().collect();
        inner.options = symbols;
    }

    pub async fn set_loading(&self, loading: bool) {
        self.inner.write().await.loading = loading;
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.loading
    }

    pub async fn stocks(&self) -> Vec<Symbol> {
        self.inner.read().await.stocks.clone()
    }

    pub async fn options(&self) -> Vec<Symbol> {
        self.inner.read().await.options.clone()
    }

    /// Both universes under a single read lock, for search pooling.
    pub async fn universe(&self) -> (Vec<Symbol>, Vec<Symbol>) {
        let inner = self.inner.read().await;
        (inner.stocks.clone(), inner.options.clone())
    }

    pub async fn is_option(&self, symbol: &Symbol) -> bool {
        self.inner.read().await.option_set.contains(symbol)
    }

    pub async fn is_stock(&self, symbol: &Symbol) -> bool {
        self.inner.read().await.stock_set.contains(symbol)
    }

    pub async fn default_symbol(&self) -> Option<Symbol> {
        self.inner.read().await.default_symbol.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(raw: &[&str]) -> Vec<Symbol> {
        raw.iter()
            .map(|s| Symbol::parse(s).expect("valid symbol"))
            .collect()
    }

    #[tokio::test]
    async fn stores_sorted_deduplicated_stocks_and_picks_default() {
        let cache = SymbolCache::new();
        cache
            .store_stocks(symbols(&["TCS", "RELIANCE", "TCS", "INFY"]))
            .await;

        let stocks = cache.stocks().await;
        assert_eq!(
            stocks.iter().map(Symbol::as_str).collect::<Vec<_>>(),
            vec!["INFY", "RELIANCE", "TCS"]
        );
        assert_eq!(
            cache.default_symbol().await.map(String::from),
            Some(String::from("INFY"))
        );
    }

    #[tokio::test]
    async fn option_store_never_sets_default_symbol() {
        let cache = SymbolCache::new();
        cache.store_options(symbols(&["NIFTY25000CE"])).await;
        assert!(cache.default_symbol().await.is_none());

        let probe = Symbol::parse("NIFTY25000CE").expect("valid");
        assert!(cache.is_option(&probe).await);
        assert!(!cache.is_stock(&probe).await);
    }

    #[tokio::test]
    async fn empty_cache_classifies_nothing() {
        let cache = SymbolCache::new();
        let probe = Symbol::parse("RELIANCE").expect("valid");
        assert!(!cache.is_option(&probe).await);
        assert!(!cache.is_stock(&probe).await);
        assert!(cache.stocks().await.is_empty());
    }
}
