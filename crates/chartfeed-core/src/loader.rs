//! One-shot startup loads for the two symbol universes.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::cache::SymbolCache;
use crate::notify::Notifier;
use crate::provider::HistoryProvider;

/// Load the stock universe into the cache.
///
/// Owns the cache's loading flag: set when the request starts, cleared when
/// it settles either way. Failure leaves the universe empty; there is no
/// retry.
pub async fn load_stock_symbols(
    provider: &HistoryProvider,
    cache: &SymbolCache,
    notifier: &dyn Notifier,
) {
    cache.set_loading(true).await;

    match provider.stock_symbols().await {
        Ok(symbols) if !symbols.is_empty() => {
            let count = symbols.len();
            cache.store_stocks(symbols).await;
            tracing::info!(count, "loaded stock symbols");
        }
        Ok(_) => {
            tracing::warn!("stock symbol list came back empty");
        }
        Err(error) => {
            tracing::error!(%error, "failed to load stock symbols");
            notifier.error("Could not load stock symbol list");
        }
    }

    cache.set_loading(false).await;
}

/// Load the option universe into the cache. Never touches the loading flag.
pub async fn load_option_symbols(
    provider: &HistoryProvider,
    cache: &SymbolCache,
    notifier: &dyn Notifier,
) {
    match provider.option_symbols().await {
        Ok(symbols) if !symbols.is_empty() => {
            let count = symbols.len();
            cache.store_options(symbols).await;
            tracing::info!(count, "loaded option symbols");
            notifier.success(&format!("Loaded {count} option symbols"));
        }
        Ok(_) => {
            tracing::warn!("option symbol list came back empty");
        }
        Err(error) => {
            tracing::error!(%error, "failed to load option symbols");
            notifier.error("Could not load option symbol list");
        }
    }
}

/// Spawn both symbol loads concurrently.
///
/// The returned guard aborts whichever load is still in flight when it is
/// dropped, so tearing down the host cancels rather than leaks the requests.
pub fn spawn_symbol_loaders(
    provider: HistoryProvider,
    cache: SymbolCache,
    notifier: Arc<dyn Notifier>,
) -> LoaderGuard {
    let stock_handle = {
        let provider = provider.clone();
        let cache = cache.clone();
        let notifier = Arc::clone(&notifier);
        tokio::spawn(async move {
            load_stock_symbols(&provider, &cache, notifier.as_ref()).await;
        })
    };

    let option_handle = tokio::spawn(async move {
        load_option_symbols(&provider, &cache, notifier.as_ref()).await;
    });

    LoaderGuard {
        stocks: Some(stock_handle),
        options: Some(option_handle),
    }
}

/// Scoped handle for the in-flight symbol loads.
#[derive(Debug)]
pub struct LoaderGuard {
    stocks: Option<JoinHandle<()>>,
    options: Option<JoinHandle<()>>,
}

impl LoaderGuard {
    /// Wait for both loads to settle.
    pub async fn join(mut self) {
        if let Some(handle) = self.stocks.take() {
            let _ = handle.await;
        }
        if let Some(handle) = self.options.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for LoaderGuard {
    fn drop(&mut self) {
        if let Some(handle) = self.stocks.take() {
            handle.abort();
        }
        if let Some(handle) = self.options.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::NoopHttpClient;
    use crate::notify::MemoryNotifier;

    #[tokio::test]
    async fn loading_flag_settles_after_stock_load() {
        let provider = HistoryProvider::new("http://example.test/api", Arc::new(NoopHttpClient));
        let cache = SymbolCache::new();
        let notifier = MemoryNotifier::new();

        load_stock_symbols(&provider, &cache, &notifier).await;

        assert!(!cache.is_loading().await);
        // Empty list: no symbols stored, no notification raised.
        assert!(cache.stocks().await.is_empty());
        assert!(notifier.entries().is_empty());
    }

    #[tokio::test]
    async fn guard_join_waits_for_both_loads() {
        let provider = HistoryProvider::new("http://example.test/api", Arc::new(NoopHttpClient));
        let cache = SymbolCache::new();

        let guard = spawn_symbol_loaders(
            provider,
            cache.clone(),
            Arc::new(MemoryNotifier::new()),
        );
        guard.join().await;

        assert!(!cache.is_loading().await);
    }
}
