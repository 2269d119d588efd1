//! Behavior tests for the startup symbol loads and the shared cache.

use std::sync::Arc;

use chartfeed_core::{
    load_option_symbols, load_stock_symbols, spawn_symbol_loaders, HistoryProvider,
    MemoryNotifier, NotifyLevel, Symbol, SymbolCache,
};
use chartfeed_tests::{symbol_list_body, ScriptedHttpClient};

const API_BASE: &str = "http://provider.test/api";

fn provider(client: ScriptedHttpClient) -> HistoryProvider {
    HistoryProvider::new(API_BASE, Arc::new(client))
}

#[tokio::test]
async fn stock_load_normalizes_sorts_and_dedupes() {
    // Given: a provider emitting mixed-case, unsorted, duplicated symbols
    let client = ScriptedHttpClient::new().ok(
        "/symbols",
        &symbol_list_body(&["tcs", "RELIANCE", "Tcs", "infy"]),
    );
    let cache = SymbolCache::new();
    let notifier = MemoryNotifier::new();

    // When: the stock load runs
    load_stock_symbols(&provider(client), &cache, &notifier).await;

    // Then: the universe is uppercase, sorted, deduplicated
    let stocks = cache.stocks().await;
    assert_eq!(
        stocks.iter().map(Symbol::as_str).collect::<Vec<_>>(),
        vec!["INFY", "RELIANCE", "TCS"]
    );
    // And the lexicographically-first stock becomes the default symbol
    assert_eq!(
        cache.default_symbol().await.map(String::from),
        Some(String::from("INFY"))
    );
    assert!(!cache.is_loading().await);
}

#[tokio::test]
async fn stock_load_failure_leaves_universe_empty_and_notifies() {
    let client = ScriptedHttpClient::new().status("/symbols", 503, "unavailable");
    let cache = SymbolCache::new();
    let notifier = MemoryNotifier::new();

    load_stock_symbols(&provider(client), &cache, &notifier).await;

    assert!(cache.stocks().await.is_empty());
    assert!(cache.default_symbol().await.is_none());
    assert!(!cache.is_loading().await, "flag clears even on failure");
    assert_eq!(notifier.errors().len(), 1);
}

#[tokio::test]
async fn option_load_success_reports_the_loaded_count() {
    let client = ScriptedHttpClient::new().ok(
        "/options-symbols",
        &symbol_list_body(&["NIFTY25000CE", "NIFTY25000PE"]),
    );
    let cache = SymbolCache::new();
    let notifier = MemoryNotifier::new();

    load_option_symbols(&provider(client), &cache, &notifier).await;

    assert_eq!(cache.options().await.len(), 2);
    let entries = notifier.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, NotifyLevel::Success);
    assert!(entries[0].1.contains('2'));
}

#[tokio::test]
async fn option_load_never_designates_the_default_symbol() {
    let client =
        ScriptedHttpClient::new().ok("/options-symbols", &symbol_list_body(&["NIFTY25000CE"]));
    let cache = SymbolCache::new();

    load_option_symbols(&provider(client), &cache, &MemoryNotifier::new()).await;

    assert!(cache.default_symbol().await.is_none());
}

#[tokio::test]
async fn one_failing_load_does_not_block_the_other() {
    // Given: stocks endpoint down, options endpoint healthy
    let client = ScriptedHttpClient::new()
        .ok("/options-symbols", &symbol_list_body(&["BANKNIFTY50000CE"]))
        .fail("/symbols", "connection refused");
    let cache = SymbolCache::new();
    let notifier = Arc::new(MemoryNotifier::new());

    // When: both loads run concurrently
    let guard = spawn_symbol_loaders(provider(client), cache.clone(), notifier.clone());
    guard.join().await;

    // Then: options are populated, stocks stay empty, one error notification
    assert!(cache.stocks().await.is_empty());
    assert_eq!(cache.options().await.len(), 1);
    assert_eq!(notifier.errors().len(), 1);
    assert!(!cache.is_loading().await);
}

#[tokio::test]
async fn symbol_in_both_universes_is_member_of_each_set() {
    // Disjointness is not enforced; precedence rules handle the overlap.
    let client = ScriptedHttpClient::new()
        .ok("/options-symbols", &symbol_list_body(&["ACME"]))
        .ok("/symbols", &symbol_list_body(&["ACME"]));
    let cache = SymbolCache::new();

    spawn_symbol_loaders(
        provider(client),
        cache.clone(),
        Arc::new(MemoryNotifier::new()),
    )
    .join()
    .await;

    let probe = Symbol::parse("ACME").expect("valid");
    assert!(cache.is_stock(&probe).await);
    assert!(cache.is_option(&probe).await);
}
