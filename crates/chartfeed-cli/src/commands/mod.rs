mod bars;
mod capabilities;
mod resolve;
mod search;
mod symbols;

use std::sync::Arc;

use chartfeed_core::{
    spawn_symbol_loaders, Datafeed, HistoryProvider, LogNotifier, Notifier, ReqwestHttpClient,
    SymbolCache,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;

struct Host {
    cache: SymbolCache,
    datafeed: Datafeed,
}

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    if let Command::Capabilities = &cli.command {
        // Static descriptor; no network or symbol load involved.
        return capabilities::run(cli.json, cli.pretty);
    }

    let host = build_host(cli).await;

    match &cli.command {
        Command::Symbols(args) => symbols::run(args, &host.cache, cli.json, cli.pretty).await,
        Command::Search(args) => search::run(args, &host.datafeed, cli.json, cli.pretty).await,
        Command::Resolve(args) => resolve::run(args, &host.datafeed, cli.json, cli.pretty).await,
        Command::Bars(args) => bars::run(args, &host.datafeed, cli.json, cli.pretty).await,
        Command::Capabilities => unreachable!("handled above"),
    }
}

async fn build_host(cli: &Cli) -> Host {
    let http = Arc::new(ReqwestHttpClient::new());
    let provider =
        HistoryProvider::new(cli.api_base.clone(), http).with_timeout_ms(cli.timeout_ms);
    let cache = SymbolCache::new();
    let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier);
    let datafeed = Datafeed::new(cache.clone(), provider.clone(), Arc::clone(&notifier));

    // The CLI host waits for both symbol loads before serving a command, so
    // it never observes the degraded pre-load cache state.
    spawn_symbol_loaders(provider, cache.clone(), notifier)
        .join()
        .await;

    Host { cache, datafeed }
}
