use serde::Serialize;

use chartfeed_core::{Symbol, SymbolCache, FALLBACK_SYMBOL};

use crate::cli::{KindArg, SymbolsArgs};
use crate::error::CliError;
use crate::output::print_json;

#[derive(Debug, Serialize)]
struct SymbolsResponse {
    default_symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    stocks: Option<Vec<Symbol>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<Vec<Symbol>>,
}

pub async fn run(
    args: &SymbolsArgs,
    cache: &SymbolCache,
    json: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let default_symbol = cache
        .default_symbol()
        .await
        .map(String::from)
        .unwrap_or_else(|| String::from(FALLBACK_SYMBOL));

    let stocks = match args.kind {
        None | Some(KindArg::Stock) => Some(cache.stocks().await),
        Some(KindArg::Option) => None,
    };
    let options = match args.kind {
        None | Some(KindArg::Option) => Some(cache.options().await),
        Some(KindArg::Stock) => None,
    };

    if json {
        return print_json(
            &SymbolsResponse {
                default_symbol,
                stocks,
                options,
            },
            pretty,
        );
    }

    println!("default symbol: {default_symbol}");
    if let Some(stocks) = stocks {
        println!("stocks ({}):", stocks.len());
        for symbol in stocks {
            println!("  {symbol}");
        }
    }
    if let Some(options) = options {
        println!("options ({}):", options.len());
        for symbol in options {
            println!("  {symbol}");
        }
    }
    Ok(())
}
