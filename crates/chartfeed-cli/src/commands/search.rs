use chartfeed_core::Datafeed;

use crate::cli::SearchArgs;
use crate::error::CliError;
use crate::output::print_json;

pub async fn run(
    args: &SearchArgs,
    datafeed: &Datafeed,
    json: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let kind = args.kind.map(Into::into);
    let results = datafeed.search_symbols(&args.query, kind).await;

    if json {
        return print_json(&results, pretty);
    }

    if results.is_empty() {
        println!("no matches for '{}'", args.query);
        return Ok(());
    }

    for result in &results {
        println!("{:<24} {:<8} {}", result.symbol, result.kind, result.exchange);
    }
    println!("{} match(es)", results.len());
    Ok(())
}
