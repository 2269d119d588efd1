use chartfeed_core::{Datafeed, Symbol};

use crate::cli::ResolveArgs;
use crate::error::CliError;
use crate::output::print_json;

pub async fn run(
    args: &ResolveArgs,
    datafeed: &Datafeed,
    json: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let resolved = datafeed.resolve_symbol(&symbol).await;

    if json {
        return print_json(&resolved, pretty);
    }

    println!("symbol:      {}", resolved.name);
    println!("type:        {}", resolved.kind);
    println!("exchange:    {}", resolved.exchange);
    println!("session:     {} ({})", resolved.session, resolved.timezone);
    println!("price scale: {}", resolved.pricescale);
    Ok(())
}
