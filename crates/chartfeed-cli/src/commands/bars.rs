use chartfeed_core::{Datafeed, HistoryResponse, PeriodParams, Resolution, Symbol};

use crate::cli::BarsArgs;
use crate::error::CliError;
use crate::output::print_json;

pub async fn run(
    args: &BarsArgs,
    datafeed: &Datafeed,
    json: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    let resolution: Resolution = args.resolution.parse()?;
    let params = PeriodParams {
        to: args.to,
        count_back: args.count_back,
        first_request: true,
    };

    let response = datafeed.get_bars(&symbol, resolution, &params).await?;

    if json {
        return print_json(&response, pretty);
    }

    match &response {
        HistoryResponse::NoData => println!("no data for {symbol} [{resolution}]"),
        HistoryResponse::Bars(bars) => {
            for bar in bars {
                println!(
                    "{:>14}  o={:<10} h={:<10} l={:<10} c={:<10} v={}",
                    bar.time, bar.open, bar.high, bar.low, bar.close, bar.volume
                );
            }
            println!("{} bar(s) for {symbol} [{resolution}]", bars.len());
        }
    }
    Ok(())
}
