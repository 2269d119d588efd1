use chartfeed_core::DatafeedCapabilities;

use crate::error::CliError;
use crate::output::print_json;

pub fn run(json: bool, pretty: bool) -> Result<(), CliError> {
    let capabilities = DatafeedCapabilities::descriptor();

    if json {
        return print_json(&capabilities, pretty);
    }

    let resolutions = capabilities
        .supported_resolutions
        .iter()
        .map(|resolution| resolution.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    println!("resolutions:  {resolutions}");
    for exchange in &capabilities.exchanges {
        println!("exchange:     {} ({})", exchange.value, exchange.desc);
    }
    for symbol_type in &capabilities.symbols_types {
        println!("symbol type:  {}", symbol_type.value);
    }
    println!("marks:        {}", capabilities.supports_marks);
    println!("time support: {}", capabilities.supports_time);
    Ok(())
}
