use clap::{Args, Parser, Subcommand, ValueEnum};

use chartfeed_core::InstrumentKind;

/// Command-line host for the chartfeed datafeed adapter.
#[derive(Debug, Parser)]
#[command(name = "chartfeed", version, about = "Datafeed host for the chartfeed OHLC API")]
pub struct Cli {
    /// Base URL of the remote symbol/bar provider.
    #[arg(
        long,
        global = true,
        env = "CHARTFEED_API_BASE",
        default_value = "http://127.0.0.1:8000/api"
    )]
    pub api_base: String,

    /// Per-request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Emit JSON instead of human-readable output.
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the loaded symbol universes and the default symbol.
    Symbols(SymbolsArgs),
    /// Search symbols by case-insensitive substring.
    Search(SearchArgs),
    /// Resolve a symbol to its chart descriptor.
    Resolve(ResolveArgs),
    /// Fetch history bars for a symbol.
    Bars(BarsArgs),
    /// Print the datafeed capability descriptor.
    Capabilities,
}

/// Symbol-universe filter shared by `symbols` and `search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Stock,
    Option,
}

impl From<KindArg> for InstrumentKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Stock => InstrumentKind::Stock,
            KindArg::Option => InstrumentKind::Option,
        }
    }
}

#[derive(Debug, Args)]
pub struct SymbolsArgs {
    /// Restrict output to one universe.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Substring to search for.
    pub query: String,

    /// Restrict the search pool to one universe.
    #[arg(long, value_enum)]
    pub kind: Option<KindArg>,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Symbol to resolve.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct BarsArgs {
    /// Symbol to fetch history for.
    pub symbol: String,

    /// Bar resolution (1, 3, 5, 15, 30, 60, 120, 240, D, W, M).
    #[arg(long, default_value = "D")]
    pub resolution: String,

    /// End of the window as epoch seconds; defaults to now.
    #[arg(long)]
    pub to: Option<i64>,

    /// Number of bars to request, counted back from `to`.
    #[arg(long)]
    pub count_back: Option<usize>,
}
