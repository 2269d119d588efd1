use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Instrument classification used for routing and symbol resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    Stock,
    Option,
    Index,
}

impl InstrumentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Option => "option",
            Self::Index => "index",
        }
    }
}

impl Display for InstrumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known NSE/BSE index tickers. A symbol containing any of these is
/// classified as an index before option-set membership is consulted.
pub const INDEX_TICKERS: [&str; 5] = ["NIFTY", "BANKNIFTY", "SENSEX", "FINNIFTY", "MIDCPNIFTY"];

/// True when the symbol matches the index-ticker pattern.
///
/// The match is a substring test, so derived identifiers such as
/// `NIFTY25000CE` also classify as index. Symbols are uppercase by
/// construction, so no case folding is needed here.
pub fn is_index_ticker(symbol: &Symbol) -> bool {
    INDEX_TICKERS
        .iter()
        .any(|ticker| symbol.as_str().contains(ticker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_pattern_matches_derived_identifiers() {
        let symbol = Symbol::parse("NIFTY25000CE").expect("valid");
        assert!(is_index_ticker(&symbol));

        let symbol = Symbol::parse("BANKNIFTY").expect("valid");
        assert!(is_index_ticker(&symbol));
    }

    #[test]
    fn plain_stock_does_not_match_index_pattern() {
        let symbol = Symbol::parse("RELIANCE").expect("valid");
        assert!(!is_index_ticker(&symbol));
    }
}
