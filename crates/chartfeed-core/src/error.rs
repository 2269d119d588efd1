use thiserror::Error;

/// Validation errors for domain parsing in `chartfeed-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error(
        "invalid resolution '{value}', expected one of 1, 3, 5, 15, 30, 60, 120, 240, D, W, M"
    )]
    InvalidResolution { value: String },
}
