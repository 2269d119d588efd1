mod bar;
mod kind;
mod resolution;
mod symbol;

pub use bar::{is_ascending, sort_ascending, Bar};
pub use kind::{is_index_ticker, InstrumentKind, INDEX_TICKERS};
pub use resolution::Resolution;
pub use symbol::Symbol;
