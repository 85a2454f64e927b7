//! Money domain module: amounts tagged with a currency, plus conversion.
//!
//! Conversion uses a static rate table; there is no rate service. Every
//! operation is total: unknown currencies convert to a zero amount rather than
//! failing.

pub mod money;
pub mod rates;

pub use money::Money;
pub use rates::RateTable;
