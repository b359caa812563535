pub mod loader;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV header row has no columns")]
    EmptyHeader,
}

pub type Result<T> = std::result::Result<T, DataError>;

/// Historical daily closing prices keyed by stock symbol and calendar date.
///
/// Built once from a CSV file and immutable afterwards. Queries never fail:
/// an unknown symbol or an absent date resolves to a price of 0.0, so every
/// downstream calculation stays total.
#[derive(Debug, Default)]
pub struct PriceTable {
    symbols: Vec<String>,
    prices: HashMap<String, BTreeMap<NaiveDate, f64>>,
}

impl PriceTable {
    /// Loads a price table from a CSV file.
    ///
    /// A file that cannot be opened or parsed produces an empty table rather
    /// than an error; the surrounding application must stay usable with no
    /// data loaded.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match loader::load(path) {
            Ok(table) => table,
            Err(why) => {
                warn!("failed to load price data from {}: {}", path.display(), why);
                PriceTable::default()
            }
        }
    }

    /// Closing price for the symbol on the exact date, or 0.0 when the
    /// symbol is unknown, the date is absent, or the table failed to load.
    pub fn price(&self, symbol: &str, date: NaiveDate) -> f64 {
        self.prices
            .get(symbol)
            .and_then(|by_date| by_date.get(&date))
            .copied()
            .unwrap_or(0.0)
    }

    /// All known symbols, in the order the header row listed them.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Most recent date with a stored price for the symbol, if any.
    pub fn latest_date(&self, symbol: &str) -> Option<NaiveDate> {
        self.prices
            .get(symbol)
            .and_then(|by_date| by_date.keys().next_back())
            .copied()
    }

    /// Number of known symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
