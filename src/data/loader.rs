use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::{info, warn};

use super::{DataError, PriceTable, Result};

/// Reads a wide-format price CSV: the first column holds the date, every
/// later column holds one symbol's closing prices.
pub(super) fn load(path: &Path) -> Result<PriceTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = rdr.headers()?.iter().map(|s| s.to_string()).collect();
    if headers.is_empty() {
        return Err(DataError::EmptyHeader);
    }

    // The date column's header name is irrelevant; the remaining headers are
    // the symbols, kept verbatim and in order.
    let symbols: Vec<String> = headers[1..].to_vec();
    let mut prices: HashMap<String, BTreeMap<NaiveDate, f64>> = symbols
        .iter()
        .map(|symbol| (symbol.clone(), BTreeMap::new()))
        .collect();

    let mut rows = 0usize;
    for record in rdr.records() {
        let record = record?;
        let date_cell = record.get(0).unwrap_or("");
        let date = match parse_date(date_cell) {
            Some(date) => date,
            None => {
                warn!("skipping row with unparseable date {:?}", date_cell);
                continue;
            }
        };

        for (i, symbol) in symbols.iter().enumerate() {
            // Short rows read as empty cells, which resolve to 0.0 like any
            // other non-numeric price.
            let cell = record.get(i + 1).unwrap_or("");
            if let Some(by_date) = prices.get_mut(symbol) {
                by_date.insert(date, parse_price(cell));
            }
        }
        rows += 1;
    }

    info!(
        "loaded {} price rows for {} symbols from {}",
        rows,
        symbols.len(),
        path.display()
    );

    Ok(PriceTable { symbols, prices })
}

/// Dates come in two layouts: day-month-year when the cell contains a
/// hyphen, month/day/year otherwise.
fn parse_date(cell: &str) -> Option<NaiveDate> {
    let format = if cell.contains('-') {
        "%d-%m-%Y"
    } else {
        "%m/%d/%Y"
    };
    NaiveDate::parse_from_str(cell, format).ok()
}

/// Prices may carry comma thousands separators; anything that still fails to
/// parse resolves to 0.0 rather than failing the load.
fn parse_price(cell: &str) -> f64 {
    cell.replace(',', "").parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphen_dates_parse_as_day_month_year() {
        let date = parse_date("01-03-2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_slash_dates_parse_as_month_day_year() {
        let date = parse_date("03/01/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    }

    #[test]
    fn test_unrecognized_dates_are_rejected() {
        // ISO order puts the year where the day belongs, so it must fail.
        assert!(parse_date("2024-03-01").is_none());
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_prices_strip_thousands_separators() {
        assert_eq!(parse_price("1,234.56"), 1234.56);
        assert_eq!(parse_price("2,500"), 2500.0);
        assert_eq!(parse_price("100.50"), 100.50);
    }

    #[test]
    fn test_non_numeric_prices_default_to_zero() {
        assert_eq!(parse_price("N/A"), 0.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("-"), 0.0);
    }
}
