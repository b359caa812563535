use chrono::NaiveDate;
use serde::Serialize;

use crate::data::PriceTable;

/// A hypothetical trade to evaluate: what is bought, how much, and the dates
/// it is bought and sold. Constructed fresh per evaluation, never persisted.
#[derive(Debug, Clone)]
pub struct TradeQuery {
    pub symbol: String,
    pub quantity: u32,
    pub purchase_date: NaiveDate,
    pub sell_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradeResult {
    pub purchase_total: f64,
    pub sell_total: f64,
    pub profit_or_loss: f64,
}

pub struct ProfitCalculator;

impl ProfitCalculator {
    /// Evaluates a trade against a price table.
    ///
    /// Total over its inputs: unknown symbols and absent dates price at 0.0,
    /// so the result is always defined. Quantity positivity is the caller's
    /// responsibility.
    pub fn evaluate(table: &PriceTable, query: &TradeQuery) -> TradeResult {
        let quantity = f64::from(query.quantity);
        let purchase_total = table.price(&query.symbol, query.purchase_date) * quantity;
        let sell_total = table.price(&query.symbol, query.sell_date) * quantity;

        TradeResult {
            purchase_total,
            sell_total,
            profit_or_loss: sell_total - purchase_total,
        }
    }
}

/// Renders an amount the way the trade form displays it: dollar prefix, two
/// decimal places.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}
