use std::env;

use chrono::{Duration, Local};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use profit_toolkit::config::Config;
use profit_toolkit::data::PriceTable;
use profit_toolkit::trade::{format_currency, ProfitCalculator, TradeQuery};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load("config/profit.yaml").unwrap_or_else(|why| {
        warn!("could not read config/profit.yaml: {}; using built-in defaults", why);
        Config::default()
    });

    // Data file path from the command line, falling back to the configured one.
    let data_path = env::args().nth(1).unwrap_or_else(|| config.data_file.clone());
    let quantity = env::args()
        .nth(2)
        .and_then(|q| q.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);

    let table = PriceTable::from_path(&data_path);
    if table.is_empty() {
        warn!("no price data available; all totals will default to zero");
    }

    let today = Local::now().date_naive();
    let purchase_date = today - Duration::days(config.default_holding_days);
    let sell_date = table.latest_date(&config.reference_symbol).unwrap_or_else(|| {
        warn!(
            "reference symbol {:?} not in the dataset (available: {:?}); selling today",
            config.reference_symbol,
            table.symbols()
        );
        today
    });

    // The form preselects the first stock in the list.
    let symbol = table.symbols().first().cloned().unwrap_or_default();

    let query = TradeQuery {
        symbol: symbol.clone(),
        quantity,
        purchase_date,
        sell_date,
    };
    let result = ProfitCalculator::evaluate(&table, &query);

    println!("Stock:          {}", if symbol.is_empty() { "(none)" } else { symbol.as_str() });
    println!("Quantity:       {}", quantity);
    println!("Purchase date:  {}", purchase_date);
    println!("Sell date:      {}", sell_date);
    println!("Purchase total: {}", format_currency(result.purchase_total));
    println!("Sell total:     {}", format_currency(result.sell_total));
    println!("Profit/loss:    {}", format_currency(result.profit_or_loss));
}
