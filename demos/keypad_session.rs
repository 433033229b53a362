use calcpad::store::FileStore;
use calcpad::tools::currency::{self, FileRateSource};
use calcpad::tools::units::{self, Category};
use calcpad::{Calculator, Config};
use log::info;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let config = match env::var("CALCPAD_CONFIG") {
        Ok(path) => Config::load(path)?,
        Err(_) => Config::default(),
    };

    let store_path = env::temp_dir().join("calcpad-demo.json");
    let mut store = FileStore::open(&store_path)?;
    let mut calculator = Calculator::restore(&store, &config);
    info!("Restored {} history entries", calculator.history().len());

    for key in ["1", "2", "×", "3", "+", "4", "="] {
        calculator.press(key);
        println!("{:>3} | {:<12} | {}", key, calculator.equation(), calculator.display());
    }
    calculator.save(&mut store)?;

    for entry in calculator.history().entries() {
        println!("history: {}", entry);
    }

    if let Some(miles) = units::convert(Category::Length, "km", "mi", 42.195) {
        println!("42.195 km = {} mi", units::format_converted(miles));
    }

    let rates_path = env::var("CALCPAD_RATES").unwrap_or_else(|_| "rates.json".to_string());
    let (rates, origin) =
        currency::load_rates(&FileRateSource::new(rates_path), config.rates_timeout()).await;
    if let Some(amount) = rates.convert(100.0, &config.base_currency, "EUR") {
        println!(
            "100 {} = {} EUR ({:?} rates)",
            config.base_currency,
            currency::format_money(amount),
            origin
        );
    }

    Ok(())
}
