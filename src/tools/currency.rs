//! Currency conversion against a table of rates relative to one base.
//!
//! Rates come from a [`RateSource`]; when the source fails or is too slow,
//! [`load_rates`] falls back to [`FALLBACK_RATES`] so conversion keeps
//! working offline.

use log::{debug, warn};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Currencies offered by the converter, in display order.
pub const CURRENCIES: [&str; 10] = [
    "USD", "EUR", "GBP", "JPY", "CAD", "AUD", "CHF", "CNY", "INR", "BRL",
];

/// Static USD-based rates used whenever no live table is available.
pub const FALLBACK_RATES: [(&str, f64); 10] = [
    ("USD", 1.0),
    ("EUR", 0.85),
    ("GBP", 0.73),
    ("JPY", 110.5),
    ("CAD", 1.25),
    ("AUD", 1.35),
    ("CHF", 0.92),
    ("CNY", 6.45),
    ("INR", 74.5),
    ("BRL", 5.25),
];

#[derive(Debug, Error)]
pub enum RateError {
    #[error("failed to read rate feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed rate feed: {0}")]
    Format(#[from] serde_json::Error),

    #[error("rate feed has no usable rates")]
    Empty,

    #[error("rate feed timed out after {0:?}")]
    Timeout(Duration),
}

/// Units of each currency per one unit of `base`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RateTable {
    pub base: String,
    pub rates: BTreeMap<String, f64>,
}

impl RateTable {
    pub fn fallback() -> Self {
        Self {
            base: "USD".to_string(),
            rates: FALLBACK_RATES
                .iter()
                .map(|(code, rate)| (code.to_string(), *rate))
                .collect(),
        }
    }

    /// Parses an exchangerate-api style document:
    /// `{"base": "USD", "rates": {"EUR": 0.85, ...}}`.
    pub fn from_json(json: &str) -> Result<Self, RateError> {
        let mut table: RateTable = serde_json::from_str(json)?;
        table
            .rates
            .retain(|_, rate| rate.is_finite() && *rate > 0.0);
        if table.rates.is_empty() {
            return Err(RateError::Empty);
        }
        Ok(table)
    }

    pub fn rate(&self, currency: &str) -> Option<f64> {
        self.rates.get(currency).copied()
    }

    /// Converts through the base currency. `None` if either rate is unknown.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Option<f64> {
        let from_rate = self.rate(from)?;
        let to_rate = self.rate(to)?;
        Some(amount / from_rate * to_rate)
    }
}

/// Where a loaded rate table came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RateOrigin {
    Live,
    Fallback,
}

/// A provider of current exchange rates.
pub trait RateSource {
    fn fetch(&self) -> impl Future<Output = Result<RateTable, RateError>> + Send;
}

/// Reads a rate document from disk, e.g. one refreshed by a cron job.
#[derive(Debug, Clone)]
pub struct FileRateSource {
    path: PathBuf,
}

impl FileRateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RateSource for FileRateSource {
    async fn fetch(&self) -> Result<RateTable, RateError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        RateTable::from_json(&contents)
    }
}

/// Always yields the fallback table.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticRateSource;

impl RateSource for StaticRateSource {
    async fn fetch(&self) -> Result<RateTable, RateError> {
        Ok(RateTable::fallback())
    }
}

/// Fetches rates from `source`, falling back to [`FALLBACK_RATES`] on any
/// error or once `timeout` elapses.
pub async fn load_rates<S: RateSource>(source: &S, timeout: Duration) -> (RateTable, RateOrigin) {
    let fetched = match tokio::time::timeout(timeout, source.fetch()).await {
        Ok(result) => result,
        Err(_) => Err(RateError::Timeout(timeout)),
    };

    match fetched {
        Ok(table) => {
            debug!("Loaded {} rates based on {}", table.rates.len(), table.base);
            (table, RateOrigin::Live)
        }
        Err(e) => {
            warn!("Failed to fetch rates, using fallback table: {}", e);
            (RateTable::fallback(), RateOrigin::Fallback)
        }
    }
}

/// Two decimals, as shown for money amounts.
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    struct FailingSource;

    impl RateSource for FailingSource {
        async fn fetch(&self) -> Result<RateTable, RateError> {
            Err(RateError::Empty)
        }
    }

    struct SlowSource;

    impl RateSource for SlowSource {
        async fn fetch(&self) -> Result<RateTable, RateError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(RateTable::fallback())
        }
    }

    #[test]
    fn test_fallback_table_covers_offered_currencies() {
        let table = RateTable::fallback();
        for currency in CURRENCIES {
            assert!(table.rate(currency).is_some(), "missing {}", currency);
        }
        assert_eq!(table.rate("USD"), Some(1.0));
    }

    #[test]
    fn test_convert() {
        let table = RateTable::fallback();
        assert_eq!(format_money(table.convert(100.0, "USD", "EUR").unwrap()), "85.00");
        assert_eq!(format_money(table.convert(85.0, "EUR", "USD").unwrap()), "100.00");
        assert_eq!(format_money(table.convert(100.0, "GBP", "JPY").unwrap()), "15136.99");
        assert_eq!(table.convert(1.0, "USD", "XYZ"), None);
    }

    #[test]
    fn test_from_json_drops_unusable_rates() {
        let table =
            RateTable::from_json(r#"{"base":"USD","rates":{"USD":1,"EUR":0.9,"BAD":0}}"#).unwrap();
        assert_eq!(table.rates.len(), 2);
        assert_eq!(table.rate("BAD"), None);

        assert!(matches!(
            RateTable::from_json(r#"{"base":"USD","rates":{}}"#),
            Err(RateError::Empty)
        ));
        assert!(matches!(
            RateTable::from_json("<html>"),
            Err(RateError::Format(_))
        ));
    }

    #[tokio::test]
    async fn test_live_rates_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base":"USD","date":"2024-01-01","rates":{{"USD":1,"EUR":0.5}}}}"#
        )
        .unwrap();

        let source = FileRateSource::new(file.path());
        let (table, origin) = load_rates(&source, Duration::from_secs(5)).await;
        assert_eq!(origin, RateOrigin::Live);
        assert_eq!(table.convert(10.0, "USD", "EUR"), Some(5.0));
    }

    #[tokio::test]
    async fn test_missing_file_falls_back() {
        let source = FileRateSource::new("/nonexistent/rates.json");
        let (table, origin) = load_rates(&source, Duration::from_secs(5)).await;
        assert_eq!(origin, RateOrigin::Fallback);
        assert_eq!(table, RateTable::fallback());
    }

    #[tokio::test]
    async fn test_failing_source_falls_back() {
        let (_, origin) = load_rates(&FailingSource, Duration::from_secs(5)).await;
        assert_eq!(origin, RateOrigin::Fallback);
    }

    #[tokio::test]
    async fn test_slow_source_times_out() {
        let (table, origin) = load_rates(&SlowSource, Duration::from_millis(100)).await;
        assert_eq!(origin, RateOrigin::Fallback);
        assert_eq!(table.base, "USD");
    }

    #[tokio::test]
    async fn test_static_source() {
        let (table, origin) = load_rates(&StaticRateSource, Duration::from_secs(1)).await;
        assert_eq!(origin, RateOrigin::Live);
        assert_eq!(table, RateTable::fallback());
    }
}
