use serde::Deserialize;
use std::collections::HashMap;

/// Payload shape of the rate feed: a date plus one rate table keyed by the
/// base currency the snapshot was requested for, e.g.
/// `{"date": "2024-03-27", "eur": {"usd": 1.1, ...}}`.
#[derive(Debug, Deserialize)]
pub struct RatesResponse {
    pub date: String,
    #[serde(flatten)]
    tables: HashMap<String, HashMap<String, f64>>,
}

impl RatesResponse {
    /// Take the table quoted against `base`, or `None` if the payload does
    /// not carry one.
    pub fn into_table(mut self, base: &str) -> Option<RateTable> {
        self.tables.remove(base).map(RateTable)
    }
}

/// Immutable snapshot of exchange rates. Keys are lowercase currency codes;
/// each value is the currency's worth expressed in the base the table was
/// fetched for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable(HashMap<String, f64>);

impl RateTable {
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.0.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(code, rate)| (code.as_str(), *rate))
    }
}

impl FromIterator<(String, f64)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        RateTable(iter.into_iter().collect())
    }
}

impl From<HashMap<String, f64>> for RateTable {
    fn from(rates: HashMap<String, f64>) -> Self {
        RateTable(rates)
    }
}
