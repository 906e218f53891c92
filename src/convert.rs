//! Cross-rate conversion over a fetched rate table.

use std::fmt;

use crate::config::{BASE_CURRENCY, RESULT_SCALE};
use crate::error::{Error, Result};
use crate::models::RateTable;

/// Outcome of a successful conversion. Displays as
/// `"<amount> <FROM> = <value> <TO>"` with the value at four decimal places.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount_text: String,
    pub from: String,
    pub to: String,
    pub rate: f64,
    pub value: f64,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{amount} {from} = {value:.scale$} {to}",
            amount = self.amount_text,
            from = self.from.to_uppercase(),
            value = self.value,
            scale = RESULT_SCALE as usize,
            to = self.to.to_uppercase(),
        )
    }
}

/// Convert `amount_text` units of `from` into `to` using a table of rates
/// quoted in the base currency. Stateless; each call works on the snapshot
/// it is handed.
pub fn convert(rates: &RateTable, from: &str, to: &str, amount_text: &str) -> Result<Conversion> {
    let amount: f64 = amount_text
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(amount_text.to_string()))?;
    if !amount.is_finite() {
        return Err(Error::InvalidAmount(amount_text.to_string()));
    }

    let from = from.to_ascii_lowercase();
    let to = to.to_ascii_lowercase();

    let base_in_base = lookup(rates, BASE_CURRENCY)?;
    let from_in_base = lookup(rates, &from)?;
    let to_in_base = lookup(rates, &to)?;

    // The base term cancels while the table is quoted in the base itself;
    // the full form stays valid for a table quoted in any other unit.
    let rate = ((base_in_base / from_in_base) * to_in_base) / base_in_base;
    let value = round_half_up(amount * rate, RESULT_SCALE);
    if !rate.is_finite() || !value.is_finite() {
        return Err(Error::DataUnavailable(format!(
            "no usable rate for {from}/{to}"
        )));
    }

    Ok(Conversion {
        amount_text: amount_text.to_string(),
        from,
        to,
        rate,
        value,
    })
}

fn lookup(rates: &RateTable, code: &str) -> Result<f64> {
    match rates.rate(code) {
        Some(rate) if rate.is_finite() && rate > 0.0 => Ok(rate),
        Some(_) => Err(Error::DataUnavailable(format!(
            "rate for {code} is not a positive number"
        ))),
        None => Err(Error::UnknownCurrency(code.to_string())),
    }
}

/// Round to `scale` decimal places, halves away from zero.
fn round_half_up(value: f64, scale: u32) -> f64 {
    let factor = 10f64.powi(scale as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table(rates: &[(&str, f64)]) -> RateTable {
        rates
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect()
    }

    #[test]
    fn converts_through_the_base() {
        let rates = table(&[("eur", 1.0), ("usd", 1.1)]);
        let conversion = convert(&rates, "usd", "eur", "100").unwrap();

        assert_relative_eq!(conversion.rate, 1.0 / 1.1, max_relative = 1e-12);
        assert_eq!(conversion.to_string(), "100 USD = 90.9091 EUR");
    }

    #[test]
    fn converts_between_two_non_base_currencies() {
        let rates = table(&[("eur", 1.0), ("usd", 1.1), ("gbp", 0.85)]);
        let conversion = convert(&rates, "usd", "gbp", "100").unwrap();

        assert_relative_eq!(conversion.rate, 0.85 / 1.1, max_relative = 1e-12);
        assert_eq!(conversion.to_string(), "100 USD = 77.2727 GBP");
    }

    #[test]
    fn same_currency_keeps_the_amount() {
        let rates = table(&[("eur", 1.0), ("usd", 1.1)]);
        let conversion = convert(&rates, "usd", "usd", "100").unwrap();

        assert_relative_eq!(conversion.rate, 1.0, max_relative = 1e-12);
        assert_eq!(conversion.to_string(), "100 USD = 100.0000 USD");
    }

    #[test]
    fn codes_are_case_insensitive() {
        let rates = table(&[("eur", 1.0), ("usd", 1.1)]);
        let conversion = convert(&rates, "USD", "Eur", "1").unwrap();

        assert_eq!(conversion.to_string(), "1 USD = 0.9091 EUR");
    }

    #[test]
    fn missing_currency_is_classified() {
        let rates = table(&[("eur", 1.0), ("usd", 1.1)]);

        let err = convert(&rates, "xyz", "eur", "50").unwrap_err();
        assert!(matches!(err, Error::UnknownCurrency(code) if code == "xyz"));

        let err = convert(&rates, "usd", "jpy", "50").unwrap_err();
        assert!(matches!(err, Error::UnknownCurrency(code) if code == "jpy"));
    }

    #[test]
    fn missing_base_entry_is_classified() {
        let rates = table(&[("usd", 1.1), ("gbp", 0.85)]);

        let err = convert(&rates, "usd", "gbp", "50").unwrap_err();
        assert!(matches!(err, Error::UnknownCurrency(code) if code == "eur"));
    }

    #[test]
    fn unparseable_amount_is_rejected() {
        let rates = table(&[("eur", 1.0), ("usd", 1.1)]);

        for bad in ["abc", "", "12,5", "1.2.3", "NaN", "inf"] {
            let err = convert(&rates, "usd", "eur", bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidAmount(_)),
                "expected InvalidAmount for {bad:?}"
            );
        }
    }

    #[test]
    fn non_positive_rate_is_unusable() {
        let rates = table(&[("eur", 1.0), ("bad", 0.0)]);

        let err = convert(&rates, "bad", "eur", "10").unwrap_err();
        assert!(matches!(err, Error::DataUnavailable(_)));
    }

    #[test]
    fn halves_round_away_from_zero() {
        let rates = table(&[("eur", 1.0), ("usd", 1.0)]);

        let up = convert(&rates, "usd", "eur", "0.00005").unwrap();
        assert_eq!(up.to_string(), "0.00005 USD = 0.0001 EUR");

        let down = convert(&rates, "usd", "eur", "-0.00005").unwrap();
        assert_eq!(down.to_string(), "-0.00005 USD = -0.0001 EUR");
    }

    #[test]
    fn rounds_to_four_places() {
        assert_relative_eq!(round_half_up(90.90909090909091, 4), 90.9091);
        assert_relative_eq!(round_half_up(0.12344, 4), 0.1234);
        assert_relative_eq!(round_half_up(-1.23456, 4), -1.2346);
    }

    #[test]
    fn whitespace_around_the_amount_is_tolerated() {
        let rates = table(&[("eur", 1.0), ("usd", 1.1)]);
        let conversion = convert(&rates, "usd", "eur", " 100 ").unwrap();

        assert_relative_eq!(conversion.value, 90.9091);
    }
}
