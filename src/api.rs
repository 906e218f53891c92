use log::debug;
use reqwest::StatusCode;

use crate::config;
use crate::error::{Error, Result};
use crate::models::{RateTable, RatesResponse};

/// Fetch a fresh rate table quoted in `base`. One GET per call; nothing is
/// cached between invocations.
pub async fn fetch_rates(base: &str) -> Result<RateTable> {
    let url = rates_url(base);
    debug!("fetching rate table from {url}");

    let client = reqwest::Client::builder()
        .timeout(config::REQUEST_TIMEOUT)
        .build()?;
    let response = client.get(&url).send().await?;

    match response.status() {
        StatusCode::OK => {
            let payload: RatesResponse = response.json().await?;
            debug!("received table dated {}", payload.date);
            payload.into_table(base).ok_or_else(|| {
                Error::DataUnavailable(format!("response carries no table for {base}"))
            })
        }
        StatusCode::NOT_FOUND => Err(Error::UnknownCurrency(base.to_string())),
        status => Err(Error::DataUnavailable(format!(
            "rate service answered {status}"
        ))),
    }
}

fn rates_url(base: &str) -> String {
    format!("{}/{}.json", config::api_url(), base)
}
