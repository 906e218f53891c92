use std::env;
use std::time::Duration;

/// Currency every table value is quoted in.
pub const BASE_CURRENCY: &str = "eur";

/// Feed serving one JSON table per base currency, `<endpoint>/<base>.json`.
pub const DEFAULT_API_URL: &str =
    "https://cdn.jsdelivr.net/gh/fawazahmed0/currency-api@1/latest/currencies";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Decimal places in a conversion result.
pub const RESULT_SCALE: u32 = 4;

/// Feed endpoint, overridable through the environment (loaded from `.env`
/// by the binary).
pub fn api_url() -> String {
    env::var("CROSSRATE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}
