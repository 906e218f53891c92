use thiserror::Error;

/// Errors a conversion can end with. All of them are terminal for the
/// request; retrying is the caller's decision.
#[derive(Error, Debug)]
pub enum Error {
    #[error("amount is incorrect: {0:?}")]
    InvalidAmount(String),

    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("currency data unavailable: {0}")]
    DataUnavailable(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
