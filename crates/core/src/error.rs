use thiserror::Error;

/// Top-level error type used across the card crates.
///
/// Only setup problems and data-source failures end up here. Bad or missing
/// readings are zeroed by the estimator and surfaced as display warnings.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("config error: {0}")]
    Config(String),

    /// A required config field is absent, e.g. `battery_entity`.
    #[error("{0} is required")]
    MissingRequired(&'static str),

    #[error("data source error: {0}")]
    Source(String),
}

pub type Result<T, E = CardError> = std::result::Result<T, E>;
