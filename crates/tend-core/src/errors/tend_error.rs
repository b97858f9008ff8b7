/// Top-level error for the Tend engines.
///
/// The calculators themselves are infallible; these errors only come out of
/// the `try_*` validators and config loading.
#[derive(Debug, thiserror::Error)]
pub enum TendError {
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("date is {days_ahead} day(s) in the future")]
    FutureDate { days_ahead: i64 },

    #[error("config error: {0}")]
    ConfigError(String),
}

pub type TendResult<T> = Result<T, TendError>;
