use thiserror::Error;

/// Reasons a string is rejected by [`Rgb::from_hex`](crate::Rgb::from_hex).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,

    #[error("expected 6 hex digits, found {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
