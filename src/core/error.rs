//! Engine error type.
//!
//! Every fallible operation in the crate returns [`Result<T>`]. The variants
//! map onto how a caller should react:
//!
//! - `InsufficientCards`, `InvalidConfig`: fatal to match setup
//! - `InvalidSelection`, `InsufficientBalance`: recoverable, ask again
//! - `IllegalState`: a caller bug (e.g. stepping a finished match)
//! - `PromptCancelled`: the input provider gave up, abandon the match

use thiserror::Error;

/// Errors raised by the Menteur engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenteurError {
    #[error("not enough cards: {needed} needed, {available} available")]
    InsufficientCards { needed: usize, available: usize },

    #[error("invalid selection: {reason}")]
    InvalidSelection { reason: String },

    #[error("illegal state: {reason}")]
    IllegalState { reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("insufficient balance: {requested} requested, {balance} available")]
    InsufficientBalance { balance: i64, requested: i64 },

    #[error("input prompt cancelled")]
    PromptCancelled,
}

impl MenteurError {
    pub(crate) fn selection(reason: impl Into<String>) -> Self {
        Self::InvalidSelection { reason: reason.into() }
    }

    pub(crate) fn illegal_state(reason: impl Into<String>) -> Self {
        Self::IllegalState { reason: reason.into() }
    }

    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }

    /// True for errors the caller can recover from by asking again.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidSelection { .. } | Self::InsufficientBalance { .. }
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MenteurError>;
