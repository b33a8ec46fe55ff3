//! Error types for the circular distributions.

use thiserror::Error;

/// Errors reported by the samplers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A distribution parameter or sample count is outside its domain.
    /// Raised before any sampling starts, so no output is produced.
    #[error("invalid parameter `{parameter}`: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Name of the parameter that failed validation
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { parameter, .. } => parameter,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
