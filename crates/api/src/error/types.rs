//! Error type definitions for harness operations

use thiserror::Error as ThisError;

/// Primary error type for harness operations
///
/// Nothing in the harness recovers from an error locally; every variant
/// propagates to the entry point and terminates the run.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The requested mechanism is unknown or not enabled by the provider
    #[error("unsupported KEM mechanism: {name}")]
    UnsupportedMechanism {
        name: String,
    },

    /// Allocation or internal failure inside the provider
    #[error("provider error for {mechanism} during {context}: {message}")]
    ProviderError {
        mechanism: String,
        context: &'static str,
        message: String,
    },

    /// Encapsulating and decapsulating parties derived different secrets
    #[error("shared secret mismatch for {mechanism}: provider is not trustworthy")]
    CorrectnessViolation {
        mechanism: String,
    },

    /// Rejected input
    #[error("invalid parameter in {context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Writing the report failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
    },
}

/// Result type for harness operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Build an `UnsupportedMechanism` error
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedMechanism { name: name.into() }
    }

    /// Build a `ProviderError`
    pub fn provider(
        mechanism: impl Into<String>,
        context: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::ProviderError {
            mechanism: mechanism.into(),
            context,
            message: message.into(),
        }
    }

    /// Build a `CorrectnessViolation`
    pub fn correctness(mechanism: impl Into<String>) -> Self {
        Self::CorrectnessViolation { mechanism: mechanism.into() }
    }

    /// Build an `InvalidParameter` error
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter { context, message: message.into() }
    }

    /// Whether the error means the provider itself cannot be trusted
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CorrectnessViolation { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { message: e.to_string() }
    }
}
