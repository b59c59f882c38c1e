//! Error types for authentication operations

use thiserror::Error;

/// Errors that can occur during credential handling
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required environment variable was not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;
