//! Error types for the registration client.

use thiserror::Error;

/// Result type for registration API operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Fallback text shown when the server gives no usable message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong, try again";

/// Registration API errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network error (connection failed, request could not be sent)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the registration with a non-2xx status
    #[error("Registration rejected ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// 2xx response that did not carry a member record
    #[error("No member record returned")]
    NoData,
}

impl ClientError {
    /// The text to surface to the user: the server's own message for a
    /// rejected submission, a generic fallback for everything else.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api {
                message: Some(msg), ..
            } if !msg.trim().is_empty() => msg.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}
