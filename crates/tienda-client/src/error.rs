use thiserror::Error;

/// Errors surfaced by the storefront client.
///
/// Debounced operations never return these; their actions log and notify
/// instead.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with `success: false`.
    #[error("request rejected: {}", .message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    #[error("invalid {key}: {reason}")]
    Config { key: &'static str, reason: String },
}

impl ClientError {
    /// The message to show the user, preferring the backend's own wording.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ClientError::Rejected {
                message: Some(message),
            } if !message.is_empty() => message.as_str(),
            _ => fallback,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
