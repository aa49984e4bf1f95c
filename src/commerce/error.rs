//! Commerce backend errors.

use thiserror::Error;

/// Ways a request to the commerce backend can fail.
///
/// A dropped connection and a refused one both land in `Network`; only the
/// message text tells them apart.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommerceError {
    /// The request never reached the backend or no response came back.
    #[error("Commerce request failed: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Commerce backend rejected the request ({status}): {}", .message.as_deref().unwrap_or("no details"))]
    Rejected {
        status: u16,
        /// `error` or `message` text from the response body, when present
        message: Option<String>,
    },

    /// A success status with a body of unexpected shape.
    #[error("Commerce response error: {0}")]
    Malformed(String),
}

impl CommerceError {
    /// Error text supplied by the backend, if it sent any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Malformed(_) => None,
        }
    }

    /// True for failures where no usable answer came back
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Malformed(_))
    }
}
