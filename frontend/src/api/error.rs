use thiserror::Error;

/// Failure of a single API call.
///
/// The UI treats the two kinds differently: a structured failure shows the
/// server's message, everything else shows a fixed fallback and is logged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with `success: false`.
    #[error("{}", .0.as_deref().unwrap_or("request rejected"))]
    Rejected(Option<String>),

    /// Network failure, non-JSON body, or a payload that does not decode.
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    /// `success: true` without the `data` the endpoint promises.
    #[error("response has no data")]
    MissingData,
}

impl ApiError {
    /// `true` for a parsed `success: false` response.
    pub fn is_structured(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }

    /// Server-provided message of a structured failure, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected(message) => message.as_deref(),
            _ => None,
        }
    }
}
