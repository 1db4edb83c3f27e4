use thiserror::Error;

/// Why a fetch cycle failed. Any variant fails the whole cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{endpoint}: request failed: {message}")]
    Network {
        endpoint: &'static str,
        message: String,
    },

    #[error("{endpoint}: HTTP error {status}")]
    Status { endpoint: &'static str, status: u16 },

    #[error("{endpoint}: failed to parse response: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },

    #[error("{endpoint}: no response within {after_ms} ms")]
    Timeout { endpoint: &'static str, after_ms: u32 },
}

impl FetchError {
    pub fn endpoint(&self) -> &'static str {
        match self {
            FetchError::Network { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Decode { endpoint, .. }
            | FetchError::Timeout { endpoint, .. } => *endpoint,
        }
    }
}
