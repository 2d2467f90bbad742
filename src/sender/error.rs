//! Errors raised by the send operation

use thiserror::Error;

/// Why a message could not be delivered.
///
/// The submission flow only cares that a send failed; the variants exist so
/// the failure can be logged meaningfully.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("no callable function endpoint is configured")]
    NotConfigured,

    #[error("request to callable function failed: {0}")]
    Transport(String),

    #[error("callable function rejected the call ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("unexpected response from callable function: {0}")]
    InvalidResponse(String),

    #[error("send task ended before reporting a result")]
    Interrupted,
}

impl SendError {
    /// Short label for log records. Never includes response content.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::Transport(_) => "transport",
            Self::Rejected { .. } => "rejected",
            Self::InvalidResponse(_) => "invalid_response",
            Self::Interrupted => "interrupted",
        }
    }

    /// HTTP status, when the function answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_leaves_out_response_body() {
        let err = SendError::Rejected {
            status: 400,
            message: "INVALID_ARGUMENT: ada@example.com".to_string(),
        };
        assert_eq!(err.kind(), "rejected");
        assert_eq!(err.status(), Some(400));
        assert!(!err.kind().contains("ada@example.com"));
    }

    #[test]
    fn test_status_only_for_rejections() {
        assert_eq!(SendError::Transport("refused".to_string()).status(), None);
        assert_eq!(SendError::Interrupted.status(), None);
        assert_eq!(SendError::InvalidResponse("<html>".to_string()).kind(), "invalid_response");
    }
}
