use std::fmt;

use analyzer_core::{AnalyzedPaper, Failure, Msg, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisEvent {
    Completed {
        request_id: RequestId,
        result: Result<Vec<AnalyzedPaper>, AnalyzeError>,
    },
}

impl AnalysisEvent {
    /// Message fed back into [`analyzer_core::update`]; errors keep their class and detail.
    pub fn into_msg(self) -> Msg {
        match self {
            AnalysisEvent::Completed { request_id, result } => match result {
                Ok(papers) => Msg::AnalysisSucceeded { request_id, papers },
                Err(err) => Msg::AnalysisFailed {
                    request_id,
                    failure: err.kind.failure(),
                    detail: err.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct AnalyzeError {
    pub kind: FailureKind,
    pub message: String,
}

impl AnalyzeError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    MalformedResponse,
    Network,
}

impl FailureKind {
    /// Class reported to the state machine.
    pub fn failure(&self) -> Failure {
        match self {
            FailureKind::MalformedResponse => Failure::MalformedResponse,
            FailureKind::InvalidEndpoint
            | FailureKind::HttpStatus(_)
            | FailureKind::Timeout
            | FailureKind::TooLarge { .. }
            | FailureKind::Network => Failure::Network,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
