use crate::{AnalyzedPaper, Category, RequestId};

/// Coarse failure class of an analysis request. Both classes show the same banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Transport error, timeout or non-success status.
    Network,
    /// The body was not a JSON array of paper objects.
    MalformedResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the query input.
    InputChanged(String),
    /// User submitted the current query.
    QuerySubmitted,
    /// The analysis request `request_id` returned papers.
    AnalysisSucceeded {
        request_id: RequestId,
        papers: Vec<AnalyzedPaper>,
    },
    /// The analysis request `request_id` failed. `detail` is for logs only.
    AnalysisFailed {
        request_id: RequestId,
        failure: Failure,
        detail: String,
    },
    /// User picked a tab on the card at index `card`.
    CategorySelected { card: usize, category: Category },
    /// Fallback for placeholder wiring.
    NoOp,
}
