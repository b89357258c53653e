use crate::RequestId;

/// Side effects requested by [`crate::update`]; the app executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Post `query` to the analysis endpoint and report back under `request_id`.
    Analyze { request_id: RequestId, query: String },
}
