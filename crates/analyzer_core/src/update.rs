use analyzer_logging::{analyzer_debug, analyzer_info, analyzer_warn};

use crate::{AppState, Effect, Failure, Msg, FAILURE_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            if state.request().query() != text {
                state.request_mut().set_query(text);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::QuerySubmitted => {
            let query = state.request().query().to_string();
            if query.trim().is_empty() {
                return (state, Vec::new());
            }
            // A submission while Loading supersedes the pending one; only the
            // newest id is accepted on completion.
            let request_id = state.allocate_request_id();
            if let Some(previous) = state.request().pending() {
                analyzer_debug!("request {} superseded by {}", previous, request_id);
            }
            state.request_mut().begin(request_id);
            state.reset_viewers();
            state.mark_dirty();
            analyzer_info!("request {} submitted ({} chars)", request_id, query.len());
            vec![Effect::Analyze { request_id, query }]
        }
        Msg::AnalysisSucceeded { request_id, papers } => {
            if state.request().pending() != Some(request_id) {
                analyzer_debug!("dropping stale response for request {}", request_id);
                return (state, Vec::new());
            }
            analyzer_info!("request {} returned {} papers", request_id, papers.len());
            state.request_mut().succeed(papers);
            state.reset_viewers();
            state.mark_dirty();
            Vec::new()
        }
        Msg::AnalysisFailed {
            request_id,
            failure,
            detail,
        } => {
            if state.request().pending() != Some(request_id) {
                analyzer_debug!("dropping stale failure for request {}", request_id);
                return (state, Vec::new());
            }
            let class = match failure {
                Failure::Network => "network failure",
                Failure::MalformedResponse => "malformed response",
            };
            analyzer_warn!("request {} failed ({}): {}", request_id, class, detail);
            state.request_mut().fail(FAILURE_MESSAGE);
            state.reset_viewers();
            state.mark_dirty();
            Vec::new()
        }
        Msg::CategorySelected { card, category } => {
            let changed = state
                .viewer_mut(card)
                .map(|viewer| viewer.select(category))
                .unwrap_or(false);
            if changed {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
