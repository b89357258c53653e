use crate::view_model::AppViewModel;
use crate::{AnalyzedPaper, TabbedViewer};

/// Identifies one accepted submission. Ids only grow.
pub type RequestId = u64;

/// Lifecycle of the current search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Query text, phase, results and error banner of one analyzer page visit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestState {
    query: String,
    phase: Phase,
    results: Vec<AnalyzedPaper>,
    error_message: Option<String>,
    pending: Option<RequestId>,
}

impl RequestState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn results(&self) -> &[AnalyzedPaper] {
        &self.results
    }

    /// Set only while the phase is [`Phase::Failed`].
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Id of the submission whose outcome is still awaited.
    pub fn pending(&self) -> Option<RequestId> {
        self.pending
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub(crate) fn begin(&mut self, request_id: RequestId) {
        self.phase = Phase::Loading;
        self.results.clear();
        self.error_message = None;
        self.pending = Some(request_id);
    }

    pub(crate) fn succeed(&mut self, papers: Vec<AnalyzedPaper>) {
        self.phase = Phase::Success;
        self.results = papers;
        self.error_message = None;
        self.pending = None;
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.phase = Phase::Failed;
        self.results.clear();
        self.error_message = Some(message.into());
        self.pending = None;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    request: RequestState,
    viewers: Vec<TabbedViewer>,
    next_request_id: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_first_request_id(1)
    }

    /// Fresh state whose first submission uses `first` as its id.
    ///
    /// A new page visit passes the previous visit's [`AppState::next_request_id`]
    /// so late responses addressed to the old visit never match.
    pub fn with_first_request_id(first: RequestId) -> Self {
        Self {
            request: RequestState::default(),
            viewers: Vec::new(),
            next_request_id: first,
            dirty: false,
        }
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    /// One viewer per entry of [`RequestState::results`], same order.
    pub fn viewers(&self) -> &[TabbedViewer] {
        &self.viewers
    }

    pub fn next_request_id(&self) -> RequestId {
        self.next_request_id
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(&self.request, &self.viewers, self.dirty)
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn request_mut(&mut self) -> &mut RequestState {
        &mut self.request
    }

    pub(crate) fn allocate_request_id(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub(crate) fn reset_viewers(&mut self) {
        self.viewers = vec![TabbedViewer::default(); self.request.results.len()];
    }

    pub(crate) fn viewer_mut(&mut self, card: usize) -> Option<&mut TabbedViewer> {
        self.viewers.get_mut(card)
    }
}
