//! Analyzer core: pure request lifecycle state machine, tabbed viewer and view-model helpers.
mod effect;
mod msg;
mod paper;
mod state;
mod update;
mod view_model;
mod viewer;

pub use effect::Effect;
pub use msg::{Failure, Msg};
pub use paper::{AnalyzedPaper, Category, ParseCategoryError};
pub use state::{AppState, Phase, RequestId, RequestState};
pub use update::update;
pub use view_model::{
    AppViewModel, PaperCardView, TabView, FAILURE_MESSAGE, LOADING_MESSAGE, UNTITLED_PAPER,
};
pub use viewer::{render_category, ContentBlock, TabbedViewer, NO_INFORMATION};
