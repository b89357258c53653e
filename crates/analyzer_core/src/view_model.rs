use crate::{AnalyzedPaper, Category, ContentBlock, Phase, RequestState, TabbedViewer};

/// Banner text for every failed request, whatever the cause.
pub const FAILURE_MESSAGE: &str = "Failed to fetch papers. Please try again.";
pub const LOADING_MESSAGE: &str = "Analyzing papers... This may take a minute.";
pub const UNTITLED_PAPER: &str = "Untitled Paper";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub phase: Phase,
    pub error_message: Option<String>,
    pub loading_message: Option<&'static str>,
    pub cards: Vec<PaperCardView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperCardView {
    pub index: usize,
    pub title: String,
    pub link: Option<String>,
    pub tabs: Vec<TabView>,
    pub selected: Category,
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub category: Category,
    pub number: usize,
    pub label: &'static str,
    pub active: bool,
}

impl AppViewModel {
    pub(crate) fn build(request: &RequestState, viewers: &[TabbedViewer], dirty: bool) -> Self {
        let cards = request
            .results()
            .iter()
            .zip(viewers)
            .enumerate()
            .map(|(index, (paper, viewer))| PaperCardView::build(index, paper, viewer))
            .collect();

        Self {
            query: request.query().to_string(),
            phase: request.phase(),
            error_message: request.error_message().map(ToOwned::to_owned),
            loading_message: (request.phase() == Phase::Loading).then_some(LOADING_MESSAGE),
            cards,
            dirty,
        }
    }
}

impl PaperCardView {
    fn build(index: usize, paper: &AnalyzedPaper, viewer: &TabbedViewer) -> Self {
        let selected = viewer.category();
        let tabs = Category::ALL
            .into_iter()
            .map(|category| TabView {
                category,
                number: category.number(),
                label: category.label(),
                active: category == selected,
            })
            .collect();

        Self {
            index,
            title: non_empty(paper.title.as_deref())
                .unwrap_or(UNTITLED_PAPER)
                .to_string(),
            link: non_empty(paper.link.as_deref()).map(ToOwned::to_owned),
            tabs,
            selected,
            content: viewer.render(paper),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}
