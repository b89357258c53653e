use std::sync::Once;

use analyzer_core::{
    render_category, update, AnalyzedPaper, AppState, Category, ContentBlock, Msg,
    NO_INFORMATION, UNTITLED_PAPER,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(analyzer_logging::initialize_for_tests);
}

fn loaded(papers: Vec<AnalyzedPaper>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::InputChanged("topic".to_string()));
    let (state, _) = update(state, Msg::QuerySubmitted);
    let (mut state, _) = update(
        state,
        Msg::AnalysisSucceeded {
            request_id: 1,
            papers,
        },
    );
    let _ = state.consume_dirty();
    state
}

fn select(state: AppState, card: usize, category: Category) -> AppState {
    update(state, Msg::CategorySelected { card, category }).0
}

fn paragraphs(lines: &[&str]) -> Vec<ContentBlock> {
    lines
        .iter()
        .map(|line| ContentBlock::Paragraph((*line).to_string()))
        .collect()
}

#[test]
fn missing_summary_renders_placeholder_and_populated_tab_renders_lines() {
    init_logging();
    let paper = AnalyzedPaper {
        title: Some("Paper B".to_string()),
        key_findings: Some("Finding one\nFinding two\nFinding three".to_string()),
        ..AnalyzedPaper::default()
    };
    let state = loaded(vec![paper]);

    let card = &state.view().cards[0];
    assert_eq!(card.selected, Category::Summary);
    assert_eq!(card.content, vec![ContentBlock::Placeholder(NO_INFORMATION)]);

    let state = select(state, 0, Category::KeyFindings);
    assert_eq!(
        state.view().cards[0].content,
        paragraphs(&["Finding one", "Finding two", "Finding three"])
    );
}

#[test]
fn reselecting_same_category_is_idempotent() {
    init_logging();
    let paper = AnalyzedPaper {
        trends: Some("Rising\nFlat".to_string()),
        ..AnalyzedPaper::default()
    };
    let mut state = select(loaded(vec![paper]), 0, Category::Trends);
    assert!(state.consume_dirty());
    let first = state.view().cards[0].clone();

    let mut state = select(state, 0, Category::Trends);
    assert!(!state.consume_dirty());
    let second = state.view().cards[0].clone();

    assert_eq!(first, second);
    assert_eq!(second.content.len(), 2);
}

#[test]
fn tab_selection_is_per_card_and_leaves_results_alone() {
    init_logging();
    let papers = vec![
        AnalyzedPaper {
            summary: Some("first".to_string()),
            code_implementations: Some("pip install a\n  run".to_string()),
            ..AnalyzedPaper::default()
        },
        AnalyzedPaper {
            summary: Some("second".to_string()),
            ..AnalyzedPaper::default()
        },
    ];
    let state = loaded(papers.clone());
    let mut state = select(state, 0, Category::CodeImplementations);
    assert!(state.consume_dirty());

    let view = state.view();
    assert_eq!(
        view.cards[0].content,
        vec![ContentBlock::Code("pip install a\n  run".to_string())]
    );
    assert_eq!(view.cards[1].selected, Category::Summary);
    assert_eq!(view.cards[1].content, paragraphs(&["second"]));
    assert_eq!(state.request().results(), papers.as_slice());

    let active: Vec<_> = view.cards[0]
        .tabs
        .iter()
        .filter(|tab| tab.active)
        .map(|tab| tab.label)
        .collect();
    assert_eq!(active, vec!["Code"]);
}

#[test]
fn out_of_range_card_selection_is_ignored() {
    init_logging();
    let state = loaded(vec![AnalyzedPaper::default()]);
    let before = state.clone();
    let (mut next, effects) = update(
        state,
        Msg::CategorySelected {
            card: 5,
            category: Category::Trends,
        },
    );
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
    assert_eq!(next, before);
}

#[test]
fn new_results_reset_tabs_to_summary() {
    init_logging();
    let state = select(loaded(vec![AnalyzedPaper::default()]), 0, Category::FutureWork);
    let (state, _) = update(state, Msg::QuerySubmitted);
    let (state, _) = update(
        state,
        Msg::AnalysisSucceeded {
            request_id: 2,
            papers: vec![AnalyzedPaper::default()],
        },
    );
    assert_eq!(state.view().cards[0].selected, Category::Summary);
}

#[test]
fn title_and_link_fall_back_when_missing() {
    init_logging();
    let papers = vec![
        AnalyzedPaper::default(),
        AnalyzedPaper {
            title: Some(String::new()),
            link: Some(String::new()),
            ..AnalyzedPaper::default()
        },
        AnalyzedPaper {
            title: Some("Named".to_string()),
            link: Some("http://arxiv.org/abs/2401.00001v1".to_string()),
            ..AnalyzedPaper::default()
        },
    ];
    let view = loaded(papers).view();

    assert_eq!(view.cards[0].title, UNTITLED_PAPER);
    assert_eq!(view.cards[0].link, None);
    assert_eq!(view.cards[1].title, UNTITLED_PAPER);
    assert_eq!(view.cards[1].link, None);
    assert_eq!(view.cards[2].title, "Named");
    assert_eq!(
        view.cards[2].link.as_deref(),
        Some("http://arxiv.org/abs/2401.00001v1")
    );
}

#[test]
fn every_category_renders_from_its_own_field() {
    init_logging();
    let json = serde_json::json!({
        "summary": "s",
        "key_findings": "k",
        "trends": "t",
        "advantages_disadvantages": "a",
        "related_work": "r",
        "code_implementations": "c",
        "citations_references": "ci",
        "future_work": "f"
    });
    let paper: AnalyzedPaper = serde_json::from_value(json).expect("paper");

    for category in Category::ALL {
        let blocks = render_category(&paper, category);
        let expected = paper.field(category).expect("populated").to_string();
        let expected = match category {
            Category::CodeImplementations => ContentBlock::Code(expected),
            _ => ContentBlock::Paragraph(expected),
        };
        assert_eq!(blocks, vec![expected], "category {}", category.key());
    }
}

#[test]
fn paper_deserializes_nulls_and_ignores_unknown_keys() {
    let paper: AnalyzedPaper = serde_json::from_str(
        r#"{"title": "T", "link": null, "summary": "S", "score": 0.9}"#,
    )
    .expect("paper");
    assert_eq!(paper.title.as_deref(), Some("T"));
    assert_eq!(paper.link, None);
    assert_eq!(paper.field(Category::Summary), Some("S"));
    assert_eq!(paper.field(Category::Trends), None);
}
