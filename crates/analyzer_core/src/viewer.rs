use crate::{AnalyzedPaper, Category};

/// Placeholder shown when the selected field is empty or missing.
pub const NO_INFORMATION: &str = "No information available.";

/// Tab selection of one paper card. Starts on [`Category::Summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabbedViewer {
    category: Category,
}

impl TabbedViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Returns `true` when the selection actually changed.
    pub fn select(&mut self, category: Category) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        true
    }

    pub fn render(&self, paper: &AnalyzedPaper) -> Vec<ContentBlock> {
        render_category(paper, self.category)
    }
}

/// One rendered unit of card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Placeholder(&'static str),
    /// Raw text shown verbatim in monospace.
    Code(String),
    Paragraph(String),
}

/// Renders `category` of `paper` into display blocks.
///
/// Code is kept verbatim. Any other text becomes one paragraph per `\n`-separated
/// line; empty lines survive as empty paragraphs and no markup is interpreted.
pub fn render_category(paper: &AnalyzedPaper, category: Category) -> Vec<ContentBlock> {
    let text = match paper.field(category) {
        Some(text) if !text.is_empty() => text,
        _ => return vec![ContentBlock::Placeholder(NO_INFORMATION)],
    };

    match category {
        Category::CodeImplementations => vec![ContentBlock::Code(text.to_string())],
        Category::Summary
        | Category::KeyFindings
        | Category::Trends
        | Category::AdvantagesDisadvantages
        | Category::RelatedWork
        | Category::CitationsReferences
        | Category::FutureWork => text
            .split('\n')
            .map(|line| ContentBlock::Paragraph(line.strip_suffix('\r').unwrap_or(line).to_string()))
            .collect(),
    }
}
