use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One analyzed paper as returned by the analysis endpoint.
///
/// Every field is optional; `null` and a missing key both read as `None`.
/// Unknown keys are ignored so the service can grow its schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyzedPaper {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub key_findings: Option<String>,
    pub trends: Option<String>,
    pub advantages_disadvantages: Option<String>,
    pub related_work: Option<String>,
    pub code_implementations: Option<String>,
    pub citations_references: Option<String>,
    pub future_work: Option<String>,
}

impl AnalyzedPaper {
    /// Text stored under `category`, if any.
    pub fn field(&self, category: Category) -> Option<&str> {
        let value = match category {
            Category::Summary => &self.summary,
            Category::KeyFindings => &self.key_findings,
            Category::Trends => &self.trends,
            Category::AdvantagesDisadvantages => &self.advantages_disadvantages,
            Category::RelatedWork => &self.related_work,
            Category::CodeImplementations => &self.code_implementations,
            Category::CitationsReferences => &self.citations_references,
            Category::FutureWork => &self.future_work,
        };
        value.as_deref()
    }
}

/// The eight tabs of a paper card, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Summary,
    KeyFindings,
    Trends,
    AdvantagesDisadvantages,
    RelatedWork,
    CodeImplementations,
    CitationsReferences,
    FutureWork,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Summary,
        Category::KeyFindings,
        Category::Trends,
        Category::AdvantagesDisadvantages,
        Category::RelatedWork,
        Category::CodeImplementations,
        Category::CitationsReferences,
        Category::FutureWork,
    ];

    /// JSON field name carrying this category.
    pub fn key(self) -> &'static str {
        match self {
            Category::Summary => "summary",
            Category::KeyFindings => "key_findings",
            Category::Trends => "trends",
            Category::AdvantagesDisadvantages => "advantages_disadvantages",
            Category::RelatedWork => "related_work",
            Category::CodeImplementations => "code_implementations",
            Category::CitationsReferences => "citations_references",
            Category::FutureWork => "future_work",
        }
    }

    /// Short tab label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Summary => "Summary",
            Category::KeyFindings => "Key Findings",
            Category::Trends => "Trends",
            Category::AdvantagesDisadvantages => "Pros/Cons",
            Category::RelatedWork => "Related",
            Category::CodeImplementations => "Code",
            Category::CitationsReferences => "Citations",
            Category::FutureWork => "Future",
        }
    }

    /// 1-based position in the tab strip.
    pub fn number(self) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == self)
            .map_or(0, |idx| idx + 1)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts a field key (`key_findings`), a tab label (`pros/cons`) or a tab number (`1`..=`8`).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        if let Ok(number) = needle.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|idx| Category::ALL.get(idx).copied())
                .ok_or_else(|| ParseCategoryError(raw.to_string()));
        }
        Category::ALL
            .into_iter()
            .find(|c| c.key() == needle || c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ParseCategoryError(raw.to_string()))
    }
}
