use super::constants::{BRAND, FOOTER};
use super::{Line, LineClass};

const FEATURES: [(&str, &str); 3] = [
    (
        "AI Summaries",
        "Get concise, accurate summaries of complex papers in seconds.",
    ),
    (
        "Key Findings",
        "Instantly extract the most important results and methodologies.",
    ),
    (
        "Global Search",
        "Access millions of papers from ArXiv directly from one interface.",
    ),
];

/// Static landing page.
pub fn home() -> Vec<Line> {
    let mut lines = vec![
        Line::new(LineClass::Brand, BRAND),
        Line::blank(),
        Line::new(LineClass::Heading, "Unlock Scientific Knowledge"),
        Line::new(
            LineClass::Text,
            "Navigate the world of research with AI-powered summaries, key insights, and trend analysis.",
        ),
        Line::blank(),
    ];
    for (title, text) in FEATURES {
        lines.push(Line::new(LineClass::Title, format!("  {title}")));
        lines.push(Line::new(LineClass::Paragraph, format!("    {text}")));
    }
    lines.push(Line::blank());
    lines.push(Line::new(
        LineClass::Hint,
        "Start researching: type a topic, or :analyze to open the analyzer.",
    ));
    lines.push(Line::new(LineClass::Hint, FOOTER));
    lines
}
