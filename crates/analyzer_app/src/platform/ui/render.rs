use analyzer_core::{AppViewModel, ContentBlock, PaperCardView, Phase, TabView};

use super::constants::*;
use super::{Line, LineClass};

const INDENT: &str = "    ";

pub fn render(view: &AppViewModel) -> Vec<Line> {
    let mut lines = vec![
        Line::new(LineClass::Brand, BRAND),
        Line::blank(),
        Line::new(LineClass::Heading, ANALYZER_HEADING),
    ];

    match view.phase {
        Phase::Idle => lines.push(Line::new(LineClass::Hint, QUERY_HINT)),
        Phase::Loading => {
            lines.push(Line::new(LineClass::Status, format!("Topic: {}", printable(&view.query))));
            if let Some(message) = view.loading_message {
                lines.push(Line::new(LineClass::Status, message));
            }
        }
        Phase::Success => {
            lines.push(Line::new(
                LineClass::Status,
                format!(
                    "Topic: {} | Papers: {}",
                    printable(&view.query),
                    view.cards.len()
                ),
            ));
            if view.cards.is_empty() {
                lines.push(Line::new(LineClass::Hint, NO_RESULTS));
            }
        }
        Phase::Failed => {}
    }

    if let Some(error) = &view.error_message {
        lines.push(Line::new(LineClass::Error, error.clone()));
    }

    for card in &view.cards {
        lines.push(Line::blank());
        lines.extend(render_card(card));
    }

    lines
}

fn render_card(card: &PaperCardView) -> Vec<Line> {
    let mut lines = vec![Line::new(
        LineClass::Title,
        format!("[{}] {}", card.index + 1, printable(&card.title)),
    )];
    if let Some(link) = &card.link {
        lines.push(Line::new(
            LineClass::Link,
            format!("{INDENT}{LINK_LABEL}: {}", printable(link)),
        ));
    }
    lines.push(Line::new(LineClass::Tabs, format_tabs(&card.tabs)));

    for block in &card.content {
        match block {
            ContentBlock::Placeholder(text) => {
                lines.push(Line::new(LineClass::Placeholder, format!("{INDENT}{text}")));
            }
            ContentBlock::Paragraph(text) => {
                lines.push(Line::new(
                    LineClass::Paragraph,
                    format!("{INDENT}{}", printable(text)),
                ));
            }
            // Code keeps its whitespace: no indent, no wrapping.
            ContentBlock::Code(code) => {
                lines.extend(code.split('\n').map(|line| {
                    let line = line.strip_suffix('\r').unwrap_or(line);
                    Line::new(LineClass::Code, printable(line))
                }));
            }
        }
    }
    lines
}

/// Swaps every control character except tab for U+FFFD.
fn printable(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if ch.is_control() && ch != '\t' {
                char::REPLACEMENT_CHARACTER
            } else {
                ch
            }
        })
        .collect()
}

fn format_tabs(tabs: &[TabView]) -> String {
    let labels: Vec<String> = tabs
        .iter()
        .map(|tab| {
            if tab.active {
                format!("[{} {}]", tab.number, tab.label)
            } else {
                format!(" {} {} ", tab.number, tab.label)
            }
        })
        .collect();
    format!("{INDENT}{}", labels.join("|"))
}
