use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use analyzer_core::Category;
use analyzer_logging::{analyzer_debug, analyzer_warn};

use super::app::{AppEvent, Route};

/// One line of terminal input, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Plain text: a topic to analyze.
    Query(String),
    /// `:tab [card] <category>`; `card` is 0-based here, 1-based on screen.
    SelectTab { card: usize, category: Category },
    Navigate(Route),
    Help,
    Quit,
    /// Anything starting with `:` that did not parse; carries the reason.
    Invalid(String),
}

impl UserCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(command) = line.trim_start().strip_prefix(':') else {
            return UserCommand::Query(line.to_string());
        };

        let mut words = command.split_whitespace();
        match words.next() {
            Some("q" | "quit" | "exit") => UserCommand::Quit,
            Some("h" | "help") => UserCommand::Help,
            Some("home") => UserCommand::Navigate(Route::Home),
            Some("analyze") => UserCommand::Navigate(Route::Analyzer),
            Some("t" | "tab") => parse_tab(words.collect()),
            Some(other) => UserCommand::Invalid(format!("unknown command :{other}")),
            None => UserCommand::Invalid("empty command".to_string()),
        }
    }
}

fn parse_tab(args: Vec<&str>) -> UserCommand {
    let (card, category) = match args.as_slice() {
        [category] => ("1", *category),
        [card, category] => (*card, *category),
        _ => return UserCommand::Invalid("usage: :tab [card] <category>".to_string()),
    };

    let card = match card.parse::<usize>() {
        Ok(n) if n >= 1 => n - 1,
        _ => return UserCommand::Invalid(format!("card must be a number from 1, got {card}")),
    };
    match category.parse::<Category>() {
        Ok(category) => UserCommand::SelectTab { card, category },
        Err(err) => UserCommand::Invalid(err.to_string()),
    }
}

/// Reads stdin line by line on a background thread.
///
/// Sends [`AppEvent::InputClosed`] once stdin reaches end of file or fails.
pub fn spawn_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    analyzer_debug!("input line ({} bytes)", line.len());
                    if tx.send(AppEvent::User(UserCommand::parse(&line))).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    analyzer_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}
