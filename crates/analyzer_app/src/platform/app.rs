use std::sync::mpsc;

use analyzer_core::{update, AppState, Effect, Msg, RequestId};
use analyzer_logging::{analyzer_debug, analyzer_info};
use clap::Parser;

use super::config::Cli;
use super::effects::EffectRunner;
use super::input::{self, UserCommand};
use super::logging;
use super::ui::constants::HELP;
use super::ui::terminal::Terminal;
use super::ui::{pages, render, Line, LineClass};

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(
        cli.log_destination(),
        analyzer_logging::level_for_verbosity(cli.verbose),
    );

    let settings = cli.client_settings();
    analyzer_info!("analysis service base url: {:?}", settings.base_url);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(settings, event_tx.clone())?;
    effects.probe_health();
    input::spawn_reader(event_tx);

    let start = if cli.analyze {
        Route::Analyzer
    } else {
        Route::Home
    };
    let mut app = App::new(start);
    let mut terminal = Terminal::stdout();
    terminal.draw(&app.screen())?;

    while let Ok(event) = event_rx.recv() {
        let outcome = app.handle(event);
        effects.enqueue(outcome.effects);
        if outcome.quit {
            break;
        }
        if outcome.redraw {
            terminal.draw(&app.screen())?;
        } else if !outcome.notice.is_empty() {
            terminal.print(&outcome.notice)?;
        }
    }

    analyzer_info!("exiting");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Analyzer,
}

#[derive(Debug)]
pub enum AppEvent {
    User(UserCommand),
    Analysis(Msg),
    InputClosed,
}

#[derive(Debug, Default)]
struct Outcome {
    effects: Vec<Effect>,
    redraw: bool,
    notice: Vec<Line>,
    quit: bool,
}

impl Outcome {
    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }

    fn notice(lines: Vec<Line>) -> Self {
        Self {
            notice: lines,
            ..Self::default()
        }
    }
}

/// Routing plus the analyzer page state of the current visit.
struct App {
    route: Route,
    /// `Some` exactly while the analyzer page is shown.
    state: Option<AppState>,
    next_request_id: RequestId,
}

impl App {
    fn new(route: Route) -> Self {
        let mut app = Self {
            route: Route::Home,
            state: None,
            next_request_id: 1,
        };
        app.navigate(route);
        app
    }

    fn navigate(&mut self, route: Route) -> bool {
        if self.route == route && (route == Route::Home || self.state.is_some()) {
            return false;
        }
        if let Some(state) = self.state.take() {
            self.next_request_id = state.next_request_id();
        }
        if route == Route::Analyzer {
            self.state = Some(AppState::with_first_request_id(self.next_request_id));
        }
        analyzer_debug!("navigate to {:?}", route);
        self.route = route;
        true
    }

    fn handle(&mut self, event: AppEvent) -> Outcome {
        match event {
            AppEvent::InputClosed => Outcome {
                quit: true,
                ..Outcome::default()
            },
            AppEvent::Analysis(msg) => self.dispatch(msg),
            AppEvent::User(command) => self.handle_command(command),
        }
    }

    fn handle_command(&mut self, command: UserCommand) -> Outcome {
        match command {
            UserCommand::Quit => Outcome {
                quit: true,
                ..Outcome::default()
            },
            UserCommand::Help => Outcome::notice(
                HELP.iter()
                    .map(|line| Line::new(LineClass::Hint, *line))
                    .collect(),
            ),
            UserCommand::Invalid(reason) => Outcome::notice(vec![Line::new(
                LineClass::Error,
                format!("{reason} (:help for commands)"),
            )]),
            UserCommand::Navigate(route) => {
                if self.navigate(route) {
                    Outcome::redraw()
                } else {
                    Outcome::default()
                }
            }
            UserCommand::Query(query) => {
                if query.trim().is_empty() {
                    return Outcome::default();
                }
                let navigated = self.navigate(Route::Analyzer);
                let mut outcome = self.dispatch(Msg::InputChanged(query));
                let submitted = self.dispatch(Msg::QuerySubmitted);
                outcome.effects.extend(submitted.effects);
                outcome.redraw |= submitted.redraw || navigated;
                outcome
            }
            UserCommand::SelectTab { card, category } => {
                if self.route != Route::Analyzer {
                    return Outcome::notice(vec![Line::new(
                        LineClass::Error,
                        "No papers to show here; run a search first.",
                    )]);
                }
                self.dispatch(Msg::CategorySelected { card, category })
            }
        }
    }

    /// Runs `msg` through `update` when the analyzer page is active.
    fn dispatch(&mut self, msg: Msg) -> Outcome {
        let Some(state) = self.state.take() else {
            analyzer_debug!("dropping {:?} outside the analyzer page", msg);
            return Outcome::default();
        };
        let (mut state, effects) = update(state, msg);
        let redraw = state.consume_dirty();
        self.state = Some(state);
        Outcome {
            effects,
            redraw,
            ..Outcome::default()
        }
    }

    fn screen(&self) -> Vec<Line> {
        match (&self.route, &self.state) {
            (Route::Analyzer, Some(state)) => render::render(&state.view()),
            _ => pages::home(),
        }
    }
}
