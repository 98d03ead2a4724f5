use std::io::{self, stdout, Stdout};

use anyhow::Context;
use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use news_core::{update, AppState, AppViewModel, Msg, RequestId};
use news_engine::EngineHandle;
use news_logging::{news_error, news_info};
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::ListState;
use ratatui::Terminal;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::terminal::{CrosstermControl, TerminalGuard};
use super::ui;
use super::ui::constants::{POLL_INTERVAL, UPDATED_AT_FORMAT};
use super::ui::keys::KeyCommand;

type Backend = CrosstermBackend<Stdout>;

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    news_logging::initialize(&config.log_destination, config.log_level);
    news_info!(
        "Starting news reader base_url={} request_timeout={:?}",
        config.endpoint.base(),
        config.fetch.request_timeout
    );

    let engine = EngineHandle::new(config.fetch).context("failed to start fetch engine")?;
    let mut app = App::new(AppState::new(config.endpoint), EffectRunner::new(engine));

    let result = run_in_terminal(&mut app);
    if let Err(err) = &result {
        news_error!("News reader stopped with error: {:#}", err);
    }
    result
}

/// The guard restores the terminal when this returns or unwinds.
fn run_in_terminal(app: &mut App) -> anyhow::Result<()> {
    let _guard = TerminalGuard::enter(CrosstermControl).context("failed to set up terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    app.run(&mut terminal)
}

/// Owns the state. Every `update` happens on this thread, so the request id
/// check and the commit that follows it cannot interleave.
struct App {
    state: AppState,
    runner: EffectRunner,
    view: AppViewModel,
    list_state: ListState,
    last_committed: Option<RequestId>,
    updated_at: Option<String>,
    needs_redraw: bool,
    running: bool,
}

impl App {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        let view = state.view();
        Self {
            state,
            runner,
            view,
            list_state: ListState::default(),
            last_committed: None,
            updated_at: None,
            needs_redraw: true,
            running: true,
        }
    }

    fn run(&mut self, terminal: &mut Terminal<Backend>) -> anyhow::Result<()> {
        self.dispatch(Msg::Started);

        while self.running {
            if self.needs_redraw {
                terminal.draw(|frame| {
                    ui::render::render(
                        frame,
                        &self.view,
                        &mut self.list_state,
                        self.updated_at.as_deref(),
                    )
                })?;
                self.needs_redraw = false;
            }

            self.poll_input()?;

            for msg in self.runner.drain() {
                self.dispatch(msg);
            }
        }

        news_info!("News reader exiting");
        Ok(())
    }

    fn poll_input(&mut self) -> io::Result<()> {
        if !event::poll(POLL_INTERVAL)? {
            return Ok(());
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match ui::keys::map_key(key, &self.view) {
                    Some(KeyCommand::Dispatch(msg)) => self.dispatch(msg),
                    Some(KeyCommand::MoveCursor(delta)) => self.move_cursor(delta),
                    Some(KeyCommand::Quit) => self.running = false,
                    None => {}
                }
            }
            Event::Resize(..) => self.needs_redraw = true,
            _ => {}
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);

        if state.consume_dirty() {
            self.view = state.view();
            self.on_commit(state.committed_request_id());
            self.needs_redraw = true;
        }
        self.state = state;
    }

    fn on_commit(&mut self, committed: Option<RequestId>) {
        if committed == self.last_committed {
            return;
        }
        self.last_committed = committed;
        self.updated_at = Some(Local::now().format(UPDATED_AT_FORMAT).to_string());
        self.list_state
            .select(if self.view.rows.is_empty() { None } else { Some(0) });
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.view.rows.len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.list_state.select(Some(next));
        self.needs_redraw = true;
    }
}
