use crate::catalog;
use crate::config::Config;
use crate::request::Executor;
use crate::state::{count_visible_items, AppState};
use crate::types::InputMode;
use crate::ui;
use crate::ui::draw::SPINNER_FRAMES;
use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    DefaultTerminal, Frame,
};
use std::sync::{Arc, RwLock};
use std::time::Instant;
use tracing::info;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    list_state: ListState,
    config: Config,
    executor: Executor,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let executor = Executor::from_config(&config);

        // Show the server dialog first when nothing is configured
        let mut state = AppState::default();
        if config.origin().is_none() {
            state.input.mode = InputMode::EnteringUrl;
        }

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            list_state: ListState::default(),
            config,
            executor,
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
        })
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        if self.config.origin().is_some() {
            self.load_settings();
        }

        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAMES.len();
                self.last_tick = Instant::now();
            }

            if let Ok(mut state) = self.state.write() {
                state.expire_toast(Instant::now());
            }

            terminal.draw(|frame| self.draw(frame))?;

            let outcome = self.event_handler.handle_events(
                &self.state,
                &mut self.list_state,
                &self.executor,
                self.config.server.base_url.clone(),
            )?;

            // A new server replaces the executor and reloads the catalog
            if let Some(submission) = outcome.url_submitted {
                self.config.set_base_url(submission.base_url)?;
                self.executor = Executor::from_config(&self.config);
                info!("server set to {}", self.executor.origin());
                self.load_settings();
            } else if outcome.reload {
                self.load_settings();
            }
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let Ok(state) = self.state.read() else {
            return;
        };

        // Header, Search Bar, Body, Footer, Toast
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
                Constraint::Length(1), // Toast
            ])
            .split(frame.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[2]);

        let server_url = match self.executor.origin() {
            "" => "No server configured",
            origin => origin,
        };

        ui::render_header(frame, main_chunks[0], &state, server_url, self.spinner_index);
        ui::render_search_bar(frame, main_chunks[1], &state);

        // Ensure we have a selection if items exist; a reload may shrink the list
        let visible = count_visible_items(&state);
        if visible == 0 {
            self.list_state.select(None);
        } else {
            let selected = &mut self.event_handler.selected_index;
            if *selected >= visible {
                *selected = visible - 1;
            }
            if self.list_state.selected() != Some(*selected) {
                self.list_state.select(Some(*selected));
            }
        }

        ui::render_endpoints_panel(
            frame,
            body_chunks[0],
            &state,
            self.spinner_index,
            &mut self.list_state,
        );
        ui::render_details_panel(
            frame,
            body_chunks[1],
            &state,
            self.event_handler.selected_index,
        );
        ui::render_footer(frame, main_chunks[3], &state);
        ui::render_toast(frame, main_chunks[4], state.toast.as_ref());

        // Render modals LAST
        if state.input.mode == InputMode::EnteringUrl {
            ui::render_url_input_modal(frame, &state);
        }
    }

    fn load_settings(&self) {
        let Some(origin) = self.config.origin() else {
            return;
        };
        catalog::load_settings_background(
            Arc::clone(&self.state),
            self.executor.client().clone(),
            origin,
        );
    }
}
