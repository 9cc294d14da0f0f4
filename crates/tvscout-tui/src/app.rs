//! Application state, controllers, and the event loop.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tvscout_core::TvMaze;

use crate::ui;
use crate::view::{EpisodePanel, ShowList};

const READY_HINT: &str = "Type a show name. Enter: search. Esc: quit.";

/// Which part of the screen owns keyboard input.
pub enum Focus {
    Search,
    Results,
}

pub struct App {
    pub api: TvMaze,
    pub focus: Focus,
    pub query: String,
    pub shows: ShowList,
    pub episodes: EpisodePanel,
    /// Name of the show the episode modal is open for; `None` = closed.
    pub episodes_for: Option<String>,
    /// Blocking error dialog. While set, every other interaction is held
    /// until the user dismisses it.
    pub error: Option<String>,
    pub status: String,
}

impl App {
    /// Build the app around an API handle. The handle is passed in rather
    /// than created here so tests and alternative frontends can supply
    /// their own.
    pub fn new(api: TvMaze) -> Self {
        Self {
            api,
            focus: Focus::Search,
            query: String::new(),
            shows: ShowList::default(),
            episodes: EpisodePanel::default(),
            episodes_for: None,
            error: None,
            status: READY_HINT.to_string(),
        }
    }

    /// Search form submission: fetch matches and replace the card list.
    ///
    /// The caller guarantees the query is non-empty; an empty submit is a
    /// no-op upstream and never reaches this method.
    pub async fn submit_search(&mut self) {
        let result = self.api.search_shows(&self.query).await;
        match result {
            Ok(shows) => {
                self.shows.replace(&shows);
                self.query.clear();
                self.focus = Focus::Results;
                self.status = format!(
                    "{} shows. Up/Down to select, Enter for episodes.",
                    self.shows.cards().len()
                );
            }
            Err(error) => {
                self.error = Some(error.to_string());
                self.status = READY_HINT.to_string();
            }
        }
    }

    /// "Episodes" activation on the selected card.
    pub async fn open_episodes(&mut self) {
        // Empty the panel up front so a prior show's entries never survive
        // into this open, even if the fetch fails.
        self.episodes.clear();

        let Some(card) = self.shows.selected() else {
            return;
        };
        let show_id = card.show_id;
        let name = card.name.clone();

        match self.api.episodes(show_id).await {
            Ok(episodes) => {
                self.status = format!("{} episodes for {}.", episodes.len(), name);
                self.episodes.render(&episodes);
                self.episodes_for = Some(name);
            }
            Err(error) => {
                self.error = Some(error.to_string());
            }
        }
    }
}

pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };

        // The error dialog is blocking: nothing else reacts until the user
        // dismisses it.
        if app.error.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.error = None;
            }
            continue;
        }

        if app.episodes_for.is_some() {
            match key.code {
                KeyCode::Up => app.episodes.select_prev(),
                KeyCode::Down => app.episodes.select_next(),
                KeyCode::Esc | KeyCode::Enter => app.episodes_for = None,
                _ => {}
            }
            continue;
        }

        match app.focus {
            Focus::Search => match key.code {
                KeyCode::Char(c) => {
                    app.query.push(c);
                }
                KeyCode::Backspace => {
                    app.query.pop();
                }
                KeyCode::Enter => {
                    // Empty submit stays idle.
                    if !app.query.trim().is_empty() {
                        app.status = "Searching...".to_string();
                        terminal.draw(|f| ui::draw(f, &mut app))?;
                        app.submit_search().await;
                    }
                }
                KeyCode::Down | KeyCode::Tab => {
                    if !app.shows.is_empty() {
                        app.focus = Focus::Results;
                    }
                }
                KeyCode::Esc => return Ok(()),
                _ => {}
            },
            Focus::Results => match key.code {
                KeyCode::Up => app.shows.select_prev(),
                KeyCode::Down => app.shows.select_next(),
                KeyCode::Enter => {
                    app.status = "Fetching episodes...".to_string();
                    terminal.draw(|f| ui::draw(f, &mut app))?;
                    app.open_episodes().await;
                }
                KeyCode::Esc | KeyCode::Tab => {
                    app.focus = Focus::Search;
                    app.status = READY_HINT.to_string();
                }
                _ => {}
            },
        }
    }
}
