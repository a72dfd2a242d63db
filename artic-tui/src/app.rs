//! Application state and event loop.
//!
//! The controller from `artic-lib` owns all table state; this layer only
//! maps key presses to controller operations and keeps a row cursor plus the
//! overlay input buffer. Controller operations are awaited inline, so a
//! fetch blocks further input until it completes — page navigation during a
//! select-first-N accumulation is simply impossible.

use std::sync::Arc;
use std::thread;

use artic_lib::ArticClient;
use artic_lib::table::{
    ApiSource, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, TableController, TableEvent,
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tokio::sync::broadcast;
use tokio::sync::mpsc;

pub struct App {
    pub table: TableController,
    /// Row cursor within the current page.
    pub cursor: usize,
    /// Text buffer of the select-N overlay.
    pub overlay_input: String,
    /// Last controller notification, shown in the footer.
    pub status: String,
    pub should_quit: bool,
    events: broadcast::Receiver<TableEvent>,
}

pub async fn run(terminal: &mut DefaultTerminal) -> Result<(), Box<dyn std::error::Error>> {
    let source = Arc::new(ApiSource::new(ArticClient::new()));
    let mut app = App::new(TableController::new(source));

    // Crossterm's event read is blocking; keep it off the async runtime.
    let (tx, mut rx) = mpsc::unbounded_channel();
    thread::spawn(move || {
        while let Ok(event) = crossterm::event::read() {
            if tx.send(event).is_err() {
                break;
            }
        }
    });

    log::info!("loading initial page");
    app.table.load_page(1, DEFAULT_PAGE_SIZE).await;
    app.drain_events();

    while !app.should_quit {
        terminal.draw(|frame| crate::ui::render(frame, &app))?;

        match rx.recv().await {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                app.handle_key(key).await;
            }
            Some(_) => {}
            None => break,
        }
        app.drain_events();
    }

    log::info!("exiting");
    Ok(())
}

impl App {
    pub fn new(table: TableController) -> Self {
        let events = table.subscribe();
        Self {
            table,
            cursor: 0,
            overlay_input: String::new(),
            status: String::new(),
            should_quit: false,
            events,
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if self.table.overlay_open() {
            self.handle_overlay_key(key).await;
            return;
        }
        if self.table.is_busy() {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => self.cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => self.cursor_up(),
            KeyCode::Right | KeyCode::Char('l') => self.next_page().await,
            KeyCode::Left | KeyCode::Char('h') => self.prev_page().await,
            KeyCode::Char(' ') => self.toggle_current(),
            KeyCode::Char('p') => self.cycle_page_size().await,
            KeyCode::Char('r') => {
                self.table.reload().await;
                self.clamp_cursor();
            }
            KeyCode::Char('s') => self.table.open_overlay(),
            _ => {}
        }
    }

    async fn handle_overlay_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.overlay_input.clear();
                self.table.dismiss_overlay();
            }
            KeyCode::Enter => {
                let raw = self.overlay_input.clone();
                // Invalid input keeps the overlay open for correction.
                if self.table.commit_selection(&raw).await.is_ok() {
                    self.overlay_input.clear();
                }
            }
            KeyCode::Backspace => {
                self.overlay_input.pop();
            }
            KeyCode::Char(c) => self.overlay_input.push(c),
            _ => {}
        }
    }

    async fn next_page(&mut self) {
        if self.table.pagination().has_next() {
            let page = self.table.pagination().current_page() + 1;
            let page_size = self.table.pagination().page_size();
            self.table.load_page(page, page_size).await;
            self.cursor = 0;
        }
    }

    async fn prev_page(&mut self) {
        if self.table.pagination().has_prev() {
            let page = self.table.pagination().current_page() - 1;
            let page_size = self.table.pagination().page_size();
            self.table.load_page(page, page_size).await;
            self.cursor = 0;
        }
    }

    async fn cycle_page_size(&mut self) {
        let current = self.table.pagination().page_size();
        let index = PAGE_SIZE_OPTIONS
            .iter()
            .position(|&size| size == current)
            .unwrap_or(0);
        let next = PAGE_SIZE_OPTIONS[(index + 1) % PAGE_SIZE_OPTIONS.len()];
        self.table.load_page(1, next).await;
        self.cursor = 0;
    }

    fn toggle_current(&mut self) {
        if let Some(artwork) = self.table.rows().get(self.cursor).cloned() {
            self.table.toggle_row(&artwork);
        }
    }

    fn cursor_down(&mut self) {
        if self.cursor + 1 < self.table.rows().len() {
            self.cursor += 1;
        }
    }

    fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.table.rows().len().saturating_sub(1));
    }

    /// Turns pending controller notifications into the footer status.
    pub fn drain_events(&mut self) {
        use broadcast::error::TryRecvError;

        loop {
            match self.events.try_recv() {
                Ok(TableEvent::PageLoaded {
                    page,
                    total_records,
                    ..
                }) => {
                    self.status = format!("page {} loaded, {} artworks total", page, total_records);
                }
                Ok(TableEvent::SelectionReplaced { count }) => {
                    self.status = format!("selected the first {} rows", count);
                }
                Ok(TableEvent::RowToggled { id, selected }) => {
                    self.status = if selected {
                        format!("row {} selected", id)
                    } else {
                        format!("row {} deselected", id)
                    };
                }
                Ok(TableEvent::InvalidInput) => {
                    self.status = "enter a positive number of rows".to_string();
                }
                Ok(TableEvent::OverlayOpened) | Ok(TableEvent::OverlayClosed) => {}
                Err(TryRecvError::Lagged(_)) => continue,
                Err(_) => break,
            }
        }
    }
}
