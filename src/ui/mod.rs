//! Terminal UI for browsing the catalog: category tabs, a debounced search
//! box, attribute filters, and a result list with detail, build-strategy,
//! and chat overlays. The query engine is re-evaluated on every committed
//! input change; advice requests run on a worker thread so the event loop
//! never blocks on the network.

mod components;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;

use crate::advisor::{AdviceReply, AdviceRequest, AdvisorWorker};
use crate::catalog::{Record, CATEGORIES};
use crate::query::evaluate;

use components::{
    BuildPrompt, CategoryTabs, ChatPanel, DetailPanel, FilterPanel, ResultList, SearchBar,
};

/// Which modal is on top of the browse view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlay {
    None,
    Detail,
    Build,
    Chat,
}

/// Run the interactive browser until the user quits
pub fn run_browser() -> Result<()> {
    let mut app = BrowseApp::new()?;
    app.run()
}

pub struct BrowseApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    worker: AdvisorWorker,
    tabs: CategoryTabs,
    search: SearchBar,
    filters: FilterPanel,
    results: ResultList,
    detail: DetailPanel,
    build: BuildPrompt,
    chat: ChatPanel,
    overlay: Overlay,
    should_quit: bool,
}

impl BrowseApp {
    /// Set up the terminal and compute the initial result set
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let mut app = Self {
            terminal,
            worker: AdvisorWorker::spawn(),
            tabs: CategoryTabs::new(),
            search: SearchBar::new(),
            filters: FilterPanel::new(),
            results: ResultList::new(),
            detail: DetailPanel::new(),
            build: BuildPrompt::new(),
            chat: ChatPanel::new(),
            overlay: Overlay::None,
            should_quit: false,
        };
        app.refresh();
        Ok(app)
    }

    pub fn run(&mut self) -> Result<()> {
        while !self.should_quit {
            if event::poll(Duration::from_millis(50))? {
                if let CrosstermEvent::Key(key) = event::read()? {
                    self.on_key(key);
                }
            }
            self.tick();
            self.draw()?;
        }
        self.restore()
    }

    /// Re-run the query pipeline over the current inputs
    fn refresh(&mut self) {
        let records = evaluate(
            self.tabs.active(),
            self.search.committed(),
            &self.filters.options(),
        );
        self.results.set_records(records);
    }

    fn searching(&self) -> bool {
        !self.search.committed().is_empty()
    }

    /// Commit debounced search input and drain finished advice replies
    fn tick(&mut self) {
        if self.search.tick() {
            self.refresh();
        }

        while let Some(reply) = self.worker.try_recv() {
            match reply {
                AdviceReply::Advice { enchant_id, advice } => {
                    self.detail.set_advice(enchant_id, advice);
                }
                AdviceReply::Build { strategy, .. } => {
                    self.build.set_result(strategy);
                }
                AdviceReply::Chat { text } => {
                    self.chat.receive(text);
                }
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.overlay {
            Overlay::Detail => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                    self.detail.close();
                    self.overlay = Overlay::None;
                }
                _ => {}
            },
            Overlay::Build => match key.code {
                KeyCode::Esc => self.overlay = Overlay::None,
                KeyCode::Enter => {
                    self.build.begin_request();
                    self.worker.request(AdviceRequest::Build {
                        item: self.build.item.clone(),
                    });
                }
                KeyCode::Char(c) => self.build.push(c),
                KeyCode::Backspace => self.build.pop(),
                _ => {}
            },
            Overlay::Chat => match key.code {
                KeyCode::Esc => self.overlay = Overlay::None,
                KeyCode::Enter => {
                    if let Some((history, message)) = self.chat.submit() {
                        self.worker.request(AdviceRequest::Chat { history, message });
                    }
                }
                KeyCode::Char(c) => self.chat.push(c),
                KeyCode::Backspace => self.chat.pop(),
                _ => {}
            },
            Overlay::None => self.on_browse_key(key),
        }
    }

    fn on_browse_key(&mut self, key: KeyEvent) {
        if self.search.is_editing() {
            match key.code {
                KeyCode::Enter => self.search.stop_editing(),
                KeyCode::Esc => {
                    self.search.clear();
                    self.refresh();
                }
                KeyCode::Char(c) => self.search.push(c),
                KeyCode::Backspace => self.search.pop(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.search.start_editing(),
            KeyCode::Char('f') => self.filters.open = !self.filters.open,
            KeyCode::Char('t') if self.filters.open => {
                self.filters.toggle_treasure();
                self.refresh();
            }
            KeyCode::Char('n') if self.filters.open => {
                self.filters.toggle_curses();
                self.refresh();
            }
            KeyCode::Char('i') if self.filters.open => {
                self.filters.cycle_item();
                self.refresh();
            }
            KeyCode::Char('r') if self.filters.open => {
                self.filters.reset();
                self.refresh();
            }
            KeyCode::Char('b') => self.overlay = Overlay::Build,
            KeyCode::Char('c') => self.overlay = Overlay::Chat,
            // Category selection is ignored by the engine during a global
            // search; don't pretend otherwise
            KeyCode::Left if !self.searching() => {
                self.tabs.prev();
                self.refresh();
            }
            KeyCode::Right | KeyCode::Tab if !self.searching() => {
                self.tabs.next();
                self.refresh();
            }
            KeyCode::Down | KeyCode::Char('j') => self.results.next(),
            KeyCode::Up | KeyCode::Char('k') => self.results.prev(),
            KeyCode::Enter => self.open_detail(),
            KeyCode::Esc if self.searching() => {
                self.search.clear();
                self.refresh();
            }
            _ => {}
        }
    }

    fn open_detail(&mut self) {
        let Some(record) = self.results.selected() else {
            return;
        };
        self.detail.open(record);
        self.overlay = Overlay::Detail;

        if let Record::Enchant(enchant) = record {
            self.worker.request(AdviceRequest::Advice {
                enchant,
                context: "general usage".into(),
            });
        }
    }

    fn draw(&mut self) -> Result<()> {
        let searching = self.searching();
        let mut title = if searching {
            format!("Global Search Results ({} found)", self.results.len())
        } else {
            let label = CATEGORIES
                .iter()
                .find(|c| c.category == self.tabs.active())
                .map(|c| c.label)
                .unwrap_or_default();
            format!("{} ({})", label, self.results.len())
        };
        if self.filters.is_active() {
            title.push_str(" [filtered]");
        }

        let hint = if self.worker.has_credentials() {
            " ←/→ category  ↑/↓ select  ⏎ details  / search  f filters  b build  c chat  q quit"
        } else {
            " GEMINI_API_KEY not set: advice degrades to fallback text  —  q quit"
        };

        let tabs = &self.tabs;
        let search = &self.search;
        let filters = &self.filters;
        let results = &mut self.results;
        let detail = &self.detail;
        let build = &self.build;
        let chat = &self.chat;
        let overlay = self.overlay;

        self.terminal.draw(|frame| {
            let area = frame.area();
            let filter_height = if filters.open { 3 } else { 0 };
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),             // tabs + search
                    Constraint::Length(filter_height), // filter panel
                    Constraint::Min(5),                // results
                    Constraint::Length(1),             // key hints
                ])
                .split(area);

            let header = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(40), Constraint::Length(42)])
                .split(chunks[0]);

            tabs.render(frame, header[0], searching);
            search.render(frame, header[1]);
            if filters.open {
                filters.render(frame, chunks[1]);
            }
            results.render(frame, chunks[2], &title);

            let hints = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)));
            frame.render_widget(hints, chunks[3]);

            match overlay {
                Overlay::Detail => detail.render(frame, centered_rect(60, 70, area)),
                Overlay::Build => build.render(frame, centered_rect(60, 60, area)),
                Overlay::Chat => chat.render(frame, centered_rect(70, 80, area)),
                Overlay::None => {}
            }
        })?;

        Ok(())
    }

    /// Restore the terminal without waiting for a keypress
    fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        self.terminal.backend_mut().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for BrowseApp {
    fn drop(&mut self) {
        // Best effort cleanup
        terminal::disable_raw_mode().ok();
        self.terminal
            .backend_mut()
            .execute(LeaveAlternateScreen)
            .ok();
        self.terminal.show_cursor().ok();
    }
}

/// Centered sub-rect for overlay modals, sized as percentages of the frame
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
