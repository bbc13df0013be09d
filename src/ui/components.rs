//! UI components for the catalog browser. Each component owns its state and
//! knows how to render itself into a Rect.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap};
use ratatui::Frame;
use std::time::{Duration, Instant};

use crate::advisor::{Advice, ChatTurn, Role};
use crate::catalog::{Category, Record, CATEGORIES, ITEM_TYPES};
use crate::query::FilterOptions;

/// Keystrokes are staged this long before the engine sees them
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

// =============================================================================
// Category tabs
// =============================================================================

pub struct CategoryTabs {
    index: usize,
}

impl CategoryTabs {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn active(&self) -> Category {
        CATEGORIES[self.index].category
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % CATEGORIES.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + CATEGORIES.len() - 1) % CATEGORIES.len();
    }

    /// `dimmed` while a global search is active and category selection is
    /// ignored by the engine
    pub fn render(&self, frame: &mut Frame, area: Rect, dimmed: bool) {
        let titles: Vec<Line> = CATEGORIES
            .iter()
            .map(|c| Line::from(format!(" {} {} ", c.glyph, c.label)))
            .collect();

        let style = if dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let highlight = if dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        };

        let tabs = Tabs::new(titles)
            .select(self.index)
            .style(style)
            .highlight_style(highlight)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Enchant Codex ")
                    .border_style(Style::default().fg(Color::Blue)),
            );

        frame.render_widget(tabs, area);
    }
}

// =============================================================================
// Search bar with debounce
// =============================================================================

pub struct SearchBar {
    input: String,
    committed: String,
    editing: bool,
    dirty_since: Option<Instant>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            committed: String::new(),
            editing: false,
            dirty_since: None,
        }
    }

    /// The debounced text the engine actually sees
    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
        self.dirty_since = Some(Instant::now());
    }

    pub fn pop(&mut self) {
        self.input.pop();
        self.dirty_since = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.committed.clear();
        self.dirty_since = None;
        self.editing = false;
    }

    /// Commit staged input once it has been idle for the debounce window.
    /// Returns true if the committed text changed.
    pub fn tick(&mut self) -> bool {
        match self.dirty_since {
            Some(at) if at.elapsed() >= SEARCH_DEBOUNCE => {
                self.dirty_since = None;
                if self.committed != self.input {
                    self.committed = self.input.clone();
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let (border, title) = if self.editing {
            (Color::Magenta, " Search (Enter to keep, Esc to clear) ")
        } else {
            (Color::Blue, " Search (/) ")
        };

        let mut spans = vec![Span::raw(" ")];
        if self.input.is_empty() && !self.editing {
            spans.push(Span::styled(
                "Search enchantments...",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::styled(
                &self.input,
                Style::default().fg(Color::White),
            ));
        }
        if self.editing {
            spans.push(Span::styled("▏", Style::default().fg(Color::Magenta)));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border)),
        );
        frame.render_widget(paragraph, area);
    }
}

// =============================================================================
// Filter panel
// =============================================================================

pub struct FilterPanel {
    pub open: bool,
    treasure_only: bool,
    no_curses: bool,
    /// 0 = All, otherwise ITEM_TYPES[index - 1]
    item_index: usize,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self {
            open: false,
            treasure_only: false,
            no_curses: false,
            item_index: 0,
        }
    }

    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            item_type: self.item_label().map(|s| s.to_string()),
            treasure_only: self.treasure_only,
            no_curses: self.no_curses,
        }
    }

    fn item_label(&self) -> Option<&'static str> {
        if self.item_index == 0 {
            None
        } else {
            Some(ITEM_TYPES[self.item_index - 1])
        }
    }

    pub fn is_active(&self) -> bool {
        self.item_index != 0 || self.treasure_only || self.no_curses
    }

    pub fn toggle_treasure(&mut self) {
        self.treasure_only = !self.treasure_only;
    }

    pub fn toggle_curses(&mut self) {
        self.no_curses = !self.no_curses;
    }

    pub fn cycle_item(&mut self) {
        self.item_index = (self.item_index + 1) % (ITEM_TYPES.len() + 1);
    }

    pub fn reset(&mut self) {
        self.treasure_only = false;
        self.no_curses = false;
        self.item_index = 0;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mark = |on: bool| if on { "[x]" } else { "[ ]" };

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled("(i)", Style::default().fg(Color::Magenta)),
            Span::raw(format!(
                " item: {}   ",
                self.item_label().unwrap_or("All")
            )),
            Span::styled("(t)", Style::default().fg(Color::Magenta)),
            Span::raw(format!(" {} treasure only   ", mark(self.treasure_only))),
            Span::styled("(n)", Style::default().fg(Color::Magenta)),
            Span::raw(format!(" {} no curses   ", mark(self.no_curses))),
            Span::styled("(r)", Style::default().fg(Color::Magenta)),
            Span::raw(" reset"),
        ]);

        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Filters ")
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(paragraph, area);
    }
}

// =============================================================================
// Result list
// =============================================================================

pub struct ResultList {
    records: Vec<Record>,
    state: ListState,
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            state: ListState::default(),
        }
    }

    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = records;
        // Clamp the cursor instead of resetting it on every keystroke
        let selected = match self.records.len() {
            0 => None,
            n => Some(self.state.selected().unwrap_or(0).min(n - 1)),
        };
        self.state.select(selected);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn selected(&self) -> Option<Record> {
        self.state.selected().map(|i| self.records[i])
    }

    pub fn next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let i = self
            .state
            .selected()
            .map_or(0, |i| (i + 1) % self.records.len());
        self.state.select(Some(i));
    }

    pub fn prev(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let i = self
            .state
            .selected()
            .map_or(0, |i| (i + self.records.len() - 1) % self.records.len());
        self.state.select(Some(i));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, title: &str) {
        let items: Vec<ListItem> = self.records.iter().map(render_line).collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", title))
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▸ ");

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

/// One-line rendering per record kind
fn render_line(record: &Record) -> ListItem<'static> {
    match record {
        Record::Enchant(e) => {
            let mut spans = vec![
                Span::styled("✦ ", Style::default().fg(Color::Magenta)),
                Span::styled(e.name, Style::default().fg(Color::White)),
                Span::styled(
                    format!("  max {}  ", e.max_level),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(e.items.join(", "), Style::default().fg(Color::Gray)),
            ];
            if e.is_treasure {
                spans.push(Span::styled(
                    "  [Treasure]",
                    Style::default().fg(Color::Yellow),
                ));
            }
            if e.is_curse {
                spans.push(Span::styled("  [Curse]", Style::default().fg(Color::Red)));
            }
            ListItem::new(Line::from(spans))
        }
        Record::Combo(c) => ListItem::new(Line::from(vec![
            Span::styled("▤ ", Style::default().fg(Color::Yellow)),
            Span::styled(c.name, Style::default().fg(Color::White)),
            Span::styled(
                format!("  {}  {} enchants", c.item, c.enchants.len()),
                Style::default().fg(Color::Gray),
            ),
        ])),
        Record::Table(t) => ListItem::new(Line::from(vec![
            Span::styled("📖 ", Style::default().fg(Color::Cyan)),
            Span::styled(t.name, Style::default().fg(Color::White)),
            Span::styled(
                format!(
                    "  table max {}  weight {}  {}",
                    t.max_table_level, t.weight, t.rarity
                ),
                Style::default().fg(Color::Gray),
            ),
        ])),
    }
}

// =============================================================================
// Detail panel
// =============================================================================

pub struct DetailPanel {
    record: Option<Record>,
    advice: Option<Advice>,
    loading: bool,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self {
            record: None,
            advice: None,
            loading: false,
        }
    }

    pub fn open(&mut self, record: Record) {
        self.record = Some(record);
        self.advice = None;
        self.loading = matches!(record, Record::Enchant(_));
    }

    pub fn close(&mut self) {
        self.record = None;
        self.advice = None;
        self.loading = false;
    }

    /// Last write wins; a reply for a record that is no longer open is
    /// dropped here rather than shown against the wrong enchantment.
    pub fn set_advice(&mut self, enchant_id: &str, advice: Advice) {
        if let Some(Record::Enchant(e)) = self.record {
            if e.id == enchant_id {
                self.advice = Some(advice);
                self.loading = false;
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(record) = &self.record else {
            return;
        };

        let mut lines: Vec<Line> = Vec::new();
        match record {
            Record::Enchant(e) => {
                lines.push(title_line(e.name, "Enchantment"));
                lines.push(Line::from(""));
                lines.push(field("Max level", e.max_level.to_string()));
                lines.push(field("Items", e.items.join(", ")));
                if !e.incompatible_with.is_empty() {
                    lines.push(field("Incompatible", e.incompatible_with.join(", ")));
                }
                if e.is_treasure {
                    lines.push(field("Treasure", "loot, fishing, or trading only".into()));
                }
                if e.is_curse {
                    lines.push(field("Curse", "detrimental effect".into()));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(e.description));
                lines.push(Line::from(""));

                if self.loading {
                    lines.push(Line::from(Span::styled(
                        "CONSULTING THE ORACLE...",
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::SLOW_BLINK),
                    )));
                } else if let Some(advice) = &self.advice {
                    lines.push(Line::from(Span::styled(
                        "Strategic Advice",
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::from(advice.advice.clone()));
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        "Synergy",
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )));
                    lines.push(Line::from(advice.synergy.clone()));
                }
            }
            Record::Combo(c) => {
                lines.push(title_line(c.name, "Best Combo"));
                lines.push(Line::from(""));
                lines.push(field("Item", c.item.to_string()));
                lines.push(field("Enchants", c.enchants.join(" + ")));
                lines.push(Line::from(""));
                lines.push(Line::from(c.description));
            }
            Record::Table(t) => {
                lines.push(title_line(t.name, "Enchanting Table"));
                lines.push(Line::from(""));
                lines.push(field("Table max level", t.max_table_level.to_string()));
                lines.push(field(
                    "Weight",
                    format!("{} ({})", t.weight, t.rarity),
                ));
                lines.push(field("Items", t.items.join(", ")));
            }
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Mystic Analysis (Esc to close) ")
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(ratatui::widgets::Clear, area);
        frame.render_widget(paragraph, area);
    }
}

fn title_line(name: &'static str, kind: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", kind),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn field(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<16}", label),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(value),
    ])
}

// =============================================================================
// Build-strategy prompt
// =============================================================================

pub struct BuildPrompt {
    pub item: String,
    result: Option<String>,
    loading: bool,
}

impl BuildPrompt {
    pub fn new() -> Self {
        Self {
            item: "Diamond Pickaxe".into(),
            result: None,
            loading: false,
        }
    }

    pub fn push(&mut self, c: char) {
        self.item.push(c);
    }

    pub fn pop(&mut self) {
        self.item.pop();
    }

    pub fn begin_request(&mut self) {
        self.result = None;
        self.loading = true;
    }

    pub fn set_result(&mut self, strategy: String) {
        self.result = Some(strategy);
        self.loading = false;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Item: ", Style::default().fg(Color::Cyan)),
                Span::styled(&self.item, Style::default().fg(Color::White)),
                Span::styled("▏", Style::default().fg(Color::Magenta)),
            ]),
            Line::from(""),
        ];

        if self.loading {
            lines.push(Line::from(Span::styled(
                "CONSULTING THE ORACLE...",
                Style::default().fg(Color::Magenta),
            )));
        } else if let Some(result) = &self.result {
            lines.push(Line::from(result.clone()));
        } else {
            lines.push(Line::from(Span::styled(
                "Enter to ask for the best build, Esc to close.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Build Strategy ")
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(ratatui::widgets::Clear, area);
        frame.render_widget(paragraph, area);
    }
}

// =============================================================================
// Chat overlay
// =============================================================================

pub struct ChatPanel {
    turns: Vec<ChatTurn>,
    input: String,
    loading: bool,
}

impl ChatPanel {
    pub fn new() -> Self {
        Self {
            turns: vec![ChatTurn::model(
                "Greetings, traveler. Ask me anything about enchantments.",
            )],
            input: String::new(),
            loading: false,
        }
    }

    pub fn push(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop(&mut self) {
        self.input.pop();
    }

    /// Take the pending input as a new user turn. Returns the history to
    /// send (everything before the new message) and the message itself.
    pub fn submit(&mut self) -> Option<(Vec<ChatTurn>, String)> {
        let message = self.input.trim().to_string();
        if message.is_empty() || self.loading {
            return None;
        }
        self.input.clear();
        let history = self.turns.clone();
        self.turns.push(ChatTurn::user(message.clone()));
        self.loading = true;
        Some((history, message))
    }

    pub fn receive(&mut self, text: String) {
        self.turns.push(ChatTurn::model(text));
        self.loading = false;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        for turn in &self.turns {
            let (label, color) = match turn.role {
                Role::User => ("you   ", Color::Cyan),
                Role::Model => ("guide ", Color::Magenta),
            };
            lines.push(Line::from(vec![
                Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::raw(turn.text.clone()),
            ]));
        }
        if self.loading {
            lines.push(Line::from(Span::styled(
                "guide is thinking...",
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::raw(self.input.clone()),
            Span::styled("▏", Style::default().fg(Color::Magenta)),
        ]));

        // Keep the tail visible once the history outgrows the box
        let visible = area.height.saturating_sub(2) as usize;
        if lines.len() > visible {
            lines.drain(..lines.len() - visible);
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Mystic Guide (Esc to close) ")
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(ratatui::widgets::Clear, area);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TOOLS_ENCHANTS;

    #[test]
    fn test_search_commits_after_debounce() {
        let mut bar = SearchBar::new();
        bar.push('f');
        assert!(!bar.tick());
        assert_eq!(bar.committed(), "");

        // Backdate the dirty timestamp instead of sleeping
        bar.dirty_since = Some(Instant::now() - SEARCH_DEBOUNCE);
        assert!(bar.tick());
        assert_eq!(bar.committed(), "f");
    }

    #[test]
    fn test_search_clear_resets_committed_text() {
        let mut bar = SearchBar::new();
        bar.push('x');
        bar.dirty_since = Some(Instant::now() - SEARCH_DEBOUNCE);
        bar.tick();
        bar.clear();
        assert_eq!(bar.committed(), "");
        assert!(!bar.tick());
    }

    #[test]
    fn test_filter_panel_item_cycle_wraps() {
        let mut panel = FilterPanel::new();
        assert_eq!(panel.options().item_type, None);
        panel.cycle_item();
        assert_eq!(panel.options().item_type.as_deref(), Some("Sword"));
        for _ in 0..ITEM_TYPES.len() {
            panel.cycle_item();
        }
        assert_eq!(panel.options().item_type, None);
    }

    #[test]
    fn test_result_list_selection_clamps() {
        let mut list = ResultList::new();
        list.set_records(TOOLS_ENCHANTS.iter().map(Record::Enchant).collect());
        for _ in 0..4 {
            list.next();
        }
        list.set_records(vec![Record::Enchant(&TOOLS_ENCHANTS[0])]);
        assert_eq!(list.selected().map(|r| r.id()), Some("eff"));
    }

    #[test]
    fn test_stale_advice_reply_is_dropped() {
        let mut detail = DetailPanel::new();
        detail.open(Record::Enchant(&TOOLS_ENCHANTS[0]));
        detail.set_advice(
            "mend",
            Advice {
                advice: "late".into(),
                synergy: "none".into(),
            },
        );
        assert!(detail.advice.is_none());
        assert!(detail.loading);
    }

    #[test]
    fn test_chat_submit_excludes_new_message_from_history() {
        let mut chat = ChatPanel::new();
        chat.push('h');
        chat.push('i');
        let (history, message) = chat.submit().unwrap();
        assert_eq!(message, "hi");
        assert_eq!(history.len(), 1);
        assert!(chat.loading);
        // Second submit while loading is refused
        chat.push('x');
        assert!(chat.submit().is_none());
    }
}
