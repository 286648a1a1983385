//! Main application state and rendering

use crate::data::Severity;
use crate::game::{Game, GameOutcome, GamePhase, Notice};
use crate::tui::widgets::{ClueGauge, DramaticBox};
use crate::tui::{centered_rect, severity_tag, styled_block, Theme, HELP_TEXT, LOGO, SMALL_LOGO};
use crate::tui::{create_content_layout, create_main_area_layout, create_main_layout};
use crate::game::CONFESSION_THRESHOLD;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;
use tracing::debug;

/// Most lines kept in the message pane
const MAX_OUTPUT_LINES: usize = 200;

/// Application state
pub struct App {
    pub game: Game,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub suspect_state: ListState,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub command_output: Vec<String>,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Title,
    Exploring,
    Accusation,
    CaseClosed,
}

/// Input mode for command prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,  // Typing a command
}

impl App {
    pub fn new() -> Self {
        Self::with_game(Game::new())
    }

    pub fn with_game(game: Game) -> Self {
        let mut suspect_state = ListState::default();
        suspect_state.select(Some(0));

        Self {
            game,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::Title,
            suspect_state,
            input_buffer: String::new(),
            input_mode: InputMode::Normal,
            command_output: Vec::new(),
        }
    }

    /// Handle keyboard input
    pub fn handle_input(&mut self) -> std::io::Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(self.running)
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle command input mode separately
        if self.input_mode == InputMode::Command {
            match key.code {
                KeyCode::Enter => {
                    self.execute_command();
                    self.input_mode = InputMode::Normal;
                }
                KeyCode::Esc => {
                    self.input_buffer.clear();
                    self.input_mode = InputMode::Normal;
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Esc if self.show_help => {
                self.show_help = false;
            }
            KeyCode::Char('q') if matches!(self.current_screen, Screen::Title | Screen::CaseClosed) => {
                self.running = false;
            }
            KeyCode::Enter if self.current_screen == Screen::Title => self.start(),
            KeyCode::Char(':') | KeyCode::Char('/')
                if matches!(self.current_screen, Screen::Exploring | Screen::Accusation) =>
            {
                self.input_mode = InputMode::Command;
                self.input_buffer.clear();
            }

            // Exploring
            KeyCode::Char('e') | KeyCode::Left if self.current_screen == Screen::Exploring => {
                self.send("e");
            }
            KeyCode::Char('d') | KeyCode::Right if self.current_screen == Screen::Exploring => {
                self.send("d");
            }
            KeyCode::Char('s') if self.current_screen == Screen::Exploring => {
                self.send("s");
            }

            // Accusation
            KeyCode::Up if self.current_screen == Screen::Accusation => self.select_suspect(-1),
            KeyCode::Down if self.current_screen == Screen::Accusation => self.select_suspect(1),
            KeyCode::Enter if self.current_screen == Screen::Accusation => {
                if let Some(name) = self.selected_suspect() {
                    self.send(&name);
                }
            }
            _ => {}
        }
    }

    fn start(&mut self) {
        self.command_output.clear();
        self.command_output.push("═══════════════════════════════════════════════".to_string());
        self.command_output.push(format!("[CASE] {}", self.game.title));
        self.command_output.push(format!("[CASE] {}", self.game.synopsis));
        self.command_output.push("═══════════════════════════════════════════════".to_string());
        self.command_output.push("[TIP] e/← left door, d/→ right door, s to leave".to_string());
        self.current_screen = Screen::Exploring;

        let notices = self.game.begin();
        self.push_notices(&notices);
        self.sync_screen();
    }

    /// Execute a typed command
    fn execute_command(&mut self) {
        let cmd = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        if cmd.is_empty() {
            return;
        }
        self.command_output.push(format!("> {cmd}"));
        if matches!(cmd.to_lowercase().as_str(), "help" | "?") {
            self.show_help = true;
            return;
        }
        self.send(&cmd);
    }

    /// Hand input to the game and show what happened
    fn send(&mut self, input: &str) {
        debug!(%input, screen = ?self.current_screen, "input");
        match self.game.submit(input) {
            Ok(notices) => self.push_notices(&notices),
            Err(err) => self.command_output.push(format!("[ERROR] {err}")),
        }
        self.sync_screen();
    }

    fn push_notices(&mut self, notices: &[Notice]) {
        for notice in notices {
            let tag = severity_tag(&notice.severity());
            if matches!(notice, Notice::Arrived { .. }) {
                self.command_output.push(String::new());
            }
            for line in notice.lines() {
                self.command_output.push(format!("{tag}{line}"));
            }
        }

        // Keep output buffer manageable
        if self.command_output.len() > MAX_OUTPUT_LINES {
            let excess = self.command_output.len() - MAX_OUTPUT_LINES;
            self.command_output.drain(..excess);
        }
    }

    fn sync_screen(&mut self) {
        self.current_screen = match self.game.phase {
            GamePhase::Exploring => Screen::Exploring,
            GamePhase::Accusation => Screen::Accusation,
            GamePhase::Closed(_) => Screen::CaseClosed,
        };
    }

    fn suspect_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .game
            .suspects()
            .suspects()
            .into_iter()
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    fn selected_suspect(&self) -> Option<String> {
        let names = self.suspect_names();
        self.suspect_state.selected().and_then(|i| names.get(i).cloned())
    }

    fn select_suspect(&mut self, delta: i32) {
        let count = self.suspect_names().len();
        if count == 0 {
            return;
        }
        let current = self.suspect_state.selected().unwrap_or(0) as i32;
        let next = (current + delta).rem_euclid(count as i32) as usize;
        self.suspect_state.select(Some(next));
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::Title => self.render_title(frame),
            _ => self.render_game(frame),
        }

        if self.current_screen == Screen::Accusation {
            self.render_accusation_overlay(frame);
        }
        if self.current_screen == Screen::CaseClosed {
            self.render_verdict_overlay(frame);
        }

        // Overlay help if showing
        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_title(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Clear, area);
        let logo = Paragraph::new(LOGO)
            .style(Style::default().fg(self.theme.accent).bg(self.theme.bg))
            .alignment(Alignment::Center);
        frame.render_widget(logo, area);
    }

    fn render_game(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = create_main_layout(area);

        // Header
        self.render_header(frame, layout[0]);

        let content_layout = create_content_layout(layout[1]);

        // Room panel
        self.render_room_panel(frame, content_layout[0]);

        let main_layout = create_main_area_layout(content_layout[1]);

        // Messages/narrative
        self.render_messages(frame, main_layout[0]);

        // Clue notebook
        self.render_notebook(frame, main_layout[1]);

        // Status bar
        self.render_status_bar(frame, layout[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(19),
                Constraint::Min(20),
                Constraint::Length(24),
            ])
            .split(area);

        let logo = Paragraph::new(SMALL_LOGO)
            .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(logo, header_layout[0]);

        let title = Paragraph::new(self.game.title.clone())
            .style(Style::default().fg(self.theme.header))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(title, header_layout[1]);

        let moves = Paragraph::new(format!(" Moves {} ", self.game.stats.commands_issued))
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Right)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(moves, header_layout[2]);
    }

    fn render_room_panel(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),      // Room and exits
                Constraint::Length(4),   // Clue gauge
            ])
            .split(area);

        let expedition = self.game.expedition();
        let room = expedition.current_room();
        let mut lines = vec![
            Line::from(Span::styled(
                room.name.clone(),
                Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        if expedition.is_over() {
            lines.push(Line::from(Span::styled(
                "Exploration over",
                Style::default().fg(self.theme.warning),
            )));
        } else {
            let exits = room.exits();
            if exits.is_empty() {
                lines.push(Line::from("No way forward"));
            }
            for (direction, name) in exits {
                let key = match direction {
                    crate::data::Direction::Left => "[E] ←",
                    crate::data::Direction::Right => "[D] →",
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{key} "), Style::default().fg(self.theme.success)),
                    Span::raw(name.to_string()),
                ]));
            }
            lines.push(Line::from(vec![
                Span::styled("[S]   ", Style::default().fg(self.theme.alert)),
                Span::raw("Leave the mansion"),
            ]));
        }
        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(styled_block("Room", &self.theme));
        frame.render_widget(panel, chunks[0]);

        let gauge_block = styled_block("Evidence", &self.theme);
        let inner = gauge_block.inner(chunks[1]);
        frame.render_widget(gauge_block, chunks[1]);
        let gauge = ClueGauge::new(
            "Clues",
            self.game.ledger().len() as u16,
            self.game.total_clues() as u16,
        )
        .color(self.theme.accent)
        .goal(CONFESSION_THRESHOLD as u16);
        frame.render_widget(gauge, inner);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),      // Output
                Constraint::Length(3),   // Input line
            ])
            .split(area);

        let visible_lines = chunks[0].height.saturating_sub(2) as usize;
        let start = self.command_output.len().saturating_sub(visible_lines);
        let output_lines: Vec<Line> = self.command_output[start..].iter().map(|line| {
            let (color, bold) = if line.starts_with("[ERROR]") {
                (Color::Red, true)
            } else if line.starts_with("[WARN]") {
                (Color::Yellow, false)
            } else if line.starts_with("[CLUE]") {
                (Color::Cyan, true)
            } else if line.starts_with("[VERDICT]") {
                (Color::Magenta, true)
            } else if line.starts_with("[CASE]") || line.starts_with("═") {
                (self.theme.header, false)
            } else if line.starts_with("[TIP]") || line.starts_with('>') {
                (Color::DarkGray, false)
            } else {
                (self.theme.fg, false)
            };
            let mut style = Style::default().fg(color);
            if bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(line.clone(), style))
        }).collect();

        let output = Paragraph::new(output_lines)
            .block(styled_block("Investigation", &self.theme));
        frame.render_widget(output, chunks[0]);

        let (prompt, style) = if self.input_mode == InputMode::Command {
            (format!("> {}_", self.input_buffer), Style::default().fg(self.theme.accent))
        } else {
            ("Press : to type a command, ? for help".to_string(), Style::default().fg(Color::DarkGray))
        };
        let input = Paragraph::new(prompt)
            .style(style)
            .block(styled_block("Command", &self.theme));
        frame.render_widget(input, chunks[1]);
    }

    fn render_notebook(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = if self.game.ledger().is_empty() {
            vec![ListItem::new("  (no clues yet)").style(Style::default().fg(Color::DarkGray))]
        } else {
            self.game
                .ledger()
                .iter()
                .map(|clue| ListItem::new(format!("  {} {clue}", Severity::Discovery.symbol())))
                .collect()
        };
        let list = List::new(items).block(styled_block("Notebook", &self.theme));
        frame.render_widget(list, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status = Paragraph::new(self.game.check_status())
            .style(Style::default().fg(self.theme.fg))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.border)));
        frame.render_widget(status, area);
    }

    fn render_accusation_overlay(&mut self, frame: &mut Frame) {
        let names = self.suspect_names();
        let area = centered_rect(40, names.len() as u16 + 4, frame.area());
        frame.render_widget(Clear, area);

        let items: Vec<ListItem> = names.iter().map(|name| ListItem::new(format!("  {name}"))).collect();
        let list = List::new(items)
            .block(styled_block("Who did it?", &self.theme))
            .highlight_style(Style::default().fg(self.theme.accent).add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶");
        frame.render_stateful_widget(list, area, &mut self.suspect_state);
    }

    fn render_verdict_overlay(&self, frame: &mut Frame) {
        let (title, color, mut lines) = match (&self.game.phase, &self.game.verdict) {
            (GamePhase::Closed(GameOutcome::NoEvidence), _) => (
                "NO CASE",
                Color::DarkGray,
                vec!["You left without a single clue.".to_string()],
            ),
            (GamePhase::Closed(outcome), Some(summary)) => (
                if *outcome == GameOutcome::CaseSolved { "CASE SOLVED" } else { "CASE OPEN" },
                if *outcome == GameOutcome::CaseSolved { Color::Green } else { Color::Red },
                Notice::Verdict(summary.clone()).lines(),
            ),
            _ => return,
        };
        lines.push(String::new());
        lines.push("Press q to leave the manor.".to_string());

        let area = centered_rect(60, lines.len() as u16 + 2, frame.area());
        frame.render_widget(Clear, area);
        frame.render_widget(DramaticBox::new(title).content(lines).border_color(color), area);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = centered_rect(60, 20, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.accent)));
        frame.render_widget(help, area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
