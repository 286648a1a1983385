//! Terminal User Interface
//!
//! Full-screen front end for the mansion mystery using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use crate::data::Severity;

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub alert: Color,
    pub success: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Yellow,
            alert: Color::Red,
            success: Color::Green,
            warning: Color::LightRed,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Line prefix used in the message log for a severity
pub fn severity_tag(severity: &Severity) -> &'static str {
    match severity {
        Severity::Info => "",
        Severity::Discovery => "[CLUE] ",
        Severity::Warning => "[WARN] ",
        Severity::Verdict => "[VERDICT] ",
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
╔══════════════════════════════════════════════════════╗
║                                                      ║
║   ____       _            _   _                      ║
║  |  _ \  ___| |_ ___  ___| |_(_)_   _____            ║
║  | | | |/ _ \ __/ _ \/ __| __| \ \ / / _ \           ║
║  | |_| |  __/ ||  __/ (__| |_| |\ V /  __/           ║
║  |____/ \___|\__\___|\___|\__|_| \_/ \___|           ║
║                                                      ║
║              ___                  _                  ║
║             / _ \ _   _  ___  ___| |_                ║
║            | | | | | | |/ _ \/ __| __|               ║
║            | |_| | |_| |  __/\__ \ |_                ║
║             \__\_\\__,_|\___||___/\__|               ║
║                                                      ║
║               The Manor Affair                       ║
║                                                      ║
║          Press Enter to begin, q to quit             ║
╚══════════════════════════════════════════════════════╝
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " DETECTIVE QUEST ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════╗
║                   CONTROLS                    ║
╠═══════════════════════════════════════════════╣
║  e / ←   Take the left door                   ║
║  d / →   Take the right door                  ║
║  s       Leave the mansion                    ║
║  :       Type a command                       ║
║  ?       Toggle this help                     ║
╠═══════════════════════════════════════════════╣
║                  ACCUSATION                   ║
╠═══════════════════════════════════════════════╣
║  ↑/↓     Pick a suspect                       ║
║  Enter   Accuse the selected suspect          ║
║  :       Type a name instead                  ║
║  q       Quit once the case is closed         ║
╚═══════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (room panel + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),  // Room panel
            Constraint::Percentage(70),  // Main area
        ])
        .split(area)
        .to_vec()
}

/// Create the main area layout (narrative + notebook)
pub fn create_main_area_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),  // Narrative/messages
            Constraint::Percentage(40),  // Clue notebook
        ])
        .split(area)
        .to_vec()
}

/// A rectangle centred in `area`, `percent_x` wide and `height` tall
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
