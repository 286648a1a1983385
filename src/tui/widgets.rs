//! Custom widgets for the game UI

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
    buffer::Buffer,
};

/// A progress bar for clues found out of clues hidden
pub struct ClueGauge {
    value: u16,
    max: u16,
    label: String,
    color: Color,
    goal: u16,
}

impl ClueGauge {
    pub fn new(label: &str, value: u16, max: u16) -> Self {
        Self {
            value,
            max,
            label: label.to_string(),
            color: Color::Yellow,
            goal: u16::MAX,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Turn green once `goal` is reached
    pub fn goal(mut self, goal: u16) -> Self {
        self.goal = goal;
        self
    }
}

impl Widget for ClueGauge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 1 {
            return;
        }

        let color = if self.value >= self.goal { Color::Green } else { self.color };

        let label = format!("{}: {}/{}", self.label, self.value, self.max);
        buf.set_string(area.x, area.y, &label, Style::default().fg(color));

        if area.height > 1 {
            let inner = area.width - 2;
            let filled = if self.max == 0 {
                0
            } else {
                (u32::from(self.value.min(self.max)) * u32::from(inner) / u32::from(self.max)) as u16
            };
            let bar_y = area.y + 1;
            buf.set_string(area.x, bar_y, "[", Style::default());
            buf.set_string(area.x + area.width - 1, bar_y, "]", Style::default());

            for x in 0..filled {
                buf.set_string(area.x + 1 + x, bar_y, "█", Style::default().fg(color));
            }
            for x in filled..inner {
                buf.set_string(area.x + 1 + x, bar_y, "░", Style::default().fg(Color::DarkGray));
            }
        }
    }
}

/// Double-bordered box for the verdict
pub struct DramaticBox {
    title: String,
    content: Vec<String>,
    border_color: Color,
}

impl DramaticBox {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
            border_color: Color::Red,
        }
    }

    pub fn content(mut self, lines: Vec<String>) -> Self {
        self.content = lines;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }
}

impl Widget for DramaticBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }
        let style = Style::default().fg(self.border_color);
        let right = area.x + area.width - 1;
        let bottom = area.y + area.height - 1;

        buf.set_string(area.x, area.y, "╔", style);
        buf.set_string(area.x, bottom, "╚", style);
        for x in area.x + 1..right {
            buf.set_string(x, area.y, "═", style);
            buf.set_string(x, bottom, "═", style);
        }
        buf.set_string(right, area.y, "╗", style);
        buf.set_string(right, bottom, "╝", style);

        for y in area.y + 1..bottom {
            buf.set_string(area.x, y, "║", style);
            buf.set_string(right, y, "║", style);
        }

        let title = format!(" {} ", self.title);
        let title_width = title.chars().count() as u16;
        if title_width < area.width {
            buf.set_string(area.x + (area.width - title_width) / 2, area.y, title, style);
        }

        for (i, line) in self.content.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= bottom {
                break;
            }
            buf.set_stringn(
                area.x + 2,
                y,
                line,
                area.width.saturating_sub(4) as usize,
                Style::default().fg(Color::White),
            );
        }
    }
}
