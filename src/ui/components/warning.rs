// Warning screen component - 터미널이 너무 작을 때 전체 화면 대신 표시

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

/// 크기 경고 화면
pub struct WarningScreen {
    /// 현재 터미널 크기 (폭, 높이)
    size: (u16, u16),
    bg_color: Color,
    fg_color: Color,
    warning_color: Color,
    error_color: Color,
}

impl WarningScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: (width, height),
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            warning_color: Color::Yellow,
            error_color: Color::Red,
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.warning_color = theme.warning.to_color();
        self.error_color = theme.error.to_color();
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        let (width, height) = self.size;
        vec![
            Line::from(Span::styled("Terminal too small", bold(self.warning_color))),
            Line::from(vec![
                Span::styled(format!("{}x{}", width, height), bold(self.error_color)),
                Span::styled(
                    format!(" < {}x{}", MIN_WIDTH, MIN_HEIGHT),
                    Style::default().fg(self.fg_color),
                ),
            ]),
            Line::from(Span::styled(
                "Resize or press q",
                Style::default()
                    .fg(self.fg_color)
                    .add_modifier(Modifier::DIM),
            )),
        ]
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = self.lines();
        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect::new(area.x, area.y + top, area.width, area.height - top);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_shows_current_and_required_size() {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        WarningScreen::new(30, 8).render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("30x8"));
        assert!(text.contains("40x12"));
    }
}
