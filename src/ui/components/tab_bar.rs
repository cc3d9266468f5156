// Tab bar component - 탭 바 컴포넌트
//
// "1:Documents  2:Downloads" 형태로 탭 제목을 나열하고 활성 탭을 강조한다.

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// 탭 제목 최대 표시 폭
const MAX_TITLE_WIDTH: usize = 20;

/// 탭 바 컴포넌트
pub struct TabBar<'a> {
    titles: &'a [String],
    /// 활성 탭 인덱스 (0-based)
    active: usize,
    bg_color: Color,
    active_bg: Color,
    active_fg: Color,
    inactive_fg: Color,
    hint_color: Color,
}

impl<'a> TabBar<'a> {
    pub fn new(titles: &'a [String]) -> Self {
        Self {
            titles,
            active: 0,
            bg_color: Color::Rgb(37, 37, 38),
            active_bg: Color::Rgb(30, 30, 30),
            active_fg: Color::White,
            inactive_fg: Color::Rgb(150, 150, 150),
            hint_color: Color::Rgb(100, 100, 100),
        }
    }

    pub fn active(mut self, index: usize) -> Self {
        self.active = index;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.toolbar_bg.to_color();
        self.active_bg = theme.tab_active_bg.to_color();
        self.active_fg = theme.tab_active_fg.to_color();
        self.inactive_fg = theme.tab_inactive_fg.to_color();
        self.hint_color = theme.fg_secondary.to_color();
        self
    }

    fn tab_label(index: usize, title: &str) -> String {
        let title = crate::utils::path_display::truncate_end(title, MAX_TITLE_WIDTH);
        format!(" {}:{} ", index + 1, title)
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = Vec::with_capacity(self.titles.len() * 2 + 1);
        let mut used = 0usize;
        for (i, title) in self.titles.iter().enumerate() {
            let label = Self::tab_label(i, title);
            let style = if i == self.active {
                Style::default()
                    .fg(self.active_fg)
                    .bg(self.active_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.inactive_fg)
            };
            used += label.width() + 1;
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        // 남는 폭이 있으면 오른쪽에 새 탭 힌트
        let hint = " Ctrl+T:New ";
        let remaining = (area.width as usize).saturating_sub(used);
        if remaining > hint.width() {
            spans.push(Span::raw(" ".repeat(remaining - hint.width())));
            spans.push(Span::styled(hint, Style::default().fg(self.hint_color)));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_tab_labels_are_numbered() {
        let titles = vec!["username".to_string(), "Documents".to_string()];
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        TabBar::new(&titles).active(1).render(area, &mut buf);

        let text = row_text(&buf, 60);
        assert!(text.contains("1:username"));
        assert!(text.contains("2:Documents"));
    }

    #[test]
    fn test_active_tab_is_bold() {
        let titles = vec!["a".to_string(), "b".to_string()];
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        TabBar::new(&titles).active(0).render(area, &mut buf);

        // " 1:a " 의 '1'
        assert!(buf[(1, 0)].modifier.contains(Modifier::BOLD));
        // " 2:b " 의 '2'
        assert!(!buf[(7, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_long_title_is_truncated() {
        let label = TabBar::tab_label(0, "a-very-long-folder-name-that-keeps-going");
        assert!(label.width() <= MAX_TITLE_WIDTH + 4);
        assert!(label.contains("..."));
    }
}
