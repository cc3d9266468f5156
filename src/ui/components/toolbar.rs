// Toolbar component - 항목 수 / 보기 방식 / 정렬 표시

use crate::core::listing::{sort_indicator, SortBy, SortOrder};
use crate::models::panel_state::ViewMode;
use crate::ui::Theme;
use crate::utils::formatter::format_item_count;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// 툴바 컴포넌트
pub struct Toolbar {
    item_count: usize,
    selected_count: usize,
    view_mode: ViewMode,
    sort_by: SortBy,
    sort_order: SortOrder,
    bg_color: Color,
    fg_color: Color,
    dim_color: Color,
    accent_color: Color,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self {
            item_count: 0,
            selected_count: 0,
            view_mode: ViewMode::default(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            bg_color: Color::Rgb(37, 37, 38),
            fg_color: Color::Rgb(212, 212, 212),
            dim_color: Color::Rgb(100, 100, 100),
            accent_color: Color::Rgb(0, 120, 212),
        }
    }
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 보이는 항목 수
    pub fn item_count(mut self, count: usize) -> Self {
        self.item_count = count;
        self
    }

    pub fn selected_count(mut self, count: usize) -> Self {
        self.selected_count = count;
        self
    }

    pub fn view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    pub fn sort(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.toolbar_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.dim_color = theme.fg_secondary.to_color();
        self.accent_color = theme.accent.to_color();
        self
    }

    /// 보기 방식 표시: 현재 모드만 강조 ("Grid List [Details]")
    fn view_spans(&self) -> Vec<Span<'static>> {
        [ViewMode::Grid, ViewMode::List, ViewMode::Details]
            .into_iter()
            .flat_map(|mode| {
                let span = if mode == self.view_mode {
                    Span::styled(
                        format!("[{}]", mode.label()),
                        Style::default()
                            .fg(self.accent_color)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(
                        format!(" {} ", mode.label()),
                        Style::default().fg(self.dim_color),
                    )
                };
                [span, Span::raw(" ")]
            })
            .collect()
    }
}

impl Widget for Toolbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut left = format!(" {}", format_item_count(self.item_count));
        if self.selected_count > 0 {
            left.push_str(&format!(" · {} selected", self.selected_count));
        }

        let mut right = self.view_spans();
        right.push(Span::styled(
            format!(" {} ", sort_indicator(self.sort_by, self.sort_order)),
            Style::default().fg(self.fg_color),
        ));
        let right_width: usize = right.iter().map(|s| s.content.width()).sum();

        let padding = (area.width as usize).saturating_sub(left.width() + right_width);
        let mut spans = vec![
            Span::styled(left, Style::default().fg(self.fg_color)),
            Span::raw(" ".repeat(padding)),
        ];
        if padding > 0 {
            spans.extend(right);
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_toolbar_shows_count_view_and_sort() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Toolbar::new()
            .item_count(10)
            .view_mode(ViewMode::List)
            .sort(SortBy::Size, SortOrder::Descending)
            .render(area, &mut buf);

        let text = row_text(&buf);
        assert!(text.contains("10 items"));
        assert!(text.contains("[List]"));
        assert!(text.contains("Size ↓"));
    }

    #[test]
    fn test_toolbar_shows_selection_count() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        Toolbar::new()
            .item_count(1)
            .selected_count(1)
            .render(area, &mut buf);

        let text = row_text(&buf);
        assert!(text.contains("1 item"));
        assert!(text.contains("1 selected"));
    }
}
