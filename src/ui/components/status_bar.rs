// Status bar component - 상태바 컴포넌트
//
// 폴더/파일 개수, 총 크기, 선택 정보를 표시한다. 토스트가 있으면 오른쪽에 띄운다.

use crate::core::listing::ListingStats;
use crate::ui::Theme;
use crate::utils::formatter::{format_file_size, pluralize};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 보이는 목록 통계
    stats: ListingStats,
    /// 선택 항목 통계
    selected: ListingStats,
    toast: Option<&'a str>,
    /// 오른쪽 힌트 (토스트가 없을 때)
    hint: &'a str,
    bg_color: Color,
    fg_color: Color,
    selected_color: Color,
    toast_color: Color,
    hint_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            stats: ListingStats::default(),
            selected: ListingStats::default(),
            toast: None,
            hint: "?:Help  q:Quit",
            bg_color: Color::Rgb(0, 122, 204),
            fg_color: Color::White,
            selected_color: Color::Yellow,
            toast_color: Color::White,
            hint_color: Color::Rgb(200, 200, 200),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(mut self, stats: ListingStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn selected(mut self, selected: ListingStats) -> Self {
        self.selected = selected;
        self
    }

    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = hint;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.selected_color = theme.warning.to_color();
        self.toast_color = theme.status_bar_fg.to_color();
        self.hint_color = theme.fg_secondary.to_color();
        self
    }

    fn left_info(&self) -> String {
        let mut info = format!(
            " {}, {}",
            pluralize(self.stats.folder_count, "folder", "folders"),
            pluralize(self.stats.file_count, "file", "files"),
        );
        let size = format_file_size(Some(self.stats.total_bytes));
        if !size.is_empty() {
            info.push_str(&format!(" | {}", size));
        }
        info
    }

    fn selected_info(&self) -> String {
        let count = self.selected.folder_count + self.selected.file_count;
        if count == 0 {
            return String::new();
        }
        let size = format_file_size(Some(self.selected.total_bytes));
        if size.is_empty() {
            format!(" | {} selected", count)
        } else {
            format!(" | {} selected ({})", count, size)
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.bg_color));

        let left_info = self.left_info();
        let selected_info = self.selected_info();

        let right = match self.toast {
            Some(message) => Span::styled(
                format!("{} ", message),
                Style::default()
                    .fg(self.toast_color)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                format!("{} ", self.hint),
                Style::default().fg(self.hint_color),
            ),
        };

        let left_len = left_info.width() + selected_info.width();
        let padding_len = (area.width as usize).saturating_sub(left_len + right.content.width());

        let spans = vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::styled(selected_info, Style::default().fg(self.selected_color)),
            Span::raw(" ".repeat(padding_len)),
            right,
        ];
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
    fn test_status_bar_shows_counts_and_size() {
        let stats = ListingStats {
            folder_count: 4,
            file_count: 6,
            total_bytes: 1024,
        };
        let bar = StatusBar::new().stats(stats);
        assert_eq!(bar.left_info(), " 4 folders, 6 files | 1 KB");
    }

    #[test]
    fn test_selected_info_only_when_selected() {
        let bar = StatusBar::new();
        assert_eq!(bar.selected_info(), "");

        let bar = StatusBar::new().selected(ListingStats {
            folder_count: 1,
            file_count: 1,
            total_bytes: 1_048_576,
        });
        assert_eq!(bar.selected_info(), " | 2 selected (1 MB)");
    }

    #[test]
    fn test_toast_replaces_hint() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new()
            .toast(Some("Deleted 2 items"))
            .render(area, &mut buf);

        let text = row_text(&buf);
        assert!(text.contains("Deleted 2 items"));
        assert!(!text.contains("?:Help"));
    }
}
