// Sidebar component - 사이드바 컴포넌트
//
// 섹션 제목 아래 바로가기 항목을 나열한다. 현재 경로와 같은 항목은 강조하고,
// 키보드 포커스가 있으면 커서 행을 반전 표시한다.

use crate::models::sidebar::{Sidebar, SidebarSection};
use crate::ui::Theme;
use crate::utils::path_display::truncate_end;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 사이드바 위젯
pub struct SidebarPanel<'a> {
    sidebar: &'a Sidebar,
    /// 현재 경로와 일치하는 항목
    active_index: Option<usize>,
    focused: bool,
    bg_color: Color,
    fg_color: Color,
    title_color: Color,
    active_fg: Color,
    cursor_bg: Color,
    border_color: Color,
}

impl<'a> SidebarPanel<'a> {
    pub fn new(sidebar: &'a Sidebar) -> Self {
        Self {
            sidebar,
            active_index: None,
            focused: false,
            bg_color: Color::Rgb(37, 37, 38),
            fg_color: Color::Rgb(212, 212, 212),
            title_color: Color::Rgb(150, 150, 150),
            active_fg: Color::Rgb(0, 120, 212),
            cursor_bg: Color::Rgb(4, 57, 94),
            border_color: Color::Rgb(60, 60, 60),
        }
    }

    pub fn active_index(mut self, index: Option<usize>) -> Self {
        self.active_index = index;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.sidebar_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.title_color = theme.fg_secondary.to_color();
        self.active_fg = theme.accent.to_color();
        self.cursor_bg = theme.cursor_bg.to_color();
        self.border_color = if self.focused {
            theme.border_active.to_color()
        } else {
            theme.border_inactive.to_color()
        };
        self
    }

    /// 화면 행 목록: 섹션 제목(None) 또는 항목 인덱스(Some)
    fn rows(&self) -> Vec<(Option<usize>, Line<'a>)> {
        let mut rows = Vec::new();
        for section in SidebarSection::ALL {
            let items = self.sidebar.section_items(section);
            if items.is_empty() {
                continue;
            }
            if !rows.is_empty() {
                rows.push((None, Line::from("")));
            }
            rows.push((
                None,
                Line::from(Span::styled(
                    format!(" {}", section.title().to_uppercase()),
                    Style::default()
                        .fg(self.title_color)
                        .add_modifier(Modifier::BOLD),
                )),
            ));
            for (index, item) in items {
                let style = if Some(index) == self.active_index {
                    Style::default()
                        .fg(self.active_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.fg_color)
                };
                rows.push((
                    Some(index),
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(format!("{} ", item.icon), style),
                        Span::styled(item.name.clone(), style),
                    ]),
                ));
            }
        }
        rows
    }
}

impl Widget for SidebarPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = self.rows();
        let height = inner.height as usize;
        // 커서 행이 보이도록 스크롤
        let cursor_row = rows
            .iter()
            .position(|(idx, _)| *idx == Some(self.sidebar.cursor))
            .unwrap_or(0);
        let offset = if self.focused && cursor_row >= height {
            cursor_row + 1 - height
        } else {
            0
        };

        for (y, (index, line)) in rows.iter().skip(offset).take(height).enumerate() {
            let row_y = inner.y + y as u16;
            if self.focused && *index == Some(self.sidebar.cursor) {
                buf.set_style(
                    Rect::new(inner.x, row_y, inner.width, 1),
                    Style::default().bg(self.cursor_bg),
                );
            }
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            if text.width() > inner.width as usize {
                let style = line.spans.last().map(|s| s.style).unwrap_or_default();
                buf.set_string(
                    inner.x,
                    row_y,
                    truncate_end(&text, inner.width as usize),
                    style,
                );
            } else {
                buf.set_line(inner.x, row_y, line, inner.width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar() -> Sidebar {
        Sidebar::new("/Users/username", Vec::new())
    }

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_rows_include_section_titles() {
        let sidebar = sidebar();
        let panel = SidebarPanel::new(&sidebar);
        let rows = panel.rows();

        let titles = rows.iter().filter(|(idx, _)| idx.is_none()).count();
        // 섹션 3개 + 구분 빈 줄 2개
        assert_eq!(titles, 5);
        let items = rows.iter().filter(|(idx, _)| idx.is_some()).count();
        assert_eq!(items, sidebar.items().len());
    }

    #[test]
    fn test_render_lists_shortcuts() {
        let sidebar = sidebar();
        let area = Rect::new(0, 0, 24, 20);
        let mut buf = Buffer::empty(area);
        SidebarPanel::new(&sidebar)
            .active_index(Some(0))
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("QUICK ACCESS"));
        assert!(text.contains("Documents"));
        assert!(text.contains("DEVICES"));
    }

    #[test]
    fn test_focused_cursor_row_is_highlighted() {
        let mut sidebar = sidebar();
        sidebar.cursor = 1;
        let panel = SidebarPanel::new(&sidebar).focused(true);
        let cursor_bg = panel.cursor_bg;
        let area = Rect::new(0, 0, 24, 20);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);

        // 행 0: 제목, 행 1: Home, 행 2: Desktop(커서)
        assert_eq!(buf[(0, 2)].bg, cursor_bg);
        assert_ne!(buf[(0, 1)].bg, cursor_bg);
    }
}
