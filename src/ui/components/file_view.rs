// File view component - 파일 목록 영역
//
// 보기 방식(Grid/List/Details)에 따라 보이는 목록을 그린다.
// 선택 항목은 배경색, 커서 항목은 포커스가 있을 때 강조한다.

use crate::core::listing::{SortBy, SortOrder};
use crate::models::file_entry::Entry;
use crate::models::panel_state::ViewMode;
use crate::ui::Theme;
use crate::utils::formatter::{format_date, format_file_size};
use crate::utils::path_display::{truncate_end, truncate_middle};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// 그리드 셀 폭
const GRID_CELL_WIDTH: u16 = 18;
/// 그리드 셀 높이 (아이콘 줄 + 이름 줄 + 여백)
const GRID_CELL_HEIGHT: u16 = 3;

const DATE_WIDTH: usize = 16;
const SIZE_WIDTH: usize = 10;
const KIND_WIDTH: usize = 8;

/// 목록 영역 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileViewStatus<'a> {
    Ready,
    Loading,
    Error(&'a str),
}

/// 파일 목록 컴포넌트
pub struct FileView<'a> {
    /// 보이는 목록 (필터/정렬 적용 후)
    entries: &'a [Entry],
    selection: &'a [String],
    cursor: usize,
    view_mode: ViewMode,
    sort_by: SortBy,
    sort_order: SortOrder,
    status: FileViewStatus<'a>,
    /// 검색어가 있으면 빈 목록 안내 문구가 달라진다
    filtering: bool,
    focused: bool,
    bg_color: Color,
    fg_color: Color,
    dim_color: Color,
    folder_color: Color,
    selected_fg: Color,
    selected_bg: Color,
    cursor_bg: Color,
    border_color: Color,
    error_color: Color,
}

impl<'a> FileView<'a> {
    pub fn new(entries: &'a [Entry]) -> Self {
        Self {
            entries,
            selection: &[],
            cursor: 0,
            view_mode: ViewMode::default(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            status: FileViewStatus::Ready,
            filtering: false,
            focused: true,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            dim_color: Color::Rgb(128, 128, 128),
            folder_color: Color::Rgb(86, 156, 214),
            selected_fg: Color::White,
            selected_bg: Color::Rgb(0, 120, 212),
            cursor_bg: Color::Rgb(55, 55, 61),
            border_color: Color::Rgb(60, 60, 60),
            error_color: Color::Rgb(244, 71, 71),
        }
    }

    pub fn selection(mut self, selection: &'a [String]) -> Self {
        self.selection = selection;
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
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

    pub fn status(mut self, status: FileViewStatus<'a>) -> Self {
        self.status = status;
        self
    }

    pub fn filtering(mut self, filtering: bool) -> Self {
        self.filtering = filtering;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.file_normal.to_color();
        self.dim_color = theme.fg_secondary.to_color();
        self.folder_color = theme.folder.to_color();
        self.selected_fg = theme.file_selected.to_color();
        self.selected_bg = theme.file_selected_bg.to_color();
        self.cursor_bg = theme.cursor_bg.to_color();
        self.border_color = if self.focused {
            theme.border_active.to_color()
        } else {
            theme.border_inactive.to_color()
        };
        self.error_color = theme.error.to_color();
        self
    }

    fn is_selected(&self, entry: &Entry) -> bool {
        self.selection.iter().any(|id| *id == entry.id)
    }

    /// 항목 스타일: 선택 > 커서 > 일반
    fn entry_style(&self, entry: &Entry, index: usize) -> Style {
        let fg = if entry.is_folder() {
            self.folder_color
        } else {
            self.fg_color
        };
        let is_cursor = self.focused && index == self.cursor;
        match (self.is_selected(entry), is_cursor) {
            (true, true) => Style::default()
                .fg(self.selected_fg)
                .bg(self.selected_bg)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(self.selected_fg).bg(self.selected_bg),
            (false, true) => Style::default().fg(fg).bg(self.cursor_bg),
            (false, false) => Style::default().fg(fg),
        }
    }

    /// 커서가 보이도록 첫 표시 행을 정한다
    fn scroll_offset(cursor_row: usize, visible_rows: usize) -> usize {
        if visible_rows == 0 {
            0
        } else {
            cursor_row.saturating_sub(visible_rows - 1)
        }
    }

    fn sort_label(&self, sort_by: SortBy, label: &str) -> String {
        if self.sort_by == sort_by {
            let arrow = match self.sort_order {
                SortOrder::Ascending => "↑",
                SortOrder::Descending => "↓",
            };
            format!("{} {}", label, arrow)
        } else {
            label.to_string()
        }
    }

    /// 안내 문구 (로딩/에러/빈 목록). 표시했으면 true.
    fn render_placeholder(&self, inner: Rect, buf: &mut Buffer) -> bool {
        let lines = match self.status {
            FileViewStatus::Loading => vec![Line::from(Span::styled(
                "Loading...",
                Style::default().fg(self.dim_color),
            ))],
            FileViewStatus::Error(message) => vec![
                Line::from(Span::styled(
                    "Error loading files",
                    Style::default()
                        .fg(self.error_color)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    message.to_string(),
                    Style::default().fg(self.dim_color),
                )),
            ],
            FileViewStatus::Ready if self.entries.is_empty() => {
                let text = if self.filtering {
                    "No files match your search"
                } else {
                    "This folder is empty"
                };
                vec![Line::from(Span::styled(
                    text,
                    Style::default().fg(self.dim_color),
                ))]
            }
            FileViewStatus::Ready => return false,
        };

        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let area = Rect::new(
            inner.x,
            inner.y + top,
            inner.width,
            inner.height.saturating_sub(top),
        );
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
        true
    }

    // === Details ===

    fn render_details(&self, inner: Rect, buf: &mut Buffer) {
        let width = inner.width as usize;
        // 좁으면 종류, 더 좁으면 날짜 열을 뺀다
        let show_kind = width >= 60;
        let show_date = width >= 44;
        let name_width = width
            .saturating_sub(2)
            .saturating_sub(if show_date { DATE_WIDTH + 1 } else { 0 })
            .saturating_sub(SIZE_WIDTH + 1)
            .saturating_sub(if show_kind { KIND_WIDTH + 1 } else { 0 });

        let header_style = Style::default()
            .fg(self.dim_color)
            .add_modifier(Modifier::BOLD);
        let mut header = format!(
            " {:<name_width$}",
            self.sort_label(SortBy::Name, "Name"),
            name_width = name_width + 1
        );
        if show_date {
            header.push_str(&format!(
                " {:<DATE_WIDTH$}",
                self.sort_label(SortBy::Modified, "Date Modified")
            ));
        }
        header.push_str(&format!(
            " {:>SIZE_WIDTH$}",
            self.sort_label(SortBy::Size, "Size")
        ));
        if show_kind {
            header.push_str(&format!(
                " {:<KIND_WIDTH$}",
                self.sort_label(SortBy::Kind, "Kind")
            ));
        }
        buf.set_stringn(inner.x, inner.y, &header, width, header_style);
        if inner.height < 2 {
            return;
        }
        buf.set_string(
            inner.x,
            inner.y + 1,
            "─".repeat(width),
            Style::default().fg(self.border_color),
        );

        let rows = inner.height.saturating_sub(2) as usize;
        let offset = Self::scroll_offset(self.cursor, rows);
        for (row, (index, entry)) in self
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .enumerate()
        {
            let y = inner.y + 2 + row as u16;
            let style = self.entry_style(entry, index);
            buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);

            let icon = format!("{} ", entry.category().icon());
            let name = truncate_middle(&entry.name, name_width.saturating_sub(icon.width()));
            let name_cell = format!("{}{}", icon, name);
            let mut line = vec![
                Span::styled(" ", style),
                Span::styled(name_cell.clone(), style),
                Span::styled(
                    " ".repeat((name_width + 1).saturating_sub(name_cell.width())),
                    style,
                ),
            ];
            if show_date {
                line.push(Span::styled(
                    format!(" {:<DATE_WIDTH$}", format_date(entry.modified_at)),
                    style,
                ));
            }
            line.push(Span::styled(
                format!(" {:>SIZE_WIDTH$}", format_file_size(entry.size)),
                style,
            ));
            if show_kind {
                line.push(Span::styled(
                    format!(" {:<KIND_WIDTH$}", entry.kind.label()),
                    style,
                ));
            }
            buf.set_line(inner.x, y, &Line::from(line), inner.width);
        }
    }

    // === List ===

    fn render_list(&self, inner: Rect, buf: &mut Buffer) {
        let rows = inner.height as usize;
        let offset = Self::scroll_offset(self.cursor, rows);
        let name_width = (inner.width as usize).saturating_sub(4);

        for (row, (index, entry)) in self
            .entries
            .iter()
            .enumerate()
            .skip(offset)
            .take(rows)
            .enumerate()
        {
            let y = inner.y + row as u16;
            let style = self.entry_style(entry, index);
            buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
            let line = Line::from(vec![
                Span::styled(format!(" {} ", entry.category().icon()), style),
                Span::styled(truncate_middle(&entry.name, name_width), style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }

    // === Grid ===

    fn render_grid(&self, inner: Rect, buf: &mut Buffer) {
        let columns = (inner.width / GRID_CELL_WIDTH).max(1) as usize;
        let visible_rows = (inner.height / GRID_CELL_HEIGHT).max(1) as usize;
        let offset_row = Self::scroll_offset(self.cursor / columns, visible_rows);
        let label_width = GRID_CELL_WIDTH.saturating_sub(2) as usize;

        for (index, entry) in self.entries.iter().enumerate().skip(offset_row * columns) {
            let row = index / columns - offset_row;
            if row >= visible_rows {
                break;
            }
            let col = index % columns;
            let x = inner.x + col as u16 * GRID_CELL_WIDTH;
            let y = inner.y + row as u16 * GRID_CELL_HEIGHT;
            let cell_width = GRID_CELL_WIDTH.min(inner.x + inner.width - x);
            let style = self.entry_style(entry, index);

            let highlighted = style.bg.is_some();
            if highlighted {
                let height = GRID_CELL_HEIGHT
                    .saturating_sub(1)
                    .min(inner.y + inner.height - y);
                buf.set_style(Rect::new(x, y, cell_width.saturating_sub(1), height), style);
            }

            let icon = entry.category().icon();
            let icon_x = x + (cell_width.saturating_sub(icon.width() as u16 + 1)) / 2;
            buf.set_string(icon_x, y, icon, style);

            if y + 1 < inner.y + inner.height {
                let label = truncate_end(&entry.name, label_width);
                let label_x = x + (cell_width.saturating_sub(label.width() as u16 + 1)) / 2;
                buf.set_string(label_x, y + 1, label, style);
            }
        }
    }
}

impl Widget for FileView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.render_placeholder(inner, buf) {
            return;
        }

        match self.view_mode {
            ViewMode::Details => self.render_details(inner, buf),
            ViewMode::List => self.render_list(inner, buf),
            ViewMode::Grid => self.render_grid(inner, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::mock_fs::sample_entries;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn render(view: FileView<'_>, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_details_view_shows_columns_and_names() {
        let entries = sample_entries("/Users/username");
        let buf = render(
            FileView::new(&entries).view_mode(ViewMode::Details),
            100,
            20,
        );

        let text = buffer_text(&buf);
        assert!(text.contains("Name ↑"));
        assert!(text.contains("Date Modified"));
        assert!(text.contains("Kind"));
        assert!(text.contains("Documents"));
    }

    #[test]
    fn test_list_view_shows_names() {
        let entries = sample_entries("/Users/username");
        let buf = render(FileView::new(&entries).view_mode(ViewMode::List), 60, 20);

        let text = buffer_text(&buf);
        assert!(text.contains("Downloads"));
        assert!(!text.contains("Date Modified"));
    }

    #[test]
    fn test_grid_view_lays_out_cells() {
        let entries = sample_entries("/Users/username");
        let buf = render(FileView::new(&entries).view_mode(ViewMode::Grid), 80, 20);

        let text = buffer_text(&buf);
        assert!(text.contains("Pictures"));
        assert!(!text.contains("Date Modified"));
    }

    #[test]
    fn test_empty_states() {
        let entries: Vec<Entry> = Vec::new();
        let buf = render(FileView::new(&entries), 60, 10);
        assert!(buffer_text(&buf).contains("This folder is empty"));

        let buf = render(FileView::new(&entries).filtering(true), 60, 10);
        assert!(buffer_text(&buf).contains("No files match your search"));
    }

    #[test]
    fn test_loading_and_error_states() {
        let entries = sample_entries("/Users/username");
        let buf = render(
            FileView::new(&entries).status(FileViewStatus::Loading),
            60,
            10,
        );
        assert!(buffer_text(&buf).contains("Loading..."));

        let buf = render(
            FileView::new(&entries).status(FileViewStatus::Error("boom")),
            60,
            10,
        );
        let text = buffer_text(&buf);
        assert!(text.contains("Error loading files"));
        assert!(text.contains("boom"));
    }

    #[test]
    fn test_selected_row_uses_selection_background() {
        let entries = sample_entries("/Users/username");
        let selection = vec![entries[1].id.clone()];
        let view = FileView::new(&entries)
            .view_mode(ViewMode::List)
            .selection(&selection)
            .cursor(0);
        let selected_bg = view.selected_bg;
        let buf = render(view, 60, 20);

        // TOP 테두리 1줄 아래부터 행이 시작된다
        assert_eq!(buf[(0, 2)].bg, selected_bg);
        assert_ne!(buf[(0, 3)].bg, selected_bg);
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        assert_eq!(FileView::scroll_offset(0, 10), 0);
        assert_eq!(FileView::scroll_offset(9, 10), 0);
        assert_eq!(FileView::scroll_offset(10, 10), 1);
        assert_eq!(FileView::scroll_offset(25, 10), 16);
    }
}
