use super::DialogKind;
use crate::app::TextInput;
use crate::core::actions::generate_help_entries;
use crate::models::operation::Confirmation;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;

/// 다이얼로그 위젯
pub struct Dialog<'a> {
    kind: &'a DialogKind,
    bg_color: Color,
    fg_color: Color,
    muted_color: Color,
    border_color: Color,
    title_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
    danger_color: Color,
    warning_color: Color,
    input_bg: Color,
}

impl<'a> Default for Dialog<'a> {
    fn default() -> Self {
        static DEFAULT_KIND: DialogKind = DialogKind::Message {
            title: String::new(),
            message: String::new(),
        };
        Self {
            kind: &DEFAULT_KIND,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            muted_color: Color::Rgb(128, 128, 128),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
            danger_color: Color::Rgb(244, 71, 71),
            warning_color: Color::Rgb(255, 165, 0),
            input_bg: Color::Rgb(30, 30, 30),
        }
    }
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.toolbar_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.muted_color = theme.fg_secondary.to_color();
        self.border_color = theme.border_active.to_color();
        self.title_color = theme.accent.to_color();
        self.button_bg = theme.border_inactive.to_color();
        self.button_fg = theme.fg_primary.to_color();
        self.button_selected_bg = theme.file_selected_bg.to_color();
        self.button_selected_fg = theme.file_selected.to_color();
        self.danger_color = theme.error.to_color();
        self.warning_color = theme.warning.to_color();
        self.input_bg = theme.bg_primary.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 반응형)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.kind {
            DialogKind::Input { .. } => (50u16.min(sw.saturating_sub(4)).max(30), 7u16),
            DialogKind::Confirm { confirmation, .. } => {
                let extra = if confirmation.warning.is_some() { 3 } else { 0 };
                (50u16.min(sw.saturating_sub(4)).max(30), 8 + extra)
            }
            DialogKind::Message { message, .. } => {
                let lines = message.lines().count().max(1);
                let w = 50u16.min(sw.saturating_sub(4)).max(30);
                let h = (6 + lines as u16).min(sh.saturating_sub(4)).max(6);
                (w, h)
            }
            DialogKind::Help { .. } => {
                let w = 60u16.min(sw.saturating_sub(4)).max(40);
                let h = sh.saturating_sub(6).max(15);
                (w, h)
            }
        };

        let width = width.min(sw.saturating_sub(4));
        let height = height.min(sh.saturating_sub(4));

        Rect {
            x: screen.x + (sw.saturating_sub(width)) / 2,
            y: screen.y + (sh.saturating_sub(height)) / 2,
            width,
            height,
        }
    }

    fn block(&self, title: &str, accent: Color) -> Block<'static> {
        Block::default()
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(self.bg_color))
    }

    fn inner(area: Rect) -> Rect {
        Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING * 2),
        }
    }

    /// 버튼 렌더링 헬퍼 (렌더링한 너비 반환)
    fn render_button(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        label: &str,
        is_selected: bool,
        danger: bool,
    ) -> u16 {
        let (bg, fg) = match (is_selected, danger) {
            (true, true) => (self.danger_color, Color::White),
            (true, false) => (self.button_selected_bg, self.button_selected_fg),
            (false, _) => (self.button_bg, self.button_fg),
        };

        let padded_label = format!(" {} ", label);
        let width = padded_label.width() as u16;
        buf.set_string(x, y, &padded_label, Style::default().fg(fg).bg(bg));
        width
    }

    /// 확인/취소 버튼 한 쌍 (가운데 정렬)
    fn render_button_pair(
        &self,
        buf: &mut Buffer,
        area: Rect,
        y: u16,
        confirm_label: &str,
        selected_button: usize,
        danger: bool,
    ) {
        let total = confirm_label.width() as u16 + 2 + 2 + "Cancel".len() as u16 + 2;
        let x = area.x + area.width.saturating_sub(total) / 2;
        let ok_width =
            self.render_button(buf, x, y, confirm_label, selected_button == 0, danger);
        self.render_button(buf, x + ok_width + 2, y, "Cancel", selected_button == 1, false);
    }

    fn render_input(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        prompt: &str,
        input: &TextInput,
        selected_button: usize,
    ) {
        self.block(title, self.title_color).render(area, buf);
        let inner = Self::inner(area);

        buf.set_string(inner.x, inner.y, prompt, Style::default().fg(self.fg_color));

        // 입력 필드 배경
        let input_y = inner.y + 1;
        for x in inner.x..inner.x + inner.width {
            if let Some(cell) = buf.cell_mut((x, input_y)) {
                cell.set_bg(self.input_bg);
            }
        }

        // 커서가 보이도록 표시 시작점 결정 (display width 기준)
        let value = input.value();
        let max_display = (inner.width as usize).saturating_sub(2).max(1);
        let cursor_col = input.before_cursor().width();
        let (display_value, cursor_display_col) = if cursor_col < max_display {
            (value, cursor_col)
        } else {
            let target_start = cursor_col + 1 - max_display;
            let mut width_sum = 0;
            let mut start_byte = value.len();
            for (i, c) in value.char_indices() {
                if width_sum >= target_start {
                    start_byte = i;
                    break;
                }
                width_sum += c.width().unwrap_or(0);
            }
            (&value[start_byte..], cursor_col - width_sum)
        };
        let value_style = Style::default().fg(self.fg_color).bg(self.input_bg);
        buf.set_stringn(inner.x + 1, input_y, display_value, max_display, value_style);

        let cursor_x = inner.x + 1 + cursor_display_col as u16;
        if cursor_x < inner.x + inner.width.saturating_sub(1) {
            if let Some(cell) = buf.cell_mut((cursor_x, input_y)) {
                if input.cursor() < value.len() {
                    cell.set_style(Style::default().fg(self.input_bg).bg(self.fg_color));
                } else {
                    cell.set_char('▏');
                    cell.set_style(value_style);
                }
            }
        }

        self.render_button_pair(buf, inner, inner.y + 3, "OK", selected_button, false);
    }

    fn render_confirm(
        &self,
        buf: &mut Buffer,
        area: Rect,
        confirmation: &Confirmation,
        selected_button: usize,
    ) {
        let danger = confirmation.warning.is_some();
        let accent = if danger {
            self.danger_color
        } else {
            self.title_color
        };
        self.block(&confirmation.title, accent).render(area, buf);
        let inner = Self::inner(area);

        let button_y = area.y + area.height.saturating_sub(2);
        let mut message_height = button_y.saturating_sub(inner.y + 1);

        if let Some(warning) = confirmation.warning {
            let warning_height = 2u16.min(message_height);
            let warning_y = button_y.saturating_sub(1 + warning_height);
            Paragraph::new(format!("⚠ {}", warning))
                .style(Style::default().fg(self.warning_color))
                .wrap(Wrap { trim: true })
                .render(
                    Rect {
                        x: inner.x,
                        y: warning_y,
                        width: inner.width,
                        height: warning_height,
                    },
                    buf,
                );
            message_height = warning_y.saturating_sub(inner.y + 1);
        }

        Paragraph::new(confirmation.message.as_str())
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(
                Rect {
                    x: inner.x,
                    y: inner.y,
                    width: inner.width,
                    height: message_height,
                },
                buf,
            );

        self.render_button_pair(
            buf,
            area,
            button_y,
            confirmation.confirm_label,
            selected_button,
            danger,
        );
    }

    fn render_message(&self, buf: &mut Buffer, area: Rect, title: &str, message: &str) {
        self.block(title, self.title_color).render(area, buf);

        let inner = Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING + 3),
        };
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        let button_y = area.y + area.height.saturating_sub(2);
        let button_x = area.x + area.width.saturating_sub(6) / 2;
        self.render_button(buf, button_x, button_y, "OK", true, false);
    }

    fn render_help(&self, buf: &mut Buffer, area: Rect, scroll_offset: usize) {
        self.block("Keyboard Shortcuts", self.title_color)
            .render(area, buf);

        let inner = Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(3),
        };

        let header_style = Style::default()
            .fg(self.title_color)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(Color::Rgb(86, 156, 214));
        let desc_style = Style::default().fg(self.fg_color);

        let sections = generate_help_entries();
        let mut rows: Vec<(bool, &str, &str)> = Vec::new(); // (is_header, col1, col2)
        for (category, items) in &sections {
            rows.push((true, category, ""));
            for (key, desc) in items {
                rows.push((false, key, desc));
            }
            rows.push((false, "", ""));
        }

        let visible_height = inner.height as usize;
        let max_scroll = rows.len().saturating_sub(visible_height);
        let effective_scroll = scroll_offset.min(max_scroll);
        let key_col_width = 20u16;

        for (i, row) in rows
            .iter()
            .skip(effective_scroll)
            .take(visible_height)
            .enumerate()
        {
            let y = inner.y + i as u16;
            if row.0 {
                buf.set_string(inner.x, y, row.1, header_style);
            } else if !row.1.is_empty() {
                buf.set_string(inner.x + 2, y, row.1, key_style);
                buf.set_string(inner.x + key_col_width, y, row.2, desc_style);
            }
        }

        let hint = "Esc/?:Close  j/k:Scroll";
        let hint_x = area.x + area.width.saturating_sub(hint.len() as u16) / 2;
        let hint_y = area.y + area.height.saturating_sub(2);
        buf.set_string(hint_x, hint_y, hint, Style::default().fg(self.muted_color));
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);
        Clear.render(dialog_area, buf);

        match self.kind {
            DialogKind::Input {
                title,
                prompt,
                input,
                selected_button,
                ..
            } => {
                self.render_input(buf, dialog_area, title, prompt, input, *selected_button);
            }
            DialogKind::Confirm {
                confirmation,
                selected_button,
            } => {
                self.render_confirm(buf, dialog_area, confirmation, *selected_button);
            }
            DialogKind::Message { title, message } => {
                self.render_message(buf, dialog_area, title, message);
            }
            DialogKind::Help { scroll_offset } => {
                self.render_help(buf, dialog_area, *scroll_offset);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::operation::{confirmation, OperationType};

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_delete_confirm_shows_warning_and_label() {
        let kind = DialogKind::confirm(confirmation(OperationType::Delete, 3));
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Dialog::new(&kind).theme(&Theme::dark()).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Delete Files"));
        assert!(text.contains(" Delete "));
        assert!(text.contains("Cancel"));
        assert!(text.contains("Trash"));
    }

    #[test]
    fn test_render_input_shows_value() {
        let kind = DialogKind::input(
            "New Folder",
            "Folder name:",
            "Reports",
            super::super::InputPurpose::NewFolderName,
        );
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        Dialog::new(&kind).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Folder name:"));
        assert!(text.contains("Reports"));
    }

    #[test]
    fn test_render_help_lists_categories() {
        let kind = DialogKind::help();
        let area = Rect::new(0, 0, 80, 40);
        let mut buf = Buffer::empty(area);
        Dialog::new(&kind).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Navigation"));
    }
}
