// Context menu component - 파일 항목 컨텍스트 메뉴
//
// 항목은 `CONTEXT_MENU` 테이블 순서대로 표시된다.

use crate::core::actions::{ContextAction, ContextActionDef, CONTEXT_MENU};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 컨텍스트 메뉴 상태
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuState {
    /// `CONTEXT_MENU` 안의 선택 인덱스
    pub selected: usize,
    /// 메뉴를 연 시점의 작업 대상 id
    pub targets: Vec<String>,
}

impl ContextMenuState {
    pub fn new(targets: Vec<String>) -> Self {
        Self {
            selected: 0,
            targets,
        }
    }

    pub fn next_item(&mut self) {
        self.selected = (self.selected + 1) % CONTEXT_MENU.len();
    }

    pub fn prev_item(&mut self) {
        self.selected = if self.selected == 0 {
            CONTEXT_MENU.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn selected_def(&self) -> Option<&'static ContextActionDef> {
        CONTEXT_MENU.get(self.selected)
    }

    pub fn selected_action(&self) -> Option<ContextAction> {
        self.selected_def().map(|d| d.action)
    }
}

/// 컨텍스트 메뉴 위젯
pub struct ContextMenu<'a> {
    state: &'a ContextMenuState,
    anchor: (u16, u16),
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    selected_bg: Color,
    selected_fg: Color,
    danger_color: Color,
    separator_color: Color,
}

impl<'a> ContextMenu<'a> {
    pub fn new(state: &'a ContextMenuState) -> Self {
        Self {
            state,
            anchor: (0, 0),
            bg_color: Color::Rgb(37, 37, 38),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(60, 60, 60),
            selected_bg: Color::Rgb(0, 120, 212),
            selected_fg: Color::White,
            danger_color: Color::Rgb(244, 71, 71),
            separator_color: Color::Rgb(60, 60, 60),
        }
    }

    /// 메뉴 좌상단 위치 (화면 밖으로 나가면 안쪽으로 당긴다)
    pub fn anchor(mut self, x: u16, y: u16) -> Self {
        self.anchor = (x, y);
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.toolbar_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.border_inactive.to_color();
        self.selected_bg = theme.file_selected_bg.to_color();
        self.selected_fg = theme.file_selected.to_color();
        self.danger_color = theme.error.to_color();
        self.separator_color = theme.border_inactive.to_color();
        self
    }

    fn row_count() -> u16 {
        CONTEXT_MENU
            .iter()
            .map(|d| if d.separator_before { 2 } else { 1 })
            .sum::<u16>()
            // 첫 항목 앞 구분선은 그리지 않는다
            - u16::from(CONTEXT_MENU.first().is_some_and(|d| d.separator_before))
    }

    fn width() -> u16 {
        CONTEXT_MENU
            .iter()
            .map(|d| d.label.width() as u16)
            .max()
            .unwrap_or(10)
            + 6
    }
}

impl Widget for ContextMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = Self::width().min(area.width);
        let height = (Self::row_count() + 2).min(area.height);
        let x = self.anchor.0.min(area.x + area.width.saturating_sub(width));
        let y = self.anchor.1.min(area.y + area.height.saturating_sub(height));
        let menu_area = Rect {
            x,
            y,
            width,
            height,
        };

        Clear.render(menu_area, buf);
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color))
            .render(menu_area, buf);

        let inner_width = width.saturating_sub(2);
        let bottom = menu_area.y + menu_area.height.saturating_sub(1);
        let mut row_y = menu_area.y + 1;

        for (i, def) in CONTEXT_MENU.iter().enumerate() {
            if def.separator_before && i > 0 {
                if row_y >= bottom {
                    break;
                }
                let line = "─".repeat(inner_width as usize);
                buf.set_string(
                    menu_area.x + 1,
                    row_y,
                    line,
                    Style::default().fg(self.separator_color),
                );
                row_y += 1;
            }
            if row_y >= bottom {
                break;
            }

            let is_selected = i == self.state.selected;
            let fg = if def.danger {
                self.danger_color
            } else {
                self.fg_color
            };
            let style = if is_selected {
                Style::default()
                    .fg(self.selected_fg)
                    .bg(self.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(fg).bg(self.bg_color)
            };

            let text = format!(" {:<w$}", def.label, w = inner_width.saturating_sub(1) as usize);
            buf.set_stringn(menu_area.x + 1, row_y, text, inner_width as usize, style);
            row_y += 1;
        }
    }
}
