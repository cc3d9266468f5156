// Navigation bar component - 뒤로/앞으로 + 브레드크럼 + 검색창
//
// 왼쪽: "◀ ▶  Users › username › Documents"
// 오른쪽: 검색창 (포커스 시 커서 표시)

use crate::app::TextInput;
use crate::ui::Theme;
use crate::utils::path_display::{breadcrumb_segments, path_title, truncate_end, truncate_path};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// 검색창 최대 폭
const SEARCH_MAX_WIDTH: u16 = 32;
/// 검색창을 표시할 최소 전체 폭
const SEARCH_MIN_AREA: u16 = 50;

const CRUMB_SEPARATOR: &str = " › ";

/// 내비게이션 바 컴포넌트
pub struct NavBar<'a> {
    path: &'a str,
    can_go_back: bool,
    can_go_forward: bool,
    search: &'a TextInput,
    search_focused: bool,
    loading: bool,
    bg_color: Color,
    fg_color: Color,
    dim_color: Color,
    accent_color: Color,
    input_bg: Color,
}

impl<'a> NavBar<'a> {
    pub fn new(path: &'a str, search: &'a TextInput) -> Self {
        Self {
            path,
            can_go_back: false,
            can_go_forward: false,
            search,
            search_focused: false,
            loading: false,
            bg_color: Color::Rgb(37, 37, 38),
            fg_color: Color::Rgb(212, 212, 212),
            dim_color: Color::Rgb(100, 100, 100),
            accent_color: Color::Rgb(0, 120, 212),
            input_bg: Color::Rgb(30, 30, 30),
        }
    }

    /// 기록 이동 가능 여부
    pub fn history(mut self, can_go_back: bool, can_go_forward: bool) -> Self {
        self.can_go_back = can_go_back;
        self.can_go_forward = can_go_forward;
        self
    }

    pub fn search_focused(mut self, focused: bool) -> Self {
        self.search_focused = focused;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.toolbar_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.dim_color = theme.fg_secondary.to_color();
        self.accent_color = theme.accent.to_color();
        self.input_bg = theme.bg_primary.to_color();
        self
    }

    /// 브레드크럼 문자열. 폭을 넘으면 경로 축약 형태로 대체한다.
    fn breadcrumb(&self, max_width: usize) -> String {
        let segments = breadcrumb_segments(self.path);
        if segments.is_empty() {
            return path_title(self.path);
        }
        let crumb = segments
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(CRUMB_SEPARATOR);
        if crumb.width() <= max_width {
            crumb
        } else {
            truncate_path(self.path, max_width)
        }
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.search_focused {
            Style::default().fg(self.fg_color).bg(self.input_bg)
        } else {
            Style::default().fg(self.dim_color).bg(self.input_bg)
        };
        buf.set_style(area, style);

        let prefix = " / ";
        buf.set_string(area.x, area.y, prefix, style.fg(self.accent_color));
        let text_x = area.x + prefix.width() as u16;
        let text_width = area.width.saturating_sub(prefix.width() as u16 + 1) as usize;
        if text_width == 0 {
            return;
        }

        if self.search.is_empty() && !self.search_focused {
            buf.set_stringn(text_x, area.y, "Search", text_width, style);
            return;
        }

        // 커서가 항상 보이도록 앞부분을 잘라낸다
        let before = self.search.before_cursor();
        let skip = before.width().saturating_sub(text_width.saturating_sub(1));
        let mut skipped = 0;
        let visible: String = self
            .search
            .value()
            .chars()
            .skip_while(|c| {
                if skipped >= skip {
                    return false;
                }
                skipped += unicode_width::UnicodeWidthChar::width(*c).unwrap_or(0);
                true
            })
            .collect();
        buf.set_stringn(text_x, area.y, &visible, text_width, style);

        if self.search_focused {
            let cursor_x = text_x + before.width().saturating_sub(skipped) as u16;
            if cursor_x < area.x + area.width {
                buf.set_style(
                    Rect::new(cursor_x, area.y, 1, 1),
                    Style::default().add_modifier(Modifier::REVERSED),
                );
            }
        }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.bg_color));

        let search_width = if area.width >= SEARCH_MIN_AREA {
            (area.width / 3).min(SEARCH_MAX_WIDTH)
        } else {
            0
        };
        let left_width = area.width.saturating_sub(search_width + 1);

        let arrow_style = |enabled: bool| {
            if enabled {
                Style::default().fg(self.fg_color)
            } else {
                Style::default().fg(self.dim_color)
            }
        };
        let mut spans = vec![
            Span::raw(" "),
            Span::styled("◀", arrow_style(self.can_go_back)),
            Span::raw(" "),
            Span::styled("▶", arrow_style(self.can_go_forward)),
            Span::raw("  "),
        ];
        let prefix_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let suffix = if self.loading { " …" } else { "" };
        let crumb_width = (left_width as usize)
            .saturating_sub(prefix_width + suffix.width());
        let crumb = self.breadcrumb(crumb_width);
        spans.push(Span::styled(
            truncate_end(&crumb, crumb_width),
            Style::default()
                .fg(self.fg_color)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(suffix, Style::default().fg(self.dim_color)));
        buf.set_line(area.x, area.y, &Line::from(spans), left_width);

        if search_width > 0 {
            let search_area = Rect::new(
                area.x + area.width - search_width,
                area.y,
                search_width,
                1,
            );
            self.render_search(search_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_breadcrumb_joins_segments() {
        let search = TextInput::default();
        let bar = NavBar::new("/Users/username/Documents", &search);
        assert_eq!(bar.breadcrumb(80), "Users › username › Documents");
    }

    #[test]
    fn test_breadcrumb_root() {
        let search = TextInput::default();
        let bar = NavBar::new("/", &search);
        assert_eq!(bar.breadcrumb(80), "Root");
    }

    #[test]
    fn test_render_shows_path_and_search_placeholder() {
        let search = TextInput::default();
        let area = Rect::new(0, 0, 90, 1);
        let mut buf = Buffer::empty(area);
        NavBar::new("/Users/username", &search).render(area, &mut buf);

        let text = row_text(&buf);
        assert!(text.contains("username"));
        assert!(text.contains("Search"));
    }

    #[test]
    fn test_render_shows_filter_text() {
        let search = TextInput::new("report");
        let area = Rect::new(0, 0, 90, 1);
        let mut buf = Buffer::empty(area);
        NavBar::new("/Users/username", &search)
            .search_focused(true)
            .render(area, &mut buf);

        assert!(row_text(&buf).contains("report"));
    }

    #[test]
    fn test_narrow_area_hides_search() {
        let search = TextInput::new("report");
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        NavBar::new("/Users/username", &search).render(area, &mut buf);

        assert!(!row_text(&buf).contains("report"));
    }
}
