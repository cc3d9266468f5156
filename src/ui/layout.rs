// Layout system - 반응형 레이아웃 시스템
//
// 터미널 크기에 따른 레이아웃 모드:
// - 80+ cols: 사이드바 + 파일 목록
// - 40-79 cols: 파일 목록만 (사이드바 숨김)
// - <40 cols: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;
pub const SIDEBAR_MIN_WIDTH: u16 = 80;
pub const SIDEBAR_WIDTH: u16 = 24;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 사이드바 표시 (80+ cols)
    Full,
    /// 사이드바 숨김 (40-79 cols)
    Compact,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 키 입력을 받는 영역
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Files,
    Sidebar,
    Search,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    pub tab_bar: Rect,
    /// 뒤로/앞으로 + 경로 + 검색창
    pub nav_bar: Rect,
    pub sidebar: Rect,
    /// 보기 방식/정렬 표시줄
    pub toolbar: Rect,
    pub file_view: Rect,
    pub status_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 상태
#[derive(Debug, Clone)]
pub struct LayoutState {
    pub mode: LayoutMode,
    pub focus: Focus,
    pub terminal_size: (u16, u16),
    pub areas: LayoutAreas,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Full,
            focus: Focus::default(),
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }
}

/// 레이아웃 매니저
#[derive(Debug, Default)]
pub struct LayoutManager {
    state: LayoutState,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else if width < SIDEBAR_MIN_WIDTH {
            LayoutMode::Compact
        } else {
            LayoutMode::Full
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.state.terminal_size = (area.width, area.height);
        self.state.mode = Self::determine_mode(area.width, area.height);
        self.state.areas = self.calculate_areas(area);
        if self.state.mode != LayoutMode::Full && self.state.focus == Focus::Sidebar {
            self.state.focus = Focus::Files;
        }
    }

    fn calculate_areas(&self, area: Rect) -> LayoutAreas {
        if self.state.mode == LayoutMode::TooSmall {
            return LayoutAreas {
                warning: area,
                ..Default::default()
            };
        }

        // 탭바 | 내비게이션바 | 본문 | 상태바
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        let (sidebar, content) = if self.state.mode == LayoutMode::Full {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
                .split(vertical[2]);
            (horizontal[0], horizontal[1])
        } else {
            (Rect::default(), vertical[2])
        };

        // 본문: 툴바 | 파일 목록
        let content_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(2)])
            .split(content);

        LayoutAreas {
            tab_bar: vertical[0],
            nav_bar: vertical[1],
            sidebar,
            toolbar: content_chunks[0],
            file_view: content_chunks[1],
            status_bar: vertical[3],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.state.mode
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.state.areas
    }

    pub fn focus(&self) -> Focus {
        self.state.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.state.focus = focus;
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.state.terminal_size
    }

    /// 사이드바 표시 여부
    pub fn shows_sidebar(&self) -> bool {
        self.state.mode == LayoutMode::Full
    }

    pub fn is_too_small(&self) -> bool {
        matches!(self.state.mode, LayoutMode::TooSmall)
    }

    /// 한 화면에 보이는 파일 행 수 (테두리와 헤더 제외)
    pub fn page_size(&self) -> usize {
        (self.state.areas.file_view.height.saturating_sub(3) as usize).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24), LayoutMode::Full);
        assert_eq!(LayoutManager::determine_mode(120, 30), LayoutMode::Full);
        assert_eq!(LayoutManager::determine_mode(79, 24), LayoutMode::Compact);
        assert_eq!(LayoutManager::determine_mode(40, 24), LayoutMode::Compact);
        assert_eq!(LayoutManager::determine_mode(39, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 11), LayoutMode::TooSmall);
    }

    #[test]
    fn test_full_layout_areas() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 100, 30));

        let areas = manager.areas();
        assert_eq!(areas.tab_bar.height, 1);
        assert_eq!(areas.nav_bar.y, 1);
        assert_eq!(areas.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.toolbar.x, SIDEBAR_WIDTH);
        assert_eq!(areas.file_view.height, 30 - 4 - 1);
        assert_eq!(areas.status_bar.y, 29);
        assert_eq!(manager.page_size(), 22);
    }

    #[test]
    fn test_compact_hides_sidebar_and_drops_sidebar_focus() {
        let mut manager = LayoutManager::new();
        manager.set_focus(Focus::Sidebar);
        manager.update(Rect::new(0, 0, 60, 24));

        assert!(!manager.shows_sidebar());
        assert_eq!(manager.areas().sidebar, Rect::default());
        assert_eq!(manager.areas().file_view.width, 60);
        assert_eq!(manager.focus(), Focus::Files);
    }

    #[test]
    fn test_too_small() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 30, 10));
        assert!(manager.is_too_small());
        assert_eq!(manager.areas().warning, Rect::new(0, 0, 30, 10));
    }
}
