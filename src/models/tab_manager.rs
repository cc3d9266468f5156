use crate::models::panel_state::PanelState;
use crate::utils::path_display::path_title;

/// 최대 탭 수
pub const MAX_TABS: usize = 9;

/// 탭 하나 (고유 id + 세션 상태)
#[derive(Debug, Clone)]
pub struct TabState {
    pub id: usize,
    pub panel: PanelState,
}

impl TabState {
    pub fn new(id: usize, panel: PanelState) -> Self {
        Self { id, panel }
    }

    /// 탭 제목 (경로의 마지막 세그먼트, 루트면 "Root")
    pub fn title(&self) -> String {
        path_title(&self.panel.current_path)
    }
}

/// 탭 관리자
#[derive(Debug, Clone)]
pub struct TabManager {
    /// 탭 목록 (최소 1개, 최대 MAX_TABS)
    pub tabs: Vec<TabState>,
    /// 활성 탭 인덱스 (0-based)
    pub active_tab: usize,
    /// 다음 탭 ID (자동 증가)
    next_id: usize,
}

impl TabManager {
    /// 초기 패널 하나로 탭 관리자 생성
    pub fn new(initial: PanelState) -> Self {
        Self {
            tabs: vec![TabState::new(1, initial)],
            active_tab: 0,
            next_id: 2,
        }
    }

    /// 활성 탭 참조
    pub fn active(&self) -> &TabState {
        &self.tabs[self.active_tab]
    }

    /// 활성 탭의 PanelState 참조
    pub fn active_panel(&self) -> &PanelState {
        &self.tabs[self.active_tab].panel
    }

    /// 활성 탭의 PanelState 가변 참조
    pub fn active_panel_mut(&mut self) -> &mut PanelState {
        &mut self.tabs[self.active_tab].panel
    }

    /// 활성 탭 id
    pub fn active_id(&self) -> usize {
        self.tabs[self.active_tab].id
    }

    /// 새 탭 생성 (활성 탭 뒤에 삽입 후 활성화)
    ///
    /// 성공 시 새 탭 id, 최대 탭 수 초과 시 None.
    /// 보기 방식/정렬은 현재 탭에서 물려받고 필터/선택은 비운다.
    pub fn new_tab(&mut self, path: impl Into<String>) -> Option<usize> {
        if self.tabs.len() >= MAX_TABS {
            return None;
        }

        let current = &self.tabs[self.active_tab].panel;
        let mut panel = PanelState::new(path);
        panel.view_mode = current.view_mode;
        panel.sort_by = current.sort_by;
        panel.sort_order = current.sort_order;

        let id = self.next_id;
        self.next_id += 1;

        let insert_pos = self.active_tab + 1;
        self.tabs.insert(insert_pos, TabState::new(id, panel));
        self.active_tab = insert_pos;
        Some(id)
    }

    /// 현재 탭 닫기
    ///
    /// 닫힌 탭 id 반환, 마지막 탭이면 None
    pub fn close_tab(&mut self) -> Option<usize> {
        if self.tabs.len() <= 1 {
            return None;
        }
        let closed = self.tabs.remove(self.active_tab);
        if self.active_tab >= self.tabs.len() {
            self.active_tab = self.tabs.len() - 1;
        }
        Some(closed.id)
    }

    /// 탭 번호로 전환 (1-based)
    ///
    /// 성공 시 true, 해당 탭이 없으면 false
    pub fn switch_to(&mut self, number: usize) -> bool {
        let index = number.saturating_sub(1);
        if number > 0 && index < self.tabs.len() {
            self.active_tab = index;
            true
        } else {
            false
        }
    }

    /// 다음 탭 (순환)
    pub fn next_tab(&mut self) {
        self.active_tab = (self.active_tab + 1) % self.tabs.len();
    }

    /// 이전 탭 (순환)
    pub fn prev_tab(&mut self) {
        if self.active_tab == 0 {
            self.active_tab = self.tabs.len() - 1;
        } else {
            self.active_tab -= 1;
        }
    }

    /// 탭 제목 목록
    pub fn titles(&self) -> Vec<String> {
        self.tabs.iter().map(TabState::title).collect()
    }

    /// id로 탭 찾기 (비동기 결과 반영용, 닫힌 탭이면 None)
    pub fn tab_mut_by_id(&mut self, id: usize) -> Option<&mut TabState> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    /// 탭 개수
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::listing::{SortBy, SortOrder};
    use crate::models::panel_state::ViewMode;

    fn manager(path: &str) -> TabManager {
        TabManager::new(PanelState::new(path))
    }

    #[test]
    fn test_new_tab_manager() {
        let mgr = manager("/Users/username");
        assert_eq!(mgr.tab_count(), 1);
        assert_eq!(mgr.active_tab, 0);
        assert_eq!(mgr.active_id(), 1);
        assert_eq!(mgr.titles(), vec!["username".to_string()]);
    }

    #[test]
    fn test_new_tab_inserted_after_active() {
        let mut mgr = manager("/a");
        assert_eq!(mgr.new_tab("/b"), Some(2));
        assert_eq!(mgr.new_tab("/c"), Some(3));
        mgr.switch_to(1);
        assert_eq!(mgr.new_tab("/d"), Some(4));

        assert_eq!(mgr.active_tab, 1);
        assert_eq!(mgr.titles(), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_max_tabs() {
        let mut mgr = manager("/tmp");
        for _ in 0..8 {
            assert!(mgr.new_tab("/tmp").is_some());
        }
        assert_eq!(mgr.tab_count(), MAX_TABS);
        assert!(mgr.new_tab("/tmp").is_none());
    }

    #[test]
    fn test_close_tab() {
        let mut mgr = manager("/tmp");
        mgr.new_tab("/tmp");
        mgr.new_tab("/tmp");
        assert_eq!(mgr.tab_count(), 3);

        assert_eq!(mgr.close_tab(), Some(3));
        assert_eq!(mgr.tab_count(), 2);
        assert!(mgr.close_tab().is_some());
        assert_eq!(mgr.tab_count(), 1);

        assert!(mgr.close_tab().is_none()); // 마지막 탭은 닫을 수 없음
    }

    #[test]
    fn test_close_last_active_adjusts_index() {
        let mut mgr = manager("/tmp");
        mgr.new_tab("/tmp");
        mgr.new_tab("/tmp");
        assert_eq!(mgr.active_tab, 2);
        mgr.close_tab();
        assert_eq!(mgr.active_tab, 1);
    }

    #[test]
    fn test_switch_to() {
        let mut mgr = manager("/tmp");
        mgr.new_tab("/tmp");
        mgr.new_tab("/tmp");

        assert!(mgr.switch_to(1));
        assert_eq!(mgr.active_tab, 0);
        assert!(mgr.switch_to(3));
        assert_eq!(mgr.active_tab, 2);
        assert!(!mgr.switch_to(4));
        assert!(!mgr.switch_to(0));
        assert_eq!(mgr.active_tab, 2);
    }

    #[test]
    fn test_next_prev_tab() {
        let mut mgr = manager("/tmp");
        mgr.new_tab("/tmp");
        mgr.new_tab("/tmp");
        mgr.switch_to(1);

        mgr.next_tab();
        assert_eq!(mgr.active_tab, 1);
        mgr.next_tab();
        mgr.next_tab(); // 순환
        assert_eq!(mgr.active_tab, 0);
        mgr.prev_tab(); // 순환
        assert_eq!(mgr.active_tab, 2);
    }

    #[test]
    fn test_new_tab_inherits_view_settings() {
        let mut mgr = manager("/home");
        {
            let panel = mgr.active_panel_mut();
            panel.sort_by = SortBy::Size;
            panel.sort_order = SortOrder::Descending;
            panel.view_mode = ViewMode::Grid;
            panel.filter = "rs".to_string();
        }

        mgr.new_tab("/");
        let panel = mgr.active_panel();
        assert_eq!(panel.current_path, "/");
        assert_eq!(panel.sort_by, SortBy::Size);
        assert_eq!(panel.sort_order, SortOrder::Descending);
        assert_eq!(panel.view_mode, ViewMode::Grid);
        assert!(panel.filter.is_empty());
        assert_eq!(mgr.active().title(), "Root");
    }

    #[test]
    fn test_tab_mut_by_id() {
        let mut mgr = manager("/a");
        let id = mgr.new_tab("/b").expect("room for tab");
        assert!(mgr.tab_mut_by_id(id).is_some());
        mgr.close_tab();
        assert!(mgr.tab_mut_by_id(id).is_none());
        assert!(mgr.tab_mut_by_id(1).is_some());
    }
}
