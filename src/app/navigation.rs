use super::controllers;
use super::*;
use crate::core::listing::{sort_indicator, SortBy};
use crate::core::selection::ClickModifiers;
use crate::models::panel_state::ViewMode;

impl App {
    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::MoveUp => self.move_and_click(-1, ClickModifiers::NONE),
            Action::MoveDown => self.move_and_click(1, ClickModifiers::NONE),
            Action::CursorUp => self.active_panel_state_mut().move_cursor_up(),
            Action::CursorDown => self.active_panel_state_mut().move_cursor_down(),
            Action::ExtendUp => self.extend_selection(-1),
            Action::ExtendDown => self.extend_selection(1),
            Action::GoToTop => self.active_panel_state_mut().cursor_to_top(),
            Action::GoToBottom => self.active_panel_state_mut().cursor_to_bottom(),
            Action::PageUp => self.move_page(-1),
            Action::PageDown => self.move_page(1),
            Action::EnterSelected => self.enter_selected(),
            Action::GoToParent => self.go_to_parent(),
            Action::FocusSidebar => self.toggle_sidebar_focus(),
            Action::TabNew => self.new_tab(),
            Action::TabClose => self.close_tab(),
            Action::TabPrev => self.prev_tab(),
            Action::TabNext => self.next_tab(),
            Action::ShowHelp
            | Action::Refresh
            | Action::ToggleTheme
            | Action::OpenContextMenu
            | Action::ShowInfo => controllers::dialog_controller::execute(self, action),
            Action::ToggleSelection
            | Action::SelectAll
            | Action::InvertSelection
            | Action::DeselectAll
            | Action::ViewGrid
            | Action::ViewList
            | Action::ViewDetails
            | Action::CycleView
            | Action::SortByName
            | Action::SortBySize
            | Action::SortByDate
            | Action::SortByKind
            | Action::StartFilter
            | Action::ClearFilter
            | Action::HistoryBack
            | Action::HistoryForward
            | Action::Copy
            | Action::Move
            | Action::Delete
            | Action::NewFolder => controllers::operation_controller::execute(self, action),
        }
    }

    // === 목록 조회 ===

    /// 탭의 목록 조회 시작 (같은 탭의 이전 조회는 중단)
    pub(super) fn spawn_navigation(&mut self, tab_id: usize, request: NavigationRequest) {
        if let Some(previous) = self.nav_tasks.remove(&tab_id) {
            previous.abort();
        }
        info!(
            tab_id,
            path = %request.path,
            kind = ?request.kind,
            generation = request.generation,
            "navigation started"
        );

        let filesystem = self.filesystem();
        let handle = self.spawn_task(async move {
            let result = filesystem.list(&request.path).await;
            AppEvent::Navigated {
                tab_id,
                request,
                result,
            }
        });
        self.nav_tasks.insert(tab_id, handle);
    }

    /// 활성 탭에서 경로 방문
    pub fn navigate_to(&mut self, path: &str) {
        let tab_id = self.tabs.active_id();
        let request = self.active_panel_state_mut().visit(path);
        self.spawn_navigation(tab_id, request);
    }

    /// 상위 디렉토리로 이동 (루트에서는 무시)
    pub fn go_to_parent(&mut self) {
        let tab_id = self.tabs.active_id();
        if let Some(request) = self.active_panel_state_mut().go_up() {
            self.spawn_navigation(tab_id, request);
        }
    }

    pub fn history_back(&mut self) {
        let tab_id = self.tabs.active_id();
        if let Some(request) = self.active_panel_state_mut().history_back() {
            self.spawn_navigation(tab_id, request);
        }
    }

    pub fn history_forward(&mut self) {
        let tab_id = self.tabs.active_id();
        if let Some(request) = self.active_panel_state_mut().history_forward() {
            self.spawn_navigation(tab_id, request);
        }
    }

    /// 현재 경로 다시 불러오기 (Ctrl+R)
    pub fn refresh_current(&mut self) {
        let tab_id = self.tabs.active_id();
        let request = self.active_panel_state_mut().refresh();
        self.spawn_navigation(tab_id, request);
    }

    /// 커서 항목 열기: 폴더면 이동, 파일이면 안내
    pub fn enter_selected(&mut self) {
        let Some(entry) = self.active_panel_state().cursor_entry() else {
            return;
        };
        if entry.is_folder() {
            self.navigate_to(&entry.path);
        } else {
            debug!(name = %entry.name, "open requested for file");
            self.set_toast(&format!("Cannot open '{}' in this preview", entry.name));
        }
    }

    // === 커서/선택 ===

    /// 커서 이동 후 커서 항목 클릭
    fn move_and_click(&mut self, delta: isize, modifiers: ClickModifiers) {
        let panel = self.active_panel_state_mut();
        panel.move_cursor_by(delta);
        panel.click_cursor(modifiers);
    }

    /// 범위 선택 확장 (선택이 없으면 현재 항목을 기준점으로 삼는다)
    fn extend_selection(&mut self, delta: isize) {
        let panel = self.active_panel_state_mut();
        if panel.selection.is_empty() {
            panel.click_cursor(ClickModifiers::NONE);
        }
        panel.move_cursor_by(delta);
        panel.click_cursor(ClickModifiers::RANGE);
    }

    fn move_page(&mut self, direction: isize) {
        let page = self.layout.page_size() as isize;
        self.active_panel_state_mut().move_cursor_by(direction * page);
    }

    pub(super) fn toggle_selection(&mut self) {
        self.active_panel_state_mut()
            .click_cursor(ClickModifiers::PRIMARY);
    }

    // === 보기/정렬 ===

    pub(super) fn set_view_mode(&mut self, mode: ViewMode) {
        self.active_panel_state_mut().set_view_mode(mode);
    }

    pub(super) fn cycle_view_mode(&mut self) {
        let next = self.active_panel_state().view_mode.next();
        self.set_view_mode(next);
        self.set_toast(&format!("{} view", next.label()));
    }

    /// 정렬 기준 변경 (같은 기준이면 순서 토글)
    pub(super) fn sort_active_panel(&mut self, sort_by: SortBy) {
        let panel = self.active_panel_state_mut();
        panel.set_sort(sort_by);
        let indicator = sort_indicator(panel.sort_by, panel.sort_order);
        self.set_toast(&format!("Sorted by {}", indicator));
    }

    // === 검색 ===

    /// 검색창 포커스 (/)
    pub(super) fn start_filter(&mut self) {
        self.sync_search_input();
        self.layout.set_focus(Focus::Search);
    }

    /// 검색어 지우고 목록으로 복귀
    pub fn clear_filter(&mut self) {
        self.search_input.clear();
        self.active_panel_state_mut().set_filter("");
        self.layout.set_focus(Focus::Files);
    }

    /// 검색창 내용으로 필터 갱신 (입력할 때마다)
    fn apply_search_input(&mut self) {
        let value = self.search_input.value().to_string();
        self.active_panel_state_mut().set_filter(value);
    }

    pub fn search_input_char(&mut self, c: char) {
        self.search_input.insert_char(c);
        self.apply_search_input();
    }

    pub fn search_input_backspace(&mut self) {
        self.search_input.backspace();
        self.apply_search_input();
    }

    pub fn search_input_delete(&mut self) {
        self.search_input.delete();
        self.apply_search_input();
    }

    pub fn search_input_delete_prev_word(&mut self) {
        self.search_input.delete_prev_word();
        self.apply_search_input();
    }

    pub fn search_input_left(&mut self) {
        self.search_input.left();
    }

    pub fn search_input_right(&mut self) {
        self.search_input.right();
    }

    pub fn search_input_home(&mut self) {
        self.search_input.home();
    }

    pub fn search_input_end(&mut self) {
        self.search_input.end();
    }

    /// 검색어를 유지한 채 목록으로 복귀 (Enter)
    pub fn finish_search(&mut self) {
        self.layout.set_focus(Focus::Files);
    }

    // === 사이드바 ===

    /// 사이드바 포커스 토글 (Tab)
    pub fn toggle_sidebar_focus(&mut self) {
        match self.layout.focus() {
            Focus::Sidebar => self.layout.set_focus(Focus::Files),
            _ if self.layout.shows_sidebar() => {
                if let Some(idx) = self
                    .sidebar
                    .active_index(&self.tabs.active_panel().current_path)
                {
                    self.sidebar.cursor = idx;
                }
                self.layout.set_focus(Focus::Sidebar);
            }
            _ => {}
        }
    }

    pub fn sidebar_move_up(&mut self) {
        self.sidebar.move_up();
    }

    pub fn sidebar_move_down(&mut self) {
        self.sidebar.move_down();
    }

    /// 사이드바 커서 항목으로 이동
    pub fn sidebar_open_selected(&mut self) {
        let Some(path) = self.sidebar.cursor_item().map(|item| item.path.clone()) else {
            return;
        };
        self.layout.set_focus(Focus::Files);
        self.navigate_to(&path);
    }
}
