use crate::core::listing::{compute_visible_listing, SortBy, SortOrder};
use crate::core::selection::{self, ClickModifiers};
use crate::models::file_entry::Entry;
use crate::models::history::NavigationHistory;
use crate::utils::error::Result;
use crate::utils::path_display::parent_path;
use serde::{Deserialize, Serialize};

/// 파일 목록 보기 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// 아이콘 그리드
    Grid,
    /// 이름 목록
    List,
    /// 상세 (이름/날짜/크기/종류 열)
    #[default]
    Details,
}

impl ViewMode {
    /// 다음 보기 방식 (Grid → List → Details → Grid)
    pub fn next(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Details,
            ViewMode::Details => ViewMode::Grid,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
            ViewMode::Details => "Details",
        }
    }
}

/// 이동 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// 새 경로 방문 (기록에 추가)
    Visit,
    /// 기록 뒤로
    Back,
    /// 기록 앞으로
    Forward,
    /// 현재 경로 다시 읽기
    Refresh,
}

/// 진행 중인 이동 요청
///
/// `generation`이 패널의 최신 값과 다르면 결과는 버려진다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
    pub generation: u64,
    pub kind: NavigationKind,
    /// 완료 후 커서를 둘 항목 이름 (상위 이동 시 직전 폴더)
    pub focus_name: Option<String>,
}

/// 탭 하나의 세션 상태
#[derive(Debug, Clone)]
pub struct PanelState {
    /// 현재 경로
    pub current_path: String,
    /// 현재 디렉토리의 원본 엔트리 (이동마다 통째로 교체)
    pub entries: Vec<Entry>,
    /// 검색어
    pub filter: String,
    /// 정렬 기준
    pub sort_by: SortBy,
    /// 정렬 순서
    pub sort_order: SortOrder,
    /// 선택된 id (삽입 순서)
    pub selection: Vec<String>,
    /// 보이는 목록 내 커서 위치
    pub cursor: usize,
    /// 보기 방식
    pub view_mode: ViewMode,
    /// 이동 기록
    pub history: NavigationHistory,
    /// 마지막 실패 메시지 (다음 이동 성공 시 지워짐)
    pub error: Option<String>,
    /// 목록 로딩 중 여부
    pub loading: bool,
    generation: u64,
}

impl PanelState {
    /// 새 패널 상태 생성 (엔트리는 비어 있음)
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            history: NavigationHistory::new(path.clone()),
            current_path: path,
            entries: Vec::new(),
            filter: String::new(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            selection: Vec::new(),
            cursor: 0,
            view_mode: ViewMode::default(),
            error: None,
            loading: false,
            generation: 0,
        }
    }

    // === 이동 ===

    /// 이동 시작: 로딩 표시, 에러 초기화, 세대 증가
    ///
    /// 기록은 목록이 도착해야 바뀐다 (`complete_navigation`).
    pub fn begin_navigation(&mut self, path: String, kind: NavigationKind) -> NavigationRequest {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        NavigationRequest {
            path,
            generation: self.generation,
            kind,
            focus_name: None,
        }
    }

    /// 새 경로 방문
    pub fn visit(&mut self, path: impl Into<String>) -> NavigationRequest {
        self.begin_navigation(path.into(), NavigationKind::Visit)
    }

    /// 상위 경로로 이동 (마지막 세그먼트 제거). 루트면 None
    pub fn go_up(&mut self) -> Option<NavigationRequest> {
        let parent = parent_path(&self.current_path);
        if parent == self.current_path {
            return None;
        }
        let focus = crate::utils::path_display::path_title(&self.current_path);
        let mut request = self.visit(parent);
        request.focus_name = Some(focus);
        Some(request)
    }

    /// 기록 뒤로
    pub fn history_back(&mut self) -> Option<NavigationRequest> {
        let path = self.history.peek_back()?.to_string();
        Some(self.begin_navigation(path, NavigationKind::Back))
    }

    /// 기록 앞으로
    pub fn history_forward(&mut self) -> Option<NavigationRequest> {
        let path = self.history.peek_forward()?.to_string();
        Some(self.begin_navigation(path, NavigationKind::Forward))
    }

    /// 현재 경로 새로고침 (기록 변화 없음)
    pub fn refresh(&mut self) -> NavigationRequest {
        self.begin_navigation(self.current_path.clone(), NavigationKind::Refresh)
    }

    /// 요청이 가장 최근 이동인지 확인
    pub fn is_latest(&self, request: &NavigationRequest) -> bool {
        request.generation == self.generation
    }

    /// 이동 완료 처리 (마지막 요청만 반영)
    ///
    /// 성공하면 기록을 옮기고 엔트리를 교체하며 선택/커서/에러를 초기화한다.
    /// 실패하면 에러 슬롯에 메시지를 남긴다. 반영 여부를 반환한다.
    pub fn complete_navigation(
        &mut self,
        request: &NavigationRequest,
        result: Result<Vec<Entry>>,
    ) -> bool {
        if !self.is_latest(request) {
            return false;
        }
        self.loading = false;

        match result {
            Ok(entries) => {
                match request.kind {
                    NavigationKind::Visit => self.history.record(request.path.clone()),
                    NavigationKind::Back => {
                        self.history.back();
                    }
                    NavigationKind::Forward => {
                        self.history.forward();
                    }
                    NavigationKind::Refresh => {}
                }
                self.entries = entries;
                self.current_path = request.path.clone();
                self.selection.clear();
                self.error = None;
                self.cursor = 0;
                if let Some(name) = &request.focus_name {
                    if let Some(idx) = self.visible_entries().iter().position(|e| &e.name == name) {
                        self.cursor = idx;
                    }
                }
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        true
    }

    // === 목록 ===

    /// 필터/정렬/폴더 우선 적용된 보이는 목록
    pub fn visible_entries(&self) -> Vec<Entry> {
        compute_visible_listing(&self.entries, &self.filter, self.sort_by, self.sort_order)
    }

    /// 검색어 설정 (선택은 보이는 항목으로 정리)
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.rescope();
    }

    /// 정렬 기준 변경 (같은 기준이면 순서 토글, 새 기준이면 오름차순)
    pub fn set_sort(&mut self, sort_by: SortBy) {
        let focused = self.cursor_entry().map(|e| e.id);
        if self.sort_by == sort_by {
            self.sort_order = self.sort_order.toggle();
        } else {
            self.sort_by = sort_by;
            self.sort_order = SortOrder::Ascending;
        }
        self.restore_cursor(focused.as_deref());
    }

    /// 보기 방식 변경
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    // === 선택 ===

    /// 항목 클릭
    pub fn click(&mut self, id: &str, modifiers: ClickModifiers) {
        let visible = self.visible_entries();
        self.selection = selection::update_selection(&self.selection, &visible, id, modifiers);
    }

    /// 커서 위치 항목 클릭
    pub fn click_cursor(&mut self, modifiers: ClickModifiers) {
        if let Some(entry) = self.cursor_entry() {
            self.click(&entry.id, modifiers);
        }
    }

    pub fn select_all(&mut self) {
        self.selection = selection::select_all(&self.visible_entries());
    }

    pub fn invert_selection(&mut self) {
        self.selection = selection::invert_selection(&self.selection, &self.visible_entries());
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|s| s == id)
    }

    /// 작업 대상 id: 선택이 있으면 선택, 없으면 커서 항목
    pub fn operation_targets(&self) -> Vec<String> {
        if !self.selection.is_empty() {
            return self.selection.clone();
        }
        self.cursor_entry().map(|e| vec![e.id]).unwrap_or_default()
    }

    // === 커서 ===

    /// 커서 위치 항목
    pub fn cursor_entry(&self) -> Option<Entry> {
        self.visible_entries().into_iter().nth(self.cursor)
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.visible_entries().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_by(&mut self, delta: isize) {
        let len = self.visible_entries().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn cursor_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_bottom(&mut self) {
        self.cursor = self.visible_entries().len().saturating_sub(1);
    }

    // === 데이터 소스 작업 반영 ===

    /// 새로 만든 엔트리 추가
    pub fn apply_created(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// 삭제/이동된 엔트리 제거
    pub fn apply_removed(&mut self, ids: &[String]) {
        self.entries.retain(|e| !ids.contains(&e.id));
        self.rescope();
    }

    /// 선택을 보이는 항목으로 정리하고 커서 범위를 맞춘다
    fn rescope(&mut self) {
        let visible = self.visible_entries();
        self.selection = selection::retain_visible(&self.selection, &visible);
        if self.cursor >= visible.len() {
            self.cursor = visible.len().saturating_sub(1);
        }
    }

    fn restore_cursor(&mut self, focused_id: Option<&str>) {
        if let Some(id) = focused_id {
            if let Some(idx) = self.visible_entries().iter().position(|e| e.id == id) {
                self.cursor = idx;
            }
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new("/")
    }
}
