use crate::config::Config;
use crate::core::actions::Action;
use crate::models::file_entry::Entry;
use crate::models::operation::PendingOperation;
use crate::models::panel_state::NavigationRequest;
use crate::models::sidebar::Sidebar;
use crate::models::{PanelState, TabManager};
use crate::system::MockFileSystem;
use crate::ui::components::context_menu::ContextMenuState;
use crate::ui::{DialogKind, Focus, LayoutManager, ThemeManager};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{debug, info, warn};

mod controllers;
mod dialogs;
mod navigation;
mod operations;
pub mod text_edit;

pub use text_edit::TextInput;

/// 토스트 표시 시간
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// 데이터 소스 작업 완료 이벤트 (UI 스레드에서 반영)
#[derive(Debug)]
pub enum AppEvent {
    /// 디렉토리 목록 도착
    Navigated {
        tab_id: usize,
        request: NavigationRequest,
        result: Result<Vec<Entry>>,
    },
    /// 새 폴더 생성 완료
    FolderCreated {
        tab_id: usize,
        parent: String,
        result: Result<Entry>,
    },
    /// 복사/이동/삭제 완료
    OperationFinished {
        operation: PendingOperation,
        result: Result<()>,
    },
}

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    pub config: Config,
    /// 탭별 세션 상태
    pub tabs: TabManager,
    pub sidebar: Sidebar,
    /// 레이아웃 매니저 (포커스 포함)
    pub layout: LayoutManager,
    pub theme_manager: ThemeManager,
    /// 검색창 입력 버퍼 (활성 탭의 필터와 동기화)
    pub search_input: TextInput,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 열린 컨텍스트 메뉴
    pub context_menu: Option<ContextMenuState>,
    /// 대기 중인 파일 작업
    pub pending_operation: Option<PendingOperation>,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
    filesystem: Arc<MockFileSystem>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    /// 탭 id → 진행 중인 목록 조회 작업
    nav_tasks: HashMap<usize, AbortHandle>,
    tasks: Vec<JoinHandle<()>>,
}

impl App {
    /// 설정으로 앱 생성 후 홈 경로 목록을 불러온다.
    ///
    /// tokio 런타임 안에서 호출해야 한다.
    pub fn new(config: Config) -> Self {
        let mut app = Self::build(config);
        let request = app.tabs.active_panel_mut().refresh();
        let tab_id = app.tabs.active_id();
        app.spawn_navigation(tab_id, request);
        app
    }

    fn build(config: Config) -> Self {
        let mut panel = PanelState::new(config.home_path.clone());
        panel.view_mode = config.view_mode;
        panel.sort_by = config.sort_by;
        panel.sort_order = config.sort_order;

        let sidebar = Sidebar::new(
            &config.home_path,
            config
                .favorites
                .iter()
                .map(|f| (f.name.clone(), f.path.clone())),
        );
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Self {
            should_quit: false,
            tabs: TabManager::new(panel),
            sidebar,
            layout: LayoutManager::new(),
            theme_manager: ThemeManager::new(config.theme),
            search_input: TextInput::default(),
            dialog: None,
            context_menu: None,
            pending_operation: None,
            toast_message: None,
            filesystem: Arc::new(MockFileSystem::new(config.latency())),
            events_tx,
            events_rx,
            nav_tasks: HashMap::new(),
            tasks: Vec::new(),
            config,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        let config = Config {
            latency_ms: 0,
            ..Config::default()
        };
        Self::new(config)
    }

    /// 종료
    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // === 비동기 작업 ===

    /// 데이터 소스 작업을 띄우고 결과를 이벤트 채널로 돌려받는다
    fn spawn_task<F>(&mut self, future: F) -> AbortHandle
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let tx = self.events_tx.clone();
        let handle = tokio::spawn(async move {
            let event = future.await;
            // 수신 측이 사라졌으면 앱이 종료된 것
            let _ = tx.send(event);
        });
        let abort = handle.abort_handle();
        self.tasks.push(handle);
        abort
    }

    pub(crate) fn filesystem(&self) -> Arc<MockFileSystem> {
        Arc::clone(&self.filesystem)
    }

    /// 도착한 이벤트를 모두 반영 (메인 루프에서 매 틱 호출)
    pub fn process_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
        self.tasks.retain(|handle| !handle.is_finished());
    }

    /// 진행 중인 작업이 모두 끝날 때까지 기다리며 결과를 반영
    #[cfg(test)]
    pub(crate) async fn settle(&mut self) {
        loop {
            let tasks = std::mem::take(&mut self.tasks);
            if tasks.is_empty() {
                break;
            }
            for handle in tasks {
                // 중단된 작업은 JoinError로 끝난다
                let _ = handle.await;
            }
            self.process_events();
        }
        self.process_events();
    }

    /// 이벤트 하나 반영
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Navigated {
                tab_id,
                request,
                result,
            } => {
                let Some(tab) = self.tabs.tab_mut_by_id(tab_id) else {
                    debug!(tab_id, path = %request.path, "listing for closed tab dropped");
                    return;
                };
                if let Err(err) = &result {
                    warn!(tab_id, path = %request.path, error = %err, "navigation failed");
                }
                if tab.panel.complete_navigation(&request, result) {
                    self.nav_tasks.remove(&tab_id);
                    info!(tab_id, path = %request.path, "navigation completed");
                } else {
                    debug!(
                        tab_id,
                        path = %request.path,
                        generation = request.generation,
                        "stale listing discarded"
                    );
                }
                if tab_id == self.tabs.active_id() {
                    self.sync_search_input();
                }
            }
            AppEvent::FolderCreated {
                tab_id,
                parent,
                result,
            } => self.apply_folder_created(tab_id, &parent, result),
            AppEvent::OperationFinished { operation, result } => {
                self.apply_operation_result(operation, result)
            }
        }
    }

    // === 토스트 ===

    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    pub fn clear_expired_toast(&mut self) {
        if let Some((_, created)) = &self.toast_message {
            if created.elapsed() >= TOAST_DURATION {
                self.toast_message = None;
            }
        }
    }

    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message.as_ref().map(|(msg, _)| msg.as_str())
    }

    // === 탭 ===

    /// 새 탭 (홈 경로에서 시작)
    pub fn new_tab(&mut self) {
        let home = self.config.home_path.clone();
        let Some(tab_id) = self.tabs.new_tab(home) else {
            self.set_toast("Maximum number of tabs reached");
            return;
        };
        let request = self.tabs.active_panel_mut().refresh();
        self.spawn_navigation(tab_id, request);
        self.sync_search_input();
    }

    /// 현재 탭 닫기 (진행 중인 목록 조회도 중단)
    pub fn close_tab(&mut self) {
        match self.tabs.close_tab() {
            Some(closed_id) => {
                if let Some(handle) = self.nav_tasks.remove(&closed_id) {
                    handle.abort();
                }
                debug!(tab_id = closed_id, "tab closed");
                self.sync_search_input();
            }
            None => self.set_toast("Cannot close the last tab"),
        }
    }

    pub fn next_tab(&mut self) {
        self.tabs.next_tab();
        self.sync_search_input();
    }

    pub fn prev_tab(&mut self) {
        self.tabs.prev_tab();
        self.sync_search_input();
    }

    /// 탭 번호(1-based)로 전환
    pub fn switch_tab(&mut self, number: usize) {
        if self.tabs.switch_to(number) {
            self.sync_search_input();
        }
    }

    /// 검색창을 활성 탭의 필터에 맞춘다
    fn sync_search_input(&mut self) {
        let filter = &self.tabs.active_panel().filter;
        if self.search_input.value() != filter {
            self.search_input.set(filter.clone());
        }
    }

    // === 접근자 ===

    pub fn active_panel_state(&self) -> &PanelState {
        self.tabs.active_panel()
    }

    pub fn active_panel_state_mut(&mut self) -> &mut PanelState {
        self.tabs.active_panel_mut()
    }

    pub fn focus(&self) -> Focus {
        self.layout.focus()
    }

    pub fn is_context_menu_open(&self) -> bool {
        self.context_menu.is_some()
    }
}
