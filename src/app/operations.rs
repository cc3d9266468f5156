use super::*;
use crate::core::actions::{ContextAction, ContextHandler};
use crate::models::operation::{OperationState, OperationType};
use crate::ui::InputPurpose;

impl App {
    // === 컨텍스트 메뉴 ===

    /// 컨텍스트 메뉴 열기 (m)
    ///
    /// 대상은 선택 항목, 선택이 없으면 커서 항목이다. 대상이 없으면 열지 않는다.
    pub fn open_context_menu(&mut self) {
        let targets = self.active_panel_state().operation_targets();
        if targets.is_empty() {
            return;
        }
        self.context_menu = Some(ContextMenuState::new(targets));
    }

    pub fn close_context_menu(&mut self) {
        self.context_menu = None;
    }

    pub fn context_menu_next(&mut self) {
        if let Some(menu) = &mut self.context_menu {
            menu.next_item();
        }
    }

    pub fn context_menu_prev(&mut self) {
        if let Some(menu) = &mut self.context_menu {
            menu.prev_item();
        }
    }

    /// 선택된 메뉴 항목 실행
    pub fn context_menu_activate(&mut self) {
        let Some(menu) = self.context_menu.take() else {
            return;
        };
        if let Some(action) = menu.selected_action() {
            self.run_context_action(action, menu.targets);
        }
    }

    /// 컨텍스트 액션 처리
    ///
    /// 복사/이동/삭제만 파일 작업으로 이어지고 나머지는 기록만 한다.
    pub fn run_context_action(&mut self, action: ContextAction, targets: Vec<String>) {
        match action.handler() {
            ContextHandler::FileOperation(op) => self.begin_operation(op, targets),
            ContextHandler::Acknowledge => {
                info!(?action, ?targets, "context action acknowledged");
            }
        }
    }

    // === 파일 작업 (복사/이동/삭제) ===

    /// 단축키로 작업 시작 (F5/F6/Del)
    pub fn start_operation(&mut self, operation_type: OperationType) {
        let targets = self.active_panel_state().operation_targets();
        self.begin_operation(operation_type, targets);
    }

    fn begin_operation(&mut self, operation_type: OperationType, targets: Vec<String>) {
        if targets.is_empty() {
            self.set_toast("No items selected");
            return;
        }
        if self
            .pending_operation
            .as_ref()
            .is_some_and(|p| p.state == OperationState::Processing)
        {
            self.set_toast("Another operation is in progress");
            return;
        }

        let current = self.active_panel_state().current_path.clone();
        let pending =
            PendingOperation::new(operation_type, targets, self.tabs.active_id(), current.clone());
        if operation_type.needs_destination() {
            self.dialog = Some(DialogKind::input(
                format!("{} Files", operation_type.name()),
                "Destination:",
                current,
                InputPurpose::OperationDestination,
            ));
        } else {
            self.dialog = Some(DialogKind::confirm(pending.confirmation()));
        }
        self.pending_operation = Some(pending);
    }

    /// 대상 경로 확정 후 확인 단계로
    pub(super) fn confirm_destination(&mut self, dest: &str) {
        let dest = dest.trim();
        let Some(pending) = &mut self.pending_operation else {
            self.dialog = None;
            return;
        };
        if dest.is_empty() {
            self.set_toast("Destination cannot be empty");
            return;
        }
        pending.set_destination(dest);
        self.dialog = Some(DialogKind::confirm(pending.confirmation()));
    }

    /// 확인 후 데이터 소스 작업 실행
    pub(super) fn confirm_operation(&mut self) {
        self.dialog = None;
        let Some(pending) = &mut self.pending_operation else {
            return;
        };
        if pending.state != OperationState::AwaitingConfirmation {
            return;
        }
        pending.start_processing();
        let operation = pending.clone();

        info!(
            op = operation.operation_type.name(),
            count = operation.ids.len(),
            dest = operation.dest_path.as_deref().unwrap_or(""),
            "operation confirmed"
        );

        let filesystem = self.filesystem();
        self.spawn_task(async move {
            let dest = operation.dest_path.clone().unwrap_or_default();
            let result = match operation.operation_type {
                OperationType::Copy => filesystem.copy(&operation.ids, &dest).await,
                OperationType::Move => filesystem.move_items(&operation.ids, &dest).await,
                OperationType::Delete => filesystem.delete(&operation.ids).await,
            };
            AppEvent::OperationFinished { operation, result }
        });
    }

    /// 작업 취소 (상태 변화 없음)
    pub fn cancel_operation(&mut self) {
        if let Some(pending) = self.pending_operation.take() {
            debug!(op = pending.operation_type.name(), "operation cancelled");
        }
        self.dialog = None;
    }

    /// 작업 결과 반영
    pub(super) fn apply_operation_result(&mut self, operation: PendingOperation, result: Result<()>) {
        if self.pending_operation.as_ref() == Some(&operation) {
            self.pending_operation = None;
        }

        let Some(tab) = self.tabs.tab_mut_by_id(operation.tab_id) else {
            return;
        };
        let panel = &mut tab.panel;
        // 그사이 다른 경로로 이동했다면 지금 목록은 건드리지 않는다
        let still_at_source = panel.current_path == operation.source_path;

        match result {
            Ok(()) => {
                if still_at_source && operation.removes_from_source() {
                    panel.apply_removed(&operation.ids);
                }
                info!(
                    op = operation.operation_type.name(),
                    source = %operation.source_path,
                    "operation finished"
                );
                self.set_toast(&operation.completion_message());
            }
            Err(err) => {
                warn!(op = operation.operation_type.name(), error = %err, "operation failed");
                if still_at_source {
                    panel.error = Some(err.to_string());
                } else {
                    self.set_toast(&err.to_string());
                }
            }
        }
    }

    // === 새 폴더 ===

    /// 새 폴더 이름 입력 (F7)
    pub fn start_new_folder(&mut self) {
        self.dialog = Some(DialogKind::input(
            "New Folder",
            "Folder name:",
            "untitled folder",
            InputPurpose::NewFolderName,
        ));
    }

    /// 활성 탭의 현재 경로에 폴더 생성
    pub(super) fn create_folder(&mut self, name: &str) {
        self.dialog = None;
        let tab_id = self.tabs.active_id();
        let parent = self.active_panel_state().current_path.clone();
        let name = name.to_string();

        let filesystem = self.filesystem();
        self.spawn_task(async move {
            let result = filesystem.create_folder(&parent, &name).await;
            AppEvent::FolderCreated {
                tab_id,
                parent,
                result,
            }
        });
    }

    pub(super) fn apply_folder_created(&mut self, tab_id: usize, parent: &str, result: Result<Entry>) {
        let Some(tab) = self.tabs.tab_mut_by_id(tab_id) else {
            return;
        };
        let panel = &mut tab.panel;

        match result {
            Ok(entry) => {
                let message = format!("Created folder '{}'", entry.name);
                // 그사이 다른 경로로 이동했다면 목록에 넣지 않는다
                if panel.current_path == parent {
                    panel.apply_created(entry);
                }
                self.set_toast(&message);
            }
            Err(err) => {
                warn!(parent, error = %err, "create folder failed");
                panel.error = Some(err.to_string());
            }
        }
    }
}
