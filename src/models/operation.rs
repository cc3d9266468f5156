//! 파일 작업 모델
//!
//! 컨텍스트 메뉴에서 시작된 복사/이동/삭제 요청과 확인 대화상자 문구

use crate::utils::formatter::format_item_count;

/// 작업 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// 복사
    Copy,
    /// 이동
    Move,
    /// 삭제
    Delete,
}

impl OperationType {
    /// 작업 유형 이름 반환
    pub fn name(&self) -> &'static str {
        match self {
            OperationType::Copy => "Copy",
            OperationType::Move => "Move",
            OperationType::Delete => "Delete",
        }
    }

    /// 문장 안에서 쓰는 동사 ("copy", "move", "delete")
    pub fn verb(&self) -> &'static str {
        match self {
            OperationType::Copy => "copy",
            OperationType::Move => "move",
            OperationType::Delete => "delete",
        }
    }

    /// 완료 메시지용 과거형
    pub fn past_tense(&self) -> &'static str {
        match self {
            OperationType::Copy => "Copied",
            OperationType::Move => "Moved",
            OperationType::Delete => "Deleted",
        }
    }

    /// 대상 경로 입력이 필요한지 여부
    pub fn needs_destination(&self) -> bool {
        matches!(self, OperationType::Copy | OperationType::Move)
    }
}

/// 작업 진행 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationState {
    /// 대상 경로 입력 대기
    AwaitingDestination,
    /// 확인 대기
    AwaitingConfirmation,
    /// 데이터 소스 처리 중
    Processing,
}

/// 대기 중인 작업
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// 작업 유형
    pub operation_type: OperationType,
    /// 대상 엔트리 id (선택 순서)
    pub ids: Vec<String>,
    /// 복사/이동 대상 경로
    pub dest_path: Option<String>,
    /// 작업을 시작한 탭 id
    pub tab_id: usize,
    /// 작업을 시작한 디렉토리
    pub source_path: String,
    /// 진행 단계
    pub state: OperationState,
}

impl PendingOperation {
    /// 새 대기 작업 생성
    ///
    /// 복사/이동은 대상 경로 입력부터, 삭제는 바로 확인부터 시작한다.
    pub fn new(
        operation_type: OperationType,
        ids: Vec<String>,
        tab_id: usize,
        source_path: impl Into<String>,
    ) -> Self {
        let state = if operation_type.needs_destination() {
            OperationState::AwaitingDestination
        } else {
            OperationState::AwaitingConfirmation
        };
        Self {
            operation_type,
            ids,
            dest_path: None,
            tab_id,
            source_path: source_path.into(),
            state,
        }
    }

    /// 대상 경로 설정 후 확인 단계로
    pub fn set_destination(&mut self, dest: impl Into<String>) {
        self.dest_path = Some(dest.into());
        self.state = OperationState::AwaitingConfirmation;
    }

    pub fn start_processing(&mut self) {
        self.state = OperationState::Processing;
    }

    /// 성공 시 원래 디렉토리 목록에서 항목이 빠지는지 여부
    ///
    /// 삭제는 항상, 이동은 대상이 원래 디렉토리와 다를 때만.
    pub fn removes_from_source(&self) -> bool {
        match self.operation_type {
            OperationType::Delete => true,
            OperationType::Move => self.dest_path.as_deref() != Some(self.source_path.as_str()),
            OperationType::Copy => false,
        }
    }

    /// 확인 대화상자 문구
    pub fn confirmation(&self) -> Confirmation {
        confirmation(self.operation_type, self.ids.len())
    }

    /// 완료 토스트 문구 (예: "Copied 2 items")
    pub fn completion_message(&self) -> String {
        format!(
            "{} {}",
            self.operation_type.past_tense(),
            format_item_count(self.ids.len())
        )
    }
}

/// 확인 대화상자 내용
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    /// 강조 경고 (삭제만)
    pub warning: Option<&'static str>,
}

/// 삭제 경고 문구
pub const TRASH_WARNING: &str = "Items will be moved to Trash and can be restored later.";

/// 작업 유형과 항목 수로 확인 문구 생성
pub fn confirmation(operation_type: OperationType, count: usize) -> Confirmation {
    let suffix = if count > 1 { "s" } else { "" };
    let mut message = format!(
        "Are you sure you want to {} {} item{}?",
        operation_type.verb(),
        count,
        suffix
    );
    if operation_type == OperationType::Delete {
        message.push_str(" This action cannot be undone.");
    }

    Confirmation {
        title: format!("{} Files", operation_type.name()),
        message,
        confirm_label: operation_type.name(),
        warning: (operation_type == OperationType::Delete).then_some(TRASH_WARNING),
    }
}
