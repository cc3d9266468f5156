use crate::app::TextInput;
use crate::models::operation::Confirmation;

/// 입력 다이얼로그 용도
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// 복사/이동 대상 경로
    OperationDestination,
    /// 새 폴더 이름
    NewFolderName,
}

/// 다이얼로그 종류
#[derive(Debug, Clone, PartialEq)]
pub enum DialogKind {
    /// 한 줄 입력
    Input {
        title: String,
        prompt: String,
        input: TextInput,
        selected_button: usize, // 0: OK, 1: Cancel
        purpose: InputPurpose,
    },
    /// 작업 확인
    Confirm {
        confirmation: Confirmation,
        selected_button: usize, // 0: 확인, 1: Cancel
    },
    /// 알림
    Message { title: String, message: String },
    /// 단축키 도움말
    Help { scroll_offset: usize },
}

impl DialogKind {
    /// 입력 다이얼로그 생성
    pub fn input(
        title: impl Into<String>,
        prompt: impl Into<String>,
        initial: impl Into<String>,
        purpose: InputPurpose,
    ) -> Self {
        DialogKind::Input {
            title: title.into(),
            prompt: prompt.into(),
            input: TextInput::new(initial),
            selected_button: 0,
            purpose,
        }
    }

    /// 확인 다이얼로그 생성 (기본 선택은 확인 버튼)
    pub fn confirm(confirmation: Confirmation) -> Self {
        DialogKind::Confirm {
            confirmation,
            selected_button: 0,
        }
    }

    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Message {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn help() -> Self {
        DialogKind::Help { scroll_offset: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::operation::{confirmation, OperationType};

    #[test]
    fn test_dialog_input_creation() {
        let dialog = DialogKind::input(
            "Copy Files",
            "Destination:",
            "/Users/username",
            InputPurpose::OperationDestination,
        );
        match dialog {
            DialogKind::Input {
                title,
                prompt,
                input,
                selected_button,
                purpose,
            } => {
                assert_eq!(title, "Copy Files");
                assert_eq!(prompt, "Destination:");
                assert_eq!(input.value(), "/Users/username");
                assert_eq!(input.cursor(), 15);
                assert_eq!(selected_button, 0);
                assert_eq!(purpose, InputPurpose::OperationDestination);
            }
            _ => panic!("Expected Input dialog"),
        }
    }

    #[test]
    fn test_dialog_confirm_creation() {
        let dialog = DialogKind::confirm(confirmation(OperationType::Delete, 2));
        match dialog {
            DialogKind::Confirm {
                confirmation,
                selected_button,
            } => {
                assert_eq!(confirmation.title, "Delete Files");
                assert!(confirmation.warning.is_some());
                assert_eq!(selected_button, 0);
            }
            _ => panic!("Expected Confirm dialog"),
        }
    }
}
