use super::*;
use crate::ui::InputPurpose;
use crate::utils::formatter::{format_date_full, format_file_size};

impl App {
    // === 다이얼로그 열기/닫기 ===

    /// 도움말 표시 (?)
    pub fn show_help(&mut self) {
        self.dialog = Some(DialogKind::help());
    }

    pub fn show_message(&mut self, title: &str, message: &str) {
        self.dialog = Some(DialogKind::message(title, message));
    }

    /// 커서 항목 정보 (i)
    pub fn show_item_info(&mut self) {
        let Some(entry) = self.active_panel_state().cursor_entry() else {
            return;
        };
        let mut lines = vec![format!("Kind: {}", entry.kind.label())];
        let size = format_file_size(entry.size);
        if !size.is_empty() {
            lines.push(format!("Size: {}", size));
        }
        lines.push(format!("Modified: {}", format_date_full(entry.modified_at)));
        lines.push(format!("Created: {}", format_date_full(entry.created_at)));
        lines.push(format!("Where: {}", entry.path));
        self.show_message(&entry.name, &lines.join("\n"));
    }

    /// Dark ↔ Light 전환 (Ctrl+L)
    pub fn toggle_theme(&mut self) {
        self.theme_manager.toggle();
        debug!(theme = ?self.theme_manager.current_name(), "theme switched");
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// 다이얼로그 취소 (Esc). 대기 작업이 있으면 함께 버린다.
    pub fn dialog_cancel(&mut self) {
        if self.pending_operation.is_some() {
            self.cancel_operation();
        } else {
            self.close_dialog();
        }
    }

    // === 입력 다이얼로그 ===

    fn edit_dialog_input(&mut self, edit: impl FnOnce(&mut TextInput)) {
        if let Some(DialogKind::Input { input, .. }) = &mut self.dialog {
            edit(input);
        }
    }

    pub fn dialog_input_char(&mut self, c: char) {
        self.edit_dialog_input(|input| input.insert_char(c));
    }

    pub fn dialog_input_backspace(&mut self) {
        self.edit_dialog_input(TextInput::backspace);
    }

    /// 이전 단어 삭제 (Ctrl+W)
    pub fn dialog_input_delete_prev_word(&mut self) {
        self.edit_dialog_input(TextInput::delete_prev_word);
    }

    pub fn dialog_input_delete(&mut self) {
        self.edit_dialog_input(TextInput::delete);
    }

    pub fn dialog_input_left(&mut self) {
        self.edit_dialog_input(TextInput::left);
    }

    pub fn dialog_input_right(&mut self) {
        self.edit_dialog_input(TextInput::right);
    }

    pub fn dialog_input_home(&mut self) {
        self.edit_dialog_input(TextInput::home);
    }

    pub fn dialog_input_end(&mut self) {
        self.edit_dialog_input(TextInput::end);
    }

    /// 버튼 선택 변경 (Tab)
    pub fn dialog_input_toggle_button(&mut self) {
        if let Some(DialogKind::Input {
            selected_button, ..
        }) = &mut self.dialog
        {
            *selected_button = if *selected_button == 0 { 1 } else { 0 };
        }
    }

    pub fn get_dialog_input_value(&self) -> Option<String> {
        if let Some(DialogKind::Input { input, .. }) = &self.dialog {
            Some(input.value().to_string())
        } else {
            None
        }
    }

    pub fn get_dialog_input_purpose(&self) -> Option<InputPurpose> {
        if let Some(DialogKind::Input { purpose, .. }) = &self.dialog {
            Some(*purpose)
        } else {
            None
        }
    }

    /// 입력 다이얼로그 확정 (Enter)
    pub fn dialog_input_submit(&mut self) {
        let (value, selected_button, purpose) = match &self.dialog {
            Some(DialogKind::Input {
                input,
                selected_button,
                purpose,
                ..
            }) => (input.value().to_string(), *selected_button, *purpose),
            _ => return,
        };
        if selected_button == 1 {
            self.dialog_cancel();
            return;
        }

        match purpose {
            InputPurpose::OperationDestination => self.confirm_destination(&value),
            InputPurpose::NewFolderName => self.create_folder(&value),
        }
    }

    // === 확인 다이얼로그 ===

    /// 확인/취소 버튼 전환 (←/→/Tab)
    pub fn dialog_confirm_toggle(&mut self) {
        if let Some(DialogKind::Confirm {
            selected_button, ..
        }) = &mut self.dialog
        {
            *selected_button = if *selected_button == 0 { 1 } else { 0 };
        }
    }

    pub fn get_dialog_selected_button(&self) -> Option<usize> {
        match &self.dialog {
            Some(DialogKind::Confirm {
                selected_button, ..
            })
            | Some(DialogKind::Input {
                selected_button, ..
            }) => Some(*selected_button),
            _ => None,
        }
    }

    /// 확인 다이얼로그 확정 (Enter)
    pub fn dialog_confirm_submit(&mut self) {
        match self.get_dialog_selected_button() {
            Some(0) => self.confirm_operation(),
            _ => self.dialog_cancel(),
        }
    }

    // === 도움말 ===

    pub fn help_scroll_down(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset += 1;
        }
    }

    pub fn help_scroll_up(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
    }
}
