/// 한 줄 텍스트 입력 버퍼 (검색창, 입력 다이얼로그 공용)
///
/// 커서는 바이트 오프셋이며 항상 문자 경계에 있다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// 초기값으로 생성 (커서는 끝)
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 커서 앞 문자열 (커서 표시 위치 계산용)
    pub fn before_cursor(&self) -> &str {
        &self.value[..self.cursor]
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// 값 교체 (커서는 끝)
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_char_start(self.cursor);
        self.value.remove(prev);
        self.cursor = prev;
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.prev_char_start(self.cursor);
    }

    pub fn right(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        self.cursor = self.value[self.cursor..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor + i)
            .unwrap_or(self.value.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// 커서 앞 단어 삭제 (Ctrl+W)
    pub fn delete_prev_word(&mut self) {
        let original = self.cursor;
        let mut pos = original;

        // 구분자 건너뛰기 → 단어 시작까지
        while pos > 0 && self.char_before(pos).is_some_and(is_word_delimiter) {
            pos = self.prev_char_start(pos);
        }
        while pos > 0 && !self.char_before(pos).is_some_and(is_word_delimiter) {
            pos = self.prev_char_start(pos);
        }

        self.value.replace_range(pos..original, "");
        self.cursor = pos;
    }

    fn char_before(&self, pos: usize) -> Option<char> {
        self.value[..pos].chars().next_back()
    }

    fn prev_char_start(&self, pos: usize) -> usize {
        self.value[..pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

fn is_word_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '/' | '.' | '-' | '_' | ',')
}

#[cfg(test)]
mod tests {
    use super::TextInput;

    #[test]
    fn test_insert_backspace_delete_utf8_cursor_boundary() {
        let mut input = TextInput::new("\u{AC00}\u{B098}");
        input.left();
        assert_eq!(input.cursor(), "\u{AC00}".len());

        input.insert_char('\u{B2E4}');
        assert_eq!(input.value(), "\u{AC00}\u{B2E4}\u{B098}");
        assert_eq!(input.cursor(), "\u{AC00}\u{B2E4}".len());

        input.backspace();
        assert_eq!(input.value(), "\u{AC00}\u{B098}");

        input.home();
        input.delete();
        assert_eq!(input.value(), "\u{B098}");
        assert_eq!(input.cursor(), 0);
        input.backspace();
        assert_eq!(input.value(), "\u{B098}");
    }

    #[test]
    fn test_left_right_home_end() {
        let mut input = TextInput::new("a\u{AC00}b");
        input.left();
        assert_eq!(input.before_cursor(), "a\u{AC00}");
        input.left();
        assert_eq!(input.before_cursor(), "a");
        input.right();
        assert_eq!(input.before_cursor(), "a\u{AC00}");
        input.home();
        input.left();
        assert_eq!(input.cursor(), 0);
        input.end();
        input.right();
        assert_eq!(input.cursor(), input.value().len());
    }

    #[test]
    fn test_delete_prev_word() {
        let mut input = TextInput::new("/Users/username/Documents");
        input.delete_prev_word();
        assert_eq!(input.value(), "/Users/username/");
        input.delete_prev_word();
        assert_eq!(input.value(), "/Users/");
    }

    #[test]
    fn test_set_and_clear() {
        let mut input = TextInput::default();
        assert!(input.is_empty());
        input.set("report");
        assert_eq!(input.cursor(), 6);
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
