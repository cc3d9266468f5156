/// 뒤로/앞으로 이동 기록
///
/// 새 경로로 이동하면 현재 위치 뒤의 기록을 잘라내고 추가한다.
/// 뒤로/앞으로는 인덱스만 이동한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
    index: usize,
}

impl NavigationHistory {
    /// 초기 경로 하나로 생성
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// 새 경로 기록
    ///
    /// 현재 위치와 같은 경로면 기록하지 않는다 (새로고침 등).
    pub fn record(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.current() == path {
            return;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(path);
        self.index = self.entries.len() - 1;
    }

    /// 뒤로 갈 경로 (인덱스는 그대로)
    pub fn peek_back(&self) -> Option<&str> {
        self.can_go_back()
            .then(|| self.entries[self.index - 1].as_str())
    }

    /// 앞으로 갈 경로 (인덱스는 그대로)
    pub fn peek_forward(&self) -> Option<&str> {
        self.can_go_forward()
            .then(|| self.entries[self.index + 1].as_str())
    }

    /// 뒤로 이동. 이동한 경로 반환
    pub fn back(&mut self) -> Option<String> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        Some(self.entries[self.index].clone())
    }

    /// 앞으로 이동. 이동한 경로 반환
    pub fn forward(&mut self) -> Option<String> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        Some(self.entries[self.index].clone())
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// 현재 위치 경로
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }
}
