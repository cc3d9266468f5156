use crate::utils::path_display::join_path;

/// 사이드바 섹션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarSection {
    QuickAccess,
    Favorites,
    Devices,
}

impl SidebarSection {
    pub fn title(&self) -> &'static str {
        match self {
            SidebarSection::QuickAccess => "Quick Access",
            SidebarSection::Favorites => "Favorites",
            SidebarSection::Devices => "Devices",
        }
    }

    pub const ALL: [SidebarSection; 3] = [
        SidebarSection::QuickAccess,
        SidebarSection::Favorites,
        SidebarSection::Devices,
    ];
}

/// 사이드바 바로가기 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub name: String,
    pub path: String,
    pub section: SidebarSection,
    pub icon: &'static str,
}

impl SidebarItem {
    fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        section: SidebarSection,
        icon: &'static str,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            section,
            icon,
        }
    }
}

/// 사이드바 (항목 목록 + 키보드 커서)
#[derive(Debug, Clone)]
pub struct Sidebar {
    items: Vec<SidebarItem>,
    /// 키보드 포커스 시 강조할 항목 인덱스
    pub cursor: usize,
}

impl Sidebar {
    /// 홈 경로 기준 기본 항목 + 추가 즐겨찾기로 생성
    pub fn new<I>(home: &str, extra_favorites: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        use SidebarSection::*;

        let mut items = vec![
            SidebarItem::new("Home", home, QuickAccess, "🏠"),
            SidebarItem::new("Desktop", join_path(home, "Desktop"), QuickAccess, "📂"),
            SidebarItem::new("Documents", join_path(home, "Documents"), QuickAccess, "📂"),
            SidebarItem::new("Downloads", join_path(home, "Downloads"), QuickAccess, "📂"),
            SidebarItem::new(
                "iCloud Drive",
                join_path(home, "Library/Mobile Documents/com~apple~CloudDocs"),
                QuickAccess,
                "☁",
            ),
            SidebarItem::new("Applications", "/Applications", QuickAccess, "📂"),
            SidebarItem::new("Projects", join_path(home, "Projects"), Favorites, "⭐"),
            SidebarItem::new("Photos", join_path(home, "Pictures"), Favorites, "⭐"),
        ];
        items.extend(
            extra_favorites
                .into_iter()
                .map(|(name, path)| SidebarItem::new(name, path, Favorites, "⭐")),
        );
        items.push(SidebarItem::new("Macintosh HD", "/", Devices, "💽"));
        items.push(SidebarItem::new(
            "External Drive",
            "/Volumes/External",
            Devices,
            "💽",
        ));

        Self { items, cursor: 0 }
    }

    pub fn items(&self) -> &[SidebarItem] {
        &self.items
    }

    /// 섹션별 항목 (전체 목록 인덱스 포함)
    pub fn section_items(&self, section: SidebarSection) -> Vec<(usize, &SidebarItem)> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.section == section)
            .collect()
    }

    /// 현재 경로와 일치하는 항목 인덱스 (강조 표시용)
    pub fn active_index(&self, current_path: &str) -> Option<usize> {
        self.items.iter().position(|item| item.path == current_path)
    }

    pub fn cursor_item(&self) -> Option<&SidebarItem> {
        self.items.get(self.cursor)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
        }
    }
}
