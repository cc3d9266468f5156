//! 액션 시스템: 키 바인딩, 컨텍스트 메뉴, 도움말 내용의 단일 레지스트리
//!
//! 키 입력은 `find_action`으로, 컨텍스트 메뉴 항목은 `CONTEXT_MENU`로 해석하며
//! 도움말 다이얼로그도 같은 테이블에서 생성합니다.

use crate::models::operation::OperationType;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 키보드 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    CursorUp,
    CursorDown,
    ExtendUp,
    ExtendDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,
    EnterSelected,
    GoToParent,
    HistoryBack,
    HistoryForward,
    Refresh,
    FocusSidebar,
    TabNew,
    TabClose,
    TabPrev,
    TabNext,
    // Selection
    ToggleSelection,
    SelectAll,
    InvertSelection,
    DeselectAll,
    // View
    ViewGrid,
    ViewList,
    ViewDetails,
    CycleView,
    SortByName,
    SortBySize,
    SortByDate,
    SortByKind,
    // Filter
    StartFilter,
    ClearFilter,
    // File Operations
    Copy,
    Move,
    Delete,
    NewFolder,
    OpenContextMenu,
    ShowInfo,
    // System
    ToggleTheme,
    ShowHelp,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Selection,
    View,
    Filter,
    FileOperation,
    System,
}

impl ActionCategory {
    pub fn title(&self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::Selection => "Selection",
            ActionCategory::View => "View & Sort",
            ActionCategory::Filter => "Search",
            ActionCategory::FileOperation => "File Operations",
            ActionCategory::System => "System",
        }
    }
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

macro_rules! def {
    ($action:ident, $id:literal, $label:literal, $cat:ident, $key:expr) => {
        ActionDef {
            action: Action::$action,
            id: $id,
            label: $label,
            category: ActionCategory::$cat,
            shortcut_display: $key,
        }
    };
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    def!(MoveUp, "move_up", "Move up", Navigation, Some("↑ / k")),
    def!(MoveDown, "move_down", "Move down", Navigation, Some("↓ / j")),
    def!(CursorUp, "cursor_up", "Move cursor only", Navigation, Some("Ctrl+↑")),
    def!(CursorDown, "cursor_down", "Move cursor only", Navigation, Some("Ctrl+↓")),
    def!(ExtendUp, "extend_up", "Extend selection up", Navigation, Some("Shift+↑ / K")),
    def!(ExtendDown, "extend_down", "Extend selection down", Navigation, Some("Shift+↓ / J")),
    def!(GoToTop, "go_top", "Go to first item", Navigation, Some("Home / g")),
    def!(GoToBottom, "go_bottom", "Go to last item", Navigation, Some("End / G")),
    def!(PageUp, "page_up", "Page up", Navigation, Some("PgUp")),
    def!(PageDown, "page_down", "Page down", Navigation, Some("PgDn")),
    def!(EnterSelected, "open", "Open folder", Navigation, Some("Enter")),
    def!(GoToParent, "go_parent", "Go up", Navigation, Some("Backspace / h")),
    def!(HistoryBack, "history_back", "Back", Navigation, Some("Alt+← / H")),
    def!(HistoryForward, "history_forward", "Forward", Navigation, Some("Alt+→ / L")),
    def!(Refresh, "refresh", "Refresh", Navigation, Some("Ctrl+R")),
    def!(FocusSidebar, "focus_sidebar", "Toggle sidebar focus", Navigation, Some("Tab")),
    def!(TabNew, "tab_new", "New tab", Navigation, Some("Ctrl+T")),
    def!(TabClose, "tab_close", "Close tab", Navigation, Some("Ctrl+W")),
    def!(TabPrev, "tab_prev", "Previous tab", Navigation, Some("[")),
    def!(TabNext, "tab_next", "Next tab", Navigation, Some("]")),
    // Selection
    def!(ToggleSelection, "toggle_selection", "Toggle selection", Selection, Some("Space")),
    def!(SelectAll, "select_all", "Select all", Selection, Some("Ctrl+A")),
    def!(InvertSelection, "invert_selection", "Invert selection", Selection, Some("*")),
    def!(DeselectAll, "deselect_all", "Clear selection", Selection, Some("Esc")),
    // View
    def!(ViewGrid, "view_grid", "Grid view", View, Some("1")),
    def!(ViewList, "view_list", "List view", View, Some("2")),
    def!(ViewDetails, "view_details", "Details view", View, Some("3")),
    def!(CycleView, "view_cycle", "Cycle view mode", View, Some("v")),
    def!(SortByName, "sort_name", "Sort by name", View, Some("N")),
    def!(SortBySize, "sort_size", "Sort by size", View, Some("S")),
    def!(SortByDate, "sort_date", "Sort by date", View, Some("D")),
    def!(SortByKind, "sort_kind", "Sort by kind", View, Some("T")),
    // Filter
    def!(StartFilter, "search", "Search", Filter, Some("/")),
    def!(ClearFilter, "clear_search", "Clear search", Filter, None),
    // File Operations
    def!(Copy, "copy", "Copy", FileOperation, Some("F5")),
    def!(Move, "move", "Move", FileOperation, Some("F6")),
    def!(Delete, "delete", "Move to Trash", FileOperation, Some("Del")),
    def!(NewFolder, "new_folder", "New folder", FileOperation, Some("F7")),
    def!(OpenContextMenu, "context_menu", "Context menu", FileOperation, Some("m")),
    def!(ShowInfo, "info", "Item info", FileOperation, Some("i")),
    // System
    def!(ToggleTheme, "toggle_theme", "Toggle theme", System, Some("Ctrl+L")),
    def!(ShowHelp, "help", "Help", System, Some("?")),
    def!(Quit, "quit", "Quit", System, Some("q")),
];

fn bind(code: KeyCode, modifiers: Option<KeyModifiers>, action: Action) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        action,
    }
}

fn build_key_bindings() -> Vec<KeyBinding> {
    use Action::*;
    use KeyCode::*;
    let none = Some(KeyModifiers::NONE);
    let shift = Some(KeyModifiers::SHIFT);
    let ctrl = Some(KeyModifiers::CONTROL);
    let alt = Some(KeyModifiers::ALT);

    vec![
        // 종료
        bind(Char('q'), none, Quit),
        bind(Char('c'), ctrl, Quit),
        // 이동: 화살표 + Vim
        bind(Up, none, MoveUp),
        bind(Char('k'), none, MoveUp),
        bind(Down, none, MoveDown),
        bind(Char('j'), none, MoveDown),
        // 선택을 유지한 채 커서만 이동
        bind(Up, ctrl, CursorUp),
        bind(Down, ctrl, CursorDown),
        // 범위 선택 (대문자는 터미널에 따라 SHIFT가 붙거나 안 붙음)
        bind(Up, shift, ExtendUp),
        bind(Char('K'), None, ExtendUp),
        bind(Down, shift, ExtendDown),
        bind(Char('J'), None, ExtendDown),
        bind(Home, None, GoToTop),
        bind(Char('g'), none, GoToTop),
        bind(End, None, GoToBottom),
        bind(Char('G'), None, GoToBottom),
        bind(KeyCode::PageUp, None, Action::PageUp),
        bind(KeyCode::PageDown, None, Action::PageDown),
        bind(Enter, None, EnterSelected),
        bind(Backspace, None, GoToParent),
        bind(Char('h'), none, GoToParent),
        // 기록
        bind(Left, alt, HistoryBack),
        bind(Right, alt, HistoryForward),
        bind(Char('H'), None, HistoryBack),
        bind(Char('L'), None, HistoryForward),
        bind(Char('r'), ctrl, Refresh),
        bind(KeyCode::Tab, None, FocusSidebar),
        // 탭
        bind(Char('t'), ctrl, TabNew),
        bind(Char('w'), ctrl, TabClose),
        bind(Char('['), None, TabPrev),
        bind(Char(']'), None, TabNext),
        // 선택
        bind(Char(' '), None, ToggleSelection),
        bind(Char('a'), ctrl, SelectAll),
        bind(Char('*'), None, InvertSelection),
        bind(Esc, None, DeselectAll),
        // 보기/정렬
        bind(Char('1'), none, ViewGrid),
        bind(Char('2'), none, ViewList),
        bind(Char('3'), none, ViewDetails),
        bind(Char('v'), none, CycleView),
        bind(Char('N'), None, SortByName),
        bind(Char('S'), None, SortBySize),
        bind(Char('D'), None, SortByDate),
        bind(Char('T'), None, SortByKind),
        // 검색
        bind(Char('/'), None, StartFilter),
        // 파일 작업
        bind(F(5), None, Copy),
        bind(F(6), None, Move),
        bind(KeyCode::Delete, None, Action::Delete),
        bind(F(7), None, NewFolder),
        bind(Char('m'), none, OpenContextMenu),
        bind(Char('i'), none, ShowInfo),
        // 시스템
        bind(Char('l'), ctrl, ToggleTheme),
        bind(Char('?'), None, ShowHelp),
    ]
}

/// 키 바인딩 레지스트리
static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 반환
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력에 해당하는 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            binding.code == code
                && match binding.modifiers {
                    None => true, // any modifier
                    Some(required) => modifiers == required,
                }
        })
        .map(|binding| binding.action)
}

/// action_id 문자열로 Action 조회
impl Action {
    pub fn from_id(id: &str) -> Option<Action> {
        ACTION_DEFS.iter().find(|d| d.id == id).map(|d| d.action)
    }
}

/// 도움말 다이얼로그용 엔트리 생성
///
/// 반환: (카테고리명, Vec<(단축키, 설명)>) 목록
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    let categories = [
        ActionCategory::Navigation,
        ActionCategory::Selection,
        ActionCategory::View,
        ActionCategory::Filter,
        ActionCategory::FileOperation,
        ActionCategory::System,
    ];

    categories
        .iter()
        .map(|cat| {
            let items: Vec<(&'static str, &'static str)> = ACTION_DEFS
                .iter()
                .filter(|d| d.category == *cat)
                .filter_map(|d| d.shortcut_display.map(|key| (key, d.label)))
                .collect();
            (cat.title(), items)
        })
        .filter(|(_, items)| !items.is_empty())
        .collect()
}

/// 단축키 표시용 조회
pub fn get_shortcut_display(id: &str) -> Option<&'static str> {
    ACTION_DEFS
        .iter()
        .find(|d| d.id == id)
        .and_then(|d| d.shortcut_display)
}

// === 컨텍스트 메뉴 ===

/// 컨텍스트 메뉴 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    QuickLook,
    Rename,
    Copy,
    Move,
    Favorite,
    Tag,
    Share,
    NewFolder,
    NewDocument,
    Delete,
    Info,
}

/// 컨텍스트 메뉴 항목 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextHandler {
    /// 확인 대화상자를 거쳐 데이터 소스 작업 실행
    FileOperation(OperationType),
    /// 기록만 하고 상태는 바꾸지 않음
    Acknowledge,
}

/// 컨텍스트 메뉴 항목 정의
pub struct ContextActionDef {
    pub action: ContextAction,
    pub id: &'static str,
    pub label: &'static str,
    pub handler: ContextHandler,
    /// 위험 항목 (강조 색상)
    pub danger: bool,
    /// 앞에 구분선 표시
    pub separator_before: bool,
}

macro_rules! ctx {
    ($action:ident, $id:literal, $label:literal, $handler:expr, $danger:literal, $sep:literal) => {
        ContextActionDef {
            action: ContextAction::$action,
            id: $id,
            label: $label,
            handler: $handler,
            danger: $danger,
            separator_before: $sep,
        }
    };
}

/// 컨텍스트 메뉴 (표시 순서)
pub static CONTEXT_MENU: &[ContextActionDef] = &[
    ctx!(QuickLook, "quicklook", "Quick Look", ContextHandler::Acknowledge, false, false),
    ctx!(Rename, "rename", "Rename", ContextHandler::Acknowledge, false, false),
    ctx!(
        Copy,
        "copy",
        "Copy",
        ContextHandler::FileOperation(OperationType::Copy),
        false,
        true
    ),
    ctx!(
        Move,
        "cut",
        "Cut",
        ContextHandler::FileOperation(OperationType::Move),
        false,
        false
    ),
    ctx!(Favorite, "favorite", "Add to Favorites", ContextHandler::Acknowledge, false, true),
    ctx!(Tag, "tag", "Tag...", ContextHandler::Acknowledge, false, false),
    ctx!(Share, "share", "Share...", ContextHandler::Acknowledge, false, false),
    ctx!(NewFolder, "newfolder", "New Folder", ContextHandler::Acknowledge, false, true),
    ctx!(NewDocument, "newfile", "New Document", ContextHandler::Acknowledge, false, false),
    ctx!(
        Delete,
        "delete",
        "Move to Trash",
        ContextHandler::FileOperation(OperationType::Delete),
        true,
        true
    ),
    ctx!(Info, "info", "Get Info", ContextHandler::Acknowledge, false, false),
];

impl ContextAction {
    /// 메뉴 id로 조회 ("move"는 "cut"의 별칭)
    pub fn from_id(id: &str) -> Option<ContextAction> {
        if id == "move" {
            return Some(ContextAction::Move);
        }
        CONTEXT_MENU.iter().find(|d| d.id == id).map(|d| d.action)
    }

    /// 메뉴 정의
    pub fn def(&self) -> Option<&'static ContextActionDef> {
        CONTEXT_MENU.iter().find(|d| d.action == *self)
    }

    /// 처리 방식
    pub fn handler(&self) -> ContextHandler {
        self.def()
            .map(|d| d.handler)
            .unwrap_or(ContextHandler::Acknowledge)
    }
}
