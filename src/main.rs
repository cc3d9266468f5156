use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mockdir::app::App;
use mockdir::config::Config;
use mockdir::core::actions::find_action;
use mockdir::core::listing::ListingStats;
use mockdir::logging;
use mockdir::ui::{
    self, ContextMenu, Dialog, DialogKind, FileView, FileViewStatus, Focus, LayoutMode, NavBar,
    SidebarPanel, StatusBar, TabBar, Toolbar, WarningScreen,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;
use tracing::{error, info};

/// 이벤트 폴링 간격 (비동기 결과 반영 주기)
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    logging::init(config.log_file.as_deref())?;
    info!(home = %config.home_path, "mockdir starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(config);

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "terminal loop failed");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        // 비동기 작업 결과 반영
        app.process_events();
        app.clear_expired_toast();

        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning =
                        WarningScreen::new(width, height).theme(app.theme_manager.current());
                    f.render_widget(warning, size);
                }
                LayoutMode::Full | LayoutMode::Compact => {
                    render_main_ui(f, app);
                }
            }
        })?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Windows에서는 Release도 들어온다
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.modifiers, key.code);
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 현재 모드에 맞는 키 처리로 분기
fn handle_key(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if app.dialog.is_some() {
        handle_dialog_keys(app, modifiers, code);
    } else if app.is_context_menu_open() {
        handle_context_menu_keys(app, modifiers, code);
    } else if app.layout.is_too_small() {
        // 경고 화면에서는 종료만 받는다
        if matches!(code, KeyCode::Char('q')) {
            app.quit();
        }
    } else {
        match app.focus() {
            Focus::Search => handle_search_keys(app, modifiers, code),
            Focus::Sidebar => handle_sidebar_keys(app, modifiers, code),
            Focus::Files => handle_normal_keys(app, modifiers, code),
        }
    }
}

/// 일반 모드 키 처리 (액션 레지스트리 기반)
fn handle_normal_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    // Alt+1..9: 탭 번호로 전환
    if modifiers == KeyModifiers::ALT {
        if let KeyCode::Char(c @ '1'..='9') = code {
            if let Some(number) = c.to_digit(10) {
                app.switch_tab(number as usize);
            }
            return;
        }
    }

    if let Some(action) = find_action(modifiers, code) {
        app.execute_action(action);
    }
}

/// 검색창 키 처리 (입력할 때마다 필터 갱신)
fn handle_search_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Enter) | (_, KeyCode::Down) => app.finish_search(),
        (_, KeyCode::Esc) => app.clear_filter(),
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.search_input_delete_prev_word(),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.quit(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input_char(c);
        }
        (_, KeyCode::Backspace) => app.search_input_backspace(),
        (_, KeyCode::Delete) => app.search_input_delete(),
        (_, KeyCode::Left) => app.search_input_left(),
        (_, KeyCode::Right) => app.search_input_right(),
        (_, KeyCode::Home) => app.search_input_home(),
        (_, KeyCode::End) => app.search_input_end(),
        _ => {}
    }
}

/// 사이드바 키 처리
fn handle_sidebar_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => app.sidebar_move_up(),
        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => app.sidebar_move_down(),
        (_, KeyCode::Enter) | (_, KeyCode::Right) => app.sidebar_open_selected(),
        (_, KeyCode::Tab) | (_, KeyCode::Esc) => app.toggle_sidebar_focus(),
        (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.quit()
        }
        _ => {}
    }
}

/// 컨텍스트 메뉴 키 처리
fn handle_context_menu_keys(app: &mut App, _modifiers: KeyModifiers, code: KeyCode) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => app.context_menu_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.context_menu_next(),
        KeyCode::Enter => app.context_menu_activate(),
        KeyCode::Esc | KeyCode::Char('m') => app.close_context_menu(),
        _ => {}
    }
}

/// 다이얼로그 모드 키 처리
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    // 다이얼로그 종류에 따라 분기
    match app.dialog {
        Some(DialogKind::Input { .. }) => handle_input_dialog_keys(app, modifiers, code),
        Some(DialogKind::Confirm { .. }) => handle_confirm_dialog_keys(app, modifiers, code),
        Some(DialogKind::Message { .. }) => handle_message_dialog_keys(app, modifiers, code),
        Some(DialogKind::Help { .. }) => handle_help_dialog_keys(app, modifiers, code),
        None => {}
    }
}

/// 입력 다이얼로그 키 처리
fn handle_input_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Enter) => app.dialog_input_submit(),
        (_, KeyCode::Esc) => app.dialog_cancel(),
        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
            app.dialog_input_toggle_button();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.dialog_input_delete_prev_word(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.dialog_input_char(c);
        }
        (_, KeyCode::Backspace) => app.dialog_input_backspace(),
        (_, KeyCode::Delete) => app.dialog_input_delete(),
        (_, KeyCode::Left) => app.dialog_input_left(),
        (_, KeyCode::Right) => app.dialog_input_right(),
        (_, KeyCode::Home) => app.dialog_input_home(),
        (_, KeyCode::End) => app.dialog_input_end(),
        _ => {}
    }
}

/// 확인 다이얼로그 키 처리
fn handle_confirm_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Left)
        | (_, KeyCode::Right)
        | (KeyModifiers::NONE, KeyCode::Tab)
        | (KeyModifiers::SHIFT, KeyCode::BackTab) => app.dialog_confirm_toggle(),
        (_, KeyCode::Enter) => app.dialog_confirm_submit(),
        (_, KeyCode::Char('y')) => {
            if app.get_dialog_selected_button() != Some(0) {
                app.dialog_confirm_toggle();
            }
            app.dialog_confirm_submit();
        }
        (_, KeyCode::Esc) | (_, KeyCode::Char('n')) => app.dialog_cancel(),
        _ => {}
    }
}

/// 메시지 다이얼로그 키 처리
fn handle_message_dialog_keys(app: &mut App, _modifiers: KeyModifiers, code: KeyCode) {
    if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.close_dialog();
    }
}

/// 도움말 다이얼로그 키 처리
fn handle_help_dialog_keys(app: &mut App, _modifiers: KeyModifiers, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => app.close_dialog(),
        KeyCode::Char('j') | KeyCode::Down => app.help_scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.help_scroll_up(),
        _ => {}
    }
}

/// 파일 목록 + 툴바 + 상태바 렌더링 (한 번 계산한 보이는 목록을 공유)
fn render_listing(f: &mut ratatui::Frame<'_>, app: &App, theme: &ui::Theme) {
    let areas = app.layout.areas();
    let panel = app.active_panel_state();
    let visible = panel.visible_entries();

    let toolbar = Toolbar::new()
        .item_count(visible.len())
        .selected_count(panel.selection.len())
        .view_mode(panel.view_mode)
        .sort(panel.sort_by, panel.sort_order)
        .theme(theme);
    f.render_widget(toolbar, areas.toolbar);

    let status = match (&panel.error, panel.loading) {
        (Some(message), _) => FileViewStatus::Error(message),
        (None, true) => FileViewStatus::Loading,
        (None, false) => FileViewStatus::Ready,
    };
    let file_view = FileView::new(&visible)
        .selection(&panel.selection)
        .cursor(panel.cursor)
        .view_mode(panel.view_mode)
        .sort(panel.sort_by, panel.sort_order)
        .status(status)
        .filtering(!panel.filter.is_empty())
        .focused(app.focus() == Focus::Files)
        .theme(theme);
    f.render_widget(file_view, areas.file_view);

    let stats = ListingStats::from_entries(&visible);
    let selected = ListingStats::from_entries(visible.iter().filter(|e| panel.is_selected(&e.id)));
    let status_bar = StatusBar::new()
        .stats(stats)
        .selected(selected)
        .toast(app.toast_display())
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);
}

/// 컨텍스트 메뉴 위치: 커서 행 옆
fn context_menu_anchor(app: &App, file_view: Rect) -> (u16, u16) {
    let cursor = app.active_panel_state().cursor as u16;
    let row = cursor.min(app.layout.page_size().saturating_sub(1) as u16);
    (file_view.x + 4, file_view.y + 3 + row)
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();
    let panel = app.active_panel_state();

    let titles = app.tabs.titles();
    let tab_bar = TabBar::new(&titles)
        .active(app.tabs.active_tab)
        .theme(theme);
    f.render_widget(tab_bar, areas.tab_bar);

    let nav_bar = NavBar::new(&panel.current_path, &app.search_input)
        .history(panel.history.can_go_back(), panel.history.can_go_forward())
        .search_focused(app.focus() == Focus::Search)
        .loading(panel.loading)
        .theme(theme);
    f.render_widget(nav_bar, areas.nav_bar);

    if app.layout.shows_sidebar() {
        let sidebar = SidebarPanel::new(&app.sidebar)
            .active_index(app.sidebar.active_index(&panel.current_path))
            .focused(app.focus() == Focus::Sidebar)
            .theme(theme);
        f.render_widget(sidebar, areas.sidebar);
    }

    render_listing(f, app, theme);

    if let Some(menu) = &app.context_menu {
        let (x, y) = context_menu_anchor(app, areas.file_view);
        let context_menu = ContextMenu::new(menu).anchor(x, y).theme(theme);
        f.render_widget(context_menu, f.area());
    }

    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }
}
