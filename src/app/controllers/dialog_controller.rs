use super::super::*;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::ShowHelp => app.show_help(),
        Action::Refresh => app.refresh_current(),
        Action::ToggleTheme => app.toggle_theme(),
        Action::OpenContextMenu => app.open_context_menu(),
        Action::ShowInfo => app.show_item_info(),
        _ => unreachable!("non-dialog action: {:?}", action),
    }
}
