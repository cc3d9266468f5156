use super::super::*;
use crate::core::listing::SortBy;
use crate::models::operation::OperationType;
use crate::models::panel_state::ViewMode;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::Copy => app.start_operation(OperationType::Copy),
        Action::Move => app.start_operation(OperationType::Move),
        Action::Delete => app.start_operation(OperationType::Delete),
        Action::NewFolder => app.start_new_folder(),
        Action::ToggleSelection => app.toggle_selection(),
        Action::SelectAll => app.active_panel_state_mut().select_all(),
        Action::InvertSelection => app.active_panel_state_mut().invert_selection(),
        Action::DeselectAll => app.active_panel_state_mut().clear_selection(),
        Action::ViewGrid => app.set_view_mode(ViewMode::Grid),
        Action::ViewList => app.set_view_mode(ViewMode::List),
        Action::ViewDetails => app.set_view_mode(ViewMode::Details),
        Action::CycleView => app.cycle_view_mode(),
        Action::SortByName => app.sort_active_panel(SortBy::Name),
        Action::SortBySize => app.sort_active_panel(SortBy::Size),
        Action::SortByDate => app.sort_active_panel(SortBy::Modified),
        Action::SortByKind => app.sort_active_panel(SortBy::Kind),
        Action::StartFilter => app.start_filter(),
        Action::ClearFilter => app.clear_filter(),
        Action::HistoryBack => app.history_back(),
        Action::HistoryForward => app.history_forward(),
        _ => unreachable!("non-operation action: {:?}", action),
    }
}
