//! 선택 엔진: 클릭 수정키에 따른 선택 전이
//!
//! 선택은 id의 순서 있는 목록이다. 마지막으로 추가된 id가 범위 선택의 기준점이 된다.
//! 모든 연산 결과는 주어진 목록(`ordered`)에 존재하는 id만 포함한다.

use crate::models::file_entry::Entry;

/// 클릭 수정키
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickModifiers {
    /// Ctrl/Cmd: 토글 선택
    pub primary: bool,
    /// Shift: 범위 선택
    pub range: bool,
}

impl ClickModifiers {
    pub const NONE: Self = Self {
        primary: false,
        range: false,
    };
    pub const PRIMARY: Self = Self {
        primary: true,
        range: false,
    };
    pub const RANGE: Self = Self {
        primary: false,
        range: true,
    };
}

/// 클릭 후 새 선택 계산
///
/// - 범위 수정키 + 기존 선택 있음: 기준점(마지막 선택 id)과 클릭 항목 사이를 목록 순서로 선택
/// - 주 수정키: 클릭 항목 토글 (추가 시 맨 뒤)
/// - 수정키 없음: 클릭 항목만 선택
///
/// 기준점이 목록에 없으면 (필터로 숨겨진 경우) 수정키 없는 클릭으로 처리한다.
/// 클릭한 id가 목록에 없으면 선택을 목록 기준으로 정리만 하고 그대로 둔다.
pub fn update_selection(
    current: &[String],
    ordered: &[Entry],
    clicked_id: &str,
    modifiers: ClickModifiers,
) -> Vec<String> {
    let Some(clicked_index) = index_of(ordered, clicked_id) else {
        return retain_visible(current, ordered);
    };

    if modifiers.range {
        if let Some(anchor) = current.last() {
            return match index_of(ordered, anchor) {
                Some(anchor_index) => {
                    let start = anchor_index.min(clicked_index);
                    let end = anchor_index.max(clicked_index);
                    ordered[start..=end].iter().map(|e| e.id.clone()).collect()
                }
                None => vec![clicked_id.to_string()],
            };
        }
    }

    if modifiers.primary {
        let mut next = retain_visible(current, ordered);
        if let Some(pos) = next.iter().position(|id| id == clicked_id) {
            next.remove(pos);
        } else {
            next.push(clicked_id.to_string());
        }
        return next;
    }

    vec![clicked_id.to_string()]
}

/// 목록의 모든 항목 선택 (목록 순서)
pub fn select_all(ordered: &[Entry]) -> Vec<String> {
    ordered.iter().map(|e| e.id.clone()).collect()
}

/// 선택 반전: 선택되지 않은 항목만 목록 순서로 선택
pub fn invert_selection(current: &[String], ordered: &[Entry]) -> Vec<String> {
    ordered
        .iter()
        .filter(|e| !current.contains(&e.id))
        .map(|e| e.id.clone())
        .collect()
}

/// 목록에 없는 id 제거 (선택 순서 유지)
pub fn retain_visible(current: &[String], ordered: &[Entry]) -> Vec<String> {
    current
        .iter()
        .filter(|id| index_of(ordered, id.as_str()).is_some())
        .cloned()
        .collect()
}

fn index_of(ordered: &[Entry], id: &str) -> Option<usize> {
    ordered.iter().position(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn listing(names: &[&str]) -> Vec<Entry> {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        names
            .iter()
            .map(|n| Entry::file(*n, format!("{}.txt", n), 1, t, t, "/"))
            .collect()
    }

    fn sel(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_range_select_between_anchor_and_click() {
        let ordered = listing(&["A", "B", "C", "D", "E"]);
        let result = update_selection(&sel(&["B"]), &ordered, "D", ClickModifiers::RANGE);
        assert_eq!(result, sel(&["B", "C", "D"]));
    }

    #[test]
    fn test_range_select_backwards_is_in_listing_order() {
        let ordered = listing(&["A", "B", "C", "D", "E"]);
        let result = update_selection(&sel(&["D"]), &ordered, "B", ClickModifiers::RANGE);
        assert_eq!(result, sel(&["B", "C", "D"]));
    }

    #[test]
    fn test_range_anchor_is_insertion_order_last() {
        let ordered = listing(&["A", "B", "C", "D", "E"]);
        // 목록상 마지막은 E이지만 기준점은 마지막으로 추가된 B
        let result = update_selection(&sel(&["E", "B"]), &ordered, "C", ClickModifiers::RANGE);
        assert_eq!(result, sel(&["B", "C"]));
    }

    #[test]
    fn test_range_with_empty_selection_falls_back_to_single() {
        let ordered = listing(&["A", "B", "C"]);
        let result = update_selection(&[], &ordered, "C", ClickModifiers::RANGE);
        assert_eq!(result, sel(&["C"]));
    }

    #[test]
    fn test_range_with_hidden_anchor_selects_clicked_only() {
        let ordered = listing(&["A", "B", "C"]);
        let result = update_selection(&sel(&["Z"]), &ordered, "B", ClickModifiers::RANGE);
        assert_eq!(result, sel(&["B"]));
    }

    #[test]
    fn test_range_takes_precedence_over_primary() {
        let ordered = listing(&["A", "B", "C", "D"]);
        let both = ClickModifiers {
            primary: true,
            range: true,
        };
        let result = update_selection(&sel(&["A"]), &ordered, "C", both);
        assert_eq!(result, sel(&["A", "B", "C"]));
    }

    #[test]
    fn test_toggle_removes_selected() {
        let ordered = listing(&["A", "B", "C"]);
        let result = update_selection(&sel(&["A", "B"]), &ordered, "A", ClickModifiers::PRIMARY);
        assert_eq!(result, sel(&["B"]));
    }

    #[test]
    fn test_toggle_appends_at_end() {
        let ordered = listing(&["A", "B", "C"]);
        let result = update_selection(&sel(&["C", "A"]), &ordered, "B", ClickModifiers::PRIMARY);
        assert_eq!(result, sel(&["C", "A", "B"]));
    }

    #[test]
    fn test_default_click_replaces() {
        let ordered = listing(&["A", "B", "C"]);
        let result = update_selection(&sel(&["A", "B"]), &ordered, "C", ClickModifiers::NONE);
        assert_eq!(result, sel(&["C"]));
    }

    #[test]
    fn test_click_outside_listing_keeps_visible_selection() {
        let ordered = listing(&["A", "B"]);
        let result = update_selection(&sel(&["A", "X"]), &ordered, "Q", ClickModifiers::NONE);
        assert_eq!(result, sel(&["A"]));
    }

    #[test]
    fn test_results_are_always_subset_of_listing() {
        let ordered = listing(&["A", "B", "C", "D"]);
        let current = sel(&["X", "B", "Y"]);
        let modifiers = [
            ClickModifiers::NONE,
            ClickModifiers::PRIMARY,
            ClickModifiers::RANGE,
        ];
        for m in modifiers {
            for clicked in ["A", "B", "D", "Z"] {
                let result = update_selection(&current, &ordered, clicked, m);
                for id in &result {
                    assert!(ordered.iter().any(|e| &e.id == id), "{:?} {}", m, clicked);
                }
            }
        }
    }

    #[test]
    fn test_select_all_invert_retain() {
        let ordered = listing(&["A", "B", "C"]);
        assert_eq!(select_all(&ordered), sel(&["A", "B", "C"]));
        assert_eq!(invert_selection(&sel(&["B"]), &ordered), sel(&["A", "C"]));
        assert_eq!(retain_visible(&sel(&["C", "Z", "A"]), &ordered), sel(&["C", "A"]));
    }
}
