//! 목록 엔진: 필터 → 정렬 → 폴더 우선 재배치
//!
//! 보이는 목록은 저장하지 않고 항상 (원본 엔트리, 필터, 정렬 기준, 정렬 순서)에서
//! 다시 계산한다. 원본 엔트리는 변경되지 않는다.

use crate::models::file_entry::Entry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 정렬 기준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// 이름
    #[default]
    Name,
    /// 크기
    Size,
    /// 수정 날짜
    Modified,
    /// 종류 (file / folder)
    Kind,
}

impl SortBy {
    /// 표시 이름
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Name => "Name",
            SortBy::Size => "Size",
            SortBy::Modified => "Date",
            SortBy::Kind => "Kind",
        }
    }
}

/// 정렬 순서
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// 오름차순
    #[default]
    Ascending,
    /// 내림차순
    Descending,
}

impl SortOrder {
    /// 반대 순서
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }
}

/// 툴바 정렬 표시 (예: "Name ↑")
pub fn sort_indicator(sort_by: SortBy, sort_order: SortOrder) -> String {
    format!("{} {}", sort_by.label(), sort_order.arrow())
}

/// 보이는 목록 계산
///
/// 1. 이름에 `filter_text`가 (대소문자 무시) 포함된 항목만 남긴다. 빈 필터는 전부 통과.
/// 2. 정렬 기준/순서로 안정 정렬한다. 같은 키는 입력 순서를 유지한다.
/// 3. 폴더를 파일보다 앞에 두는 안정 분할을 항상 적용한다.
pub fn compute_visible_listing(
    entries: &[Entry],
    filter_text: &str,
    sort_by: SortBy,
    sort_order: SortOrder,
) -> Vec<Entry> {
    let needle = filter_text.to_lowercase();
    let mut visible: Vec<Entry> = entries
        .iter()
        .filter(|entry| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    // sort_by는 안정 정렬. 내림차순은 비교 결과만 뒤집으므로 동률 순서는 그대로.
    visible.sort_by(|a, b| {
        let ordering = compare_by(a, b, sort_by);
        match sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });

    visible.sort_by_key(|entry| !entry.is_folder());
    visible
}

/// 단일 키 비교
pub fn compare_by(a: &Entry, b: &Entry, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Name => locale_compare(&a.name, &b.name),
        SortBy::Size => a.size.unwrap_or(0).cmp(&b.size.unwrap_or(0)),
        SortBy::Modified => a.modified_at.cmp(&b.modified_at),
        SortBy::Kind => a.kind.label().cmp(b.kind.label()),
    }
}

/// 로캘 스타일 문자열 비교
///
/// 대소문자를 무시한 비교가 1차 기준이고, 그것이 같으면 소문자가 대문자보다 앞선다.
/// 마지막으로 원문 바이트 순서로 결정한다.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    if primary != Ordering::Equal {
        return primary;
    }

    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        match (ca.is_lowercase(), cb.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    a.cmp(b)
}

/// 목록 통계 (상태바용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListingStats {
    pub folder_count: usize,
    pub file_count: usize,
    pub total_bytes: u64,
}

impl ListingStats {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        entries
            .into_iter()
            .fold(ListingStats::default(), |mut stats, entry| {
                if entry.is_folder() {
                    stats.folder_count += 1;
                } else {
                    stats.file_count += 1;
                }
                stats.total_bytes += entry.size.unwrap_or(0);
                stats
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file_entry::EntryKind;
    use chrono::{TimeZone, Utc};

    fn file(id: &str, name: &str, size: u64, day: u32) -> Entry {
        let t = Utc.with_ymd_and_hms(2024, 3, day, 0, 0, 0).unwrap();
        Entry::file(id, name, size, t, t, "/home")
    }

    fn folder(id: &str, name: &str, day: u32) -> Entry {
        let t = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
        Entry::folder(id, name, t, t, "/home")
    }

    fn ids(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    fn sample() -> Vec<Entry> {
        vec![
            file("f1", "report.pdf", 2_048_576, 14),
            folder("d1", "Pictures", 10),
            file("f2", "photo.jpg", 1_024_000, 12),
            folder("d2", "Documents", 15),
            file("f3", "music.mp3", 5_242_880, 11),
        ]
    }

    #[test]
    fn test_sort_by_name_folders_first() {
        let result = compute_visible_listing(&sample(), "", SortBy::Name, SortOrder::Ascending);
        assert_eq!(ids(&result), vec!["d2", "d1", "f3", "f2", "f1"]);
    }

    #[test]
    fn test_sort_descending_keeps_folders_first() {
        let result = compute_visible_listing(&sample(), "", SortBy::Name, SortOrder::Descending);
        assert_eq!(ids(&result), vec!["d1", "d2", "f1", "f2", "f3"]);
    }

    #[test]
    fn test_sort_by_size_treats_folders_as_zero() {
        let result = compute_visible_listing(&sample(), "", SortBy::Size, SortOrder::Descending);
        // 폴더는 모두 0이므로 입력 순서 유지
        assert_eq!(ids(&result), vec!["d1", "d2", "f3", "f1", "f2"]);
    }

    #[test]
    fn test_sort_by_modified() {
        let result =
            compute_visible_listing(&sample(), "", SortBy::Modified, SortOrder::Ascending);
        assert_eq!(ids(&result), vec!["d1", "d2", "f3", "f2", "f1"]);
    }

    #[test]
    fn test_sort_by_kind_is_stable_within_kind() {
        let result = compute_visible_listing(&sample(), "", SortBy::Kind, SortOrder::Ascending);
        assert_eq!(ids(&result), vec!["d1", "d2", "f1", "f2", "f3"]);

        let result = compute_visible_listing(&sample(), "", SortBy::Kind, SortOrder::Descending);
        assert_eq!(ids(&result), vec!["d1", "d2", "f1", "f2", "f3"]);
    }

    #[test]
    fn test_ties_preserve_input_order_in_both_directions() {
        let entries = vec![
            file("a", "same.txt", 10, 1),
            file("b", "same.txt", 10, 1),
            file("c", "same.txt", 10, 1),
        ];
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            for key in [SortBy::Name, SortBy::Size, SortBy::Modified, SortBy::Kind] {
                let result = compute_visible_listing(&entries, "", key, order);
                assert_eq!(ids(&result), vec!["a", "b", "c"]);
            }
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let result = compute_visible_listing(&sample(), "PIC", SortBy::Name, SortOrder::Ascending);
        assert_eq!(ids(&result), vec!["d1"]);

        let result = compute_visible_listing(&sample(), "o", SortBy::Name, SortOrder::Ascending);
        for entry in &result {
            assert!(entry.name.to_lowercase().contains('o'));
        }
        // "o"를 포함한 항목은 모두 정확히 한 번씩
        let expected = sample()
            .iter()
            .filter(|e| e.name.to_lowercase().contains('o'))
            .count();
        assert_eq!(result.len(), expected);
    }

    #[test]
    fn test_filter_without_match_returns_empty() {
        let result = compute_visible_listing(&sample(), "zzz", SortBy::Name, SortOrder::Ascending);
        assert!(result.is_empty());
        let result = compute_visible_listing(&[], "", SortBy::Name, SortOrder::Ascending);
        assert!(result.is_empty());
    }

    #[test]
    fn test_listing_is_pure() {
        let entries = sample();
        let before = entries.clone();
        let first = compute_visible_listing(&entries, "o", SortBy::Size, SortOrder::Descending);
        let second = compute_visible_listing(&entries, "o", SortBy::Size, SortOrder::Descending);
        assert_eq!(first, second);
        assert_eq!(entries, before);
    }

    #[test]
    fn test_no_file_precedes_folder_for_any_key() {
        for order in [SortOrder::Ascending, SortOrder::Descending] {
            for key in [SortBy::Name, SortBy::Size, SortBy::Modified, SortBy::Kind] {
                let result = compute_visible_listing(&sample(), "", key, order);
                let first_file = result.iter().position(|e| e.kind == EntryKind::File);
                let last_folder = result.iter().rposition(|e| e.kind == EntryKind::Folder);
                if let (Some(file_idx), Some(folder_idx)) = (first_file, last_folder) {
                    assert!(folder_idx < file_idx, "{:?} {:?}", key, order);
                }
            }
        }
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Report", "report"), Ordering::Greater);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
        assert_eq!(locale_compare("abc", "abcd"), Ordering::Less);
    }

    #[test]
    fn test_sort_indicator_and_toggle() {
        assert_eq!(sort_indicator(SortBy::Name, SortOrder::Ascending), "Name ↑");
        assert_eq!(sort_indicator(SortBy::Modified, SortOrder::Descending), "Date ↓");
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
    }

    #[test]
    fn test_listing_stats() {
        let stats = ListingStats::from_entries(&sample());
        assert_eq!(stats.folder_count, 2);
        assert_eq!(stats.file_count, 3);
        assert_eq!(stats.total_bytes, 2_048_576 + 1_024_000 + 5_242_880);
    }
}
