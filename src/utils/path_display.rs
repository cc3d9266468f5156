//! 목업 경로 유틸리티
//!
//! 목업 데이터의 경로는 실제 파일 시스템과 무관한 `/` 구분 문자열이므로
//! `std::path` 대신 문자열 단위로 다룬다.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const SEPARATOR: char = '/';
pub const ROOT: &str = "/";

const ELLIPSIS: &str = "...";
const PATH_ELLIPSIS: &str = "/...";

/// 절대 경로 여부
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// 부모 경로 아래에 이름을 붙인다. 루트 아래에서도 `//`가 생기지 않는다.
pub fn join_path(parent: &str, name: &str) -> String {
    if parent.ends_with(SEPARATOR) {
        format!("{}{}", parent, name)
    } else {
        format!("{}{}{}", parent, SEPARATOR, name)
    }
}

/// 마지막 경로 세그먼트를 제거한 경로. 세그먼트가 하나 이하면 루트.
///
/// # Examples
/// ```
/// use mockdir::utils::path_display::parent_path;
///
/// assert_eq!(parent_path("/Users/username/Documents"), "/Users/username");
/// assert_eq!(parent_path("/Users"), "/");
/// assert_eq!(parent_path("/"), "/");
/// ```
pub fn parent_path(path: &str) -> String {
    let segments = breadcrumb_segments(path);
    if segments.len() <= 1 {
        return ROOT.to_string();
    }
    let parent: Vec<&str> = segments[..segments.len() - 1]
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    format!("{}{}", SEPARATOR, parent.join("/"))
}

/// 탭/검색창에 표시할 경로 제목 (마지막 세그먼트, 없으면 "Root")
pub fn path_title(path: &str) -> String {
    path.split(SEPARATOR)
        .rfind(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "Root".to_string())
}

/// 브레드크럼 세그먼트 목록: (이름, 해당 세그먼트까지의 전체 경로)
pub fn breadcrumb_segments(path: &str) -> Vec<(String, String)> {
    let mut result = Vec::new();
    let mut current = String::new();
    for segment in path.split(SEPARATOR).filter(|s| !s.is_empty()) {
        current.push(SEPARATOR);
        current.push_str(segment);
        result.push((segment.to_string(), current.clone()));
    }
    result
}

/// 문자열을 최대 너비에 맞춰 중간 생략한다.
pub fn truncate_middle(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if text.width() <= max_width {
        return text.to_string();
    }

    if max_width < 5 {
        return take_prefix_by_width(text, max_width);
    }

    let side_width = (max_width - ELLIPSIS.width()) / 2;
    let start = take_prefix_by_width(text, side_width);
    let end = take_suffix_by_width(text, side_width);
    format!("{}{}{}", start, ELLIPSIS, end)
}

/// 문자열을 최대 너비에 맞춰 뒤쪽을 생략한다 (그리드 셀 이름용).
pub fn truncate_end(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(text, max_width);
    }
    let prefix = take_prefix_by_width(text, max_width - ELLIPSIS.width());
    format!("{}{}", prefix, ELLIPSIS)
}

/// 경로를 최대 너비에 맞춰 축약한다. 길면 `앞/.../뒤` 형태로 생략한다.
pub fn truncate_path(path: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if path.width() <= max_width {
        return path.to_string();
    }

    let parts: Vec<&str> = path.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
    if parts.len() <= 2 {
        return truncate_from_start(path, max_width);
    }

    let first = format!("/{}", parts[0]);
    let first_width = first.width() + PATH_ELLIPSIS.width();
    if first_width >= max_width {
        return truncate_from_start(path, max_width);
    }
    let available_width = max_width.saturating_sub(first_width);

    let mut end_parts: Vec<&str> = Vec::new();
    let mut current_width = 0;
    for part in parts.iter().rev() {
        let part_width = part.width() + 1; // '/'
        if current_width + part_width > available_width {
            break;
        }
        end_parts.insert(0, part);
        current_width += part_width;
    }

    if end_parts.is_empty() {
        return truncate_from_start(path, max_width);
    }

    format!("{}{}/{}", first, PATH_ELLIPSIS, end_parts.join("/"))
}

fn truncate_from_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(text, max_width);
    }

    let suffix_width = max_width - ELLIPSIS.width();
    format!("{}{}", ELLIPSIS, take_suffix_by_width(text, suffix_width))
}

fn take_prefix_by_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

fn take_suffix_by_width(text: &str, max_width: usize) -> String {
    let mut rev_chars: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        rev_chars.push(ch);
        width += ch_width;
    }
    rev_chars.reverse();
    rev_chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/Users/username", "Documents"), "/Users/username/Documents");
        assert_eq!(join_path("/", "Volumes"), "/Volumes");
    }

    #[test]
    fn test_parent_path_drops_last_segment() {
        assert_eq!(parent_path("/Users/username/Documents"), "/Users/username");
        assert_eq!(parent_path("/Users/username/"), "/Users");
        assert_eq!(parent_path("/Applications"), "/");
        assert_eq!(parent_path("/"), "/");
    }

    #[test]
    fn test_path_title() {
        assert_eq!(path_title("/Users/username"), "username");
        assert_eq!(path_title("/Users/username/"), "username");
        assert_eq!(path_title("/"), "Root");
        assert_eq!(path_title(""), "Root");
    }

    #[test]
    fn test_breadcrumb_segments() {
        let segments = breadcrumb_segments("/Users/username/Documents");
        assert_eq!(
            segments,
            vec![
                ("Users".to_string(), "/Users".to_string()),
                ("username".to_string(), "/Users/username".to_string()),
                ("Documents".to_string(), "/Users/username/Documents".to_string()),
            ]
        );
        assert!(breadcrumb_segments("/").is_empty());
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/Users"));
        assert!(!is_absolute("Users"));
        assert!(!is_absolute(""));
    }

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle("short", 10), "short");
        assert_eq!(truncate_middle("verylongstring", 10), "ver...ing");
        assert_eq!(truncate_middle("verylongstring", 4), "very");
    }

    #[test]
    fn test_truncate_end() {
        assert_eq!(truncate_end("Presentation.pptx", 20), "Presentation.pptx");
        assert_eq!(truncate_end("Presentation.pptx", 10), "Present...");
        assert!(truncate_end("가나다라마바사아자차", 9).width() <= 9);
    }

    #[test]
    fn test_truncate_path_long() {
        let path = "/Users/username/Library/Mobile Documents/com~apple~CloudDocs/Projects";
        let truncated = truncate_path(path, 30);
        assert!(truncated.contains("/.../"));
        assert!(truncated.ends_with("/Projects"));
        assert!(truncated.width() <= 30);
    }
}
