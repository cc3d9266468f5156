// Formatters - 파일 크기, 날짜, 개수 포맷팅

use chrono::{DateTime, Local, Utc};

/// 크기 단위 (1024 배수)
const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅
///
/// 크기가 없거나 0이면 빈 문자열을 반환합니다 (폴더 행에서 크기 칸을 비우기 위함).
/// 값은 소수점 둘째 자리에서 반올림하고, 불필요한 0은 표시하지 않습니다.
///
/// # Examples
/// ```
/// use mockdir::utils::formatter::format_file_size;
///
/// assert_eq!(format_file_size(None), "");
/// assert_eq!(format_file_size(Some(0)), "");
/// assert_eq!(format_file_size(Some(512)), "512 B");
/// assert_eq!(format_file_size(Some(1024)), "1 KB");
/// assert_eq!(format_file_size(Some(1536)), "1.5 KB");
/// assert_eq!(format_file_size(Some(1_048_576)), "1 MB");
/// ```
pub fn format_file_size(bytes: Option<u64>) -> String {
    let bytes = match bytes {
        Some(b) if b > 0 => b,
        _ => return String::new(),
    };

    let mut unit = 0;
    let mut divisor: u64 = 1;
    while unit + 1 < SIZE_UNITS.len() && bytes / divisor >= 1024 {
        divisor *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / divisor as f64;
    let rounded = (value * 100.0).round() / 100.0;
    // f64 Display는 최단 표현을 사용하므로 1.0 → "1", 1.50 → "1.5"
    format!("{} {}", rounded, SIZE_UNITS[unit])
}

/// 시각을 로컬 시간대 "YYYY-MM-DD HH:MM" 형식으로 포맷팅 (16자 고정)
pub fn format_date(time: DateTime<Utc>) -> String {
    let local: DateTime<Local> = time.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// 시각을 전체 날짜/시간 형식으로 포맷팅 (정보 메시지 전용, 19자)
pub fn format_date_full(time: DateTime<Utc>) -> String {
    let local: DateTime<Local> = time.with_timezone(&Local);
    local.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 개수에 따라 단수/복수형 반환
///
/// # Examples
/// ```
/// use mockdir::utils::formatter::pluralize;
///
/// assert_eq!(pluralize(1, "file", "files"), "1 file");
/// assert_eq!(pluralize(3, "file", "files"), "3 files");
/// assert_eq!(pluralize(0, "item", "items"), "0 items");
/// ```
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// 툴바용 항목 개수 ("1 item", "10 items")
pub fn format_item_count(count: usize) -> String {
    pluralize(count, "item", "items")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_file_size_empty() {
        assert_eq!(format_file_size(None), "");
        assert_eq!(format_file_size(Some(0)), "");
    }

    #[test]
    fn test_format_file_size_bytes() {
        assert_eq!(format_file_size(Some(1)), "1 B");
        assert_eq!(format_file_size(Some(1023)), "1023 B");
    }

    #[test]
    fn test_format_file_size_kb() {
        assert_eq!(format_file_size(Some(1024)), "1 KB");
        assert_eq!(format_file_size(Some(1536)), "1.5 KB");
        assert_eq!(format_file_size(Some(156_000)), "152.34 KB");
        // 반올림 결과가 1024가 되어도 단위는 올리지 않음
        assert_eq!(format_file_size(Some(1_048_575)), "1024 KB");
    }

    #[test]
    fn test_format_file_size_mb_and_up() {
        assert_eq!(format_file_size(Some(1_048_576)), "1 MB");
        assert_eq!(format_file_size(Some(2_540_000)), "2.42 MB");
        assert_eq!(format_file_size(Some(125_000_000)), "119.21 MB");
        assert_eq!(format_file_size(Some(1_073_741_824)), "1 GB");
        assert_eq!(format_file_size(Some(1_099_511_627_776)), "1 TB");
    }

    #[test]
    fn test_format_file_size_caps_at_tb() {
        let pb = 1_099_511_627_776u64 * 1024;
        assert_eq!(format_file_size(Some(pb)), "1024 TB");
    }

    #[test]
    fn test_format_date_lengths() {
        let time = Utc.with_ymd_and_hms(2024, 3, 5, 12, 30, 0).unwrap();
        assert_eq!(format_date(time).len(), 16);
        assert_eq!(format_date_full(time).len(), 19);
    }

    #[test]
    fn test_pluralize_and_item_count() {
        assert_eq!(pluralize(2, "dir", "dirs"), "2 dirs");
        assert_eq!(format_item_count(1), "1 item");
        assert_eq!(format_item_count(10), "10 items");
    }
}
