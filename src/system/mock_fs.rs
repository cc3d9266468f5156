//! 목업 데이터 소스
//!
//! 실제 파일 시스템에 접근하지 않는다. 모든 호출은 고정 지연 후
//! 합성된 데이터를 돌려준다.

use crate::models::file_entry::Entry;
use crate::utils::error::{MockDirError, Result};
use crate::utils::path_display::{is_absolute, SEPARATOR};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info};

/// 기본 응답 지연
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(300);

/// 고정 샘플 엔트리 수 (id "1" ~ "10")
const SAMPLE_COUNT: u64 = 10;

/// 목업 파일 시스템
#[derive(Debug)]
pub struct MockFileSystem {
    latency: Duration,
    next_id: AtomicU64,
}

impl MockFileSystem {
    /// 지연 시간을 지정해 생성
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            next_id: AtomicU64::new(SAMPLE_COUNT + 1),
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// 디렉토리 목록 조회
    ///
    /// 어떤 절대 경로든 같은 10개 샘플 엔트리를 그 경로 아래에 만들어 반환한다.
    pub async fn list(&self, path: &str) -> Result<Vec<Entry>> {
        self.simulate_latency().await;

        if !is_absolute(path) {
            return Err(MockDirError::Navigation(format!(
                "'{}' is not an absolute path",
                path
            )));
        }

        let entries = sample_entries(path);
        debug!(path, count = entries.len(), "listed directory");
        Ok(entries)
    }

    /// 새 폴더 생성
    pub async fn create_folder(&self, parent: &str, name: &str) -> Result<Entry> {
        self.simulate_latency().await;

        let name = name.trim();
        if name.is_empty() {
            return Err(MockDirError::Create("folder name is empty".to_string()));
        }
        if name.contains(SEPARATOR) {
            return Err(MockDirError::Create(format!(
                "'{}' contains a path separator",
                name
            )));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed).to_string();
        let now = Utc::now();
        info!(parent, name, id = %id, "created folder");
        Ok(Entry::folder(id, name, now, now, parent))
    }

    /// 항목 삭제 (요청만 기록)
    pub async fn delete(&self, ids: &[String]) -> Result<()> {
        self.simulate_latency().await;

        if ids.is_empty() {
            return Err(MockDirError::Delete("no items given".to_string()));
        }
        info!(?ids, "deleting items");
        Ok(())
    }

    /// 항목 복사 (요청만 기록)
    pub async fn copy(&self, ids: &[String], dest: &str) -> Result<()> {
        self.simulate_latency().await;

        validate_transfer(ids, dest).map_err(MockDirError::Copy)?;
        info!(?ids, dest, "copying items");
        Ok(())
    }

    /// 항목 이동 (요청만 기록)
    pub async fn move_items(&self, ids: &[String], dest: &str) -> Result<()> {
        self.simulate_latency().await;

        validate_transfer(ids, dest).map_err(MockDirError::Move)?;
        info!(?ids, dest, "moving items");
        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

fn validate_transfer(ids: &[String], dest: &str) -> std::result::Result<(), String> {
    if ids.is_empty() {
        return Err("no items given".to_string());
    }
    if !is_absolute(dest) {
        return Err(format!("destination '{}' is not an absolute path", dest));
    }
    Ok(())
}

fn date(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// `parent` 아래의 고정 샘플 엔트리
pub fn sample_entries(parent: &str) -> Vec<Entry> {
    vec![
        Entry::folder("1", "Documents", date(1, 15), date(1, 1), parent),
        Entry::folder("2", "Pictures", date(2, 20), date(1, 5), parent),
        Entry::folder("3", "Downloads", date(3, 10), date(1, 10), parent),
        Entry::file("4", "Project Proposal.pdf", 2_540_000, date(3, 5), date(3, 5), parent),
        Entry::file("5", "Meeting Notes.docx", 156_000, date(3, 8), date(3, 8), parent),
        Entry::file("6", "Presentation.pptx", 8_920_000, date(3, 12), date(3, 12), parent),
        Entry::file(
            "7",
            "Screenshot 2024-03-15.png",
            450_000,
            date(3, 15),
            date(3, 15),
            parent,
        ),
        Entry::file("8", "Video Call.mp4", 125_000_000, date(3, 18), date(3, 18), parent),
        Entry::folder("9", "Music Collection", date(2, 28), date(1, 15), parent),
        Entry::file("10", "Archive.zip", 15_600_000, date(3, 20), date(3, 20), parent),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> MockFileSystem {
        MockFileSystem::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_list_returns_sample_under_path() {
        let fs = instant();
        let entries = fs.list("/Users/username").await.unwrap();

        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].name, "Documents");
        assert_eq!(entries[0].path, "/Users/username/Documents");
        assert_eq!(entries[9].extension.as_deref(), Some("zip"));
        assert!(entries.iter().filter(|e| e.is_folder()).all(|e| e.size.is_none()));
    }

    #[tokio::test]
    async fn test_list_at_root_has_single_separator() {
        let entries = instant().list("/").await.unwrap();
        assert_eq!(entries[1].path, "/Pictures");
    }

    #[tokio::test]
    async fn test_list_relative_path_fails() {
        let err = instant().list("relative/dir").await.unwrap_err();
        assert!(matches!(err, MockDirError::Navigation(_)));
        assert!(err
            .to_string()
            .starts_with("Failed to load directory contents"));
    }

    #[tokio::test]
    async fn test_create_folder_assigns_unique_ids() {
        let fs = instant();
        let a = fs.create_folder("/home", "New Folder").await.unwrap();
        let b = fs.create_folder("/home", "New Folder").await.unwrap();

        assert_ne!(a.id, b.id);
        assert!(a.is_folder());
        assert_eq!(a.path, "/home/New Folder");
        // 샘플 id와 겹치지 않음
        let sample_ids: Vec<String> = sample_entries("/home").into_iter().map(|e| e.id).collect();
        assert!(!sample_ids.contains(&a.id));
    }

    #[tokio::test]
    async fn test_create_folder_rejects_bad_names() {
        let fs = instant();
        assert!(matches!(
            fs.create_folder("/home", "   ").await,
            Err(MockDirError::Create(_))
        ));
        assert!(matches!(
            fs.create_folder("/home", "a/b").await,
            Err(MockDirError::Create(_))
        ));
    }

    #[tokio::test]
    async fn test_operations_validate_input() {
        let fs = instant();
        let ids = vec!["4".to_string()];

        assert!(fs.delete(&ids).await.is_ok());
        assert!(matches!(fs.delete(&[]).await, Err(MockDirError::Delete(_))));

        assert!(fs.copy(&ids, "/Volumes/External").await.is_ok());
        assert!(matches!(
            fs.copy(&ids, "External").await,
            Err(MockDirError::Copy(_))
        ));

        assert!(fs.move_items(&ids, "/tmp").await.is_ok());
        assert!(matches!(
            fs.move_items(&[], "/tmp").await,
            Err(MockDirError::Move(_))
        ));
    }

    #[tokio::test]
    async fn test_latency_is_applied() {
        let latency = Duration::from_millis(20);
        let fs = MockFileSystem::new(latency);
        let start = tokio::time::Instant::now();
        fs.list("/").await.unwrap();
        assert!(start.elapsed() >= latency);
        assert_eq!(MockFileSystem::default().latency(), DEFAULT_LATENCY);
    }
}
