use crate::utils::path_display::{join_path, SEPARATOR};
use chrono::{DateTime, Utc};

/// 엔트리 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// 일반 파일
    File,
    /// 폴더
    Folder,
}

impl EntryKind {
    /// 정렬/표시에 사용하는 종류 레이블
    pub fn label(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Folder => "folder",
        }
    }
}

/// 디렉토리 목록의 파일/폴더 한 항목
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// 목록 내 고유 식별자
    pub id: String,
    /// 표시 이름
    pub name: String,
    /// 종류
    pub kind: EntryKind,
    /// 바이트 단위 크기 (파일에만 존재)
    pub size: Option<u64>,
    /// 수정 시간
    pub modified_at: DateTime<Utc>,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 전체 경로 (계층 내 위치를 결정)
    pub path: String,
    /// 소문자 확장자 (이름에서 유도, 파일에만 존재)
    pub extension: Option<String>,
}

impl Entry {
    /// 파일 엔트리 생성. 경로와 확장자는 부모 경로와 이름에서 유도한다.
    pub fn file(
        id: impl Into<String>,
        name: impl Into<String>,
        size: u64,
        modified_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
        parent: &str,
    ) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            path: join_path(parent, &name),
            extension: extension_of(&name),
            name,
            kind: EntryKind::File,
            size: Some(size),
            modified_at,
            created_at,
        }
    }

    /// 폴더 엔트리 생성. 폴더는 크기를 갖지 않는다.
    pub fn folder(
        id: impl Into<String>,
        name: impl Into<String>,
        modified_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
        parent: &str,
    ) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            path: join_path(parent, &name),
            name,
            kind: EntryKind::Folder,
            size: None,
            modified_at,
            created_at,
            extension: None,
        }
    }

    /// 폴더 여부 확인
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }

    /// 파일 여부 확인
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// `other`의 하위 항목인지 확인 (경로 접두사 + 구분자)
    pub fn is_child_of(&self, other: &Entry) -> bool {
        self.path
            .strip_prefix(other.path.as_str())
            .is_some_and(|rest| rest.starts_with(SEPARATOR))
    }

    /// 표시 분류 (아이콘/색상 전용)
    pub fn category(&self) -> FileCategory {
        FileCategory::of(self)
    }
}

/// `folder`의 하위 경로에 있는 엔트리 목록 (`is_child_of` 기준)
pub fn children_of<'a>(entries: &'a [Entry], folder: &Entry) -> Vec<&'a Entry> {
    entries.iter().filter(|e| e.is_child_of(folder)).collect()
}

/// 이름에서 소문자 확장자를 유도한다.
///
/// 점이 없거나 이름의 처음/끝에만 있으면 확장자가 없다 (`.bashrc`, `notes.`).
pub fn extension_of(name: &str) -> Option<String> {
    let dot = name.rfind('.')?;
    if dot == 0 || dot + 1 == name.len() {
        return None;
    }
    Some(name[dot + 1..].to_lowercase())
}

/// 확장자 기반 표시 분류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Folder,
    Image,
    Video,
    Audio,
    Document,
    Archive,
    Other,
}

impl FileCategory {
    /// 엔트리 분류
    pub fn of(entry: &Entry) -> Self {
        if entry.is_folder() {
            return FileCategory::Folder;
        }
        entry
            .extension
            .as_deref()
            .map(Self::from_extension)
            .unwrap_or(FileCategory::Other)
    }

    /// 확장자 분류 (대소문자 무시)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" => FileCategory::Image,
            "mp4" | "avi" | "mov" | "mkv" => FileCategory::Video,
            "mp3" | "wav" | "flac" | "aac" => FileCategory::Audio,
            "pdf" | "doc" | "docx" | "txt" => FileCategory::Document,
            "zip" | "rar" | "7z" => FileCategory::Archive,
            _ => FileCategory::Other,
        }
    }

    /// 아이콘
    pub fn icon(&self) -> &'static str {
        match self {
            FileCategory::Folder => "📁",
            FileCategory::Image => "🖼",
            FileCategory::Video => "🎬",
            FileCategory::Audio => "🎵",
            FileCategory::Document => "📄",
            FileCategory::Archive => "📦",
            FileCategory::Other => "📃",
        }
    }
}
