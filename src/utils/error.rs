use thiserror::Error;

/// 목업 파일 매니저 에러
///
/// 데이터 소스 작업 실패는 작업 종류별로 구분되며, 세션에서는
/// 사람이 읽을 수 있는 메시지(`to_string()`)로만 보관합니다.
#[derive(Error, Debug)]
pub enum MockDirError {
    #[error("Failed to load directory contents: {0}")]
    Navigation(String),

    #[error("Failed to create folder: {0}")]
    Create(String),

    #[error("Failed to delete items: {0}")]
    Delete(String),

    #[error("Failed to copy items: {0}")]
    Copy(String),

    #[error("Failed to move items: {0}")]
    Move(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, MockDirError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_human_readable() {
        let err = MockDirError::Navigation("path must be absolute".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to load directory contents: path must be absolute"
        );

        let err = MockDirError::Delete("no items given".to_string());
        assert_eq!(err.to_string(), "Failed to delete items: no items given");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: MockDirError = io.into();
        assert!(matches!(err, MockDirError::Io(_)));
    }
}
