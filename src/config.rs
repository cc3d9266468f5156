//! 사용자 설정 (config.toml)
//!
//! 파일이 없으면 기본값을 사용한다. 형식이 잘못된 파일은 에러로 보고한다.

use crate::core::listing::{SortBy, SortOrder};
use crate::models::panel_state::ViewMode;
use crate::utils::error::{MockDirError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 설정 파일 경로 환경 변수
pub const CONFIG_ENV: &str = "MOCKDIR_CONFIG";

/// 기본 홈 경로
pub const DEFAULT_HOME: &str = "/Users/username";

/// 테마 이름
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

/// 사이드바 추가 즐겨찾기
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteConfig {
    pub name: String,
    pub path: String,
}

/// 전체 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 시작 경로 (사이드바 Home)
    pub home_path: String,
    /// 새 탭의 보기 방식
    pub view_mode: ViewMode,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    /// 목업 데이터 소스 지연 (밀리초)
    pub latency_ms: u64,
    pub theme: ThemeName,
    /// 로그 파일 (없으면 로깅 안 함)
    pub log_file: Option<PathBuf>,
    pub favorites: Vec<FavoriteConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_path: DEFAULT_HOME.to_string(),
            view_mode: ViewMode::default(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            latency_ms: 300,
            theme: ThemeName::default(),
            log_file: None,
            favorites: Vec::new(),
        }
    }
}

impl Config {
    /// 기본 위치에서 설정 로드
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// 설정 파일 경로 (환경 변수 우선, 없으면 `<config_dir>/mockdir/config.toml`)
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(CONFIG_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("mockdir").join("config.toml"))
    }

    /// 지정 파일에서 로드 (파일이 없으면 기본값)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| MockDirError::Config(format!("{}: {}", path.display(), e)))
    }

    /// TOML 문자열 파싱
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| MockDirError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.home_path.starts_with('/') {
            return Err(MockDirError::Config(format!(
                "home_path must be absolute, got '{}'",
                self.home_path
            )));
        }
        if let Some(fav) = self.favorites.iter().find(|f| !f.path.starts_with('/')) {
            return Err(MockDirError::Config(format!(
                "favorite '{}' must have an absolute path",
                fav.name
            )));
        }
        Ok(())
    }

    /// 데이터 소스 지연
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.home_path, "/Users/username");
        assert_eq!(config.view_mode, ViewMode::Details);
        assert_eq!(config.sort_by, SortBy::Name);
        assert_eq!(config.sort_order, SortOrder::Ascending);
        assert_eq!(config.latency(), Duration::from_millis(300));
        assert_eq!(config.theme, ThemeName::Dark);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse(
            r#"
view_mode = "grid"
sort_by = "size"
latency_ms = 0

[[favorites]]
name = "Work"
path = "/srv/work"
"#,
        )
        .unwrap();

        assert_eq!(config.view_mode, ViewMode::Grid);
        assert_eq!(config.sort_by, SortBy::Size);
        assert_eq!(config.sort_order, SortOrder::Ascending);
        assert_eq!(config.latency(), Duration::ZERO);
        assert_eq!(config.home_path, DEFAULT_HOME);
        assert_eq!(config.favorites.len(), 1);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let err = Config::parse("view_mode = \"carousel\"").unwrap_err();
        assert!(matches!(err, MockDirError::Config(_)));

        let err = Config::parse("home_path = \"relative\"").unwrap_err();
        assert!(err.to_string().contains("home_path must be absolute"));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "home_path = \"/home/dev\"\ntheme = \"light\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.home_path, "/home/dev");
        assert_eq!(config.theme, ThemeName::Light);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = Config::default();
        config.log_file = Some(PathBuf::from("/tmp/mockdir.log"));
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&text).unwrap(), config);
    }
}
