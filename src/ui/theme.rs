use crate::config::ThemeName;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// 색상 테마
///
/// 화면 전체의 색상을 한곳에서 정의한다. 컴포넌트는 `.theme(theme)`으로 받아 쓴다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,
    pub fg_secondary: ColorDef,

    // 영역
    pub sidebar_bg: ColorDef,
    pub toolbar_bg: ColorDef,
    pub border_active: ColorDef,
    pub border_inactive: ColorDef,

    // 파일 목록
    pub file_normal: ColorDef,
    pub file_selected: ColorDef,
    pub file_selected_bg: ColorDef,
    pub cursor_bg: ColorDef,
    pub folder: ColorDef,

    // 탭
    pub tab_active_bg: ColorDef,
    pub tab_active_fg: ColorDef,
    pub tab_inactive_fg: ColorDef,

    // 상태바
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ratatui Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),
            fg_secondary: "#8a8a8a".into(),

            sidebar_bg: "#252526".into(),
            toolbar_bg: "#2d2d30".into(),
            border_active: "#0078d4".into(),
            border_inactive: "#3c3c3c".into(),

            file_normal: "#d4d4d4".into(),
            file_selected: "#ffffff".into(),
            file_selected_bg: "#0a4f8a".into(),
            cursor_bg: "#37373d".into(),
            folder: "#569cd6".into(),

            tab_active_bg: "#1e1e1e".into(),
            tab_active_fg: "#ffffff".into(),
            tab_inactive_fg: "#8a8a8a".into(),

            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),

            accent: "#0078d4".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),
            fg_secondary: "#6e6e6e".into(),

            sidebar_bg: "#f3f3f3".into(),
            toolbar_bg: "#ececec".into(),
            border_active: "#0078d4".into(),
            border_inactive: "#cccccc".into(),

            file_normal: "#1e1e1e".into(),
            file_selected: "#000000".into(),
            file_selected_bg: "#add6ff".into(),
            cursor_bg: "#e4e6f1".into(),
            folder: "#0066cc".into(),

            tab_active_bg: "#ffffff".into(),
            tab_active_fg: "#000000".into(),
            tab_inactive_fg: "#6e6e6e".into(),

            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),

            accent: "#0078d4".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
            success: "#107c10".into(),
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Theme::dark(),
            ThemeName::Light => Theme::light(),
        }
    }
}

/// 테마 관리자
///
/// 현재 테마 이름과 색상을 들고 있으며 런타임에 Dark/Light를 전환합니다.
pub struct ThemeManager {
    current_name: ThemeName,
    current_theme: Theme,
}

impl ThemeManager {
    pub fn new(name: ThemeName) -> Self {
        Self {
            current_name: name,
            current_theme: Theme::from_name(name),
        }
    }

    /// 현재 테마 반환
    pub fn current(&self) -> &Theme {
        &self.current_theme
    }

    pub fn current_name(&self) -> ThemeName {
        self.current_name
    }

    /// 테마 전환
    pub fn switch_theme(&mut self, name: ThemeName) {
        self.current_name = name;
        self.current_theme = Theme::from_name(name);
    }

    /// Dark ↔ Light 토글
    pub fn toggle(&mut self) {
        let next = match self.current_name {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        };
        self.switch_theme(next);
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new(ThemeName::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_creation() {
        let theme = Theme::dark();
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(30, 30, 30));
    }

    #[test]
    fn test_light_theme_creation() {
        let theme = Theme::light();
        assert_eq!(theme.bg_primary.to_color(), Color::Rgb(255, 255, 255));
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(parse_hex_color("#1e1e1e"), Color::Rgb(30, 30, 30));
        assert_eq!(parse_hex_color("#abc"), Color::Reset);
    }

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_named_color("red"), Color::Red);
        assert_eq!(parse_named_color("GREY"), Color::Gray);
        assert_eq!(parse_named_color("nope"), Color::Reset);
    }

    #[test]
    fn test_theme_toggle() {
        let mut manager = ThemeManager::default();
        assert_eq!(manager.current_name(), ThemeName::Dark);

        manager.toggle();
        assert_eq!(manager.current_name(), ThemeName::Light);
        assert_eq!(
            manager.current().bg_primary.to_color(),
            Color::Rgb(255, 255, 255)
        );

        manager.toggle();
        assert_eq!(manager.current_name(), ThemeName::Dark);
    }
}
