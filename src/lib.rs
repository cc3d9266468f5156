//! mockdir: 목업 데이터 위에서 동작하는 탭 기반 터미널 파일 매니저
//!
//! 목록 계산(`core::listing`)과 선택 규칙(`core::selection`)은 순수 함수이고,
//! 세션 상태는 `app::App`이 소유한다. 데이터 소스(`system::MockFileSystem`)는
//! 메모리 안의 샘플 엔트리만 돌려준다.

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod system;
pub mod ui;
pub mod utils;
