//! 다이얼로그 시스템
//!
//! 작업 대상 경로 입력, 새 폴더 이름 입력, 작업 확인, 메시지, 도움말

mod kind;
mod render;

pub use kind::{DialogKind, InputPurpose};
pub use render::Dialog;
