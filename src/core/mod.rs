// Core engines: 목록 계산, 선택 규칙, 액션 레지스트리
pub mod actions;
pub mod listing;
pub mod selection;
