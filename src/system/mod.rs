// System Layer
pub mod mock_fs;

pub use mock_fs::MockFileSystem;
