//! # Factory Store
//!
//! 工廠狀態文檔的持久化閘道

pub mod dirty;
pub mod gateway;
pub mod sanitize;

// Re-export 主要類型
pub use dirty::{Collection, DirtyTracker};
pub use gateway::{InMemoryGateway, StateGateway};
pub use sanitize::sanitize;

/// 持久化錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("尚未儲存任何文檔")]
    Empty,

    #[error("文檔序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("文檔鎖已中毒")]
    Poisoned,
}

pub type Result<T> = std::result::Result<T, StoreError>;
