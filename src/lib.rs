//! # Factory
//!
//! 單一工廠營運核心：狀態文檔、BOM 物料需求計算、持久化閘道。
//! 各子 crate 以別名重新匯出，呼叫端不必逐一列依賴。

pub use factory_calc as calc;
pub use factory_core as model;
pub use factory_store as store;

/// 日誌初始化
pub mod telemetry {
    /// 安裝全域 tracing 訂閱器（重複呼叫安全，後續呼叫為 no-op）
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_target(false).try_init();
    }
}
