//! # Factory Core
//!
//! 工廠營運核心資料模型與類型定義

pub mod employee;
pub mod i18n;
pub mod machine;
pub mod material;
pub mod order;
pub mod product;
pub mod production;
pub mod purchase;
pub mod qc;
pub mod quotation;
pub mod state;
pub mod warehouse;

// Re-export 主要類型
pub use employee::Employee;
pub use i18n::Language;
pub use machine::{Machine, MachineStatus};
pub use material::RawMaterial;
pub use order::{OrderDocument, OrderLineItem, OrderStatus};
pub use product::{BomLine, Product};
pub use production::{ProductionLogEntry, ProductionStatus};
pub use purchase::{PurchaseOrder, PurchaseStatus};
pub use qc::{QcEntry, QcResult};
pub use quotation::{Quotation, QuotationStatus};
pub use state::{FactorySettings, FactoryState};
pub use warehouse::WarehouseSlot;

use rust_decimal::Decimal;

/// 工廠核心錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    #[error("庫存不足: 物料 {material_id} 需要 {required}, 可用 {available}")]
    InsufficientStock {
        material_id: String,
        required: Decimal,
        available: Decimal,
    },

    #[error("找不到訂單: {0}")]
    OrderNotFound(String),

    #[error("找不到物料: {0}")]
    MaterialNotFound(String),

    #[error("無效的狀態轉換: {from} → {to}")]
    InvalidTransition { from: String, to: String },

    #[error("採購單 {0} 不是待收貨狀態")]
    PurchaseNotOpen(String),

    #[error("找不到報價單: {0}")]
    QuotationNotFound(String),

    #[error("報價單 {0} 不是待回覆狀態")]
    QuotationNotPending(String),

    #[error("報價單 {0} 尚未被接受")]
    QuotationNotAccepted(String),

    #[error("文檔序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FactoryError>;
