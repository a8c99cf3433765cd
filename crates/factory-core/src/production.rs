//! 生產日誌模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 生產狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductionStatus {
    /// 尚未開始
    NotStarted,
    /// 生產中
    Running,
    /// 暫停
    Paused,
    /// 已完成
    Done,
}

/// 生產日誌記錄
///
/// 訂單核准時為每一明細行生成一筆占位記錄（零產量、尚未開始），
/// 之後由現場回報逐步累計產量。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionLogEntry {
    /// 記錄ID
    pub id: Uuid,

    /// 來源訂單編號
    pub order_id: String,

    /// 產品參照（與訂單明細行一致）
    pub product_ref: String,

    /// 計劃產量
    pub planned_quantity: Decimal,

    /// 已回報產量
    pub produced_quantity: Decimal,

    /// 生產狀態
    pub status: ProductionStatus,

    /// 指派機台
    pub machine_id: Option<String>,
}

impl ProductionLogEntry {
    /// 創建核准時的占位記錄
    pub fn placeholder(order_id: String, product_ref: String, planned_quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_ref,
            planned_quantity,
            produced_quantity: Decimal::ZERO,
            status: ProductionStatus::NotStarted,
            machine_id: None,
        }
    }

    /// 建構器模式：指派機台
    pub fn with_machine_id(mut self, machine_id: String) -> Self {
        self.machine_id = Some(machine_id);
        self
    }

    /// 回報產量（累計；達到計劃產量即完成）
    pub fn record_output(&mut self, quantity: Decimal) {
        self.produced_quantity += quantity;
        self.status = if self.produced_quantity >= self.planned_quantity {
            ProductionStatus::Done
        } else {
            ProductionStatus::Running
        };
    }

    /// 檢查是否已完成
    pub fn is_complete(&self) -> bool {
        self.status == ProductionStatus::Done
    }
}
