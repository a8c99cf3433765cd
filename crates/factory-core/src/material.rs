//! 原料庫存模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 預設計量單位（目錄缺漏時的後備）
pub const DEFAULT_UNIT: &str = "kg";

/// 原料
///
/// `quantity` 是即時快照，由採購收貨與生產領用流程變動；
/// 需求計算只讀取，不回寫。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMaterial {
    /// 物料ID
    pub id: String,

    /// 物料名稱
    pub name: String,

    /// 現有庫存（可為小數）
    pub quantity: Decimal,

    /// 計量單位（自由文字，如 "kg"）
    pub unit: String,

    /// 單位成本
    pub cost_per_unit: Decimal,
}

impl RawMaterial {
    /// 創建新的原料記錄
    pub fn new(id: String, name: String, quantity: Decimal) -> Self {
        Self {
            id,
            name,
            quantity,
            unit: DEFAULT_UNIT.to_string(),
            cost_per_unit: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置計量單位
    pub fn with_unit(mut self, unit: String) -> Self {
        self.unit = unit;
        self
    }

    /// 建構器模式：設置單位成本
    pub fn with_cost_per_unit(mut self, cost_per_unit: Decimal) -> Self {
        self.cost_per_unit = cost_per_unit;
        self
    }

    /// 收貨入庫
    pub fn receive(&mut self, quantity: Decimal) {
        self.quantity += quantity;
    }

    /// 生產領用出庫
    pub fn consume(&mut self, quantity: Decimal) -> crate::Result<()> {
        if quantity > self.quantity {
            return Err(crate::FactoryError::InsufficientStock {
                material_id: self.id.clone(),
                required: quantity,
                available: self.quantity,
            });
        }
        self.quantity -= quantity;
        Ok(())
    }

    /// 庫存金額
    pub fn stock_value(&self) -> Decimal {
        self.quantity * self.cost_per_unit
    }
}
