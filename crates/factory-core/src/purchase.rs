//! 採購單模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::material::RawMaterial;

/// 採購單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseStatus {
    /// 待收貨
    Open,
    /// 已收貨
    Received,
    /// 已取消
    Cancelled,
}

/// 原料採購單
///
/// 收貨流程是變動原料庫存快照的入口；需求計算只讀快照，
/// 補料後由審批流程重新檢查。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// 採購單ID
    pub id: Uuid,

    /// 物料ID
    pub material_id: String,

    /// 採購數量
    pub quantity: Decimal,

    /// 供應商
    pub supplier: Option<String>,

    /// 採購單狀態
    pub status: PurchaseStatus,
}

impl PurchaseOrder {
    /// 創建新的採購單（待收貨）
    pub fn new(material_id: String, quantity: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            material_id,
            quantity,
            supplier: None,
            status: PurchaseStatus::Open,
        }
    }

    /// 建構器模式：設置供應商
    pub fn with_supplier(mut self, supplier: String) -> Self {
        self.supplier = Some(supplier);
        self
    }

    /// 收貨入庫：數量加進對應原料，採購單轉為已收貨
    pub fn receive_into(&mut self, material: &mut RawMaterial) -> crate::Result<()> {
        if self.status != PurchaseStatus::Open {
            return Err(crate::FactoryError::PurchaseNotOpen(self.id.to_string()));
        }
        if material.id != self.material_id {
            return Err(crate::FactoryError::MaterialNotFound(
                self.material_id.clone(),
            ));
        }
        material.receive(self.quantity);
        self.status = PurchaseStatus::Received;
        Ok(())
    }

    /// 取消採購單（僅待收貨可取消）
    pub fn cancel(&mut self) -> crate::Result<()> {
        if self.status != PurchaseStatus::Open {
            return Err(crate::FactoryError::PurchaseNotOpen(self.id.to_string()));
        }
        self.status = PurchaseStatus::Cancelled;
        Ok(())
    }
}
