//! 工廠狀態文檔
//!
//! 整座工廠共用的單一文檔：所有集合由它獨占持有，每次變更以
//! 整份覆寫持久化。需求計算只借用唯讀切片，不持有任何集合。

use serde::{Deserialize, Serialize};

use crate::employee::Employee;
use crate::i18n::Language;
use crate::machine::Machine;
use crate::material::RawMaterial;
use crate::order::OrderDocument;
use crate::product::Product;
use crate::production::ProductionLogEntry;
use crate::purchase::PurchaseOrder;
use crate::qc::QcEntry;
use crate::quotation::Quotation;
use crate::warehouse::WarehouseSlot;

/// 工廠設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorySettings {
    /// 介面語言
    pub language: Language,

    /// 工廠名稱
    pub factory_name: String,
}

impl Default for FactorySettings {
    fn default() -> Self {
        Self {
            language: Language::Zh,
            factory_name: String::new(),
        }
    }
}

/// 工廠狀態文檔
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactoryState {
    /// 產品目錄
    pub products: Vec<Product>,

    /// 原料目錄
    pub raw_materials: Vec<RawMaterial>,

    /// 銷售訂單
    pub orders: Vec<OrderDocument>,

    /// 生產日誌
    pub production_logs: Vec<ProductionLogEntry>,

    /// 機台
    pub machines: Vec<Machine>,

    /// 員工
    pub employees: Vec<Employee>,

    /// 品檢記錄
    pub qc_entries: Vec<QcEntry>,

    /// 採購單
    pub purchase_orders: Vec<PurchaseOrder>,

    /// 報價單
    pub quotations: Vec<Quotation>,

    /// 倉儲儲位
    pub warehouse_slots: Vec<WarehouseSlot>,

    /// 工廠設定
    pub settings: FactorySettings,

    /// 文檔版本號（每次變更遞增）
    pub revision: u64,
}

impl FactoryState {
    /// 創建空的狀態文檔
    pub fn new() -> Self {
        Self::default()
    }

    /// 標記文檔已變更
    pub fn touch(&mut self) {
        self.revision += 1;
    }

    /// 依ID查找原料
    pub fn material_by_id(&self, material_id: &str) -> Option<&RawMaterial> {
        self.raw_materials.iter().find(|m| m.id == material_id)
    }

    /// 依ID查找原料（可變）
    pub fn material_by_id_mut(&mut self, material_id: &str) -> Option<&mut RawMaterial> {
        self.raw_materials.iter_mut().find(|m| m.id == material_id)
    }

    /// 依編號查找訂單
    pub fn order_by_id(&self, order_id: &str) -> Option<&OrderDocument> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// 依編號查找訂單（可變）
    pub fn order_by_id_mut(&mut self, order_id: &str) -> Option<&mut OrderDocument> {
        self.orders.iter_mut().find(|o| o.id == order_id)
    }

    /// 整批覆寫訂單集合
    pub fn replace_orders(&mut self, orders: Vec<OrderDocument>) {
        self.orders = orders;
        self.touch();
    }

    /// 整批覆寫原料集合
    pub fn replace_raw_materials(&mut self, raw_materials: Vec<RawMaterial>) {
        self.raw_materials = raw_materials;
        self.touch();
    }

    /// 收下一張採購單：入庫並遞增版本
    pub fn receive_purchase(&mut self, purchase_id: uuid::Uuid) -> crate::Result<()> {
        let po_index = self
            .purchase_orders
            .iter()
            .position(|po| po.id == purchase_id)
            .ok_or_else(|| crate::FactoryError::PurchaseNotOpen(purchase_id.to_string()))?;

        // 先取出採購單，避免與原料的可變借用重疊
        let mut po = self.purchase_orders[po_index].clone();
        let material = self
            .material_by_id_mut(&po.material_id)
            .ok_or_else(|| crate::FactoryError::MaterialNotFound(po.material_id.clone()))?;

        po.receive_into(material)?;
        self.purchase_orders[po_index] = po;
        self.touch();
        Ok(())
    }

    /// 接受報價並轉成草稿訂單
    pub fn promote_quotation(&mut self, quotation_id: &str, order_id: String) -> crate::Result<()> {
        let qt_index = self
            .quotations
            .iter()
            .position(|q| q.id == quotation_id)
            .ok_or_else(|| crate::FactoryError::QuotationNotFound(quotation_id.to_string()))?;

        let mut quotation = self.quotations[qt_index].clone();
        quotation.accept()?;
        let order = quotation.to_order(order_id)?;

        self.orders.push(order);
        self.quotations[qt_index] = quotation;
        self.touch();
        Ok(())
    }
}
