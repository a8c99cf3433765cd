//! 產品與 BOM 模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// BOM 明細行
///
/// 一件成品消耗的單一原料用量。行內另外記錄物料名稱：上游資料
/// 逐步補登，目錄可能還查不到該物料，名稱此時作為顯示後備。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BomLine {
    /// 物料ID
    pub material_id: String,

    /// 物料名稱（BOM 內本地記錄）
    pub material_name: String,

    /// 單位用量（生產一件成品所需數量，>= 0）
    pub quantity_per_unit: Decimal,
}

impl BomLine {
    /// 創建新的 BOM 明細行
    pub fn new(material_id: String, material_name: String, quantity_per_unit: Decimal) -> Self {
        Self {
            material_id,
            material_name,
            quantity_per_unit,
        }
    }
}

/// 成品
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: String,

    /// 產品名稱
    pub name: String,

    /// BOM（有序；可為空，表示用料尚未定義）
    pub bom: Vec<BomLine>,
}

impl Product {
    /// 創建新的產品（BOM 為空）
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            bom: Vec::new(),
        }
    }

    /// 建構器模式：添加 BOM 明細行
    pub fn with_bom_line(mut self, line: BomLine) -> Self {
        self.bom.push(line);
        self
    }

    /// 檢查是否已定義 BOM
    pub fn has_bom(&self) -> bool {
        !self.bom.is_empty()
    }
}
