//! 倉儲儲位模型

use serde::{Deserialize, Serialize};

/// 倉儲儲位
///
/// 倉庫平面圖上的一格：位置由版面編輯器拖放決定，
/// 儲位可存放一種原料或留空。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseSlot {
    /// 儲位ID
    pub id: String,

    /// 儲位標籤（如 "A-03"）
    pub label: String,

    /// 平面圖列位置
    pub row: u32,

    /// 平面圖欄位置
    pub col: u32,

    /// 存放的物料ID
    pub material_id: Option<String>,
}

impl WarehouseSlot {
    /// 創建新的空儲位
    pub fn new(id: String, label: String, row: u32, col: u32) -> Self {
        Self {
            id,
            label,
            row,
            col,
            material_id: None,
        }
    }

    /// 指派物料進儲位
    pub fn assign_material(&mut self, material_id: String) {
        self.material_id = Some(material_id);
    }

    /// 清空儲位
    pub fn clear(&mut self) {
        self.material_id = None;
    }

    /// 拖放移動到新位置
    pub fn move_to(&mut self, row: u32, col: u32) {
        self.row = row;
        self.col = col;
    }

    /// 檢查儲位是否有存料
    pub fn is_occupied(&self) -> bool {
        self.material_id.is_some()
    }
}
