//! 員工模型

use serde::{Deserialize, Serialize};

/// 員工
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// 員工ID
    pub id: String,

    /// 姓名
    pub name: String,

    /// 職務（自由文字，如 "射出技師"）
    pub role: String,

    /// 是否在職
    pub active: bool,
}

impl Employee {
    /// 創建新的員工（在職）
    pub fn new(id: String, name: String, role: String) -> Self {
        Self {
            id,
            name,
            role,
            active: true,
        }
    }

    /// 標記離職
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
