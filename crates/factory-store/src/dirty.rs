//! 變更追蹤
//!
//! 介面逐頁編輯狀態文檔的個別集合；追蹤器記下哪些集合改過，
//! 閘道據此在沒有任何變更時略過整份覆寫。

use std::collections::HashSet;

/// 狀態文檔的集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// 產品目錄
    Products,
    /// 原料目錄
    RawMaterials,
    /// 銷售訂單
    Orders,
    /// 生產日誌
    ProductionLogs,
    /// 機台
    Machines,
    /// 員工
    Employees,
    /// 品檢記錄
    QcEntries,
    /// 採購單
    PurchaseOrders,
    /// 報價單
    Quotations,
    /// 倉儲儲位
    WarehouseSlots,
    /// 工廠設定
    Settings,
}

/// 變更追蹤器
#[derive(Debug, Default)]
pub struct DirtyTracker {
    dirty: HashSet<Collection>,
}

impl DirtyTracker {
    /// 創建新的追蹤器（無變更）
    pub fn new() -> Self {
        Self::default()
    }

    /// 標記集合已變更
    pub fn mark(&mut self, collection: Collection) {
        self.dirty.insert(collection);
    }

    /// 檢查集合是否有變更
    pub fn is_dirty(&self, collection: Collection) -> bool {
        self.dirty.contains(&collection)
    }

    /// 檢查是否有任何變更
    pub fn has_changes(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// 清除所有標記（覆寫成功後呼叫）
    pub fn clear(&mut self) {
        self.dirty.clear();
    }

    /// 已變更的集合
    pub fn dirty_collections(&self) -> Vec<Collection> {
        self.dirty.iter().copied().collect()
    }
}
