//! 狀態文檔閘道
//!
//! 讀取與覆寫整份工廠狀態文檔。覆寫為後寫者勝：無鎖定、無
//! 合併、無交易，兩個同時編輯的人會互相覆蓋（沿用來源系統
//! 的持久化模型）。

use std::sync::Mutex;

use factory_core::FactoryState;
use serde_json::Value;

use crate::dirty::DirtyTracker;
use crate::sanitize::sanitize;
use crate::{Result, StoreError};

/// 狀態文檔閘道
pub trait StateGateway {
    /// 載入整份文檔
    fn load(&self) -> Result<FactoryState>;

    /// 覆寫整份文檔
    fn save(&self, state: &FactoryState) -> Result<()>;

    /// 有變更才覆寫；回傳是否實際寫入
    ///
    /// 依追蹤器判斷：無髒標記時整份覆寫直接略過，寫入成功後
    /// 清除所有標記。
    fn save_if_dirty(&self, state: &FactoryState, tracker: &mut DirtyTracker) -> Result<bool> {
        if !tracker.has_changes() {
            tracing::debug!("無集合變更，略過覆寫");
            return Ok(false);
        }
        self.save(state)?;
        tracker.clear();
        Ok(true)
    }
}

/// 記憶體閘道（單機模式與測試）
///
/// 遠端文檔庫的本地替身：同樣的整份覆寫語義，文檔以淨化後
/// 的 JSON 形式存放。
pub struct InMemoryGateway {
    document: Mutex<Option<Value>>,
}

impl InMemoryGateway {
    /// 創建空的閘道
    pub fn new() -> Self {
        Self {
            document: Mutex::new(None),
        }
    }

    /// 以初始狀態創建閘道
    pub fn with_initial_state(state: &FactoryState) -> Result<Self> {
        let gateway = Self::new();
        gateway.save(state)?;
        Ok(gateway)
    }

    /// 目前儲存的文檔版本號（尚無文檔時為 None）
    pub fn stored_revision(&self) -> Result<Option<u64>> {
        let guard = self.document.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(guard
            .as_ref()
            .and_then(|doc| doc.get("revision"))
            .and_then(Value::as_u64))
    }
}

impl StateGateway for InMemoryGateway {
    fn load(&self) -> Result<FactoryState> {
        let guard = self.document.lock().map_err(|_| StoreError::Poisoned)?;
        let document = guard.clone().ok_or(StoreError::Empty)?;
        Ok(serde_json::from_value(document)?)
    }

    fn save(&self, state: &FactoryState) -> Result<()> {
        let document = sanitize(serde_json::to_value(state)?);
        let mut guard = self.document.lock().map_err(|_| StoreError::Poisoned)?;
        tracing::debug!("覆寫狀態文檔，版本 {}", state.revision);
        *guard = Some(document);
        Ok(())
    }
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}
