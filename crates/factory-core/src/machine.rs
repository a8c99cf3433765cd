//! 機台模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 機台狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineStatus {
    /// 閒置
    Idle,
    /// 運轉中
    Running,
    /// 保養中
    Maintenance,
    /// 故障停機
    Down,
}

impl MachineStatus {
    /// 對應的多語言標籤鍵
    pub fn label_key(&self) -> &'static str {
        match self {
            MachineStatus::Idle => "machine.status.idle",
            MachineStatus::Running => "machine.status.running",
            MachineStatus::Maintenance => "machine.status.maintenance",
            MachineStatus::Down => "machine.status.down",
        }
    }
}

/// 射出成型機台
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    /// 機台ID
    pub id: String,

    /// 機台名稱
    pub name: String,

    /// 機台狀態
    pub status: MachineStatus,

    /// 鎖模噸數
    pub tonnage: Decimal,

    /// 備註
    pub notes: Option<String>,
}

impl Machine {
    /// 創建新的機台（閒置狀態）
    pub fn new(id: String, name: String, tonnage: Decimal) -> Self {
        Self {
            id,
            name,
            status: MachineStatus::Idle,
            tonnage,
            notes: None,
        }
    }

    /// 建構器模式：設置備註
    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    /// 更新機台狀態
    pub fn set_status(&mut self, status: MachineStatus) {
        self.status = status;
    }

    /// 檢查是否可排產
    pub fn is_available(&self) -> bool {
        self.status == MachineStatus::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_machine() {
        let machine = Machine::new(
            "MC-03".to_string(),
            "海天 3 號機".to_string(),
            Decimal::from(280),
        );

        assert_eq!(machine.status, MachineStatus::Idle);
        assert!(machine.is_available());
        assert_eq!(machine.tonnage, Decimal::from(280));
    }

    #[test]
    fn test_status_change() {
        let mut machine = Machine::new(
            "MC-01".to_string(),
            "海天 1 號機".to_string(),
            Decimal::from(160),
        )
        .with_notes("模具 T-88 裝機中".to_string());

        machine.set_status(MachineStatus::Running);
        assert!(!machine.is_available());

        machine.set_status(MachineStatus::Maintenance);
        assert_eq!(machine.status.label_key(), "machine.status.maintenance");
        assert_eq!(machine.notes.as_deref(), Some("模具 T-88 裝機中"));
    }
}
