//! 品檢記錄模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 品檢結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QcResult {
    /// 合格
    Pass,
    /// 不合格
    Fail,
}

impl QcResult {
    /// 對應的多語言標籤鍵
    pub fn label_key(&self) -> &'static str {
        match self {
            QcResult::Pass => "qc.result.pass",
            QcResult::Fail => "qc.result.fail",
        }
    }
}

/// 品檢記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QcEntry {
    /// 記錄ID
    pub id: Uuid,

    /// 來源訂單編號
    pub order_id: String,

    /// 產品參照
    pub product_ref: String,

    /// 檢驗數量
    pub inspected_quantity: Decimal,

    /// 不良數量
    pub defect_quantity: Decimal,

    /// 檢驗日期
    pub inspected_at: NaiveDate,

    /// 檢驗員
    pub inspector: Option<String>,
}

impl QcEntry {
    /// 創建新的品檢記錄（無不良）
    pub fn new(
        order_id: String,
        product_ref: String,
        inspected_quantity: Decimal,
        inspected_at: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_ref,
            inspected_quantity,
            defect_quantity: Decimal::ZERO,
            inspected_at,
            inspector: None,
        }
    }

    /// 建構器模式：登記不良數量
    pub fn with_defects(mut self, defect_quantity: Decimal) -> Self {
        self.defect_quantity = defect_quantity;
        self
    }

    /// 建構器模式：設置檢驗員
    pub fn with_inspector(mut self, inspector: String) -> Self {
        self.inspector = Some(inspector);
        self
    }

    /// 品檢結果：零不良即合格
    pub fn result(&self) -> QcResult {
        if self.defect_quantity.is_zero() {
            QcResult::Pass
        } else {
            QcResult::Fail
        }
    }

    /// 不良率（檢驗數量為零時視為零）
    pub fn defect_rate(&self) -> Decimal {
        if self.inspected_quantity.is_zero() {
            Decimal::ZERO
        } else {
            self.defect_quantity / self.inspected_quantity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_entry() {
        let entry = QcEntry::new(
            "SO-1".to_string(),
            "收納箱".to_string(),
            Decimal::from(200),
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
        );

        assert_eq!(entry.result(), QcResult::Pass);
        assert_eq!(entry.defect_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_defect_rate() {
        let entry = QcEntry::new(
            "SO-1".to_string(),
            "收納箱".to_string(),
            Decimal::from(200),
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
        )
        .with_defects(Decimal::from(5))
        .with_inspector("陳美玲".to_string());

        assert_eq!(entry.result(), QcResult::Fail);
        assert_eq!(entry.defect_rate(), Decimal::new(25, 3)); // 0.025
        assert_eq!(entry.inspector.as_deref(), Some("陳美玲"));
    }

    #[test]
    fn test_zero_inspected_has_zero_rate() {
        let entry = QcEntry::new(
            "SO-2".to_string(),
            "瓶蓋".to_string(),
            Decimal::ZERO,
            NaiveDate::from_ymd_opt(2025, 11, 4).unwrap(),
        );

        assert_eq!(entry.defect_rate(), Decimal::ZERO);
    }
}
