//! 銷售訂單模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 訂單狀態
///
/// 審批只處理 `Draft` 與 `MaterialChecking`；缺料時轉入
/// `MaterialChecking`，補料後可再次嘗試審批。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// 草稿
    Draft,
    /// 待料檢查（審批時發現缺料）
    MaterialChecking,
    /// 已核准
    Approved,
    /// 生產中
    InProduction,
    /// 已完成
    Completed,
}

impl OrderStatus {
    /// 檢查是否可嘗試審批
    pub fn can_approve(&self) -> bool {
        matches!(self, OrderStatus::Draft | OrderStatus::MaterialChecking)
    }

    /// 對應的多語言標籤鍵
    pub fn label_key(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "order.status.draft",
            OrderStatus::MaterialChecking => "order.status.material_checking",
            OrderStatus::Approved => "order.status.approved",
            OrderStatus::InProduction => "order.status.in_production",
            OrderStatus::Completed => "order.status.completed",
        }
    }

    /// 狀態轉換表
    ///
    /// `MaterialChecking` 允許自轉換：再次檢查仍缺料時訂單留在原狀態。
    fn allows(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Draft, MaterialChecking)
                | (Draft, Approved)
                | (MaterialChecking, MaterialChecking)
                | (MaterialChecking, Approved)
                | (Approved, InProduction)
                | (InProduction, Completed)
        )
    }
}

/// 訂單明細行
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    /// 產品參照（舊資料記名稱、新資料記ID，解析時先比對名稱）
    pub product_ref: String,

    /// 訂購數量
    pub quantity: Decimal,
}

impl OrderLineItem {
    /// 創建新的明細行
    pub fn new(product_ref: String, quantity: Decimal) -> Self {
        Self {
            product_ref,
            quantity,
        }
    }
}

/// 銷售訂單文檔
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDocument {
    /// 訂單編號
    pub id: String,

    /// 客戶名稱
    pub customer: String,

    /// 建立日期
    pub created_at: NaiveDate,

    /// 訂單狀態
    pub status: OrderStatus,

    /// 明細行（有序）
    pub items: Vec<OrderLineItem>,
}

impl OrderDocument {
    /// 創建新的訂單（草稿狀態）
    pub fn new(id: String, customer: String, created_at: NaiveDate) -> Self {
        Self {
            id,
            customer,
            created_at,
            status: OrderStatus::Draft,
            items: Vec::new(),
        }
    }

    /// 建構器模式：添加明細行
    pub fn with_item(mut self, item: OrderLineItem) -> Self {
        self.items.push(item);
        self
    }

    /// 訂購總數量
    pub fn total_ordered_quantity(&self) -> Decimal {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// 狀態轉換（依轉換表驗證）
    pub fn transition_to(&mut self, next: OrderStatus) -> crate::Result<()> {
        if !self.status.allows(next) {
            return Err(crate::FactoryError::InvalidTransition {
                from: self.status.label_key().to_string(),
                to: next.label_key().to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}
