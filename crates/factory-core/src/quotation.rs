//! 報價單模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::{OrderDocument, OrderLineItem};

/// 報價單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotationStatus {
    /// 待回覆
    Pending,
    /// 已接受
    Accepted,
    /// 已拒絕
    Rejected,
}

impl QuotationStatus {
    /// 對應的多語言標籤鍵
    pub fn label_key(&self) -> &'static str {
        match self {
            QuotationStatus::Pending => "quotation.status.pending",
            QuotationStatus::Accepted => "quotation.status.accepted",
            QuotationStatus::Rejected => "quotation.status.rejected",
        }
    }
}

/// 報價單
///
/// 明細行與訂單同一形狀；客戶接受後轉成草稿訂單進入審批流程。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    /// 報價單編號
    pub id: String,

    /// 客戶名稱
    pub customer: String,

    /// 建立日期
    pub created_at: NaiveDate,

    /// 報價單狀態
    pub status: QuotationStatus,

    /// 明細行
    pub items: Vec<OrderLineItem>,

    /// 報價總額
    pub quoted_total: Decimal,
}

impl Quotation {
    /// 創建新的報價單（待回覆）
    pub fn new(id: String, customer: String, created_at: NaiveDate) -> Self {
        Self {
            id,
            customer,
            created_at,
            status: QuotationStatus::Pending,
            items: Vec::new(),
            quoted_total: Decimal::ZERO,
        }
    }

    /// 建構器模式：添加明細行
    pub fn with_item(mut self, item: OrderLineItem) -> Self {
        self.items.push(item);
        self
    }

    /// 建構器模式：設置報價總額
    pub fn with_quoted_total(mut self, quoted_total: Decimal) -> Self {
        self.quoted_total = quoted_total;
        self
    }

    /// 客戶接受報價（僅待回覆可接受）
    pub fn accept(&mut self) -> crate::Result<()> {
        if self.status != QuotationStatus::Pending {
            return Err(crate::FactoryError::QuotationNotPending(self.id.clone()));
        }
        self.status = QuotationStatus::Accepted;
        Ok(())
    }

    /// 客戶拒絕報價（僅待回覆可拒絕）
    pub fn reject(&mut self) -> crate::Result<()> {
        if self.status != QuotationStatus::Pending {
            return Err(crate::FactoryError::QuotationNotPending(self.id.clone()));
        }
        self.status = QuotationStatus::Rejected;
        Ok(())
    }

    /// 轉成草稿訂單（僅已接受可轉）
    pub fn to_order(&self, order_id: String) -> crate::Result<OrderDocument> {
        if self.status != QuotationStatus::Accepted {
            return Err(crate::FactoryError::QuotationNotAccepted(self.id.clone()));
        }
        let mut order = OrderDocument::new(order_id, self.customer.clone(), self.created_at);
        order.items = self.items.clone();
        Ok(order)
    }
}
