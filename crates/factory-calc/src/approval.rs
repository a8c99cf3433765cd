//! 訂單審批決策
//!
//! 領域裡唯一的狀態機：`Draft → Approved`，缺料時改走
//! `Draft → MaterialChecking`。審批前的檢查純唯讀，先算後改，
//! 不需要重試或回滾。

use factory_core::{
    FactoryError, FactoryState, OrderDocument, OrderStatus, Product, ProductionLogEntry,
    RawMaterial, Result,
};

use crate::requirements::{compute_requirements, has_shortage, RequirementMap};

/// 審批結果
#[derive(Debug, Clone)]
pub struct ApprovalOutcome {
    /// 訂單編號
    pub order_id: String,

    /// 審批後狀態
    pub next_status: OrderStatus,

    /// 需求彙總（供介面顯示缺料明細）
    pub requirements: RequirementMap,

    /// 生成的生產日誌占位記錄（缺料時為空）
    pub production_logs: Vec<ProductionLogEntry>,
}

impl ApprovalOutcome {
    /// 檢查是否核准
    pub fn is_approved(&self) -> bool {
        self.next_status == OrderStatus::Approved
    }
}

/// 審批決策（純函數）
///
/// 任一物料缺料 → 轉入待料檢查，不生成任何生產記錄；
/// 無缺料 → 核准，並為每一明細行生成一筆零產量占位記錄。
pub fn decide_approval(
    order: &OrderDocument,
    products: &[Product],
    materials: &[RawMaterial],
) -> Result<ApprovalOutcome> {
    if !order.status.can_approve() {
        return Err(FactoryError::InvalidTransition {
            from: order.status.label_key().to_string(),
            to: OrderStatus::Approved.label_key().to_string(),
        });
    }

    let requirements = compute_requirements(order, products, materials);

    if has_shortage(&requirements) {
        tracing::info!("訂單 {} 缺料，轉入待料檢查", order.id);
        return Ok(ApprovalOutcome {
            order_id: order.id.clone(),
            next_status: OrderStatus::MaterialChecking,
            requirements,
            production_logs: Vec::new(),
        });
    }

    let production_logs = order
        .items
        .iter()
        .map(|item| {
            ProductionLogEntry::placeholder(
                order.id.clone(),
                item.product_ref.clone(),
                item.quantity,
            )
        })
        .collect();

    tracing::info!("訂單 {} 核准", order.id);
    Ok(ApprovalOutcome {
        order_id: order.id.clone(),
        next_status: OrderStatus::Approved,
        requirements,
        production_logs,
    })
}

/// 以工廠狀態自身的快照執行審批並套用結果
///
/// 決策與套用分離：先對唯讀切片做決策，再回寫訂單狀態與
/// 生產日誌，最後遞增文檔版本。
pub fn apply_approval(state: &mut FactoryState, order_id: &str) -> Result<ApprovalOutcome> {
    let order = state
        .order_by_id(order_id)
        .ok_or_else(|| FactoryError::OrderNotFound(order_id.to_string()))?;

    let outcome = decide_approval(order, &state.products, &state.raw_materials)?;

    let order = state
        .order_by_id_mut(order_id)
        .ok_or_else(|| FactoryError::OrderNotFound(order_id.to_string()))?;
    order.transition_to(outcome.next_status)?;

    state
        .production_logs
        .extend(outcome.production_logs.iter().cloned());
    state.touch();

    Ok(outcome)
}
