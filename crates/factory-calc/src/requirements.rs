//! 物料需求計算
//!
//! 訂單層級的 BOM 用料彙總：逐明細行展開產品 BOM，按物料累加
//! 需求量並對照現有庫存。純函數，每次呼叫從零重算，不在呼叫
//! 之間保留任何狀態。

use std::collections::HashMap;

use factory_core::material::DEFAULT_UNIT;
use factory_core::{OrderDocument, Product, RawMaterial};
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::resolver;

/// 單一物料的需求彙總（計算後即丟，不持久化）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialRequirement {
    /// 顯示名稱
    pub name: String,

    /// 需求總量
    pub needed: Decimal,

    /// 現有庫存快照
    pub current: Decimal,

    /// 計量單位
    pub unit: String,
}

impl MaterialRequirement {
    /// 是否缺料（嚴格大於；剛好足夠不算缺料）
    pub fn is_shortage(&self) -> bool {
        self.needed > self.current
    }

    /// 缺口數量
    pub fn shortfall(&self) -> Decimal {
        if self.is_shortage() {
            self.needed - self.current
        } else {
            Decimal::ZERO
        }
    }
}

/// 物料ID → 需求彙總
pub type RequirementMap = HashMap<String, MaterialRequirement>;

/// 計算一張訂單的物料需求
///
/// 缺漏參照一律降級而不報錯：找不到產品的明細行貢獻零需求；
/// 找不到物料時以 BOM 行記錄的名稱與零庫存列出，缺料照樣被
/// 標示出來而不是被吞掉。
pub fn compute_requirements(
    order: &OrderDocument,
    products: &[Product],
    materials: &[RawMaterial],
) -> RequirementMap {
    let mut requirements = RequirementMap::new();

    for item in &order.items {
        let product = match resolver::find_product(products, &item.product_ref) {
            Some(p) => p,
            None => {
                tracing::debug!("找不到產品 {}，明細行跳過", item.product_ref);
                continue;
            }
        };

        for line in &product.bom {
            let partial_need = line.quantity_per_unit * item.quantity;

            let entry = requirements
                .entry(line.material_id.clone())
                .or_insert_with(|| match resolver::find_material(materials, &line.material_id) {
                    Some(material) => MaterialRequirement {
                        name: material.name.clone(),
                        needed: Decimal::ZERO,
                        current: material.quantity,
                        unit: material.unit.clone(),
                    },
                    None => {
                        tracing::debug!("找不到物料 {}，以零庫存列出", line.material_id);
                        MaterialRequirement {
                            name: line.material_name.clone(),
                            needed: Decimal::ZERO,
                            current: Decimal::ZERO,
                            unit: DEFAULT_UNIT.to_string(),
                        }
                    }
                });
            entry.needed += partial_need;
        }
    }

    requirements
}

/// 訂單層級缺料判定：任一物料缺料即為缺料
pub fn has_shortage(requirements: &RequirementMap) -> bool {
    requirements.values().any(|r| r.is_shortage())
}

/// 列出缺料物料ID（排序後，供明細視圖顯示）
pub fn shortages(requirements: &RequirementMap) -> Vec<&str> {
    let mut ids: Vec<&str> = requirements
        .iter()
        .filter(|(_, r)| r.is_shortage())
        .map(|(id, _)| id.as_str())
        .collect();
    ids.sort_unstable();
    ids
}

/// 批次計算多張訂單的需求（訂單列表逐行渲染用）
///
/// 每張訂單的計算彼此獨立，無共享可變狀態，直接平行展開。
pub fn compute_requirements_bulk<'a>(
    orders: &'a [OrderDocument],
    products: &[Product],
    materials: &[RawMaterial],
) -> Vec<(&'a str, RequirementMap)> {
    orders
        .par_iter()
        .map(|order| {
            (
                order.id.as_str(),
                compute_requirements(order, products, materials),
            )
        })
        .collect()
}
