//! 參照解析
//!
//! 上游資料鍵值不一致：舊記錄以名稱參照、新記錄以ID參照。
//! 查找因此採兩段式後備，先後順序固定且不可對調（舊單據依賴
//! 名稱優先比對）。

use factory_core::{Product, RawMaterial};

/// 解析產品參照：先比對名稱，再比對ID
pub fn find_product<'a>(products: &'a [Product], product_ref: &str) -> Option<&'a Product> {
    products
        .iter()
        .find(|p| p.name == product_ref)
        .or_else(|| products.iter().find(|p| p.id == product_ref))
}

/// 解析物料參照：先比對ID，再比對名稱
pub fn find_material<'a>(
    materials: &'a [RawMaterial],
    material_ref: &str,
) -> Option<&'a RawMaterial> {
    materials
        .iter()
        .find(|m| m.id == material_ref)
        .or_else(|| materials.iter().find(|m| m.name == material_ref))
}
