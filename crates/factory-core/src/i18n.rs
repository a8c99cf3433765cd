//! 多語言標籤表
//!
//! 固定鍵值的靜態查表，支援中／英／泰三語。查無此鍵時回傳
//! 鍵本身，介面照常渲染，不因缺字串中斷。

use serde::{Deserialize, Serialize};

/// 介面語言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    /// 中文
    Zh,
    /// 英文
    En,
    /// 泰文
    Th,
}

impl Language {
    fn index(self) -> usize {
        match self {
            Language::Zh => 0,
            Language::En => 1,
            Language::Th => 2,
        }
    }
}

/// 查表：[中文, 英文, 泰文]
fn lookup(key: &str) -> Option<[&'static str; 3]> {
    let entry = match key {
        "order.status.draft" => ["草稿", "Draft", "ฉบับร่าง"],
        "order.status.material_checking" => ["待料檢查", "Material Checking", "ตรวจสอบวัตถุดิบ"],
        "order.status.approved" => ["已核准", "Approved", "อนุมัติแล้ว"],
        "order.status.in_production" => ["生產中", "In Production", "กำลังผลิต"],
        "order.status.completed" => ["已完成", "Completed", "เสร็จสิ้น"],
        "machine.status.idle" => ["閒置", "Idle", "ว่าง"],
        "machine.status.running" => ["運轉中", "Running", "กำลังทำงาน"],
        "machine.status.maintenance" => ["保養中", "Maintenance", "ซ่อมบำรุง"],
        "machine.status.down" => ["故障停機", "Down", "เสีย"],
        "qc.result.pass" => ["合格", "Pass", "ผ่าน"],
        "qc.result.fail" => ["不合格", "Fail", "ไม่ผ่าน"],
        "quotation.status.pending" => ["待回覆", "Pending", "รอดำเนินการ"],
        "quotation.status.accepted" => ["已接受", "Accepted", "ตอบรับแล้ว"],
        "quotation.status.rejected" => ["已拒絕", "Rejected", "ปฏิเสธ"],
        "material.shortage" => ["缺料", "Shortage", "วัตถุดิบขาด"],
        "material.needed" => ["需求量", "Needed", "ที่ต้องการ"],
        "material.current" => ["現有庫存", "In Stock", "คงเหลือ"],
        "unit.kg" => ["公斤", "kg", "กก."],
        _ => return None,
    };
    Some(entry)
}

/// 翻譯指定鍵
pub fn translate(key: &str, language: Language) -> &str {
    match lookup(key) {
        Some(entry) => entry[language.index()],
        None => key,
    }
}
