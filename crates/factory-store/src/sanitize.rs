//! 寫入前淨化
//!
//! 整份覆寫前先淨化物件圖：上游編輯器會在物件上留下未填的
//! null 欄位，遞迴剔除後再落盤。陣列保留原有位置與長度，
//! BOM 行與訂單明細的順序是有意義的。

use serde_json::Value;

/// 淨化文檔：遞迴移除物件中的 null 欄位
pub fn sanitize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let cleaned = map
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(key, v)| (key, sanitize(v)))
                .collect();
            Value::Object(cleaned)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize).collect()),
        other => other,
    }
}
