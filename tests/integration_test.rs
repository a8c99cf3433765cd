//! 集成測試

use chrono::NaiveDate;
use factory_calc::{apply_approval, compute_requirements, has_shortage};
use factory_core::*;
use factory_store::{Collection, DirtyTracker, InMemoryGateway, StateGateway};
use rust_decimal::Decimal;

/// 建立測試工廠：Widget 的 BOM 為 [(MatA, 0.5), (MatB, 2)]，
/// MatA 庫存 3，MatB 庫存 30
fn build_factory() -> FactoryState {
    let mut state = FactoryState::new();

    state.products.push(
        Product::new("P-W".to_string(), "Widget".to_string())
            .with_bom_line(BomLine::new(
                "MatA".to_string(),
                "A 料".to_string(),
                Decimal::new(5, 1), // 0.5
            ))
            .with_bom_line(BomLine::new(
                "MatB".to_string(),
                "B 料".to_string(),
                Decimal::from(2),
            )),
    );
    state.raw_materials.push(
        RawMaterial::new("MatA".to_string(), "A 料".to_string(), Decimal::from(3))
            .with_cost_per_unit(Decimal::from(12)),
    );
    state.raw_materials.push(RawMaterial::new(
        "MatB".to_string(),
        "B 料".to_string(),
        Decimal::from(30),
    ));
    state.machines.push(Machine::new(
        "MC-01".to_string(),
        "海天 1 號機".to_string(),
        Decimal::from(160),
    ));
    state.employees.push(Employee::new(
        "E-012".to_string(),
        "陳美玲".to_string(),
        "品檢員".to_string(),
    ));
    let mut slot = WarehouseSlot::new("WS-01".to_string(), "A-03".to_string(), 0, 2);
    slot.assign_material("MatA".to_string());
    state.warehouse_slots.push(slot);

    state.orders.push(
        OrderDocument::new(
            "SO-1".to_string(),
            "測試客戶".to_string(),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        )
        .with_item(OrderLineItem::new("Widget".to_string(), Decimal::from(10))),
    );

    state
}

#[test]
fn test_order_to_approval_full_cycle() {
    // 完整流程：需求計算 → 缺料擋下審批 → 採購補料 → 再審批核准
    factory::telemetry::init_tracing();
    let mut state = build_factory();

    // 1. 需求計算
    let order = state.order_by_id("SO-1").unwrap();
    let requirements = compute_requirements(order, &state.products, &state.raw_materials);

    // MatA: 需求 5、庫存 3 → 缺料；MatB: 需求 20、庫存 30 → 足夠
    assert_eq!(requirements["MatA"].needed, Decimal::from(5));
    assert!(requirements["MatA"].is_shortage());
    assert_eq!(requirements["MatB"].needed, Decimal::from(20));
    assert!(!requirements["MatB"].is_shortage());
    assert!(has_shortage(&requirements));

    // 2. 審批被缺料擋下：轉入待料檢查，不生成生產記錄
    let outcome = apply_approval(&mut state, "SO-1").unwrap();
    assert!(!outcome.is_approved());
    assert_eq!(
        state.order_by_id("SO-1").unwrap().status,
        OrderStatus::MaterialChecking
    );
    assert!(state.production_logs.is_empty());

    // 3. 採購 MatA 並收貨：庫存 3 → 13
    let po = PurchaseOrder::new("MatA".to_string(), Decimal::from(10))
        .with_supplier("台塑".to_string());
    let po_id = po.id;
    state.purchase_orders.push(po);
    state.receive_purchase(po_id).unwrap();
    assert_eq!(
        state.material_by_id("MatA").unwrap().quantity,
        Decimal::from(13)
    );

    // 4. 再審批：核准並為唯一明細行生成一筆零產量占位記錄
    let outcome = apply_approval(&mut state, "SO-1").unwrap();
    assert!(outcome.is_approved());
    assert_eq!(
        state.order_by_id("SO-1").unwrap().status,
        OrderStatus::Approved
    );
    assert_eq!(state.production_logs.len(), 1);
    let log = &state.production_logs[0];
    assert_eq!(log.order_id, "SO-1");
    assert_eq!(log.planned_quantity, Decimal::from(10));
    assert_eq!(log.produced_quantity, Decimal::ZERO);
    assert_eq!(log.status, ProductionStatus::NotStarted);
}

#[test]
fn test_state_survives_gateway_round_trip() {
    // 審批後的狀態經閘道整份覆寫再載入，內容不變
    let mut state = build_factory();
    apply_approval(&mut state, "SO-1").unwrap(); // 缺料 → 待料檢查

    let gateway = InMemoryGateway::with_initial_state(&state).unwrap();
    let loaded = gateway.load().unwrap();

    assert_eq!(loaded.revision, state.revision);
    assert_eq!(
        loaded.order_by_id("SO-1").unwrap().status,
        OrderStatus::MaterialChecking
    );
    assert_eq!(loaded.products[0].bom.len(), 2);
    assert_eq!(
        loaded.material_by_id("MatA").unwrap().quantity,
        Decimal::from(3)
    );
    // 機台 notes 為 None，淨化後載入仍為 None
    assert!(loaded.machines[0].notes.is_none());
    // 員工與儲位集合同樣整份來回
    assert_eq!(loaded.employees[0].name, "陳美玲");
    assert_eq!(
        loaded.warehouse_slots[0].material_id.as_deref(),
        Some("MatA")
    );

    // 載入的快照重算需求，結果與原狀態一致
    let requirements = compute_requirements(
        loaded.order_by_id("SO-1").unwrap(),
        &loaded.products,
        &loaded.raw_materials,
    );
    assert!(has_shortage(&requirements));
}

#[test]
fn test_order_list_bulk_requirements() {
    // 訂單列表逐行計算：兩張訂單各自得到獨立的需求彙總
    let mut state = build_factory();
    state.orders.push(
        OrderDocument::new(
            "SO-2".to_string(),
            "另一客戶".to_string(),
            NaiveDate::from_ymd_opt(2025, 11, 2).unwrap(),
        )
        .with_item(OrderLineItem::new("Widget".to_string(), Decimal::from(2))),
    );

    let rows = factory_calc::compute_requirements_bulk(
        &state.orders,
        &state.products,
        &state.raw_materials,
    );

    assert_eq!(rows.len(), 2);
    let so1 = rows.iter().find(|(id, _)| *id == "SO-1").unwrap();
    let so2 = rows.iter().find(|(id, _)| *id == "SO-2").unwrap();
    assert!(has_shortage(&so1.1)); // 10 件：MatA 缺料
    assert!(!has_shortage(&so2.1)); // 2 件：MatA 需求 1 <= 庫存 3
}

#[test]
fn test_quotation_to_qc_paper_trail() {
    // 報價單接受 → 轉草稿訂單；品檢記錄落在同一份文檔
    let mut state = build_factory();
    state.quotations.push(
        Quotation::new(
            "QT-1".to_string(),
            "另一客戶".to_string(),
            NaiveDate::from_ymd_opt(2025, 10, 20).unwrap(),
        )
        .with_item(OrderLineItem::new("Widget".to_string(), Decimal::from(2)))
        .with_quoted_total(Decimal::from(9000)),
    );

    state.promote_quotation("QT-1", "SO-2".to_string()).unwrap();
    assert_eq!(
        state.order_by_id("SO-2").unwrap().status,
        OrderStatus::Draft
    );

    state.qc_entries.push(
        QcEntry::new(
            "SO-2".to_string(),
            "Widget".to_string(),
            Decimal::from(2),
            NaiveDate::from_ymd_opt(2025, 11, 10).unwrap(),
        )
        .with_inspector("陳美玲".to_string()),
    );

    let gateway = InMemoryGateway::with_initial_state(&state).unwrap();
    let loaded = gateway.load().unwrap();
    assert_eq!(loaded.quotations[0].status, QuotationStatus::Accepted);
    assert_eq!(loaded.qc_entries[0].result(), QcResult::Pass);
}

#[test]
fn test_save_skipped_until_collections_marked() {
    // 變更追蹤：沒有髒標記就略過整份覆寫
    let mut state = build_factory();
    let gateway = InMemoryGateway::with_initial_state(&state).unwrap();
    let mut tracker = DirtyTracker::new();

    assert!(!gateway.save_if_dirty(&state, &mut tracker).unwrap());

    // 審批改動了訂單與生產日誌兩個集合
    apply_approval(&mut state, "SO-1").unwrap();
    tracker.mark(Collection::Orders);
    tracker.mark(Collection::ProductionLogs);

    assert!(gateway.save_if_dirty(&state, &mut tracker).unwrap());
    assert!(!tracker.has_changes());
    assert_eq!(
        gateway.load().unwrap().order_by_id("SO-1").unwrap().status,
        OrderStatus::MaterialChecking
    );
}

#[test]
fn test_labels_follow_settings_language() {
    // 訂單狀態標籤依工廠設定的語言渲染
    let mut state = build_factory();
    let key = state.order_by_id("SO-1").unwrap().status.label_key();

    assert_eq!(i18n::translate(key, state.settings.language), "草稿");

    state.settings.language = Language::En;
    assert_eq!(i18n::translate(key, state.settings.language), "Draft");
}
