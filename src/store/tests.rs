// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of erd-canvas and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;
use std::rc::Rc;

use rstest::{fixture, rstest};

use super::{Change, ObserveTarget, Store};
use crate::command::{canvas, column, editor, table, Command};
use crate::layout::{FontConfig, Helper};
use crate::model::{SequentialIds, ShowKey, TableId};

type Log = Rc<RefCell<Vec<Change>>>;

fn record(store: &Store, target: ObserveTarget) -> (Log, super::Subscription) {
    let log: Log = Rc::default();
    let sink = Rc::clone(&log);
    let subscription = store.observe(target, move |change| sink.borrow_mut().push(change.clone()));
    (log, subscription)
}

fn add_table(store: &mut Store, ids: &mut SequentialIds) -> TableId {
    let command = table::add_table(store, ids);
    let Command::AddTable(data) = &command else {
        panic!("expected table.add");
    };
    let table_id = data.id.clone();
    store.dispatch(&command);
    table_id
}

#[fixture]
fn ids() -> SequentialIds {
    SequentialIds::new("t")
}

#[rstest]
fn table_observer_sees_child_changes_only_for_its_table(mut ids: SequentialIds) {
    let mut store = Store::new();
    let first = add_table(&mut store, &mut ids);
    let second = add_table(&mut store, &mut ids);
    let (log, _subscription) = record(&store, ObserveTarget::Table(first.clone()));

    let helper = Helper::new(|_: &str, _: &FontConfig| 80.0, FontConfig::default());
    store.dispatch(&table::change_table_name(&helper, &second, "orders"));
    assert!(log.borrow().is_empty());

    store.dispatch(&table::change_table_name(&helper, &first, "users"));
    store.dispatch(&column::add_column(&first, &mut ids));

    let targets: Vec<_> = log.borrow().iter().map(|c| c.target.clone()).collect();
    assert_eq!(
        targets,
        vec![
            ObserveTarget::Table(first.clone()),
            ObserveTarget::TableColumns(first.clone()),
        ]
    );
}

#[rstest]
fn multi_step_commands_notify_each_step(mut ids: SequentialIds) {
    let mut store = Store::new();
    add_table(&mut store, &mut ids);
    let (tables, _tables_sub) = record(&store, ObserveTarget::Tables);
    let (editor_log, _editor_sub) = record(&store, ObserveTarget::Editor);

    let second = add_table(&mut store, &mut ids);

    let keys: Vec<_> = tables.borrow().iter().map(|c| c.key).collect();
    // previous table deselected, then the new table pushed
    assert_eq!(keys, vec!["active", "tables"]);
    let editor_keys: Vec<_> = editor_log.borrow().iter().map(|c| c.key).collect();
    // old focus model ended, new one created
    assert_eq!(editor_keys, vec!["focusTable", "focusTable"]);
    assert!(store.table(&second).is_some());
}

#[rstest]
fn unchanged_values_do_not_notify(mut ids: SequentialIds) {
    let mut store = Store::new();
    add_table(&mut store, &mut ids);
    store.dispatch(&table::select_end_table());
    let (log, _subscription) = record(&store, ObserveTarget::Tables);

    store.dispatch(&table::select_end_table());
    store.dispatch(&editor::draggable_end_column());

    assert!(log.borrow().is_empty());
}

#[test]
fn show_changes_reach_canvas_observers() {
    let mut store = Store::new();
    let (canvas_log, _canvas_sub) = record(&store, ObserveTarget::Canvas);
    let (show_log, _show_sub) = record(&store, ObserveTarget::CanvasShow);

    let command = canvas::change_canvas_show(&store, ShowKey::TableComment);
    store.dispatch(&command);
    store.dispatch(&canvas::change_database_name("shop"));

    assert_eq!(canvas_log.borrow().len(), 2);
    assert_eq!(
        *show_log.borrow(),
        vec![Change::new(ObserveTarget::CanvasShow, "tableComment")]
    );
    assert!(!store.canvas().show().table_comment);
}

#[rstest]
fn dropped_subscription_stops_notifications(mut ids: SequentialIds) {
    let mut store = Store::new();
    let (log, subscription) = record(&store, ObserveTarget::Tables);
    assert_eq!(store.observer_count(Some(&ObserveTarget::Tables)), 1);

    add_table(&mut store, &mut ids);
    let seen = log.borrow().len();
    subscription.dispose();
    add_table(&mut store, &mut ids);

    assert_eq!(log.borrow().len(), seen);
    assert_eq!(store.observer_count(Some(&ObserveTarget::Tables)), 0);
}

#[rstest]
fn focus_model_is_the_only_internal_observer(mut ids: SequentialIds) {
    let mut store = Store::new();
    let first = add_table(&mut store, &mut ids);
    let second = add_table(&mut store, &mut ids);

    store.dispatch(&editor::focus_table(&first));
    assert_eq!(
        store.observer_count(Some(&ObserveTarget::TableColumns(first.clone()))),
        1
    );
    store.dispatch(&editor::focus_table(&second));
    assert_eq!(
        store.observer_count(Some(&ObserveTarget::TableColumns(first))),
        0
    );
    assert_eq!(store.observer_count(None), 1);
}

#[rstest]
fn snapshot_serializes_all_partitions(mut ids: SequentialIds) {
    let mut store = Store::new();
    let table_id = add_table(&mut store, &mut ids);
    store.dispatch(&editor::focus_target_table(crate::focus::FocusType::TableComment));

    let value = serde_json::to_value(store.snapshot()).expect("serialize");

    assert_eq!(value["tables"][0]["id"], table_id.as_str());
    assert_eq!(value["tables"][0]["ui"]["zIndex"], 1);
    assert_eq!(value["canvas"]["database"], "MySQL");
    assert_eq!(value["editor"]["focusTable"]["tableId"], table_id.as_str());
    assert_eq!(
        value["editor"]["focusTable"]["focus"],
        serde_json::json!({"kind": "table", "focusType": "tableComment"})
    );
    assert!(value["editor"]["editTable"].is_null());
}
