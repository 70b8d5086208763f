// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use fabric_workspace_storage::{ItemType, WorkspaceItem};
use fabric_workspace_storage_services::{
    ASSUMED_AVERAGE_ITEM_SIZE,
    ASSUMED_UNKNOWN_TYPE_SIZE,
    ItemSizeEstimator,
};
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_estimates_from_the_per_type_table() {
    let items = vec![
        typed_item("sales.pbix", ItemType::Report),
        typed_item("operations.pbix", ItemType::Report),
        typed_item("executive-kpis.json", ItemType::Dashboard),
    ];

    // 2 x 25 MiB + 100 KiB
    assert_eq!(ItemSizeEstimator::estimate_total_size(&items), 52_531_200);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_estimates_one_of_each_known_type() {
    let items = vec![
        typed_item("d", ItemType::Dataset),
        typed_item("r", ItemType::Report),
        typed_item("db", ItemType::Dashboard),
        typed_item("df", ItemType::Dataflow),
        typed_item("lh", ItemType::Lakehouse),
        typed_item("nb", ItemType::Notebook),
        typed_item("sm", ItemType::SemanticModel),
        typed_item("dm", ItemType::Datamart),
    ];

    // 50 + 25 + 5 + 100 + 10 + 50 MiB, plus 100 KiB + 512 KiB
    assert_eq!(ItemSizeEstimator::estimate_total_size(&items), 252_284_928);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_unrecognized_tag_uses_the_unknown_type_assumption() {
    let items = vec![
        typed_item("sales.pbix", ItemType::Report),
        typed_item(
            "clickstream",
            ItemType::Unknown("Eventstream".to_string()),
        ),
    ];

    assert_eq!(
        ItemSizeEstimator::estimate_total_size(&items),
        26_214_400 + ASSUMED_UNKNOWN_TYPE_SIZE
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_untagged_item_among_tagged_ones_uses_the_unknown_type_assumption() {
    let items = vec![
        typed_item("sales.pbix", ItemType::Report),
        untyped_item("mystery.bin"),
    ];

    assert_eq!(
        ItemSizeEstimator::estimate_total_size(&items),
        26_214_400 + ASSUMED_UNKNOWN_TYPE_SIZE
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_falls_back_to_flat_average_without_any_type_information() {
    let items = vec![
        untyped_item("a.bin"),
        untyped_item("b.bin"),
        untyped_item("c.bin"),
    ];

    assert_eq!(
        ItemSizeEstimator::estimate_total_size(&items),
        3 * ASSUMED_AVERAGE_ITEM_SIZE
    );
    assert_eq!(ItemSizeEstimator::estimate_total_size(&items), 62_914_560);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_empty_item_list_estimates_to_zero() {
    assert_eq!(ItemSizeEstimator::estimate_total_size(&[]), 0);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Helpers
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn typed_item(name: &str, item_type: ItemType) -> WorkspaceItem {
    WorkspaceItem::new(name, Some(item_type), None)
}

fn untyped_item(name: &str) -> WorkspaceItem {
    WorkspaceItem::new(name, None, None)
}
