//! Tests for EdgeList ordering and retargeting.

use super::edge_list::EdgeList;
use super::node_store::{NodeId, NodeStore};

fn store_with(values: &[&str]) -> (NodeStore<String>, Vec<NodeId>) {
    let mut store = NodeStore::default();
    let ids = values
        .iter()
        .map(|v| store.insert((*v).to_string()).unwrap())
        .collect();
    (store, ids)
}

fn pairs(list: &EdgeList<i32>, store: &NodeStore<String>) -> Vec<(String, i32)> {
    list.iter()
        .map(|e| (store.value(e.to).clone(), e.weight))
        .collect()
}

#[test]
fn test_insert_orders_by_destination_value_then_weight() {
    // Arena order deliberately differs from value order.
    let (store, ids) = store_with(&["c", "a", "b"]);
    let (c, a, b) = (ids[0], ids[1], ids[2]);
    let mut list = EdgeList::default();

    assert!(list.insert(&store, c, 1));
    assert!(list.insert(&store, a, 9));
    assert!(list.insert(&store, b, 5));
    assert!(list.insert(&store, a, 2));

    assert_eq!(
        pairs(&list, &store),
        vec![
            ("a".to_string(), 2),
            ("a".to_string(), 9),
            ("b".to_string(), 5),
            ("c".to_string(), 1),
        ]
    );
}

#[test]
fn test_insert_duplicate_is_rejected() {
    let (store, ids) = store_with(&["a"]);
    let mut list = EdgeList::default();
    assert!(list.insert(&store, ids[0], 1));
    assert!(!list.insert(&store, ids[0], 1));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_by_value() {
    let (store, ids) = store_with(&["a", "b"]);
    let mut list = EdgeList::default();
    list.insert(&store, ids[1], 4);

    assert_eq!(list.remove(&store, ids[1], &5), None);
    assert_eq!(list.remove(&store, ids[1], &4), Some(4));
    assert!(list.is_empty());
}

#[test]
fn test_to_range_selects_one_destination() {
    let (store, ids) = store_with(&["a", "b", "c"]);
    let mut list = EdgeList::default();
    for (to, w) in [(0, 1), (1, 7), (1, 3), (2, 2)] {
        list.insert(&store, ids[to], w);
    }

    let weights: Vec<i32> = list
        .to_range(&store, ids[1])
        .iter()
        .map(|e| e.weight)
        .collect();
    assert_eq!(weights, vec![3, 7]);

    let (other, other_ids) = store_with(&["z"]);
    let empty = EdgeList::<i32>::default();
    assert!(empty.to_range(&other, other_ids[0]).is_empty());
}

#[test]
fn test_remove_to_drops_all_weights() {
    let (store, ids) = store_with(&["a", "b"]);
    let mut list = EdgeList::default();
    list.insert(&store, ids[0], 1);
    list.insert(&store, ids[1], 1);
    list.insert(&store, ids[1], 2);

    assert_eq!(list.remove_to(ids[1]), 2);
    assert_eq!(pairs(&list, &store), vec![("a".to_string(), 1)]);
}

#[test]
fn test_resort_after_rename() {
    let (mut store, ids) = store_with(&["a", "m", "z"]);
    let mut list = EdgeList::default();
    list.insert(&store, ids[0], 1);
    list.insert(&store, ids[1], 1);

    store.rename(ids[0], "y".to_string());
    assert!(list.resort(&store, ids[0]));
    assert!(!list.resort(&store, ids[2]));

    assert_eq!(
        pairs(&list, &store),
        vec![("m".to_string(), 1), ("y".to_string(), 1)]
    );
}

#[test]
fn test_retarget_drops_duplicates() {
    let (store, ids) = store_with(&["a", "b", "c"]);
    let mut list = EdgeList::default();
    list.insert(&store, ids[0], 1);
    list.insert(&store, ids[0], 2);
    list.insert(&store, ids[1], 1);
    list.insert(&store, ids[2], 0);

    let dropped = list.retarget(&store, ids[0], ids[1]);

    assert_eq!(dropped, 1);
    assert_eq!(
        pairs(&list, &store),
        vec![
            ("b".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 0),
        ]
    );
    assert!(!list.targets(ids[0]));
}

#[test]
fn test_remap_keeps_order() {
    let (store, ids) = store_with(&["a", "b"]);
    let mut list = EdgeList::default();
    list.insert(&store, ids[1], 1);
    list.remap(ids[1], ids[0]);
    assert!(list.targets(ids[0]));
    assert!(!list.targets(ids[1]));
}
