//! Ordered container tests

use tether_types::List;

#[test]
fn push_then_snapshot_preserves_order_and_length() {
    let mut list = List::new();
    for word in ["alpha", "beta", "gamma"] {
        list.push(word.to_string());
    }

    assert_eq!(list.len(), 3);
    assert_eq!(list.all_elements(), vec!["alpha", "beta", "gamma"]);
}

#[test]
fn pop_returns_last_and_leaves_prefix() {
    let mut list: List<i32> = [10, 20, 30].into_iter().collect();

    assert_eq!(list.pop_with_presence(), (30, true));
    assert_eq!(list.all_elements(), vec![10, 20]);
}

#[test]
fn pop_on_fresh_list_reports_absent_zero_value() {
    let mut list: List<i32> = List::new();
    assert_eq!(list.pop_with_presence(), (0, false));
}

#[test]
fn draining_pops_in_reverse_then_reports_absent() {
    let mut list: List<char> = "abcd".chars().collect();

    let drained: Vec<char> = std::iter::from_fn(|| list.pop()).collect();
    assert_eq!(drained, vec!['d', 'c', 'b', 'a']);
    assert!(list.is_empty());
    assert_eq!(list.pop_with_presence(), ('\0', false));
}

#[test]
fn list_of_structs_keeps_independent_snapshots() {
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    let mut list = List::new();
    list.push(Point { x: 1, y: 2 });
    let before = list.all_elements();
    list.push(Point { x: 3, y: 4 });

    assert_eq!(before, vec![Point { x: 1, y: 2 }]);
    assert_eq!(list.last(), Some(&Point { x: 3, y: 4 }));
    assert_eq!(list.first(), Some(&Point { x: 1, y: 2 }));
}
