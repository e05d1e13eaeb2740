use lazy_dijkstra::data_structures::BinaryHeapWrapper;
use ordered_float::OrderedFloat;

#[test]
fn test_pops_in_ascending_priority_order() {
    let mut frontier: BinaryHeapWrapper<usize, OrderedFloat<f64>> = BinaryHeapWrapper::new();
    frontier.push(3, OrderedFloat(2.5));
    frontier.push(1, OrderedFloat(0.5));
    frontier.push(2, OrderedFloat(1.0));

    assert_eq!(frontier.pop(), Some((1, OrderedFloat(0.5))));
    assert_eq!(frontier.pop(), Some((2, OrderedFloat(1.0))));
    assert_eq!(frontier.pop(), Some((3, OrderedFloat(2.5))));
    assert_eq!(frontier.pop(), None);
}

#[test]
fn test_duplicate_entries_coexist() {
    // Lazy deletion: re-pushing a vertex leaves the old entry in place, and
    // both surface in priority order
    let mut frontier: BinaryHeapWrapper<usize, OrderedFloat<f64>> = BinaryHeapWrapper::new();
    frontier.push(7, OrderedFloat(4.0));
    frontier.push(7, OrderedFloat(1.0));
    assert_eq!(frontier.len(), 2);

    assert_eq!(frontier.pop(), Some((7, OrderedFloat(1.0))));
    assert_eq!(frontier.pop(), Some((7, OrderedFloat(4.0))));
    assert!(frontier.is_empty());
}

#[test]
fn test_peek_does_not_remove() {
    let mut frontier: BinaryHeapWrapper<usize, OrderedFloat<f64>> = BinaryHeapWrapper::new();
    frontier.push(1, OrderedFloat(3.0));

    assert_eq!(frontier.peek(), Some((1, OrderedFloat(3.0))));
    assert_eq!(frontier.len(), 1);
    assert_eq!(frontier.pop(), Some((1, OrderedFloat(3.0))));
}

#[test]
fn test_clear_empties_the_frontier() {
    let mut frontier: BinaryHeapWrapper<usize, OrderedFloat<f64>> = BinaryHeapWrapper::new();
    frontier.push(1, OrderedFloat(1.0));
    frontier.push(2, OrderedFloat(2.0));

    frontier.clear();
    assert!(frontier.is_empty());
    assert_eq!(frontier.pop(), None);
}
