use itertools::Itertools;
use tagged_bst::{BstError, Nodelike, SearchArenaTree};

// 10
// |  5
// |  |  2
// |  |  ∅
// |  20
// |  |  15
// |  |  30
fn example() -> SearchArenaTree<i32> {
    let mut tree = SearchArenaTree::<i32>::new();
    assert_eq!(tree.insert_all([10, 20, 5, 2, 15, 30]), 6);
    assert_eq!(tree.to_string(), "{10, {5, {2, ∅, ∅}, ∅}, {20, {15, ∅, ∅}, {30, ∅, ∅}}}");
    tree
}

// 10
// |  5
// |  |  2
// |  20
// |  |  15
// |  |  |  12
fn other() -> SearchArenaTree<i32> {
    let mut tree = SearchArenaTree::<i32>::new();
    tree.insert_all([10, 20, 5, 2, 15, 12]);
    assert_eq!(tree.to_string(), "{10, {5, {2, ∅, ∅}, ∅}, {20, {15, {12, ∅, ∅}, ∅}, ∅}}");
    tree
}

#[test_log::test]
fn test_multiplicity_display() {
    let mut tree = example();
    assert!(!tree.insert(20));
    assert!(!tree.insert(20));
    assert_eq!(tree.to_string(), "{10, {5, {2, ∅, ∅}, ∅}, {20(3), {15, ∅, ∅}, {30, ∅, ∅}}}");
    tree.remove(&20).unwrap();
    assert_eq!(tree.to_string(), "{10, {5, {2, ∅, ∅}, ∅}, {20(2), {15, ∅, ∅}, {30, ∅, ∅}}}");
    tree.remove(&20).unwrap();
    assert_eq!(tree.to_string(), "{10, {5, {2, ∅, ∅}, ∅}, {20, {15, ∅, ∅}, {30, ∅, ∅}}}");
    tree.remove(&20).unwrap();
    assert_eq!(tree.to_string(), "{10, {5, {2, ∅, ∅}, ∅}, {30, {15, ∅, ∅}, ∅}}");
}

#[test_log::test]
fn test_size_and_instances() {
    let mut tree = other();
    assert_eq!(tree.size(), 6);
    tree.insert_all([10, 10, 10]);
    assert_eq!(tree.size(), 6);
    assert_eq!(tree.instances_count(), 9);
}

#[test_log::test]
fn test_remove_cases() {
    let mut tree = example();
    tree.remove(&30).unwrap();
    assert_eq!(tree.to_string(), "{10, {5, {2, ∅, ∅}, ∅}, {20, {15, ∅, ∅}, ∅}}");

    let mut tree = example();
    tree.remove(&5).unwrap();
    assert_eq!(tree.to_string(), "{10, {2, ∅, ∅}, {20, {15, ∅, ∅}, {30, ∅, ∅}}}");

    let mut tree = example();
    tree.remove(&10).unwrap();
    assert_eq!(tree.to_string(), "{15, {5, {2, ∅, ∅}, ∅}, {20, ∅, {30, ∅, ∅}}}");

    assert_eq!(tree.remove(&11), Err(BstError::NotFound));
}

#[test_log::test]
fn test_path_and_subtree() {
    let tree = example();
    assert_eq!(tree.path(&10).unwrap(), "");
    assert_eq!(tree.path(&2).unwrap(), "LL");
    assert_eq!(tree.path(&15).unwrap(), "RL");
    assert_eq!(other().subtree_with_path("LL").unwrap().to_string(), "{2, ∅, ∅}");
}

#[test_log::test]
fn test_breadth_first() {
    let mut tree = other();
    assert_eq!(tree.iter_breadth().join(" "), "10 5 20 2 15 12");
    tree.insert_all([20, 20]);
    assert_eq!(tree.iter_breadth_instances().join(" "), "10 5 20 20 20 2 15 12");
}

#[test_log::test]
fn test_road_up_right_on_copy() {
    let mut tree = SearchArenaTree::<i32>::new();
    tree.insert_all([10, 5, 2, 7, 20, 15, 12, 30]);
    let mut copy = tree.copy();

    assert_eq!(tree.road_up_right(&7, 2, 2), Ok(&30));
    assert_eq!(copy.road_up_right(&7, 2, 2), Ok(&30));
    let expected = "{10 [(road, 3)], {5 [(road, 2)], {2, ∅, ∅}, {7 [(road, 1)], ∅, ∅}}, \
                    {20 [(road, 4)], {15, {12, ∅, ∅}, ∅}, {30 [(road, 5)], ∅, ∅}}}";
    assert_eq!(tree.to_string(), expected);
    assert_eq!(copy.to_string(), expected);

    let mut tree = other();
    let mut copy = tree.copy();
    assert_eq!(tree.road_up_right(&2, 2, 1), Ok(&20));
    assert_eq!(copy.road_up_right(&2, 2, 1), Ok(&20));

    tree.insert(30);
    assert_eq!(tree.road_up_right(&2, 2, 2), Ok(&30));
    assert!(copy.road_up_right(&2, 2, 2).is_err());
}

#[test_log::test]
fn test_copy_independent() {
    let mut tree = other();
    let copy = tree.copy();
    assert_eq!(copy.to_string(), tree.to_string());
    tree.insert(68);
    assert_ne!(copy.to_string(), tree.to_string());
    assert!(!copy.contains(&68));
}

#[test_log::test]
fn test_labelling() {
    let mut tree = other();
    tree.tag_height_leaf();
    tree.tag_pos_descend();
    assert_eq!(tree.tag_only_son_preorder(), 3);
    tree.filter_tags("height");
    assert_eq!(
        tree.to_string(),
        "{10, {5, {2 [(height, 3)], ∅, ∅}, ∅}, {20, {15, {12 [(height, 4)], ∅, ∅}, ∅}, ∅}}"
    );

    let mut tree = SearchArenaTree::<i32>::new();
    tree.insert_all([50, 30, 10, 40, 80, 60]);
    tree.tag_pos_descend();
    let ranks = tree
        .iter_breadth_nodes()
        .map(|node| (*node.content(), node.tags().get("descend").unwrap()))
        .collect_vec();
    assert_eq!(ranks, [(50, 3), (30, 5), (80, 1), (10, 6), (40, 4), (60, 2)]);
}

#[test_log::test]
fn test_generic_tree_interface() {
    let tree = example();
    let root = tree.root();
    assert_eq!(root.max_degree(), 2);
    assert_eq!(root.subtree(0).unwrap().content(), Some(&5));
    assert_eq!(root.subtree(1).unwrap().content(), Some(&20));
    assert!(root.subtree(0).unwrap().subtree(1).unwrap().is_empty());
    assert!(matches!(root.subtree(3), Err(BstError::SubtreeIndexOutOfBound(3))));
}

#[test_log::test]
fn test_render() {
    let mut tree = SearchArenaTree::<&str>::new();
    tree.insert_all(["M", "E", "S"]);
    tree.tag_height_leaf();
    assert_eq!(
        tree.render(),
        "M\n| E [(height, 2)]\n| | ∅\n| | ∅\n| S [(height, 2)]\n| | ∅\n| | ∅\n"
    );
}
