use lca_rmq::{cartesian_tree, Lca, RmqKind, RootedTree, TreeError};

#[test]
fn worked_example_answers_for_every_strategy() {
    let data = [5, 2, 4, 1, 3];
    for kind in RmqKind::ALL {
        if kind.requires_plus_minus() {
            continue;
        }
        let mut rmq = kind.instantiate(&data);
        rmq.preprocess();
        assert_eq!(rmq.query(1, 3), 3, "{kind}");
        assert_eq!(rmq.query(0, 4), 3, "{kind}");
        assert_eq!(rmq.query(0, 1), 1, "{kind}");
        assert_eq!(rmq.query(2, 2), 2, "{kind}");
        assert_eq!(rmq.query(4, 4), 4, "{kind}");
    }
}

#[test]
fn single_element_ranges_return_their_index() {
    let data = [9, -3, 7, 7, 0, 12, -3, 4];
    for kind in RmqKind::ALL {
        if kind.requires_plus_minus() {
            continue;
        }
        let mut rmq = kind.instantiate(&data);
        rmq.preprocess();
        for i in 0..data.len() {
            assert_eq!(rmq.query(i, i), i, "{kind} at {i}");
        }
    }
}

#[test]
fn plus_minus_walk_example() {
    let data = [3, 2, 3, 4, 3, 2, 1, 2, 1, 0, 1, 2];
    let mut rmq = RmqKind::PlusMinus.instantiate(&data);
    rmq.preprocess();
    assert_eq!(rmq.query(0, 11), 9);
    assert_eq!(rmq.query(0, 4), 1);
    assert_eq!(rmq.query(2, 4), 2);
    assert_eq!(rmq.query(5, 8), 6);
    assert_eq!(rmq.query(10, 11), 10);
}

#[test]
fn lca_on_sample_tree() {
    //        0
    //      /   \
    //     1     2
    //    / \
    //   3   4
    let tree = RootedTree::new(vec![None, Some(0), Some(0), Some(1), Some(1)])
        .expect("valid tree");
    let mut lca = Lca::new(&tree);
    lca.preprocess();

    assert_eq!(lca.tree().root(), 0);
    assert_eq!(lca.tour().nodes(), &[0, 1, 3, 1, 4, 1, 0, 2, 0]);
    assert_eq!(lca.query(3, 4), 1);
    assert_eq!(lca.query(3, 2), 0);
    assert_eq!(lca.query(4, 1), 1);
    assert_eq!(lca.query(2, 2), 2);
}

#[test]
fn cartesian_tree_of_example() {
    let tree = cartesian_tree(&[5, 2, 4, 1, 3]);
    assert_eq!(tree.root(), 3);
    assert_eq!(tree.parents(), &[Some(1), Some(3), Some(1), None, Some(3)]);
}

#[test]
fn malformed_parent_arrays_are_rejected() {
    assert_eq!(RootedTree::new(vec![]).unwrap_err(), TreeError::NoRoot);
    assert_eq!(
        RootedTree::new(vec![Some(1), Some(0)]).unwrap_err(),
        TreeError::NoRoot
    );
    assert_eq!(
        RootedTree::new(vec![None, None]).unwrap_err(),
        TreeError::MultipleRoots { first: 0, second: 1 }
    );
    assert_eq!(
        RootedTree::new(vec![None, Some(5)]).unwrap_err(),
        TreeError::ParentOutOfRange { node: 1, parent: 5 }
    );
    assert!(matches!(
        RootedTree::new(vec![None, Some(2), Some(1)]).unwrap_err(),
        TreeError::Unreachable { .. }
    ));
}

#[test]
fn repeated_queries_on_one_instance_agree() {
    let data = [6, 3, 8, 3, 1, 9, 1, 4];
    for kind in RmqKind::ALL {
        if kind.requires_plus_minus() {
            continue;
        }
        let mut rmq = kind.instantiate(&data);
        rmq.preprocess();
        for i in 0..data.len() {
            for j in i..data.len() {
                let first = rmq.query(i, j);
                assert_eq!(rmq.query(i, j), first, "{kind} [{i}, {j}]");
                assert_eq!(rmq.query(i, j), first, "{kind} [{i}, {j}]");
            }
        }
    }

    let walk = [1, 0, 1, 2, 1, 0, -1, 0, 1];
    let mut rmq = RmqKind::PlusMinus.instantiate(&walk);
    rmq.preprocess();
    for i in 0..walk.len() {
        for j in i..walk.len() {
            assert_eq!(rmq.query(i, j), rmq.query(i, j), "[{i}, {j}]");
        }
    }

    let tree = RootedTree::new(vec![None, Some(0), Some(0), Some(1), Some(1)])
        .expect("valid tree");
    let mut lca = Lca::new(&tree);
    lca.preprocess();
    for u in 0..tree.len() {
        for v in 0..tree.len() {
            assert_eq!(lca.query(u, v), lca.query(u, v), "({u}, {v})");
        }
    }
}
