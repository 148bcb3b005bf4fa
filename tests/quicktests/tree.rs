use bst::Tree;
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.inorder() == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i32>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i32>, nots: Vec<i32>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.search(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.search(x)) && still_present.iter().all(|x| tree.search(x))
}

#[quickcheck]
fn absent_delete_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().filter(|x| *x != missing).collect();
    let before = tree.preorder();

    !tree.delete(&missing) && tree.preorder() == before
}

#[quickcheck]
fn present_delete_removes_exactly_one(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    let Some(&target) = xs.first() else {
        return true;
    };
    let mut expected = tree.inorder();
    expected.retain(|x| *x != target);

    tree.delete(&target) && tree.inorder() == expected && tree.len() == expected.len()
}

#[quickcheck]
fn build_balanced_is_minimal(xs: Vec<i16>) -> bool {
    let sorted: Vec<i16> = xs
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let tree = Tree::from_sorted(&sorted);

    let n = sorted.len();
    let minimal = (usize::BITS - n.leading_zeros()) as usize;
    tree.height() == minimal && tree.is_balanced() && tree.inorder() == sorted
}
