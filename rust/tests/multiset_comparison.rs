use btree::BTree;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const OPERATIONS: usize = 5_000;
const KEY_SPACE: i32 = 200;
const SEED: u64 = 42;

/// Reference model: key -> number of occurrences.
fn model_insert(model: &mut BTreeMap<i32, usize>, key: i32) {
    *model.entry(key).or_insert(0) += 1;
}

fn model_remove(model: &mut BTreeMap<i32, usize>, key: i32) -> bool {
    match model.get_mut(&key) {
        Some(count) if *count > 1 => {
            *count -= 1;
            true
        }
        Some(_) => {
            model.remove(&key);
            true
        }
        None => false,
    }
}

fn model_keys(model: &BTreeMap<i32, usize>) -> Vec<i32> {
    model
        .iter()
        .flat_map(|(&key, &count)| std::iter::repeat(key).take(count))
        .collect()
}

fn run_random_workload(degree: usize, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = BTree::new(degree).unwrap();
    let mut model = BTreeMap::new();

    for step in 0..OPERATIONS {
        let key = rng.gen_range(0..KEY_SPACE);
        match rng.gen_range(0..10) {
            0..=4 => {
                tree.insert(key);
                model_insert(&mut model, key);
            }
            5..=7 => {
                let expected = model_remove(&mut model, key);
                assert_eq!(
                    tree.delete(&key),
                    expected,
                    "degree {} step {}: delete({})",
                    degree,
                    step,
                    key
                );
            }
            _ => {
                assert_eq!(
                    tree.search(&key),
                    model.contains_key(&key),
                    "degree {} step {}: search({})",
                    degree,
                    step,
                    key
                );
            }
        }

        if let Err(e) = tree.check_invariants_detailed() {
            panic!("degree {} step {}: {}\n{}", degree, step, e, tree);
        }
        assert_eq!(tree.count(&key), model.get(&key).copied().unwrap_or(0));
    }

    let keys: Vec<i32> = tree.keys().copied().collect();
    assert_eq!(keys, model_keys(&model));
    assert_eq!(tree.len(), keys.len());
}

#[test]
fn test_random_workload_matches_model() {
    for degree in [2, 3, 4, 7, 16] {
        run_random_workload(degree, SEED + degree as u64);
    }
}

#[test]
fn test_drain_to_empty_matches_model() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut tree = BTree::new(3).unwrap();
    let mut model = BTreeMap::new();

    for _ in 0..2_000 {
        let key = rng.gen_range(0..50);
        tree.insert(key);
        model_insert(&mut model, key);
    }

    loop {
        let Some(&key) = model.keys().next() else {
            break;
        };
        // Miss first, then the real delete.
        assert!(!tree.delete(&(key - 1000)));
        assert!(tree.delete(&key));
        model_remove(&mut model, key);
        assert_eq!(tree.count(&key), model.get(&key).copied().unwrap_or(0));
    }

    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    tree.check_invariants_detailed().unwrap();
}

#[test]
fn test_sorted_and_reverse_sorted_inserts_and_deletes() {
    for degree in [2, 5, 10] {
        let mut tree = BTree::new(degree).unwrap();
        for key in 0..1_000 {
            tree.insert(key);
        }
        for key in (0..1_000).rev().step_by(2) {
            assert!(tree.delete(&key));
        }
        tree.check_invariants_detailed().unwrap();
        let expected: Vec<i32> = (0..1_000).step_by(2).collect();
        assert_eq!(tree.keys().copied().collect::<Vec<_>>(), expected);

        for key in expected {
            assert!(tree.delete(&key));
        }
        assert!(tree.is_empty());
    }
}
