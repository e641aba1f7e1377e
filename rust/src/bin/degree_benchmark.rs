use btree::BTree;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::SeedableRng;
use std::time::{Duration, Instant};

// Times insert, delete and search phases for several minimum degrees.
// Only the tree's public operations are used.
// Note: Run in release mode for meaningful results, with `--features bench-bin`.
fn main() {
    env_logger::init();

    // Configurable via env vars if needed
    let key_range: usize = env_or("KEY_RANGE", 10_000);
    let insert_count: usize = env_or("INSERT_COUNT", 1_000).min(key_range);
    let delete_count: usize = env_or("DELETE_COUNT", 500).min(insert_count);
    let search_count: usize = env_or("SEARCH_COUNT", 500).min(insert_count);
    let degrees = parse_degrees(&std::env::var("DEGREES").unwrap_or_else(|_| "5,10,20".into()));

    let mut rng = match std::env::var("SEED").ok().and_then(|v| v.parse().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // Distinct keys from 1..=key_range; delete and search keys come from those.
    let insertion_keys: Vec<u64> = index::sample(&mut rng, key_range, insert_count)
        .into_iter()
        .map(|i| i as u64 + 1)
        .collect();
    let deletion_keys: Vec<u64> = insertion_keys
        .choose_multiple(&mut rng, delete_count)
        .copied()
        .collect();
    let search_keys: Vec<u64> = insertion_keys
        .choose_multiple(&mut rng, search_count)
        .copied()
        .collect();

    println!("=== B-Tree Degree Benchmark ===");
    println!(
        "Keys: {} inserted from 1..={}, {} deleted, {} searched",
        insert_count, key_range, delete_count, search_count
    );
    println!();
    println!(
        "{:>8} {:>14} {:>14} {:>14} {:>8}",
        "degree", "insert (s)", "delete (s)", "search (s)", "height"
    );

    for degree in degrees {
        let mut tree = match BTree::new(degree) {
            Ok(tree) => tree,
            Err(e) => {
                warn!("skipping degree {}: {}", degree, e);
                continue;
            }
        };

        let insert_time = time_phase(|| {
            for &key in &insertion_keys {
                tree.insert(key);
            }
        });
        let height = tree.height();

        let delete_time = time_phase(|| {
            for key in &deletion_keys {
                tree.delete(key);
            }
        });

        let mut hits = 0;
        let search_time = time_phase(|| {
            for key in &search_keys {
                if tree.search(key) {
                    hits += 1;
                }
            }
        });

        println!(
            "{:>8} {:>14.6} {:>14.6} {:>14.6} {:>8}",
            degree,
            insert_time.as_secs_f64(),
            delete_time.as_secs_f64(),
            search_time.as_secs_f64(),
            height
        );
        info!(
            "degree {}: {} keys left, {} of {} searches hit",
            degree,
            tree.len(),
            hits,
            search_keys.len()
        );

        if let Err(e) = tree.validate() {
            warn!("degree {}: tree failed validation: {}", degree, e);
        }
    }
}

fn time_phase<F: FnOnce()>(phase: F) -> Duration {
    let start = Instant::now();
    phase();
    start.elapsed()
}

fn env_or(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_degrees(raw: &str) -> Vec<usize> {
    raw.split(',')
        .filter_map(|part| {
            let part = part.trim();
            match part.parse() {
                Ok(degree) => Some(degree),
                Err(_) => {
                    warn!("ignoring degree {:?}", part);
                    None
                }
            }
        })
        .collect()
}
