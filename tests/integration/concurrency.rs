//! Concurrent mutation and lookup through the public API.
//!
//! The ring has no internal threads; these tests impose the concurrency the
//! way an embedding service would, from plain OS threads over an `Arc`.

use std::sync::Arc;
use std::thread;

use hashring_integration_tests::ring_with_nodes;

#[test]
fn lookups_resolve_while_membership_churns() {
    let ring = Arc::new(ring_with_nodes(8, &["stable-1", "stable-2", "stable-3"]));

    let mut handles = Vec::new();
    for t in 0..4 {
        let ring = Arc::clone(&ring);
        handles.push(thread::spawn(move || {
            for round in 0..50 {
                let node = format!("churn-{t}-{round}");
                ring.add_node(&node);
                ring.remove_node(&node);
            }
        }));
    }
    for t in 0..4 {
        let ring = Arc::clone(&ring);
        handles.push(thread::spawn(move || {
            for i in 0..500 {
                let owner = ring.get_node(&format!("key-{t}-{i}"));
                assert!(
                    owner.is_some(),
                    "the stable nodes never leave, so every lookup must resolve"
                );
            }
        }));
    }
    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    // All churn nodes added were also removed.
    assert_eq!(ring.position_count(), 3 * 8);
}

#[test]
fn parallel_readers_agree_with_serial_lookups() {
    let ring = Arc::new(ring_with_nodes(8, &["stable-1", "stable-2", "stable-3"]));

    let expected: Vec<Option<String>> = (0..1000)
        .map(|i| ring.get_node(&format!("key-{i}")))
        .collect();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let ring = Arc::clone(&ring);
        let expected = expected.clone();
        handles.push(thread::spawn(move || {
            for (i, want) in expected.iter().enumerate() {
                assert_eq!(&ring.get_node(&format!("key-{i}")), want);
            }
        }));
    }
    for handle in handles {
        handle.join().expect("reader thread panicked");
    }
}
