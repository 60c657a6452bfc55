//! Shared helpers for the hashring integration suite.

use hashring::HashRing;

/// Build a ring and add `nodes` in order.
pub fn ring_with_nodes(replicas: usize, nodes: &[&str]) -> HashRing {
    let ring = HashRing::new(replicas);
    for node in nodes {
        ring.add_node(node);
    }
    ring
}

/// Deterministic key corpus: `key-0` .. `key-{n-1}`.
pub fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key-{i}")).collect()
}
