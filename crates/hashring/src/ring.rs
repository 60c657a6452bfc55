//! Consistent hashing ring implementation.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::hasher::{Crc32Hasher, RingHasher};

/// Occupied positions and their owners, guarded as one unit.
#[derive(Debug, Default)]
struct RingState {
    /// Occupied hash positions, ascending. Duplicates are permitted: a
    /// colliding insertion still appends its position.
    positions: Vec<u32>,
    /// Position -> owning node name. The first writer keeps a contested
    /// position.
    owners: HashMap<u32, String>,
}

/// Consistent hashing ring mapping string keys to named nodes.
///
/// Each node is projected onto the ring as a fixed number of virtual
/// replicas, one position per replica, hashed from the node name with the
/// replica index appended. A key belongs to the node owning the first
/// position at or after the key's own hash, wrapping at the top of the hash
/// space. Because a membership change only inserts or deletes that node's
/// positions, it remaps only the arcs adjacent to them.
///
/// The ring is passive: no internal threads, no I/O. All operations take
/// `&self`; share the ring across threads with `Arc`. Lookups hold a shared
/// lock and run in parallel; mutations hold it exclusively for their full
/// duration, so readers never observe a partially applied change.
///
/// Node lifecycle (health, transport, data migration) belongs to the
/// caller; the ring only answers "which node owns this key."
pub struct HashRing<H = Crc32Hasher> {
    /// Virtual replicas per node, fixed for the ring's lifetime. Removal
    /// recomputes the same positions insertion produced, which only works if
    /// the count never changes between the two.
    replicas: usize,
    hasher: H,
    state: RwLock<RingState>,
}

impl HashRing {
    /// Create an empty ring using CRC32 positions.
    ///
    /// # Panics
    ///
    /// Panics if `replicas` is zero.
    pub fn new(replicas: usize) -> Self {
        Self::with_hasher(replicas, Crc32Hasher)
    }
}

impl<H: RingHasher> HashRing<H> {
    /// Create an empty ring with a caller-supplied hashing scheme.
    ///
    /// The scheme serves every add, remove, and lookup for the ring's
    /// lifetime; swapping schemes mid-flight would orphan every stored
    /// position.
    ///
    /// # Panics
    ///
    /// Panics if `replicas` is zero.
    pub fn with_hasher(replicas: usize, hasher: H) -> Self {
        assert!(replicas > 0, "replica count must be positive");
        Self {
            replicas,
            hasher,
            state: RwLock::new(RingState::default()),
        }
    }

    /// Add a node's virtual replicas to the ring.
    ///
    /// The name is opaque and compared by string equality; the ring does not
    /// validate it. Names must be non-empty by convention.
    ///
    /// Calling this twice with the same name is not idempotent: the replica
    /// set is appended again, inflating that node's share of the ring (only
    /// exact position collisions are skipped, and those keep their original
    /// owner). Add each node exactly once.
    ///
    /// # Panics
    ///
    /// Panics if the ring's lock is poisoned. A panic mid-mutation may have
    /// left the structures inconsistent, and mutating on top of that is
    /// caller misuse; lookups and removals tolerate it instead.
    pub fn add_node(&self, node: &str) {
        let mut state = self.state.write().expect("ring lock poisoned");
        for i in 0..self.replicas {
            let position = self.hasher.position(format!("{node}{i}").as_bytes());
            state.positions.push(position);
            state
                .owners
                .entry(position)
                .or_insert_with(|| node.to_string());
        }
        state.positions.sort_unstable();
        debug!(
            node,
            replicas = self.replicas,
            positions = state.positions.len(),
            "added node to ring"
        );
    }

    /// Remove a node's virtual replicas from the ring.
    ///
    /// Positions are recomputed exactly as [`add_node`](Self::add_node)
    /// produced them; for each one present in the ring, a single occurrence
    /// and its owner entry are deleted. Removing a name that was never added
    /// deletes whatever positions happen to coincide (usually nothing). No
    /// error is raised either way, and removal from an empty ring is a no-op.
    pub fn remove_node(&self, node: &str) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let mut removed = 0usize;
        for i in 0..self.replicas {
            let position = self.hasher.position(format!("{node}{i}").as_bytes());
            if let Ok(idx) = state.positions.binary_search(&position) {
                // Deleting from a sorted vec keeps it sorted.
                state.positions.remove(idx);
                state.owners.remove(&position);
                removed += 1;
            }
        }
        debug!(
            node,
            removed,
            positions = state.positions.len(),
            "removed node from ring"
        );
    }

    /// Look up the node owning `key`.
    ///
    /// Returns `None` when the ring is empty, or when the resolved position
    /// has no owner entry (possible only after a position collision followed
    /// by removal of the owning node).
    pub fn get_node(&self, key: &str) -> Option<String> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        if state.positions.is_empty() {
            return None;
        }
        let hash = self.hasher.position(key.as_bytes());
        // Successor rule: first position at or after the key's hash, wrapping
        // to the smallest position past the top of the hash space.
        let idx = state.positions.partition_point(|&p| p < hash);
        let position = if idx == state.positions.len() {
            state.positions[0]
        } else {
            state.positions[idx]
        };
        state.owners.get(&position).cloned()
    }

    /// Number of occupied positions (virtual replicas) on the ring.
    pub fn position_count(&self) -> usize {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.positions.len()
    }

    /// Whether the ring has no positions at all.
    pub fn is_empty(&self) -> bool {
        self.position_count() == 0
    }

    /// The virtual-replica count this ring was constructed with.
    pub fn replicas(&self) -> usize {
        self.replicas
    }
}

impl<H> fmt::Debug for HashRing<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("HashRing")
            .field("replicas", &self.replicas)
            .field("positions", &state.positions.len())
            .finish()
    }
}
