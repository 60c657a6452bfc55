//! Consistent hashing ring for stable key-to-node assignment.
//!
//! This crate implements a consistent hashing ring: arbitrary string keys
//! are assigned to a dynamic set of named nodes such that the mapping is
//! stable while membership is unchanged, and adding or removing a node
//! remaps only the keys on the arcs owned by that node's virtual positions.
//!
//! - [`HashRing`] — the ring: an ascending sequence of occupied hash
//!   positions, a position-to-node map, and one reader/writer lock guarding
//!   both as a single unit.
//! - [`RingHasher`] — the position-hashing capability, with [`Crc32Hasher`]
//!   (CRC32/IEEE) as the default scheme. Any deterministic
//!   `Fn(&[u8]) -> u32` may be substituted.
//!
//! The ring is an embeddable, in-process primitive for sharded caches and
//! partitioned stores. Node health, transport, and data migration belong to
//! the caller; the ring only answers "which node owns this key."
//!
//! # Example
//!
//! ```rust
//! use hashring::HashRing;
//!
//! let ring = HashRing::new(16);
//! ring.add_node("cache-a");
//! ring.add_node("cache-b");
//!
//! let owner = ring.get_node("user:42").expect("ring is not empty");
//! assert!(owner == "cache-a" || owner == "cache-b");
//!
//! // Removing a node reassigns only the arcs it owned.
//! ring.remove_node("cache-a");
//! assert_eq!(ring.get_node("user:42").as_deref(), Some("cache-b"));
//! ```

mod hasher;
mod ring;

pub use hasher::{Crc32Hasher, RingHasher};
pub use ring::HashRing;
