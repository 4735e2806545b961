//! Per-instance seeded hashing for cache key indexes.
//!
//! A cache that accepts keys from untrusted input needs a hash function an
//! attacker cannot precompute collisions for. `seedhash` provides that as a
//! single primitive: [`SeededHasher`], constructed once per owning structure
//! with a fresh random [`Seed`] and reused for every lookup and insert.
//!
//! ```
//! use seedhash::SeededHasher;
//!
//! let hasher: SeededHasher<u64> = SeededHasher::new();
//! assert_eq!(hasher.hash(&42), hasher.hash(&42));
//! ```
//!
//! The underlying algorithm is SipHash-1-3, keyed by the per-instance seed.
//! Hashing is allocation-free: keys feed their representation into a
//! stack-held [`SipState13`] through `core::hash::Hash`, so any `K: Hash + Eq`
//! works without a serialization step, and unsupported key types are rejected
//! at compile time.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Strengthens the entropy fallback used when the OS source is unavailable |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod seed;
pub mod seeded;
pub mod siphash;

pub use seed::Seed;
pub use seeded::SeededHasher;
pub use siphash::{SipHash13, SipState13};
pub use traits::KeyedHash;
