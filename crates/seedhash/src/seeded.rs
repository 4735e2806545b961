//! The per-instance seeded hasher.

use core::fmt;
use core::hash::{BuildHasher, Hash, Hasher as _};
use core::marker::PhantomData;

use crate::seed::Seed;
use crate::siphash::SipState13;

/// A seeded hash function for keys of type `K`.
///
/// Constructed once per owning structure (typically a cache's key index) and
/// reused for that structure's lifetime. Digests are keyed by a per-instance
/// random [`Seed`], so an attacker who can choose keys cannot precompute
/// collisions without also knowing the seed, and two independently
/// constructed hashers map the same keys to unrelated digests.
///
/// The value is immutable after construction: [`hash`](Self::hash) takes
/// `&self`, never allocates, and concurrent calls from multiple threads need
/// no locking.
///
/// `K: Hash + Eq` is the compile-time form of the requirement that equal keys
/// present identical bytes to the hash state. Types without an inspectable
/// representation simply do not satisfy the bound, so there is no runtime
/// error path at all.
///
/// ```
/// use seedhash::SeededHasher;
///
/// let hasher: SeededHasher<str> = SeededHasher::new();
/// assert_eq!(hasher.hash("hello"), hasher.hash("hello"));
/// ```
pub struct SeededHasher<K: ?Sized> {
  seed: Seed,
  _key: PhantomData<fn(&K) -> u64>,
}

impl<K: Hash + Eq + ?Sized> SeededHasher<K> {
  /// Construct with a fresh random seed.
  ///
  /// The process-wide entropy source is consulted here and never again for
  /// this instance.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::with_seed(Seed::random())
  }

  /// Construct with a caller-supplied seed.
  ///
  /// Two hashers built from the same seed agree on every key. Fixed seeds
  /// forfeit flooding resistance; see [`Seed::from_words`].
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: Seed) -> Self {
    Self {
      seed,
      _key: PhantomData,
    }
  }

  /// Hash `key` to a 64-bit digest.
  ///
  /// Total, deterministic for this instance's seed, and allocation-free: the
  /// key feeds its representation into a stack-held SipHash-1-3 state.
  #[inline]
  #[must_use]
  pub fn hash(&self, key: &K) -> u64 {
    let mut state = SipState13::with_key(self.seed.words());
    key.hash(&mut state);
    state.finish()
  }

  /// The seed this instance hashes with.
  ///
  /// Useful for constructing a sibling hasher that agrees on every key, e.g.
  /// when a cache resizes into a new index. The seed is never persisted
  /// across process restarts.
  #[inline]
  #[must_use]
  pub const fn seed(&self) -> Seed {
    self.seed
  }
}

impl<K: Hash + Eq + ?Sized> Default for SeededHasher<K> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// Manual Clone/Copy: the derives would bound K, and the hasher is a plain
// seed regardless of key type.
impl<K: ?Sized> Clone for SeededHasher<K> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<K: ?Sized> Copy for SeededHasher<K> {}

impl<K: ?Sized> fmt::Debug for SeededHasher<K> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SeededHasher").field("seed", &self.seed).finish()
  }
}

/// Lets the same seeded instance drive a `std`/`hashbrown` table inside the
/// owning structure: every state it builds is keyed by this instance's seed.
impl<K: Hash + Eq + ?Sized> BuildHasher for SeededHasher<K> {
  type Hasher = SipState13;

  #[inline]
  fn build_hasher(&self) -> Self::Hasher {
    SipState13::with_key(self.seed.words())
  }
}
