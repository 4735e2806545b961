//! Keyed one-shot hash trait (**NOT CRYPTO**).

use core::fmt::Debug;

/// A keyed non-cryptographic hash over a byte slice.
///
/// These hashes exist to defend hash tables against chosen-key collision
/// attacks: the seed acts as the key of the mixing function, so an attacker
/// who can choose inputs cannot precompute collisions without also knowing
/// the seed. They are **not** suitable for signatures, MACs, or password
/// hashing.
///
/// There is intentionally no seedless convenience method. An unkeyed call
/// would reintroduce the exact attack this trait is built to prevent, so
/// every call site must hold a seed.
///
/// This trait is one-shot. The streaming form is exposed as a concrete type
/// by the implementing crate, since buffering is algorithm-specific.
pub trait KeyedHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug;

  /// Seed type (typically one or two 64-bit words).
  type Seed: Copy + Debug;

  /// Compute the hash of `data` under `seed`.
  ///
  /// Total and deterministic: identical `(seed, data)` pairs always produce
  /// identical output.
  #[must_use]
  fn hash_keyed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
