//! Per-instance random seeds.

use core::fmt;

/// A 128-bit hash key, drawn once per hasher at construction.
///
/// The seed is fixed for the owning hasher's lifetime: it is never
/// regenerated, never persisted, and never derived from input data. `Debug`
/// does not print the key words, since a leaked seed lets an attacker
/// precompute colliding keys.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Seed {
  k0: u64,
  k1: u64,
}

impl Seed {
  /// Seed from fixed key words.
  ///
  /// Fixed seeds forfeit flooding resistance. Intended for tests and for
  /// tables that must be reproducible within a process.
  #[inline]
  #[must_use]
  pub const fn from_words(k0: u64, k1: u64) -> Self {
    Self { k0, k1 }
  }

  /// The key words, in the order the SipHash kernel consumes them.
  #[inline]
  #[must_use]
  pub const fn words(self) -> [u64; 2] {
    [self.k0, self.k1]
  }

  /// Draw a fresh seed from the operating system's entropy source.
  ///
  /// Never fails: if the OS source is unavailable, the seed falls back to
  /// mixed process-local entropy, which is weaker but still per-instance.
  #[must_use]
  pub fn random() -> Self {
    let mut bytes = [0u8; 16];
    if getrandom::getrandom(&mut bytes).is_ok() {
      let wide = u128::from_le_bytes(bytes);
      Self {
        k0: wide as u64,
        k1: (wide >> 64) as u64,
      }
    } else {
      Self::fallback()
    }
  }

  /// Process-local entropy: a strided atomic counter, a stack address, and
  /// (with `std`) the standard library's per-instance `RandomState`, folded
  /// through a multiply-fold mixer.
  fn fallback() -> Self {
    use core::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0x9e37_79b9_7f4a_7c15);

    let n = COUNTER.fetch_add(0x9e37_79b9_7f4a_7c15, Ordering::Relaxed);
    let slot = 0u8;
    let addr = core::ptr::addr_of!(slot) as usize as u64;

    let k0 = mix(n, addr);
    let k1 = mix(addr.rotate_left(32), !n);

    #[cfg(feature = "std")]
    let (k0, k1) = {
      use core::hash::{BuildHasher, Hasher as _};
      use std::hash::RandomState;

      let extra = RandomState::new().build_hasher().finish();
      (mix(k0, extra), mix(k1, extra.rotate_left(32)))
    };

    Self { k0, k1 }
  }
}

// Credits to the `foldhash` project.
#[inline]
fn mix(x: u64, y: u64) -> u64 {
  const FIXED: u64 = 0x2d35_8dcc_aa6c_78a5;
  let wide = u128::from(x ^ FIXED).wrapping_mul(u128::from(y | 1));
  (wide as u64) ^ ((wide >> 64) as u64)
}

impl fmt::Debug for Seed {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Seed(..)")
  }
}
