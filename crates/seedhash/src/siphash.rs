//! SipHash-1-3 (**NOT CRYPTO**).
//!
//! SipHash is a *keyed* hash designed to defend hash tables against collision
//! attacks on untrusted inputs. It is not a cryptographic MAC. The one-shot
//! kernel hashes a byte slice; [`SipState13`] is the streaming form that
//! `SeededHasher` drives through `core::hash::Hash`, and produces bit-identical
//! output over the same byte stream.

#![allow(clippy::indexing_slicing)] // Tight block parsing

use core::hash::Hasher;

use traits::KeyedHash;

/// One-shot SipHash-1-3 over a byte slice.
#[derive(Clone, Copy, Default)]
pub struct SipHash13;

const C0: u64 = 0x736f_6d65_7073_6575;
const C1: u64 = 0x646f_7261_6e64_6f6d;
const C2: u64 = 0x6c79_6765_6e65_7261;
const C3: u64 = 0x7465_6462_7974_6573;

#[inline(always)]
fn sip_round(v0: &mut u64, v1: &mut u64, v2: &mut u64, v3: &mut u64) {
  *v0 = v0.wrapping_add(*v1);
  *v1 = v1.rotate_left(13);
  *v1 ^= *v0;
  *v0 = v0.rotate_left(32);

  *v2 = v2.wrapping_add(*v3);
  *v3 = v3.rotate_left(16);
  *v3 ^= *v2;

  *v0 = v0.wrapping_add(*v3);
  *v3 = v3.rotate_left(21);
  *v3 ^= *v0;

  *v2 = v2.wrapping_add(*v1);
  *v1 = v1.rotate_left(17);
  *v1 ^= *v2;
  *v2 = v2.rotate_left(32);
}

// Final block: remaining tail bytes, length (mod 256) in the top byte.
#[inline(always)]
fn last_block(len: u64, tail: &[u8]) -> u64 {
  let mut b = len << 56;
  for (i, &byte) in tail.iter().enumerate() {
    b |= (byte as u64) << (8 * i);
  }
  b
}

#[inline(always)]
fn sip13(key: [u64; 2], data: &[u8]) -> u64 {
  let mut v0 = C0 ^ key[0];
  let mut v1 = C1 ^ key[1];
  let mut v2 = C2 ^ key[0];
  let mut v3 = C3 ^ key[1];

  let (blocks, tail) = data.as_chunks::<8>();
  for block in blocks {
    let m = u64::from_le_bytes(*block);
    v3 ^= m;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= m;
  }

  let b = last_block(data.len() as u64, tail);
  v3 ^= b;
  sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
  v0 ^= b;

  v2 ^= 0xff;
  sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
  sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
  sip_round(&mut v0, &mut v1, &mut v2, &mut v3);

  v0 ^ v1 ^ v2 ^ v3
}

impl KeyedHash for SipHash13 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = [u64; 2];

  #[inline]
  fn hash_keyed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    sip13(seed, data)
  }
}

/// Streaming SipHash-1-3 state.
///
/// Implements [`core::hash::Hasher`], so any `K: Hash` can feed its
/// representation into a keyed state without allocating. For any split of a
/// byte stream across `write` calls, `finish` equals
/// [`SipHash13::hash_keyed`] over the concatenation.
///
/// The state is built on the stack per hash call and holds only the four
/// SipHash words plus an 8-byte tail buffer.
#[derive(Clone)]
pub struct SipState13 {
  v0: u64,
  v1: u64,
  v2: u64,
  v3: u64,
  buf: [u8; 8],
  nbuf: usize,
  len: u64,
}

impl SipState13 {
  /// Fresh state keyed by `key`.
  #[inline]
  #[must_use]
  pub const fn with_key(key: [u64; 2]) -> Self {
    Self {
      v0: C0 ^ key[0],
      v1: C1 ^ key[1],
      v2: C2 ^ key[0],
      v3: C3 ^ key[1],
      buf: [0; 8],
      nbuf: 0,
      len: 0,
    }
  }

  #[inline(always)]
  fn compress(&mut self, m: u64) {
    self.v3 ^= m;
    sip_round(&mut self.v0, &mut self.v1, &mut self.v2, &mut self.v3);
    self.v0 ^= m;
  }
}

impl Hasher for SipState13 {
  #[inline]
  fn write(&mut self, mut bytes: &[u8]) {
    self.len = self.len.wrapping_add(bytes.len() as u64);

    if self.nbuf > 0 {
      let take = usize::min(8 - self.nbuf, bytes.len());
      self.buf[self.nbuf..self.nbuf + take].copy_from_slice(&bytes[..take]);
      self.nbuf += take;
      if self.nbuf < 8 {
        return;
      }
      let m = u64::from_le_bytes(self.buf);
      self.compress(m);
      self.nbuf = 0;
      bytes = &bytes[take..];
    }

    let (blocks, tail) = bytes.as_chunks::<8>();
    for block in blocks {
      self.compress(u64::from_le_bytes(*block));
    }
    self.buf[..tail.len()].copy_from_slice(tail);
    self.nbuf = tail.len();
  }

  #[inline]
  fn finish(&self) -> u64 {
    let mut v0 = self.v0;
    let mut v1 = self.v1;
    let mut v2 = self.v2;
    let mut v3 = self.v3;

    let b = last_block(self.len, &self.buf[..self.nbuf]);
    v3 ^= b;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    v0 ^= b;

    v2 ^= 0xff;
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);
    sip_round(&mut v0, &mut v1, &mut v2, &mut v3);

    v0 ^ v1 ^ v2 ^ v3
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const KEY: [u64; 2] = [0x0706_0504_0302_0100, 0x0f0e_0d0c_0b0a_0908];

  #[test]
  fn streaming_matches_oneshot_empty() {
    let state = SipState13::with_key(KEY);
    assert_eq!(state.finish(), SipHash13::hash_keyed(KEY, b""));
  }

  #[test]
  fn streaming_matches_oneshot_unsplit() {
    let data = b"a cache key of moderate length, spanning several blocks";
    let mut state = SipState13::with_key(KEY);
    state.write(data);
    assert_eq!(state.finish(), SipHash13::hash_keyed(KEY, data));
  }

  #[test]
  fn streaming_matches_oneshot_across_splits() {
    let data: [u8; 40] = core::array::from_fn(|i| i as u8);
    let expected = SipHash13::hash_keyed(KEY, &data);
    for cut in 0..=data.len() {
      let (head, rest) = data.split_at(cut);
      let mut state = SipState13::with_key(KEY);
      state.write(head);
      state.write(rest);
      assert_eq!(state.finish(), expected, "split at {cut}");
    }
  }

  #[test]
  fn byte_at_a_time_matches_oneshot() {
    let data = b"0123456789abcdef0";
    let mut state = SipState13::with_key(KEY);
    for byte in data {
      state.write(core::slice::from_ref(byte));
    }
    assert_eq!(state.finish(), SipHash13::hash_keyed(KEY, data));
  }

  #[test]
  fn finish_does_not_consume_state() {
    let mut state = SipState13::with_key(KEY);
    state.write(b"hello");
    let first = state.finish();
    assert_eq!(state.finish(), first);
    state.write(b" world");
    assert_eq!(state.finish(), SipHash13::hash_keyed(KEY, b"hello world"));
  }

  #[test]
  fn different_keys_disagree() {
    let data = b"hello";
    let a = SipHash13::hash_keyed([1, 2], data);
    let b = SipHash13::hash_keyed([3, 4], data);
    assert_ne!(a, b);
  }
}
