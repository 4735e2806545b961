#![no_main]

use libfuzzer_sys::fuzz_target;
use seedhash::{KeyedHash as _, SipHash13, SipState13};

fuzz_target!(|input: &[u8]| {
  let key_bytes_len = core::cmp::min(16, input.len());
  let (key_bytes, data) = input.split_at(key_bytes_len);

  let mut key = [0u64; 2];
  for i in 0..2 {
    let start = i * 8;
    if start >= key_bytes.len() {
      break;
    }
    let end = core::cmp::min(start + 8, key_bytes.len());
    let mut tmp = [0u8; 8];
    tmp[..end - start].copy_from_slice(&key_bytes[start..end]);
    key[i] = u64::from_le_bytes(tmp);
  }

  let ours = SipHash13::hash_keyed(key, data);

  use core::hash::Hasher as _;
  let mut reference = siphasher::sip::SipHasher13::new_with_keys(key[0], key[1]);
  reference.write(data);
  assert_eq!(ours, reference.finish());

  // Streaming state must agree with the one-shot kernel for any write split.
  let cut = data.len() / 2;
  let (head, rest) = data.split_at(cut);
  let mut state = SipState13::with_key(key);
  state.write(head);
  state.write(rest);
  assert_eq!(state.finish(), ours);
});
