//! Seeded hasher benchmarks.
//!
//! Run: `cargo bench -p seedhash`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p seedhash`

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use seedhash::{KeyedHash as _, SeededHasher, SipHash13};

fn bench_fixed_size_keys(c: &mut Criterion) {
  let mut group = c.benchmark_group("seeded/fixed");

  let hasher_u64: SeededHasher<u64> = SeededHasher::new();
  group.bench_function("u64", |b| {
    b.iter(|| black_box(hasher_u64.hash(black_box(&0x0123_4567_89ab_cdefu64))));
  });

  #[derive(Hash, PartialEq, Eq)]
  struct CacheKey {
    table: u32,
    row: u64,
  }

  let hasher_key: SeededHasher<CacheKey> = SeededHasher::new();
  let key = CacheKey { table: 7, row: 99 };
  group.bench_function("composite", |b| {
    b.iter(|| black_box(hasher_key.hash(black_box(&key))));
  });

  group.finish();
}

fn bench_string_keys(c: &mut Criterion) {
  let mut group = c.benchmark_group("seeded/str");
  let hasher: SeededHasher<str> = SeededHasher::new();

  for size in [8, 64, 256, 1024, 4096] {
    let key: String = "k".repeat(size);
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), key.as_str(), |b, key| {
      b.iter(|| black_box(hasher.hash(black_box(key))));
    });
  }

  group.finish();
}

fn bench_oneshot_kernel(c: &mut Criterion) {
  let mut group = c.benchmark_group("siphash13/oneshot");
  let key = [0x0706_0504_0302_0100u64, 0x0f0e_0d0c_0b0a_0908];

  for size in [8, 64, 256, 1024, 4096, 16384] {
    let data = vec![0xa5u8; size];
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| black_box(SipHash13::hash_keyed(black_box(key), black_box(data))));
    });
  }

  group.finish();
}

criterion_group!(benches, bench_fixed_size_keys, bench_string_keys, bench_oneshot_kernel);
criterion_main!(benches);
