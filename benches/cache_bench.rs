//! Benchmarks for the keep-lru cache.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keep_lru::{Cache, CacheConfig};
use std::time::Duration;

/// Benchmark get/insert operations with no keep period (plain LRU).
fn bench_plain_lru(c: &mut Criterion) {
    let mut group = c.benchmark_group("plain_lru");

    // Create a cache with enough capacity
    let config = CacheConfig::new().capacity(100_000).build();
    let mut cache = Cache::new(config);

    // Pre-populate some keys
    for i in 0..10_000 {
        cache.insert(format!("key_{}", i), format!("value_{}", i));
    }

    group.bench_function("get_existing", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = format!("key_{}", i % 10_000);
            black_box(cache.get(&key));
            i += 1;
        });
    });

    group.bench_function("get_missing", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = format!("missing_{}", i);
            black_box(cache.get(&key));
            i += 1;
        });
    });

    group.bench_function("insert_new", |b| {
        let mut cache = Cache::new(CacheConfig::new().capacity(1_000_000).build());
        let mut i = 0;
        b.iter(|| {
            cache.insert(format!("new_key_{}", i), "value");
            i += 1;
        });
    });

    group.bench_function("insert_existing", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = format!("key_{}", i % 10_000);
            cache.insert(key, "updated_value".to_string());
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark eviction under pressure.
fn bench_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction");

    // Small cache that will constantly evict
    let config = CacheConfig::new().capacity(1000).build();
    let mut cache = Cache::new(config);

    // Fill the cache
    for i in 0..1000 {
        cache.insert(format!("key_{}", i), "value");
    }

    group.bench_function("insert_with_eviction", |b| {
        let mut i = 1000;
        b.iter(|| {
            cache.insert(format!("key_{}", i), "value");
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark operations with a keep period configured.
fn bench_keep_period(c: &mut Criterion) {
    let mut group = c.benchmark_group("keep_period");

    // Entries expire out of protection almost immediately, so every insert
    // walks the eviction scan
    let config = CacheConfig::new()
        .capacity(1000)
        .keep_period(Duration::from_nanos(1))
        .build();
    let mut cache = Cache::new(config);
    for i in 0..1000 {
        cache.insert(format!("key_{}", i), "value");
    }

    group.bench_function("insert_expired_windows", |b| {
        let mut i = 1000;
        b.iter(|| {
            cache.insert(format!("key_{}", i), "value");
            i += 1;
        });
    });

    // Entries stay protected for the whole run, so the scan stops at the
    // first (still-protected) entry
    let config = CacheConfig::new()
        .capacity(1000)
        .keep_period(Duration::from_secs(600))
        .build();
    let mut cache = Cache::new(config);
    for i in 0..1000 {
        cache.insert(format!("key_{}", i), "value");
    }

    group.bench_function("insert_protected_windows", |b| {
        let mut i = 1000;
        b.iter(|| {
            cache.insert(format!("key_{}", i), "value");
            i += 1;
        });
    });

    group.bench_function("get_with_pruning", |b| {
        let mut i = 0;
        b.iter(|| {
            let key = format!("key_{}", 1000 + i % 1000);
            black_box(cache.get(&key));
            i += 1;
        });
    });

    group.finish();
}

criterion_group!(benches, bench_plain_lru, bench_eviction, bench_keep_period);
criterion_main!(benches);
