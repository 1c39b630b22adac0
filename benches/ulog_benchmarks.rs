//! Criterion benchmarks for rust_ulog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_ulog::prelude::*;
use rust_ulog::{error, info};
use std::sync::Arc;
use std::thread;

/// Appender that discards everything, so only formatting and locking are measured
struct NullAppender;

impl Appender for NullAppender {
    fn append(&mut self, line: &[u8]) -> Result<()> {
        black_box(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn service() -> Ulog {
    Ulog::builder()
        .lifecycle(LifecyclePolicy::Explicit)
        .output(NullAppender)
        .build()
        .expect("Failed to build ulog")
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let ulog = service();
    let module = ulog.register("bench").unwrap();

    group.bench_function("filtered", |b| {
        b.iter(|| {
            info!(ulog, module, "value={}", black_box(42));
        });
    });

    group.bench_function("emitted", |b| {
        b.iter(|| {
            error!(ulog, module, "value={}", black_box(42));
        });
    });

    group.bench_function("truncated", |b| {
        ulog.set_buffer_size(32).unwrap();
        b.iter(|| {
            error!(ulog, module, "{}", black_box("a message longer than the buffer"));
        });
        ulog.set_buffer_size(1024).unwrap();
    });

    group.finish();
}

// ============================================================================
// Registry Benchmarks
// ============================================================================

fn bench_registry(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let explicit = service();
    explicit.initialize(1024).unwrap();
    group.bench_function("register_unregister", |b| {
        b.iter(|| {
            let module = explicit.register(black_box("temp")).unwrap();
            explicit.unregister(module);
        });
    });

    let counted = Ulog::builder().output(NullAppender).build().unwrap();
    group.bench_function("register_unregister_recreate", |b| {
        b.iter(|| {
            let module = counted.register(black_box("temp")).unwrap();
            counted.unregister(module);
        });
    });

    group.finish();
}

// ============================================================================
// Contention Benchmarks
// ============================================================================

fn bench_contention(c: &mut Criterion) {
    let mut group = c.benchmark_group("contention");
    group.throughput(Throughput::Elements(4 * 100));

    let ulog = Arc::new(service());
    let module = ulog.register("contended").unwrap();

    group.bench_function("four_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let ulog = Arc::clone(&ulog);
                    let module = module.clone();
                    thread::spawn(move || {
                        for i in 0..100 {
                            error!(ulog, module, "i={}", i);
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_emit, bench_registry, bench_contention);
criterion_main!(benches);
