use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tally_core::counter::{AtomicCounter, ChannelCounter, MutexCounter, VisitCounter};

fn bench_increment(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    let mut group = c.benchmark_group("increment");

    let mutex = MutexCounter::new();
    group.bench_function("mutex", |b| b.iter(|| black_box(mutex.increment())));

    let atomic = AtomicCounter::new();
    group.bench_function("atomic", |b| b.iter(|| black_box(atomic.increment())));

    let channel = ChannelCounter::new();
    group.bench_function("channel", |b| {
        b.iter(|| black_box(rt.block_on(channel.increment()).unwrap()))
    });

    // Dynamic dispatch, as the HTTP handlers call it.
    let boxed: Arc<dyn VisitCounter> = Arc::new(ChannelCounter::new());
    group.bench_function("channel_dyn", |b| {
        b.iter(|| black_box(rt.block_on(boxed.increment()).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_increment);
criterion_main!(benches);
