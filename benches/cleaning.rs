use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strbench::clean;
use strbench::input::sample_text;

fn cleaning_bench(c: &mut Criterion) {
    let text = sample_text(3);
    let mut group = c.benchmark_group("remove_ctrl");

    group.bench_function("concat", |b| {
        b.iter(|| clean::remove_ctrl_concat(black_box(&text)))
    });
    group.bench_function("push", |b| {
        b.iter(|| clean::remove_ctrl_push(black_box(&text)))
    });
    group.bench_function("reserve", |b| {
        b.iter(|| clean::remove_ctrl_reserve(black_box(&text)))
    });
    group.bench_function("bytes", |b| {
        b.iter(|| clean::remove_ctrl_bytes(black_box(&text)))
    });
    group.bench_function("blocks", |b| {
        b.iter(|| clean::remove_ctrl_blocks(black_box(&text)))
    });
    group.bench_function("filter", |b| {
        b.iter(|| clean::remove_ctrl_filter(black_box(&text)))
    });
    group.bench_function("retain", |b| {
        b.iter(|| clean::remove_ctrl_retain(black_box(text.clone())))
    });
    group.bench_function("into", |b| {
        let mut buf = String::new();
        b.iter(|| clean::remove_ctrl_into(&mut buf, black_box(&text)))
    });

    group.finish();
}

criterion_group!(benches, cleaning_bench);
criterion_main!(benches);
