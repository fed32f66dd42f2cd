use criterion::{Criterion, black_box, criterion_group, criterion_main};
use multirange::{multirange, MultiRange};

fn flat() -> MultiRange {
    multirange![16, ["+", "-", "*"], "abcdefgh", (-8, 8)].unwrap()
}

fn nested() -> MultiRange {
    let inner = multirange!["hello", 2..6].unwrap();
    let middle = multirange![inner, 7].unwrap();
    multirange![3, middle, "world"].unwrap()
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_flat", |b| b.iter(flat));
}

fn bench_get_flat(c: &mut Criterion) {
    let r = flat();
    let last = r.len() - 1;
    c.bench_function("get_flat", |b| b.iter(|| r.get(black_box(last))));
}

fn bench_get_nested(c: &mut Criterion) {
    let r = nested();
    let last = r.len() - 1;
    c.bench_function("get_nested", |b| b.iter(|| r.get(black_box(last))));
}

fn bench_iter_flat(c: &mut Criterion) {
    let r = flat();
    c.bench_function("iter_flat", |b| b.iter(|| r.iter().count()));
}

fn bench_iter_vs_get(c: &mut Criterion) {
    let r = nested();
    let mut group = c.benchmark_group("nested_all");
    group.bench_function("iter", |b| b.iter(|| r.iter().count()));
    group.bench_function("get", |b| b.iter(|| (0..r.len()).filter(|&p| r.get(p).is_ok()).count()));
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_get_flat,
    bench_get_nested,
    bench_iter_flat,
    bench_iter_vs_get,
);
criterion_main!(benches);
