use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use id3::{fit, sample};

fn bench_fit(c: &mut Criterion) {
    let names = ["a", "b", "c", "d", "e", "f"];
    let mut group = c.benchmark_group("id3_fit");
    for records in [50usize, 200, 800] {
        let dataset = sample::random_dataset(records, names.len(), 3, 2, 7);
        group.bench_with_input(BenchmarkId::from_parameter(records), &dataset, |b, ds| {
            b.iter(|| fit(black_box(ds), &names))
        });
    }
    group.finish();
}

fn bench_predict(c: &mut Criterion) {
    let names = ["a", "b", "c", "d", "e", "f"];
    let dataset = sample::random_dataset(400, names.len(), 3, 2, 7);
    let tree = match fit(&dataset, &names) {
        Ok(tree) => tree,
        Err(e) => panic!("fit failed: {}", e),
    };
    c.bench_function("id3_predict_dataset", |b| {
        b.iter(|| tree.predict_dataset(&names, black_box(&dataset)))
    });
}

criterion_group!(benches, bench_fit, bench_predict);
criterion_main!(benches);
