use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lenient_json::{decode, encode};

fn document(records: usize) -> String {
    let items: Vec<String> = (0..records)
        .map(|n| {
            format!(
                r#"{{"id": {}, "name": "user \"{}\"", "score": {}.25, "tags": ["a", "b",, "c"], "active": {}, "extra": null}}"#,
                n,
                n,
                n,
                n % 2 == 0
            )
        })
        .collect();

    format!("[{}]", items.join(",\n  "))
}

fn codec_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Codec");

    group.sample_size(10);

    for records in [100, 10_000] {
        let json = document(records);
        let (value, _) = decode(&json).unwrap();

        group.throughput(Throughput::Bytes(json.len() as u64));
        group.bench_with_input(BenchmarkId::new("decode", records), &json, |b, data| {
            b.iter(|| {
                let _ = decode(black_box(data)).unwrap();
            })
        });
        group.bench_with_input(BenchmarkId::new("encode", records), &value, |b, value| {
            b.iter(|| encode(black_box(value)))
        });
    }
}

criterion_group!(benches, codec_benchmark);
criterion_main!(benches);
