use criterion::{black_box, criterion_group, criterion_main, Criterion};
use receipt_points_core::{score, validate_receipt, ReceiptBuilder};
use receipt_points_testkit::TestFixture;

fn bench_scoring(c: &mut Criterion) {
    let target = TestFixture::target_receipt();
    c.bench_function("score/target", |b| b.iter(|| score(black_box(&target))));

    let large = (0..200)
        .fold(
            ReceiptBuilder::new("Large Basket Wholesale").purchased_at("2023-07-15", "14:45"),
            |b, i| b.item(format!("Item number {i}"), format!("{}.{:02}", i, i % 100)),
        )
        .total("19900.00")
        .build();
    c.bench_function("score/200_items", |b| b.iter(|| score(black_box(&large))));
    c.bench_function("validate/200_items", |b| {
        b.iter(|| validate_receipt(black_box(&large)))
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
