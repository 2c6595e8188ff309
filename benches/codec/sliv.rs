use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ranwire::sliv::{Allocation, ResourceGrid};

pub fn b(c: &mut Criterion) {
    let grid = ResourceGrid::new(275).unwrap();

    c.bench_function("sliv_encode", |b| {
        b.iter(|| grid.encode(black_box(Allocation::new(17, 200))).unwrap())
    });

    c.bench_function("sliv_decode", |b| b.iter(|| grid.decode(black_box(12345))));

    c.bench_function("sliv_grid_275", |b| {
        b.iter(|| {
            grid.allocations()
                .map(|alloc| grid.decode(grid.encode(alloc).unwrap()).length)
                .sum::<u32>()
        })
    });
}

criterion_group!(benches, b);
criterion_main!(benches);
