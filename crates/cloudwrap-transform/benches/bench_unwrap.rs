use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cloudwrap_transform::{CylindricalUnwrap, PointSet, Transform, Translation};

fn cylinder_points(num_points: usize) -> PointSet {
    let rows: Vec<[f64; 3]> = (0..num_points)
        .map(|i| {
            let angle = 2.0 * std::f64::consts::PI * i as f64 / num_points as f64;
            [
                2.0 + 5.0 * angle.sin(),
                i as f64 * 0.01,
                -1.0 + 5.0 * angle.cos(),
            ]
        })
        .collect();
    PointSet::from(rows)
}

fn bench_unwrap_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("unwrap_chain");

    for num_points in [1000, 10000, 100000].iter() {
        group.throughput(criterion::Throughput::Elements(*num_points as u64));
        let parameter_string = format!("{}", num_points);

        let points = cylinder_points(*num_points);
        let translation = Translation::from([-2.0, 0.0, 1.0]);
        let unwrap = CylindricalUnwrap::new(5.0);
        let chain = translation.clone().compose_before(unwrap);

        group.bench_with_input(
            BenchmarkId::new("chain_apply", &parameter_string),
            &points,
            |b, points| {
                b.iter(|| {
                    let out = chain.apply(points).unwrap();
                    black_box(out);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("staged_apply", &parameter_string),
            &points,
            |b, points| {
                b.iter(|| {
                    let centred = translation.apply(points).unwrap();
                    let out = unwrap.apply(&centred).unwrap();
                    black_box(out);
                });
            },
        );
    }
}

criterion_group!(benches, bench_unwrap_chain);
criterion_main!(benches);
