//! Benchmarks for tiling generation and shape evaluation
//!
//! Compares the three layout families over the same region, then scales the
//! regular cube grid across dimensions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ndgeo_core::{
    compare_sphere_cube, BaseShape, Bounds, GeometryAgent, HexagonalTiling, HyperCube, HyperSphere,
    NdShape, RegularTiling, TilingAnalyzer, TilingPattern, VoronoiTiling,
};

fn bench_shape_properties(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_properties");
    for n in [3usize, 10, 50] {
        group.bench_with_input(BenchmarkId::new("hypersphere", n), &n, |b, &n| {
            let sphere = HyperSphere::new(n, 1.0).unwrap();
            b.iter(|| black_box((sphere.volume(), sphere.surface_area())))
        });
    }
    group.bench_function("compare_sphere_cube_10d", |b| {
        b.iter(|| black_box(compare_sphere_cube(10, 1.0).unwrap()))
    });
    group.finish();
}

fn bench_layouts_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts_2d");
    let bounds = Bounds::uniform(2, 0.0, 50.0).unwrap();

    group.bench_function(BenchmarkId::new("regular", "cube"), |b| {
        let cube = HyperCube::new(2, 1.0).unwrap();
        let mut pattern = TilingPattern::new(RegularTiling::new(BaseShape::Cube(cube)).unwrap());
        b.iter(|| {
            pattern.generate_pattern(bounds.clone(), 1.0).unwrap();
            black_box(pattern.tile_count())
        })
    });

    group.bench_function(BenchmarkId::new("hexagonal", "side_1"), |b| {
        let mut pattern = TilingPattern::new(HexagonalTiling::new(1.0).unwrap());
        b.iter(|| {
            pattern.generate_pattern(bounds.clone(), 1.0).unwrap();
            black_box(pattern.tile_count())
        })
    });

    group.bench_function(BenchmarkId::new("voronoi", "500_random"), |b| {
        let mut pattern = TilingPattern::new(VoronoiTiling::random(2, 500).unwrap());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        b.iter(|| {
            pattern
                .generate_pattern_with(bounds.clone(), 1.0, &mut rng)
                .unwrap();
            black_box(pattern.tile_count())
        })
    });

    group.finish();
}

fn bench_cube_grid_by_dimension(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube_grid");
    for n in [2usize, 3, 4, 5] {
        let bounds = Bounds::uniform(n, 0.0, 9.0).unwrap();
        let cube = HyperCube::new(n, 1.0).unwrap();
        let mut pattern = TilingPattern::new(RegularTiling::new(BaseShape::Cube(cube)).unwrap());
        group.bench_with_input(BenchmarkId::new("10_per_axis", n), &n, |b, _| {
            b.iter(|| {
                pattern.generate_pattern(bounds.clone(), 1.0).unwrap();
                black_box(TilingAnalyzer::new(&pattern).analyze())
            })
        });
    }
    group.finish();
}

fn bench_query_dispatch(c: &mut Criterion) {
    let mut agent = GeometryAgent::with_seed(1).unwrap();
    c.bench_function("query_property", |b| {
        b.iter(|| black_box(agent.process_query("volume of 7D sphere radius 2")))
    });
    c.bench_function("query_hexagonal_tiling", |b| {
        b.iter(|| black_box(agent.process_query("hexagonal tiling side 1 area 20x20")))
    });
}

criterion_group!(
    benches,
    bench_shape_properties,
    bench_layouts_2d,
    bench_cube_grid_by_dimension,
    bench_query_dispatch
);

criterion_main!(benches);
