use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use region_pathfinding::{a_star_search, Grid, GridConfig, Metric, PathConfig, PixelBuffer, Quadtree, QuadtreeConfig};

const PASSABLE: [u8; 3] = [255, 255, 255];
const BLOCKED: [u8; 3] = [0, 0, 0];

fn sparse_obstacle_map(size: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::filled(size, size, PASSABLE);
    let wall_x0 = size / 2 - size / 20;
    let wall_x1 = size / 2 + size / 20;
    for y in 0..(size - size / 4) {
        for x in wall_x0..wall_x1 {
            buf.set(x, y, BLOCKED);
        }
    }
    buf
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathfind");
    group.sample_size(30);

    let size = 1024;
    let buf = sparse_obstacle_map(size);
    let config = PathConfig {
        allow_diagonal: true,
        enable_smoothing: true,
        metric: Metric::Euclidean,
    };

    let grid = Grid::build(&buf, &GridConfig { min_size: 16 }, config.allow_diagonal, PASSABLE, BLOCKED).unwrap();
    group.bench_function("grid_1024x", |b| {
        b.iter(|| {
            let result = a_star_search(
                black_box(&grid),
                black_box(32),
                black_box(32),
                black_box(size as i32 - 32),
                black_box(size as i32 - 32),
                &config,
            )
            .unwrap();
            black_box(result);
        })
    });

    let qt = Quadtree::build(&buf, &QuadtreeConfig { min_size: 4 }, config.allow_diagonal, PASSABLE, BLOCKED);
    group.bench_function("quadtree_1024x", |b| {
        b.iter(|| {
            let result = a_star_search(
                black_box(&qt),
                black_box(32),
                black_box(32),
                black_box(size as i32 - 32),
                black_box(size as i32 - 32),
                &config,
            )
            .unwrap();
            black_box(result);
        })
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}
criterion_main!(benches);
