//! Builds a synthetic occupancy map (or loads one from `--image`), runs
//! `a_star_search` over both a `Grid` and a `Quadtree` decomposition of it,
//! and prints a summary of each `PathResult`. Behind the `demo-image`
//! feature, also writes a rendered result image next to the input.
//!
//! Mirrors the shape of `original_source/application.py`'s `main()`:
//! build an index, search it, report timing and cell counts.

use region_pathfinding::{
    a_star_search, Config, Grid, PathConfig, PixelBuffer, Quadtree, SpatialIndex,
};
use std::time::Instant;

fn synthetic_map(width: u32, height: u32, palette: &region_pathfinding::Palette) -> PixelBuffer {
    let mut buf = PixelBuffer::filled(width, height, palette.passable);
    // A wall with a single gap, roughly mirroring S3 from the spec's
    // scenario table: a vertical obstacle that the path must route around.
    let wall_x0 = width / 2 - width / 20;
    let wall_x1 = width / 2 + width / 20;
    let gap_y0 = height - height / 4;
    for y in 0..gap_y0 {
        for x in wall_x0..wall_x1 {
            buf.set(x, y, palette.blocked);
        }
    }
    buf
}

fn load_image(path: &str) -> PixelBuffer {
    #[cfg(feature = "demo-image")]
    {
        let img = image::open(path).expect("failed to decode input image").to_rgb8();
        let (width, height) = (img.width(), img.height());
        let pixels = img.pixels().map(|p| p.0).collect();
        PixelBuffer::new(width, height, pixels)
    }
    #[cfg(not(feature = "demo-image"))]
    {
        let _ = path;
        panic!("--image requires the `demo-image` feature");
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let image_path = args.next();

    let config = Config::default();
    let buf = match image_path {
        Some(path) => load_image(&path),
        None => synthetic_map(400, 400, &config.palette),
    };

    let (sx, sy) = (10, 10);
    let (tx, ty) = (buf.width() as i32 - 10, buf.height() as i32 - 10);
    let path_config = PathConfig {
        allow_diagonal: true,
        enable_smoothing: true,
        metric: config.path.metric,
    };

    let grid = Grid::build(
        &buf,
        &config.grid,
        path_config.allow_diagonal,
        config.palette.passable,
        config.palette.blocked,
    )
    .expect("grid build failed");

    let start = Instant::now();
    let grid_result = a_star_search(&grid, sx, sy, tx, ty, &path_config);
    let grid_elapsed = start.elapsed();

    match grid_result {
        Ok(result) => {
            tracing::info!(
                elapsed_ms = grid_elapsed.as_secs_f64() * 1000.0,
                considered = result.considered,
                visited = result.visited.len(),
                path_found = result.path.is_some(),
                trajectory_length = result.trajectory_length,
                "grid pathfind complete"
            );
        }
        Err(err) => tracing::error!(%err, "grid pathfind failed"),
    }

    let qt = Quadtree::build(
        &buf,
        &config.qtree,
        path_config.allow_diagonal,
        config.palette.passable,
        config.palette.blocked,
    );

    let start = Instant::now();
    let qt_result = a_star_search(&qt, sx, sy, tx, ty, &path_config);
    let qt_elapsed = start.elapsed();

    match qt_result {
        Ok(result) => {
            tracing::info!(
                elapsed_ms = qt_elapsed.as_secs_f64() * 1000.0,
                considered = result.considered,
                visited = result.visited.len(),
                leaf_count = qt.leaf_count(),
                path_found = result.path.is_some(),
                trajectory_length = result.trajectory_length,
                "quadtree pathfind complete"
            );
        }
        Err(err) => tracing::error!(%err, "quadtree pathfind failed"),
    }
}
