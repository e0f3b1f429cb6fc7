//! Criterion benchmarks for Mapstitch critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Palette: color index resolution
//! - Blocks: `paint_block` at each tile scale
//! - Tiles: painting a full 128x128 tile
//! - Composite: ordering and painting a grid of overlapping tiles

use std::time::{Duration, UNIX_EPOCH};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::{Rgba, RgbaImage};
use mapstitch::bounds::{compute_bounds, Bounds};
use mapstitch::composite::{composite, paint_block, paint_tile};
use mapstitch::palette::get_color;
use mapstitch::registry::TileRegistry;
use mapstitch::tile::{Tile, TILE_SIZE};

// =============================================================================
// Test Data Generators
// =============================================================================

/// A tile whose pixels cycle through every color index
fn make_tile(id: usize, cx: i32, cy: i32, scale: u8) -> Tile {
    let pixels = (0..TILE_SIZE * TILE_SIZE).map(|i| ((i + id) % 256) as u8).collect();
    Tile::new(id, cx, cy, scale, UNIX_EPOCH + Duration::from_secs(id as u64), pixels)
        .expect("valid bench tile")
}

/// An `n x n` grid of scale-0 tiles under one scale-2 tile, with holes
fn make_registry(n: i32) -> TileRegistry {
    let mut tiles = vec![Some(make_tile(0, 0, 0, 2))];
    for gy in 0..n {
        for gx in 0..n {
            let id = tiles.len();
            let tile = (id % 5 != 0).then(|| make_tile(id, gx * 128 - 192, gy * 128 - 192, 0));
            tiles.push(tile);
        }
    }
    tiles.into_iter().collect()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_palette(c: &mut Criterion) {
    let mut group = c.benchmark_group("palette");
    group.throughput(Throughput::Elements(256));
    group.bench_function("get_color_all_indices", |b| {
        b.iter(|| {
            for index in 0..=255u8 {
                black_box(get_color(black_box(index)));
            }
        })
    });
    group.finish();
}

fn bench_paint_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint_block");
    let color = Rgba([89, 125, 39, 255]);

    for scale in 0..=4u32 {
        let size = 1u32 << scale;
        let mut canvas = RgbaImage::new(64, 64);
        group.throughput(Throughput::Elements(u64::from(size * size)));
        group.bench_with_input(BenchmarkId::new("block", size), &size, |b, &size| {
            b.iter(|| paint_block(&mut canvas, black_box(8), black_box(8), size, color))
        });
    }

    let mut canvas = RgbaImage::new(64, 64);
    group.bench_function("block_clipped", |b| {
        b.iter(|| paint_block(&mut canvas, black_box(56), black_box(-8), 16, color))
    });

    group.finish();
}

fn bench_paint_tile(c: &mut Criterion) {
    let mut group = c.benchmark_group("paint_tile");

    for scale in [0u8, 2, 4] {
        let tile = make_tile(1, 0, 0, scale);
        let half = tile.half_extent();
        let bounds = Bounds { left: -half, right: half, top: -half, bottom: half };
        let side = (2 * half) as u32;
        let mut canvas = RgbaImage::new(side, side);

        group.throughput(Throughput::Elements(u64::from(side) * u64::from(side)));
        group.bench_with_input(BenchmarkId::new("scale", scale), &tile, |b, tile| {
            b.iter(|| paint_tile(&mut canvas, &bounds, black_box(tile)))
        });
    }

    group.finish();
}

fn bench_composite(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite");
    group.sample_size(20);

    for n in [2, 4] {
        let registry = make_registry(n);
        let bounds = compute_bounds(&registry);
        group.bench_with_input(BenchmarkId::new("grid", n), &registry, |b, registry| {
            b.iter(|| composite(black_box(registry), &bounds))
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(benches, bench_palette, bench_paint_block, bench_paint_tile, bench_composite);

criterion_main!(benches);
