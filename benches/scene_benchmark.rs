/*
 * Scene Benchmark
 *
 * This file contains benchmarks for the particle scene to identify performance
 * bottlenecks. It measures the sampling pass, the per-frame update loop, a
 * staggered mode trigger, and software drawing.
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::RgbaImage;
use pixel_particles::{PixelBuffer, Scene, SceneParams};

// A square opaque image of the given size, with a gradient so colors differ
fn gradient(size: u32) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    })
}

fn loaded_scene(size: u32) -> Scene {
    let mut scene = Scene::new(size, size, SceneParams::default()).with_seed(1);
    scene.initialize(&gradient(size));
    scene
}

// Benchmark the sampling pass
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");

    // Benchmark different surface sizes
    for size in [150u32, 300, 600].iter() {
        let image = gradient(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &n| {
            let mut scene = Scene::new(n, n, SceneParams::default()).with_seed(1);
            b.iter(|| {
                scene.initialize(black_box(&image));
            });
        });
    }

    group.finish();
}

// Benchmark the per-frame update loop with the pointer inside the picture
fn bench_update_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_loop");

    for size in [150u32, 300, 600].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &n| {
            let mut scene = loaded_scene(n);
            scene.set_pointer(n as f32 / 2.0, n as f32 / 2.0);
            b.iter(|| {
                scene.update();
            });
        });
    }

    group.finish();
}

// Benchmark a staggered trigger followed by releasing every particle
fn bench_staggered_trigger(c: &mut Criterion) {
    let mut group = c.benchmark_group("staggered_trigger");

    for size in [150u32, 300].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &n| {
            let mut scene = loaded_scene(n);
            b.iter(|| {
                scene.assemble();
                black_box(scene.tick(Duration::from_secs(3600)));
            });
        });
    }

    group.finish();
}

// Benchmark drawing into the software raster
fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");

    for size in [150u32, 300].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &n| {
            let mut scene = loaded_scene(n);
            let mut surface = PixelBuffer::new(n, n);
            b.iter(|| {
                scene.frame(&mut surface);
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_sampling, bench_update_loop, bench_staggered_trigger, bench_draw
}
criterion_main!(benches);
