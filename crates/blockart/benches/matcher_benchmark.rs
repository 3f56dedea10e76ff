use blockart::{build_grid, match_block, PixelBlock, Rgb};
use criterion::{criterion_group, criterion_main, Criterion};
use image::{imageops::FilterType, RgbImage};
use std::hint::black_box;

fn generate_gradient_rgb(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let r = ((x * 255) / width.max(1)) as u8;
        let g = ((y * 255) / height.max(1)) as u8;
        image::Rgb([r, g, 128])
    })
}

fn bench_match_block(c: &mut Criterion) {
    let block = PixelBlock([
        Rgb::new(12, 200, 33),
        Rgb::new(250, 250, 90),
        Rgb::new(100, 60, 60),
        Rgb::new(0, 120, 130),
    ]);

    c.bench_function("match_block", |b| b.iter(|| match_block(black_box(&block))));
}

fn bench_grid_thumbnail(c: &mut Criterion) {
    // default CLI bounds: 100x64 thumbnail stretched to 200x64
    let img = image::imageops::resize(
        &generate_gradient_rgb(640, 410),
        200,
        64,
        FilterType::Lanczos3,
    );
    let (width, height) = img.dimensions();
    let rgb = img.into_raw();

    c.bench_function("build_grid_200x64", |b| {
        b.iter(|| {
            let result = build_grid(black_box(&rgb), width as usize, height as usize);
            assert!(result.is_ok());
            result
        })
    });
}

criterion_group!(benches, bench_match_block, bench_grid_thumbnail);
criterion_main!(benches);
