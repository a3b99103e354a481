use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use shiftblur::filters::color_shift::color_shift_rgba_u8;
use shiftblur::filters::convolution::weighted_blur_rgba_u8;
use shiftblur::{apply, Bitmap};

fn bench_shift_blur(c: &mut Criterion) {
    let mut group = c.benchmark_group("Shift Blur");

    for (width, height) in [(256, 224), (512, 448), (1024, 896), (1920, 1080)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let pixels: Vec<u8> = (0..width * height * 4).map(|i| (i % 251) as u8).collect();
        let bitmap = Bitmap::new(*width, *height, pixels).unwrap();
        let array = bitmap.clone().into_array().unwrap();

        group.bench_with_input(
            BenchmarkId::new("shift_blur", &parameter_string),
            &bitmap,
            |b, i| b.iter(|| black_box(apply(i.clone()))),
        );

        group.bench_with_input(
            BenchmarkId::new("color_shift", &parameter_string),
            &array,
            |b, i| b.iter(|| black_box(color_shift_rgba_u8(i.view()))),
        );

        group.bench_with_input(
            BenchmarkId::new("weighted_blur", &parameter_string),
            &array,
            |b, i| b.iter(|| black_box(weighted_blur_rgba_u8(i.view()))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_shift_blur);
criterion_main!(benches);
