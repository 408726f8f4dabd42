use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use bayer2tga::image_pipeline::{
    BlockDebayer, FrameConfig, IntensityNormalizer, Rg10ToTgaPipeline, SensorFrame,
};
use std::io::Cursor;

fn generate_mock_raw_data(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for y in 0..height * 2 {
        for x in 0..width * 2 {
            let value = ((x * 3 + y * 7) % 1024) as u16;
            data.extend_from_slice(&value.to_le_bytes());
        }
    }
    data
}

fn mock_frame(width: usize, height: usize) -> SensorFrame {
    let samples = (0..width * height * 4)
        .map(|i| (i % 1021) as u16)
        .collect();
    SensorFrame::new(width * 2, height * 2, samples).unwrap()
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (160, 120, "160x120"),
        (640, 480, "640x480"),
        (1920, 1080, "1920x1080"),
    ];

    for (width, height, label) in sizes {
        let mock_data = generate_mock_raw_data(width, height);
        let config = FrameConfig::builder().dimensions(width, height).build();
        let pipeline = Rg10ToTgaPipeline::new(config).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &mock_data,
            |b, data| {
                b.iter(|| {
                    let mut output = Vec::with_capacity(width * height * 3 + 18);
                    pipeline
                        .convert(&mut Cursor::new(black_box(data)), &mut output)
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

fn benchmark_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages_1920x1080");
    let config = FrameConfig::default();
    let frame = mock_frame(config.width, config.height);

    group.bench_function("normalize", |b| {
        let normalizer = IntensityNormalizer::new();
        b.iter_batched(
            || frame.clone(),
            |mut frame| normalizer.process(&mut frame, &config).unwrap(),
            criterion::BatchSize::LargeInput,
        );
    });

    group.bench_function("debayer", |b| {
        let debayer = BlockDebayer::new();
        b.iter(|| debayer.process(black_box(&frame), &config).unwrap());
    });

    group.finish();
}

criterion_group!(benches, benchmark_conversion_sizes, benchmark_stages);
criterion_main!(benches);
