use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sensor_dump_rs::sample_pipeline::{
    ConversionConfig, DumpToImagePipeline, ImageFormat, PackedDumpReader, SampleImage,
};

fn generate_packed_dump(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 2);
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 1024) as u16;
            data.extend_from_slice(&value.to_be_bytes());
        }
    }
    data
}

fn benchmark_conversion_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion_by_size");

    let sizes = vec![
        (256, 256, "256x256"),
        (640, 512, "640x512"),
        (1280, 1024, "1280x1024"),
    ];

    for (width, height, label) in sizes {
        let dump = generate_packed_dump(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &dump, |b, data| {
            let config = ConversionConfig::builder()
                .bits_per_pixel(10)
                .packed(width, height)
                .build();
            let pipeline = DumpToImagePipeline::new(config);

            b.iter(|| {
                let mut output = Vec::new();
                let _ = pipeline.convert(black_box(data), &mut output, ImageFormat::Png);
            });
        });
    }

    group.finish();
}

fn benchmark_decode_and_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_and_histogram");
    let dump = generate_packed_dump(1280, 1024);
    let reader = PackedDumpReader::new(1280, 1024);

    group.bench_function("decode", |b| {
        b.iter(|| {
            let mut image = SampleImage::new();
            let _ = image.load_from(&reader, black_box(&dump), 10);
        });
    });

    let mut image = SampleImage::new();
    let _ = image.load_from(&reader, &dump, 10);
    group.bench_function("histogram", |b| {
        b.iter(|| black_box(image.histogram()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_conversion_sizes, benchmark_decode_and_histogram);
criterion_main!(benches);
