use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use apt_wedge_rs::apt_pipeline::{
    ChannelLayout, ChannelToImagePipeline, FrameSynchronizer, Normalizer, PipelineConfig,
    WedgeStatistics,
};
use apt_wedge_rs::apt_pipeline::test_patterns::{linear_wedges, wedge_frame_channel};

fn benchmark_pass_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("calibration_by_lines");
    let layout = ChannelLayout::default();

    // Roughly 2 lines per second of pass
    let heights = vec![(256, "256"), (1024, "1024"), (2048, "2048")];

    for (height, label) in heights {
        let buffer = wedge_frame_channel(&layout, height, 45, &linear_wedges(3000, 3500), 60000);

        group.bench_with_input(BenchmarkId::from_parameter(label), &buffer, |b, buffer| {
            b.iter(|| {
                let stats = WedgeStatistics::compute(black_box(buffer), &layout);
                let wedges = FrameSynchronizer::synchronize(&stats).unwrap();
                let mut calibrated = buffer.clone();
                Normalizer::normalize(&mut calibrated, &wedges).unwrap();
                calibrated
            });
        });
    }

    group.finish();
}

fn benchmark_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    let config = PipelineConfig::default();
    let buffer = wedge_frame_channel(&config.layout, 1024, 45, &linear_wedges(3000, 3500), 60000);
    let samples: Vec<u8> = buffer.samples().iter().flat_map(|s| s.to_le_bytes()).collect();
    let pipeline = ChannelToImagePipeline::new(config);

    group.bench_function("grayscale_pnm", |b| {
        b.iter(|| {
            let mut output = Vec::new();
            let _ = pipeline.convert(black_box(&samples), &mut output);
        });
    });

    group.bench_function("false_color_pnm", |b| {
        b.iter(|| {
            let mut output = Vec::new();
            let _ = pipeline.convert_false_color(black_box(&samples), &samples, &mut output);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_pass_lengths, benchmark_rendering);
criterion_main!(benches);
