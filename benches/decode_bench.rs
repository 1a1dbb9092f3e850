use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mnist_idx::header::IMAGE_MAGIC;
use mnist_idx::load_images;
use std::fs;
use std::hint::black_box;

fn synth_image_file(count: u32, rows: u32, columns: u32) -> Vec<u8> {
    let pixel_count = (count * rows * columns) as usize;
    let mut bytes = Vec::with_capacity(16 + pixel_count);
    bytes.extend_from_slice(&IMAGE_MAGIC.to_be_bytes());
    bytes.extend_from_slice(&count.to_be_bytes());
    bytes.extend_from_slice(&rows.to_be_bytes());
    bytes.extend_from_slice(&columns.to_be_bytes());
    bytes.extend((0..pixel_count).map(|i| (i % 251) as u8));
    bytes
}

fn decode_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("IDX_Decode");

    let dir = tempfile::tempdir().unwrap();

    // (image_count, rows, columns)
    let params = vec![
        (1_000u32, 28u32, 28u32),  // Small slice of MNIST
        (10_000, 28, 28),          // Test-set size
        (60_000, 28, 28),          // Training-set size
    ];

    for (count, rows, columns) in params {
        let bytes = synth_image_file(count, rows, columns);
        let path = dir.path().join(format!("images_{}.idx", count));
        fs::write(&path, &bytes).unwrap();

        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("load_images", count),
            &path,
            |b, path| b.iter(|| black_box(load_images(path).unwrap())),
        );
    }

    group.finish();
}

criterion_group!(benches, decode_benchmark);
criterion_main!(benches);
