//! Criterion microbenches for yolo2cls parsing.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure the performance of:
//! - label first-line parsing (parse_class_index)
//! - data.yaml class table parsing (ClassTable::from_yaml_str)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use std::path::Path;

use yolo2cls::annotation::parse_class_index;
use yolo2cls::ClassTable;

const LABEL_LINE: &str = "17 0.512345 0.487654 0.123456 0.234567\n";

const DATA_YAML: &str = "train: ../train/images
val: ../valid/images
nc: 8
names: ['person', 'bicycle', 'car', 'motorcycle', 'airplane', 'bus', 'train', 'truck']
";

/// Benchmark class index parsing from a single label line.
fn bench_parse_class_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_parse");
    group.throughput(Throughput::Bytes(LABEL_LINE.len() as u64));

    group.bench_function("parse_class_index", |b| {
        b.iter(|| {
            let index = parse_class_index(black_box(LABEL_LINE)).unwrap();
            black_box(index)
        })
    });

    group.finish();
}

/// Benchmark data.yaml parsing into a class table.
fn bench_class_table_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("class_table_parse");
    group.throughput(Throughput::Bytes(DATA_YAML.len() as u64));

    group.bench_function("from_yaml_str", |b| {
        b.iter(|| {
            let table = ClassTable::from_yaml_str(black_box(DATA_YAML), Path::new("data.yaml"))
                .unwrap();
            black_box(table)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_parse_class_index, bench_class_table_parse);
criterion_main!(benches);
