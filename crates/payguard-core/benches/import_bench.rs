use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use payguard_core::{Domain, ImportConfigBuilder, Importer};
use std::hint::black_box;

// Build an upload by cycling through the demo rows of a domain.
fn create_upload(domain: Domain, size: usize) -> String {
    let schema = domain.schema().unwrap();
    let mut text = schema.headers().join(",");
    text.push('\n');
    for row in domain.demo_rows().iter().cycle().take(size) {
        text.push_str(&row.join(","));
        text.push('\n');
    }
    text
}

// Prebuild uploads once and reuse across all benchmark functions.
static PREBUILT_UPLOADS: Lazy<Vec<(usize, String)>> = Lazy::new(|| {
    [1_000usize, 10_000, 100_000]
        .iter()
        .map(|&size| (size, create_upload(Domain::Employee, size)))
        .collect()
});

fn importer(domain: Domain) -> Importer {
    domain
        .importer(ImportConfigBuilder::new().build())
        .unwrap()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("employee_parse");
    let importer = importer(Domain::Employee);

    for (size, text) in PREBUILT_UPLOADS.iter() {
        group.throughput(criterion::Throughput::Elements(*size as u64));
        group.bench_with_input(format!("rows_{}", size), text, |b, text| {
            b.iter(|| black_box(importer.parse(text)));
        });
    }

    group.finish();
}

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("employee_import");
    let importer = importer(Domain::Employee);

    for (size, text) in PREBUILT_UPLOADS.iter() {
        group.throughput(criterion::Throughput::Elements(*size as u64));
        group.bench_with_input(format!("rows_{}", size), text, |b, text| {
            b.iter(|| black_box(importer.import(text)));
        });
    }

    group.finish();
}

fn bench_export_errors(c: &mut Criterion) {
    let mut group = c.benchmark_group("employee_export_errors");
    let importer = importer(Domain::Employee);

    for (size, text) in PREBUILT_UPLOADS.iter() {
        let dataset = importer.import(text);
        group.throughput(criterion::Throughput::Elements(*size as u64));
        group.bench_with_input(format!("rows_{}", size), &dataset, |b, dataset| {
            b.iter(|| black_box(payguard_core::export_errors(dataset).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_import, bench_export_errors);
criterion_main!(benches);
