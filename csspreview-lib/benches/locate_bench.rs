extern crate criterion;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use csspreview_lib::css_preview;
use csspreview_lib::{extract, locate, ActiveDocument, DocumentId, PreviewConfig};

fn large_sheet() -> String {
    let mut sheet = String::with_capacity(5_000_000);
    for i in 0..100_000 {
        sheet.push_str(&format!(
            ".rule-{} {{ width: {}px; height: 10px; color: red; }}\n",
            i, i
        ));
    }
    sheet
}

fn bench_locate_end_of_sheet(c: &mut Criterion) {
    let sheet = large_sheet();
    let cursor = sheet.len() - 10;

    c.bench_function("locate_end_of_sheet", |b| {
        b.iter(|| locate(black_box(&sheet), black_box(cursor)).map(|rule| rule.body_end))
    });
}

fn bench_extract_long_body(c: &mut Criterion) {
    let mut body = String::new();
    for i in 0..1_000 {
        body.push_str(&format!("--prop-{}: value {};\n", i % 100, i));
    }

    c.bench_function("extract_long_body", |b| b.iter(|| extract(black_box(&body))));
}

fn bench_generate_preview(c: &mut Criterion) {
    let sheet = large_sheet();
    let doc = ActiveDocument::new(DocumentId(1), "css", sheet.clone(), sheet.len() / 2);
    let config = PreviewConfig::default();

    c.bench_function("generate_preview", |b| {
        b.iter(|| css_preview::generate(black_box(Some(&doc)), &config))
    });
}

criterion_group!(
    benches,
    bench_locate_end_of_sheet,
    bench_extract_long_body,
    bench_generate_preview
);
criterion_main!(benches);
