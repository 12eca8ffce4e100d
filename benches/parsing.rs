use criterion::{criterion_group, criterion_main, Criterion};
use scribe_json::formatter::Formatter;
use scribe_json::parser::Parser;

/// Build a reasonably-sized nested document in memory
fn build_document(records: usize) -> String {
    let mut source = String::from("{\"records\":[");
    for i in 0..records {
        if i > 0 {
            source.push(',');
        }
        source.push_str(&format!(
            "{{\"id\":{},\"name\":\"record-{}\",\"score\":{}.25,\"tags\":[\"a\",\"b\",\"c\"],\"active\":true}}",
            i, i, i
        ));
    }
    source.push_str("]}");
    source
}

fn benchmark_parsing(c: &mut Criterion) {
    let source = build_document(1000);
    let parser = Parser::default();
    c.bench_function("parse of generated document", |b| {
        b.iter(|| parser.parse_str(&source).unwrap())
    });
}

fn benchmark_byte_parsing(c: &mut Criterion) {
    let source = build_document(1000);
    let parser = Parser::default();
    c.bench_function("parse of generated document from bytes", |b| {
        b.iter(|| parser.parse_bytes(source.as_bytes()).unwrap())
    });
}

fn benchmark_formatting(c: &mut Criterion) {
    let source = build_document(1000);
    let parser = Parser::default();
    let parsed = parser.parse_str(&source).unwrap();
    c.bench_function("format of generated document", |b| {
        b.iter(|| Formatter::format(&parsed))
    });
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_byte_parsing,
    benchmark_formatting
);
criterion_main!(benches);
