use criterion::{Criterion, criterion_group, criterion_main};
use notionmd_engine::parsing::{inline::decode, parse_markdown};
mod common;

fn bench_parse_markdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    group.bench_function("parse_markdown", |b| {
        b.iter(|| {
            let blocks = parse_markdown(std::hint::black_box(&content));
            std::hint::black_box(blocks);
        });
    });

    let line = "plain **bold** _italic_ `code` [link](https://example.com) ".repeat(50);
    group.bench_function("inline_decode", |b| {
        b.iter(|| std::hint::black_box(decode(std::hint::black_box(&line))));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_markdown);
criterion_main!(benches);
