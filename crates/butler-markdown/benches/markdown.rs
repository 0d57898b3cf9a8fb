//! Benchmarks for sanitized markdown rendering.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use butler_markdown::MarkdownRenderer;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate a card description with the given number of list items.
fn generate_description(items: usize) -> String {
    let mut md = String::from("## Checklist\n\n");
    for i in 0..items {
        md.push_str(&format!(
            "- Item {i} with **bold**, a [link](https://example.com/{i}) and <em>html</em>\n"
        ));
    }
    md
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let renderer = MarkdownRenderer::default();
    let mut group = c.benchmark_group("render_markdown");

    for items in [1, 10, 100] {
        let markdown = generate_description(items);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &markdown, |b, md| {
            b.iter(|| renderer.render(Some(md.as_str())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_varying_sizes);
criterion_main!(benches);
