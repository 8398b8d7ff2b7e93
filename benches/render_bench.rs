//! Benchmarks for boxtable rendering.

use boxtable::ansi::visible_width;
use boxtable::cells::cell_len;
use boxtable::prelude::*;
use boxtable::wrap::wrap_text;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const SENTENCE: &str = "This is a longer string that needs to be wrapped to fit within a certain width. It contains multiple words and should demonstrate the wrapping algorithm.";

fn table_with_rows(rows: usize) -> Table<std::io::Sink> {
    let mut table = Table::new(std::io::sink());
    table.set_headers(["ID", "Name", "Region", "Notes"]);
    for i in 0..rows {
        let region = if i % 4 < 2 { "North" } else { "South" };
        table.add_row([
            i.to_string(),
            format!("item-{i}"),
            region.to_string(),
            SENTENCE[..(i * 7) % SENTENCE.len()].to_string(),
        ]);
    }
    table
}

fn benchmark_wrap(c: &mut Criterion) {
    c.bench_function("wrap_80", |b| {
        b.iter(|| black_box(wrap_text(SENTENCE, 80)));
    });

    c.bench_function("wrap_20", |b| {
        b.iter(|| black_box(wrap_text(SENTENCE, 20)));
    });

    let styled = SENTENCE.replace("wrapped", "\x1b[1mwrapped\x1b[0m");
    c.bench_function("wrap_20_styled", |b| {
        b.iter(|| black_box(wrap_text(&styled, 20)));
    });
}

fn benchmark_width(c: &mut Criterion) {
    let mixed = "Hello 你好 👋 World こんにちは";
    let styled = "\x1b[31mHello\x1b[0m \x1b[1;4mWorld\x1b[0m";

    c.bench_function("cell_len_mixed", |b| {
        b.iter(|| black_box(cell_len(mixed)));
    });

    c.bench_function("visible_width_styled", |b| {
        b.iter(|| black_box(visible_width(styled)));
    });
}

fn benchmark_table_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_render");
    for rows in [3, 30, 300] {
        let table = table_with_rows(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, table| {
            b.iter(|| black_box(table.render_to_string()));
        });
    }
    group.finish();

    let mut merged = table_with_rows(100);
    merged.set_auto_merge(true);
    c.bench_function("table_render_auto_merge_100", |b| {
        b.iter(|| black_box(merged.render_to_string()));
    });

    let mut filled = table_with_rows(100);
    filled.set_available_width(200).set_fill_width(true);
    c.bench_function("table_render_fill_100", |b| {
        b.iter(|| black_box(filled.render_to_string()));
    });
}

criterion_group!(
    benches,
    benchmark_wrap,
    benchmark_width,
    benchmark_table_render,
);

criterion_main!(benches);
