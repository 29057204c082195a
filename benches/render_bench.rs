use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tablerank_table::{RenderOptions, Table};

fn generate_csv(rows: usize) -> String {
    let mut text = String::from("city,population,area,density,country");
    for i in 0..rows {
        let area = 500 + (i * 37) % 6000;
        let population = 1_000_000 + (i * 7919) % 20_000_000;
        text.push_str(&format!(
            "\n  City {i},{population},{area},{},Country {}",
            population / area,
            i % 50
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for size in [10, 1_000, 10_000] {
        let text = generate_csv(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| Table::parse(black_box(text)).unwrap());
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_sort_render");
    let options = RenderOptions::new().with_gap(2).with_left_aligned(["city"]);
    for size in [10, 1_000, 10_000] {
        let table = Table::parse(&generate_csv(size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &table, |b, table| {
            b.iter(|| {
                table
                    .clone()
                    .with_rank_column("density", "rank")
                    .and_then(|t| t.sort_by("rank"))
                    .and_then(|t| t.render_with_options(black_box(&options)))
                    .unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_pipeline);
criterion_main!(benches);
