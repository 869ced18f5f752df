//! Benchmarks for HandBrakeCLI scan output parsing
//!
//! Tests title extraction and longest-title selection on scan logs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use multirip_av::{find_play_all_title, parse_titles};

/// Build a scan log with `titles` title blocks, each padded with noise lines.
fn scan_output(titles: u32) -> String {
    let mut out = String::from(
        "[12:00:01] hb_init: starting libhb thread\n\
         [12:00:02] scan: DVD has 1 title(s)\n",
    );
    for t in 1..=titles {
        let minutes = (t * 7) % 60;
        out.push_str(&format!(
            "+ title {t}:\n  \
             + vts 1, ttn {t}, cells 0->12 (1234 blocks)\n  \
             + duration: 00:{minutes:02}:30\n  \
             + size: 720x480, pixel aspect: 32/27, display aspect: 1.78, 29.970 fps\n  \
             + autocrop: 0/0/0/0\n  \
             + chapters:\n    \
             + 1: duration 00:05:00\n  \
             + audio tracks:\n    \
             + 1, English (AC3) (5.1 ch) (iso639-2: eng)\n  \
             + subtitle tracks:\n"
        ));
    }
    out.push_str("HandBrake has exited.\n");
    out
}

fn bench_parse_titles(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_titles");

    for titles in [1, 10, 99] {
        let output = scan_output(titles);
        group.throughput(Throughput::Bytes(output.len() as u64));
        group.bench_with_input(BenchmarkId::new("titles", titles), &output, |b, out| {
            b.iter(|| parse_titles(black_box(out)));
        });
    }

    group.finish();
}

fn bench_find_play_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_play_all_title");

    for titles in [10, 99] {
        let output = scan_output(titles);
        group.bench_with_input(BenchmarkId::new("titles", titles), &output, |b, out| {
            b.iter(|| find_play_all_title(black_box(out)));
        });
    }

    let empty = scan_output(0);
    group.bench_function("no_titles", |b| {
        b.iter(|| find_play_all_title(black_box(&empty)));
    });

    group.finish();
}

criterion_group!(benches, bench_parse_titles, bench_find_play_all);
criterion_main!(benches);
