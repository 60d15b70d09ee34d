use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use csvgrid::{read_grid, CsvParser};
use tempfile::NamedTempFile;

fn synth_csv(rows: usize, quoted: bool) -> String {
    let mut out = String::new();
    for i in 0..rows {
        if quoted {
            out.push_str(&format!(
                "{i},\"name, {i}\",\"say \"\"hi\"\"\",{}\n",
                i * 100
            ));
        } else {
            out.push_str(&format!("{i},name_{i},{}\n", i * 100));
        }
    }
    out
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [100, 1_000, 10_000, 100_000].iter() {
        let plain = synth_csv(*size, false);
        group.bench_with_input(BenchmarkId::new("plain", size), &plain, |b, raw| {
            b.iter(|| {
                let grid = CsvParser::new().parse(black_box(raw)).unwrap();
                black_box(grid);
            });
        });

        let quoted = synth_csv(*size, true);
        group.bench_with_input(BenchmarkId::new("quoted", size), &quoted, |b, raw| {
            b.iter(|| {
                let grid = CsvParser::new().parse(black_box(raw)).unwrap();
                black_box(grid);
            });
        });
    }

    group.finish();
}

fn benchmark_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");

    for size in [1_000, 10_000].iter() {
        // Prepare test file
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), synth_csv(*size, false)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let grid = read_grid(temp.path()).unwrap();
                black_box(grid);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse, benchmark_read);
criterion_main!(benches);
