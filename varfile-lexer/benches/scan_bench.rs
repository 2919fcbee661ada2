use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use varfile_lexer::{ByteSource, Diagnostic, LineScanner};

fn generate_input(lines: usize) -> String {
    let mut input = String::with_capacity(lines * 32);
    for i in 0..lines {
        match i % 10 {
            0 => input.push_str("# section comment\n"),
            5 => input.push('\n'),
            _ => input.push_str(&format!("key_{} = some value {} with spaces\n", i, i)),
        }
    }
    input
}

fn bench_scan(c: &mut Criterion) {
    let input = generate_input(10_000);

    let mut group = c.benchmark_group("line_scanner");
    group.throughput(Throughput::Bytes(input.len() as u64));

    for capacity in [64, 4096, 65536] {
        group.bench_function(format!("capacity_{}", capacity), |b| {
            b.iter(|| {
                let source = ByteSource::with_capacity(
                    black_box(input.as_bytes()),
                    Vec::<Diagnostic>::new(),
                    capacity,
                );
                LineScanner::new(source).count()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
