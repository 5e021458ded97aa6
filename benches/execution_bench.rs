use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lispline::{evaluate_source, CharSource, SymbolScanner, Token};
use std::io::Cursor;

fn scanner_benchmark(c: &mut Criterion) {
    let source = "(SET X 42)\n(SET Y 10)\n(+ X (* Y 2) (- X Y))\n".repeat(20);

    c.bench_function("scan simple program", |b| {
        b.iter(|| {
            let input = Cursor::new(black_box(source.as_bytes()));
            let mut scanner = SymbolScanner::new(CharSource::new(input));
            let mut count = 0usize;
            while scanner.next_symbol().unwrap() != &Token::EndOfFile {
                count += 1;
            }
            count
        })
    });
}

fn evaluation_benchmark(c: &mut Criterion) {
    let arithmetic = "(SET X 42)\n(SET Y 10)\n(+ X (* Y 2) (- X Y) (/ X 3))\n(< 1 X Y)\n";
    let lists = "(CAR (QUOTE (1 2 3)))\n(CDR (LIST 4 5 6))\n'(A (B C) D)\n";

    c.bench_function("evaluate arithmetic", |b| {
        b.iter(|| evaluate_source(black_box(arithmetic)).unwrap())
    });

    c.bench_function("evaluate list primitives", |b| {
        b.iter(|| evaluate_source(black_box(lists)).unwrap())
    });
}

criterion_group!(benches, scanner_benchmark, evaluation_benchmark);
criterion_main!(benches);
