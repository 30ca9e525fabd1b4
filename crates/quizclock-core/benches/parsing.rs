use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizclock_core::parser::parse_problems;

fn bench_parse_problems(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_problems");

    let small = "5+5,10\n7+3,10\n1+1,2\n8+3,11\n1+2,3\n";

    let quoted = {
        let mut s = String::new();
        for i in 0..100 {
            s.push_str(&format!("\"what is {i}, doubled?\",  {} \n", i * 2));
        }
        s
    };

    let large = {
        let mut s = String::new();
        for i in 0..10_000 {
            s.push_str(&format!("{i}+{i},{}\n", i + i));
        }
        s
    };

    let source = Path::new("bench.csv");

    group.bench_function("small", |b| {
        b.iter(|| parse_problems(black_box(small.as_bytes()), source))
    });

    group.bench_function("quoted", |b| {
        b.iter(|| parse_problems(black_box(quoted.as_bytes()), source))
    });

    group.bench_function("large", |b| {
        b.iter(|| parse_problems(black_box(large.as_bytes()), source))
    });

    group.finish();
}

criterion_group!(benches, bench_parse_problems);
criterion_main!(benches);
