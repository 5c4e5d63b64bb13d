use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hygodel::encoding::MAX_PRIME_CAPACITY;
use hygodel::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

const SIMPLE: &str = "∀x∃y(x+Sy=z)";

fn build_complex_formula() -> String {
    // Long well-formed formula, seeded for determinism.
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);

    fn next_term(budget: usize, rng: &mut impl Rng, out: &mut String) {
        if budget == 0 || rng.random_bool(0.2) {
            out.push(['0', 'x', 'y', 'z'][rng.random_range(0..4)]);
            return;
        }

        match rng.random_range(0..=3) {
            0 => {
                out.push('S');
                next_term(budget - 1, rng, out);
            }
            1 => {
                out.push('¬');
                next_term(budget - 1, rng, out);
            }
            2 => {
                out.push(['∀', '∃'][rng.random_range(0..2)]);
                out.push(['x', 'y', 'z'][rng.random_range(0..3)]);
                out.push('(');
                next_term(budget - 1, rng, out);
                out.push(')');
            }
            _ => {
                out.push('(');
                next_term(budget - 1, rng, out);
                out.push(['+', '*', '∨', '∧', '→', '↔', '='][rng.random_range(0..7)]);
                next_term(budget - 1, rng, out);
                out.push(')');
            }
        }
    }

    let mut out = String::new();
    while !(200..=MAX_PRIME_CAPACITY).contains(&out.chars().count()) {
        out.clear();
        next_term(10, &mut rng, &mut out);
    }
    out
}

fn bench_encode(c: &mut Criterion) {
    let complex = build_complex_formula();
    let encoder = GodelEncoder::with_capacity(complex.chars().count()).unwrap();

    c.bench_function("encode_simple", |b| {
        b.iter(|| black_box(encoder.encode(black_box(SIMPLE))))
    });

    c.bench_function("encode_complex", |b| {
        b.iter(|| black_box(encoder.encode(black_box(&complex))))
    });
}

fn bench_parse_and_steps(c: &mut Criterion) {
    let complex = build_complex_formula();
    let tokens = tokenize(&complex);

    c.bench_function("parse_complex", |b| {
        b.iter(|| black_box(parse(black_box(&tokens))))
    });

    c.bench_function("parse_strict_complex", |b| {
        b.iter(|| black_box(parse_formula_strict(black_box(&complex))))
    });

    let tree = parse(&tokens);
    c.bench_function("build_steps_complex", |b| {
        b.iter(|| black_box(build_steps(black_box(&tree))))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let complex = build_complex_formula();
    let pipeline = Pipeline::new(GodelConfig {
        prime_capacity: complex.chars().count(),
        ..GodelConfig::default()
    })
    .unwrap();

    c.bench_function("pipeline_complex", |b| {
        b.iter(|| black_box(pipeline.run(black_box(&complex))))
    });
}

criterion_group!(benches, bench_encode, bench_parse_and_steps, bench_pipeline);
criterion_main!(benches);
