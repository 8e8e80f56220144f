//! Benchmarks for keypad permutation.
//!
//! # Benchmarks
//!
//! - **`permute_callback`**: Recursive enumeration delivering each permutation
//!   to a callback that only counts it.
//! - **`permute_lazy`**: The same inputs drained through the lazy
//!   `Permutations` iterator, which allocates one `String` per item.
//!
//! # Test Data
//!
//! - **`258`**: 27 permutations, three-letter keys only
//! - **`79797`**: 1024 permutations, four-letter keys only
//! - **`23456789`**: 11664 permutations, every key once
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench permute
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use keypad_permuter::PermutationEngine;

const INPUTS: [&str; 3] = ["258", "79797", "23456789"];

fn bench_permute_callback(c: &mut Criterion) {
    let engine = PermutationEngine::new();

    for input in INPUTS {
        c.bench_with_input(
            BenchmarkId::new("permute_callback", input),
            &input,
            |b, input| {
                b.iter(|| {
                    let mut count = 0_usize;
                    engine
                        .permute(hint::black_box(*input), |permutation| {
                            hint::black_box(permutation);
                            count += 1;
                        })
                        .unwrap();
                    count
                });
            },
        );
    }
}

fn bench_permute_lazy(c: &mut Criterion) {
    let engine = PermutationEngine::new();

    for input in INPUTS {
        c.bench_with_input(
            BenchmarkId::new("permute_lazy", input),
            &input,
            |b, input| {
                b.iter(|| {
                    engine
                        .permutations(hint::black_box(*input))
                        .unwrap()
                        .map(hint::black_box)
                        .count()
                });
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .plotting_backend(PlottingBackend::Plotters)
        .measurement_time(Duration::from_secs(5));
    targets = bench_permute_callback, bench_permute_lazy
);
criterion_main!(benches);
