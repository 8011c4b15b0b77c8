use std::{collections::HashSet, hint::black_box, time::Duration};

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{RngExt, SeedableRng, rngs::StdRng};
use seqkit::prelude::*;

fn distinct(criterion: &mut Criterion) {
    let seed = 0;
    let mut rng = StdRng::seed_from_u64(seed);

    macro_rules! bench_fn {
        ($group:ident.$fn_name:ident($nums:expr)) => {
            $group.bench_function(stringify!($fn_name), |bencher| {
                bencher.iter(|| $fn_name(black_box($nums)));
            });
        };
    }

    // Few distinct values: the set stays small.
    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(0..1_000))
        .take(500_000)
        .collect();
    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);
    let mut group = criterion.benchmark_group("distinct_many_duplicates");
    bench_fn!(group.manual_distinct(&nums));
    bench_fn!(group.seq_distinct_list(&nums));
    bench_fn!(group.seq_distinct_by(&nums));
    group.finish();

    // Mostly distinct values.
    let nums: Box<_> = std::iter::repeat_with(|| rng.random_range(0..i32::MAX))
        .take(500_000)
        .collect();
    println!("Seed: {seed}");
    println!("First 10 elements: {:?}", &nums[..10]);
    let mut group = criterion.benchmark_group("distinct_few_duplicates");
    bench_fn!(group.manual_distinct(&nums));
    bench_fn!(group.seq_distinct_list(&nums));
    bench_fn!(group.seq_distinct_by(&nums));
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .warm_up_time(Duration::from_secs(5))
        .measurement_time(Duration::from_secs(20))
        .sample_size(100);
    targets = distinct
}
criterion_main!(benches);

fn manual_distinct(nums: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::new();
    nums.iter().copied().filter(|&num| seen.insert(num)).collect()
}

fn seq_distinct_list(nums: &[i32]) -> Vec<i32> {
    nums.iter().copied().distinct_list()
}

fn seq_distinct_by(nums: &[i32]) -> Vec<i32> {
    nums.iter().copied().distinct_by(|&num| num)
}
