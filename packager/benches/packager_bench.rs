use std::hint::black_box;
use std::sync::Arc;

use boxstack::entities::{
    AllowedRotation, Container, DefaultPackResultComparator, Stackable, StackableItem,
};
use boxstack::permutation::split_permutations;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use packager::config::{PackagerConfig, Strategy};
use packager::opt::brute_force::BruteForcePackager;
use packager::opt::laff::LaffPackager;
use packager::opt::packager::Packager;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, split_bench, laff_bench, brute_force_bench);

const N_WORKERS: [usize; 3] = [1, 4, 16];

fn random_items(rng: &mut SmallRng, n_templates: usize, max_count: usize) -> Vec<StackableItem> {
    (0..n_templates)
        .map(|_| {
            let stackable = Stackable::new(
                rng.random_range(1..=4),
                rng.random_range(1..=4),
                rng.random_range(1..=4),
                rng.random_range(1..=10),
                AllowedRotation::ThreeD,
            )
            .unwrap();
            StackableItem::new(stackable, rng.random_range(1..=max_count)).unwrap()
        })
        .collect()
}

fn containers() -> Vec<Container> {
    [(4, 4, 4), (6, 4, 4), (6, 6, 4), (6, 6, 6), (8, 8, 8)]
        .into_iter()
        .map(|(dx, dy, dz)| Container::with_load_space(dx, dy, dz, 1000).unwrap())
        .collect()
}

/// Splitting the permutation space of a 12-copy multiset into slices
fn split_bench(c: &mut Criterion) {
    let frequencies = [3, 2, 2, 1, 1, 1, 1, 1];
    let mut group = c.benchmark_group("split_permutations");
    for n_workers in N_WORKERS {
        group.bench_function(BenchmarkId::from_parameter(n_workers), |b| {
            b.iter(|| split_permutations(black_box(&frequencies), n_workers).unwrap())
        });
    }
    group.finish();
}

fn laff_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let items = random_items(&mut rng, 10, 6);
    let config = PackagerConfig::default();
    let packager =
        Packager::new(containers(), LaffPackager::from_config(&config), config).unwrap();

    c.bench_function("laff_pack_list", |b| {
        b.iter(|| packager.pack_list(black_box(&items), 10).unwrap())
    });
}

fn brute_force_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let items = random_items(&mut rng, 4, 2);

    let mut group = c.benchmark_group("brute_force_pack");
    group.sample_size(10);
    for n_workers in N_WORKERS {
        let config = PackagerConfig {
            strategy: Strategy::BruteForce,
            n_workers,
            ..PackagerConfig::default()
        };
        let strategy = BruteForcePackager::new(&config, Arc::new(DefaultPackResultComparator));
        let packager = Packager::new(containers(), strategy, config).unwrap();
        group.bench_function(BenchmarkId::from_parameter(n_workers), |b| {
            b.iter(|| packager.pack(black_box(&items)).unwrap())
        });
    }
    group.finish();
}
