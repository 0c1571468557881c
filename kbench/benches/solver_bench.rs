use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kbench::generator::{GeneratorConfig, InstanceGenerator};
use knapsack_rs::entities::KnapsackInstance;
use knapsack_rs::solvers::{DpStorage, ExactSolver, GreedySolver, Solver};
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion_main!(benches);
criterion_group!(benches, capacity_scaling_bench, item_scaling_bench);

const CAPACITIES: [u64; 4] = [100, 1_000, 10_000, 100_000];
const N_ITEMS: [usize; 3] = [50, 200, 800];

/// Instance with `n_items` random items, the capacity is set afterwards
fn create_instance(n_items: usize) -> KnapsackInstance {
    let config = GeneratorConfig {
        max_items: n_items,
        max_value: 100,
        max_weight: 1000,
    };
    let mut generator = InstanceGenerator::new(config, SmallRng::seed_from_u64(0));
    //regenerate until the instance has the requested size
    loop {
        let instance = generator.generate(false).expect("generator produced invalid instance");
        if instance.n_items() == n_items {
            return instance;
        }
    }
}

/// The exact solver scales with the capacity, the greedy solver does not.
fn capacity_scaling_bench(c: &mut Criterion) {
    let base = create_instance(200);

    let mut group = c.benchmark_group("capacity_scaling");
    for capacity in CAPACITIES {
        let instance = base.with_capacity(capacity);
        for storage in [DpStorage::Table, DpStorage::RollingRow] {
            let solver = ExactSolver::new(storage);
            group.bench_with_input(
                BenchmarkId::new(format!("exact_{storage:?}"), capacity),
                &instance,
                |b, instance| b.iter(|| solver.solve(black_box(instance))),
            );
        }
        let solver = GreedySolver::default();
        group.bench_with_input(BenchmarkId::new("greedy", capacity), &instance, |b, instance| {
            b.iter(|| solver.solve(black_box(instance)))
        });
    }
    group.finish();
}

fn item_scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("item_scaling");
    for n_items in N_ITEMS {
        let instance = create_instance(n_items).with_capacity(1_000);
        let exact = ExactSolver::default();
        group.bench_with_input(BenchmarkId::new("exact", n_items), &instance, |b, instance| {
            b.iter(|| exact.solve(black_box(instance)))
        });
        let greedy = GreedySolver::default();
        group.bench_with_input(BenchmarkId::new("greedy", n_items), &instance, |b, instance| {
            b.iter(|| greedy.solve(black_box(instance)))
        });
    }
    group.finish();
}
