use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use optimal_paging::{EvictionPolicy, Simulator, SimulatorConfig};

// Deterministic pseudo-random reference string (xorshift)
fn generate_references(len: usize, pages: u32) -> Vec<u32> {
    let mut state: u32 = 0x9E37_79B9;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state % pages
        })
        .collect()
}

fn simulate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simulate");

    for len in [100usize, 1_000, 10_000].iter() {
        let references = generate_references(*len, 16);

        for policy in [EvictionPolicy::Optimal, EvictionPolicy::Literal] {
            let simulator = Simulator::from_config(SimulatorConfig::default().policy(policy));

            group.bench_with_input(
                BenchmarkId::new(policy.to_string(), len),
                &references,
                |b, references| {
                    b.iter(|| simulator.run(black_box(references), None));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, simulate_benchmark);
criterion_main!(benches);
