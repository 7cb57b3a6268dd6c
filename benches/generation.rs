use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use skillforge::data::{default_tier_table, Tier};
use skillforge::progression::{build_tier, sample_rarity, ContentGenerator, IdCounters};

fn bench_full_table(c: &mut Criterion) {
    let table = default_tier_table();
    c.bench_function("generate_all_tiers", |b| {
        b.iter(|| {
            let mut generator = ContentGenerator::with_rng(table.clone(), StdRng::seed_from_u64(42));
            black_box(generator.generate())
        })
    });
}

fn bench_master_tier(c: &mut Criterion) {
    let table = default_tier_table();
    let Some(master) = table.get(Tier::Master) else {
        return;
    };
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("build_master_tier", |b| {
        b.iter(|| {
            let mut counters = IdCounters::new();
            black_box(build_tier(master, &mut counters, &mut rng))
        })
    });
    c.bench_function("sample_rarity_master", |b| {
        b.iter(|| black_box(sample_rarity(&master.rarity, &mut rng)))
    });
}

criterion_group!(benches, bench_full_table, bench_master_tier);
criterion_main!(benches);
