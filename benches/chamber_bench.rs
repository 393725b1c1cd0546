use std::cell::RefCell;
use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use diffusion_chamber::chamber::{seed_particles, Chamber, ChamberConfig};
use diffusion_chamber::probe::{ConcentrationDensity, SystemEntropy};
use diffusion_chamber::scope::RecordingScope;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_seeding(c: &mut Criterion) {
    c.bench_function("seed 8000 particles in 100x100", |b| {
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            black_box(seed_particles(100, 100, 8000, 100_000, &mut rng).unwrap())
        })
    });
}

fn bench_update(c: &mut Criterion) {
    let mut chamber = Chamber::new(ChamberConfig::square(100, 75.0, 8000).with_seed(42)).unwrap();
    let scope = Rc::new(RefCell::new(RecordingScope::new()));
    chamber.add_hook(Box::new(ConcentrationDensity::new(chamber.state(), scope.clone())));
    chamber.add_hook(Box::new(SystemEntropy::new(chamber.state(), scope)));

    let mut cycle = 0;
    c.bench_function("update 100x100 with both probes", |b| {
        b.iter(|| {
            chamber.update(cycle).unwrap();
            cycle += 1;
        })
    });
}

criterion_group!(benches, bench_seeding, bench_update);
criterion_main!(benches);
