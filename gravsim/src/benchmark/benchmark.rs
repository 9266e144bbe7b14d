use std::time::Instant;

use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, System};
use crate::simulation::vector::NVec2;

/// Deterministic body layout for timing runs, no rand needed
pub fn bench_system(n: usize) -> System {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = NVec2::new((i_f * 0.37).sin() * 50.0, (i_f * 0.13).cos() * 50.0);
            Body::new_unchecked(1.0, 0.01, x, NVec2::zeros(), 1.0)
        })
        .collect();
    System::new(bodies, Parameters::default())
}

/// Time `tick` (gravity, integration and the all-pairs contact pass) for growing n
pub fn bench_tick() {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 5;
    let dt = 0.001;

    for n in ns {
        let mut sys = bench_system(n);

        // Warm up
        sys.tick(dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            sys.tick(dt);
        }
        let per_tick = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, tick = {per_tick:10.6} s");
    }
}
