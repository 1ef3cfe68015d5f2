pub mod other_impls;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use edge_tree::Coordinate;

//// Utility functions

/// A star-shaped ring with `n` vertices and a jagged radius, closed.
pub(crate) fn get_random_ring(n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results: Vec<Coordinate> = (0..n)
        .map(|i| {
            let angle = 2. * std::f64::consts::PI * (i as f64) / (n as f64);
            let radius = rng.gen_range(50., 100.);
            Coordinate::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect();
    results.push(results[0]);
    results
}

pub(crate) fn get_random_points(
    (x_min, y_min): (f64, f64),
    (x_max, y_max): (f64, f64),
    n: usize,
    seed: u64,
) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(x_min, x_max),
            rng.gen_range(y_min, y_max),
        ));
    }

    results
}
