pub(crate) mod neighborhood;
pub(crate) mod window;

use natten_core::{ParamsNeighborhood3D, WithDType};
use rand::{rngs::StdRng, Rng, SeedableRng};

pub(crate) fn bench_name<S: Into<String>>(name: S) -> String {
    format!("cpu_{}", name.into())
}

/// Random weights and values for the given problem, weights laid out contiguously.
pub(crate) fn random_inputs<T: WithDType>(params: &ParamsNeighborhood3D) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(299792458);
    let weights = (0..params.weights_dims().elem_count())
        .map(|_| T::from_f64(rng.random::<f64>()))
        .collect();
    let values = (0..params.out_elem_count())
        .map(|_| T::from_f64(rng.random_range(-1.0..1.0)))
        .collect();
    (weights, values)
}
