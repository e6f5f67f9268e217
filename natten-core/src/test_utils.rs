use crate::{Layout, ParamsNeighborhood3D, WithDType};

/// Deterministic, not too regular, test data.
pub fn ramp<T: WithDType>(len: usize, offset: f64, scale: f64) -> Vec<T> {
    (0..len)
        .map(|i| T::from_f64(offset + scale * ((i * 7919) % 97) as f64))
        .collect()
}

/// Contiguous weights buffer where every cell of every window holds `value`.
pub fn uniform_weights<T: WithDType>(params: &ParamsNeighborhood3D, value: f64) -> (Vec<T>, Layout) {
    let shape = params.weights_dims();
    let data = vec![T::from_f64(value); shape.elem_count()];
    (data, Layout::contiguous(shape))
}

pub fn to_vec_round<T: WithDType>(data: &[T], digits: i32) -> Vec<f64> {
    let b = 10f64.powi(digits);
    data.iter().map(|v| f64::round(v.to_f64() * b) / b).collect()
}

pub fn assert_close<T: WithDType>(lhs: &[T], rhs: &[T], tol: f64) {
    assert_eq!(lhs.len(), rhs.len());
    for (i, (l, r)) in lhs.iter().zip(rhs.iter()).enumerate() {
        let (l, r) = (l.to_f64(), r.to_f64());
        assert!((l - r).abs() <= tol, "mismatch at {i}: {l} vs {r}");
    }
}
