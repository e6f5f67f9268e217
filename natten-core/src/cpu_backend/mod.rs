//! Implementation of the neighborhood kernels on CPU.
use half::{bf16, f16};
use rayon::ThreadPool;

use crate::{params::ParamsNeighborhood3D, DType, Error, Layout, Result, WithDType};

mod neighborhood;
mod utils;

pub use neighborhood::Pass;
use neighborhood::NeighborhoodNeighborhood3D;
pub use utils::Map2;

#[derive(Debug, Clone)]
pub enum CpuStorage {
    BF16(Vec<bf16>),
    F16(Vec<f16>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl CpuStorage {
    pub fn dtype(&self) -> DType {
        match self {
            Self::BF16(_) => DType::BF16,
            Self::F16(_) => DType::F16,
            Self::F32(_) => DType::F32,
            Self::F64(_) => DType::F64,
        }
    }

    pub fn as_slice<T: WithDType>(&self) -> Result<&[T]> {
        T::cpu_storage_as_slice(self)
    }

    /// Neighborhood aggregation over dtype-tagged buffers, see [`neighborhood_neighborhood_3d`].
    pub fn neighborhood_neighborhood_3d(
        &self,
        weights_l: &Layout,
        values: &Self,
        params: &ParamsNeighborhood3D,
        pass: Pass,
    ) -> Result<Self> {
        NeighborhoodOp { params, pass }.map(self, weights_l, values)
    }
}

impl<T: WithDType> From<Vec<T>> for CpuStorage {
    fn from(data: Vec<T>) -> Self {
        T::to_cpu_storage_owned(data)
    }
}

struct NeighborhoodOp<'a> {
    params: &'a ParamsNeighborhood3D,
    pass: Pass,
}

impl Map2 for NeighborhoodOp<'_> {
    fn op(&self) -> &'static str {
        self.pass.op()
    }

    fn f<T: WithDType>(&self, weights: &[T], weights_l: &Layout, values: &[T]) -> Result<Vec<T>> {
        let mut dst = vec![T::zero(); self.params.out_elem_count()];
        neighborhood_neighborhood_3d(weights, weights_l, values, &mut dst, self.params, self.pass)?;
        Ok(dst)
    }
}

fn check_buffers<T>(
    weights: &[T],
    weights_l: &Layout,
    values: &[T],
    dst: &[T],
    params: &ParamsNeighborhood3D,
    op: &'static str,
) -> Result<()> {
    params.validate(op)?;
    let expected = params.weights_dims();
    if weights_l.shape() != &expected {
        Err(Error::WeightsShapeMismatch {
            expected,
            got: weights_l.shape().clone(),
            op,
        }
        .bt())?
    }
    if weights.len() < weights_l.required_len() {
        Err(Error::ShapeMismatch {
            buffer_size: weights.len(),
            shape: weights_l.shape().clone(),
        }
        .bt())?
    }
    let values_dims = params.values_dims();
    for buffer_size in [values.len(), dst.len()] {
        if buffer_size != values_dims.elem_count() {
            Err(Error::ShapeMismatch {
                buffer_size,
                shape: values_dims.clone(),
            }
            .bt())?
        }
    }
    Ok(())
}

/// Neighborhood-neighborhood product for 3D data, written into a caller provided buffer.
///
/// `weights` is described by `weights_l`, a rank 6 layout of dims
/// `[b_size, heads, depth, height, width, window_volume]` with arbitrary strides. `values` and
/// `dst` are densely packed `[b_size, heads, depth, height, width, dim]` buffers. Each element of
/// `dst` is written exactly once.
///
/// The work is split over the current rayon thread pool, see
/// [`neighborhood_neighborhood_3d_in`] to run on a dedicated one.
pub fn neighborhood_neighborhood_3d<T: WithDType>(
    weights: &[T],
    weights_l: &Layout,
    values: &[T],
    dst: &mut [T],
    params: &ParamsNeighborhood3D,
    pass: Pass,
) -> Result<()> {
    let op = pass.op();
    check_buffers(weights, weights_l, values, dst, params, op)?;
    let _span = tracing::span!(
        tracing::Level::TRACE,
        "neighborhood_neighborhood_3d",
        op = op,
        dtype = T::DTYPE.as_str(),
        b_size = params.b_size,
        heads = params.heads,
        depth = params.depth,
        height = params.height,
        width = params.width,
        dim = params.dim
    )
    .entered();
    tracing::debug!(
        positions = params.positions(),
        window_volume = params.window_volume(),
        grain_size = params.grain_size,
        "aggregating neighborhoods"
    );
    NeighborhoodNeighborhood3D(params).f(weights, weights_l, values, dst)
}

/// Same as [`neighborhood_neighborhood_3d`] but runs on the given thread pool.
pub fn neighborhood_neighborhood_3d_in<T: WithDType>(
    pool: &ThreadPool,
    weights: &[T],
    weights_l: &Layout,
    values: &[T],
    dst: &mut [T],
    params: &ParamsNeighborhood3D,
    pass: Pass,
) -> Result<()> {
    pool.install(|| neighborhood_neighborhood_3d(weights, weights_l, values, dst, params, pass))
}

/// Applies neighborhood attention weights to the values, returning the attention output.
pub fn attention_apply<T: WithDType>(
    attn: &[T],
    attn_l: &Layout,
    value: &[T],
    params: &ParamsNeighborhood3D,
) -> Result<Vec<T>> {
    let mut out = vec![T::zero(); params.out_elem_count()];
    neighborhood_neighborhood_3d(attn, attn_l, value, &mut out, params, Pass::AttentionValue)?;
    Ok(out)
}

/// Gradient of the queries given the gradient of the attention weights and the keys.
pub fn query_grad<T: WithDType>(
    d_attn: &[T],
    d_attn_l: &Layout,
    key: &[T],
    params: &ParamsNeighborhood3D,
) -> Result<Vec<T>> {
    let mut d_query = vec![T::zero(); params.out_elem_count()];
    neighborhood_neighborhood_3d(d_attn, d_attn_l, key, &mut d_query, params, Pass::QueryGrad)?;
    Ok(d_query)
}
