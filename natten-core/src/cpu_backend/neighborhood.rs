use num_traits::Zero;
use rayon::prelude::*;

use crate::{
    index::decompose, params::ParamsNeighborhood3D, shape::dims6, window::Window, Layout, Result,
    WithDType,
};

/// The logical role played by the buffers of a neighborhood-neighborhood product.
///
/// Both passes run the exact same reduction, only the meaning of the buffers differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// weights: attention probabilities, values: values, output: attention output.
    AttentionValue,
    /// weights: gradient of the attention weights, values: keys, output: gradient of the queries.
    QueryGrad,
}

impl Pass {
    pub fn op(&self) -> &'static str {
        match self {
            Self::AttentionValue => "na3d-av",
            Self::QueryGrad => "na3d-qgrad",
        }
    }
}

/// Weighted sum of the values over the neighborhood of every query position.
///
/// The weights of a position are stored compactly, one per window cell in row-major
/// (depth, height, width) order, so the window-local index of a sampled coordinate is taken
/// relative to the window start of that position.
pub(crate) struct NeighborhoodNeighborhood3D<'a>(pub(crate) &'a ParamsNeighborhood3D);

impl NeighborhoodNeighborhood3D<'_> {
    pub(crate) fn f<T: WithDType>(
        &self,
        weights: &[T],
        weights_l: &Layout,
        values: &[T],
        dst: &mut [T],
    ) -> Result<()> {
        let p = self.0;
        let weights = &weights[weights_l.start_offset()..];
        let (w_s0, w_s1, w_s2, w_s3, w_s4, w_s5) = dims6(weights_l.stride())?;
        // Values and output share the same dense layout.
        let values_l = Layout::contiguous(p.values_dims());
        let (v_s0, v_s1, v_s2, v_s3, v_s4, _) = dims6(values_l.stride())?;

        let [ax_k, ax_i, ax_j] = &p.axes;
        let (ks_i, ks_j) = (ax_i.kernel_size, ax_j.kernel_size);
        let [depth, height, width] = p.spatial_dims();
        let (heads, dim) = (p.heads, p.dim);
        if dim == 0 || p.positions() == 0 {
            return Ok(());
        }

        // `par_chunks_mut` hands out non-overlapping rows of `dim` elements, one per position, so
        // no two work items ever write the same output location.
        dst.par_chunks_mut(dim)
            .with_min_len(p.grain_size.max(1))
            .enumerate()
            .for_each_init(
                || vec![<T::Accum as Zero>::zero(); dim],
                |acc, (x, dst_row)| {
                    let pos = decompose(x, heads, depth, height, width);
                    let wk = Window::new(pos.depth, depth, ax_k);
                    let wi = Window::new(pos.height, height, ax_i);
                    let wj = Window::new(pos.width, width, ax_j);

                    let w_base = pos.batch * w_s0
                        + pos.head * w_s1
                        + pos.depth * w_s2
                        + pos.height * w_s3
                        + pos.width * w_s4;
                    let v_base = pos.batch * v_s0 + pos.head * v_s1;

                    acc.fill(<T::Accum as Zero>::zero());
                    for xk in wk.iter() {
                        let local_k = wk.local_index(xk) * ks_i * ks_j;
                        for xi in wi.iter() {
                            let local_ki = local_k + wi.local_index(xi) * ks_j;
                            for xj in wj.iter() {
                                let local = local_ki + wj.local_index(xj);
                                let w = weights[w_base + local * w_s5].to_accum();
                                let v_offset = v_base + xk * v_s2 + xi * v_s3 + xj * v_s4;
                                let v_row = &values[v_offset..v_offset + dim];
                                for (a, v) in acc.iter_mut().zip(v_row.iter()) {
                                    *a += w * v.to_accum();
                                }
                            }
                        }
                    }
                    for (d, a) in dst_row.iter_mut().zip(acc.iter()) {
                        *d = T::from_accum(*a);
                    }
                },
            );
        Ok(())
    }
}
