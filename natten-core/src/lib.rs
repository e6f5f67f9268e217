//! Neighborhood attention kernels for volumetric data.
//!
//! Neighborhood attention restricts each query to a local window of keys around it. This crate
//! implements the neighborhood-neighborhood product: given the attention weights of every query
//! over its window, it computes the weighted sum of the values in that window.
//!
//! ```rust
//! use natten_core::{attention_apply, AxisParams, Layout, ParamsNeighborhood3D};
//! # fn main() -> natten_core::Result<()> {
//! // A single 1x1x5 volume with 3 wide windows along the width axis.
//! let params = ParamsNeighborhood3D::new_1d(1, 1, 5, 1, AxisParams::new(3));
//! let attn = vec![1f32 / 3.; 5 * 3];
//! let attn_l = Layout::contiguous(params.weights_dims());
//! let value = vec![0f32, 3., 6., 9., 12.];
//!
//! let out = attention_apply(&attn, &attn_l, &value, &params)?;
//! // Windows are shifted inward at the boundaries rather than clipped.
//! assert_eq!(out, [3., 3., 6., 9., 9.]);
//! # Ok(())}
//! ```
//!
//! ## Windows
//!
//! - Non-causal windows hold `kernel_size` samples and are shifted at the axis boundaries.
//! - Causal windows only include the query and the positions before it.
//! - Dilation samples every `dilation`-th coordinate, on the sub-lattice of the query.
//!
//! Each spatial axis (depth, height, width) has its own [`AxisParams`]. 1D and 2D problems are
//! 3D problems with unit leading axes, see [`ParamsNeighborhood3D::new_1d`] and
//! [`ParamsNeighborhood3D::new_2d`].

pub mod cpu_backend;
mod dtype;
pub mod error;
pub mod index;
pub mod layout;
pub mod params;
pub mod shape;
pub mod test_utils;
pub mod utils;
pub mod window;

pub use cpu_backend::{
    attention_apply, neighborhood_neighborhood_3d, neighborhood_neighborhood_3d_in, query_grad,
    CpuStorage, Pass,
};
pub use dtype::{DType, DTypeParseError, WithDType};
pub use error::{Error, Result};
pub use index::{decompose, Position};
pub use layout::Layout;
pub use params::{AxisParams, ParamsNeighborhood3D};
pub use shape::Shape;
pub use window::{window_end, window_start, Window};
