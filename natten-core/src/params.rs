use crate::{Error, Result, Shape};

/// Window configuration along one spatial axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisParams {
    pub kernel_size: usize,
    pub dilation: usize,
    pub is_causal: bool,
}

impl AxisParams {
    pub fn new(kernel_size: usize) -> Self {
        Self {
            kernel_size,
            dilation: 1,
            is_causal: false,
        }
    }

    pub fn with_dilation(mut self, dilation: usize) -> Self {
        self.dilation = dilation;
        self
    }

    pub fn causal(mut self, is_causal: bool) -> Self {
        self.is_causal = is_causal;
        self
    }

    /// Half-window radius, `kernel_size / 2` rounded down.
    pub fn neighborhood_size(&self) -> usize {
        self.kernel_size / 2
    }

    fn validate(&self, axis: usize, op: &'static str) -> Result<()> {
        if self.kernel_size == 0 {
            Err(Error::InvalidKernelSize {
                axis,
                kernel_size: self.kernel_size,
                op,
            }
            .bt())?
        }
        if self.dilation == 0 {
            Err(Error::InvalidDilation {
                axis,
                dilation: self.dilation,
                op,
            }
            .bt())?
        }
        if self.kernel_size.checked_mul(self.dilation).is_none() {
            Err(Error::WindowExtentOverflow {
                axis,
                kernel_size: self.kernel_size,
                dilation: self.dilation,
                op,
            }
            .bt())?
        }
        Ok(())
    }
}

impl Default for AxisParams {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Geometry of a 3D neighborhood aggregation.
///
/// The spatial axes are ordered (depth, height, width). The values and output buffers hold
/// `[b_size, heads, depth, height, width, dim]` densely packed elements, the weights buffer
/// holds `[b_size, heads, depth, height, width, window_volume]` elements with arbitrary strides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamsNeighborhood3D {
    pub b_size: usize,
    pub heads: usize,
    pub depth: usize,
    pub height: usize,
    pub width: usize,
    pub dim: usize,
    pub axes: [AxisParams; 3],
    /// Minimum number of positions handed to a worker at once, 0 lets rayon decide.
    pub grain_size: usize,
}

impl ParamsNeighborhood3D {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        b_size: usize,
        heads: usize,
        depth: usize,
        height: usize,
        width: usize,
        dim: usize,
        axes: [AxisParams; 3],
    ) -> Self {
        Self {
            b_size,
            heads,
            depth,
            height,
            width,
            dim,
            axes,
            grain_size: 0,
        }
    }

    /// A 1D problem over a sequence of `length` tokens, laid out as a 3D problem with unit depth
    /// and height.
    pub fn new_1d(b_size: usize, heads: usize, length: usize, dim: usize, axis: AxisParams) -> Self {
        let unit = AxisParams::new(1);
        Self::new(b_size, heads, 1, 1, length, dim, [unit, unit, axis])
    }

    /// A 2D problem laid out as a 3D problem with unit depth.
    pub fn new_2d(
        b_size: usize,
        heads: usize,
        height: usize,
        width: usize,
        dim: usize,
        axes: [AxisParams; 2],
    ) -> Self {
        let unit = AxisParams::new(1);
        Self::new(b_size, heads, 1, height, width, dim, [unit, axes[0], axes[1]])
    }

    pub fn with_grain_size(mut self, grain_size: usize) -> Self {
        self.grain_size = grain_size;
        self
    }

    /// Number of weights per query position.
    pub fn window_volume(&self) -> usize {
        self.axes.iter().map(|a| a.kernel_size).product()
    }

    /// Spatial extents, in (depth, height, width) order.
    pub fn spatial_dims(&self) -> [usize; 3] {
        [self.depth, self.height, self.width]
    }

    /// Number of independent (batch, head, depth, height, width) positions.
    pub fn positions(&self) -> usize {
        self.b_size * self.heads * self.depth * self.height * self.width
    }

    pub fn weights_dims(&self) -> Shape {
        Shape::from((
            self.b_size,
            self.heads,
            self.depth,
            self.height,
            self.width,
            self.window_volume(),
        ))
    }

    pub fn values_dims(&self) -> Shape {
        Shape::from((
            self.b_size,
            self.heads,
            self.depth,
            self.height,
            self.width,
            self.dim,
        ))
    }

    pub fn out_elem_count(&self) -> usize {
        self.positions() * self.dim
    }

    pub(crate) fn validate(&self, op: &'static str) -> Result<()> {
        for (axis, params) in self.axes.iter().enumerate() {
            params.validate(axis, op)?
        }
        let volume = self
            .axes
            .iter()
            .try_fold(1usize, |acc, a| acc.checked_mul(a.kernel_size));
        if volume.is_none() {
            Err(Error::WindowVolumeOverflow {
                kernel_sizes: self.axes.map(|a| a.kernel_size),
                op,
            }
            .bt())?
        }
        Ok(())
    }
}
