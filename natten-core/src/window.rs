//! Window geometry along a single spatial axis.
//!
//! A window is a half-open range `[start, end)` sampled every `dilation` coordinates. All the
//! sampled coordinates share the residue of the query index modulo the dilation, i.e. they live
//! on the dilated sub-lattice of the query.
//!
//! Non-causal windows hold `kernel_size` samples centered on the query and are shifted inward,
//! never clipped, when they would run past either end of the axis. Causal windows only look at
//! the query and the positions before it and are truncated at the start of the axis.
use crate::params::AxisParams;

/// Inclusive first coordinate of the window of `index` along an axis of `length` elements.
pub fn window_start(
    index: usize,
    length: usize,
    kernel_size: usize,
    neighborhood_size: usize,
    dilation: usize,
    is_causal: bool,
) -> usize {
    let residue = index % dilation;
    if is_causal {
        return index
            .checked_sub(kernel_size.saturating_sub(1).saturating_mul(dilation))
            .unwrap_or(residue);
    }
    // Number of axis coordinates congruent to `index` modulo the dilation.
    let lattice_len = length.saturating_sub(residue).div_ceil(dilation);
    let pos = index / dilation;
    let pos = pos
        .saturating_sub(neighborhood_size)
        .min(lattice_len.saturating_sub(kernel_size));
    residue + pos * dilation
}

/// Exclusive end coordinate of the window of `index`, `start` being its `window_start`.
pub fn window_end(
    index: usize,
    start: usize,
    length: usize,
    kernel_size: usize,
    dilation: usize,
    is_causal: bool,
) -> usize {
    let end = if is_causal {
        usize::min(index.saturating_add(dilation), length)
    } else {
        usize::min(start.saturating_add(kernel_size.saturating_mul(dilation)), length)
    };
    end.max(start)
}

/// The sampled range of an axis for a given query index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
    pub dilation: usize,
}

impl Window {
    pub fn new(index: usize, length: usize, axis: &AxisParams) -> Self {
        let start = window_start(
            index,
            length,
            axis.kernel_size,
            axis.neighborhood_size(),
            axis.dilation,
            axis.is_causal,
        );
        let end = window_end(
            index,
            start,
            length,
            axis.kernel_size,
            axis.dilation,
            axis.is_causal,
        );
        Self {
            start,
            end,
            dilation: axis.dilation,
        }
    }

    /// Number of sampled coordinates.
    pub fn len(&self) -> usize {
        (self.end - self.start).div_ceil(self.dilation)
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// The sampled coordinates, in increasing order.
    pub fn iter(&self) -> std::iter::StepBy<std::ops::Range<usize>> {
        (self.start..self.end).step_by(self.dilation)
    }

    /// Position of a sampled coordinate within the window, independent of where the window sits
    /// on the axis.
    #[inline(always)]
    pub fn local_index(&self, coord: usize) -> usize {
        (coord - self.start) / self.dilation
    }
}

impl IntoIterator for &Window {
    type Item = usize;
    type IntoIter = std::iter::StepBy<std::ops::Range<usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
