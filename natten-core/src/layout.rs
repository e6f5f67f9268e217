use crate::{Error, Result, Shape};

/// A strided view over a flat buffer.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Layout {
    shape: Shape,
    // The strides are given in number of elements and not in bytes.
    stride: Vec<usize>,
    start_offset: usize,
}

impl Layout {
    pub fn new<S: Into<Shape>>(shape: S, stride: Vec<usize>, start_offset: usize) -> Result<Self> {
        let shape = shape.into();
        if shape.rank() != stride.len() {
            Err(Error::UnexpectedNumberOfDims {
                expected: shape.rank(),
                got: stride.len(),
                shape: shape.clone(),
            }
            .bt())?
        }
        Ok(Self {
            shape,
            stride,
            start_offset,
        })
    }

    pub fn contiguous_with_offset<S: Into<Shape>>(shape: S, start_offset: usize) -> Self {
        let shape = shape.into();
        let stride = shape.stride_contiguous();
        Self {
            shape,
            stride,
            start_offset,
        }
    }

    pub fn contiguous<S: Into<Shape>>(shape: S) -> Self {
        Self::contiguous_with_offset(shape, 0)
    }

    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn stride(&self) -> &[usize] {
        &self.stride
    }

    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    /// Returns true if the data is stored in a C contiguous (aka row major) way.
    pub fn is_contiguous(&self) -> bool {
        self.shape.is_contiguous(&self.stride)
    }

    /// The buffer position of the element at the given multi-dimensional index.
    pub fn offset(&self, index: &[usize]) -> usize {
        self.start_offset
            + index
                .iter()
                .zip(self.stride.iter())
                .map(|(i, s)| i * s)
                .sum::<usize>()
    }

    /// The minimum number of elements a buffer must hold for every position of this view to be
    /// addressable.
    pub fn required_len(&self) -> usize {
        if self.shape.elem_count() == 0 {
            return self.start_offset;
        }
        self.start_offset
            + self
                .dims()
                .iter()
                .zip(self.stride.iter())
                .map(|(d, s)| (d - 1) * s)
                .sum::<usize>()
            + 1
    }

    pub fn transpose(&self, dim1: usize, dim2: usize) -> Result<Self> {
        let rank = self.shape.rank();
        for dim in [dim1, dim2] {
            if dim >= rank {
                Err(Error::DimOutOfRange {
                    shape: self.shape.clone(),
                    dim,
                    op: "transpose",
                }
                .bt())?
            }
        }
        let mut stride = self.stride().to_vec();
        let mut dims = self.shape().dims().to_vec();
        dims.swap(dim1, dim2);
        stride.swap(dim1, dim2);
        Ok(Self {
            shape: Shape::from(dims),
            stride,
            start_offset: self.start_offset,
        })
    }
}
