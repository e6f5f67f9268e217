use crate::{DType, Shape};

/// Main library error type.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{msg}, expected: {expected:?}, got: {got:?}")]
    UnexpectedDType {
        msg: &'static str,
        expected: DType,
        got: DType,
    },

    #[error("dtype mismatch in {op}, lhs: {lhs:?}, rhs: {rhs:?}")]
    DTypeMismatchBinaryOp {
        lhs: DType,
        rhs: DType,
        op: &'static str,
    },

    #[error("{op}: dimension index {dim} out of range for {shape:?}")]
    DimOutOfRange {
        shape: Shape,
        dim: usize,
        op: &'static str,
    },

    #[error("unexpected rank, expected: {expected}, got: {got} ({shape:?})")]
    UnexpectedNumberOfDims {
        expected: usize,
        got: usize,
        shape: Shape,
    },

    #[error(
        "shape mismatch, got buffer of size {buffer_size} which is not compatible with shape {shape:?}"
    )]
    ShapeMismatch { buffer_size: usize, shape: Shape },

    #[error("{op}: weights shape mismatch, expected: {expected:?}, got: {got:?}")]
    WeightsShapeMismatch {
        expected: Shape,
        got: Shape,
        op: &'static str,
    },

    #[error("{op}: kernel size along axis {axis} must be positive, got {kernel_size}")]
    InvalidKernelSize {
        axis: usize,
        kernel_size: usize,
        op: &'static str,
    },

    #[error("{op}: dilation along axis {axis} must be positive, got {dilation}")]
    InvalidDilation {
        axis: usize,
        dilation: usize,
        op: &'static str,
    },

    #[error("{op}: window extent along axis {axis} overflows, kernel size {kernel_size}, dilation {dilation}")]
    WindowExtentOverflow {
        axis: usize,
        kernel_size: usize,
        dilation: usize,
        op: &'static str,
    },

    #[error("{op}: window volume overflows, kernel sizes {kernel_sizes:?}")]
    WindowVolumeOverflow {
        kernel_sizes: [usize; 3],
        op: &'static str,
    },

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{inner}\n{backtrace}")]
    WithBacktrace {
        inner: Box<Self>,
        backtrace: Box<std::backtrace::Backtrace>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attaches a backtrace to the error when backtraces are enabled through `RUST_BACKTRACE`.
    pub fn bt(self) -> Self {
        let backtrace = std::backtrace::Backtrace::capture();
        match backtrace.status() {
            std::backtrace::BacktraceStatus::Disabled
            | std::backtrace::BacktraceStatus::Unsupported => self,
            _ => Self::WithBacktrace {
                inner: Box::new(self),
                backtrace: Box::new(backtrace),
            },
        }
    }

    /// The error without any attached backtrace.
    pub fn inner(&self) -> &Self {
        match self {
            Self::WithBacktrace { inner, .. } => inner.inner(),
            err => err,
        }
    }
}
