//! Types for elements that can be stored in the weights, values and output buffers.
#![allow(clippy::redundant_closure_call)]
use crate::{CpuStorage, Error, Result};

/// The different types of elements supported by the neighborhood kernels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DType {
    // Brain floating-point using half precision (16 bits).
    BF16,
    // Floating-point using half precision (16 bits).
    F16,
    // Floating-point using single precision (32 bits).
    F32,
    // Floating-point using double precision (64 bits).
    F64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DTypeParseError(String);

impl std::fmt::Display for DTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cannot parse '{}' as a dtype", self.0)
    }
}

impl std::error::Error for DTypeParseError {}

impl std::str::FromStr for DType {
    type Err = DTypeParseError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "bf16" => Ok(Self::BF16),
            "f16" => Ok(Self::F16),
            "f32" => Ok(Self::F32),
            "f64" => Ok(Self::F64),
            _ => Err(DTypeParseError(s.to_string())),
        }
    }
}

impl DType {
    /// String representation for dtypes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BF16 => "bf16",
            Self::F16 => "f16",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// The size used by each element in bytes, i.e. 2 for `F16`, 4 for `F32`.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            Self::BF16 => 2,
            Self::F16 => 2,
            Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    /// The dtype used to accumulate products when reducing over a window.
    pub fn accum_dtype(&self) -> Self {
        match self {
            Self::BF16 | Self::F16 => Self::F32,
            Self::F32 | Self::F64 => Self::F64,
        }
    }
}

/// A storage element type together with the wider type used to accumulate sums of products.
///
/// Half precision types accumulate in `f32`, single and double precision accumulate in `f64`.
pub trait WithDType:
    Sized
    + Copy
    + num_traits::NumAssign
    + std::cmp::PartialOrd
    + std::fmt::Display
    + std::fmt::Debug
    + 'static
    + Send
    + Sync
{
    const DTYPE: DType;

    type Accum: num_traits::Float + num_traits::NumAssign + Send + Sync + 'static;

    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
    fn to_accum(self) -> Self::Accum;
    fn from_accum(v: Self::Accum) -> Self;

    fn to_cpu_storage_owned(data: Vec<Self>) -> CpuStorage;

    fn cpu_storage_as_slice(s: &CpuStorage) -> Result<&[Self]>;
}

macro_rules! with_dtype {
    ($ty:ty, $dtype:ident, $accum:ty, $from_f64:expr, $to_f64:expr, $to_accum:expr, $from_accum:expr) => {
        impl WithDType for $ty {
            const DTYPE: DType = DType::$dtype;

            type Accum = $accum;

            fn from_f64(v: f64) -> Self {
                $from_f64(v)
            }

            fn to_f64(self) -> f64 {
                $to_f64(self)
            }

            #[inline(always)]
            fn to_accum(self) -> Self::Accum {
                $to_accum(self)
            }

            #[inline(always)]
            fn from_accum(v: Self::Accum) -> Self {
                $from_accum(v)
            }

            fn to_cpu_storage_owned(data: Vec<Self>) -> CpuStorage {
                CpuStorage::$dtype(data)
            }

            fn cpu_storage_as_slice(s: &CpuStorage) -> Result<&[Self]> {
                match s {
                    CpuStorage::$dtype(data) => Ok(data),
                    _ => Err(Error::UnexpectedDType {
                        expected: DType::$dtype,
                        got: s.dtype(),
                        msg: "unexpected dtype",
                    }
                    .bt()),
                }
            }
        }
    };
}
use half::{bf16, f16};

with_dtype!(
    f16,
    F16,
    f32,
    f16::from_f64,
    f16::to_f64,
    f16::to_f32,
    f16::from_f32
);
with_dtype!(
    bf16,
    BF16,
    f32,
    bf16::from_f64,
    bf16::to_f64,
    bf16::to_f32,
    bf16::from_f32
);
with_dtype!(
    f32,
    F32,
    f64,
    |v: f64| v as f32,
    |v: f32| v as f64,
    |v: f32| v as f64,
    |v: f64| v as f32
);
with_dtype!(
    f64,
    F64,
    f64,
    |v: f64| v,
    |v: f64| v,
    |v: f64| v,
    |v: f64| v
);
