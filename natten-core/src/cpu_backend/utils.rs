/// Helper traits to dispatch CPU kernels over the supported dtypes.
use crate::{Error, Layout, Result, WithDType};

type C = super::CpuStorage;

pub trait Map2 {
    fn op(&self) -> &'static str;

    fn f<T: WithDType>(&self, v1: &[T], l1: &Layout, v2: &[T]) -> Result<Vec<T>>;

    fn map(&self, v1: &C, l1: &Layout, v2: &C) -> Result<C> {
        match (v1, v2) {
            (C::BF16(v1), C::BF16(v2)) => Ok(C::BF16(self.f(v1, l1, v2)?)),
            (C::F16(v1), C::F16(v2)) => Ok(C::F16(self.f(v1, l1, v2)?)),
            (C::F32(v1), C::F32(v2)) => Ok(C::F32(self.f(v1, l1, v2)?)),
            (C::F64(v1), C::F64(v2)) => Ok(C::F64(self.f(v1, l1, v2)?)),
            _ => Err(Error::DTypeMismatchBinaryOp {
                lhs: v1.dtype(),
                rhs: v2.dtype(),
                op: self.op(),
            }
            .bt()),
        }
    }
}
