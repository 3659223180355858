//! Coefficient trait shared by all multiplication kernels.

use num_traits::{PrimInt, Signed, WrappingAdd, WrappingMul};

/// Fixed-width signed integer coefficient.
///
/// Implemented for all primitive signed integers (`i8` through `i128`).
/// Every kernel routes its arithmetic through the wrapping operations, so
/// coefficient overflow wraps to two's complement exactly like native
/// machine integers, in debug builds as well as release.
pub trait Coeff: PrimInt + Signed + WrappingAdd + WrappingMul {}

impl<T> Coeff for T where T: PrimInt + Signed + WrappingAdd + WrappingMul {}
