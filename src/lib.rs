//! Dense integer polynomial multiplication kernels.
//!
//! This crate is the arithmetic base layer for Karatsuba-style
//! divide-and-conquer polynomial multiplication: the naive O(n·m) Cauchy
//! product in overwrite and accumulate forms, the fused sum-product
//! `P += (A0 + A1)·B` merge step, and the scalar accumulation `P += c·A`.
//!
//! Polynomials are caller-owned coefficient slices ordered constant term
//! first; the core allocates nothing and retains no references. The
//! kernels in [`schoolbook`] and [`scaled`] document their buffer
//! contracts and leave the hot path unchecked; [`checked`] offers
//! validating wrappers that report [`PolymulError`] instead.
//!
//! ```
//! use polymul::{mul, mul_add};
//!
//! // (1 + 2x)(3 + 4x + 5x^2)
//! let mut p = [0i64; 4];
//! mul(&mut p, &[1, 2], &[3, 4, 5]);
//! assert_eq!(p, [3, 10, 13, 10]);
//!
//! // accumulate a second product on top
//! mul_add(&mut p, &[1], &[1, 1, 1, 1]);
//! assert_eq!(p, [4, 11, 14, 11]);
//! ```

pub mod checked;
pub mod coeff;
pub mod error;
pub mod scaled;
pub mod schoolbook;

pub use checked::{try_add_scaled, try_mul, try_mul_add, try_sum_mul_add};
pub use coeff::Coeff;
pub use error::{PolymulError, Result};
pub use scaled::add_scaled;
pub use schoolbook::{mul, mul_add, sum_mul_add};
