//! Scalar-weighted accumulation, `P += c·A`.

use crate::coeff::Coeff;

/// Adds `c·A[n]` into `P[n]` for every `n` in `[0, a.len())`.
///
/// Pure elementwise multiply-accumulate; an empty `a` is a no-op. `p` must
/// be at least as long as `a`; coefficients of `p` past `a.len()` are left
/// untouched.
///
/// # Panics
/// Debug builds panic if `p` is shorter than `a`. For a reporting
/// alternative see [`crate::checked::try_add_scaled`].
pub fn add_scaled<C: Coeff>(p: &mut [C], a: &[C], c: C) {
    debug_assert!(
        p.len() >= a.len(),
        "output needs {} coefficients, has {}",
        a.len(),
        p.len()
    );

    for (dst, src) in p.iter_mut().zip(a.iter()) {
        *dst = dst.wrapping_add(&c.wrapping_mul(src));
    }
}
