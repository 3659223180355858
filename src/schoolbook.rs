//! Schoolbook Cauchy-product kernels.
//!
//! These are the O(n·m) primitives a Karatsuba-style divide-and-conquer
//! multiplier is built on: the naive base-case multiply (overwrite and
//! accumulate forms) and the fused sum-product merge step
//! `P += (A0 + A1)·B`, which avoids materializing the intermediate sum.
//!
//! Polynomials are dense coefficient slices, constant term first, so the
//! coefficient at index `i` belongs to the degree-`i` term and a slice of
//! length `len` represents a polynomial of degree `len - 1`. The product of
//! a degree-`d1` and a degree-`d2` polynomial has `d1 + d2 + 1`
//! coefficients, which is the minimum output capacity every multiply here
//! requires.
//!
//! All three multiplies share one banded sweep over the convolution index
//! set; they differ only in how the A-side coefficient is
//! read and in whether the first contribution to each output index seeds a
//! fresh sum or continues an existing one.

use crate::coeff::Coeff;

/// Three-region banded sweep computing Cauchy-product coefficients.
///
/// The valid index pairs `(m, n - m)` of the convolution
/// `P[n] = Σ a(m)·B[n - m]` form a parallelogram band in the index plane,
/// clipped by the two operand-length edges. Rather than testing bounds on
/// every term, the output range splits into three contiguous regions whose
/// inner-loop bounds are computed once each:
///
/// 1. `n` in `[0, a_deg]`: the window grows one term per output index
///    (only the `m >= 0` and `m <= n` edges clip the band).
/// 2. `n` in `[a_deg + 1, b_deg]`: the window slides at full width
///    `a_len`. Empty when the operands have equal length.
/// 3. `n` in `[b_deg + 1, a_deg + b_deg]`: the window shrinks as
///    `n - m` runs into B's degree edge.
///
/// `a_at` abstracts the A-side coefficient read (plain lookup for the
/// two-operand multiplies, pairwise sum for the fused sum-product) and
/// `ACCUMULATE` selects whether each output index starts from zero or from
/// the value already present in `p`. Both are resolved at compile time, so
/// every inner loop stays branch-free.
///
/// Requires `1 <= a_len <= b.len()` and `p.len() >= a_len + b.len() - 1`;
/// callers that might violate the ordering must swap operands first.
#[inline(always)]
fn sweep<C, A, const ACCUMULATE: bool>(p: &mut [C], a_len: usize, b: &[C], a_at: A)
where
    C: Coeff,
    A: Fn(usize) -> C,
{
    debug_assert!(a_len >= 1, "empty A operand");
    debug_assert!(!b.is_empty(), "empty B operand");
    debug_assert!(a_len <= b.len(), "sweep requires a_len <= b_len");
    debug_assert!(
        p.len() >= a_len + b.len() - 1,
        "output needs {} coefficients, has {}",
        a_len + b.len() - 1,
        p.len()
    );

    let a_deg = a_len - 1;
    let b_deg = b.len() - 1;

    // Region 1: growing triangular window.
    for n in 0..=a_deg {
        let mut acc = if ACCUMULATE { p[n] } else { C::zero() };
        for m in 0..=n {
            acc = acc.wrapping_add(&a_at(m).wrapping_mul(&b[n - m]));
        }
        p[n] = acc;
    }

    // Region 2: full-width sliding window.
    for n in (a_deg + 1)..=b_deg {
        let mut acc = if ACCUMULATE { p[n] } else { C::zero() };
        for m in 0..=a_deg {
            acc = acc.wrapping_add(&a_at(m).wrapping_mul(&b[n - m]));
        }
        p[n] = acc;
    }

    // Region 3: shrinking triangular window.
    for n in (b_deg + 1)..=(a_deg + b_deg) {
        let mut acc = if ACCUMULATE { p[n] } else { C::zero() };
        for m in (n - b_deg)..=a_deg {
            acc = acc.wrapping_add(&a_at(m).wrapping_mul(&b[n - m]));
        }
        p[n] = acc;
    }
}

/// Computes `P := A·B`, overwriting the first `a.len() + b.len() - 1`
/// coefficients of `p`.
///
/// Operands may come in either length order; the shorter one drives the
/// inner loops (the Cauchy product is commutative, so swapping is purely a
/// loop-shape repair). Coefficients beyond the product degree are left
/// untouched, so `p` does not need to be pre-zeroed.
///
/// # Arguments
/// * `p` - Output buffer, at least `a.len() + b.len() - 1` long
/// * `a` - First operand, at least one coefficient
/// * `b` - Second operand, at least one coefficient
///
/// # Panics
/// Panics on a slice-bounds check (and, in debug builds, on a
/// `debug_assert`) if an operand is empty or `p` is too short. For a
/// reporting alternative see [`crate::checked::try_mul`].
pub fn mul<C: Coeff>(p: &mut [C], a: &[C], b: &[C]) {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    sweep::<C, _, false>(p, short.len(), long, |m| short[m]);
}

/// Computes `P += A·B`, adding into the first `a.len() + b.len() - 1`
/// coefficients of `p`.
///
/// Identical region structure to [`mul`]; every contribution, including the
/// first per output index, adds into what `p` already holds. Same length
/// contracts and panic behavior as [`mul`].
pub fn mul_add<C: Coeff>(p: &mut [C], a: &[C], b: &[C]) {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    sweep::<C, _, true>(p, short.len(), long, |m| short[m]);
}

/// Computes `P += (A0 + A1)·B` without materializing `A0 + A1`.
///
/// `a0` and `a1` must have equal length, and that length must not exceed
/// `b.len()`: the summed pair is pinned to the A side of the sweep, so the
/// operand swap [`mul`] performs is not available here. Both conventions
/// are `debug_assert`ed; in release a violation surfaces as a slice-bounds
/// panic.
///
/// # Arguments
/// * `p` - Output buffer, at least `a0.len() + b.len() - 1` long
/// * `a0`, `a1` - Summed operand pair, equal nonzero lengths
/// * `b` - Second operand, `b.len() >= a0.len()`
pub fn sum_mul_add<C: Coeff>(p: &mut [C], a0: &[C], a1: &[C], b: &[C]) {
    debug_assert_eq!(a0.len(), a1.len(), "summed operands differ in length");
    sweep::<C, _, true>(p, a0.len(), b, |m| a0[m].wrapping_add(&a1[m]));
}
