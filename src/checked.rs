//! Validated wrappers around the unchecked kernels.
//!
//! The kernels in [`crate::schoolbook`] and [`crate::scaled`] document
//! their preconditions as contracts and keep the hot path free of checks.
//! The wrappers here validate every length and capacity precondition first
//! and report a [`PolymulError`] instead of panicking, then delegate.

use crate::coeff::Coeff;
use crate::error::{PolymulError, Result};
use crate::{scaled, schoolbook};

fn check_operand<C>(operand: &'static str, coeffs: &[C]) -> Result<()> {
    if coeffs.is_empty() {
        return Err(PolymulError::EmptyOperand { operand });
    }
    Ok(())
}

fn check_capacity(required: usize, got: usize) -> Result<()> {
    if got < required {
        return Err(PolymulError::OutputTooShort { required, got });
    }
    Ok(())
}

/// Validated `P := A·B`. See [`schoolbook::mul`].
pub fn try_mul<C: Coeff>(p: &mut [C], a: &[C], b: &[C]) -> Result<()> {
    check_operand("A", a)?;
    check_operand("B", b)?;
    check_capacity(a.len() + b.len() - 1, p.len())?;
    schoolbook::mul(p, a, b);
    Ok(())
}

/// Validated `P += A·B`. See [`schoolbook::mul_add`].
pub fn try_mul_add<C: Coeff>(p: &mut [C], a: &[C], b: &[C]) -> Result<()> {
    check_operand("A", a)?;
    check_operand("B", b)?;
    check_capacity(a.len() + b.len() - 1, p.len())?;
    schoolbook::mul_add(p, a, b);
    Ok(())
}

/// Validated `P += (A0 + A1)·B`. See [`schoolbook::sum_mul_add`].
///
/// Beyond the multiply preconditions, `a0` and `a1` must agree in length
/// and may not exceed `b` in length (the summed pair cannot be swapped to
/// the long side of the sweep).
pub fn try_sum_mul_add<C: Coeff>(p: &mut [C], a0: &[C], a1: &[C], b: &[C]) -> Result<()> {
    check_operand("A0", a0)?;
    check_operand("A1", a1)?;
    check_operand("B", b)?;
    if a0.len() != a1.len() {
        return Err(PolymulError::LengthMismatch {
            expected: a0.len(),
            got: a1.len(),
        });
    }
    if a0.len() > b.len() {
        return Err(PolymulError::LengthMismatch {
            expected: a0.len(),
            got: b.len(),
        });
    }
    check_capacity(a0.len() + b.len() - 1, p.len())?;
    schoolbook::sum_mul_add(p, a0, a1, b);
    Ok(())
}

/// Validated `P += c·A`. See [`scaled::add_scaled`].
///
/// An empty `a` is a defined no-op, not an error.
pub fn try_add_scaled<C: Coeff>(p: &mut [C], a: &[C], c: C) -> Result<()> {
    check_capacity(a.len(), p.len())?;
    scaled::add_scaled(p, a, c);
    Ok(())
}
