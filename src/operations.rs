//! Pure binary arithmetic over `f64`.
//!
//! Only `divide` can fail. The zero guard is an exact value comparison,
//! so `-0.0` triggers it as well (IEEE equality treats `0.0 == -0.0`),
//! while tiny non-zero divisors do not.

use crate::errors::{CalcError, CalcResult};

/// Sum of a and b.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// a minus b.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Product of a and b.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// a divided by b, failing with [`CalcError::DivisionByZero`] when b == 0.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
