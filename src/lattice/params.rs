//! Ring parameters for R_q = Z_q[x]/(x^n + 1)
//!
//! [`RingContext`] holds the public pair `(n, q)` and validates it once at
//! construction. Every other component takes the context at construction or
//! per call; there is no process-global ring state, so "setup ran before use"
//! is a type-level dependency instead of an implicit ordering requirement.

use crate::error::Error;
use crate::lattice::modular::reduce_i128;

/// Public ring parameters: degree n and coefficient modulus q
///
/// Immutable once constructed. All polynomials under this context have
/// exactly `n` coefficients, each the canonical representative of its
/// residue class in `[0, q)`.
///
/// # Example
/// ```
/// use rlwe_commit::lattice::params::RingContext;
///
/// let ctx = RingContext::new(4, 7).unwrap();
/// assert_eq!(ctx.n(), 4);
/// assert_eq!(ctx.canonical(-1), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingContext {
    n: usize,
    q: u64,
}

impl RingContext {
    /// Create a validated ring context.
    ///
    /// Fails with [`Error::InvalidParameter`] if `n == 0` or `q <= 1`.
    pub fn new(n: usize, q: u64) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InvalidParameter(format!(
                "ring degree must be positive, got n = {n}"
            )));
        }
        if q <= 1 {
            return Err(Error::InvalidParameter(format!(
                "modulus must be at least 2, got q = {q}"
            )));
        }
        Ok(Self { n, q })
    }

    /// Ring degree n (polynomials have n coefficients)
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Coefficient modulus q
    #[inline]
    pub fn q(&self) -> u64 {
        self.q
    }

    /// Map any integer to its canonical representative in [0, q)
    ///
    /// True modulo: negative inputs wrap to a non-negative result.
    #[inline]
    pub fn canonical(&self, x: i128) -> u64 {
        reduce_i128(x, self.q)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_parameters() {
        let ctx = RingContext::new(4, 7).unwrap();
        assert_eq!(ctx.n(), 4);
        assert_eq!(ctx.q(), 7);

        // n = 1 is the degenerate but legal ring Z_q[x]/(x + 1)
        assert!(RingContext::new(1, 2).is_ok());
    }

    #[test]
    fn rejects_zero_degree() {
        assert!(matches!(
            RingContext::new(0, 7),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn rejects_small_modulus() {
        assert!(matches!(
            RingContext::new(4, 0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            RingContext::new(4, 1),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn canonical_wraps_negatives() {
        let ctx = RingContext::new(4, 7).unwrap();
        assert_eq!(ctx.canonical(0), 0);
        assert_eq!(ctx.canonical(6), 6);
        assert_eq!(ctx.canonical(7), 0);
        assert_eq!(ctx.canonical(-1), 6);
        assert_eq!(ctx.canonical(-7), 0);
        assert_eq!(ctx.canonical(-15), 6);
    }
}
