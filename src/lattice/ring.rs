//! Polynomial ring R_q = Z_q[x]/(x^n + 1)
//!
//! [`Polynomial`] is a fixed-length coefficient vector; the ring operations
//! live on [`RingContext`] so that no polynomial can be built or combined
//! without the `(n, q)` pair that gives it meaning.
//!
//! Multiplication is schoolbook negacyclic convolution: the full product of
//! length 2n-1 is reduced through the ring relation x^n = -1, so the
//! overflow coefficient at exponent k folds into position k-n with a sign
//! flip. O(n²) by design; the moduli here are not assumed NTT-friendly.

use std::fmt;

use itertools::iproduct;
use zeroize::Zeroize;

use super::modular::{add_mod, mul_mod, reduce_signed, sub_mod};
use super::params::RingContext;

// ============================================================================
// Polynomial
// ============================================================================

/// Element of R_q: exactly n canonical coefficients, index i ↦ coeff of x^i
///
/// Every ring operation returns a freshly-owned result and never mutates an
/// input. Two polynomials are equal iff all n coefficients match (`PartialEq`
/// derive; operands are canonical by construction).
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Polynomial {
    /// Coefficients: c_0 + c_1·x + ... + c_{n-1}·x^{n-1}
    pub coeffs: Vec<u64>,
}

impl Polynomial {
    /// Number of coefficients (= ring degree n)
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }
}

// ============================================================================
// Ring Arithmetic
// ============================================================================

impl RingContext {
    /// The all-zero polynomial (additive identity)
    pub fn zero(&self) -> Polynomial {
        Polynomial {
            coeffs: vec![0; self.n()],
        }
    }

    /// The constant polynomial c
    pub fn constant(&self, c: u64) -> Polynomial {
        let mut coeffs = vec![0; self.n()];
        coeffs[0] = c % self.q();
        Polynomial { coeffs }
    }

    /// Build a polynomial from unsigned coefficients.
    ///
    /// Input is zero-padded or truncated to length n; every coefficient is
    /// reduced mod q.
    pub fn from_coeffs(&self, coeffs: Vec<u64>) -> Polynomial {
        let mut c = coeffs;
        c.resize(self.n(), 0);
        for coeff in c.iter_mut() {
            *coeff %= self.q();
        }
        Polynomial { coeffs: c }
    }

    /// Build a polynomial from signed coefficients, wrapping negatives
    pub fn from_signed(&self, coeffs: Vec<i64>) -> Polynomial {
        let q = self.q();
        let mut c: Vec<u64> = coeffs.into_iter().map(|v| reduce_signed(v, q)).collect();
        c.resize(self.n(), 0);
        Polynomial { coeffs: c }
    }

    /// Coefficient-wise sum, each reduced to [0, q)
    ///
    /// Commutative and associative; [`RingContext::zero`] is the identity.
    pub fn add(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
        debug_assert_eq!(a.len(), self.n());
        debug_assert_eq!(b.len(), self.n());
        let q = self.q();
        let coeffs = a
            .coeffs
            .iter()
            .zip(&b.coeffs)
            .map(|(&x, &y)| add_mod(x, y, q))
            .collect();
        Polynomial { coeffs }
    }

    /// Negacyclic product a·b mod (x^n + 1, q)
    ///
    /// Schoolbook: the full convolution of length 2n-1 is computed first,
    /// then each overflow exponent k ∈ [n, 2n-2] is folded into position
    /// k-n with a sign flip (x^n = -1 means x^k = -x^{k-n}).
    ///
    /// # Example
    /// ```
    /// use rlwe_commit::lattice::params::RingContext;
    ///
    /// let ctx = RingContext::new(4, 7).unwrap();
    /// let x = ctx.from_coeffs(vec![0, 1, 0, 0]);
    /// // x · x = x²
    /// assert_eq!(ctx.mul(&x, &x), ctx.from_coeffs(vec![0, 0, 1, 0]));
    /// ```
    pub fn mul(&self, a: &Polynomial, b: &Polynomial) -> Polynomial {
        debug_assert_eq!(a.len(), self.n());
        debug_assert_eq!(b.len(), self.n());
        let (n, q) = (self.n(), self.q());

        // Full convolution, degree up to 2n-2
        let mut conv = vec![0u64; 2 * n - 1];
        let a_nz = a.coeffs.iter().enumerate().filter(|(_, &c)| c != 0);
        let b_nz = || b.coeffs.iter().enumerate().filter(|(_, &c)| c != 0);
        for ((i, &ai), (j, &bj)) in iproduct!(a_nz, b_nz()) {
            let prod = mul_mod(ai, bj, q);
            conv[i + j] = add_mod(conv[i + j], prod, q);
        }

        // Fold the overflow: x^n ≡ -1
        let mut coeffs: Vec<u64> = conv[..n].to_vec();
        for k in n..(2 * n - 1) {
            coeffs[k - n] = sub_mod(coeffs[k - n], conv[k], q);
        }
        Polynomial { coeffs }
    }

    /// Human-readable rendering: `c0 + c1*x^1 + ... + c_{n-1}*x^{n-1} mod q`
    ///
    /// Informational only; this crate defines no wire format.
    pub fn render<'a>(&self, p: &'a Polynomial) -> PolyDisplay<'a> {
        PolyDisplay {
            coeffs: &p.coeffs,
            q: self.q(),
        }
    }
}

// ============================================================================
// Display Adapter
// ============================================================================

/// Borrowed display form of a polynomial under a specific modulus
pub struct PolyDisplay<'a> {
    coeffs: &'a [u64],
    q: u64,
}

impl fmt::Display for PolyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, " + {c}*x^{i}")?;
            } else {
                write!(f, "{c}")?;
            }
        }
        write!(f, " mod {}", self.q)
    }
}

// ============================================================================
// Tests
// ============================================================================
