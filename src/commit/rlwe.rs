//! Ring-LWE commitment scheme: KeyGen, Commit, Open
//!
//! The committer binds to a message polynomial m under the public pair
//! (a, b) by publishing c = a·m + b·r + e for fresh small r, e, and later
//! reveals (m, r, e) so a verifier can recompute c and compare. Binding
//! rests on the hardness of finding a second preimage in R_q; the code
//! performs exact recomputation and equality, not a noisy-decode check.
//!
//! The protocol state machine (keys → committed → opened/failed) is carried
//! by the types: committing needs a [`CommitKey`], opening needs the
//! published [`Commitment`] plus the committer's retained [`Opening`].

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::lattice::params::RingContext;
use crate::lattice::ring::Polynomial;
use crate::lattice::sampler::Sampler;

// ============================================================================
// Public Key Pair
// ============================================================================

/// Public commitment parameters: the Ring-LWE pair (a, b)
///
/// b = a·s + e0 for an ephemeral secret s and error e0 that are generated
/// inside key generation and discarded. Held by committer and verifier
/// alike; immutable after generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitKey {
    /// Near-uniform public polynomial
    pub a: Polynomial,
    /// a·s + e0 with small ephemeral s, e0
    pub b: Polynomial,
}

impl CommitKey {
    /// Generate a key pair with a fresh near-uniform `a`.
    ///
    /// `a` is sampled with bound q-1; the ephemeral s and e0 are ternary,
    /// used once to form b, and wiped before returning.
    pub fn generate(sampler: &mut Sampler) -> Self {
        let ctx = sampler.context();
        let a = sampler.sample_bounded(ctx.q() - 1);
        Self::generate_with_a(sampler, a)
    }

    /// Generate a key pair under a caller-supplied public `a`.
    ///
    /// Use this when `a` is a fixed, trusted system parameter shared across
    /// many key pairs; [`CommitKey::generate`] samples a fresh `a` per key
    /// pair instead. Which provenance is appropriate is a deployment choice.
    pub fn generate_with_a(sampler: &mut Sampler, a: Polynomial) -> Self {
        let ctx = sampler.context();
        assert_eq!(a.len(), ctx.n(), "public polynomial does not match ring");

        let s = Zeroizing::new(sampler.sample_bounded(1));
        let e0 = Zeroizing::new(sampler.sample_bounded(1));
        let b = ctx.add(&ctx.mul(&a, &s), &e0);
        CommitKey { a, b }
    }

    /// Commit to a message polynomial.
    ///
    /// Draws fresh ternary r and e and publishes c = a·m + b·r + e. Returns
    /// the [`Commitment`] for publication and the [`Opening`] for the
    /// committer to retain privately; committing twice to the same message
    /// yields different outputs, which is what provides hiding.
    ///
    /// # Panics
    ///
    /// Panics if `m` does not have exactly n coefficients.
    pub fn commit(&self, sampler: &mut Sampler, m: &Polynomial) -> (Commitment, Opening) {
        let ctx = sampler.context();
        assert_eq!(m.len(), ctx.n(), "message does not match ring degree");

        let r = sampler.sample_bounded(1);
        let e = sampler.sample_bounded(1);
        let c = ctx.add(&ctx.add(&ctx.mul(&self.a, m), &ctx.mul(&self.b, &r)), &e);
        (Commitment { c }, Opening { r, e })
    }

    /// Verify an opened commitment.
    ///
    /// Recomputes a·m + b·r + e and compares against the published c.
    /// Exact equality: any single-coefficient discrepancy in c, m, r, or e
    /// (or a wrong key) yields `false`. A `false` result is a normal
    /// verification outcome, not an error.
    pub fn open(
        &self,
        ctx: &RingContext,
        commitment: &Commitment,
        m: &Polynomial,
        opening: &Opening,
    ) -> bool {
        let c_check = ctx.add(
            &ctx.add(&ctx.mul(&self.a, m), &ctx.mul(&self.b, &opening.r)),
            &opening.e,
        );
        c_check == commitment.c
    }
}

// ============================================================================
// Commitment and Opening
// ============================================================================

/// Published commitment c = a·m + b·r + e
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commitment {
    pub c: Polynomial,
}

/// Committer-retained randomness and error, wiped on drop
///
/// Must stay with the committer until opening; revealing it early lets
/// anyone check candidate messages against the published c.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Opening {
    /// Ternary randomness r
    pub r: Polynomial,
    /// Ternary error e
    pub e: Polynomial,
}

// ============================================================================
// Tests
// ============================================================================
