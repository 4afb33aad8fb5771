//! Random ring element sampling
//!
//! [`Sampler`] owns a single seeded ChaCha stream for the life of the
//! process and draws ring elements from it: bounded-uniform coefficients for
//! secrets, errors, and the near-uniform public polynomial, and uniform bits
//! for test messages. Constructing one generator up front (instead of
//! reseeding per call) avoids reseed overhead and correlated draws when many
//! commitments are produced in a short time.

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::Error;
use crate::lattice::params::RingContext;
use crate::lattice::ring::Polynomial;

/// Draws polynomials over a [`RingContext`] from one seeded ChaCha stream
pub struct Sampler {
    ctx: RingContext,
    rng: ChaCha8Rng,
}

impl Sampler {
    /// Create a sampler seeded from OS entropy.
    ///
    /// Fails with [`Error::RandomnessUnavailable`] if the OS randomness
    /// source cannot produce a seed.
    pub fn new(ctx: RingContext) -> Result<Self, Error> {
        let mut seed = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(Error::RandomnessUnavailable)?;
        Ok(Self {
            ctx,
            rng: ChaCha8Rng::from_seed(seed),
        })
    }

    /// Create a deterministic sampler from a fixed seed.
    ///
    /// For tests and reproducible runs; commitments drawn from a known seed
    /// provide no hiding.
    pub fn from_seed(ctx: RingContext, seed: u64) -> Self {
        Self {
            ctx,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The ring context this sampler draws under
    #[inline]
    pub fn context(&self) -> RingContext {
        self.ctx
    }

    /// Sample a polynomial with coefficients uniform on [-bound, bound].
    ///
    /// Each coefficient is drawn independently from the closed interval and
    /// mapped to its canonical representative. `bound = 1` gives the small
    /// ternary secrets and errors; `bound = q-1` gives the near-uniform
    /// public polynomial.
    pub fn sample_bounded(&mut self, bound: u64) -> Polynomial {
        let coeffs = (0..self.ctx.n())
            .map(|_| {
                let v = self.rng.gen_range(-(bound as i128)..=bound as i128);
                self.ctx.canonical(v)
            })
            .collect();
        Polynomial { coeffs }
    }

    /// Sample a message polynomial of `bitlen` uniform bits, zero-padded.
    ///
    /// Fails with [`Error::InvalidParameter`] if `bitlen >= n`.
    pub fn sample_bits(&mut self, bitlen: usize) -> Result<Polynomial, Error> {
        let n = self.ctx.n();
        if bitlen >= n {
            return Err(Error::InvalidParameter(format!(
                "bit length {bitlen} must be below ring degree {n}"
            )));
        }
        let mut coeffs = vec![0u64; n];
        for c in coeffs.iter_mut().take(bitlen) {
            *c = self.rng.gen_bool(0.5) as u64;
        }
        Ok(Polynomial { coeffs })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RingContext {
        RingContext::new(16, 97).unwrap()
    }

    #[test]
    fn deterministic_from_seed() {
        let mut s1 = Sampler::from_seed(ctx(), 7);
        let mut s2 = Sampler::from_seed(ctx(), 7);
        assert_eq!(s1.sample_bounded(1), s2.sample_bounded(1));
        assert_eq!(s1.sample_bounded(96), s2.sample_bounded(96));
    }

    #[test]
    fn bounded_coefficients_are_canonical() {
        let ctx = ctx();
        let mut sampler = Sampler::from_seed(ctx, 42);

        // bound = 1: only {0, 1, q-1} can appear
        let small = sampler.sample_bounded(1);
        assert!(small
            .coeffs
            .iter()
            .all(|&c| c == 0 || c == 1 || c == ctx.q() - 1));

        // bound = q-1: anything in [0, q)
        let wide = sampler.sample_bounded(ctx.q() - 1);
        assert_eq!(wide.len(), ctx.n());
        assert!(wide.coeffs.iter().all(|&c| c < ctx.q()));
    }

    #[test]
    fn ternary_hits_all_values() {
        let ctx = ctx();
        let mut sampler = Sampler::from_seed(ctx, 1);
        let mut seen = [false; 3];
        for _ in 0..64 {
            for &c in &sampler.sample_bounded(1).coeffs {
                if c == 0 {
                    seen[0] = true;
                } else if c == 1 {
                    seen[1] = true;
                } else if c == ctx.q() - 1 {
                    seen[2] = true;
                }
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn bits_zero_padded() {
        let ctx = ctx();
        let mut sampler = Sampler::from_seed(ctx, 9);

        let msg = sampler.sample_bits(5).unwrap();
        assert_eq!(msg.len(), ctx.n());
        assert!(msg.coeffs[..5].iter().all(|&c| c <= 1));
        assert!(msg.coeffs[5..].iter().all(|&c| c == 0));

        // bitlen 0 is the zero polynomial
        assert_eq!(sampler.sample_bits(0).unwrap().coeffs, vec![0; ctx.n()]);
    }

    #[test]
    fn bits_rejects_oversized() {
        let ctx = ctx();
        let mut sampler = Sampler::from_seed(ctx, 9);
        assert!(matches!(
            sampler.sample_bits(ctx.n()),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            sampler.sample_bits(ctx.n() + 3),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn os_seeded_sampler() {
        let mut sampler = Sampler::new(ctx()).unwrap();
        assert_eq!(sampler.sample_bounded(1).len(), 16);
    }
}
