//! Ring-LWE commitment scheme
//!
//! Three-step protocol over R_q = Z_q[x]/(x^n + 1):
//!
//! 1. **KeyGen**: publish (a, b) with b = a·s + e0, discarding s and e0.
//! 2. **Commit**: publish c = a·m + b·r + e, retaining (r, e) privately.
//! 3. **Open**: reveal (m, r, e); the verifier recomputes c and compares.
//!
//! # Security
//!
//! Binding rests on the assumed hardness of finding a second (m', r', e')
//! with a·m' + b·r' + e' = c in R_q; hiding comes from the fresh (r, e)
//! drawn per commitment. Verification is exact recomputation, not a
//! noise-tolerant decode.

pub mod rlwe;

pub use rlwe::{CommitKey, Commitment, Opening};
