//! # rlwe-commit
//!
//! Ring-LWE polynomial commitments over R_q = Z_q[x]/(x^n + 1).
//!
//! A committer binds to a message polynomial under the public pair (a, b),
//! publishes the opaque commitment c = a·m + b·r + e, and later reveals
//! (m, r, e) so a verifier can recompute c and check equality.
//!
//! ## Modules
//!
//! - [`lattice`]: ring context, negacyclic arithmetic, sampling, encoding
//! - [`commit`]: the KeyGen / Commit / Open protocol
//! - [`error`]: input-validation error taxonomy
//!
//! ## Example
//!
//! ```
//! use rlwe_commit::{bits_to_poly, CommitKey, RingContext, Sampler};
//!
//! let ctx = RingContext::new(16, 3329)?;
//! let mut sampler = Sampler::new(ctx)?;
//!
//! let key = CommitKey::generate(&mut sampler);
//! let message = bits_to_poly(&ctx, "1011")?;
//!
//! let (commitment, opening) = key.commit(&mut sampler, &message);
//! assert!(key.open(&ctx, &commitment, &message, &opening));
//! # Ok::<(), rlwe_commit::Error>(())
//! ```

pub mod commit;
pub mod error;
pub mod lattice;

// Re-export commonly used types
pub use commit::{CommitKey, Commitment, Opening};
pub use error::Error;
pub use lattice::{bits_to_poly, Polynomial, RingContext, Sampler};
