//! Bit-string message encoding
//!
//! Turns an externally supplied bit-string into a message polynomial: the
//! first `len` coefficients carry the parsed bits in order, the rest are
//! zero. Validation failures surface as error values so callers can recover
//! instead of aborting.

use crate::error::Error;
use crate::lattice::params::RingContext;
use crate::lattice::ring::Polynomial;

/// Parse a bit-string like `"1011"` into a zero-padded message polynomial.
///
/// Fails with [`Error::MessageTooLong`] if the string has `n` or more
/// characters, and with [`Error::InvalidBitCharacter`] on any character
/// other than '0' or '1'.
///
/// # Example
/// ```
/// use rlwe_commit::lattice::{encoder::bits_to_poly, params::RingContext};
///
/// let ctx = RingContext::new(8, 7).unwrap();
/// let m = bits_to_poly(&ctx, "1011").unwrap();
/// assert_eq!(m.coeffs, vec![1, 0, 1, 1, 0, 0, 0, 0]);
/// ```
pub fn bits_to_poly(ctx: &RingContext, bits: &str) -> Result<Polynomial, Error> {
    let n = ctx.n();
    if bits.len() >= n {
        return Err(Error::MessageTooLong {
            len: bits.len(),
            n,
        });
    }

    let mut coeffs = vec![0u64; n];
    for (pos, ch) in bits.chars().enumerate() {
        coeffs[pos] = match ch {
            '0' => 0,
            '1' => 1,
            found => return Err(Error::InvalidBitCharacter { found, pos }),
        };
    }
    Ok(Polynomial { coeffs })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_pads() {
        let ctx = RingContext::new(8, 7).unwrap();
        let m = bits_to_poly(&ctx, "1011").unwrap();
        assert_eq!(m.coeffs, vec![1, 0, 1, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn empty_string_is_zero() {
        let ctx = RingContext::new(4, 7).unwrap();
        assert_eq!(bits_to_poly(&ctx, "").unwrap().coeffs, vec![0; 4]);
    }

    #[test]
    fn rejects_oversized_message() {
        let ctx = RingContext::new(4, 7).unwrap();

        // length == n already fails: occupied length must stay below n
        let err = bits_to_poly(&ctx, "1010").unwrap_err();
        assert!(matches!(err, Error::MessageTooLong { len: 4, n: 4 }));

        let err = bits_to_poly(&ctx, "101010").unwrap_err();
        assert!(matches!(err, Error::MessageTooLong { len: 6, n: 4 }));
    }

    #[test]
    fn rejects_non_bit_characters() {
        let ctx = RingContext::new(8, 7).unwrap();

        let err = bits_to_poly(&ctx, "102").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidBitCharacter { found: '2', pos: 2 }
        ));

        let err = bits_to_poly(&ctx, "x").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidBitCharacter { found: 'x', pos: 0 }
        ));
    }
}
