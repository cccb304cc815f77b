//! Numeric literal codec.
//!
//! A literal is a run of spaces (0) and tabs (1), most significant bit first,
//! closed by a newline. Signed literals spend their first symbol on the sign.

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::symbol::Symbol;

/// Decode an unsigned literal. An empty run is 0.
pub(crate) fn decode_unsigned(bits: &[Symbol]) -> BigUint {
    bits.iter()
        .fold(BigUint::zero(), |acc, s| (acc << 1usize) + s.bit())
}

/// Decode a signed literal: sign symbol, then magnitude. An empty run, or a
/// sign with no magnitude bits, is 0.
pub(crate) fn decode_signed(bits: &[Symbol]) -> BigInt {
    match bits.split_first() {
        None => BigInt::zero(),
        Some((sign, magnitude)) => {
            let value = BigInt::from(decode_unsigned(magnitude));
            if *sign == Symbol::Tab {
                -value
            } else {
                value
            }
        }
    }
}

/// Encode an unsigned value without leading zeros. 0 is the empty run.
pub(crate) fn encode_unsigned(value: &BigUint) -> Vec<Symbol> {
    if value.is_zero() {
        return Vec::new();
    }
    value
        .to_radix_be(2)
        .into_iter()
        .map(|digit| if digit == 1 { Symbol::Tab } else { Symbol::Space })
        .collect()
}

/// Encode a signed value as sign symbol plus magnitude. 0 is a bare space.
pub(crate) fn encode_signed(value: &BigInt) -> Vec<Symbol> {
    let sign = if value < &BigInt::zero() {
        Symbol::Tab
    } else {
        Symbol::Space
    };
    let mut symbols = vec![sign];
    symbols.extend(encode_unsigned(value.magnitude()));
    symbols
}
