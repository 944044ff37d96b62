/*!
The packed literal encoding, and the external numbering convention.

Internally a literal is a [Code]: a variable index shifted left once, with the low bit carrying the polarity.
A set bit marks a negated occurrence, so negation is `code ^ 1` and the variable of a literal is `code >> 1`.
This is the classic MiniSat packing, and it keeps literals usable as dense indices.

Externally --- for any text interchange format built on top of this crate --- numbering follows the DIMACS CNF convention.
Variable index *i* (0-based) is written as *i + 1*, and a negated literal of that variable as *-(i + 1)*.
Zero denotes no literal (DIMACS reserves it as the clause terminator).

All functions here are pure.
The only fallible one is [from_external], as not every integer denotes a literal.

```rust
# use marten_sat::codec;
let code = codec::encode(3, true);

assert_eq!(codec::decode(code), (3, true));
assert_eq!(codec::negate(codec::negate(code)), code);
assert_eq!(codec::external_literal(code), -4);
assert_eq!(codec::from_external(-4), Ok(code));
```
*/

use crate::types::err::ErrorKind;

/// A literal in packed form: `2 * index + polarity`, polarity bit set for a negated occurrence.
pub type Code = u32;

/// The maximum variable index, chosen so every literal fits the signed external form.
pub const INDEX_MAX: u32 = i32::MAX.unsigned_abs() - 1;

/// Packs a variable index and a polarity into a literal code.
pub fn encode(index: u32, negated: bool) -> Code {
    (index << 1) | negated as Code
}

/// Unpacks a literal code into its variable index and polarity.
pub fn decode(code: Code) -> (u32, bool) {
    (code >> 1, code & 1 == 1)
}

/// The variable index of a literal code.
pub fn index_of(code: Code) -> u32 {
    code >> 1
}

/// Whether a literal code is a negated occurrence of its variable.
pub fn is_negated(code: Code) -> bool {
    code & 1 == 1
}

/// The negation of a literal code.
///
/// An involution: `negate(negate(code)) == code`.
pub fn negate(code: Code) -> Code {
    code ^ 1
}

/// The 1-based external number of a variable index.
pub fn external(index: u32) -> i64 {
    i64::from(index) + 1
}

/// The signed external number of a literal code, negative for a negated occurrence.
pub fn external_literal(code: Code) -> i64 {
    let (index, negated) = decode(code);
    match negated {
        true => -external(index),
        false => external(index),
    }
}

/// The literal code denoted by a signed external number.
///
/// Zero and magnitudes above [INDEX_MAX] + 1 denote no literal, and are rejected with [ErrorKind::TypeMismatch].
pub fn from_external(number: i64) -> Result<Code, ErrorKind> {
    if number == 0 || number.unsigned_abs() > u64::from(INDEX_MAX) + 1 {
        return Err(ErrorKind::TypeMismatch { found: number });
    }
    let index = (number.unsigned_abs() - 1) as u32;
    Ok(encode(index, number < 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for index in [0, 1, 7, INDEX_MAX] {
            for negated in [false, true] {
                assert_eq!(decode(encode(index, negated)), (index, negated));
            }
        }
    }

    #[test]
    fn negation_is_an_involution() {
        let code = encode(11, false);
        assert_eq!(negate(negate(code)), code);
        assert_ne!(negate(code), code);
    }

    #[test]
    fn polarity_distinguishes_codes() {
        assert_ne!(encode(5, false), encode(5, true));
    }

    #[test]
    fn external_numbering_is_one_based() {
        assert_eq!(external(0), 1);
        assert_eq!(external_literal(encode(0, true)), -1);
        assert_eq!(external_literal(encode(2, false)), 3);
    }

    #[test]
    fn external_round_trip() {
        for number in [1, -1, 42, -42] {
            assert_eq!(external_literal(from_external(number).unwrap()), number);
        }
    }

    #[test]
    fn zero_denotes_no_literal() {
        assert_eq!(from_external(0), Err(ErrorKind::TypeMismatch { found: 0 }));
    }

    #[test]
    fn out_of_range_magnitudes_are_rejected() {
        let over = i64::from(INDEX_MAX) + 2;
        assert!(from_external(over).is_err());
        assert!(from_external(-over).is_err());
        assert!(from_external(over - 1).is_ok());
    }
}
