// created = "2026-10-17"
// modified = "2026-10-17"

//! Conversion between digit chains and big integers.
//!
//! Decoding is a Horner fold from the most significant digit. Encoding
//! divides by the radix until nothing is left, so the leading digit is
//! never zero and zero itself is the empty chain.

use num_bigint::BigInt;
use num_bigint::BigUint;
use num_bigint::Sign;
use num_integer::Integer;
use num_traits::Zero;
use smallvec::SmallVec;

use super::DigitChain;
use crate::config::Profile;
use crate::config::check_radix;
use crate::error::ChainError;

impl DigitChain {
    /// Decode the chain into its value.
    pub fn to_biguint(&self) -> BigUint {
        return horner(self.iter(), self.radix);
    }

    /// Encode a value into a new chain in the given radix.
    pub fn from_biguint(profile: Profile, radix: u32, value: &BigUint) -> Result<DigitChain, ChainError> {
        let radix = check_radix(radix)?;
        return Ok(encode(profile, radix, value));
    }

    /// Encode a signed value. Zero and negative values give the empty chain.
    pub fn from_bigint(profile: Profile, radix: u32, value: &BigInt) -> Result<DigitChain, ChainError> {
        let radix = check_radix(radix)?;
        if value.sign() != Sign::Plus {
            return Ok(DigitChain::empty(profile, radix));
        }
        return Ok(encode(profile, radix, value.magnitude()));
    }

    /// Parse an unsigned decimal numeral into a chain in the profile's main
    /// radix. Outer whitespace is trimmed. Anything that is not `[0-9]+`
    /// gives the empty chain.
    pub fn parse_decimal(profile: Profile, text: &str) -> DigitChain {
        let text = text.trim();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            log::trace!("ignoring malformed decimal input {:?}", text);
            return DigitChain::new(profile);
        }
        return match BigUint::parse_bytes(text.as_bytes(), 10) {
            Some(value) => encode(profile, profile.radix(), &value),
            None => DigitChain::new(profile),
        };
    }

    /// Like `parse_decimal`, treating missing input as zero.
    pub fn parse_decimal_opt(profile: Profile, text: Option<&str>) -> DigitChain {
        return match text {
            Some(text) => DigitChain::parse_decimal(profile, text),
            None => DigitChain::new(profile),
        };
    }

    /// The value in base 10.
    pub fn to_decimal_string(&self) -> String {
        return self.to_biguint().to_str_radix(10);
    }
}

/// Evaluate digits, most significant first, as a number in `radix`.
/// Digits are not checked against the radix.
pub(crate) fn horner<I: IntoIterator<Item = u8>>(digits: I, radix: u32) -> BigUint {
    let mut value = BigUint::zero();
    for digit in digits {
        value = value * radix + u32::from(digit);
    }
    return value;
}

/// Encode a value. Radix must already be checked.
pub(crate) fn encode(profile: Profile, radix: u32, value: &BigUint) -> DigitChain {
    debug_assert!(check_radix(radix).is_ok());
    let mut chain = DigitChain::empty(profile, radix);
    if value.is_zero() {
        return chain;
    }

    let base = BigUint::from(radix);
    let mut rest = value.clone();
    // Least significant first.
    let mut digits: SmallVec<[u8; 64]> = SmallVec::new();
    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem(&base);
        let digit = u8::try_from(&remainder).expect("remainder is below radix, which is at most 256");
        digits.push(digit);
        rest = quotient;
    }
    log::trace!("encoded {} bits into {} digits of radix {}", value.bits(), digits.len(), radix);

    for &digit in digits.iter().rev() {
        chain.link_last(digit);
    }
    return chain;
}
