// created = "2026-10-17"
// modified = "2026-10-17"

//! Combining two digit sequences with a selected operator.
//!
//! Both operands are decoded to big integers, combined, and the result is
//! encoded in the target radix. Arithmetic is clamped to the non-negative
//! integers: a negative difference, or division or remainder by zero, all
//! give zero.
//!
//! The second operand can be anything implementing [`DigitSource`]. Another
//! chain is decoded in its own radix; any other sequence is read as digits
//! in the first operand's radix, skipping missing entries.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::chain::DigitChain;
use crate::chain::codec::encode;
use crate::chain::codec::horner;
use crate::config::OPERATOR_COUNT;

/// One of the seven operators a configuration can select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    /// Subtraction, zero when the difference is negative.
    Sub,
    Mul,
    /// Integer division, zero when dividing by zero.
    Div,
    /// Remainder, zero when dividing by zero.
    Rem,
    /// Bitwise AND of the magnitudes.
    And,
    /// Bitwise OR of the magnitudes.
    Or,
}

impl Operator {
    /// All operators in selector order.
    pub const ALL: [Operator; OPERATOR_COUNT as usize] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Rem,
        Operator::And,
        Operator::Or,
    ];

    /// Pick an operator by `selector % 7`.
    pub fn from_selector(selector: u32) -> Operator {
        return Operator::ALL[(selector % OPERATOR_COUNT) as usize];
    }

    /// Position of this operator in selector order.
    pub fn selector(self) -> u32 {
        return self as u32;
    }

    /// Apply the operator with clamping.
    pub fn apply(self, a: &BigUint, b: &BigUint) -> BigUint {
        return match self {
            Operator::Add => a + b,
            Operator::Sub if a < b => BigUint::zero(),
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div if b.is_zero() => BigUint::zero(),
            Operator::Div => a / b,
            Operator::Rem if b.is_zero() => BigUint::zero(),
            Operator::Rem => a % b,
            Operator::And => a & b,
            Operator::Or => a | b,
        };
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Rem => "%",
            Operator::And => "&",
            Operator::Or => "|",
        };
        return f.write_str(symbol);
    }
}

/// Something that can be read as a sequence of digits.
pub trait DigitSource {
    /// Digits, most significant first. `None` entries are skipped.
    fn digits(&self) -> Box<dyn Iterator<Item = Option<u8>> + '_>;

    /// The chain behind this source, if it is one. Chains are decoded in
    /// their own radix instead of the other operand's.
    fn as_chain(&self) -> Option<&DigitChain> {
        return None;
    }
}

impl DigitSource for DigitChain {
    fn digits(&self) -> Box<dyn Iterator<Item = Option<u8>> + '_> {
        return Box::new(self.iter().map(Some));
    }

    fn as_chain(&self) -> Option<&DigitChain> {
        return Some(self);
    }
}

impl DigitSource for [u8] {
    fn digits(&self) -> Box<dyn Iterator<Item = Option<u8>> + '_> {
        return Box::new(self.iter().copied().map(Some));
    }
}

impl DigitSource for Vec<u8> {
    fn digits(&self) -> Box<dyn Iterator<Item = Option<u8>> + '_> {
        return self.as_slice().digits();
    }
}

impl DigitSource for [Option<u8>] {
    fn digits(&self) -> Box<dyn Iterator<Item = Option<u8>> + '_> {
        return Box::new(self.iter().copied());
    }
}

impl DigitSource for Vec<Option<u8>> {
    fn digits(&self) -> Box<dyn Iterator<Item = Option<u8>> + '_> {
        return self.as_slice().digits();
    }
}

impl DigitChain {
    /// Combine with `other` using the profile's operator. Returns `None`
    /// when there is no other operand.
    pub fn combine(&self, other: Option<&dyn DigitSource>) -> Option<DigitChain> {
        return self.combine_with(self.profile().operator(), other);
    }

    /// Combine with `other` using an explicit operator.
    pub fn combine_with(&self, operator: Operator, other: Option<&dyn DigitSource>) -> Option<DigitChain> {
        let other = other?;
        let a = self.to_biguint();
        let b = match other.as_chain() {
            Some(chain) => chain.to_biguint(),
            None => horner(other.digits().flatten(), self.radix()),
        };

        let result = operator.apply(&a, &b);
        let radix = self.profile().target_radix();
        log::debug!("{} {} {} = {} (radix {})", a, operator, b, result, radix);
        return Some(encode(self.profile(), radix, &result));
    }
}
