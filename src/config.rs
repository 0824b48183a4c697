// created = "2026-10-17"
// modified = "2026-10-17"

//! Configuration for digit chains.
//!
//! A configuration identifier picks two things by modulo arithmetic: the
//! radix chains are built in (and its successor in the table, used as the
//! conversion target), and the operator used when combining two chains.
//! Both are resolved once into a [`Profile`] that chains carry around.

use crate::error::ChainError;
use crate::ops::Operator;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix. Digits are stored in a byte.
pub const MAX_RADIX: u32 = 256;

/// The identifier used when none is given.
pub const DEFAULT_ID: u32 = 11;

/// The radices a configuration can select from, in selection order.
pub const DEFAULT_RADICES: [u32; 5] = [2, 3, 8, 10, 16];

/// Number of entries in the operator table.
pub const OPERATOR_COUNT: u32 = 7;

/// An unresolved configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// The configuration identifier.
    pub id: u32,
    /// Supported radices, indexed by `id % radices.len()`.
    pub radices: Vec<u32>,
}

impl Config {
    /// Create a configuration with the default radix table.
    pub fn new(id: u32) -> Config {
        return Config {
            id,
            radices: DEFAULT_RADICES.to_vec(),
        };
    }

    /// Replace the radix table.
    pub fn with_radices(mut self, radices: &[u32]) -> Config {
        self.radices = radices.to_vec();
        return self;
    }

    /// Resolve the identifier into concrete radices and an operator.
    pub fn resolve(&self) -> Result<Profile, ChainError> {
        if self.radices.is_empty() {
            return Err(ChainError::EmptyRadixTable);
        }
        for &radix in &self.radices {
            check_radix(radix)?;
        }

        let profile = Profile::select(self.id, &self.radices);
        log::debug!("resolved config {} to {:?}", self.id, profile);
        return Ok(profile);
    }
}

impl Default for Config {
    fn default() -> Self {
        return Config::new(DEFAULT_ID);
    }
}

/// A resolved configuration. Both radices are always within
/// `MIN_RADIX..=MAX_RADIX`; the only ways to get one are `Profile::new`
/// and `Config::resolve`, which check them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    radix: u32,
    target_radix: u32,
    operator: Operator,
}

impl Profile {
    /// Build a profile from explicit parts.
    pub fn new(radix: u32, target_radix: u32, operator: Operator) -> Result<Profile, ChainError> {
        return Ok(Profile {
            radix: check_radix(radix)?,
            target_radix: check_radix(target_radix)?,
            operator,
        });
    }

    /// Pick the slot for `id`. The table must be non-empty and checked.
    fn select(id: u32, radices: &[u32]) -> Profile {
        let slot = id as usize % radices.len();
        return Profile {
            radix: radices[slot],
            target_radix: radices[(slot + 1) % radices.len()],
            operator: Operator::from_selector(id),
        };
    }

    /// The radix new chains are built in.
    pub fn radix(&self) -> u32 {
        return self.radix;
    }

    /// The radix conversion and combination results are encoded in.
    pub fn target_radix(&self) -> u32 {
        return self.target_radix;
    }

    /// The operator applied by `DigitChain::combine`.
    pub fn operator(&self) -> Operator {
        return self.operator;
    }

    /// The same radices with a different operator.
    pub fn with_operator(mut self, operator: Operator) -> Profile {
        self.operator = operator;
        return self;
    }
}

impl Default for Profile {
    fn default() -> Self {
        // DEFAULT_RADICES is non-empty and every entry is in range.
        return Profile::select(DEFAULT_ID, &DEFAULT_RADICES);
    }
}

/// Check that a radix is within `MIN_RADIX..=MAX_RADIX`.
pub fn check_radix(radix: u32) -> Result<u32, ChainError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(ChainError::InvalidRadix(radix));
    }
    return Ok(radix);
}
