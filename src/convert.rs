// created = "2026-10-17"
// modified = "2026-10-17"

//! Base conversion.
//!
//! Converting goes through the big integer value, so the result is a fresh
//! chain that shares nothing with the source.

use crate::chain::DigitChain;
use crate::chain::codec::encode;
use crate::config::check_radix;
use crate::error::ChainError;

impl DigitChain {
    /// The same value in the profile's target radix.
    pub fn convert(&self) -> DigitChain {
        let radix = self.profile().target_radix();
        log::debug!("converting {} digits from radix {} to {}", self.len(), self.radix(), radix);
        return encode(self.profile(), radix, &self.to_biguint());
    }

    /// The same value in an explicit radix.
    pub fn convert_to(&self, radix: u32) -> Result<DigitChain, ChainError> {
        let radix = check_radix(radix)?;
        return Ok(encode(self.profile(), radix, &self.to_biguint()));
    }
}
