// created = "2026-10-17"
// modified = "2026-10-17"

//! Radix Chain - unsigned big integers as circular chains of digits.
//!
//! # Quick Start
//!
//! ```
//! use radix_chain::chain::DigitChain;
//! use radix_chain::config::Config;
//!
//! // Decimal 255 with main radix 16 and target radix 2.
//! let profile = Config::new(4).resolve().unwrap();
//! let mut number = DigitChain::parse_decimal(profile, "255");
//! assert_eq!(number.to_string(), "FF");
//! assert_eq!(number.convert().to_string(), "11111111");
//!
//! number.rotate_left();
//! assert_eq!(number.to_decimal_string(), "255");
//! ```

pub mod chain;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod ops;
pub mod persist;

pub use chain::DigitChain;
pub use config::Config;
pub use config::Profile;
pub use error::ChainError;
pub use ops::DigitSource;
pub use ops::Operator;
