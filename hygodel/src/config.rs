//! Tunable settings of the pipeline.
#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::encoding::{DEFAULT_PRIME_CAPACITY, GodelEncoder, MAX_PRIME_CAPACITY};
use crate::error::{Error, GodelResult};

/// Settings shared by the encoder and the parser.
///
/// With the `serde` feature the struct deserializes from e.g. TOML; missing keys keep
/// their default:
///
/// ```toml
/// prime_capacity = 1024
/// strict = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default, deny_unknown_fields))]
pub struct GodelConfig {
    /// Number of primes available to the encoder, i.e. the longest encodable formula.
    pub prime_capacity: usize,
    /// Parse against the strict grammar and report malformed formulas as errors.
    pub strict: bool,
}

impl Default for GodelConfig {
    fn default() -> Self {
        Self {
            prime_capacity: DEFAULT_PRIME_CAPACITY,
            strict: false,
        }
    }
}

impl GodelConfig {
    /// Check the settings without building anything.
    pub fn validate(&self) -> GodelResult<()> {
        if self.prime_capacity > MAX_PRIME_CAPACITY {
            return Err(Error::CapacityTooLarge {
                requested: self.prime_capacity,
                max: MAX_PRIME_CAPACITY,
            });
        }
        Ok(())
    }

    /// Encoder sized according to [`GodelConfig::prime_capacity`].
    ///
    /// Fails when the capacity exceeds [`MAX_PRIME_CAPACITY`].
    pub fn encoder(&self) -> GodelResult<GodelEncoder> {
        self.validate()?;
        GodelEncoder::with_capacity(self.prime_capacity)
    }
}
