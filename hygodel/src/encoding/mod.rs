//! Gödel encoding of formula strings.
//!
//! Role
//! - Map the `i`-th character of a formula (0-based) to the factor `p_i ^ code`, where `p_i`
//!   is the `i`-th prime and `code` the character's symbol code (`0` outside the alphabet).
//! - Multiply every factor into the Gödel number of the formula.
//!
//! The encoder works on raw characters, independently of whether the formula parses.
//! All arithmetic uses `num-bigint`, since the Gödel number of even a short formula
//! overflows any machine word.
//!
//! A formula longer than the prime table is rejected as a whole with
//! [`Error::PrimeExhausted`]; no prefix is encoded.
use log::debug;
use num_bigint::BigUint;
use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{Error, GodelResult};
use crate::symbol::{ALPHABET_SIZE, Symbol, code_of};

pub mod primes;

use primes::PrimeTable;

/// Number of primes held by [`GodelEncoder::default`], hence the longest formula it encodes.
pub const DEFAULT_PRIME_CAPACITY: usize = 256;

/// Largest prime table an encoder may be built with.
///
/// The tree stages recurse once per nesting level and a formula can nest as deep as it is
/// long, so the bound also caps the depth of every tree the pipeline works on.
pub const MAX_PRIME_CAPACITY: usize = 4096;

/// Character substituted for positions whose code is `0` when decoding to a string.
pub const UNKNOWN_SYMBOL: char = '?';

static DEFAULT_ENCODER: Lazy<GodelEncoder> = Lazy::new(GodelEncoder::default);

#[cfg(feature = "serde")]
fn serialize_decimal<S: serde::Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Encoding of a single character of the formula.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EncodingItem {
    /// The source character, kept even when it is outside the alphabet.
    pub symbol: char,
    /// Symbol code, `0` for characters outside the alphabet.
    pub code: u32,
    /// Prime assigned to the character's position.
    pub prime: u64,
    /// `prime ^ code`
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_decimal"))]
    pub factor: BigUint,
}

impl std::fmt::Display for EncodingItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}^{} = {}",
            self.symbol, self.prime, self.code, self.factor
        )
    }
}

/// Per-character breakdown of a formula and its Gödel number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EncodingResult {
    /// One item per character, in input order.
    pub items: Vec<EncodingItem>,
    /// Product of every item's factor; `1` for the empty formula.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_decimal"))]
    pub godel_number: BigUint,
}

impl EncodingResult {
    /// The Gödel number in decimal.
    pub fn godel_number_string(&self) -> String {
        self.godel_number.to_str_radix(10)
    }

    /// Number of encoded characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the encoded formula was empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Largest code in the formula, `0` when empty.
    pub fn max_code(&self) -> u32 {
        self.items.iter().map(|item| item.code).max().unwrap_or(0)
    }
}

/// Encoder and decoder bound to a fixed table of primes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GodelEncoder {
    primes: PrimeTable,
}

impl Default for GodelEncoder {
    fn default() -> Self {
        Self {
            primes: PrimeTable::first(DEFAULT_PRIME_CAPACITY),
        }
    }
}

impl GodelEncoder {
    /// Encoder able to handle formulas of up to `capacity` characters.
    ///
    /// Fails with [`Error::CapacityTooLarge`] past [`MAX_PRIME_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> GodelResult<Self> {
        if capacity > MAX_PRIME_CAPACITY {
            return Err(Error::CapacityTooLarge {
                requested: capacity,
                max: MAX_PRIME_CAPACITY,
            });
        }
        Ok(Self {
            primes: PrimeTable::first(capacity),
        })
    }

    /// Longest formula, in characters, this encoder accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.primes.len()
    }

    /// Prime table used by this encoder.
    #[inline]
    pub fn primes(&self) -> &PrimeTable {
        &self.primes
    }

    /// Encode `formula` character by character.
    ///
    /// Example
    /// ```
    /// use hygodel::encoding::GodelEncoder;
    /// let encoder = GodelEncoder::with_capacity(4).unwrap();
    /// // `0` has code 13, `S` 14: 2^14 * 3^13
    /// let result = encoder.encode("S0").unwrap();
    /// assert_eq!(result.godel_number_string(), (16384u64 * 1594323).to_string());
    /// assert!(encoder.encode("SSSS0").is_err());
    /// ```
    pub fn encode(&self, formula: &str) -> GodelResult<EncodingResult> {
        let length = formula.chars().count();
        if length > self.primes.len() {
            return Err(Error::PrimeExhausted {
                length,
                available: self.primes.len(),
            });
        }

        let mut godel_number = BigUint::from(1u32);
        let mut items = Vec::with_capacity(length);
        for (symbol, &prime) in formula.chars().zip(self.primes.as_slice()) {
            let code = code_of(symbol);
            let factor = BigUint::from(prime).pow(code);
            godel_number *= &factor;
            items.push(EncodingItem {
                symbol,
                code,
                prime,
                factor,
            });
        }

        debug!(
            "Encoded {length} characters into a Gödel number of {} bits",
            godel_number.bits()
        );
        Ok(EncodingResult {
            items,
            godel_number,
        })
    }

    /// Recover the per-position symbols of a Gödel number.
    ///
    /// Positions with code `0` (characters outside the alphabet) come back as `None`.
    /// Such positions at the *end* of a formula contribute a factor of `1` and cannot be
    /// recovered at all, so decoding stops at the last position with a non-zero code.
    pub fn decode(&self, number: &BigUint) -> GodelResult<Vec<Option<Symbol>>> {
        if *number == BigUint::ZERO {
            return Err(not_a_godel_number(number, "zero has no prime factorization"));
        }

        let one = BigUint::from(1u32);
        let mut remaining = number.clone();
        let mut symbols = Vec::new();

        for (position, &prime) in self.primes.as_slice().iter().enumerate() {
            if remaining == one {
                break;
            }

            let divisor = BigUint::from(prime);
            let mut exponent = 0u32;
            while exponent <= ALPHABET_SIZE as u32 && &remaining % &divisor == BigUint::ZERO {
                remaining /= &divisor;
                exponent += 1;
            }

            let symbol = Symbol::from_code(exponent);
            if exponent != 0 && symbol.is_none() {
                return Err(not_a_godel_number(
                    number,
                    &format!(
                        "the exponent of {prime} at position {position} exceeds the largest symbol code {ALPHABET_SIZE}"
                    ),
                ));
            }
            symbols.push(symbol);
        }

        if remaining != one {
            return Err(not_a_godel_number(
                number,
                &format!(
                    "it has prime factors beyond the first {} primes",
                    self.primes.len()
                ),
            ));
        }

        debug!("Decoded Gödel number into {} positions", symbols.len());
        Ok(symbols)
    }

    /// Decode a Gödel number back to formula text, writing [`UNKNOWN_SYMBOL`] for code `0`.
    pub fn decode_formula(&self, number: &BigUint) -> GodelResult<String> {
        Ok(self
            .decode(number)?
            .into_iter()
            .map(|symbol| symbol.map_or(UNKNOWN_SYMBOL, Symbol::as_char))
            .collect())
    }
}

fn not_a_godel_number(number: &BigUint, reason: &str) -> Error {
    Error::NotAGodelNumber {
        value: number.to_str_radix(10),
        reason: reason.to_string(),
    }
}

/// Encode `formula` with the shared default encoder ([`DEFAULT_PRIME_CAPACITY`] primes).
///
/// Example
/// ```
/// use hygodel::encoding::godel_encode;
/// assert_eq!(godel_encode("").unwrap().godel_number_string(), "1");
/// // `0` has code 13 and sits at the first prime.
/// assert_eq!(godel_encode("0").unwrap().godel_number_string(), "8192");
/// ```
pub fn godel_encode(formula: &str) -> GodelResult<EncodingResult> {
    DEFAULT_ENCODER.encode(formula)
}

/// Decode `number` with the shared default encoder.
pub fn godel_decode(number: &BigUint) -> GodelResult<String> {
    DEFAULT_ENCODER.decode_formula(number)
}
