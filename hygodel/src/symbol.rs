//! Alphabet of the formula language and its fixed symbol codes.
//!
//! Role
//! - Define the 17 symbols a formula may contain, one Unicode character each.
//! - Assign every symbol its Gödel code (1..=17). The discriminant of [`Symbol`] *is* the code,
//!   so the table cannot drift out of sync with the enum.
//!
//! Characters outside the alphabet have no symbol and encode with code `0`
//! (see [`code_of`]).
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr};

/// One character of the formula alphabet.
///
/// Codes follow the classical ordering: quantifiers, connectives, equality,
/// arithmetic, parentheses, zero, successor and finally the variables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount, FromRepr,
)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "char", try_from = "char")
)]
#[repr(u8)]
pub enum Symbol {
    /// `∀`
    ForAll = 1,
    /// `∃`
    Exists = 2,
    /// `¬`
    Not = 3,
    /// `∨`
    Or = 4,
    /// `∧`
    And = 5,
    /// `→`
    Implies = 6,
    /// `↔`
    Iff = 7,
    /// `=`
    Equal = 8,
    /// `+`
    Plus = 9,
    /// `*`
    Times = 10,
    /// `(`
    LParen = 11,
    /// `)`
    RParen = 12,
    /// `0`
    Zero = 13,
    /// `S`, the successor marker
    Succ = 14,
    /// `x`
    X = 15,
    /// `y`
    Y = 16,
    /// `z`
    Z = 17,
}

/// Number of symbols in the alphabet (also the largest code).
pub const ALPHABET_SIZE: usize = Symbol::COUNT;

impl Symbol {
    /// Look up the symbol written as `c`, if any.
    pub fn from_char(c: char) -> Option<Self> {
        let symbol = match c {
            '∀' => Symbol::ForAll,
            '∃' => Symbol::Exists,
            '¬' => Symbol::Not,
            '∨' => Symbol::Or,
            '∧' => Symbol::And,
            '→' => Symbol::Implies,
            '↔' => Symbol::Iff,
            '=' => Symbol::Equal,
            '+' => Symbol::Plus,
            '*' => Symbol::Times,
            '(' => Symbol::LParen,
            ')' => Symbol::RParen,
            '0' => Symbol::Zero,
            'S' => Symbol::Succ,
            'x' => Symbol::X,
            'y' => Symbol::Y,
            'z' => Symbol::Z,
            _ => return None,
        };
        Some(symbol)
    }

    /// The character this symbol is written as.
    pub fn as_char(self) -> char {
        match self {
            Symbol::ForAll => '∀',
            Symbol::Exists => '∃',
            Symbol::Not => '¬',
            Symbol::Or => '∨',
            Symbol::And => '∧',
            Symbol::Implies => '→',
            Symbol::Iff => '↔',
            Symbol::Equal => '=',
            Symbol::Plus => '+',
            Symbol::Times => '*',
            Symbol::LParen => '(',
            Symbol::RParen => ')',
            Symbol::Zero => '0',
            Symbol::Succ => 'S',
            Symbol::X => 'x',
            Symbol::Y => 'y',
            Symbol::Z => 'z',
        }
    }

    /// Gödel code of the symbol, in `1..=17`.
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Inverse of [`Symbol::code`]. Returns `None` for `0` and for codes past the alphabet.
    pub fn from_code(code: u32) -> Option<Self> {
        u8::try_from(code).ok().and_then(Self::from_repr)
    }

    /// Whether the symbol is one of the variables `x`, `y`, `z`.
    #[inline]
    pub fn is_variable(self) -> bool {
        matches!(self, Symbol::X | Symbol::Y | Symbol::Z)
    }
}

/// Gödel code of an arbitrary character; `0` when it is not part of the alphabet.
#[inline]
pub fn code_of(c: char) -> u32 {
    Symbol::from_char(c).map_or(0, Symbol::code)
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Symbol> for char {
    fn from(symbol: Symbol) -> char {
        symbol.as_char()
    }
}

impl TryFrom<char> for Symbol {
    type Error = String;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Symbol::from_char(c).ok_or_else(|| format!("'{c}' is not a formula symbol"))
    }
}
