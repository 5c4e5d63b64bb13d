//! Ordered table of the first `n` primes.
//!
//! The table is built once by incremental trial division against the primes found so far,
//! which is linear in `n` times the number of primes below `sqrt(p_n)`. A few thousand primes
//! take well under a millisecond.
use log::trace;

/// The first `len()` primes, in increasing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    primes: Vec<u64>,
}

impl PrimeTable {
    /// Build the table of the first `count` primes.
    ///
    /// The work grows faster than linearly with `count`; encoders bound it with
    /// [`MAX_PRIME_CAPACITY`](super::MAX_PRIME_CAPACITY).
    ///
    /// Example
    /// ```
    /// use hygodel::encoding::primes::PrimeTable;
    /// let table = PrimeTable::first(5);
    /// assert_eq!(table.as_slice(), &[2, 3, 5, 7, 11]);
    /// ```
    pub fn first(count: usize) -> Self {
        let mut primes: Vec<u64> = Vec::new();
        let mut candidate = 2_u64;

        while primes.len() < count {
            let is_prime = primes
                .iter()
                .take_while(|&&p| p * p <= candidate)
                .all(|&p| candidate % p != 0);
            if is_prime {
                primes.push(candidate);
            }
            // After 2, only odd numbers can be prime.
            candidate += if candidate == 2 { 1 } else { 2 };
        }

        trace!("Built prime table of {count} entries");
        Self { primes }
    }

    /// The `index`-th prime (0-based), if the table is large enough.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u64> {
        self.primes.get(index).copied()
    }

    /// Number of primes in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Whether the table holds no primes at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// All primes in the table.
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.primes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_twenty_primes() {
        let table = PrimeTable::first(20);
        assert_eq!(
            table.as_slice(),
            &[
                2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71
            ]
        );
    }

    #[test]
    fn empty_table() {
        let table = PrimeTable::first(0);
        assert!(table.is_empty());
        assert_eq!(table.get(0), None);
    }

    #[test]
    fn thousandth_prime() {
        let table = PrimeTable::first(1000);
        assert_eq!(table.len(), 1000);
        assert_eq!(table.get(999), Some(7919));
        assert_eq!(table.get(1000), None);
    }

    #[test]
    fn table_is_strictly_increasing() {
        let table = PrimeTable::first(300);
        assert!(table.as_slice().windows(2).all(|w| w[0] < w[1]));
    }
}
