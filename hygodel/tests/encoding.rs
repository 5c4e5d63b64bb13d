use hygodel::encoding::{GodelEncoder, godel_decode, godel_encode};
use hygodel::error::Error;
use hygodel::symbol::{Symbol, code_of};
use num_bigint::BigUint;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use strum::IntoEnumIterator;

const FIRST_PRIMES: [u64; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];

/// Formula of `len` characters mixing alphabet symbols with a few foreign characters.
fn random_formula(rng: &mut impl Rng, len: usize) -> String {
    let alphabet: Vec<char> = Symbol::iter().map(Symbol::as_char).collect();
    (0..len)
        .map(|_| {
            if rng.random_bool(0.1) {
                [' ', '#', 'a', 'é'][rng.random_range(0..4)]
            } else {
                alphabet[rng.random_range(0..alphabet.len())]
            }
        })
        .collect()
}

#[test]
fn empty_formula_encodes_to_one() {
    let result = godel_encode("").unwrap();
    assert!(result.items.is_empty());
    assert_eq!(result.godel_number_string(), "1");
}

#[test]
fn foreign_characters_contribute_factor_one() {
    let result = godel_encode("#@").unwrap();
    assert_eq!(result.items.len(), 2);
    for item in &result.items {
        assert_eq!(item.code, 0);
        assert_eq!(item.factor.to_string(), "1");
    }
    assert_eq!(result.items[0].symbol, '#');
    assert_eq!(result.items[1].prime, 3);
    assert_eq!(result.godel_number_string(), "1");
}

#[test]
fn every_symbol_code_in_first_position() {
    for symbol in Symbol::iter() {
        let result = godel_encode(&symbol.to_string()).unwrap();
        assert_eq!(result.items[0].code, symbol.code());
        assert_eq!(result.godel_number, BigUint::from(2u32).pow(symbol.code()));
    }
}

#[test]
fn primes_follow_character_positions() {
    let formula: String = std::iter::repeat_n('x', FIRST_PRIMES.len()).collect();
    let result = godel_encode(&formula).unwrap();
    let primes: Vec<u64> = result.items.iter().map(|item| item.prime).collect();
    assert_eq!(primes, FIRST_PRIMES);
}

#[test]
fn one_item_per_character() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x6f64);
    for _ in 0..64 {
        let len = rng.random_range(0..40);
        let formula = random_formula(&mut rng, len);
        let result = godel_encode(&formula).unwrap();
        assert_eq!(result.items.len(), formula.chars().count());
    }
}

#[test]
fn number_is_the_product_of_prime_powers() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);
    for _ in 0..64 {
        let len = rng.random_range(0..FIRST_PRIMES.len());
        let formula = random_formula(&mut rng, len);
        let result = godel_encode(&formula).unwrap();

        let expected = formula
            .chars()
            .zip(FIRST_PRIMES)
            .fold(BigUint::from(1u32), |acc, (c, p)| {
                acc * BigUint::from(p).pow(code_of(c))
            });
        assert_eq!(result.godel_number, expected, "{formula:?}");

        for item in &result.items {
            assert_eq!(item.factor, BigUint::from(item.prime).pow(item.code));
        }
    }
}

#[test]
fn encoding_is_deterministic() {
    let encoder = GodelEncoder::default();
    let formula = "∀x∃y(x+Sy=z)";
    assert_eq!(encoder.encode(formula), encoder.encode(formula));
    assert_eq!(encoder.encode(formula), godel_encode(formula));
}

#[test]
fn changing_one_symbol_changes_the_number() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5e);
    for _ in 0..128 {
        let len = rng.random_range(1..40);
        let formula = random_formula(&mut rng, len);
        let mut chars: Vec<char> = formula.chars().collect();

        let position = rng.random_range(0..chars.len());
        let old = chars[position];
        let new = random_formula(&mut rng, 1).chars().next().unwrap();
        chars[position] = new;
        let changed: String = chars.into_iter().collect();

        let before = godel_encode(&formula).unwrap().godel_number;
        let after = godel_encode(&changed).unwrap().godel_number;
        assert_eq!(
            before != after,
            code_of(old) != code_of(new),
            "{formula:?} -> {changed:?}"
        );
    }
}

#[test]
fn length_past_the_prime_table_is_rejected() {
    let encoder = GodelEncoder::with_capacity(FIRST_PRIMES.len()).unwrap();
    let fits: String = "x".repeat(FIRST_PRIMES.len());
    let too_long: String = "x".repeat(FIRST_PRIMES.len() + 1);

    assert!(encoder.encode(&fits).is_ok());
    assert_eq!(
        encoder.encode(&too_long),
        Err(Error::PrimeExhausted {
            length: 21,
            available: 20
        })
    );
}

#[test]
fn default_encoder_handles_long_formulas() {
    let formula = "S".repeat(200);
    let result = godel_encode(&formula).unwrap();
    assert_eq!(result.items.len(), 200);
    assert_eq!(result.items[199].prime, 1223);
}

#[test]
fn decoding_inverts_encoding() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let alphabet: Vec<char> = Symbol::iter().map(Symbol::as_char).collect();
    for _ in 0..32 {
        let len = rng.random_range(1..12);
        let formula: String = (0..len)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect();
        let number = godel_encode(&formula).unwrap().godel_number;
        assert_eq!(godel_decode(&number).unwrap(), formula);
    }
}
