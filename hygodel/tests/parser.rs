use hygodel::ast::{BinaryOperator, Node, QuantifierKind};
use hygodel::error::{Error, GrammarError};
use hygodel::lexer::tokenize;
use hygodel::parser::{parse, parse_formula, parse_formula_strict, parse_prefix};
use hygodel::symbol::Symbol;

fn var(symbol: Symbol) -> Node {
    Node::atom(symbol)
}

#[test]
fn zero_is_a_single_atom() {
    assert_eq!(parse_formula("0"), Node::atom(Symbol::Zero));
}

#[test]
fn successor_wraps_its_term() {
    assert_eq!(parse_formula("Sx"), Node::successor(var(Symbol::X)));
    assert_eq!(
        parse_formula("SS0"),
        Node::successor(Node::successor(Node::atom(Symbol::Zero)))
    );
}

#[test]
fn addition() {
    assert_eq!(
        parse_formula("x+y"),
        Node::binary(BinaryOperator::Add, var(Symbol::X), var(Symbol::Y))
    );
}

#[test]
fn single_precedence_level_folds_left() {
    // Multiplication does not bind tighter than addition.
    let expected = Node::binary(
        BinaryOperator::Mul,
        Node::binary(BinaryOperator::Add, var(Symbol::X), var(Symbol::Y)),
        var(Symbol::Z),
    );
    assert_eq!(parse_formula("x+y*z"), expected);
    assert_eq!(parse_formula_strict("x+y*z").unwrap(), expected);

    // Nor does equality bind looser than conjunction.
    let expected = Node::binary(
        BinaryOperator::Equal,
        Node::binary(BinaryOperator::And, var(Symbol::X), var(Symbol::Y)),
        var(Symbol::Z),
    );
    assert_eq!(parse_formula("x∧y=z"), expected);
}

#[test]
fn quantifier_body_extends_to_the_end() {
    let tree = parse_formula("∀x x=0+y");
    let Node::Quantifier {
        kind,
        variable,
        body,
    } = &tree
    else {
        panic!("expected a quantifier at the root");
    };
    assert_eq!(*kind, QuantifierKind::Universal);
    assert_eq!(*variable, Some(Symbol::X));
    assert_eq!(body.size(), 5);
}

#[test]
fn whitespace_and_foreign_characters_are_ignored() {
    assert_eq!(parse_formula(" x \t+ y "), parse_formula("x+y"));
    assert_eq!(parse_formula("x#+@y"), parse_formula("x+y"));
}

#[test]
fn permissive_parser_is_total() {
    let inputs = [
        "", ")", "(", "((", "+", "x+", "∀", "∃+", "¬", "S", ")(", "x)y", "==", "(x+y", "∀∀∀",
    ];
    for input in inputs {
        // Never panics, always returns some tree.
        let parsed = parse_prefix(&tokenize(input));
        assert!(parsed.consumed <= tokenize(input).len(), "{input:?}");
        assert!(parsed.root.size() >= 1);
    }
}

#[test]
fn missing_tokens_become_sentinels() {
    assert_eq!(
        parse_formula("x+"),
        Node::binary(BinaryOperator::Add, var(Symbol::X), Node::Atom(None))
    );
    assert_eq!(
        parse_formula("∀"),
        Node::quantifier(QuantifierKind::Universal, None, Node::Atom(None))
    );
}

#[test]
fn quantifier_takes_any_token_as_its_variable() {
    assert_eq!(
        parse_formula("∃0x"),
        Node::quantifier(
            QuantifierKind::Existential,
            Some(Symbol::Zero),
            var(Symbol::X)
        )
    );
}

#[test]
fn trailing_tokens_are_not_consumed() {
    let tokens = tokenize("x y z");
    let parsed = parse_prefix(&tokens);
    assert_eq!(parsed.root, var(Symbol::X));
    assert_eq!(parsed.consumed, 1);
    assert_eq!(parse(&tokens), var(Symbol::X));
}

#[test]
fn strict_accepts_well_formed_formulas() {
    for input in ["0", "Sx", "x+y", "¬(x=y)", "∀x∃y(x+Sy=z)", "(x)", "S(S0*x)"] {
        assert!(parse_formula_strict(input).is_ok(), "{input:?}");
    }
}

#[test]
fn strict_agrees_with_permissive_on_well_formed_input() {
    for input in ["x+y*z", "∀x(x=x)", "¬S0", "(x∨y)→z"] {
        assert_eq!(parse_formula_strict(input).unwrap(), parse_formula(input));
    }
}

#[test]
fn strict_reports_positions() {
    // `∀` is one character even though it is three bytes.
    let Err(Error::MalformedGrammar(errors)) = parse_formula_strict("∀+x") else {
        panic!("expected a grammar error");
    };
    assert_eq!(
        errors[0],
        GrammarError::UnexpectedToken {
            found: Symbol::Plus,
            position: 1
        }
    );

    let Err(Error::MalformedGrammar(errors)) = parse_formula_strict("x+") else {
        panic!("expected a grammar error");
    };
    assert_eq!(errors[0], GrammarError::UnexpectedEndOfInput { position: 2 });
}

#[test]
fn strict_rejects_trailing_tokens() {
    let err = parse_formula_strict("x y").unwrap_err();
    assert!(err.is_malformed_grammar());
}

#[test]
fn token_sequences_of_basic_formulas() {
    assert_eq!(tokenize("0"), vec![Symbol::Zero]);
    assert_eq!(tokenize("Sx"), vec![Symbol::Succ, Symbol::X]);
    assert_eq!(tokenize("x+y"), vec![Symbol::X, Symbol::Plus, Symbol::Y]);
    assert!(tokenize("#@ \t").is_empty());
}
