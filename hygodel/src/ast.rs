//! Abstract syntax tree of a parsed formula.
//!
//! The tree is a closed sum type with one variant per grammar production. Every
//! node exclusively owns its children; there is no sharing and no cycles.
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::symbol::Symbol;

/// Prefix operators. The language only has logical negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum UnaryOperator {
    /// `¬`
    Not,
}

impl UnaryOperator {
    /// The symbol the operator is written with.
    pub fn symbol(self) -> Symbol {
        match self {
            UnaryOperator::Not => Symbol::Not,
        }
    }
}

/// Infix operators. All of them share a single, left-associative precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `*`
    Mul,
    /// `∨`
    Or,
    /// `∧`
    And,
    /// `→`
    Implies,
    /// `↔`
    Iff,
    /// `=`
    Equal,
}

impl BinaryOperator {
    /// Operator written as `symbol`, if the symbol is an infix operator.
    pub fn from_symbol(symbol: Symbol) -> Option<Self> {
        let op = match symbol {
            Symbol::Plus => BinaryOperator::Add,
            Symbol::Times => BinaryOperator::Mul,
            Symbol::Or => BinaryOperator::Or,
            Symbol::And => BinaryOperator::And,
            Symbol::Implies => BinaryOperator::Implies,
            Symbol::Iff => BinaryOperator::Iff,
            Symbol::Equal => BinaryOperator::Equal,
            _ => return None,
        };
        Some(op)
    }

    /// The symbol the operator is written with.
    pub fn symbol(self) -> Symbol {
        match self {
            BinaryOperator::Add => Symbol::Plus,
            BinaryOperator::Mul => Symbol::Times,
            BinaryOperator::Or => Symbol::Or,
            BinaryOperator::And => Symbol::And,
            BinaryOperator::Implies => Symbol::Implies,
            BinaryOperator::Iff => Symbol::Iff,
            BinaryOperator::Equal => Symbol::Equal,
        }
    }

    /// Short name of the primitive recursive function implementing the operator.
    pub fn name(self) -> &'static str {
        match self {
            BinaryOperator::Add => "add",
            BinaryOperator::Mul => "mul",
            BinaryOperator::Or => "or",
            BinaryOperator::And => "and",
            BinaryOperator::Implies => "impl",
            BinaryOperator::Iff => "equiv",
            BinaryOperator::Equal => "eq",
        }
    }

    /// Human-readable name of the operation.
    pub fn describe(self) -> &'static str {
        match self {
            BinaryOperator::Add => "Addition",
            BinaryOperator::Mul => "Multiplication",
            BinaryOperator::Or => "Disjunction",
            BinaryOperator::And => "Conjunction",
            BinaryOperator::Implies => "Implication",
            BinaryOperator::Iff => "Equivalence",
            BinaryOperator::Equal => "Equality",
        }
    }
}

/// Kind of a quantifier node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum QuantifierKind {
    /// `∀`
    Universal,
    /// `∃`
    Existential,
}

impl QuantifierKind {
    /// Quantifier written as `symbol`, if any.
    pub fn from_symbol(symbol: Symbol) -> Option<Self> {
        match symbol {
            Symbol::ForAll => Some(QuantifierKind::Universal),
            Symbol::Exists => Some(QuantifierKind::Existential),
            _ => None,
        }
    }

    /// The symbol the quantifier is written with.
    pub fn symbol(self) -> Symbol {
        match self {
            QuantifierKind::Universal => Symbol::ForAll,
            QuantifierKind::Existential => Symbol::Exists,
        }
    }

    /// Lower-case adjective used in step descriptions.
    pub fn adjective(self) -> &'static str {
        match self {
            QuantifierKind::Universal => "universal",
            QuantifierKind::Existential => "existential",
        }
    }
}

/// A node of the formula tree.
///
/// `Atom(None)` is the sentinel produced when the permissive parser reads past
/// the end of the token sequence. Likewise a quantifier whose bound symbol is
/// missing has `variable: None`. Neither can come out of the strict parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Node {
    /// A bare symbol: `0`, a variable, or whatever single token the permissive
    /// parser found in term position.
    Atom(Option<Symbol>),
    /// `S t`
    Successor(Box<Node>),
    /// `¬ t`
    Unary {
        /// Always [`UnaryOperator::Not`].
        operator: UnaryOperator,
        /// The negated term.
        operand: Box<Node>,
    },
    /// `l op r`
    Binary {
        /// Infix operator.
        operator: BinaryOperator,
        /// Left operand.
        left: Box<Node>,
        /// Right operand.
        right: Box<Node>,
    },
    /// `∀v e` or `∃v e`
    Quantifier {
        /// Universal or existential.
        kind: QuantifierKind,
        /// The token right after the quantifier. Not necessarily a variable.
        variable: Option<Symbol>,
        /// Quantified expression.
        body: Box<Node>,
    },
}

impl Node {
    /// Atom holding `symbol`.
    #[inline]
    pub fn atom(symbol: Symbol) -> Self {
        Node::Atom(Some(symbol))
    }

    /// `S operand`
    pub fn successor(operand: Node) -> Self {
        Node::Successor(Box::new(operand))
    }

    /// `¬ operand`
    pub fn not(operand: Node) -> Self {
        Node::Unary {
            operator: UnaryOperator::Not,
            operand: Box::new(operand),
        }
    }

    /// `left operator right`
    pub fn binary(operator: BinaryOperator, left: Node, right: Node) -> Self {
        Node::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Quantifier node binding `variable` over `body`.
    pub fn quantifier(kind: QuantifierKind, variable: Option<Symbol>, body: Node) -> Self {
        Node::Quantifier {
            kind,
            variable,
            body: Box::new(body),
        }
    }

    /// Whether this is the end-of-input sentinel atom.
    #[inline]
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Node::Atom(None))
    }

    /// Direct children, left to right.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        let (first, second): (Option<&Node>, Option<&Node>) = match self {
            Node::Atom(_) => (None, None),
            Node::Successor(operand) | Node::Unary { operand, .. } => (Some(operand.as_ref()), None),
            Node::Binary { left, right, .. } => (Some(left.as_ref()), Some(right.as_ref())),
            Node::Quantifier { body, .. } => (Some(body.as_ref()), None),
        };
        first.into_iter().chain(second)
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut pending = vec![self];
        let mut size = 0;
        while let Some(node) = pending.pop() {
            size += 1;
            pending.extend(node.children());
        }
        size
    }

    /// Length of the longest root-to-leaf path, counting nodes (an atom has depth 1).
    pub fn depth(&self) -> usize {
        let mut pending = vec![(self, 1)];
        let mut depth = 0;
        while let Some((node, level)) = pending.pop() {
            depth = depth.max(level);
            pending.extend(node.children().map(|child| (child, level + 1)));
        }
        depth
    }

    /// Move the children out, leaving sentinel atoms behind.
    fn take_children(&mut self, out: &mut Vec<Node>) {
        let mut take = |child: &mut Box<Node>| {
            out.push(std::mem::replace(child.as_mut(), Node::Atom(None)));
        };
        match self {
            Node::Atom(_) => {}
            Node::Successor(operand) | Node::Unary { operand, .. } => take(operand),
            Node::Binary { left, right, .. } => {
                take(left);
                take(right);
            }
            Node::Quantifier { body, .. } => take(body),
        }
    }
}

// Deep trees would otherwise be freed by one recursive call per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.take_children(&mut pending);
        }
    }
}
