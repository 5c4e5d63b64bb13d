//! Construction of a formula out of primitive recursive functions.
//!
//! The builder walks the tree depth-first, post-order: the steps of every child are
//! emitted before the step that combines them, mirroring how a primitive recursive
//! definition is assembled bottom-up from functions that already exist.
//!
//! Each emitted step is named `f_k`. A single counter, scoped to one [`build_steps`] call,
//! starts at `1`; every step takes the counter's current value and then advances it, so the
//! indices are `1, 2, 3, …` in emission order and a composite step always refers to smaller
//! indices.
//!
//! | node            | step                                          |
//! |-----------------|-----------------------------------------------|
//! | `0`             | basic: zero function                          |
//! | any other atom  | basic: identity / projection                  |
//! | `S t`           | composition: successor of `t`                 |
//! | `l op r`        | composition: `op` applied to `l` and `r`      |
//! | `¬ t`           | composition: logical NOT of `t`               |
//! | `∀v e`, `∃v e`  | minimization over `v` of `e`                  |
//!
//! The builder is total: trees produced from malformed input still yield a step per node,
//! possibly with a nonsensical label.
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::ast::Node;
use crate::symbol::Symbol;

/// Index of the first emitted step.
pub const FIRST_STEP_INDEX: usize = 1;

/// What a construction step introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum StepKind {
    /// Zero or identity/projection function.
    Basic,
    /// Composition of previously built functions.
    Composition,
    /// Unbounded search (μ-operator), used for quantifiers.
    Minimization,
}

/// One step of the construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ConstructionStep {
    /// Function index `k` of the step; the step defines `f_k`.
    pub index: usize,
    /// Kind of construction.
    pub kind: StepKind,
    /// Short formula-like label, e.g. `f_3 = add(f_1, f_2)`.
    pub label: String,
    /// Sentence describing the step.
    pub description: String,
    /// Indices of the functions this step is built from, in operand order.
    pub inputs: Vec<usize>,
}

impl std::fmt::Display for ConstructionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.description)
    }
}

fn describe_symbol(symbol: Option<Symbol>) -> String {
    symbol.map_or_else(|| "?".to_string(), |s| s.to_string())
}

struct StepBuilder {
    counter: usize,
    steps: Vec<ConstructionStep>,
}

impl StepBuilder {
    fn new() -> Self {
        Self {
            counter: FIRST_STEP_INDEX,
            steps: Vec::new(),
        }
    }

    fn emit(
        &mut self,
        kind: StepKind,
        label: impl FnOnce(usize) -> String,
        description: String,
        inputs: Vec<usize>,
    ) -> usize {
        let index = self.counter;
        let step = ConstructionStep {
            index,
            kind,
            label: label(index),
            description,
            inputs,
        };
        trace!("Emitted step {step}");
        self.steps.push(step);
        self.counter += 1;
        index
    }

    /// Emit the combining step of `node`, whose children's indices are on top of `built`.
    fn finish(&mut self, node: &Node, built: &mut Vec<usize>) {
        let mut operand = || built.pop().unwrap_or(FIRST_STEP_INDEX);
        let index = match node {
            Node::Atom(Some(Symbol::Zero)) => self.emit(
                StepKind::Basic,
                |k| format!("f_{k} = Z"),
                "Zero function: Z(x) = 0".to_string(),
                Vec::new(),
            ),
            Node::Atom(symbol) => self.emit(
                StepKind::Basic,
                |k| format!("f_{k} = I"),
                format!(
                    "Identity/projection function for {}: I(x) = x",
                    describe_symbol(*symbol)
                ),
                Vec::new(),
            ),
            Node::Successor(_) => {
                let inner = operand();
                self.emit(
                    StepKind::Composition,
                    |k| format!("f_{k} = S(f_{inner})"),
                    format!("Composition: successor applied to f_{inner}"),
                    vec![inner],
                )
            }
            Node::Unary { .. } => {
                let inner = operand();
                self.emit(
                    StepKind::Composition,
                    |k| format!("f_{k} = not(f_{inner})"),
                    format!("Composition: logical NOT of f_{inner}"),
                    vec![inner],
                )
            }
            Node::Binary { operator, .. } => {
                let r = operand();
                let l = operand();
                self.emit(
                    StepKind::Composition,
                    |k| format!("f_{k} = {}(f_{l}, f_{r})", operator.name()),
                    format!("Composition: {} of f_{l} and f_{r}", operator.describe()),
                    vec![l, r],
                )
            }
            Node::Quantifier { kind, variable, .. } => {
                let inner = operand();
                let variable = describe_symbol(*variable);
                self.emit(
                    StepKind::Minimization,
                    |k| format!("f_{k} = μ{variable}.f_{inner}"),
                    format!(
                        "Minimization: {} quantifier over {variable} applied to f_{inner}",
                        kind.adjective()
                    ),
                    vec![inner],
                )
            }
        };
        built.push(index);
    }

    /// Emit the steps of the tree under `root`, children before parents.
    ///
    /// Walks with an explicit stack so the nesting depth is not bounded by the call stack.
    fn visit(&mut self, root: &Node) {
        enum Visit<'n> {
            Enter(&'n Node),
            Finish(&'n Node),
        }

        let mut pending = vec![Visit::Enter(root)];
        let mut built: Vec<usize> = Vec::new();

        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Enter(node) => {
                    pending.push(Visit::Finish(node));
                    // Pushed right to left so the left operand is built first.
                    match node {
                        Node::Atom(_) => {}
                        Node::Successor(operand) | Node::Unary { operand, .. } => {
                            pending.push(Visit::Enter(operand));
                        }
                        Node::Binary { left, right, .. } => {
                            pending.push(Visit::Enter(right));
                            pending.push(Visit::Enter(left));
                        }
                        Node::Quantifier { body, .. } => pending.push(Visit::Enter(body)),
                    }
                }
                Visit::Finish(node) => self.finish(node, &mut built),
            }
        }
    }
}

/// Build the ordered list of construction steps for `root`.
///
/// Example
/// ```
/// use hygodel::parser::parse_formula;
/// use hygodel::steps::{build_steps, StepKind};
/// let steps = build_steps(&parse_formula("Sx"));
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps[0].kind, StepKind::Basic);
/// assert_eq!(steps[1].label, "f_2 = S(f_1)");
/// ```
pub fn build_steps(root: &Node) -> Vec<ConstructionStep> {
    let mut builder = StepBuilder::new();
    builder.visit(root);
    debug!("Built {} construction steps", builder.steps.len());
    builder.steps
}
