/*!
Formulas, their weights, and conversion to conjunctive normal form.

A formula is a propositional formula over (registered) atoms, built from negation, conjunction, disjunction, implication, and equivalence.
A weighted formula pairs a formula with a finite weight and a hard flag.

# Weights

Weights are real-valued and of soft formulas only, as the effective weight of a hard formula is resolved against the knowledge base as a whole when a [ledger](crate::db::ledger) is rebuilt.

Weights derived from log probabilities may be obtained through [weight_from_probability], with the log of a zero probability clamped to [LOG_ZERO_WEIGHT] rather than negative infinity.

# Conjunctive normal form

Storage of a formula in the [clause database](crate::db::clause) is by way of the [cnf](Formula::cnf) expansion of the formula.
The expansion pushes negations to the literals and distributes disjunctions over conjunctions, and so may be exponential in the size of the formula.
Each resulting clause is canonicalized by sorting and deduplicating literals, and any clause containing complementary literals is a tautology and dropped.
*/

use crate::structures::{atom::Atom, clause::CClause, literal::CLiteral};

/// The representation of weights, and of sums over the same.
pub type Weight = f64;

/// The weight given to a formula whose weight derives from a probability of zero.
///
/// The natural log of [f64::MIN_POSITIVE], in place of the negative infinity obtained by taking the log of zero.
pub const LOG_ZERO_WEIGHT: Weight = -708.396_418_532_264_1;

/// The weight corresponding to the natural log of the given probability, clamped to [LOG_ZERO_WEIGHT].
pub fn weight_from_probability(probability: f64) -> Weight {
    if probability <= 0.0 {
        return LOG_ZERO_WEIGHT;
    }
    probability.ln().max(LOG_ZERO_WEIGHT)
}

/// A propositional formula over atoms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Formula {
    /// An atom.
    Atom(Atom),

    /// The negation of a formula.
    Not(Box<Formula>),

    /// The conjunction of a sequence of formulas, true when the sequence is empty.
    And(Vec<Formula>),

    /// The disjunction of a sequence of formulas, false when the sequence is empty.
    Or(Vec<Formula>),

    /// A material implication.
    Implies(Box<Formula>, Box<Formula>),

    /// A material equivalence.
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// The formula of a single atom.
    pub fn atom(atom: Atom) -> Self {
        Formula::Atom(atom)
    }

    /// The negation of the given formula.
    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    /// The conjunction of the given formulas.
    pub fn and(formulas: Vec<Formula>) -> Self {
        Formula::And(formulas)
    }

    /// The disjunction of the given formulas.
    pub fn or(formulas: Vec<Formula>) -> Self {
        Formula::Or(formulas)
    }

    /// The implication of the consequent by the antecedent.
    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implies(Box::new(antecedent), Box::new(consequent))
    }

    /// The equivalence of the given formulas.
    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// The conjunctive normal form of the formula, as a vector of canonical clauses.
    ///
    /// Tautological clauses are dropped, and so a formula equivalent to ⊤ expands to no clauses.
    /// A formula equivalent to ⊥ expands to a collection containing the empty clause.
    pub fn cnf(&self) -> Vec<CClause> {
        let expansion = self.clauses(false);

        let mut clauses = Vec::with_capacity(expansion.len());
        'clause_loop: for mut clause in expansion {
            clause.sort_unstable();
            clause.dedup();

            for pair in clause.windows(2) {
                if pair[0].atom() == pair[1].atom() {
                    continue 'clause_loop;
                }
            }

            clauses.push(clause);
        }
        clauses
    }

    /// Clauses whose conjunction is equivalent to the formula, or to the negation of the formula if `negated`.
    ///
    /// Clauses are built raw, with canonicalization deferred to [cnf](Formula::cnf).
    fn clauses(&self, negated: bool) -> Vec<CClause> {
        match self {
            Self::Atom(atom) => vec![vec![CLiteral::new(*atom, !negated)]],

            Self::Not(formula) => formula.clauses(!negated),

            Self::And(formulas) => match negated {
                false => formulas.iter().flat_map(|formula| formula.clauses(false)).collect(),
                true => distribute(formulas.iter().map(|formula| formula.clauses(true))),
            },

            Self::Or(formulas) => match negated {
                false => distribute(formulas.iter().map(|formula| formula.clauses(false))),
                true => formulas.iter().flat_map(|formula| formula.clauses(true)).collect(),
            },

            Self::Implies(antecedent, consequent) => match negated {
                false => distribute([antecedent.clauses(true), consequent.clauses(false)].into_iter()),
                true => {
                    let mut clauses = antecedent.clauses(false);
                    clauses.append(&mut consequent.clauses(true));
                    clauses
                }
            },

            Self::Iff(left, right) => match negated {
                false => {
                    let mut clauses = distribute([left.clauses(true), right.clauses(false)].into_iter());
                    clauses.append(&mut distribute([left.clauses(false), right.clauses(true)].into_iter()));
                    clauses
                }
                true => {
                    let mut clauses = distribute([left.clauses(false), right.clauses(false)].into_iter());
                    clauses.append(&mut distribute([left.clauses(true), right.clauses(true)].into_iter()));
                    clauses
                }
            },
        }
    }
}

/// The pairwise union of the given clause collections, the distribution of a disjunction over conjunctions.
fn distribute(parts: impl Iterator<Item = Vec<CClause>>) -> Vec<CClause> {
    let mut product: Vec<CClause> = vec![vec![]];
    for part in parts {
        let mut fresh = Vec::with_capacity(product.len() * part.len());
        for stem in &product {
            for tail in &part {
                let mut clause = stem.clone();
                clause.extend_from_slice(tail);
                fresh.push(clause);
            }
        }
        product = fresh;
    }
    product
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(atom) => write!(f, "{atom}"),
            Self::Not(formula) => write!(f, "!{formula}"),
            Self::And(formulas) => {
                let parts: Vec<String> = formulas.iter().map(|formula| formula.to_string()).collect();
                write!(f, "({})", parts.join(" ^ "))
            }
            Self::Or(formulas) => {
                let parts: Vec<String> = formulas.iter().map(|formula| formula.to_string()).collect();
                write!(f, "({})", parts.join(" v "))
            }
            Self::Implies(antecedent, consequent) => write!(f, "({antecedent} => {consequent})"),
            Self::Iff(left, right) => write!(f, "({left} <=> {right})"),
        }
    }
}

/// A formula paired with a weight and a hard flag.
#[derive(Clone, Debug)]
pub struct WeightedFormula {
    /// The formula.
    pub formula: Formula,

    /// The weight of the formula, ignored when the formula is hard.
    pub weight: Weight,

    /// Whether the formula is a hard constraint.
    pub hard: bool,
}

impl WeightedFormula {
    /// A soft formula with the given weight.
    pub fn soft(formula: Formula, weight: Weight) -> Self {
        WeightedFormula {
            formula,
            weight,
            hard: false,
        }
    }

    /// A hard formula.
    pub fn hard(formula: Formula) -> Self {
        WeightedFormula {
            formula,
            weight: 0.0,
            hard: true,
        }
    }
}

impl std::fmt::Display for WeightedFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.hard {
            true => write!(f, "{} (hard)", self.formula),
            false => write!(f, "{} ({})", self.formula, self.weight),
        }
    }
}

#[cfg(test)]
mod cnf_tests {
    use super::*;

    #[test]
    fn disjunction() {
        let formula = Formula::or(vec![Formula::atom(0), Formula::atom(1)]);
        let cnf = formula.cnf();
        assert_eq!(cnf, vec![vec![CLiteral::new(0, true), CLiteral::new(1, true)]]);
    }

    #[test]
    fn negated_conjunction() {
        let formula = Formula::not(Formula::and(vec![Formula::atom(0), Formula::atom(1)]));
        let cnf = formula.cnf();
        assert_eq!(cnf, vec![vec![CLiteral::new(0, false), CLiteral::new(1, false)]]);
    }

    #[test]
    fn implication() {
        let formula = Formula::implies(Formula::atom(0), Formula::atom(1));
        let cnf = formula.cnf();
        assert_eq!(cnf, vec![vec![CLiteral::new(0, false), CLiteral::new(1, true)]]);
    }

    #[test]
    fn equivalence_is_two_clauses() {
        let formula = Formula::iff(Formula::atom(0), Formula::atom(1));
        let cnf = formula.cnf();
        assert_eq!(cnf.len(), 2);
        assert!(cnf.contains(&vec![CLiteral::new(0, false), CLiteral::new(1, true)]));
        assert!(cnf.contains(&vec![CLiteral::new(0, true), CLiteral::new(1, false)]));
    }

    #[test]
    fn distribution_over_conjunction() {
        let formula = Formula::or(vec![
            Formula::atom(0),
            Formula::and(vec![Formula::atom(1), Formula::atom(2)]),
        ]);
        let cnf = formula.cnf();
        assert_eq!(cnf.len(), 2);
        assert!(cnf.contains(&vec![CLiteral::new(0, true), CLiteral::new(1, true)]));
        assert!(cnf.contains(&vec![CLiteral::new(0, true), CLiteral::new(2, true)]));
    }

    #[test]
    fn tautologies_are_dropped() {
        let formula = Formula::or(vec![Formula::atom(0), Formula::not(Formula::atom(0))]);
        assert!(formula.cnf().is_empty());

        let formula = Formula::iff(Formula::atom(0), Formula::atom(0));
        assert!(formula.cnf().is_empty());
    }

    #[test]
    fn duplicate_literals_merge() {
        let formula = Formula::or(vec![Formula::atom(0), Formula::atom(0), Formula::atom(1)]);
        let cnf = formula.cnf();
        assert_eq!(cnf, vec![vec![CLiteral::new(0, true), CLiteral::new(1, true)]]);
    }

    #[test]
    fn empty_disjunction_is_the_empty_clause() {
        let formula = Formula::or(vec![]);
        assert_eq!(formula.cnf(), vec![Vec::<CLiteral>::new()]);
    }

    #[test]
    fn empty_conjunction_is_no_clauses() {
        let formula = Formula::and(vec![]);
        assert!(formula.cnf().is_empty());
    }

    #[test]
    fn negated_equivalence() {
        let formula = Formula::not(Formula::iff(Formula::atom(0), Formula::atom(1)));
        let cnf = formula.cnf();
        assert_eq!(cnf.len(), 2);
        assert!(cnf.contains(&vec![CLiteral::new(0, true), CLiteral::new(1, true)]));
        assert!(cnf.contains(&vec![CLiteral::new(0, false), CLiteral::new(1, false)]));
    }

    #[test]
    fn zero_probability_weight_is_clamped() {
        assert_eq!(weight_from_probability(0.0), LOG_ZERO_WEIGHT);
        assert_eq!(weight_from_probability(1.0), 0.0);
        assert!(weight_from_probability(0.5) < 0.0);
        assert!(weight_from_probability(0.5) > LOG_ZERO_WEIGHT);
    }
}
