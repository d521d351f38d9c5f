/*!
Clauses and formulas, as stored in the clause database.
*/

use crate::{
    db::{ClauseIndex, FormulaIndex},
    structures::{
        clause::CClause,
        formula::{Weight, WeightedFormula},
    },
};

/// A clause stored in the clause database, carrying its share of the owning formula's weight.
#[allow(non_camel_case_types)]
#[derive(Clone, Debug)]
pub struct dbClause {
    /// The clause.
    clause: CClause,

    /// The stated weight of the owning formula, split evenly over the formula's clauses.
    weight: Weight,

    /// The formula the clause derives from.
    formula: FormulaIndex,
}

impl dbClause {
    pub(super) fn new(clause: CClause, weight: Weight, formula: FormulaIndex) -> Self {
        dbClause {
            clause,
            weight,
            formula,
        }
    }

    /// The clause.
    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// The clause's share of the owning formula's stated weight.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The formula the clause derives from.
    pub fn formula(&self) -> FormulaIndex {
        self.formula
    }
}

/// A formula stored in the clause database, together with the exact set of clauses it expanded to.
#[allow(non_camel_case_types)]
#[derive(Clone, Debug)]
pub struct dbFormula {
    /// The formula as given, after any weight positivization.
    source: WeightedFormula,

    /// The clauses of the CNF expansion of the formula.
    clauses: Vec<ClauseIndex>,
}

impl dbFormula {
    pub(super) fn new(source: WeightedFormula, clauses: Vec<ClauseIndex>) -> Self {
        dbFormula { source, clauses }
    }

    /// The formula as given, after any weight positivization.
    pub fn source(&self) -> &WeightedFormula {
        &self.source
    }

    /// The stated weight of the formula.
    pub fn weight(&self) -> Weight {
        self.source.weight
    }

    /// Whether the formula is a hard constraint.
    pub fn is_hard(&self) -> bool {
        self.source.hard
    }

    /// The clauses of the CNF expansion of the formula.
    pub fn clauses(&self) -> &[ClauseIndex] {
        &self.clauses
    }

    /// The count of clauses of the CNF expansion of the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}
