/*!
A database of weighted formulas in clausal form.

# Storage

A formula is stored via [store_formula](ClauseDB::store_formula) and fixed thereafter.
Storage expands the formula to [CNF](crate::structures::formula::Formula::cnf), with the expansion of *k* clauses giving each clause weight / *k*, so the weights of the clauses of a formula always sum to the stated weight of the formula.
A formula whose expansion is empty (a tautology) is stored with no clauses, and is satisfied on every world.

The database keeps the clause ↔ formula mapping in both directions.
Each stored clause records the formula it derives from, and each stored formula records the exact set of clauses it expanded to, as per-formula satisfaction accounting and whole-formula moves both require the set.

# Occurrences

For each atom the database records the clauses the atom occurs in, split by the polarity of the occurrence.
The occurrence lists are the backbone of the [flip](crate::db::ledger::Ledger::flip) contract: a flip touches the clauses of the flipped atom's occurrence lists and no others.

# Hard formulas

A hard formula's stated weight is ignored.
The effective weight of every hard formula is [hard_weight](ClauseDB::hard_weight), one more than the sum of the magnitudes of all soft weights, so a search never trades a hard constraint away for soft gain.
As the sum moves with each soft formula stored, effective weights are resolved when a [ledger](crate::db::ledger) is rebuilt, at which point the database is frozen.
*/

mod db_clause;
pub use db_clause::{dbClause, dbFormula};

use crate::{
    db::{ClauseIndex, FormulaIndex},
    misc::log::targets,
    structures::{
        atom::Atom,
        formula::{Formula, Weight, WeightedFormula},
    },
    types::err::ClauseDBError,
};

/// A database of weighted formulas in clausal form, with occurrence lists.
pub struct ClauseDB {
    /// All stored clauses, indexed by [ClauseIndex].
    clauses: Vec<dbClause>,

    /// All stored formulas, indexed by [FormulaIndex].
    formulas: Vec<dbFormula>,

    /// For each atom, the clauses in which the atom occurs positively.
    positive_occurrences: Vec<Vec<ClauseIndex>>,

    /// For each atom, the clauses in which the atom occurs negatively.
    negative_occurrences: Vec<Vec<ClauseIndex>>,

    /// The sum of the magnitudes of the weights of all stored soft formulas.
    soft_weight_sum: Weight,
}

impl Default for ClauseDB {
    fn default() -> Self {
        ClauseDB::new()
    }
}

impl ClauseDB {
    pub fn new() -> Self {
        ClauseDB {
            clauses: Vec::default(),
            formulas: Vec::default(),
            positive_occurrences: Vec::default(),
            negative_occurrences: Vec::default(),
            soft_weight_sum: 0.0,
        }
    }

    /// Stores the given formula, expanded to CNF, and returns its index.
    ///
    /// With `make_weight_positive`, a soft formula with a negative weight is stored as its negation with the weight negated, an equivalent positive soft preference.
    ///
    /// `atom_count` bounds the atoms which may appear in the formula, with any larger atom unknown.
    pub fn store_formula(
        &mut self,
        formula: WeightedFormula,
        make_weight_positive: bool,
        atom_count: usize,
    ) -> Result<FormulaIndex, ClauseDBError> {
        if !formula.weight.is_finite() {
            return Err(ClauseDBError::NonFiniteWeight);
        }

        let formula = match make_weight_positive && !formula.hard && formula.weight < 0.0 {
            true => WeightedFormula {
                formula: Formula::not(formula.formula),
                weight: -formula.weight,
                hard: formula.hard,
            },
            false => formula,
        };

        let expansion = formula.formula.cnf();

        for clause in &expansion {
            if clause.is_empty() {
                return Err(ClauseDBError::EmptyClause);
            }
            for literal in clause {
                if literal.atom() as usize >= atom_count {
                    return Err(ClauseDBError::UnknownAtom(literal.atom()));
                }
            }
        }

        if self.positive_occurrences.len() < atom_count {
            self.positive_occurrences.resize(atom_count, Vec::default());
            self.negative_occurrences.resize(atom_count, Vec::default());
        }

        let formula_index = self.formulas.len() as FormulaIndex;

        let share = match expansion.is_empty() {
            true => 0.0,
            false => formula.weight / expansion.len() as Weight,
        };

        let mut clause_indicies = Vec::with_capacity(expansion.len());
        for clause in expansion {
            let clause_index = self.clauses.len() as ClauseIndex;
            for literal in &clause {
                match literal.polarity() {
                    true => self.positive_occurrences[literal.atom() as usize].push(clause_index),
                    false => self.negative_occurrences[literal.atom() as usize].push(clause_index),
                }
            }
            self.clauses.push(dbClause::new(clause, share, formula_index));
            clause_indicies.push(clause_index);
        }

        if !formula.hard {
            self.soft_weight_sum += formula.weight.abs();
        }

        log::trace!(target: targets::CLAUSE_DB, "Stored formula {formula_index}: {formula} as {} clauses", clause_indicies.len());

        self.formulas.push(dbFormula::new(formula, clause_indicies));

        Ok(formula_index)
    }

    /// The count of stored clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The count of stored formulas.
    pub fn formula_count(&self) -> usize {
        self.formulas.len()
    }

    /// The stored clause at the given index.
    pub fn clause(&self, index: ClauseIndex) -> &dbClause {
        &self.clauses[index as usize]
    }

    /// The stored formula at the given index.
    pub fn formula(&self, index: FormulaIndex) -> &dbFormula {
        &self.formulas[index as usize]
    }

    /// An iterator over all stored clauses.
    pub fn clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.clauses.iter()
    }

    /// An iterator over all stored formulas.
    pub fn formulas(&self) -> impl Iterator<Item = &dbFormula> {
        self.formulas.iter()
    }

    /// The clauses in which the given atom occurs with the given polarity.
    ///
    /// Empty for any atom registered after the last formula was stored.
    pub fn occurrences(&self, atom: Atom, polarity: bool) -> &[ClauseIndex] {
        let lists = match polarity {
            true => &self.positive_occurrences,
            false => &self.negative_occurrences,
        };
        match lists.get(atom as usize) {
            Some(list) => list,
            None => &[],
        }
    }

    /// The count of clauses in which the given atom occurs, with either polarity.
    pub fn occurrence_count(&self, atom: Atom) -> usize {
        self.occurrences(atom, true).len() + self.occurrences(atom, false).len()
    }

    /// The sum of the magnitudes of the weights of all stored soft formulas.
    pub fn soft_weight_sum(&self) -> Weight {
        self.soft_weight_sum
    }

    /// The effective weight of every hard formula, one more than [soft_weight_sum](ClauseDB::soft_weight_sum).
    pub fn hard_weight(&self) -> Weight {
        1.0 + self.soft_weight_sum
    }
}
