/*!
A ledger of the run-mutable state of a search: the world, the satisfaction indices, and the running unsatisfied weight.

# Indices

Alongside the world, the ledger maintains four indices against the (frozen) clause database:

- The unsatisfied set, of clauses with no true literal.
- The bottleneck index, from each atom to the clauses for which the atom is the sole true literal.
- The per-clause true atom set, of the atoms whose literal in the clause is true.
- The per-formula satisfied set, of the clauses of the formula with some true literal.
  A formula is satisfied exactly when its satisfied set is its full clause set.

And, a running sum of the effective weights of all unsatisfied active formulas, revised as flips are made.

# Flips

[flip](Ledger::flip) is the single mutating primitive of a search.
A flip touches the clauses of the flipped atom's occurrence lists and no others, so the cost of a flip is proportional to the degree of the atom rather than the size of the knowledge base.
A full rescan happens only in [rebuild](Ledger::rebuild).

Membership of the unsatisfied, bottleneck, and satisfied indices is tracked with a position per clause, so removal is a swap with the last element and a fixup of the swapped position.

# Activity

Each formula is active or inactive, with inactive formulas invisible to the indices, the sum, and flips.
A [rebuild](Ledger::rebuild) honours the current activity, and sampling uses this to solve a drawn subset of the knowledge base without any copy of the same.

# Sums

The running sum is revised by adding and subtracting effective weights, so agreement with a from-scratch recomputation is up to float associativity.
Weights exactly representable in floating point are tracked exactly.
*/

use crate::{
    config::CostMethod,
    db::{ClauseIndex, FormulaIndex, clause::ClauseDB},
    misc::log::targets,
    structures::{
        atom::Atom,
        clause::Clause,
        formula::Weight,
        world::World,
    },
};

/// The sentinel for a clause without a position in an index.
const NO_POSITION: u32 = u32::MAX;

/// Run-mutable search state over a clause database.
pub struct Ledger {
    /// The current world.
    world: World,

    /// The atoms whose literal in the clause is true, per clause.
    true_atoms: Vec<Vec<Atom>>,

    /// The clauses with no true literal.
    unsat: Vec<ClauseIndex>,

    /// The position of each clause in [unsat](Ledger::unsat), or [NO_POSITION].
    unsat_positions: Vec<u32>,

    /// The clauses for which the atom is the sole true literal, per atom.
    bottlenecks: Vec<Vec<ClauseIndex>>,

    /// The position of each clause in its bottleneck list, or [NO_POSITION].
    bottleneck_positions: Vec<u32>,

    /// The satisfied clauses of each formula.
    satisfied: Vec<Vec<ClauseIndex>>,

    /// The position of each clause in its formula's satisfied list, or [NO_POSITION].
    satisfied_positions: Vec<u32>,

    /// Whether each formula is active.
    active: Vec<bool>,

    /// The sum of the effective weights of all unsatisfied active formulas.
    uns_sum: Weight,

    /// The effective weight of hard formulas, resolved at the last rebuild.
    hard_weight: Weight,

    /// The stamp of the last evaluation to touch each formula.
    formula_stamps: Vec<u64>,

    /// The stamp of the last batch to touch each atom.
    atom_stamps: Vec<u64>,

    /// The most recent stamp.
    stamp: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            world: World::new(0),
            true_atoms: Vec::default(),
            unsat: Vec::default(),
            unsat_positions: Vec::default(),
            bottlenecks: Vec::default(),
            bottleneck_positions: Vec::default(),
            satisfied: Vec::default(),
            satisfied_positions: Vec::default(),
            active: Vec::default(),
            uns_sum: 0.0,
            hard_weight: 0.0,
            formula_stamps: Vec::default(),
            atom_stamps: Vec::default(),
            stamp: 0,
        }
    }

    /// The current world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Replaces the current world.
    ///
    /// The indices are stale until the next [rebuild](Ledger::rebuild).
    pub(crate) fn install_world(&mut self, world: World) {
        self.world = world;
    }

    /// The sum of the effective weights of all unsatisfied active formulas.
    pub fn uns_sum(&self) -> Weight {
        self.uns_sum
    }

    /// The effective weight of hard formulas, resolved at the last rebuild.
    pub fn hard_weight(&self) -> Weight {
        self.hard_weight
    }

    /// The clauses with no true literal, in no particular order.
    pub fn unsat_clauses(&self) -> &[ClauseIndex] {
        &self.unsat
    }

    /// Whether the given clause has no true literal.
    pub fn is_unsat(&self, clause: ClauseIndex) -> bool {
        self.unsat_positions[clause as usize] != NO_POSITION
    }

    /// The atoms whose literal in the given clause is true.
    pub fn true_atoms_of(&self, clause: ClauseIndex) -> &[Atom] {
        &self.true_atoms[clause as usize]
    }

    /// The clauses for which the given atom is the sole true literal.
    pub fn bottlenecks_of(&self, atom: Atom) -> &[ClauseIndex] {
        &self.bottlenecks[atom as usize]
    }

    /// The satisfied clauses of the given formula.
    pub fn satisfied_of(&self, formula: FormulaIndex) -> &[ClauseIndex] {
        &self.satisfied[formula as usize]
    }

    /// Whether every clause of the given formula is satisfied.
    pub fn formula_satisfied(&self, formula: FormulaIndex, clause_db: &ClauseDB) -> bool {
        self.satisfied[formula as usize].len() == clause_db.formula(formula).clause_count()
    }

    /// Whether the given formula is active.
    pub fn formula_is_active(&self, formula: FormulaIndex) -> bool {
        self.active[formula as usize]
    }

    /// The activity of each formula, indexed by formula.
    pub fn active_mask(&self) -> &[bool] {
        &self.active
    }

    /// Activates every formula.
    pub(crate) fn activate_all(&mut self) {
        self.active.fill(true);
    }

    /// Sets the activity of the given formula.
    pub(crate) fn set_active(&mut self, formula: FormulaIndex, active: bool) {
        self.active[formula as usize] = active;
    }

    /// Resizes the ledger against the given clause database and count of atoms.
    ///
    /// Fresh formulas are active, and the indices are stale until the next [rebuild](Ledger::rebuild).
    pub(crate) fn resize(&mut self, clause_db: &ClauseDB, atom_count: usize) {
        let clause_count = clause_db.clause_count();
        let formula_count = clause_db.formula_count();

        self.world.resize(atom_count);
        self.true_atoms.resize(clause_count, Vec::default());
        self.unsat_positions.resize(clause_count, NO_POSITION);
        self.bottlenecks.resize(atom_count, Vec::default());
        self.bottleneck_positions.resize(clause_count, NO_POSITION);
        self.satisfied.resize(formula_count, Vec::default());
        self.satisfied_positions.resize(clause_count, NO_POSITION);
        self.active.resize(formula_count, true);
        self.formula_stamps.resize(formula_count, 0);
        self.atom_stamps.resize(atom_count, 0);
    }

    /// Rebuilds every index and the running sum by a single scan of the active formulas, against the current world.
    pub fn rebuild(&mut self, clause_db: &ClauseDB) {
        self.hard_weight = clause_db.hard_weight();
        self.uns_sum = 0.0;

        self.unsat.clear();
        self.unsat_positions.fill(NO_POSITION);
        self.bottleneck_positions.fill(NO_POSITION);
        self.satisfied_positions.fill(NO_POSITION);
        for list in &mut self.bottlenecks {
            list.clear();
        }
        for list in &mut self.satisfied {
            list.clear();
        }
        for list in &mut self.true_atoms {
            list.clear();
        }

        for index in 0..clause_db.formula_count() {
            let formula = index as FormulaIndex;
            if !self.active[index] {
                continue;
            }

            let mut complete = true;
            for position in 0..clause_db.formula(formula).clause_count() {
                let clause = clause_db.formula(formula).clauses()[position];

                for literal in clause_db.clause(clause).clause().literals() {
                    if self.world.value_of(literal.atom()) == literal.polarity() {
                        self.true_atoms[clause as usize].push(literal.atom());
                    }
                }

                match self.true_atoms[clause as usize].len() {
                    0 => {
                        self.unsat_insert(clause);
                        complete = false;
                    }
                    count => {
                        self.satisfied_insert(formula, clause);
                        if count == 1 {
                            let sole = self.true_atoms[clause as usize][0];
                            self.bottleneck_insert(sole, clause);
                        }
                    }
                }
            }

            if !complete {
                let weight = self.formula_weight(formula, clause_db);
                self.uns_sum += weight;
            }
        }

        log::debug!(target: targets::LEDGER, "Rebuilt: {} unsatisfied clauses, sum {}", self.unsat.len(), self.uns_sum);
    }

    /// The effective weight of the given formula, the hard weight for hard formulas.
    pub fn formula_weight(&self, formula: FormulaIndex, clause_db: &ClauseDB) -> Weight {
        let db_formula = clause_db.formula(formula);
        match db_formula.is_hard() {
            true => self.hard_weight,
            false => db_formula.weight(),
        }
    }

    /// Inverts the value of the given atom and revises every index and the running sum.
    ///
    /// The clauses touched are exactly those of the atom's occurrence lists, skipping clauses of inactive formulas.
    ///
    /// Evidence atoms must not be flipped, an obligation on [move generation](crate::procedures::moves) rather than the ledger.
    pub fn flip(&mut self, atom: Atom, clause_db: &ClauseDB) {
        let previous = self.world.value_of(atom);
        self.world.set_value(atom, !previous);

        // Clauses in which the literal on the atom was true.
        for &clause in clause_db.occurrences(atom, previous) {
            let formula = clause_db.clause(clause).formula();
            if !self.active[formula as usize] {
                continue;
            }

            self.true_atom_remove(clause, atom);
            match self.true_atoms[clause as usize].len() {
                0 => {
                    self.bottleneck_remove(atom, clause);
                    let was_complete = self.formula_satisfied(formula, clause_db);
                    self.satisfied_remove(formula, clause);
                    self.unsat_insert(clause);
                    if was_complete {
                        let weight = self.formula_weight(formula, clause_db);
                        self.uns_sum += weight;
                    }
                }
                1 => {
                    let sole = self.true_atoms[clause as usize][0];
                    self.bottleneck_insert(sole, clause);
                }
                _ => {}
            }
        }

        // Clauses in which the literal on the atom was false.
        for &clause in clause_db.occurrences(atom, !previous) {
            let formula = clause_db.clause(clause).formula();
            if !self.active[formula as usize] {
                continue;
            }

            match self.true_atoms[clause as usize].len() {
                0 => {
                    self.unsat_remove(clause);
                    self.bottleneck_insert(atom, clause);
                    self.satisfied_insert(formula, clause);
                    if self.formula_satisfied(formula, clause_db) {
                        let weight = self.formula_weight(formula, clause_db);
                        self.uns_sum -= weight;
                    }
                }
                1 => {
                    let sole = self.true_atoms[clause as usize][0];
                    self.bottleneck_remove(sole, clause);
                }
                _ => {}
            }
            self.true_atom_insert(clause, atom);
        }
    }

    /// An estimate by the given method of the change to the running sum of flipping the given atom, without the flip.
    pub fn flip_delta(&mut self, atom: Atom, clause_db: &ClauseDB, method: CostMethod) -> Weight {
        match method {
            CostMethod::PerClause => self.delta_by(atom, clause_db, false),
            CostMethod::PerFormula => self.delta_by(atom, clause_db, true),
            CostMethod::Hybrid => {
                let delta = self.delta_by(atom, clause_db, true);
                match delta == 0.0 {
                    true => self.delta_by(atom, clause_db, false),
                    false => delta,
                }
            }
        }
    }

    /// The flip delta of the given atom, counting whole formula weights once if `by_formula` and clause shares otherwise.
    ///
    /// Clauses the flip would unsatisfy are exactly those bottlenecked by the atom, and clauses the flip would newly satisfy are the unsatisfied occurrences of the opposing polarity, so one pass over the atom's occurrences suffices.
    fn delta_by(&mut self, atom: Atom, clause_db: &ClauseDB, by_formula: bool) -> Weight {
        self.stamp += 1;
        let value = self.world.value_of(atom);
        let mut delta = 0.0;

        for position in 0..self.bottlenecks[atom as usize].len() {
            let clause = self.bottlenecks[atom as usize][position];
            let formula = clause_db.clause(clause).formula();
            match by_formula {
                true => {
                    if self.formula_stamps[formula as usize] != self.stamp {
                        self.formula_stamps[formula as usize] = self.stamp;
                        delta += self.formula_weight(formula, clause_db);
                    }
                }
                false => delta += self.clause_share(clause, clause_db),
            }
        }

        for &clause in clause_db.occurrences(atom, !value) {
            let formula = clause_db.clause(clause).formula();
            if !self.active[formula as usize] || !self.true_atoms[clause as usize].is_empty() {
                continue;
            }
            match by_formula {
                true => {
                    if self.formula_stamps[formula as usize] != self.stamp {
                        self.formula_stamps[formula as usize] = self.stamp;
                        delta -= self.formula_weight(formula, clause_db);
                    }
                }
                false => delta -= self.clause_share(clause, clause_db),
            }
        }

        delta
    }

    /// The given clause's share of its formula's effective weight, the weight split evenly over the formula's clauses.
    fn clause_share(&self, clause: ClauseIndex, clause_db: &ClauseDB) -> Weight {
        let formula = clause_db.clause(clause).formula();
        let weight = self.formula_weight(formula, clause_db);
        weight / clause_db.formula(formula).clause_count() as Weight
    }

    /// A stamp fresh to every formula and atom.
    pub(crate) fn fresh_stamp(&mut self) -> u64 {
        self.stamp += 1;
        self.stamp
    }

    /// Stamps the given atom, true if the atom did not already carry the stamp.
    pub(crate) fn stamp_atom(&mut self, atom: Atom, stamp: u64) -> bool {
        match self.atom_stamps[atom as usize] == stamp {
            true => false,
            false => {
                self.atom_stamps[atom as usize] = stamp;
                true
            }
        }
    }

    fn unsat_insert(&mut self, clause: ClauseIndex) {
        self.unsat_positions[clause as usize] = self.unsat.len() as u32;
        self.unsat.push(clause);
    }

    fn unsat_remove(&mut self, clause: ClauseIndex) {
        let position = self.unsat_positions[clause as usize] as usize;
        self.unsat_positions[clause as usize] = NO_POSITION;
        self.unsat.swap_remove(position);
        if let Some(&relocated) = self.unsat.get(position) {
            self.unsat_positions[relocated as usize] = position as u32;
        }
    }

    fn satisfied_insert(&mut self, formula: FormulaIndex, clause: ClauseIndex) {
        let list = &mut self.satisfied[formula as usize];
        self.satisfied_positions[clause as usize] = list.len() as u32;
        list.push(clause);
    }

    fn satisfied_remove(&mut self, formula: FormulaIndex, clause: ClauseIndex) {
        let position = self.satisfied_positions[clause as usize] as usize;
        self.satisfied_positions[clause as usize] = NO_POSITION;
        let list = &mut self.satisfied[formula as usize];
        list.swap_remove(position);
        if let Some(&relocated) = list.get(position) {
            self.satisfied_positions[relocated as usize] = position as u32;
        }
    }

    fn bottleneck_insert(&mut self, atom: Atom, clause: ClauseIndex) {
        let list = &mut self.bottlenecks[atom as usize];
        self.bottleneck_positions[clause as usize] = list.len() as u32;
        list.push(clause);
    }

    fn bottleneck_remove(&mut self, atom: Atom, clause: ClauseIndex) {
        let position = self.bottleneck_positions[clause as usize] as usize;
        self.bottleneck_positions[clause as usize] = NO_POSITION;
        let list = &mut self.bottlenecks[atom as usize];
        list.swap_remove(position);
        if let Some(&relocated) = list.get(position) {
            self.bottleneck_positions[relocated as usize] = position as u32;
        }
    }

    fn true_atom_insert(&mut self, clause: ClauseIndex, atom: Atom) {
        self.true_atoms[clause as usize].push(atom);
    }

    fn true_atom_remove(&mut self, clause: ClauseIndex, atom: Atom) {
        let list = &mut self.true_atoms[clause as usize];
        if let Some(position) = list.iter().position(|member| *member == atom) {
            list.swap_remove(position);
        }
    }
}
