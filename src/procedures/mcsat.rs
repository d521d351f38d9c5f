/*!
Samples worlds of the knowledge base in a context, for marginal estimates.

# Overview

[sample](crate::procedures::mcsat) casts MC-SAT, a slice sampler whose auxiliary draw is a subset of the knowledge base.

Each sample draws a slice and satisfies it:

- Hard formulas are in every slice.
- A soft formula of weight *w* is in the slice when *u*·*e*^*w*, for *u* drawn uniform from (0, 1], exceeds one.
- A sub-search is made with only the slice active, seeded from the previous world, and the world found is recorded as the sample.

The chain is bootstrapped by satisfying the hard formulas alone, recorded as the first sample.
So, a run of *n* samples records *n* + 1 worlds, and an estimate for an atom is the fraction of recorded worlds in which the atom held.

In contrast to a [search](crate::procedures::search), a sub-search which cannot satisfy its slice is an error, as any failure skews the chain.
Sub-searches walk with a budget of [mcsat_step_limit](crate::config::Config::mcsat_step_limit) moves, unless an [exact solver](ExactSolver) has been supplied.

# Example

```rust
# use marten_mln::config::Config;
# use marten_mln::context::Context;
# use marten_mln::structures::formula::{Formula, WeightedFormula};
let mut the_context = Context::from_config(Config::default());

let left = the_context.fresh_atom("Side", &["left"]).unwrap();
let right = the_context.fresh_atom("Side", &["right"]).unwrap();
assert!(the_context.set_block(vec![left, right]).is_ok());

let exclusion = Formula::not(Formula::atom(right));
assert!(the_context.add_formula(WeightedFormula::hard(exclusion)).is_ok());

assert!(the_context.sample(15).is_ok());

assert_eq!(the_context.marginals().sample_count(), 16);
assert_eq!(the_context.marginals().estimate(left), 1.0);
assert_eq!(the_context.marginals().estimate(right), 0.0);
```
*/

use crate::{
    context::{ContextState, GenericContext},
    db::{FormulaIndex, atom::AtomDB, clause::ClauseDB},
    misc::log::targets,
    reports::Report,
    structures::world::World,
    types::err::{ErrorKind, McSatError},
};

/// An exact alternative to walking for the sub-searches of a sampling run.
///
/// Supplied to a context with [set_exact_solver](GenericContext::set_exact_solver).
pub trait ExactSolver {
    /// A world satisfying every clause of each active formula, and none if there is no such world.
    ///
    /// The world returned is trusted to satisfy the active clauses and to respect evidence and blocks, though satisfaction of the clauses is checked.
    /// The seed world is the previous world of the chain, to extend or ignore.
    fn satisfy(
        &mut self,
        seed: &World,
        active: &[bool],
        atom_db: &AtomDB,
        clause_db: &ClauseDB,
    ) -> Option<World>;
}

/// Methods related to sampling.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Supplies an exact solver for the sub-searches of a sampling run, in place of walks.
    pub fn set_exact_solver(&mut self, solver: Box<dyn ExactSolver>) {
        self.exact_solver = Some(solver);
    }

    /// Draws the given count of samples, extending the chain of any previous run unless input has been made since.
    ///
    /// Bootstrapping a chain records a sample of its own, so a fresh run records one world more than asked.
    pub fn sample(&mut self, count: usize) -> Result<(), ErrorKind> {
        if self.state == ContextState::Search {
            return Err(ErrorKind::InvalidState);
        }

        let outcome = self.sample_run(count);
        self.state = ContextState::Concluded;
        outcome
    }

    fn sample_run(&mut self, count: usize) -> Result<(), ErrorKind> {
        if self.marginals.sample_count() == 0 || self.state != ContextState::Concluded {
            self.bootstrap()?;
        }

        for _ in 0..count {
            self.sample_once()?;
        }

        log::debug!(target: targets::MCSAT, "Chain extended by {count} samples to {}", self.marginals.sample_count());
        Ok(())
    }

    /// Satisfies the hard formulas alone, recording the world found as the first sample of a chain.
    fn bootstrap(&mut self) -> Result<(), ErrorKind> {
        self.initialize()?;
        self.marginals.resize(self.atom_db.count());
        self.marginals.reset();
        self.counters.sub_searches = 0;

        for index in 0..self.clause_db.formula_count() {
            let formula = index as FormulaIndex;
            let hard = self.clause_db.formula(formula).is_hard();
            self.ledger.set_active(formula, hard);
        }
        self.ledger.rebuild(&self.clause_db);

        match self.satisfy_active() {
            true => {
                self.marginals.record(self.ledger.world());
                log::debug!(target: targets::MCSAT, "Bootstrapped over {} hard formulas", self.ledger.active_mask().iter().filter(|active| **active).count());
                Ok(())
            }
            false => Err(McSatError::BootstrapFailed.into()),
        }
    }

    /// Draws a slice of the knowledge base and a world satisfying it, recording the world as a sample.
    fn sample_once(&mut self) -> Result<(), ErrorKind> {
        let index = self.marginals.sample_count();

        let mut active_count = 0;
        for formula_index in 0..self.clause_db.formula_count() {
            let formula = formula_index as FormulaIndex;
            let include = match self.clause_db.formula(formula).is_hard() {
                true => true,
                false => {
                    // u lies in (0, 1].
                    let u = 1.0 - self.rng.random::<f64>();
                    u * self.clause_db.formula(formula).weight().exp() > 1.0
                }
            };
            if include {
                active_count += 1;
            }
            self.ledger.set_active(formula, include);
        }
        log::trace!(target: targets::MCSAT, "Sample {index}: {active_count} of {} formulas active", self.clause_db.formula_count());

        // Seeded from the previous world, which the rebuild leaves untouched.
        self.ledger.rebuild(&self.clause_db);

        match self.satisfy_active() {
            true => {
                self.marginals.record(self.ledger.world());
                Ok(())
            }
            false => Err(McSatError::SubSolveFailed(index as usize).into()),
        }
    }

    /// Satisfies every clause of each active formula, by the exact solver if supplied and a walk otherwise.
    fn satisfy_active(&mut self) -> bool {
        self.counters.sub_searches += 1;

        if let Some(mut solver) = self.exact_solver.take() {
            let solved = solver.satisfy(
                self.ledger.world(),
                self.ledger.active_mask(),
                &self.atom_db,
                &self.clause_db,
            );
            self.exact_solver = Some(solver);

            return match solved {
                Some(world) => {
                    self.ledger.install_world(world);
                    self.ledger.rebuild(&self.clause_db);
                    self.ledger.unsat_clauses().is_empty()
                }
                None => false,
            };
        }

        let report = self.walk(self.config.mcsat_step_limit.value, false);
        report == Report::Satisfied
    }
}
