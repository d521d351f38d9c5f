/*!
Searches for a lowest-cost world of the knowledge base in a context.

# Overview

[search](crate::procedures::search) casts MaxWalkSAT over the clauses of the knowledge base, with the cost of a world the sum of the effective weights of the formulas the world leaves unsatisfied.

Each move either repairs a drawn unsatisfied formula with the cheapest flips available, or flips some flippable atom at random, with the mix set by [greedy_bias](crate::config::Config::greedy_bias).
The walk keeps a snapshot of the best world seen, revised on strict improvement, and never fails for want of convergence: on any exit the best world stands, with hard formulas the world violates noted in the log.

Abstracting the bookkeeping, the walk is:

```rust,ignore
'walk_loop: for _ in 0..step_limit {
    if self.ledger.unsat_clauses().is_empty() {
        report = Report::Satisfied;
        break 'walk_loop;
    }

    match self.rng.random_bool(self.config.greedy_bias.value) {
        true => self.greedy_step(),
        false => self.random_step(),
    }

    // Snapshot the world, on strict improvement.
}
```

A walk concludes [Satisfied](crate::reports::Report::Satisfied) only with every clause of every active formula satisfied, so a conclusion of satisfaction is exact while any other report bounds the knowledge base from above by the best world.

# Example

```rust
# use marten_mln::config::Config;
# use marten_mln::context::Context;
# use marten_mln::reports::Report;
# use marten_mln::structures::formula::{Formula, WeightedFormula};
let mut the_context = Context::from_config(Config::default());

let a = the_context.fresh_atom("a", &[]).unwrap();
let b = the_context.fresh_atom("b", &[]).unwrap();

let exclusion = Formula::not(Formula::and(vec![Formula::atom(a), Formula::atom(b)]));
assert!(the_context.add_formula(WeightedFormula::hard(exclusion)).is_ok());
assert!(the_context.add_formula(WeightedFormula::soft(Formula::atom(a), 1.0)).is_ok());

assert_eq!(the_context.search(), Ok(Report::Satisfied));
assert_eq!(the_context.hard_violation_count(the_context.best_world()), 0);
```
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets,
    reports::Report,
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Searches for a lowest-cost world, from a fresh seed world.
    ///
    /// The best world found is kept with its cost, however the walk concludes.
    pub fn search(&mut self) -> Result<Report, ErrorKind> {
        self.initialize()?;

        let report = self.walk(self.config.step_limit.value, true);

        let violations = self.hard_violation_count(&self.best_world);
        if violations != 0 {
            log::warn!(target: targets::SEARCH, "The best world violates {violations} hard formulas");
        }

        self.state = ContextState::Concluded;
        Ok(report)
    }

    /// Walks from the current world for at most the given count of moves, satisfied or otherwise.
    ///
    /// With `track_best` the lowest-cost world seen is kept, snapshot on strict improvement.
    pub(crate) fn walk(&mut self, step_limit: usize, track_best: bool) -> Report {
        let total_time = std::time::Instant::now();
        let time_limit = self.config.time_limit.value;

        let mut report = Report::StepLimit;

        'walk_loop: for _ in 0..step_limit {
            if self.ledger.unsat_clauses().is_empty() {
                report = Report::Satisfied;
                break 'walk_loop;
            }

            self.counters.time = total_time.elapsed();
            if !time_limit.is_zero() && self.counters.time > time_limit {
                report = Report::TimeLimit;
                break 'walk_loop;
            }

            if self.check_callback_terminate() {
                report = Report::Terminated;
                break 'walk_loop;
            }

            match self.rng.random_bool(self.config.greedy_bias.value) {
                true => self.greedy_step(),
                false => self.random_step(),
            }
            self.counters.total_moves += 1;

            if track_best {
                match self.ledger.uns_sum() < self.best_uns_sum {
                    true => {
                        self.best_uns_sum = self.ledger.uns_sum();
                        self.best_world = self.ledger.world().clone();
                        self.counters.best_move = self.counters.total_moves;
                        self.counters.stall = 0;
                    }
                    false => self.counters.stall += 1,
                }

                let interval = self.config.progress_interval.value;
                if interval != 0 && self.counters.total_moves % interval == 0 {
                    log::info!(target: targets::SEARCH, "Move {}: best sum {}", self.counters.total_moves, self.best_uns_sum);
                    self.make_callback_progress(self.counters.total_moves, self.best_uns_sum);
                }
            }
        }

        // The final move may have satisfied the last unsatisfied clause.
        if report == Report::StepLimit && self.ledger.unsat_clauses().is_empty() {
            report = Report::Satisfied;
        }

        self.counters.time = total_time.elapsed();
        log::debug!(target: targets::SEARCH, "Walked {} moves to {report}", self.counters.total_moves);

        report
    }
}
