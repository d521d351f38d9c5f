/*!
Methods for estimating the cost of a move before making it.

# Overview

The delta of a move is an estimate of the change the move would make to the unsatisfied weight sum, with negative deltas improvements.

Estimates are made by the [ledger](crate::db::ledger::Ledger::flip_delta) under the configured [cost method](crate::config::CostMethod):

- Per clause, a flip charges each clause it would unsatisfy the clause's share of the formula's effective weight, and credits likewise for each clause it would satisfy.
- Per formula, a flip charges the full effective weight of each formula touched, once, read from the side the formula is first met on.
- The hybrid method reads the per formula estimate, falling back to per clause when the estimate is exactly zero.

The delta of a pair flip is the sum of the deltas of the two flips, so any interaction between the pair within one clause is estimated twice.
*/

use crate::{context::GenericContext, procedures::moves::Move, structures::formula::Weight};

/// Methods related to estimating moves.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// An estimate of the change to the unsatisfied weight sum the given move would make.
    pub fn move_delta(&mut self, the_move: Move) -> Weight {
        let method = self.config.cost_method.value;
        match the_move {
            Move::Flip(atom) => self.ledger.flip_delta(atom, &self.clause_db, method),

            Move::PairFlip { down, up } => {
                let down_delta = self.ledger.flip_delta(down, &self.clause_db, method);
                let up_delta = self.ledger.flip_delta(up, &self.clause_db, method);
                down_delta + up_delta
            }
        }
    }
}
