//! Methods for applying a move to the context.
//!
//! The work of a flip is done by the [ledger](crate::db::ledger::Ledger::flip), with the methods here handling blocks and counters.

use crate::{context::GenericContext, misc::log::targets, procedures::moves::Move, structures::atom::Atom};

/// Methods related to applying moves.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Applies the given move, inverting one atom or a blocked pair.
    ///
    /// The move is applied as given, with any check of flippability made during [move selection](crate::procedures::moves).
    pub fn apply_move(&mut self, the_move: Move) {
        match the_move {
            Move::Flip(atom) => self.flip(atom),

            Move::PairFlip { down, up } => {
                self.flip(down);
                self.flip(up);
            }
        }
    }

    /// Inverts the value of the given atom in the current world.
    pub fn flip(&mut self, atom: Atom) {
        log::trace!(target: targets::FLIP, "Flip {atom}");
        self.ledger.flip(atom, &self.clause_db);
        self.counters.total_flips += 1;
    }
}
