/*!
Methods for choosing the next move of a walk.

# Overview

A move inverts the value of some atom, with blocked atoms moved in pairs to preserve the one-hot reading of a block.

Two selection procedures are used, mixed by [greedy_bias](crate::config::Config::greedy_bias):

- A [random step](crate::context::GenericContext::random_step) flips an atom drawn uniformly from the flippable atoms.
- A [greedy step](crate::context::GenericContext::greedy_step) draws an unsatisfied clause, takes the formula owning the clause, and repairs the formula clause by clause with the cheapest flips available, so long as each round of flips is an improvement.

# Blocks

A flip of a blocked atom is resolved to a pair:

- If the atom is the true member of its block, some other flippable member is drawn to take its place.
- Otherwise, the true member of the block goes down as the atom goes up.

Atoms of a block with an evidence-true member are not flippable, and the true member of any other block is free, so a resolved pair never moves evidence.

# Greedy rounds

The formula drawn for a greedy step may have several unsatisfied clauses, and a batch of one repair per such clause is collected and applied round by round.
A round is skipped when it offers no improvement, moves on atoms already moved this round are dropped, and the rounds stop once the formula is satisfied or the round count reaches the formula's clause count.
*/

use rand::seq::{IndexedRandom, IteratorRandom};

use crate::{
    context::GenericContext,
    db::ClauseIndex,
    misc::log::targets,
    structures::{atom::Atom, clause::Clause, formula::Weight},
};

/// A move of the walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Invert the value of the atom.
    Flip(Atom),

    /// Invert the values of two atoms of one block.
    PairFlip {
        /// The member to make false.
        down: Atom,

        /// The member to make true.
        up: Atom,
    },
}

/// Methods related to making moves.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The move which inverts the given atom, a pair if the atom is blocked.
    ///
    /// No move is resolved for a true member with no other member free to rise, nor for a blocked atom whose block has no true member, though any world examined by a search gives every block a true member.
    pub fn resolve_move(&self, atom: Atom, rng: &mut impl rand::Rng) -> Option<Move> {
        let Some(block) = self.atom_db.block_of(atom) else {
            return Some(Move::Flip(atom));
        };

        let the_block = self.atom_db.block(block);
        match self.ledger.world().value_of(atom) {
            true => {
                let up = the_block
                    .members()
                    .iter()
                    .copied()
                    .filter(|member| *member != atom && self.is_flippable(*member))
                    .choose(rng)?;
                Some(Move::PairFlip { down: atom, up })
            }
            false => {
                let down = the_block.true_member_on(self.ledger.world())?;
                Some(Move::PairFlip { down, up: atom })
            }
        }
    }

    /// A move on an atom drawn uniformly from the flippable atoms, and none if no atom is flippable.
    pub fn random_move(&mut self) -> Option<Move> {
        // Takes ownership of rng to satisfy the borrow checker.
        // Avoidable, at the cost of a less generic atom method.
        let mut rng = std::mem::take(&mut self.rng);
        let the_move = match self.flippable.as_slice().choose(&mut rng) {
            Some(&atom) => self.resolve_move(atom, &mut rng),
            None => None,
        };
        self.rng = rng;
        the_move
    }

    /// Makes a random move, if some atom is flippable.
    pub fn random_step(&mut self) {
        self.counters.random_moves += 1;
        if let Some(the_move) = self.random_move() {
            log::trace!(target: targets::SEARCH, "Random move {the_move:?}");
            self.apply_move(the_move);
        }
    }

    /// Draws an unsatisfied clause and repairs the formula owning the clause with rounds of cheapest flips.
    pub fn greedy_step(&mut self) {
        self.counters.greedy_moves += 1;

        let mut rng = std::mem::take(&mut self.rng);
        let chosen = self.ledger.unsat_clauses().choose(&mut rng).copied();
        self.rng = rng;

        let Some(clause) = chosen else {
            return;
        };
        let formula = self.clause_db.clause(clause).formula();
        let clause_list = self.clause_db.formula(formula).clauses().to_vec();

        'round_loop: for _ in 0..=clause_list.len() {
            if self.ledger.formula_satisfied(formula, &self.clause_db) {
                break 'round_loop;
            }

            let mut batch: Vec<Move> = Vec::default();
            let mut batch_delta: Weight = 0.0;
            for &unsat in &clause_list {
                if !self.ledger.is_unsat(unsat) {
                    continue;
                }
                if let Some((the_move, delta)) = self.cheapest_repair(unsat) {
                    batch.push(the_move);
                    batch_delta += delta;
                }
            }

            if batch.is_empty() || batch_delta >= 0.0 {
                break 'round_loop;
            }
            log::trace!(target: targets::SEARCH, "Greedy round of {} moves, delta {batch_delta}", batch.len());

            let stamp = self.ledger.fresh_stamp();
            for the_move in batch {
                match the_move {
                    Move::Flip(atom) => {
                        if self.ledger.stamp_atom(atom, stamp) {
                            self.apply_move(the_move);
                        }
                    }
                    Move::PairFlip { down, up } => {
                        let down_fresh = self.ledger.stamp_atom(down, stamp);
                        let up_fresh = self.ledger.stamp_atom(up, stamp);
                        if down_fresh && up_fresh {
                            self.apply_move(the_move);
                        }
                    }
                }
            }
        }
    }

    /// The cheapest move which satisfies the given clause, with ties drawn at random, and none if no atom of the clause is flippable.
    fn cheapest_repair(&mut self, clause: ClauseIndex) -> Option<(Move, Weight)> {
        let atoms: Vec<Atom> = self.clause_db.clause(clause).clause().atoms().collect();

        let mut rng = std::mem::take(&mut self.rng);
        let mut candidates: Vec<(Move, Weight)> = Vec::default();
        for atom in atoms {
            if !self.is_flippable(atom) {
                continue;
            }
            let Some(the_move) = self.resolve_move(atom, &mut rng) else {
                continue;
            };
            let delta = self.move_delta(the_move);
            candidates.push((the_move, delta));
        }

        let cheapest = candidates
            .iter()
            .map(|(_, delta)| *delta)
            .fold(Weight::INFINITY, Weight::min);
        let choice = candidates
            .iter()
            .filter(|(_, delta)| *delta == cheapest)
            .choose(&mut rng)
            .copied();
        self.rng = rng;

        choice
    }
}
