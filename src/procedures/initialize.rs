/*!
Initialisation of a search: validation of the knowledge base, a seed world, and fresh indices.

# Overview

[initialize](crate::context::GenericContext::initialize) prepares a context for a walk:

- Evidence is checked against blocks, as evidence may pin a block to an impossible reading.
- The flippable atoms are settled.
  An atom may be flipped unless fixed by evidence, or a member of a block some member of which is evidence-true.
- A world is seeded, with evidence-free atoms drawn by [polarity_lean](crate::config::Config::polarity_lean) and each block given exactly one true member.
- The [ledger](crate::db::ledger) is rebuilt against the seed world, with every formula active.

The seed world is the first candidate for the best world of the search.
*/

use rand::seq::IteratorRandom;

use crate::{
    context::{ContextState, GenericContext},
    db::BlockIndex,
    misc::log::targets,
    structures::{atom::Atom, world::World},
    types::err::{ErrorKind, EvidenceError},
};

/// Methods related to initialising a search.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Validates the knowledge base and seeds a fresh world, leaving the context ready to walk.
    pub fn initialize(&mut self) -> Result<(), ErrorKind> {
        if self.state == ContextState::Search {
            return Err(ErrorKind::InvalidState);
        }

        let atom_count = self.atom_db.count();

        // Evidence may not raise two members of a block, nor hold every member down.
        for index in 0..self.atom_db.block_count() {
            let block = index as BlockIndex;

            let mut true_members = 0;
            let mut free_members = 0;
            for &member in self.atom_db.block(block).members() {
                match self.atom_db.evidence_value(member) {
                    Some(true) => true_members += 1,
                    Some(false) => {}
                    None => free_members += 1,
                }
            }

            if true_members > 1 {
                return Err(EvidenceError::BlockMultipleTrue(block).into());
            }
            if true_members == 0 && free_members == 0 {
                return Err(EvidenceError::BlockWithoutTrue(block).into());
            }
        }

        self.flippable_flags.clear();
        self.flippable_flags.resize(atom_count, false);

        let mut world = World::new(atom_count);
        for index in 0..atom_count {
            let atom = index as Atom;
            match self.atom_db.evidence_value(atom) {
                Some(value) => world.set_value(atom, value),
                None => {
                    self.flippable_flags[index] = true;
                    let value = self.rng.random_bool(self.config.polarity_lean.value);
                    world.set_value(atom, value);
                }
            }
        }

        // Blocks override the draw, raising exactly one member.
        for index in 0..self.atom_db.block_count() {
            let block = index as BlockIndex;
            let members = self.atom_db.block(block).members().to_vec();

            let evidence_true = members
                .iter()
                .copied()
                .find(|member| self.atom_db.evidence_value(*member) == Some(true));

            let raised = match evidence_true {
                Some(member) => {
                    // The block is pinned, so no member may move.
                    for &member in &members {
                        self.flippable_flags[member as usize] = false;
                    }
                    member
                }
                None => {
                    let mut rng = std::mem::take(&mut self.rng);
                    let choice = members
                        .iter()
                        .copied()
                        .filter(|member| self.atom_db.evidence_value(*member).is_none())
                        .choose(&mut rng);
                    self.rng = rng;
                    match choice {
                        Some(member) => member,
                        None => return Err(EvidenceError::BlockWithoutTrue(block).into()),
                    }
                }
            };

            for &member in &members {
                world.set_value(member, member == raised);
            }
        }

        self.flippable.clear();
        for index in 0..atom_count {
            if self.flippable_flags[index] {
                self.flippable.push(index as Atom);
            }
        }

        self.ledger.resize(&self.clause_db, atom_count);
        self.ledger.install_world(world);
        self.ledger.activate_all();
        self.ledger.rebuild(&self.clause_db);

        self.best_world = self.ledger.world().clone();
        self.best_uns_sum = self.ledger.uns_sum();

        self.counters.total_moves = 0;
        self.counters.greedy_moves = 0;
        self.counters.random_moves = 0;
        self.counters.best_move = 0;
        self.counters.stall = 0;

        self.state = ContextState::Search;
        log::info!(target: targets::INITIALIZE, "Initialised over {atom_count} atoms with sum {}", self.ledger.uns_sum());

        Ok(())
    }
}
