/*!
A database of atoms, their ground identities, and the constraints fixed over them.

The atom database maps each registered [GroundAtom] to a dense [Atom] index, and holds two kinds of per-atom restriction:

- Evidence, an immutable partial assignment fixed for a run.
  Evidence atoms are never flipped, and contradictory evidence is rejected when asserted.
- Block membership, with each atom a member of at most one [Block].

The interplay of evidence and blocks is checked at [initialization](crate::context::GenericContext::initialize) rather than at assertion, as a block pinned one member at a time passes through states which would be errors if final.
*/

use std::collections::HashMap;

use crate::{
    db::BlockIndex,
    structures::{
        atom::{ATOM_MAX, Atom, GroundAtom},
        block::Block,
        formula::Weight,
        world::World,
    },
    types::err::{AtomDBError, BlockError, EvidenceError},
};

/// A database of atoms and the restrictions fixed over them.
pub struct AtomDB {
    /// The ground identity of each atom, indexed by atom.
    ground_atoms: Vec<GroundAtom>,

    /// A map from the canonical rendering of a ground atom to its atom.
    internal_map: HashMap<String, Atom>,

    /// The evidence value of each atom, if any, indexed by atom.
    evidence: Vec<Option<bool>>,

    /// The block of each atom, if any, indexed by atom.
    block_ids: Vec<Option<BlockIndex>>,

    /// All blocks, indexed by [BlockIndex].
    blocks: Vec<Block>,
}

impl Default for AtomDB {
    fn default() -> Self {
        AtomDB::new()
    }
}

impl AtomDB {
    pub fn new() -> Self {
        AtomDB {
            ground_atoms: Vec::default(),
            internal_map: HashMap::default(),
            evidence: Vec::default(),
            block_ids: Vec::default(),
            blocks: Vec::default(),
        }
    }

    /// The count of atoms in the database.
    pub fn count(&self) -> usize {
        self.ground_atoms.len()
    }

    /// The atom of the given ground atom, fresh if the ground atom is new to the database.
    ///
    /// Identity is by the canonical rendering of the ground atom, so registering the same predicate and arguments twice returns the same atom.
    pub fn fresh_atom(&mut self, ground: GroundAtom) -> Result<Atom, AtomDBError> {
        let rendering = ground.to_string();
        if let Some(atom) = self.internal_map.get(&rendering) {
            return Ok(*atom);
        }

        let atom = self.ground_atoms.len();
        if atom > ATOM_MAX as usize {
            return Err(AtomDBError::AtomsExhausted);
        }
        let atom = atom as Atom;

        self.internal_map.insert(rendering, atom);
        self.ground_atoms.push(ground);
        self.evidence.push(None);
        self.block_ids.push(None);

        Ok(atom)
    }

    /// The atom of the ground atom with the given canonical rendering, if registered.
    pub fn atom_of(&self, rendering: &str) -> Option<Atom> {
        self.internal_map.get(rendering).copied()
    }

    /// The ground identity of the given atom.
    pub fn ground_atom(&self, atom: Atom) -> &GroundAtom {
        &self.ground_atoms[atom as usize]
    }

    /// The evidence value of the given atom, if any.
    pub fn evidence_value(&self, atom: Atom) -> Option<bool> {
        self.evidence[atom as usize]
    }

    /// Asserts the given value of the given atom as evidence.
    ///
    /// Repeating existing evidence is a no-op, while evidence of the opposite value is a contradiction.
    pub fn assert_evidence(&mut self, atom: Atom, value: bool) -> Result<(), EvidenceError> {
        if atom as usize >= self.count() {
            return Err(EvidenceError::UnknownAtom(atom));
        }

        match self.evidence[atom as usize] {
            Some(existing) if existing != value => Err(EvidenceError::Contradiction(atom)),
            _ => {
                self.evidence[atom as usize] = Some(value);
                Ok(())
            }
        }
    }

    /// Sets a fresh block over the given members.
    ///
    /// Members must be registered, distinct, at least two, and free of any existing block.
    pub fn set_block(&mut self, members: Vec<Atom>) -> Result<BlockIndex, BlockError> {
        if members.len() < 2 {
            return Err(BlockError::TooFewMembers);
        }

        for &member in &members {
            if member as usize >= self.count() {
                return Err(BlockError::UnknownAtom(member));
            }
            if self.block_ids[member as usize].is_some() {
                return Err(BlockError::Overlap(member));
            }
        }

        let mut sorted = members.clone();
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[0] == pair[1] {
                return Err(BlockError::Overlap(pair[0]));
            }
        }

        let index = self.blocks.len() as BlockIndex;
        for &member in &members {
            self.block_ids[member as usize] = Some(index);
        }
        self.blocks.push(Block::new(members));

        Ok(index)
    }

    /// The block the given atom is a member of, if any.
    pub fn block_of(&self, atom: Atom) -> Option<BlockIndex> {
        self.block_ids[atom as usize]
    }

    /// The block at the given index.
    pub fn block(&self, block: BlockIndex) -> &Block {
        &self.blocks[block as usize]
    }

    /// The count of blocks in the database.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// An iterator over all blocks.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// The given world as a string, one line per atom with false atoms `!` prefixed, and a trailing unsatisfied sum line.
    pub fn world_string(&self, world: &World, uns_sum: Weight) -> String {
        let mut lines = Vec::with_capacity(self.count() + 1);
        for (atom, ground) in self.ground_atoms.iter().enumerate() {
            match world.value_of(atom as Atom) {
                true => lines.push(ground.to_string()),
                false => lines.push(format!("!{ground}")),
            }
        }
        lines.push(format!("Unsatisfied Sum: {uns_sum}"));
        lines.join("\n")
    }
}
