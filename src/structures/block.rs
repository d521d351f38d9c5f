/*!
Blocks, one-hot encodings of multi-valued variables.

A block is an ordered set of atoms of which exactly one is true on any world considered during a search.
The invariant is established during [initialization](crate::context::GenericContext::initialize) and preserved by flipping block members in pairs, one member down and one member up.
*/

use crate::structures::{atom::Atom, world::World};

/// An ordered set of mutually exclusive, exhaustive atoms.
#[derive(Clone, Debug)]
pub struct Block {
    members: Vec<Atom>,
}

impl Block {
    /// A block of the given members.
    ///
    /// Validation of members is up to the [atom database](crate::db::atom::AtomDB).
    pub(crate) fn new(members: Vec<Atom>) -> Self {
        Block { members }
    }

    /// The members of the block, in order.
    pub fn members(&self) -> &[Atom] {
        &self.members
    }

    /// The count of members of the block.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Whether the given atom is a member of the block.
    pub fn contains(&self, atom: Atom) -> bool {
        self.members.contains(&atom)
    }

    /// The member of the block true on the given world, if exactly one such member is expected.
    ///
    /// The first true member is returned, and None only if the one-hot invariant has been broken.
    pub fn true_member_on(&self, world: &World) -> Option<Atom> {
        self.members.iter().copied().find(|member| world.value_of(*member))
    }
}
