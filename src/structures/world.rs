/*!
Worlds, total boolean valuations over the atoms of a context.

A world stores one value per atom in a dense vector, indexed by atom.
Cloning a world is a full decoupled copy, used to snapshot the best world found during a search.
*/

use crate::structures::atom::Atom;

/// A total valuation over atoms, indexed by atom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    values: Vec<bool>,
}

impl World {
    /// A world over the given count of atoms, with every atom false.
    pub fn new(atom_count: usize) -> Self {
        World {
            values: vec![false; atom_count],
        }
    }

    /// The count of atoms valued by the world.
    pub fn atom_count(&self) -> usize {
        self.values.len()
    }

    /// The value of the given atom on the world.
    pub fn value_of(&self, atom: Atom) -> bool {
        self.values[atom as usize]
    }

    /// The value of the given atom on the world, without a bounds check.
    ///
    /// # Safety
    /// The atom must have been value'd by the world.
    pub unsafe fn value_of_unchecked(&self, atom: Atom) -> bool {
        unsafe { *self.values.get_unchecked(atom as usize) }
    }

    /// Sets the value of the given atom on the world.
    pub fn set_value(&mut self, atom: Atom, value: bool) {
        self.values[atom as usize] = value;
    }

    /// Inverts the value of the given atom on the world, and returns the fresh value.
    pub fn invert_value(&mut self, atom: Atom) -> bool {
        let fresh = !self.values[atom as usize];
        self.values[atom as usize] = fresh;
        fresh
    }

    /// Resizes the world to the given count of atoms, with any fresh atom false.
    pub fn resize(&mut self, atom_count: usize) {
        self.values.resize(atom_count, false);
    }

    /// An iterator over the atoms true on the world.
    pub fn true_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(atom, value)| match value {
                true => Some(atom as Atom),
                false => None,
            })
    }
}
