/*!
Marginal estimates from a sampling run.

An estimate for an atom is the fraction of recorded samples in which the atom was true.
Every sample of a run is recorded, the bootstrap sample included.
*/

use crate::structures::{atom::Atom, world::World};

/// Per-atom true counts over the recorded samples.
#[derive(Debug, Default)]
pub struct Marginals {
    /// A count of the recorded samples in which the atom was true, indexed by atom.
    true_counts: Vec<u64>,

    /// A count of the recorded samples.
    samples: u64,
}

impl Marginals {
    /// The fraction of recorded samples in which the given atom was true, and zero if no sample has been recorded.
    pub fn estimate(&self, atom: Atom) -> f64 {
        match self.samples {
            0 => 0.0,
            samples => self.true_counts[atom as usize] as f64 / samples as f64,
        }
    }

    /// A count of the recorded samples.
    pub fn sample_count(&self) -> u64 {
        self.samples
    }

    /// Resizes the counts to the given count of atoms.
    pub(crate) fn resize(&mut self, atom_count: usize) {
        self.true_counts.resize(atom_count, 0);
    }

    /// Clears every count.
    pub(crate) fn reset(&mut self) {
        self.true_counts.fill(0);
        self.samples = 0;
    }

    /// Records the given world as a sample.
    pub(crate) fn record(&mut self, world: &World) {
        for atom in world.true_atoms() {
            self.true_counts[atom as usize] += 1;
        }
        self.samples += 1;
    }
}
