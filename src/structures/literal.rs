/*!
Literals, the atoms of a clause together with the value the clause prefers for the atom.

A literal with a true polarity is satisfied on a world when the atom is true on the world, and likewise for a false polarity and a false atom.
*/

use crate::structures::atom::Atom;

/// An atom paired with a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CLiteral {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl CLiteral {
    /// A literal on the given atom with the given polarity.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        CLiteral { atom, polarity }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The literal on the same atom with the opposite polarity.
    pub fn negate(&self) -> Self {
        CLiteral {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }
}

impl PartialOrd for CLiteral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Literals are ordered by atom, with a false polarity before a true polarity on the same atom.
impl Ord for CLiteral {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.atom.cmp(&other.atom) {
            std::cmp::Ordering::Equal => self.polarity.cmp(&other.polarity),
            ordering => ordering,
        }
    }
}

impl std::fmt::Display for CLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}
