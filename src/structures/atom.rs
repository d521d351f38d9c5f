/*!
Atoms, and the ground atoms they index.

Internally an atom is an index into a collection of structures in various databases, and in turn the unsigned integers are used, with a cap on the last atom to help avoid overflows.

The identity of an atom is the [GroundAtom] it was registered with through a call to [fresh_atom](crate::context::GenericContext::fresh_atom).
A ground atom is a predicate applied to a (possibly empty) sequence of constant arguments, e.g. `smokes(anna)`.
Distinct ground atoms receive distinct indicies, and registering the same ground atom twice returns the same index.

Comparison of ground atoms prior to registration is unsupported, by design.
All equalities of interest are equalities of indicies.
*/

/// An atom, represented as a u32.
pub type Atom = u32;

/// The last atom which may be registered in a context.
///
/// The limit reserves [u32::MAX] for internal use as a sentinel.
pub const ATOM_MAX: Atom = u32::MAX - 1;

/// A predicate applied to constant arguments, the external identity of an atom.
#[derive(Clone, Debug)]
pub struct GroundAtom {
    /// The predicate of the ground atom.
    pub predicate: String,

    /// The arguments the predicate is applied to, in order.
    pub arguments: Vec<String>,
}

impl GroundAtom {
    /// A ground atom of the given predicate and arguments.
    pub fn new<P: Into<String>>(predicate: P, arguments: &[&str]) -> Self {
        GroundAtom {
            predicate: predicate.into(),
            arguments: arguments.iter().map(|argument| argument.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for GroundAtom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.arguments.is_empty() {
            true => write!(f, "{}", self.predicate),
            false => write!(f, "{}({})", self.predicate, self.arguments.join(",")),
        }
    }
}
