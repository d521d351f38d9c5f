/*!
Structures which are combined to form a knowledge base, and valuations of the same.

- [Atoms](atom) are (indicies of) ground atoms, and the building blocks of formulas.
- [Literals](literal) are atoms paired with a polarity.
- [Clauses](clause) are disjunctions of literals.
- [Formulas](formula) are weighted propositional formulas over atoms, stored in clausal form.
- [Blocks](block) one-hot encode multi-valued variables as sets of atoms.
- [Worlds](world) are total valuations of the atoms of a context.
*/

pub mod atom;
pub mod block;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod world;
