/*!
Databases for the content of a context.

- The [atom database](crate::db::atom) holds the ground identity of each atom, together with evidence and block membership.
- The [clause database](crate::db::clause) holds the weighted formulas of the knowledge base in clausal form, with occurrence lists from atoms to clauses.
- The [ledger](crate::db::ledger) holds all state mutated during a search: the world, the satisfaction indices, and the running unsatisfied weight.

The split mirrors mutability during a search.
Atom and clause databases are frozen once a search begins, while the ledger is rebuilt and revised freely.
*/

pub mod atom;
pub mod clause;
pub mod ledger;

/// An index to a formula in the clause database.
pub type FormulaIndex = u32;

/// An index to a clause in the clause database.
pub type ClauseIndex = u32;

/// An index to a block in the atom database.
pub type BlockIndex = u32;
