/*!
Tools for building a context.

# Basic methods

The library has two basic methods for building a context:
- [fresh_atom](crate::context::GenericContext::fresh_atom), to obtain the atom of a ground predicate.
- [add_formula](crate::context::GenericContext::add_formula), to add a weighted formula over such atoms.

A knowledge base is built by interweaving these two methods, together with [assert_evidence](crate::context::GenericContext::assert_evidence) and [set_block](crate::context::GenericContext::set_block) as the application requires.

Input may be made while a context is fresh or concluded, and any successful input returns the context to the input state.
Input during a search is an error.

# Examples

A knowledge base of two atoms, one soft formula, and a datum of evidence.

```rust
# use marten_mln::context::Context;
# use marten_mln::config::Config;
# use marten_mln::structures::formula::{Formula, WeightedFormula};
#
let mut the_context = Context::from_config(Config::default());
let anna = the_context.fresh_atom("Smokes", &["anna"]).unwrap();
let bob = the_context.fresh_atom("Smokes", &["bob"]).unwrap();

let influence = Formula::implies(Formula::atom(anna), Formula::atom(bob));

assert!(the_context.add_formula(WeightedFormula::soft(influence, 1.2)).is_ok());
assert!(the_context.assert_evidence(anna, true).is_ok());
```

A block, of which exactly one member holds in any world examined.

```rust
# use marten_mln::context::Context;
# use marten_mln::config::Config;
#
let mut the_context = Context::from_config(Config::default());
let hot = the_context.fresh_atom("Temperature", &["hot"]).unwrap();
let mild = the_context.fresh_atom("Temperature", &["mild"]).unwrap();
let cold = the_context.fresh_atom("Temperature", &["cold"]).unwrap();

assert!(the_context.set_block(vec![hot, mild, cold]).is_ok());
```
*/

use crate::{
    context::{ContextState, GenericContext},
    db::{BlockIndex, FormulaIndex},
    structures::{atom::Atom, atom::GroundAtom, formula::WeightedFormula},
    types::err::ErrorKind,
};

/// Methods for building the context.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The atom of the given ground predicate, fresh unless the same predicate and arguments have been registered before.
    ///
    /// Registration is keyed to the rendering of the ground predicate, so `fresh_atom("p", &["a"])` twice returns the same atom.
    pub fn fresh_atom(
        &mut self,
        predicate: impl Into<String>,
        arguments: &[&str],
    ) -> Result<Atom, ErrorKind> {
        if self.state == ContextState::Search {
            return Err(ErrorKind::InvalidState);
        }
        let atom = self.atom_db.fresh_atom(GroundAtom::new(predicate, arguments))?;
        self.state = ContextState::Input;
        Ok(atom)
    }

    /// Adds a weighted formula to the context, returning its index.
    ///
    /// The formula is converted to CNF when stored, with the weight split evenly over the clauses of the expansion.
    /// If the config sets [positive_weights](crate::config::Config::positive_weights) a soft formula with negative weight is negated, with the weight made positive.
    pub fn add_formula(&mut self, formula: WeightedFormula) -> Result<FormulaIndex, ErrorKind> {
        if self.state == ContextState::Search {
            return Err(ErrorKind::InvalidState);
        }
        let index = self.clause_db.store_formula(
            formula,
            self.config.positive_weights.value,
            self.atom_db.count(),
        )?;
        self.state = ContextState::Input;
        Ok(index)
    }

    /// Constrains the given atoms so exactly one is true in any world examined.
    ///
    /// Blocks may not overlap, and a block has at least two members.
    pub fn set_block(&mut self, members: Vec<Atom>) -> Result<BlockIndex, ErrorKind> {
        if self.state == ContextState::Search {
            return Err(ErrorKind::InvalidState);
        }
        let block = self.atom_db.set_block(members)?;
        self.state = ContextState::Input;
        Ok(block)
    }

    /// Fixes the value of the given atom in any world examined.
    ///
    /// Asserting the value an atom already has is a no-op, while asserting the opposing value is an error.
    pub fn assert_evidence(&mut self, atom: Atom, value: bool) -> Result<(), ErrorKind> {
        if self.state == ContextState::Search {
            return Err(ErrorKind::InvalidState);
        }
        self.atom_db.assert_evidence(atom, value)?;
        self.state = ContextState::Input;
        Ok(())
    }
}
