/*!
Clauses, disjunctions of literals.

The canonical representation of a clause is a vector of literals, with the [Clause] trait supplying methods over any slice of literals.

Clauses in a knowledge base are canonical in a stronger sense: literals are sorted, duplicate literals are removed, and no atom appears with both polarities, as a clause containing complementary literals is a tautology and is dropped during the [CNF expansion](crate::structures::formula::Formula::cnf) of a formula.
*/

use crate::structures::{atom::Atom, literal::CLiteral, world::World};

/// The canonical clause representation, a vector of literals.
pub type CClause = Vec<CLiteral>;

/// Methods on clauses, implemented for collections of literals.
pub trait Clause {
    /// The count of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over the literals of the clause.
    fn literals(&self) -> impl Iterator<Item = CLiteral>;

    /// An iterator over the atoms of the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether some literal of the clause is satisfied on the given world.
    fn satisfied_on(&self, world: &World) -> bool;

    /// The count of literals of the clause satisfied on the given world.
    fn true_literal_count_on(&self, world: &World) -> usize;

    /// The clause as a string of its literals, space separated.
    fn as_string(&self) -> String;
}

impl Clause for [CLiteral] {
    fn size(&self) -> usize {
        self.len()
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.iter().copied()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, world: &World) -> bool {
        self.iter()
            .any(|literal| world.value_of(literal.atom()) == literal.polarity())
    }

    fn true_literal_count_on(&self, world: &World) -> usize {
        self.iter()
            .filter(|literal| world.value_of(literal.atom()) == literal.polarity())
            .count()
    }

    fn as_string(&self) -> String {
        let mut string = String::with_capacity(self.len() * 3);
        for literal in self {
            string.push_str(&literal.to_string());
            string.push(' ');
        }
        string.pop();
        string
    }
}

impl Clause for CClause {
    fn size(&self) -> usize {
        self.as_slice().size()
    }

    fn literals(&self) -> impl Iterator<Item = CLiteral> {
        self.as_slice().literals()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.as_slice().atoms()
    }

    fn satisfied_on(&self, world: &World) -> bool {
        self.as_slice().satisfied_on(world)
    }

    fn true_literal_count_on(&self, world: &World) -> usize {
        self.as_slice().true_literal_count_on(world)
    }

    fn as_string(&self) -> String {
        self.as_slice().as_string()
    }
}
