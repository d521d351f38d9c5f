//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some are external --- e.g. a context returns a `Contradiction` error to highlight evidence asserted for both values of an atom, and the knowledge base may be revised before a further attempt.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.

use crate::{
    db::BlockIndex,
    structures::atom::Atom,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Block(BlockError),
    ClauseDB(ClauseDBError),
    Evidence(EvidenceError),
    McSat(McSatError),

    /// The context is in an invalid state for the requested action.
    InvalidState,
}

/// Noted errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors when setting a block.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BlockError {
    /// A block requires at least two members.
    TooFewMembers,

    /// The atom is already a member of some block, or appears twice in the given members.
    Overlap(Atom),

    /// A member of the block is not a registered atom.
    UnknownAtom(Atom),
}

impl From<BlockError> for ErrorKind {
    fn from(e: BlockError) -> Self {
        ErrorKind::Block(e)
    }
}

/// Noted errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// The CNF expansion of a formula contains an empty clause, and so the formula is unsatisfiable.
    EmptyClause,

    /// A formula contains an atom which is not registered in the atom database.
    UnknownAtom(Atom),

    /// The weight of a formula is NaN or infinite.
    NonFiniteWeight,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Noted errors when asserting or reconciling evidence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvidenceError {
    /// Evidence has been asserted for both values of the atom.
    Contradiction(Atom),

    /// The atom is not registered in the atom database.
    UnknownAtom(Atom),

    /// Every member of the block is evidence, with no member true.
    BlockWithoutTrue(BlockIndex),

    /// Two or more members of the block are evidence true.
    BlockMultipleTrue(BlockIndex),
}

impl From<EvidenceError> for ErrorKind {
    fn from(e: EvidenceError) -> Self {
        ErrorKind::Evidence(e)
    }
}

/// Noted errors during MC-SAT sampling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum McSatError {
    /// The hard formulas could not be satisfied within the sub-solve budget.
    BootstrapFailed,

    /// A drawn subset of formulas could not be satisfied within the sub-solve budget.
    ///
    /// Records the index of the sample the subset was drawn for.
    SubSolveFailed(usize),
}

impl From<McSatError> for ErrorKind {
    fn from(e: McSatError) -> Self {
        ErrorKind::McSat(e)
    }
}
