use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, ledger::Ledger},
    procedures::mcsat::ExactSolver,
    reports::marginals::Marginals,
    structures::{atom::Atom, clause::Clause, formula::Weight, world::World},
};

use super::{ContextState, Counters, callbacks::{CallbackProgress, CallbackTerminate}};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used in calls to [resolve_move](GenericContext::resolve_move) to appease the borrow checker, and may be relaxed with a different implementation.
///
/// # Example
///
/// ```rust
/// # use marten_mln::context::GenericContext;
/// # use marten_mln::generic::random::MinimalPCG32;
/// # use marten_mln::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/search.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// Run-mutable search state.
    /// See [db::ledger](crate::db::ledger) for details.
    pub ledger: Ledger,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// The lowest-cost world seen during the current search.
    pub(crate) best_world: World,

    /// The cost of the best world.
    pub(crate) best_uns_sum: Weight,

    /// The atoms a move may flip, in registration order.
    pub(crate) flippable: Vec<Atom>,

    /// Whether each atom may be flipped, indexed by atom.
    pub(crate) flippable_flags: Vec<bool>,

    /// Per-atom marginal estimates, revised while sampling.
    pub(crate) marginals: Marginals,

    /// An exact solver to use for sub-searches while sampling, in place of walks.
    pub(crate) exact_solver: Option<Box<dyn ExactSolver>>,

    /// Terminates procedures, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,

    /// Receives the move count and the best cost at each progress interval.
    pub(super) callback_progress: Option<Box<CallbackProgress>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The lowest-cost world seen during the most recent search.
    pub fn best_world(&self) -> &World {
        &self.best_world
    }

    /// The unsatisfied weight sum of the best world.
    pub fn best_uns_sum(&self) -> Weight {
        self.best_uns_sum
    }

    /// Per-atom marginal estimates from the most recent sampling run.
    pub fn marginals(&self) -> &Marginals {
        &self.marginals
    }

    /// Whether a move may flip the given atom.
    ///
    /// Evidence atoms, and atoms of a block pinned by an evidence atom, may not be flipped.
    pub fn is_flippable(&self, atom: Atom) -> bool {
        self.flippable_flags
            .get(atom as usize)
            .copied()
            .unwrap_or(false)
    }

    /// A count of the hard formulas with some unsatisfied clause on the given world.
    ///
    /// A count taken by direct evaluation, so any world over the context's atoms may be examined.
    pub fn hard_violation_count(&self, world: &World) -> usize {
        let mut count = 0;
        for formula in self.clause_db.formulas() {
            if !formula.is_hard() {
                continue;
            }
            let violated = formula
                .clauses()
                .iter()
                .any(|clause| !self.clause_db.clause(*clause).clause().satisfied_on(world));
            if violated {
                count += 1;
            }
        }
        count
    }

    /// The best world as a string, one ground atom per line.
    pub fn best_world_string(&self) -> String {
        self.atom_db.world_string(&self.best_world, self.best_uns_sum)
    }
}
