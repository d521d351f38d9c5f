use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, ledger::Ledger},
    generic::random::MinimalPCG32,
    reports::marginals::Marginals,
    structures::world::World,
};

use rand::SeedableRng;

use super::{ContextState, Counters, GenericContext};

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self {
            atom_db: AtomDB::new(),
            clause_db: ClauseDB::new(),
            ledger: Ledger::new(),

            counters: Counters::default(),

            rng: MinimalPCG32::from_seed(config.seed.value.to_le_bytes()),
            state: ContextState::Configuration,

            config,

            best_world: World::new(0),
            best_uns_sum: 0.0,

            flippable: Vec::default(),
            flippable_flags: Vec::default(),

            marginals: Marginals::default(),
            exact_solver: None,

            callback_terminate: None,
            callback_progress: None,
        }
    }
}
