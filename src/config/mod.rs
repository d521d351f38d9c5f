/*!
Configuration of a context.

Primary configuration is context.
All configuration for a context are contained within context.
Some structures clone parts of the configuration.

Each option notes the last [state](crate::context::ContextState) at which revision of the option is supported, via `max_state`.
*/

mod config_option;
pub use config_option::ConfigOption;

mod cost;
pub use cost::CostMethod;

mod rng;
pub use rng::{GreedyBias, PolarityLean};

use crate::context::ContextState;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The count of moves a search may make before concluding with the best world found.
    pub step_limit: ConfigOption<usize>,

    /// The count of moves a sub-solve of a sampled subset of formulas may make.
    pub mcsat_step_limit: ConfigOption<usize>,

    /// The probability of making a greedy move, with a random move otherwise.
    pub greedy_bias: ConfigOption<GreedyBias>,

    /// The probability of assigning positive polarity to an atom when (re)initializing a world.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The method used to estimate the cost of a flip.
    pub cost_method: ConfigOption<CostMethod>,

    /// Negate formulas given with a negative weight, for an equivalent positive weight.
    pub positive_weights: ConfigOption<bool>,

    /// The count of moves between progress reports, with zero for no reports.
    pub progress_interval: ConfigOption<usize>,

    /// The time limit for a search, with a zero duration for no limit.
    pub time_limit: ConfigOption<std::time::Duration>,

    /// The seed of the random number generator of a context.
    pub seed: ConfigOption<u64>,
}

impl Default for Config {
    /// The default context is (roughly) configured to provide quick, deterministic, results on a library of tests.
    fn default() -> Self {
        Config {
            step_limit: ConfigOption {
                name: "step_limit",
                min: usize::MIN,
                max: usize::MAX,
                max_state: ContextState::Search,
                value: 1000,
            },

            mcsat_step_limit: ConfigOption {
                name: "mcsat_step_limit",
                min: usize::MIN,
                max: usize::MAX,
                max_state: ContextState::Search,
                value: 10_000,
            },

            greedy_bias: ConfigOption {
                name: "greedy_bias",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Search,
                value: 0.95,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                max_state: ContextState::Search,
                value: 0.5,
            },

            cost_method: ConfigOption {
                name: "cost_method",
                min: CostMethod::MIN,
                max: CostMethod::MAX,
                max_state: ContextState::Search,
                value: CostMethod::Hybrid,
            },

            positive_weights: ConfigOption {
                name: "positive_weights",
                min: false,
                max: true,
                max_state: ContextState::Input,
                value: true,
            },

            progress_interval: ConfigOption {
                name: "progress_interval",
                min: usize::MIN,
                max: usize::MAX,
                max_state: ContextState::Search,
                value: 1000,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                max_state: ContextState::Search,
                value: std::time::Duration::from_secs(0),
            },

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                max_state: ContextState::Configuration,
                value: 0,
            },
        }
    }
}
