/*!
The context --- to which formulas are added and within which searches take place, etc.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters.
Though, for the moment this is limited to the source of randomness.

Still, this helps distinguish generic context methods against those intended for external use or a particular application.
In particular, [from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

# Example
```rust
# use marten_mln::context::Context;
# use marten_mln::config::Config;
# use marten_mln::reports::Report;
# use marten_mln::structures::formula::{Formula, WeightedFormula};
let mut the_context = Context::from_config(Config::default());

let rain = the_context.fresh_atom("Rain", &[]).unwrap();
let wet = the_context.fresh_atom("Wet", &[]).unwrap();

let implication = Formula::implies(Formula::atom(rain), Formula::atom(wet));
assert!(the_context.add_formula(WeightedFormula::hard(implication)).is_ok());
assert!(the_context.assert_evidence(rain, true).is_ok());

assert_eq!(the_context.search(), Ok(Report::Satisfied));

assert_eq!(the_context.best_uns_sum(), 0.0);
assert!(the_context.best_world().value_of(wet));
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows for configuration.
    Configuration,

    /// The context allows input.
    Input,

    /// A search or a sampling run is underway.
    Search,

    /// A search or a sampling run has concluded, with results available until further input.
    Concluded,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Input => write!(f, "Input"),
            Self::Search => write!(f, "Search"),
            Self::Concluded => write!(f, "Concluded"),
        }
    }
}
