//! A library for inference over knowledge bases of weighted ground formulas.
//!
//! marten_mln is a library for finding lowest-cost worlds of a weighted knowledge base with MaxWalkSAT, and for estimating per-atom marginals with the MC-SAT sampler, in the manner of Markov logic.
//!
//! marten_mln is developed to help researchers, developers, or anyone curious, to investigate weighted satisfiability and sampling, whether as a novice or through implementing novel ideas.
//!
//! Some guiding principles of marten_mln are (see [below](#guiding-principles) for further details):
//! - [Modularity](#modularity).
//! - Documentation, of both implementation and theory.
//! - [Simple efficiency](#simple-efficiency).
//!
//! # Orientation
//!
//! The library is design around the core structure of a [context].
//!
//! Contexts are built with a configuration, and a knowledge base is put to a context programatically: [atoms](crate::context::GenericContext::fresh_atom) of ground predicates, [weighted formulas](crate::context::GenericContext::add_formula) over the atoms, with [evidence](crate::context::GenericContext::assert_evidence) and [blocks](crate::context::GenericContext::set_block) as the application requires.
//!
//! Internally, and at a high-level, a search is viewed in terms of manipulation of, and relationships between, a handful of databases which instantiate core theoretical objects.
//! Notably:
//! - Formulas are stored in a clause database, clause by clause of their CNF expansions.
//! - Ground atoms, evidence, and blocks are stored in an atom database.
//! - The world of the moment, the satisfaction indices over it, and the running unsatisfied weight are stored in a ledger.
//!
//! A move of a walk revises the world, the ledger follows the move through the indices, and the revised cost steers the next move.
//!
//! Useful starting points, then, may be:
//! - The high-level [search procedure](crate::procedures::search) to inspect the dynamics of a walk, and the [sampler](crate::procedures::mcsat) for the chain over walks.
//! - The [database module](crate::db) to inspect the data considered during a search.
//! - The [structures] to familiarise yourself with the abstract elements of a search and their representation (formulas, worlds, etc.)
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Find a lowest-cost world of a small knowledge base.
//!
//! ```rust
//! # use marten_mln::config::Config;
//! # use marten_mln::context::Context;
//! # use marten_mln::reports::Report;
//! # use marten_mln::structures::formula::{Formula, WeightedFormula};
//! let mut the_context: Context = Context::from_config(Config::default());
//!
//! let rain = the_context.fresh_atom("Weather", &["rain"]).unwrap();
//! let wet = the_context.fresh_atom("Wet", &["lawn"]).unwrap();
//!
//! // Rain wets the lawn, without exception.
//! let wets = Formula::implies(Formula::atom(rain), Formula::atom(wet));
//! assert!(the_context.add_formula(WeightedFormula::hard(wets)).is_ok());
//!
//! // The lawn is dry, more likely than not.
//! let dry = Formula::not(Formula::atom(wet));
//! assert!(the_context.add_formula(WeightedFormula::soft(dry, 0.8)).is_ok());
//!
//! assert_eq!(the_context.search(), Ok(Report::Satisfied));
//! assert_eq!(the_context.best_uns_sum(), 0.0);
//! assert!(!the_context.best_world().value_of(rain));
//! ```
//!
//! + Estimate the marginal of an atom a soft formula favours.
//!
//! ```rust
//! # use marten_mln::config::Config;
//! # use marten_mln::context::Context;
//! # use marten_mln::structures::formula::{Formula, WeightedFormula};
//! let mut the_context: Context = Context::from_config(Config::default());
//!
//! let heads = the_context.fresh_atom("Coin", &["heads"]).unwrap();
//! assert!(the_context.add_formula(WeightedFormula::soft(Formula::atom(heads), 3.0)).is_ok());
//!
//! assert!(the_context.sample(63).is_ok());
//!
//! assert_eq!(the_context.marginals().sample_count(), 64);
//! assert!(0.5 < the_context.marginals().estimate(heads));
//! ```
//!
//! # Guiding principles
//!
//! ## Modularity
//!
//!   + A search is built of many interconnected parts, but where possible (and reasonable) interaction between parts happens through documented access points. For example:
//!     - Formulas and clauses are stored in a [clause database](db::clause), and are accessed through [indices](db::FormulaIndex).
//!       The expansion of a formula to clauses happens when the formula is stored, and the internal structure of the database is private.
//!     - Things such as [formulas](structures::formula) and [clauses](structures::clause) are defined with canonical instantiations used only when there is 'good reason' to do so.
//!     - The algorithm for finding a lowest-cost world is factored into a collection of [procedures].
//!     - Use of external crates is limited to crates which help support modularity, such as [log](https://docs.rs/log/latest/log/) and [rand](https://docs.rs/rand/latest/rand/).
//!
//! ## Simple efficiency
//!
//! The search is efficient in most operations, and known inefficiencies are often noted.
//! Still, while compromises are made for the sake of efficiency, overall the library is written using mostly simple Rust, with annotated uses of unsafe, notes on when using a function would be unsound, and fights with the borrow checker explained.
//!   + The cost of a move is kept proportional to the degree of the atoms moved, with the [ledger](crate::db::ledger) revising indices rather than rescanning the knowledge base.
//!   + Though, many relevant invariants escape the borrow checker, and for this purpose 'soundness' notes are made where relevant.
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are lists in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
//! - Logs of sampling progress without information about each slice can be found with `RUST_LOG=mcsat=debug …`
//!

#![allow(clippy::derivable_impls)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;

pub mod reports;
