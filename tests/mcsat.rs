use marten_mln::{
    config::Config,
    context::Context,
    structures::formula::{Formula, WeightedFormula},
    types::err::{ErrorKind, McSatError},
};

mod sampling {
    use super::*;

    #[test]
    fn blocked_marginals_sum_to_one() {
        let mut ctx = Context::from_config(Config::default());
        let v1 = ctx.fresh_atom("Value", &["one"]).unwrap();
        let v2 = ctx.fresh_atom("Value", &["two"]).unwrap();
        let v3 = ctx.fresh_atom("Value", &["three"]).unwrap();
        ctx.set_block(vec![v1, v2, v3]).unwrap();

        ctx.add_formula(WeightedFormula::hard(Formula::not(Formula::atom(v2))))
            .unwrap();
        ctx.add_formula(WeightedFormula::soft(Formula::atom(v1), 0.5))
            .unwrap();

        assert!(ctx.sample(1023).is_ok());
        assert_eq!(ctx.marginals().sample_count(), 1024);

        // v2 is ruled out, so the block splits its mass over v1 and v3.
        assert_eq!(ctx.marginals().estimate(v2), 0.0);
        let split = ctx.marginals().estimate(v1) + ctx.marginals().estimate(v3);
        assert_eq!(split, 1.0);
    }

    #[test]
    fn a_heavy_soft_formula_dominates_the_chain() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        ctx.add_formula(WeightedFormula::soft(Formula::atom(a), 10.0))
            .unwrap();

        assert!(ctx.sample(63).is_ok());

        assert_eq!(ctx.marginals().sample_count(), 64);
        assert!(ctx.marginals().estimate(a) > 0.9);
    }

    #[test]
    fn chains_accumulate_over_calls() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        ctx.add_formula(WeightedFormula::soft(Formula::atom(a), 1.0))
            .unwrap();

        assert!(ctx.sample(7).is_ok());
        assert_eq!(ctx.marginals().sample_count(), 8);

        assert!(ctx.sample(8).is_ok());
        assert_eq!(ctx.marginals().sample_count(), 16);
    }

    #[test]
    fn input_restarts_the_chain() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        ctx.add_formula(WeightedFormula::soft(Formula::atom(a), 1.0))
            .unwrap();

        assert!(ctx.sample(7).is_ok());
        assert_eq!(ctx.marginals().sample_count(), 8);

        // Fresh input voids the chain, so the next call bootstraps anew.
        let b = ctx.fresh_atom("b", &[]).unwrap();
        ctx.add_formula(WeightedFormula::soft(Formula::atom(b), 0.5))
            .unwrap();

        assert!(ctx.sample(3).is_ok());
        assert_eq!(ctx.marginals().sample_count(), 4);
    }

    #[test]
    fn evidence_holds_over_every_sample() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        let b = ctx.fresh_atom("b", &[]).unwrap();

        ctx.add_formula(WeightedFormula::soft(
            Formula::iff(Formula::atom(a), Formula::atom(b)),
            1.5,
        ))
        .unwrap();
        ctx.assert_evidence(a, true).unwrap();

        assert!(ctx.sample(31).is_ok());

        assert_eq!(ctx.marginals().estimate(a), 1.0);
        assert!(ctx.marginals().estimate(b) > 0.5);
    }
}

mod failures {
    use super::*;

    #[test]
    fn an_unsatisfiable_hard_base_fails_to_bootstrap() {
        let mut cfg = Config::default();
        cfg.mcsat_step_limit.value = 200;
        let mut ctx = Context::from_config(cfg);

        let a = ctx.fresh_atom("a", &[]).unwrap();
        ctx.add_formula(WeightedFormula::hard(Formula::atom(a)))
            .unwrap();
        ctx.add_formula(WeightedFormula::hard(Formula::not(Formula::atom(a))))
            .unwrap();

        assert_eq!(
            ctx.sample(4),
            Err(ErrorKind::McSat(McSatError::BootstrapFailed))
        );
    }

    #[test]
    fn an_unsatisfiable_slice_fails_the_sample() {
        let mut cfg = Config::default();
        cfg.mcsat_step_limit.value = 100;
        let mut ctx = Context::from_config(cfg);

        let a = ctx.fresh_atom("a", &[]).unwrap();
        ctx.add_formula(WeightedFormula::soft(Formula::not(Formula::atom(a)), 2.0))
            .unwrap();
        ctx.assert_evidence(a, true).unwrap();

        // Any slice holding the soft formula contradicts the evidence.
        let outcome = ctx.sample(64);
        assert!(matches!(
            outcome,
            Err(ErrorKind::McSat(McSatError::SubSolveFailed(_)))
        ));
    }
}

mod exact_solvers {
    use marten_mln::{
        db::{atom::AtomDB, clause::ClauseDB},
        procedures::mcsat::ExactSolver,
        structures::{atom::Atom, clause::Clause, world::World},
    };

    use super::*;

    /// Exhausts all worlds in order, returning the first to satisfy the active formulas.
    struct Exhaustive;

    impl ExactSolver for Exhaustive {
        fn satisfy(
            &mut self,
            _seed: &World,
            active: &[bool],
            atom_db: &AtomDB,
            clause_db: &ClauseDB,
        ) -> Option<World> {
            let count = atom_db.count();
            for bits in 0..(1_u64 << count) {
                let mut world = World::new(count);
                for index in 0..count {
                    world.set_value(index as Atom, bits & (1 << index) != 0);
                }

                let satisfied = (0..clause_db.formula_count()).all(|index| {
                    !active[index]
                        || clause_db
                            .formula(index as u32)
                            .clauses()
                            .iter()
                            .all(|&clause| clause_db.clause(clause).clause().satisfied_on(&world))
                });
                if satisfied {
                    return Some(world);
                }
            }
            None
        }
    }

    #[test]
    fn an_exact_solver_replaces_the_walks() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        ctx.add_formula(WeightedFormula::soft(Formula::atom(a), 5.0))
            .unwrap();

        ctx.set_exact_solver(Box::new(Exhaustive));

        assert!(ctx.sample(31).is_ok());

        assert_eq!(ctx.marginals().sample_count(), 32);
        assert_eq!(ctx.counters.sub_searches, 32);
        assert!(ctx.marginals().estimate(a) > 0.5);
    }
}
