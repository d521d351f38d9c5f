use marten_mln::{
    config::Config,
    context::Context,
    reports::Report,
    structures::formula::{Formula, WeightedFormula},
};

/// A config which seeds every evidence-free atom false, for a known start world.
fn all_false_config() -> Config {
    let mut cfg = Config::default();
    cfg.polarity_lean.value = 0.0;
    cfg
}

mod walks {
    use super::*;

    #[test]
    fn a_satisfiable_base_concludes_satisfied() {
        let mut ctx = Context::from_config(all_false_config());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        let b = ctx.fresh_atom("b", &[]).unwrap();

        let disjunction = Formula::or(vec![Formula::atom(a), Formula::atom(b)]);
        ctx.add_formula(WeightedFormula::soft(disjunction, 2.0))
            .unwrap();

        assert_eq!(ctx.search(), Ok(Report::Satisfied));
        assert_eq!(ctx.best_uns_sum(), 0.0);
        assert!(ctx.best_world().value_of(a) || ctx.best_world().value_of(b));
        assert!(ctx.counters.total_moves >= 1);
    }

    #[test]
    fn competing_soft_formulas_settle_on_the_cheaper() {
        let mut ctx = Context::from_config(all_false_config());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        let b = ctx.fresh_atom("b", &[]).unwrap();

        let exclusion = Formula::not(Formula::and(vec![Formula::atom(a), Formula::atom(b)]));
        ctx.add_formula(WeightedFormula::hard(exclusion)).unwrap();
        ctx.add_formula(WeightedFormula::soft(Formula::atom(a), 1.0))
            .unwrap();
        ctx.add_formula(WeightedFormula::soft(Formula::atom(b), 1.0))
            .unwrap();

        assert_eq!(ctx.search(), Ok(Report::StepLimit));

        // One soft formula fails in any world the hard formula allows.
        assert_eq!(ctx.best_uns_sum(), 1.0);
        assert_eq!(ctx.hard_violation_count(ctx.best_world()), 0);
        assert_ne!(
            ctx.best_world().value_of(a),
            ctx.best_world().value_of(b)
        );

        assert_eq!(ctx.counters.total_moves, 1000);
        assert_eq!(
            ctx.counters.greedy_moves + ctx.counters.random_moves,
            ctx.counters.total_moves
        );
        assert!(ctx.counters.greedy_moves > 0);
        assert!(ctx.counters.random_moves > 0);
    }

    #[test]
    fn evidence_is_respected() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_atom("a", &[]).unwrap();

        ctx.add_formula(WeightedFormula::soft(Formula::not(Formula::atom(a)), 5.0))
            .unwrap();
        ctx.assert_evidence(a, true).unwrap();

        assert_eq!(ctx.search(), Ok(Report::StepLimit));
        assert!(ctx.best_world().value_of(a));
        assert_eq!(ctx.best_uns_sum(), 5.0);
        assert!(!ctx.is_flippable(a));
    }

    #[test]
    fn a_hard_conflict_still_returns_the_best_world() {
        let mut ctx = Context::from_config(Config::default());
        let a = ctx.fresh_atom("a", &[]).unwrap();

        ctx.add_formula(WeightedFormula::hard(Formula::atom(a)))
            .unwrap();
        ctx.add_formula(WeightedFormula::hard(Formula::not(Formula::atom(a))))
            .unwrap();

        // The walk concludes without error, noting the violation for the caller.
        assert_eq!(ctx.search(), Ok(Report::StepLimit));
        assert_eq!(ctx.best_uns_sum(), 1.0);
        assert_eq!(ctx.hard_violation_count(ctx.best_world()), 1);
        assert_eq!(ctx.counters.total_moves, 1000);
    }

    #[test]
    fn the_terminate_callback_stops_the_walk() {
        let mut ctx = Context::from_config(all_false_config());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        ctx.add_formula(WeightedFormula::soft(Formula::atom(a), 1.0))
            .unwrap();

        ctx.set_callback_terminate(Box::new(|| true));

        assert_eq!(ctx.search(), Ok(Report::Terminated));
        assert_eq!(ctx.counters.total_moves, 0);
        assert_eq!(ctx.best_uns_sum(), 1.0);
    }

    #[test]
    fn the_progress_callback_follows_the_interval() {
        use std::{cell::RefCell, rc::Rc};

        let mut cfg = Config::default();
        cfg.step_limit.value = 350;
        cfg.progress_interval.value = 100;
        let mut ctx = Context::from_config(cfg);

        let a = ctx.fresh_atom("a", &[]).unwrap();
        ctx.add_formula(WeightedFormula::hard(Formula::atom(a)))
            .unwrap();
        ctx.add_formula(WeightedFormula::hard(Formula::not(Formula::atom(a))))
            .unwrap();

        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let hook = seen.clone();
        ctx.set_callback_progress(Box::new(move |moves, _best| hook.borrow_mut().push(moves)));

        assert_eq!(ctx.search(), Ok(Report::StepLimit));
        assert_eq!(*seen.borrow(), vec![100, 200, 300]);
    }

    #[test]
    fn a_fixed_seed_repeats_the_walk() {
        let build = || {
            let mut cfg = Config::default();
            cfg.seed.value = 73;
            let mut ctx = Context::from_config(cfg);

            let a = ctx.fresh_atom("a", &[]).unwrap();
            let b = ctx.fresh_atom("b", &[]).unwrap();

            let exclusion = Formula::not(Formula::and(vec![Formula::atom(a), Formula::atom(b)]));
            ctx.add_formula(WeightedFormula::hard(exclusion)).unwrap();
            ctx.add_formula(WeightedFormula::soft(Formula::atom(a), 1.0))
                .unwrap();
            ctx.add_formula(WeightedFormula::soft(Formula::atom(b), 1.0))
                .unwrap();

            (ctx, a, b)
        };

        let (mut first, a, b) = build();
        let (mut second, _, _) = build();

        assert_eq!(first.search(), second.search());
        assert_eq!(first.best_uns_sum(), second.best_uns_sum());
        assert_eq!(
            first.best_world().value_of(a),
            second.best_world().value_of(a)
        );
        assert_eq!(
            first.best_world().value_of(b),
            second.best_world().value_of(b)
        );
        assert_eq!(first.counters.total_flips, second.counters.total_flips);
        assert_eq!(first.counters.greedy_moves, second.counters.greedy_moves);
    }
}

mod blocks {
    use super::*;

    #[test]
    fn a_block_holds_exactly_one_member() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom("Status", &["p"]).unwrap();
        let q = ctx.fresh_atom("Status", &["q"]).unwrap();
        let r = ctx.fresh_atom("Status", &["r"]).unwrap();
        ctx.set_block(vec![p, q, r]).unwrap();

        ctx.add_formula(WeightedFormula::soft(Formula::atom(p), 2.0))
            .unwrap();
        ctx.add_formula(WeightedFormula::soft(Formula::atom(q), 1.0))
            .unwrap();

        assert_eq!(ctx.search(), Ok(Report::StepLimit));

        // Raising p costs less than raising q or r.
        assert_eq!(ctx.best_uns_sum(), 1.0);
        assert!(ctx.best_world().value_of(p));

        let best_raised = [p, q, r]
            .iter()
            .filter(|&&member| ctx.best_world().value_of(member))
            .count();
        assert_eq!(best_raised, 1);

        let raised = [p, q, r]
            .iter()
            .filter(|&&member| ctx.ledger.world().value_of(member))
            .count();
        assert_eq!(raised, 1);
    }

    #[test]
    fn evidence_pins_a_block() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom("Status", &["p"]).unwrap();
        let q = ctx.fresh_atom("Status", &["q"]).unwrap();
        let r = ctx.fresh_atom("Status", &["r"]).unwrap();
        ctx.set_block(vec![p, q, r]).unwrap();
        ctx.assert_evidence(q, true).unwrap();

        // The soft formula pulls against the pin, in vain.
        ctx.add_formula(WeightedFormula::soft(Formula::atom(p), 4.0))
            .unwrap();

        assert_eq!(ctx.search(), Ok(Report::StepLimit));
        assert!(!ctx.best_world().value_of(p));
        assert!(ctx.best_world().value_of(q));
        assert!(!ctx.best_world().value_of(r));
        assert_eq!(ctx.best_uns_sum(), 4.0);
        assert_eq!(ctx.counters.total_flips, 0);

        assert!(!ctx.is_flippable(p));
        assert!(!ctx.is_flippable(q));
        assert!(!ctx.is_flippable(r));
    }

    #[test]
    fn conflicting_block_evidence_is_rejected() {
        use marten_mln::types::err::{ErrorKind, EvidenceError};

        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom("Status", &["p"]).unwrap();
        let q = ctx.fresh_atom("Status", &["q"]).unwrap();
        let block = ctx.set_block(vec![p, q]).unwrap();

        ctx.assert_evidence(p, true).unwrap();
        ctx.assert_evidence(q, true).unwrap();

        assert_eq!(
            ctx.search(),
            Err(ErrorKind::Evidence(EvidenceError::BlockMultipleTrue(block)))
        );
    }

    #[test]
    fn a_block_held_down_by_evidence_is_rejected() {
        use marten_mln::types::err::{ErrorKind, EvidenceError};

        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_atom("Status", &["p"]).unwrap();
        let q = ctx.fresh_atom("Status", &["q"]).unwrap();
        let block = ctx.set_block(vec![p, q]).unwrap();

        ctx.assert_evidence(p, false).unwrap();
        ctx.assert_evidence(q, false).unwrap();

        assert_eq!(
            ctx.search(),
            Err(ErrorKind::Evidence(EvidenceError::BlockWithoutTrue(block)))
        );
    }
}

mod rendering {
    use super::*;

    #[test]
    fn the_best_world_prints_by_atom() {
        let mut ctx = Context::from_config(all_false_config());
        let wet = ctx.fresh_atom("Wet", &["lawn"]).unwrap();
        let rain = ctx.fresh_atom("Rain", &[]).unwrap();

        ctx.add_formula(WeightedFormula::hard(Formula::atom(wet)))
            .unwrap();
        ctx.assert_evidence(rain, false).unwrap();

        assert_eq!(ctx.search(), Ok(Report::Satisfied));
        assert_eq!(
            ctx.best_world_string(),
            "Wet(lawn)\n!Rain\nUnsatisfied Sum: 0"
        );
    }
}
