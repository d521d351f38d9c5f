use marten_mln::{
    config::Config,
    context::Context,
    structures::formula::{Formula, WeightedFormula},
};

/// A config which seeds every evidence-free atom false, for a known start world.
fn all_false_config() -> Config {
    let mut cfg = Config::default();
    cfg.polarity_lean.value = 0.0;
    cfg
}

/// The unsatisfied weight sum of the current world, recomputed from scratch.
fn recomputed_sum(ctx: &Context) -> f64 {
    use marten_mln::structures::clause::Clause;

    let mut sum = 0.0;
    for index in 0..ctx.clause_db.formula_count() {
        let formula = ctx.clause_db.formula(index as u32);
        let unsatisfied = formula.clauses().iter().any(|&clause| {
            !ctx.clause_db
                .clause(clause)
                .clause()
                .satisfied_on(ctx.ledger.world())
        });
        if unsatisfied {
            sum += match formula.is_hard() {
                true => ctx.ledger.hard_weight(),
                false => formula.weight(),
            };
        }
    }
    sum
}

/// The unsatisfied clauses of the current world, recomputed from scratch.
fn recomputed_unsat(ctx: &Context) -> Vec<u32> {
    use marten_mln::structures::clause::Clause;

    (0..ctx.clause_db.clause_count() as u32)
        .filter(|&clause| {
            !ctx.clause_db
                .clause(clause)
                .clause()
                .satisfied_on(ctx.ledger.world())
        })
        .collect()
}

mod flips {
    use super::*;

    #[test]
    fn a_single_formula_walkthrough() {
        let mut ctx = Context::from_config(all_false_config());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        let b = ctx.fresh_atom("b", &[]).unwrap();

        let disjunction = Formula::or(vec![Formula::atom(a), Formula::atom(b)]);
        let index = ctx
            .add_formula(WeightedFormula::soft(disjunction, 2.0))
            .unwrap();

        ctx.initialize().unwrap();

        assert_eq!(ctx.ledger.uns_sum(), 2.0);
        assert_eq!(ctx.ledger.unsat_clauses().len(), 1);
        assert!(!ctx.ledger.formula_satisfied(index, &ctx.clause_db));

        let clause = ctx.ledger.unsat_clauses()[0];

        ctx.ledger.flip(a, &ctx.clause_db);
        assert_eq!(ctx.ledger.uns_sum(), 0.0);
        assert!(ctx.ledger.unsat_clauses().is_empty());
        assert!(ctx.ledger.formula_satisfied(index, &ctx.clause_db));
        assert_eq!(ctx.ledger.true_atoms_of(clause), vec![a]);
        assert_eq!(ctx.ledger.bottlenecks_of(a), vec![clause]);

        // A second true literal relieves the bottleneck.
        ctx.ledger.flip(b, &ctx.clause_db);
        assert_eq!(ctx.ledger.uns_sum(), 0.0);
        assert!(ctx.ledger.bottlenecks_of(a).is_empty());
        assert!(ctx.ledger.bottlenecks_of(b).is_empty());

        ctx.ledger.flip(a, &ctx.clause_db);
        assert_eq!(ctx.ledger.bottlenecks_of(b), vec![clause]);

        ctx.ledger.flip(b, &ctx.clause_db);
        assert_eq!(ctx.ledger.uns_sum(), 2.0);
        assert_eq!(ctx.ledger.unsat_clauses(), vec![clause]);
        assert!(ctx.ledger.true_atoms_of(clause).is_empty());
    }

    #[test]
    fn a_double_flip_restores_the_ledger() {
        let mut ctx = Context::from_config(all_false_config());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        let b = ctx.fresh_atom("b", &[]).unwrap();
        let c = ctx.fresh_atom("c", &[]).unwrap();

        let equivalence = Formula::iff(Formula::atom(a), Formula::atom(b));
        ctx.add_formula(WeightedFormula::soft(equivalence, 2.0))
            .unwrap();
        let implication = Formula::implies(Formula::atom(b), Formula::atom(c));
        ctx.add_formula(WeightedFormula::hard(implication)).unwrap();

        ctx.initialize().unwrap();

        let sum = ctx.ledger.uns_sum();
        let mut unsat = ctx.ledger.unsat_clauses().to_vec();
        unsat.sort_unstable();

        ctx.ledger.flip(b, &ctx.clause_db);
        ctx.ledger.flip(b, &ctx.clause_db);

        assert_eq!(ctx.ledger.uns_sum(), sum);
        let mut restored = ctx.ledger.unsat_clauses().to_vec();
        restored.sort_unstable();
        assert_eq!(restored, unsat);
    }

    #[test]
    fn tracked_state_matches_a_rescan() {
        let mut ctx = Context::from_config(all_false_config());
        let atoms: Vec<u32> = ["x0", "x1", "x2", "x3", "x4", "x5"]
            .iter()
            .map(|name| ctx.fresh_atom(*name, &[]).unwrap())
            .collect();
        let [x0, x1, x2, x3, x4, x5] = *atoms.as_slice() else {
            panic!("Insufficient atoms");
        };

        ctx.add_formula(WeightedFormula::hard(Formula::or(vec![
            Formula::atom(x0),
            Formula::atom(x1),
        ])))
        .unwrap();
        ctx.add_formula(WeightedFormula::soft(
            Formula::iff(Formula::atom(x0), Formula::atom(x2)),
            2.0,
        ))
        .unwrap();
        ctx.add_formula(WeightedFormula::soft(
            Formula::and(vec![
                Formula::atom(x3),
                Formula::or(vec![Formula::atom(x1), Formula::not(Formula::atom(x4))]),
            ]),
            0.5,
        ))
        .unwrap();
        ctx.add_formula(WeightedFormula::soft(
            Formula::implies(Formula::atom(x2), Formula::atom(x5)),
            4.0,
        ))
        .unwrap();

        ctx.initialize().unwrap();
        assert_eq!(ctx.ledger.hard_weight(), 7.5);

        let sequence = [x0, x2, x4, x1, x0, x5, x3, x2, x1, x4, x0, x3];
        for atom in sequence {
            ctx.ledger.flip(atom, &ctx.clause_db);

            assert_eq!(ctx.ledger.uns_sum(), recomputed_sum(&ctx));

            let mut tracked = ctx.ledger.unsat_clauses().to_vec();
            tracked.sort_unstable();
            assert_eq!(tracked, recomputed_unsat(&ctx));
        }
    }
}

mod deltas {
    use marten_mln::config::CostMethod;

    use super::*;

    #[test]
    fn single_clause_estimates_are_exact() {
        let mut ctx = Context::from_config(all_false_config());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        let b = ctx.fresh_atom("b", &[]).unwrap();
        let c = ctx.fresh_atom("c", &[]).unwrap();

        ctx.add_formula(WeightedFormula::soft(
            Formula::or(vec![Formula::atom(a), Formula::atom(b)]),
            2.0,
        ))
        .unwrap();
        ctx.add_formula(WeightedFormula::soft(
            Formula::implies(Formula::atom(a), Formula::atom(c)),
            1.0,
        ))
        .unwrap();
        ctx.add_formula(WeightedFormula::hard(Formula::or(vec![
            Formula::atom(b),
            Formula::atom(c),
        ])))
        .unwrap();

        ctx.initialize().unwrap();

        for atom in [a, c, b, a, c, a, b, c] {
            let predicted = ctx
                .ledger
                .flip_delta(atom, &ctx.clause_db, CostMethod::Hybrid);
            let before = ctx.ledger.uns_sum();
            ctx.ledger.flip(atom, &ctx.clause_db);
            assert_eq!(ctx.ledger.uns_sum() - before, predicted);
        }
    }

    #[test]
    fn formula_estimates_count_whole_weights_once() {
        let mut ctx = Context::from_config(all_false_config());
        let a = ctx.fresh_atom("a", &[]).unwrap();
        let b = ctx.fresh_atom("b", &[]).unwrap();

        // Two clauses, so satisfying one leaves the formula unsatisfied.
        ctx.add_formula(WeightedFormula::soft(
            Formula::and(vec![Formula::atom(a), Formula::atom(b)]),
            3.0,
        ))
        .unwrap();

        ctx.initialize().unwrap();
        assert_eq!(ctx.ledger.uns_sum(), 3.0);

        let by_formula = ctx
            .ledger
            .flip_delta(a, &ctx.clause_db, CostMethod::PerFormula);
        assert_eq!(by_formula, -3.0);

        let by_clause = ctx
            .ledger
            .flip_delta(a, &ctx.clause_db, CostMethod::PerClause);
        assert_eq!(by_clause, -1.5);

        // The sum does not move, as the other clause still fails.
        ctx.ledger.flip(a, &ctx.clause_db);
        assert_eq!(ctx.ledger.uns_sum(), 3.0);
    }

    #[test]
    fn the_hybrid_estimate_falls_back_on_zero() {
        let mut ctx = Context::from_config(all_false_config());
        let x = ctx.fresh_atom("x", &[]).unwrap();
        let y = ctx.fresh_atom("y", &[]).unwrap();

        ctx.add_formula(WeightedFormula::soft(Formula::atom(x), 2.0))
            .unwrap();
        ctx.add_formula(WeightedFormula::soft(
            Formula::and(vec![Formula::not(Formula::atom(x)), Formula::atom(y)]),
            2.0,
        ))
        .unwrap();

        ctx.initialize().unwrap();
        ctx.ledger.flip(x, &ctx.clause_db);

        // Flipping x loses one formula whole and gains one of two clauses of the other.
        let by_formula = ctx
            .ledger
            .flip_delta(x, &ctx.clause_db, CostMethod::PerFormula);
        assert_eq!(by_formula, 0.0);

        let by_clause = ctx
            .ledger
            .flip_delta(x, &ctx.clause_db, CostMethod::PerClause);
        assert_eq!(by_clause, 1.0);

        let hybrid = ctx.ledger.flip_delta(x, &ctx.clause_db, CostMethod::Hybrid);
        assert_eq!(hybrid, by_clause);
    }
}
