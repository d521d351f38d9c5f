//! Methods to estimate the cost of a flip, passed over the clauses a flip touches.

/// Methods to estimate the change in unsatisfied weight of flipping an atom, without the flip.
///
/// The method of a run is fixed by [cost_method](crate::config::Config::cost_method) rather than varied call-by-call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CostMethod {
    /// Each touched clause contributes its owning formula's weight split evenly over the formula's clauses.
    PerClause,

    /// Each touched formula contributes its full weight, once, however many of its clauses are touched.
    PerFormula,

    /// [PerFormula](CostMethod::PerFormula), falling back to [PerClause](CostMethod::PerClause) on an estimate of exactly zero.
    ///
    /// The fallback breaks ties between atoms which change the truth value of no formula.
    #[default]
    Hybrid,
}

impl CostMethod {
    pub const MIN: Self = Self::PerClause;
    pub const MAX: Self = Self::Hybrid;
}

impl std::fmt::Display for CostMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerClause => write!(f, "PerClause"),
            Self::PerFormula => write!(f, "PerFormula"),
            Self::Hybrid => write!(f, "Hybrid"),
        }
    }
}
