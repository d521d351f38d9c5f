/*!
Reports for the context.
*/

pub mod marginals;

/// High-level reports regarding a search.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// Every clause of the context was satisfied, so the best world has cost zero.
    Satisfied,

    /// The move budget was spent with some clause unsatisfied.
    StepLimit,

    /// The time allowed was spent with some clause unsatisfied.
    TimeLimit,

    /// The walk was terminated by callback with some clause unsatisfied.
    Terminated,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfied => write!(f, "Satisfied"),
            Self::StepLimit => write!(f, "StepLimit"),
            Self::TimeLimit => write!(f, "TimeLimit"),
            Self::Terminated => write!(f, "Terminated"),
        }
    }
}
