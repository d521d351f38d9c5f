use crate::context::ContextState;

/// A configuration option, with bounds and the last state at which revision is supported.
#[derive(Clone)]
pub struct ConfigOption<T> {
    /// The canonical name of the option.
    pub name: &'static str,

    /// The least value the option supports.
    pub min: T,

    /// The greatest value the option supports.
    pub max: T,

    /// The last state at which revision of the option is supported.
    pub max_state: ContextState,

    /// The current value of the option.
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    /// The bounds of the option, for validating a revision.
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}
