/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [initialization](crate::context::GenericContext::initialize)
    pub const INITIALIZE: &str = "initialize";

    /// Logs related to [flips](crate::db::ledger::Ledger::flip)
    pub const FLIP: &str = "flip";

    /// Logs related to the [ledger](crate::db::ledger)
    pub const LEDGER: &str = "ledger";

    /// Logs related to a [search](crate::context::GenericContext::search)
    pub const SEARCH: &str = "search";

    /// Logs related to [sampling](crate::context::GenericContext::sample)
    pub const MCSAT: &str = "mcsat";
}
