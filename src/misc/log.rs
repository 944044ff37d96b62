/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made where the facade interacts with the engine.
No log implementation is provided.
For details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [solver facade](crate::solver).
    pub const SOLVER: &str = "solver";

    /// Logs related to [clause building](crate::solver::Solver::add_clause).
    pub const BUILDER: &str = "builder";

    /// Logs related to the [reference engine](crate::engine::Dpll).
    pub const ENGINE: &str = "engine";
}
