//! Configuration of the reference engine.

/// Configuration consumed by the [Dpll](crate::engine::Dpll) engine.
///
/// The defaults give quick, deterministic results, which the test suite relies on.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// The probability a decision assigns true to its variable, as a value in `[0, 1]`.
    ///
    /// Values outside the range are clamped on engine construction.
    /// With the default of zero a decision always tries false first, as MiniSat does.
    pub polarity_lean: f64,

    /// The seed for the decision rng.
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            polarity_lean: 0.0,
            seed: 0,
        }
    }
}
