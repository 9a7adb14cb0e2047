//! Tunable parameters for yearly state transitions.

/// Configuration for the transition engine.
///
/// The simulation driver builds this from the `run` section of
/// `lifepath-config.yaml` and passes it into every handler.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionConfig {
    /// Standard deviation of the multiplicative noise factor (default: 0.15).
    ///
    /// Every noisy quantity is scaled by a draw from `N(1.0, noise_std)`.
    pub noise_std: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { noise_std: 0.15 }
    }
}
