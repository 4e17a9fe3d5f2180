//! `EvaluatorBuilder` for creating `Evaluator` instances with non-default settings.

use super::Evaluator;
use crate::{EvalConfig, OverflowPolicy};

/// Builder for creating Evaluator instances with various configurations.
///
/// ```text
/// let evaluator = Evaluator::builder()
///     .overflow(OverflowPolicy::Checked)
///     .build();
/// ```
#[derive(Clone, Debug, Default)]
pub struct EvaluatorBuilder {
    config: EvalConfig,
}

impl EvaluatorBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the integer overflow policy.
    #[must_use]
    pub fn overflow(mut self, policy: OverflowPolicy) -> Self {
        self.config.overflow = policy;
        self
    }

    /// Enable or disable on-demand stack growth.
    ///
    /// Disabled, deep trees recurse on the host stack and overflow it.
    #[must_use]
    pub fn grow_stack(mut self, grow: bool) -> Self {
        self.config.grow_stack = grow;
        self
    }

    /// Replace every setting at once.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Evaluator {
        Evaluator::new(self.config)
    }
}
