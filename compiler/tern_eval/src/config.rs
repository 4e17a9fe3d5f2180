//! Evaluator configuration.

/// What integer arithmetic does when the mathematical result does not fit in
/// an `i64`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Two's-complement wraparound, the native machine behavior.
    #[default]
    Wrapping,
    /// Produce an `integer overflow in <operation>` error.
    Checked,
}

impl OverflowPolicy {
    /// Pick the result for this policy. `None` from `checked` means overflow.
    #[inline]
    pub(crate) fn select(self, checked: Option<i64>, wrapped: i64) -> Option<i64> {
        match self {
            OverflowPolicy::Wrapping => Some(wrapped),
            OverflowPolicy::Checked => checked,
        }
    }
}

/// Settings shared by every evaluation an [`Evaluator`](crate::Evaluator) performs.
///
/// Division by zero is an error under every policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EvalConfig {
    pub overflow: OverflowPolicy,
    /// Grow the stack on demand while recursing into expressions.
    pub grow_stack: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            overflow: OverflowPolicy::default(),
            grow_stack: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wraps_and_grows() {
        let config = EvalConfig::default();
        assert_eq!(config.overflow, OverflowPolicy::Wrapping);
        assert!(config.grow_stack);
    }

    #[test]
    fn wrapping_ignores_checked_result() {
        assert_eq!(OverflowPolicy::Wrapping.select(None, i64::MIN), Some(i64::MIN));
        assert_eq!(OverflowPolicy::Wrapping.select(Some(3), 3), Some(3));
    }

    #[test]
    fn checked_reports_overflow() {
        assert_eq!(OverflowPolicy::Checked.select(None, i64::MIN), None);
        assert_eq!(OverflowPolicy::Checked.select(Some(3), 3), Some(3));
    }
}
