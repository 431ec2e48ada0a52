//! Extraction options.

/// Policy for handling a member that fails to write.
///
/// Parse errors are always fatal; this policy only governs filesystem
/// failures once extraction has begun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first failed member and return its error.
    ///
    /// Members already written stay on disk; nothing is rolled back.
    #[default]
    Abort,
    /// Keep extracting the remaining members.
    ///
    /// Every failure is recorded in
    /// [`ExtractResult::failures`](crate::ExtractResult::failures) with the
    /// member's name, so partial success is never silent.
    Continue,
}

impl FailurePolicy {
    /// Returns true if extraction should stop on the first failure.
    pub fn is_abort(&self) -> bool {
        matches!(self, Self::Abort)
    }
}

/// Options for extraction operations.
///
/// # Example
///
/// ```rust
/// use arex::{ExtractOptions, FailurePolicy};
///
/// let options = ExtractOptions::new().failure_policy(FailurePolicy::Continue);
/// assert_eq!(options.failure_policy, FailurePolicy::Continue);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Policy for write failures on individual members.
    pub failure_policy: FailurePolicy,
}

impl ExtractOptions {
    /// Creates options with defaults (abort on first failure).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the write-failure policy.
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_abort() {
        let options = ExtractOptions::default();
        assert!(options.failure_policy.is_abort());
    }

    #[test]
    fn test_builder() {
        let options = ExtractOptions::new().failure_policy(FailurePolicy::Continue);
        assert!(!options.failure_policy.is_abort());
    }
}
