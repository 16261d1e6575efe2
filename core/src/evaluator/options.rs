/// Default nesting limit: the root invocation runs at depth 0, so up to 11
/// frames execute before the guard trips.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Configuration options for evaluation.
///
/// # Example
///
/// ```
/// use rulecraft_core::evaluator::EvaluatorOptions;
///
/// let options = EvaluatorOptions { max_depth: 32 };
/// assert_eq!(EvaluatorOptions::default().max_depth, 10);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Deepest nesting at which an invocation still executes. Deeper
    /// invocations evaluate to `Error("TOO DEEP")`.
    ///
    /// Default: 10
    pub max_depth: usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
