//! Execution result types for operations

/// Result of executing an operation
///
/// Distinguishes between:
/// - Applied: the operation changed state and should be audited
/// - Unchanged: a read, or a command absorbed as a no-op
/// - Failed: an infrastructure error (domain no-ops are never failures)
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    /// Operation changed state
    Applied { value: T },
    /// Operation left all observable state as it was
    Unchanged { value: T },
    /// Operation failed
    Failed { error: E },
}

impl<T, E> ExecutionResult<T, E> {
    /// Extract the result (Ok or Err)
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Applied { value } | Self::Unchanged { value } => Ok(value),
            Self::Failed { error } => Err(error),
        }
    }

    /// Whether state changed
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Whether this result belongs in the activity log
    pub fn should_log(&self) -> bool {
        self.is_applied()
    }

    /// Borrow the value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Applied { value } | Self::Unchanged { value } => Some(value),
            Self::Failed { .. } => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for ExecutionResult<T, E> {
    /// An `Err` becomes `Failed`; an `Ok` is treated as `Applied`
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Applied { value },
            Err(error) => Self::Failed { error },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_is_logged() {
        let result: ExecutionResult<u32, String> = ExecutionResult::Applied { value: 1 };
        assert!(result.should_log());
        assert_eq!(result.into_result(), Ok(1));
    }

    #[test]
    fn test_unchanged_is_not_logged() {
        let result: ExecutionResult<u32, String> = ExecutionResult::Unchanged { value: 2 };
        assert!(!result.should_log());
        assert_eq!(result.value(), Some(&2));
    }

    #[test]
    fn test_failed() {
        let result: ExecutionResult<u32, String> = ExecutionResult::Failed {
            error: "boom".into(),
        };
        assert!(!result.is_applied());
        assert_eq!(result.into_result(), Err("boom".to_string()));
    }

    #[test]
    fn test_from_result() {
        let ok: ExecutionResult<u32, String> = Ok(3).into();
        assert!(ok.is_applied());
        let err: ExecutionResult<u32, String> = Err("nope".to_string()).into();
        assert!(matches!(err, ExecutionResult::Failed { .. }));
    }
}
