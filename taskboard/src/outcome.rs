//! Shorthands for building operation results

use crate::error::BoardError;
use serde::Serialize;
use serde_json::{json, Value};
use taskboard_operations::ExecutionResult;

pub(crate) type Outcome = ExecutionResult<Value, BoardError>;

/// State changed; report `value`
pub(crate) fn applied(value: Value) -> Outcome {
    ExecutionResult::Applied { value }
}

/// State changed; report a record
pub(crate) fn applied_record<T: Serialize>(record: &T) -> Outcome {
    serde_json::to_value(record).map_err(BoardError::from).into()
}

/// Nothing changed (a read)
pub(crate) fn read<T: Serialize>(value: &T) -> Outcome {
    match serde_json::to_value(value) {
        Ok(value) => ExecutionResult::Unchanged { value },
        Err(e) => ExecutionResult::Failed { error: e.into() },
    }
}

/// The command was absorbed as a no-op
pub(crate) fn ignored(op: &str, reason: &str) -> Outcome {
    tracing::debug!(op, reason, "operation ignored");
    ExecutionResult::Unchanged {
        value: json!({ "changed": false, "reason": reason }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_applied_record_serializes() {
        let result = applied_record(&json!({ "id": "1" }));
        assert!(result.is_applied());
        assert_eq!(result.into_result().unwrap()["id"], "1");
    }

    #[test]
    fn test_applied_record_failure() {
        // JSON object keys must be strings
        let record: HashMap<Vec<u8>, u8> = HashMap::from([(vec![1], 1)]);
        let result = applied_record(&record);
        assert!(matches!(result, ExecutionResult::Failed { error: BoardError::Json(_) }));
    }

    #[test]
    fn test_ignored_reports_reason() {
        let result = ignored("add task", "empty title");
        assert!(!result.should_log());
        assert_eq!(result.into_result().unwrap(), json!({ "changed": false, "reason": "empty title" }));
    }
}
