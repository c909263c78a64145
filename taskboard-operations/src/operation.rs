//! The Operation and Execute traits

use crate::{ExecutionResult, ParamMeta};
use serde_json::{json, Value};

/// Metadata every operation carries; implemented by `#[operation]`
pub trait Operation {
    /// The verb, e.g. "add"
    fn verb(&self) -> &'static str;

    /// The noun, e.g. "task"
    fn noun(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Canonical "verb noun" string
    fn op_string(&self) -> &'static str;

    /// Reads never change state and are never logged
    fn is_read_only(&self) -> bool {
        false
    }

    /// Parameter metadata derived from the struct's fields
    fn parameters(&self) -> &'static [ParamMeta];

    /// Describe the operation as JSON (for catalogs and help output)
    fn describe(&self) -> Value {
        json!({
            "op": self.op_string(),
            "verb": self.verb(),
            "noun": self.noun(),
            "description": self.description(),
            "read_only": self.is_read_only(),
            "parameters": self.parameters(),
        })
    }
}

/// Run an operation against a context
///
/// Execution is synchronous and takes the context exclusively: every
/// operation is one complete transformation of the state.
pub trait Execute<C, E> {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;
}
