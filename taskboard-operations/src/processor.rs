//! Operation processors wrap execution with cross-cutting concerns

use crate::{Execute, Operation};
use serde::Serialize;
use serde_json::Value;

/// Executes operations against a context, adding auditing and persistence
/// around the bare `Execute` call
pub trait OperationProcessor<C, E> {
    fn process<O>(&self, operation: &O, ctx: &mut C) -> Result<Value, E>
    where
        O: Operation + Execute<C, E> + Serialize;
}
