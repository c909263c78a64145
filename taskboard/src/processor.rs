//! Board operation processor
//!
//! Wraps every execution with timing, activity logging and the snapshot
//! write. Only applied operations are logged and persisted, and each runs in
//! a [`BoardContext::transaction`] so a failed write leaves no trace.

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{Execute, LogEntry, Operation, OperationProcessor};

/// Processor for board operations
#[derive(Debug, Clone, Default)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
}

impl BoardOperationProcessor {
    /// Create a processor with no actor attribution
    pub fn new() -> Self {
        Self { actor: None }
    }

    /// Create a processor that attributes every entry to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

impl OperationProcessor<BoardContext, BoardError> for BoardOperationProcessor {
    fn process<O>(&self, operation: &O, ctx: &mut BoardContext) -> Result<Value>
    where
        O: Operation + Execute<BoardContext, BoardError> + Serialize,
    {
        ctx.transaction(|ctx| {
            let start = Instant::now();
            let result = operation.execute(ctx);
            let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            if result.should_log() {
                let input = serde_json::to_value(operation)?;
                let output = result.value().cloned().unwrap_or(Value::Null);

                let mut entry = LogEntry::new(operation.op_string(), input, output, duration_ms);
                if let Some(actor) = &self.actor {
                    entry = entry.with_actor(actor.clone());
                }
                ctx.append_activity(entry);
                ctx.mark_dirty();

                tracing::info!(
                    op = operation.op_string(),
                    actor = self.actor.as_deref().unwrap_or("-"),
                    duration_ms,
                    "operation applied"
                );
            } else {
                tracing::debug!(op = operation.op_string(), duration_ms, "operation left state unchanged");
            }

            result.into_result()
        })
    }
}
