//! Dispatch parsed operations to their typed commands

use crate::context::BoardContext;
use crate::error::{BoardError, Result};
use crate::parse::{parse_input, Noun, ParsedOperation, Verb};
use crate::processor::BoardOperationProcessor;
use crate::task::{AddTask, DeleteTask, GetTask, ListTasks, MoveTask, TagTask, UntagTask, UpdateTask};
use crate::todo_list::{AddList, DeleteList, ListLists, SelectList};
use crate::user::{AddUser, DeleteUser, ListUsers, UpdateUser};
use crate::board::GetBoard;
use serde_json::Value;
use taskboard_operations::OperationProcessor;

/// Every operation the board understands, with its parameters
#[derive(Debug, Clone)]
pub enum Command {
    AddTask(AddTask),
    UpdateTask(UpdateTask),
    DeleteTask(DeleteTask),
    MoveTask(MoveTask),
    GetTask(GetTask),
    ListTasks(ListTasks),
    TagTask(TagTask),
    UntagTask(UntagTask),
    GetBoard(GetBoard),
    AddList(AddList),
    DeleteList(DeleteList),
    SelectList(SelectList),
    ListLists(ListLists),
    AddUser(AddUser),
    UpdateUser(UpdateUser),
    DeleteUser(DeleteUser),
    ListUsers(ListUsers),
}

/// Deserialize the params into the named command variant
macro_rules! decode {
    ($op:expr, $variant:ident) => {
        serde_json::from_value(Value::Object($op.params.clone()))
            .map(Command::$variant)
            .map_err(|e| BoardError::parse(format!("{}: {}", $op.op_string(), e)))
    };
}

/// Run the processor on whichever command this is
macro_rules! dispatch {
    ($self:expr, $processor:expr, $ctx:expr, [$($variant:ident),* $(,)?]) => {
        match $self {
            $(Command::$variant(cmd) => $processor.process(cmd, $ctx),)*
        }
    };
}

impl Command {
    /// Build the typed command for a parsed operation
    pub fn from_parsed(op: &ParsedOperation) -> Result<Self> {
        match (op.verb, op.noun) {
            (Verb::Add, Noun::Task) => decode!(op, AddTask),
            (Verb::Update, Noun::Task) => decode!(op, UpdateTask),
            (Verb::Delete, Noun::Task) => decode!(op, DeleteTask),
            (Verb::Move, Noun::Task) => decode!(op, MoveTask),
            (Verb::Get, Noun::Task) => decode!(op, GetTask),
            (Verb::List, Noun::Tasks) => decode!(op, ListTasks),
            (Verb::Tag, Noun::Task) => decode!(op, TagTask),
            (Verb::Untag, Noun::Task) => decode!(op, UntagTask),
            (Verb::Get, Noun::Board) => decode!(op, GetBoard),
            (Verb::Add, Noun::List) => decode!(op, AddList),
            (Verb::Delete, Noun::List) => decode!(op, DeleteList),
            (Verb::Select, Noun::List) => decode!(op, SelectList),
            (Verb::List, Noun::Lists) => decode!(op, ListLists),
            (Verb::Add, Noun::User) => decode!(op, AddUser),
            (Verb::Update, Noun::User) => decode!(op, UpdateUser),
            (Verb::Delete, Noun::User) => decode!(op, DeleteUser),
            (Verb::List, Noun::Users) => decode!(op, ListUsers),
            _ => Err(BoardError::UnknownOperation {
                op: op.op_string(),
            }),
        }
    }

    /// Execute through a processor
    pub fn run(&self, processor: &BoardOperationProcessor, ctx: &mut BoardContext) -> Result<Value> {
        dispatch!(
            self,
            processor,
            ctx,
            [
                AddTask, UpdateTask, DeleteTask, MoveTask, GetTask, ListTasks, TagTask, UntagTask,
                GetBoard, AddList, DeleteList, SelectList, ListLists, AddUser, UpdateUser,
                DeleteUser, ListUsers,
            ]
        )
    }
}

/// Parse forgiving JSON input and run every operation in order
///
/// The whole batch is parsed before anything runs, and then runs as one
/// [`BoardContext::transaction`]: either every operation is kept and the
/// snapshot written once, or the board is left exactly as it was. Each
/// operation is attributed to its own `actor`, if it names one.
pub fn execute_input(ctx: &mut BoardContext, input: Value) -> Result<Vec<Value>> {
    let parsed = parse_input(input)?;
    let commands = parsed
        .iter()
        .map(|op| Command::from_parsed(op).map(|cmd| (cmd, op.actor.clone())))
        .collect::<Result<Vec<_>>>()?;

    ctx.transaction(|ctx| {
        let mut results = Vec::with_capacity(commands.len());
        for (command, actor) in &commands {
            let processor = match actor {
                Some(actor) => BoardOperationProcessor::with_actor(actor.clone()),
                None => BoardOperationProcessor::new(),
            };
            results.push(command.run(&processor, ctx)?);
        }
        Ok(results)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoardState, Status};
    use serde_json::json;

    #[test]
    fn test_execute_single_op() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let results = execute_input(&mut ctx, json!({"op": "move task", "id": "2", "status": "done"}))
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["status"], "done");
        assert_eq!(
            ctx.state().find_task(&"2".into()).unwrap().status,
            Status::Done
        );
    }

    #[test]
    fn test_execute_batch_in_order() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let results = execute_input(
            &mut ctx,
            json!([
                {"op": "add list", "name": "Errands"},
                {"title": "Post office", "priority": "low"},
                {"op": "list tasks"}
            ]),
        )
        .unwrap();

        assert_eq!(results[2]["count"], 1);
        assert_eq!(results[2]["tasks"][0]["title"], "Post office");
        assert_eq!(results[2]["list_id"], results[0]["id"]);
    }

    #[test]
    fn test_bad_params_reject_whole_batch() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let before = ctx.state().clone();

        let err = execute_input(
            &mut ctx,
            json!([
                {"op": "add task", "title": "Fine"},
                {"op": "move task", "id": "1", "status": "archived"}
            ]),
        )
        .unwrap_err();

        assert!(matches!(err, BoardError::Parse { .. }));
        assert_eq!(ctx.state(), &before);
    }

    #[test]
    fn test_failed_write_rolls_back_whole_batch() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("board.json");
        let mut ctx = BoardContext::open(&path, BoardState::default()).unwrap();
        std::fs::create_dir(path.with_extension("tmp")).unwrap();

        let result = execute_input(
            &mut ctx,
            json!([
                {"op": "add task", "title": "A"},
                {"op": "add task", "title": "B"}
            ]),
        );

        assert!(matches!(result, Err(BoardError::Io(_))));
        assert!(ctx.state().tasks.is_empty());
        assert!(ctx.activity(None).is_empty());

        std::fs::remove_dir(path.with_extension("tmp")).unwrap();
        let on_disk = BoardContext::open(&path, BoardState::sample()).unwrap();
        assert!(on_disk.state().tasks.is_empty());
    }

    #[test]
    fn test_batch_writes_snapshot_with_every_op() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("board.json");
        let mut ctx = BoardContext::open(&path, BoardState::default()).unwrap();

        execute_input(
            &mut ctx,
            json!([{"title": "A"}, {"title": "B"}]),
        )
        .unwrap();

        let reopened = BoardContext::open(&path, BoardState::sample()).unwrap();
        assert_eq!(reopened.state().tasks.len(), 2);
        assert_eq!(ctx.activity(None).len(), 2);
    }

    #[test]
    fn test_unknown_combination() {
        let op = ParsedOperation::new(Verb::Move, Noun::User, Default::default());
        let err = Command::from_parsed(&op).unwrap_err();
        assert!(matches!(err, BoardError::UnknownOperation { .. }));
    }

    #[test]
    fn test_camel_case_record_is_accepted() {
        let mut ctx = BoardContext::new(BoardState::sample());
        let task = serde_json::to_value(ctx.state().find_task(&"4".into()).unwrap()).unwrap();
        let mut input = task.as_object().unwrap().clone();
        input.insert("op".into(), json!("update task"));
        input.insert("title".into(), json!("Weekly groceries"));

        execute_input(&mut ctx, Value::Object(input)).unwrap();

        let stored = ctx.state().find_task(&"4".into()).unwrap();
        assert_eq!(stored.title, "Weekly groceries");
        assert_eq!(stored.assigned_to.as_ref().unwrap(), "1");
    }
}
