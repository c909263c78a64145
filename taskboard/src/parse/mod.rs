//! Forgiving input parsing for board operations
//!
//! The parser accepts multiple input formats and normalizes them to
//! canonical `ParsedOperation`s: a verb, a noun and snake_case parameters.

use crate::error::{BoardError, Result};
use serde_json::{Map, Value};
use std::fmt;

/// What an operation does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Add,
    Get,
    Update,
    Delete,
    List,
    Move,
    Tag,
    Untag,
    Select,
}

impl Verb {
    /// Resolve a verb or one of its aliases
    pub fn from_alias(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "add" | "create" | "new" => Some(Verb::Add),
            "get" | "read" | "fetch" => Some(Verb::Get),
            "update" | "edit" | "set" => Some(Verb::Update),
            "delete" | "rm" | "remove" => Some(Verb::Delete),
            "list" | "ls" | "show" => Some(Verb::List),
            "move" | "mv" => Some(Verb::Move),
            "tag" => Some(Verb::Tag),
            "untag" => Some(Verb::Untag),
            "select" | "switch" | "open" => Some(Verb::Select),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Add => "add",
            Verb::Get => "get",
            Verb::Update => "update",
            Verb::Delete => "delete",
            Verb::List => "list",
            Verb::Move => "move",
            Verb::Tag => "tag",
            Verb::Untag => "untag",
            Verb::Select => "select",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an operation acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Noun {
    Board,
    Task,
    Tasks,
    List,
    Lists,
    User,
    Users,
}

impl Noun {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "board" => Some(Noun::Board),
            "task" => Some(Noun::Task),
            "tasks" => Some(Noun::Tasks),
            "list" => Some(Noun::List),
            "lists" => Some(Noun::Lists),
            "user" => Some(Noun::User),
            "users" => Some(Noun::Users),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Noun::Board => "board",
            Noun::Task => "task",
            Noun::Tasks => "tasks",
            Noun::List => "list",
            Noun::Lists => "lists",
            Noun::User => "user",
            Noun::Users => "users",
        }
    }

    /// `list task` means `list tasks`
    fn for_verb(self, verb: Verb) -> Self {
        match (verb, self) {
            (Verb::List, Noun::Task) => Noun::Tasks,
            (Verb::List, Noun::List) => Noun::Lists,
            (Verb::List, Noun::User) => Noun::Users,
            (_, noun) => noun,
        }
    }
}

impl fmt::Display for Noun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation request after normalization
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedOperation {
    pub verb: Verb,
    pub noun: Noun,
    pub params: Map<String, Value>,
    /// Who asked, for the activity log
    pub actor: Option<String>,
}

impl ParsedOperation {
    pub fn new(verb: Verb, noun: Noun, params: Map<String, Value>) -> Self {
        Self {
            verb,
            noun: noun.for_verb(verb),
            params,
            actor: None,
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Canonical "verb noun" string
    pub fn op_string(&self) -> String {
        format!("{} {}", self.verb, self.noun)
    }
}

/// Parse input JSON into one or more operations
pub fn parse_input(input: Value) -> Result<Vec<ParsedOperation>> {
    match input {
        Value::Array(arr) => {
            // Batch operations
            arr.into_iter().map(parse_single).collect()
        }
        Value::Object(obj) => {
            // Single operation
            Ok(vec![parse_single(Value::Object(obj))?])
        }
        _ => Err(BoardError::parse("input must be an object or array")),
    }
}

/// Parse a single operation from JSON
fn parse_single(input: Value) -> Result<ParsedOperation> {
    let obj = match input {
        Value::Object(obj) => obj,
        _ => return Err(BoardError::parse("operation must be an object")),
    };

    let (verb, noun, mut params) = extract_operation(&obj)?;

    let actor = obj.get("actor").and_then(|v| v.as_str()).map(str::to_string);

    // Normalize parameters (resolve aliases, snake_case keys)
    normalize_params(&mut params);

    let mut operation = ParsedOperation::new(verb, noun, params);
    if let Some(actor) = actor {
        operation = operation.with_actor(actor);
    }

    Ok(operation)
}

/// Extract verb and noun from the input object
fn extract_operation(obj: &Map<String, Value>) -> Result<(Verb, Noun, Map<String, Value>)> {
    // Strategy 1: Explicit "op" field with "verb noun" string
    if let Some(op_value) = obj.get("op").or_else(|| obj.get("operation")) {
        let op_str = op_value
            .as_str()
            .ok_or_else(|| BoardError::parse("\"op\" must be a string"))?;
        return match parse_op_string(op_str) {
            Some((verb, noun)) => Ok((verb, noun, filter_keys(obj, &["op", "operation"]))),
            None => Err(BoardError::UnknownOperation {
                op: op_str.to_string(),
            }),
        };
    }

    // Strategy 2: Separate verb/noun fields
    if let (Some(v), Some(n)) = (obj.get("verb"), obj.get("noun")) {
        if let (Some(verb_str), Some(noun_str)) = (v.as_str(), n.as_str()) {
            return match (Verb::from_alias(verb_str), Noun::parse(noun_str)) {
                (Some(verb), Some(noun)) => Ok((verb, noun, filter_keys(obj, &["verb", "noun"]))),
                _ => Err(BoardError::UnknownOperation {
                    op: format!("{} {}", verb_str, noun_str),
                }),
            };
        }
    }

    // Strategy 3: Shorthand keys like { "add": "task", ... }
    for (key, value) in obj {
        if let Some(verb) = Verb::from_alias(key) {
            if let Some(noun) = value.as_str().and_then(Noun::parse) {
                return Ok((verb, noun, filter_keys(obj, &[key.as_str()])));
            }
        }
    }

    // Strategy 4: Infer from data
    if let Some((verb, noun)) = infer_operation(obj) {
        return Ok((verb, noun, filter_keys(obj, &[])));
    }

    Err(BoardError::parse("cannot determine operation from input"))
}

/// Parse an "op" string like "add task" into (Verb, Noun)
fn parse_op_string(s: &str) -> Option<(Verb, Noun)> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 2 {
        return None;
    }

    let verb = Verb::from_alias(parts[0])?;
    let noun = Noun::parse(parts[1])?;
    Some((verb, noun))
}

/// Infer a task operation from the data present
fn infer_operation(obj: &Map<String, Value>) -> Option<(Verb, Noun)> {
    let has_id = obj.contains_key("id") || obj.contains_key("task_id") || obj.contains_key("taskId");
    let has_title = obj.contains_key("title");
    let has_status = obj.contains_key("status") || obj.contains_key("column");

    // Has title but no id → add task
    if has_title && !has_id {
        return Some((Verb::Add, Noun::Task));
    }

    if has_id {
        let other_keys = obj
            .keys()
            .filter(|k| !matches!(k.as_str(), "id" | "task_id" | "taskId" | "actor"))
            .count();

        // Just id + status → move task
        if has_status && other_keys == 1 {
            return Some((Verb::Move, Noun::Task));
        }
        // Id + other fields → update task
        if other_keys > 0 {
            return Some((Verb::Update, Noun::Task));
        }
        // Just id → get task
        return Some((Verb::Get, Noun::Task));
    }

    // Nothing but metadata → get board
    if obj.keys().all(|k| matches!(k.as_str(), "actor" | "sort")) {
        return Some((Verb::Get, Noun::Board));
    }

    None
}

/// Copy the parameters, dropping operation keys and metadata (actor, note)
fn filter_keys(obj: &Map<String, Value>, op_keys: &[&str]) -> Map<String, Value> {
    obj.iter()
        .filter(|(k, _)| !op_keys.contains(&k.as_str()) && !matches!(k.as_str(), "actor" | "note"))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Normalize parameter keys (aliases, snake_case)
fn normalize_params(params: &mut Map<String, Value>) {
    // Key aliases
    let aliases: &[(&[&str], &str)] = &[
        (&["taskId", "task_id"], "id"),
        (&["desc", "body", "content"], "description"),
        (&["column", "col"], "status"),
        (&["assignee", "assign", "user"], "assigned_to"),
    ];

    for (from_keys, to_key) in aliases {
        for from_key in *from_keys {
            if let Some(value) = params.remove(*from_key) {
                if !params.contains_key(*to_key) {
                    params.insert(to_key.to_string(), value);
                }
            }
        }
    }

    // Convert camelCase to snake_case
    let keys_to_convert: Vec<String> = params.keys().cloned().collect();
    for key in keys_to_convert {
        let snake = to_snake_case(&key);
        if snake != key {
            if let Some(value) = params.remove(&key) {
                if !params.contains_key(&snake) {
                    params.insert(snake, value);
                }
            }
        }
    }
}

/// Simple camelCase to snake_case conversion
fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_lowercase().next().unwrap_or(c));
    }
    result
}
