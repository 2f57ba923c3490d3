//! Context injection and console history.
//!
//! A function that declares exactly one parameter and is invoked with no
//! arguments is asking for a console-like helper object. The hub hands out
//! one console scope per key, so every injection under the same key shares
//! a single history buffer, and failure reports can include the lines
//! logged before the failure.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::runtime::{function::Function, object::Object, value::Value};


/// One history buffer, shared by every console object built for its key.
#[derive(Debug)]
pub struct ConsoleScope {
    key: Rc<str>,
    entries: RefCell<Vec<String>>,
}

impl ConsoleScope {
    fn new(key: &str) -> Self {
        Self {
            key: key.into(),
            entries: RefCell::new(Vec::new()),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn record(&self, line: String) {
        self.entries.borrow_mut().push(line);
    }

    /// Snapshot of the recorded lines, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

#[derive(Debug, Default)]
pub struct ContextHub {
    scopes: RefCell<HashMap<String, Rc<ConsoleScope>>>,
}

impl ContextHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scope for `key`, creating it on first use.
    pub fn scope(&self, key: &str) -> Rc<ConsoleScope> {
        Rc::clone(
            self.scopes
                .borrow_mut()
                .entry(key.to_string())
                .or_insert_with(|| Rc::new(ConsoleScope::new(key))),
        )
    }

    /// Invokes `func` with the console object for `key` as its sole argument.
    pub fn inject(&self, func: &Function, key: &str) -> Result<Value, String> {
        let console = console_object(self.scope(key));
        func.call(Value::None, vec![console])
    }

    /// History snapshot for `key`; empty when the scope was never created.
    pub fn history(&self, key: &str) -> Vec<String> {
        self.scopes
            .borrow()
            .get(key)
            .map(|scope| scope.entries())
            .unwrap_or_default()
    }
}

fn channel_fn(name: &'static str, prefix: &'static str, scope: Rc<ConsoleScope>) -> Value {
    Value::Function(Rc::new(Function::new(name, 1, move |_, args| {
        let line: Vec<String> = args.iter().map(Value::to_string_value).collect();
        scope.record(format!("{}{}", prefix, line.join(" ")));
        Ok(Value::None)
    })))
}

/// Builds the injected console object for a scope.
///
/// `log` records lines verbatim, `error` records them with an `error:`
/// prefix, and `history` returns the recorded lines as an array.
pub fn console_object(scope: Rc<ConsoleScope>) -> Value {
    let history_scope = Rc::clone(&scope);
    let history = Value::Function(Rc::new(Function::new("history", 0, move |_, _| {
        let entries: Vec<Value> = history_scope
            .entries()
            .into_iter()
            .map(|line| Value::String(line.into()))
            .collect();
        Ok(Value::Array(Rc::new(entries)))
    })));
    Value::Object(Rc::new(Object::from_entries([
        ("log".to_string(), channel_fn("log", "", Rc::clone(&scope))),
        ("error".to_string(), channel_fn("error", "error: ", scope)),
        ("history".to_string(), history),
    ])))
}
