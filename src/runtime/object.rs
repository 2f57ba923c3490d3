use std::{cell::RefCell, collections::HashMap, fmt};

use crate::runtime::value::Value;

/// Mutable property map shared behind `Rc`.
///
/// Properties use interior mutability because chained re-interception
/// replaces function-valued properties on a result object in place, after
/// the object has already been built and possibly shared.
#[derive(Debug, Default, PartialEq)]
pub struct Object {
    properties: RefCell<HashMap<String, Value>>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self {
            properties: RefCell::new(entries.into_iter().collect()),
        }
    }

    /// Returns a clone of the named property, or `None` when absent.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.properties.borrow().get(key).cloned()
    }

    pub fn set(&self, key: impl Into<String>, value: Value) {
        self.properties.borrow_mut().insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.properties.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.properties.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.borrow().is_empty()
    }

    /// Property names in sorted order, for deterministic display and tests.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.properties.borrow().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties = self.properties.borrow();
        let mut items: Vec<String> = properties
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect();
        items.sort();
        write!(f, "{{{}}}", items.join(", "))
    }
}
