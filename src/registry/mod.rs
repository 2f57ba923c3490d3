//! Name resolution and callable replacement.
//!
//! The registry maps root binding names to values and resolves dotted paths
//! by walking object properties, so `"$.fn.on"` names the `on` property of
//! the object at the `fn` property of the root binding `$`. Installing at a
//! path replaces the named slot in place, which is how a wrapper takes the
//! position of the callable it intercepts.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::runtime::{function::Function, value::Value};

pub mod path;


#[derive(Debug, Default)]
pub struct Registry {
    root: RefCell<HashMap<String, Value>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines or replaces a root binding.
    pub fn bind(&self, name: impl Into<String>, value: Value) {
        self.root.borrow_mut().insert(name.into(), value);
    }

    /// Resolves a dotted path to the value it names.
    pub fn resolve(&self, target: &str) -> Result<Value, String> {
        let segments = path::segments(target)?;
        let (first, rest) = segments.split_first().unwrap_or((&"", &[]));
        let mut current = self
            .root
            .borrow()
            .get(*first)
            .cloned()
            .ok_or_else(|| format!("unknown binding: {}", first))?;
        for segment in rest {
            current = match current {
                Value::Object(obj) => obj
                    .get(segment)
                    .ok_or_else(|| format!("missing property {} in {}", segment, target))?,
                other => {
                    return Err(format!(
                        "cannot traverse {} through {} in {}",
                        segment,
                        other.type_name(),
                        target
                    ));
                }
            };
        }
        Ok(current)
    }

    /// Resolves a dotted path and checks that it names a function.
    pub fn resolve_function(&self, target: &str) -> Result<Rc<Function>, String> {
        match self.resolve(target)? {
            Value::Function(func) => Ok(func),
            other => Err(format!(
                "{} names a {}, expected a Function",
                target,
                other.type_name()
            )),
        }
    }

    /// Replaces the value at a dotted path.
    ///
    /// Single-segment paths replace root bindings; longer paths replace a
    /// property of the object the parent path resolves to. The parent must
    /// already exist.
    pub fn install(&self, target: &str, value: Value) -> Result<(), String> {
        let segments = path::segments(target)?;
        if let [name] = segments.as_slice() {
            self.root.borrow_mut().insert(name.to_string(), value);
            return Ok(());
        }
        let (last, parent) = segments.split_last().unwrap_or((&"", &[]));
        let parent_path = parent.join(".");
        match self.resolve(&parent_path)? {
            Value::Object(obj) => {
                obj.set(*last, value);
                Ok(())
            }
            other => Err(format!(
                "cannot install {} on {} at {}",
                last,
                other.type_name(),
                parent_path
            )),
        }
    }
}
