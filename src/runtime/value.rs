use std::{fmt, rc::Rc};

use crate::runtime::{function::Function, object::Object};

/// Runtime value passed through wrappers, guards, and the registry.
///
/// Heap-backed variants use `Rc` for cheap sharing, so cloning a `Value` is
/// O(1) and two clones of the same `Array`/`Object`/`Function` observe the
/// same underlying storage. This is load-bearing for interception: argument
/// substitution must leave non-function arguments pointer-identical, and
/// chained re-interception must mutate the same `Object` the caller holds.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point number.
    Float(f64),
    /// Boolean value.
    Boolean(bool),
    /// UTF-8 string value.
    String(Rc<str>),
    /// Absence of value.
    None,
    /// Native callable with a declared parameter count.
    Function(Rc<Function>),
    /// Ordered collection of values.
    Array(Rc<Vec<Value>>),
    /// Mutable property map, used for fluent API results and the injected
    /// console object.
    Object(Rc<Object>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "\"{}\"", v),
            Value::None => write!(f, "None"),
            Value::Function(func) => write!(f, "<function {}>", func.name()),
            Value::Array(elements) => {
                let items: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            Value::Object(obj) => write!(f, "{}", obj),
        }
    }
}

impl Value {
    /// Returns the canonical runtime type label used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Int",
            Value::Float(_) => "Float",
            Value::Boolean(_) => "Bool",
            Value::String(_) => "String",
            Value::None => "None",
            Value::Function(_) => "Function",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    /// Returns whether this value is truthy.
    ///
    /// Only `Boolean(false)` and `None` are falsy; all other values are
    /// truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::None)
    }

    /// Converts a value to interpolation-friendly text.
    ///
    /// Unlike [`std::fmt::Display`], strings are returned without quotes.
    /// The console object uses this to format logged lines.
    pub fn to_string_value(&self) -> String {
        match self {
            Value::String(v) => v.to_string(),
            other => other.to_string(),
        }
    }

    /// Borrows the inner function handle, or `None` for other variants.
    pub fn as_function(&self) -> Option<&Rc<Function>> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }
}
