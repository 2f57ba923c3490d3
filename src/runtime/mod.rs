//! Runtime core types for dynamic callables.
//!
//! # No-Cycle Invariant
//! Runtime values are shared with `Rc`, so value graphs are expected to
//! remain acyclic. Objects are the only mutable containers; code that
//! rewrites object properties must not store a value that reaches back to
//! the object holding it. Functions capture their environment once at
//! construction and never gain references afterwards.

use crate::runtime::value::Value;

pub mod function;
pub mod object;
pub mod value;

pub type NativeFn = dyn Fn(Value, Vec<Value>) -> Result<Value, String>;
