use std::{fmt, rc::Rc};

use crate::runtime::{NativeFn, value::Value};

/// A named native callable with a declared parameter count.
///
/// `expected_arity` is the number of parameters the callable declares, not a
/// limit enforced at call time: callers may pass any number of arguments and
/// the underlying closure decides what to do with them. The declared count
/// exists so it can be inspected without invoking the function, which is how
/// the interceptor recognizes the context-injection calling convention
/// (one declared parameter, zero actual arguments).
pub struct Function {
    name: Rc<str>,
    expected_arity: usize,
    func: Box<NativeFn>,
}

impl Function {
    pub fn new(
        name: impl Into<Rc<str>>,
        expected_arity: usize,
        func: impl Fn(Value, Vec<Value>) -> Result<Value, String> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            expected_arity,
            func: Box::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_rc(&self) -> Rc<str> {
        Rc::clone(&self.name)
    }

    pub fn expected_arity(&self) -> usize {
        self.expected_arity
    }

    /// Invokes the callable with a receiver and an argument vector.
    ///
    /// `recv` is the `this`-context of the call; pass `Value::None` when the
    /// call has no receiver.
    pub fn call(&self, recv: Value, args: Vec<Value>) -> Result<Value, String> {
        (self.func)(recv, args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Function({}/{})", self.name, self.expected_arity)
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.expected_arity == other.expected_arity
    }
}
