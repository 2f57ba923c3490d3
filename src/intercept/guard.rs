use std::rc::Rc;

use crate::context::ContextHub;
use crate::diagnostics::{FailureReport, Reporter};
use crate::runtime::{function::Function, value::Value};

/// Wraps a callable in a failure boundary.
///
/// The returned function has the same name and declared arity as `func` and
/// forwards receiver and arguments unchanged. A successful call passes its
/// result through. A failing call is reported once, together with the
/// console history of `scope_key` at the moment of failure, and returns
/// `Value::None` instead of the error. Callers of a guarded function must
/// therefore tolerate a `None` result; they will never see the failure.
pub fn guard(
    func: Rc<Function>,
    reporter: Rc<dyn Reporter>,
    contexts: Rc<ContextHub>,
    scope_key: Rc<str>,
) -> Rc<Function> {
    let inner = Rc::clone(&func);
    Rc::new(Function::new(
        func.name_rc(),
        func.expected_arity(),
        move |recv, args| match inner.call(recv, args) {
            Ok(value) => Ok(value),
            Err(message) => {
                let history = contexts.history(&scope_key);
                reporter.report(FailureReport::new(message, history));
                Ok(Value::None)
            }
        },
    ))
}
