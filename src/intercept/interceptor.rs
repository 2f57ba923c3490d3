use std::{fmt, rc::Rc};

use crate::context::ContextHub;
use crate::diagnostics::Reporter;
use crate::intercept::{guard::guard, target};
use crate::registry::Registry;
use crate::runtime::{function::Function, value::Value};

use super::Target;

/// Builds and installs interception wrappers.
///
/// The interceptor itself is a cheap handle: all collaborators live behind
/// `Rc`, and every wrapper closure holds its own clone, so wrappers stay
/// valid for the life of the program regardless of what happens to the
/// handle they were built from.
#[derive(Clone)]
pub struct Interceptor {
    registry: Rc<Registry>,
    reporter: Rc<dyn Reporter>,
    contexts: Rc<ContextHub>,
    scope_key: Rc<str>,
}

impl Interceptor {
    pub fn new(
        registry: Rc<Registry>,
        reporter: Rc<dyn Reporter>,
        contexts: Rc<ContextHub>,
        scope_key: &str,
    ) -> Self {
        Self {
            registry,
            reporter,
            contexts,
            scope_key: scope_key.into(),
        }
    }

    pub fn registry(&self) -> &Rc<Registry> {
        &self.registry
    }

    /// Intercepts a target without result chaining.
    ///
    /// Name targets are resolved through the registry and the wrapper is
    /// installed back at the same path; the wrapper is also returned. A
    /// name-string carrying separators, or an explicit name list, recurses
    /// per element and returns `Ok(None)` since each element installs its
    /// own wrapper as a side effect. Direct function targets have no
    /// location to install into, so the wrapper is only returned.
    pub fn intercept(&self, target: impl Into<Target>) -> Result<Option<Rc<Function>>, String> {
        self.apply(target.into(), Vec::new())
    }

    /// Intercepts a target and re-intercepts named properties of results.
    ///
    /// `result_keys` is a space-separated list of property names. Whenever
    /// the wrapper's delegated call returns an object, each named property
    /// that holds a function is replaced with an intercepted version before
    /// the result reaches the caller.
    pub fn intercept_chained(
        &self,
        target: impl Into<Target>,
        result_keys: &str,
    ) -> Result<Option<Rc<Function>>, String> {
        let chain: Vec<String> = result_keys.split_whitespace().map(str::to_string).collect();
        self.apply(target.into(), chain)
    }

    /// Wraps a single callable in the failure boundary.
    pub fn guard(&self, func: Rc<Function>) -> Rc<Function> {
        guard(
            func,
            Rc::clone(&self.reporter),
            Rc::clone(&self.contexts),
            Rc::clone(&self.scope_key),
        )
    }

    fn apply(&self, target: Target, chain: Vec<String>) -> Result<Option<Rc<Function>>, String> {
        match target {
            Target::Name(name) if target::is_name_list(&name) => {
                // List recursion installs each element separately; chain
                // keys apply only to a single resolved target.
                for part in target::split_names(&name) {
                    self.apply(Target::Name(part), Vec::new())?;
                }
                Ok(None)
            }
            Target::Names(names) => {
                for name in names {
                    self.apply(Target::Name(name), Vec::new())?;
                }
                Ok(None)
            }
            Target::Name(name) => {
                let previous = self.registry.resolve_function(&name)?;
                let wrapper = self.wrap(previous, chain);
                self.registry
                    .install(&name, Value::Function(Rc::clone(&wrapper)))?;
                Ok(Some(wrapper))
            }
            Target::Function(func) => Ok(Some(self.wrap(func, chain))),
        }
    }

    /// Builds the wrapper for one callable.
    ///
    /// The closure owns the only retained reference to the original; no
    /// setup state outlives construction.
    fn wrap(&self, previous: Rc<Function>, chain: Vec<String>) -> Rc<Function> {
        let this = self.clone();
        let inner = Rc::clone(&previous);
        Rc::new(Function::new(
            previous.name_rc(),
            previous.expected_arity(),
            move |recv, mut args| {
                // One declared parameter and zero actual arguments is the
                // context-injection convention: hand the original a console
                // object and skip argument wrapping entirely.
                if inner.expected_arity() == 1 && args.is_empty() {
                    return this.contexts.inject(&inner, &this.scope_key);
                }

                // Every slot is visited; a fresh guard per function argument
                // per call, nothing cached across calls.
                for slot in args.iter_mut().rev() {
                    if let Value::Function(callback) = slot {
                        let guarded = this.guard(Rc::clone(callback));
                        *slot = Value::Function(guarded);
                    }
                }

                // The delegated call itself is not guarded; its failures
                // belong to the wrapper's caller.
                let result = inner.call(recv, args)?;

                if let Value::Object(obj) = &result {
                    for key in &chain {
                        if let Some(Value::Function(member)) = obj.get(key) {
                            obj.set(key.as_str(), Value::Function(this.wrap(member, Vec::new())));
                        }
                    }
                }
                Ok(result)
            },
        ))
    }
}

impl fmt::Debug for Interceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interceptor(scope: {})", self.scope_key)
    }
}
