use std::{cell::RefCell, rc::Rc};

use interpose::context::ContextHub;
use interpose::diagnostics::{CollectingReporter, Reporter};
use interpose::intercept::Interceptor;
use interpose::registry::Registry;
use interpose::runtime::{function::Function, object::Object, value::Value};

struct Harness {
    interceptor: Interceptor,
    reporter: Rc<CollectingReporter>,
    contexts: Rc<ContextHub>,
}

fn harness() -> Harness {
    let registry = Rc::new(Registry::new());
    let reporter = Rc::new(CollectingReporter::new());
    let contexts = Rc::new(ContextHub::new());
    let interceptor = Interceptor::new(
        registry,
        Rc::clone(&reporter) as Rc<dyn Reporter>,
        Rc::clone(&contexts),
        "demo-app",
    );
    Harness {
        interceptor,
        reporter,
        contexts,
    }
}

/// An event-source style API: `on` collects handlers, `fire` invokes every
/// collected handler and keeps going even when one of them misbehaves at
/// the runtime level (guards turn failures into reports).
fn bind_event_api(registry: &Registry) -> Rc<RefCell<Vec<Rc<Function>>>> {
    let handlers = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&handlers);
    let on = Function::new("on", 2, move |_, args| {
        for arg in args {
            if let Value::Function(func) = arg {
                sink.borrow_mut().push(func);
            }
        }
        Ok(Value::None)
    });

    let source = Rc::clone(&handlers);
    let fire = Function::new("fire", 1, move |_, args| {
        let event = args.into_iter().next().unwrap_or(Value::None);
        let mut delivered = 0;
        for handler in source.borrow().iter() {
            handler.call(Value::None, vec![event.clone()])?;
            delivered += 1;
        }
        Ok(Value::Integer(delivered))
    });

    let api = Object::from_entries([
        ("on".to_string(), Value::Function(Rc::new(on))),
        ("fire".to_string(), Value::Function(Rc::new(fire))),
    ]);
    registry.bind("events", Value::Object(Rc::new(api)));
    handlers
}

#[test]
fn wrapper_matches_direct_call_when_target_succeeds() {
    let h = harness();
    let join = Rc::new(Function::new("join", 2, |_, args| {
        let parts: Vec<String> = args.iter().map(Value::to_string_value).collect();
        Ok(Value::String(parts.join("-").into()))
    }));

    let wrapper = h.interceptor.intercept(Rc::clone(&join)).unwrap().unwrap();
    let args = vec![Value::String("a".into()), Value::Integer(2)];
    assert_eq!(
        wrapper.call(Value::None, args.clone()).unwrap(),
        join.call(Value::None, args).unwrap()
    );
}

#[test]
fn failing_handler_no_longer_halts_dispatch() {
    let h = harness();
    bind_event_api(h.interceptor.registry());
    h.interceptor.intercept("events.on").unwrap();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let good = Function::new("good", 1, move |_, mut args| {
        sink.borrow_mut().push(args.pop().unwrap_or(Value::None));
        Ok(Value::None)
    });
    let bad = Function::new("bad", 1, |_, _| Err("handler exploded".to_string()));

    let on = h.interceptor.registry().resolve_function("events.on").unwrap();
    on.call(Value::None, vec![Value::Function(Rc::new(bad))])
        .unwrap();
    on.call(Value::None, vec![Value::Function(Rc::new(good))])
        .unwrap();

    let fire = h
        .interceptor
        .registry()
        .resolve_function("events.fire")
        .unwrap();
    let delivered = fire
        .call(Value::None, vec![Value::String("click".into())])
        .unwrap();

    // Both handlers ran: the failing one was absorbed and reported, the
    // healthy one still saw the event.
    assert_eq!(delivered, Value::Integer(2));
    assert_eq!(*seen.borrow(), vec![Value::String("click".into())]);
    assert_eq!(h.reporter.len(), 1);
    assert_eq!(h.reporter.reports()[0].message, "handler exploded");
}

#[test]
fn uninstrumented_handlers_still_crash_dispatch() {
    let h = harness();
    let handlers = bind_event_api(h.interceptor.registry());

    // No interception: a failing handler takes the whole dispatch down.
    handlers.borrow_mut().push(Rc::new(Function::new(
        "bad",
        1,
        |_, _| Err("handler exploded".to_string()),
    )));
    let fire = h
        .interceptor
        .registry()
        .resolve_function("events.fire")
        .unwrap();
    let err = fire
        .call(Value::None, vec![Value::String("click".into())])
        .unwrap_err();
    assert_eq!(err, "handler exploded");
    assert!(h.reporter.is_empty());
}

#[test]
fn name_list_targets_are_independent() {
    let h = harness();
    let counter = Rc::new(RefCell::new(0));

    for name in ["foo", "bar"] {
        let count = Rc::clone(&counter);
        let func = Function::new(name, 2, move |_, args| {
            for arg in args {
                if let Value::Function(callback) = arg {
                    callback.call(Value::None, vec![])?;
                }
            }
            *count.borrow_mut() += 1;
            Ok(Value::None)
        });
        h.interceptor
            .registry()
            .bind(name, Value::Function(Rc::new(func)));
    }

    assert!(h.interceptor.intercept("foo, bar").unwrap().is_none());

    let failing = || {
        Rc::new(Function::new("cb", 0, |_, _| {
            Err("late callback failure".to_string())
        }))
    };
    for name in ["foo", "bar"] {
        let wrapper = h.interceptor.registry().resolve_function(name).unwrap();
        wrapper
            .call(Value::None, vec![Value::Function(failing())])
            .unwrap();
    }

    assert_eq!(*counter.borrow(), 2);
    assert_eq!(h.reporter.len(), 2);
}

#[test]
fn context_injection_end_to_end() {
    let h = harness();
    let main = Function::new("main", 1, |_, args| {
        let Some(Value::Object(console)) = args.into_iter().next() else {
            return Err("expected console object".to_string());
        };
        let Some(Value::Function(log)) = console.get("log") else {
            return Err("console without log".to_string());
        };
        log.call(Value::None, vec![Value::String("booted".into())])?;
        Ok(Value::Boolean(true))
    });

    let wrapper = h.interceptor.intercept(Rc::new(main)).unwrap().unwrap();
    assert_eq!(wrapper.call(Value::None, vec![]).unwrap(), Value::Boolean(true));
    assert_eq!(h.contexts.history("demo-app"), vec!["booted".to_string()]);
}

#[test]
fn failure_reports_carry_console_history() {
    let h = harness();

    // A program logs some lines through the injected console...
    let main = Function::new("main", 1, |_, args| {
        let Some(Value::Object(console)) = args.into_iter().next() else {
            return Err("expected console object".to_string());
        };
        let Some(Value::Function(log)) = console.get("log") else {
            return Err("console without log".to_string());
        };
        log.call(Value::None, vec![Value::String("step one".into())])?;
        log.call(Value::None, vec![Value::String("step two".into())])?;
        Ok(Value::None)
    });
    let wrapper = h.interceptor.intercept(Rc::new(main)).unwrap().unwrap();
    wrapper.call(Value::None, vec![]).unwrap();

    // ...then a guarded callback fails later. The report includes the
    // history recorded up to that point.
    let failing = Rc::new(Function::new("cb", 0, |_, _| Err("crashed".to_string())));
    let guarded = h.interceptor.guard(failing);
    assert_eq!(guarded.call(Value::None, vec![]).unwrap(), Value::None);

    let reports = h.reporter.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].message, "crashed");
    assert_eq!(
        reports[0].history,
        vec!["step one".to_string(), "step two".to_string()]
    );
}
