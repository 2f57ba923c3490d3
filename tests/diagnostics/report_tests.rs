use std::rc::Rc;

use interpose::context::ContextHub;
use interpose::diagnostics::{CollectingReporter, FailureReport, Reporter};
use interpose::intercept::guard;
use interpose::runtime::{function::Function, value::Value};

#[test]
fn report_renders_message_only() {
    let report = FailureReport::new("division by zero", vec![]);
    insta::assert_snapshot!(report.to_string(), @"callback failed: division by zero");
}

#[test]
fn report_renders_history_block() {
    let report = FailureReport::new(
        "division by zero",
        vec!["boot".to_string(), "step 2".to_string()],
    );
    insta::assert_snapshot!(report.to_string(), @r"
    callback failed: division by zero

    History:
      boot
      step 2
    ");
}

#[test]
fn collected_reports_export_as_json() {
    let reporter = Rc::new(CollectingReporter::new());
    let contexts = Rc::new(ContextHub::new());
    contexts.scope("app").record("warmup".to_string());

    let failing = Rc::new(Function::new("cb", 0, |_, _| {
        Err("callback failed".to_string())
    }));
    let guarded = guard(
        failing,
        Rc::clone(&reporter) as Rc<dyn Reporter>,
        contexts,
        "app".into(),
    );
    guarded.call(Value::None, vec![]).unwrap();

    insta::assert_snapshot!(
        reporter.to_json().unwrap(),
        @r#"[{"message":"callback failed","history":["warmup"]}]"#
    );
}
