//! Full Pipeline Integration Tests
//!
//! Tests the path from a raised error to its summary and stack trace:
//! error capture -> frame records -> describe_error / render_trace.

use readable::{config, CallType, Frame, Readable, Throwable, Value};
use regex::Regex;
use serial_test::serial;

/// Restores the default shared configuration when dropped
struct ResetOnDrop;

impl Drop for ResetOnDrop {
    fn drop(&mut self) {
        config::reset();
    }
}

/// Records frames the way a call-stack capture facility would.
struct TraceTest {
    frames: Vec<Frame>,
}

impl TraceTest {
    fn new() -> Self {
        TraceTest { frames: Vec::new() }
    }

    #[track_caller]
    fn enter(&mut self, function: &str, args: Vec<Value>) {
        let caller = std::panic::Location::caller();
        self.frames.insert(
            0,
            Frame::new()
                .with_file(caller.file(), caller.line())
                .with_method("TraceTest", CallType::Instance, function)
                .with_args(args),
        );
    }

    fn outer(&mut self, arg: &str) -> Result<(), Throwable> {
        self.enter("inner", vec![Value::from(arg)]);
        self.inner(arg)
    }

    fn inner(&mut self, arg: &str) -> Result<(), Throwable> {
        self.enter("{closure}", Vec::new());
        let frames = self.frames.clone();
        let closure = move || Err(Throwable::new("Exception", format!("got {}", arg)).with_trace(frames));
        closure()
    }
}

/// Turn a trace pattern with `*` wildcards into an anchored regex.
fn trace_pattern(expected: &str) -> Regex {
    let escaped = regex::escape(expected).replace(r"\*", ".*");
    Regex::new(&format!("^{}$", escaped)).unwrap()
}

fn raise() -> Throwable {
    let mut test = TraceTest::new();
    test.enter("outer", vec![Value::from("hello")]);
    match test.outer("hello") {
        Err(error) => error,
        Ok(()) => panic!("expected an error"),
    }
}

/// Test: error summary
#[test]
fn test_pipeline_error_summary() {
    let error = raise();
    let summary = Readable::default().describe_error(&error);

    let pattern = Regex::new(r"^Exception with message: got hello in .*full_pipeline\.rs\(\d+\)$")
        .unwrap();
    assert!(pattern.is_match(&summary), "{}", summary);
}

/// Test: stack trace format
#[test]
fn test_pipeline_stack_trace() {
    let error = raise();
    let trace = Readable::default().render_trace(&error, true, false);

    let expected = "\
1. *full_pipeline.rs:* TraceTest->{closure}()
2. *full_pipeline.rs:* TraceTest->inner(\"hello\")
3. *full_pipeline.rs:* TraceTest->outer(\"hello\")";

    assert!(trace_pattern(expected).is_match(&trace), "{}", trace);
}

/// Test: trace without parameters, relative to the configured root
#[test]
#[serial]
fn test_pipeline_shared_configuration() {
    let error = raise();
    let file = error.trace[0].file.clone().unwrap_or_default();
    let root = file.trim_end_matches("full_pipeline.rs").to_string();

    let _reset = ResetOnDrop;
    config::set_root_path(root);
    let trace = readable::render_trace(&error, false, true);

    let expected = "\
1. full_pipeline.rs:* TraceTest->{closure}()
2. full_pipeline.rs:* TraceTest->inner()
3. full_pipeline.rs:* TraceTest->outer()";

    assert!(trace_pattern(expected).is_match(&trace), "{}", trace);
}

/// Test: frames survive conversion to keyed records
#[test]
fn test_pipeline_frame_records() {
    let error = raise();
    let readable = Readable::default();

    let records = Value::Array(readable::Array::list(
        error.trace.iter().map(Value::from).collect(),
    ));

    assert_eq!(
        readable.render_trace(&records, true, false),
        readable.render_trace(&error, true, false)
    );
}
