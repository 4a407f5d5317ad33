// Integration tests for the execution adapter

use luapad::engine::sink::OutputSink;
use luapad::engine::{Executor, RunOutcome};

#[test]
fn print_fragments_arrive_in_call_order() {
    let executor = Executor::new();
    let outcome = executor.run("print(1)\nprint(2)\nprint(3)");

    assert_eq!(
        outcome,
        RunOutcome::Success {
            stdout: String::from("1\n2\n3\n"),
        }
    );
}

#[test]
fn multiple_arguments_join_with_tabs() {
    let executor = Executor::new();
    let outcome = executor.run(r#"print(1, "two", true)"#);

    assert_eq!(
        outcome,
        RunOutcome::Success {
            stdout: String::from("1\ttwo\ttrue\n"),
        }
    );
}

#[test]
fn successful_run_with_no_prints_yields_empty_stdout() {
    let executor = Executor::new();
    let outcome = executor.run("local a = 1 + 1");

    assert_eq!(
        outcome,
        RunOutcome::Success {
            stdout: String::new(),
        }
    );
}

#[test]
fn runtime_failure_maps_to_error_text() {
    let executor = Executor::new();
    let outcome = executor.run("error('boom')");

    let RunOutcome::Failure { error } = &outcome else {
        panic!("expected a failure, got {outcome:?}");
    };
    assert!(error.contains("boom"), "message was: {error}");
    assert!(!error.contains('\n'), "message should be one line: {error}");
    assert!(outcome.display_text().starts_with("Error: "));
}

#[test]
fn syntax_failure_maps_to_error_text() {
    let executor = Executor::new();
    let outcome = executor.run("print(");

    assert!(outcome.is_failure());
    assert!(outcome.display_text().starts_with("Error: "));
}

#[test]
fn failure_discards_partial_output() {
    let executor = Executor::new();
    let outcome = executor.run("print(1)\nerror('mid')");

    assert!(outcome.is_failure());
    assert!(outcome.display_text().starts_with("Error: "));
}

#[test]
fn globals_do_not_leak_between_runs() {
    let executor = Executor::new();
    executor.run("x = 1");
    let outcome = executor.run("print(x)");

    // A fresh interpreter per run: `x` must be gone.
    assert_eq!(
        outcome,
        RunOutcome::Success {
            stdout: String::from("nil\n"),
        }
    );
}

#[test]
fn compute_libraries_are_available() {
    let executor = Executor::new();
    let outcome = executor.run(r#"print(math.floor(3.7), string.upper("hi"))"#);

    assert_eq!(
        outcome,
        RunOutcome::Success {
            stdout: String::from("3\tHI\n"),
        }
    );
}

#[test]
fn sink_appends_newline_per_fragment() {
    let sink = OutputSink::new();
    sink.push("a");
    sink.push("b c");

    assert_eq!(sink.len(), 2);
    assert_eq!(sink.contents(), "a\nb c\n");
}

#[test]
fn empty_sink_renders_empty_string() {
    let sink = OutputSink::new();

    assert!(sink.is_empty());
    assert_eq!(sink.contents(), "");
}

#[test]
fn sink_handles_share_the_same_buffer() {
    let sink = OutputSink::new();
    let handle = sink.clone();
    handle.push("from the binding");

    assert_eq!(sink.contents(), "from the binding\n");
}
