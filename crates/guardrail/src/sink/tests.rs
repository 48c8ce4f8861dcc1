use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_sink_captures_lines_and_assertions_separately() {
    let sink = buffer_sink();
    sink.write_line("first");
    sink.assertion_failed("second");
    assert_eq!(sink.lines(), vec!["first".to_string()]);
    assert_eq!(sink.assertions(), vec!["second".to_string()]);
}

#[test]
fn buffer_sink_clear_empties_both_channels() {
    let sink = buffer_sink();
    sink.write_line("a");
    sink.assertion_failed("a");
    sink.clear();
    assert!(sink.lines().is_empty());
    assert!(sink.assertions().is_empty());
}

#[test]
fn silent_sink_discards_output() {
    let sink = silent_sink();
    sink.write_line("hello");
    sink.assertion_failed("hello");
    assert!(sink.lines().is_empty());
    assert!(sink.assertions().is_empty());
}

#[test]
fn tracing_sink_does_not_capture() {
    let sink = tracing_sink();
    sink.write_line("hello");
    sink.assertion_failed("hello");
    sink.clear(); // Should not panic
    assert!(sink.lines().is_empty());
}

#[test]
fn buffer_sink_is_thread_safe() {
    use std::thread;

    let sink = buffer_sink();
    let sink2 = Arc::clone(&sink);

    let t1 = thread::spawn(move || {
        for _ in 0..100 {
            sink2.write_line("a");
        }
    });

    for _ in 0..100 {
        sink.write_line("b");
    }

    t1.join().unwrap();

    assert_eq!(sink.lines().len(), 200);
}
