use super::*;
use crate::config::{with_settings, Settings};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};

fn signals_on() -> Settings {
    Settings {
        diagnostics: true,
        debug_signal: true,
    }
}

#[test]
fn recording_handler_receives_message() {
    let handler = Arc::new(SignalHandler::recording());
    with_settings(signals_on(), || {
        with_handler(Arc::clone(&handler), || raise("broken"));
    });
    assert_eq!(handler.recorded(), vec!["broken".to_string()]);
}

#[test]
fn disabled_setting_suppresses_signal() {
    let handler = Arc::new(SignalHandler::recording());
    let quiet = Settings {
        debug_signal: false,
        ..signals_on()
    };
    with_settings(quiet, || {
        with_handler(Arc::clone(&handler), || raise("broken"));
    });
    assert!(handler.recorded().is_empty());
}

#[test]
fn custom_callback_is_invoked() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);
    let handler = Arc::new(SignalHandler::custom(|_| {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }));
    with_settings(signals_on(), || {
        with_handler(handler, || raise("x"));
    });
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);
}

#[test]
fn panicking_handler_is_contained() {
    let handler = Arc::new(SignalHandler::custom(|message| panic!("handler blew up: {message}")));
    with_settings(signals_on(), || {
        with_handler(handler, || raise("x"));
    });
}

#[test]
fn override_is_restored_after_scope() {
    let handler = Arc::new(SignalHandler::Silent);
    with_handler(Arc::clone(&handler), || {
        assert!(Arc::ptr_eq(&current(), &handler));
    });
    assert!(!Arc::ptr_eq(&current(), &handler));
}

#[test]
fn non_recording_handlers_report_nothing() {
    assert!(SignalHandler::Tracing.recorded().is_empty());
    assert!(SignalHandler::Silent.recorded().is_empty());
    assert_eq!(
        format!("{:?}", SignalHandler::recording()),
        "SignalHandler::Recording(0 messages)"
    );
}
