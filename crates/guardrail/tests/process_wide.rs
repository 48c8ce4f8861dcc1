//! Process-wide installs. Kept in one test so nothing else in this binary
//! observes the swapped globals.

#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use guardrail::config::{self, Settings};
use guardrail::report::{self, Reporter, COMPILED_IN};
use guardrail::signal::{self, SignalHandler};
use guardrail::sink::buffer_sink;
use guardrail::{assumes, ErrorKind};
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn installs_replace_process_wide_collaborators() {
    let saved = config::current();

    config::install(Settings {
        diagnostics: false,
        debug_signal: true,
    });
    assert!(!config::current().diagnostics);
    assert!(!report::global().is_enabled());

    config::install(Settings::default());
    assert_eq!(config::current(), Settings::default());
    assert_eq!(report::global().is_enabled(), COMPILED_IN);

    // A reporter installed by hand is used by the macros...
    report::install(Reporter::new(buffer_sink(), true));
    let installed = report::global();
    guardrail::report_fail!("{0} evicted", "entry");
    let expected: Vec<String> = if COMPILED_IN {
        vec!["entry evicted".into()]
    } else {
        Vec::new()
    };
    assert_eq!(installed.sink().lines(), expected);

    // ...until new settings rebuild it.
    config::install(Settings::default());
    assert!(!Arc::ptr_eq(&installed, &report::global()));

    signal::install(SignalHandler::recording());
    let err = assumes::is_true(false, "ledger out of balance").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InternalError);
    assert_eq!(
        signal::current().recorded(),
        vec!["ledger out of balance".to_string()]
    );

    config::install(Settings {
        diagnostics: true,
        debug_signal: false,
    });
    let _ = assumes::is_true(false, "not signalled");
    assert_eq!(signal::current().recorded().len(), 1);

    signal::install(SignalHandler::Tracing);
    config::install(saved);
}
