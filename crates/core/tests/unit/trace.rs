//! Trace-file streaming tests.
//!
//! Exercises the fail-fast reader against real files: well-formed traces,
//! malformed lines with their reported line numbers, and missing files.

use std::io::Write;

use tempfile::NamedTempFile;
use vmsim_core::common::data::AccessType;
use vmsim_core::common::error::SimError;
use vmsim_core::sim::trace::TraceReader;

fn trace_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write trace");
    file
}

#[test]
fn streams_a_well_formed_file() {
    let file = trace_file("0 R\n1000 W\nABCD1234 R\n");
    let reader = TraceReader::from_path(file.path()).expect("open");
    let events: Result<Vec<_>, _> = reader.collect();
    let events = events.expect("all lines valid");
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].addr.val(), 0);
    assert_eq!(events[1].op, AccessType::Write);
    assert_eq!(events[2].addr.val(), 0xABCD_1234);
}

#[test]
fn empty_file_yields_no_events() {
    let file = trace_file("");
    let reader = TraceReader::from_path(file.path()).expect("open");
    assert_eq!(reader.count(), 0);
}

#[test]
fn malformed_line_reports_its_number() {
    let file = trace_file("0 R\n1000 W\nnot a line\n");
    let reader = TraceReader::from_path(file.path()).expect("open");
    let results: Vec<_> = reader.collect();
    assert!(results[0].is_ok());
    assert!(results[1].is_ok());
    match &results[2] {
        Err(SimError::Parse { line, .. }) => assert_eq!(*line, 3),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn blank_line_is_malformed() {
    let file = trace_file("0 R\n\n1000 W\n");
    let reader = TraceReader::from_path(file.path()).expect("open");
    let results: Vec<_> = reader.collect();
    assert!(results[1].is_err());
}

#[test]
fn missing_file_is_an_io_error() {
    let err = TraceReader::from_path("/nonexistent/trace.dat");
    assert!(matches!(err, Err(SimError::Io(_))));
}

#[test]
fn windows_line_endings_are_accepted() {
    let file = trace_file("0 R\r\n1000 W\r\n");
    let reader = TraceReader::from_path(file.path()).expect("open");
    let events: Result<Vec<_>, _> = reader.collect();
    assert_eq!(events.expect("valid").len(), 2);
}
