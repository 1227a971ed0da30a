use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use p7m_engine::{
    convert_all, ConversionError, ConversionOutcome, EngineEvent, ProgressSink, ToolkitRunner,
    OUTPUT_DIR_NAME,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[derive(Default)]
struct TestSink {
    events: Arc<Mutex<Vec<EngineEvent>>>,
}

impl TestSink {
    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl ProgressSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Copies input to output, except for names listed in `failing`.
#[derive(Default)]
struct FakeRunner {
    failing: Vec<String>,
    calls: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl ToolkitRunner for FakeRunner {
    fn extract(&self, input: &Path, output: &Path) -> Result<(), ConversionError> {
        self.calls
            .lock()
            .unwrap()
            .push((input.to_path_buf(), output.to_path_buf()));
        let name = input.file_name().unwrap().to_string_lossy().into_owned();
        if self.failing.contains(&name) {
            return Err(ConversionError::Toolkit {
                stderr: "Error reading S/MIME message".to_string(),
            });
        }
        fs::copy(input, output)
            .map(|_| ())
            .map_err(|err| ConversionError::Unexpected(err.to_string()))
    }
}

fn inputs(root: &TempDir, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = root.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, format!("payload of {name}")).unwrap();
            path
        })
        .collect()
}

fn finished(events: &[EngineEvent]) -> Vec<&p7m_engine::ConversionResult> {
    events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::FileFinished(result) => Some(result),
            _ => None,
        })
        .collect()
}

#[test]
fn single_failure_is_isolated() {
    let root = TempDir::new().unwrap();
    let files = inputs(&root, &["a.p7m", "b.p7m", "c.p7m", "d.p7m", "e.p7m"]);
    let runner = FakeRunner {
        failing: vec!["c.p7m".to_string()],
        ..FakeRunner::default()
    };
    let sink = TestSink::default();

    let summary = convert_all(&files, &runner, OUTPUT_DIR_NAME, &sink);

    assert_eq!(summary.processed, 5);
    assert_eq!(summary.converted, 4);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.skipped, 0);

    let events = sink.take();
    let results = finished(&events);
    assert_eq!(results.len(), 5);
    let failures: Vec<_> = results
        .iter()
        .filter(|result| matches!(result.outcome, ConversionOutcome::Failed(_)))
        .collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].file_name(), "c.p7m");
    assert_eq!(failures[0].index, 2);
    assert_eq!(
        failures[0].outcome,
        ConversionOutcome::Failed(ConversionError::Toolkit {
            stderr: "Error reading S/MIME message".to_string()
        })
    );
    assert_eq!(events.last(), Some(&EngineEvent::BatchFinished { processed: 5 }));

    let out_dir = root.path().join("p7m-to-pdf");
    for name in ["a.pdf", "b.pdf", "d.pdf", "e.pdf"] {
        assert!(out_dir.join(name).is_file(), "{name} missing");
    }
    assert!(!out_dir.join("c.pdf").exists());
}

#[test]
fn results_arrive_in_input_order_with_totals() {
    let root = TempDir::new().unwrap();
    let files = inputs(&root, &["one.p7m", "two.p7m", "three.p7m"]);
    let sink = TestSink::default();

    convert_all(&files, &FakeRunner::default(), OUTPUT_DIR_NAME, &sink);

    let events = sink.take();
    let results = finished(&events);
    let order: Vec<_> = results.iter().map(|r| (r.index, r.total, r.file_name())).collect();
    assert_eq!(
        order,
        vec![
            (0, 3, "one.p7m".to_string()),
            (1, 3, "two.p7m".to_string()),
            (2, 3, "three.p7m".to_string()),
        ]
    );
    assert!(results.iter().all(|r| r.is_converted()));
}

#[test]
fn runner_gets_derived_output_paths() {
    let root = TempDir::new().unwrap();
    let files = inputs(&root, &["sub/doc.pdf.p7m", "Other.P7M"]);
    let runner = FakeRunner::default();

    convert_all(&files, &runner, OUTPUT_DIR_NAME, &TestSink::default());

    let calls = runner.calls.lock().unwrap().clone();
    assert_eq!(
        calls,
        vec![
            (
                files[0].clone(),
                root.path().join("sub").join("p7m-to-pdf").join("doc.pdf")
            ),
            (
                files[1].clone(),
                root.path().join("p7m-to-pdf").join("Other.pdf")
            ),
        ]
    );
}

#[test]
fn non_p7m_file_is_skipped_without_invoking_toolkit() {
    let root = TempDir::new().unwrap();
    let files = inputs(&root, &["notes.txt", "doc.p7m"]);
    let runner = FakeRunner::default();
    let sink = TestSink::default();

    let summary = convert_all(&files, &runner, OUTPUT_DIR_NAME, &sink);

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.converted, 1);
    assert_eq!(summary.processed, 2);
    assert_eq!(runner.calls.lock().unwrap().len(), 1);

    let events = sink.take();
    let results = finished(&events);
    assert_eq!(results[0].outcome, ConversionOutcome::Skipped);
    assert_eq!(results[0].output, None);
    assert_eq!(results[1].output_name().as_deref(), Some("doc.pdf"));
}

#[test]
fn unusable_output_dir_fails_only_that_file() {
    let root = TempDir::new().unwrap();
    let files = inputs(&root, &["blocked/doc.p7m", "fine/doc.p7m"]);
    // A plain file where the output directory should go.
    fs::write(root.path().join("blocked").join("p7m-to-pdf"), b"x").unwrap();
    let sink = TestSink::default();

    let summary = convert_all(&files, &FakeRunner::default(), OUTPUT_DIR_NAME, &sink);

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.converted, 1);
    let events = sink.take();
    let results = finished(&events);
    assert!(matches!(
        results[0].outcome,
        ConversionOutcome::Failed(ConversionError::Unexpected(_))
    ));
}

#[test]
fn empty_batch_still_reports_completion() {
    let sink = TestSink::default();
    let summary = convert_all(&[], &FakeRunner::default(), OUTPUT_DIR_NAME, &sink);

    assert_eq!(summary.processed, 0);
    assert_eq!(sink.take(), vec![EngineEvent::BatchFinished { processed: 0 }]);
}

#[test]
fn error_details_render_like_toolkit_messages() {
    assert_eq!(
        ConversionError::Toolkit {
            stderr: "bad".to_string()
        }
        .to_string(),
        "OpenSSL Error: bad"
    );
    assert_eq!(
        ConversionError::TimedOut.to_string(),
        "OpenSSL command timed out."
    );
    assert_eq!(
        ConversionError::Unexpected("boom".to_string()).to_string(),
        "Unexpected error: boom"
    );
}
