use std::path::{Path, PathBuf};

use p7m_logging::{p7m_error, p7m_info, p7m_warn};
use thiserror::Error;

use crate::naming::{output_dir_for, output_file_name};
use crate::persist::ensure_output_dir;
use crate::{
    BatchSummary, ConversionOutcome, ConversionResult, EngineEvent, ProgressSink, ToolkitRunner,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("OpenSSL Error: {stderr}")]
    Toolkit { stderr: String },
    #[error("OpenSSL command timed out.")]
    TimedOut,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Converts every file in order. A failing file is reported and the batch
/// moves on; nothing already written is rolled back.
///
/// Emits one [`EngineEvent::FileFinished`] per file, then
/// [`EngineEvent::BatchFinished`].
pub fn convert_all(
    files: &[PathBuf],
    runner: &dyn ToolkitRunner,
    output_dir_name: &str,
    sink: &dyn ProgressSink,
) -> BatchSummary {
    let total = files.len();
    let mut summary = BatchSummary {
        processed: total,
        ..BatchSummary::default()
    };

    for (index, source) in files.iter().enumerate() {
        let result = convert_one(index, total, source, runner, output_dir_name);
        match result.outcome {
            ConversionOutcome::Converted => summary.converted += 1,
            ConversionOutcome::Skipped => summary.skipped += 1,
            ConversionOutcome::Failed(_) => summary.failed += 1,
        }
        sink.emit(EngineEvent::FileFinished(result));
    }

    p7m_info!(
        "Batch finished: {} processed, {} converted, {} skipped, {} failed",
        summary.processed,
        summary.converted,
        summary.skipped,
        summary.failed
    );
    sink.emit(EngineEvent::BatchFinished { processed: total });
    summary
}

pub fn convert_one(
    index: usize,
    total: usize,
    source: &Path,
    runner: &dyn ToolkitRunner,
    output_dir_name: &str,
) -> ConversionResult {
    let mut result = ConversionResult {
        index,
        total,
        source: source.to_path_buf(),
        output: None,
        outcome: ConversionOutcome::Skipped,
    };

    let output_dir = output_dir_for(source, output_dir_name);
    if let Err(err) = ensure_output_dir(&output_dir) {
        p7m_error!("Error converting {:?}: {}", source, err);
        result.outcome = ConversionOutcome::Failed(ConversionError::Unexpected(err.to_string()));
        return result;
    }

    let Some(output_name) = source
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(output_file_name)
    else {
        p7m_warn!("Skipping non-.p7m file: {}", result.file_name());
        return result;
    };

    let output = output_dir.join(output_name);
    result.outcome = match runner.extract(source, &output) {
        Ok(()) => {
            p7m_info!("Successfully converted {:?}", source);
            ConversionOutcome::Converted
        }
        Err(err) => {
            p7m_error!("Error converting {:?}: {}", source, err);
            ConversionOutcome::Failed(err)
        }
    };
    result.output = Some(output);
    result
}
