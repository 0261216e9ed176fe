//! Batch dispatch across a bounded pool of conversion workers.
//!
//! Conversions are spawned as independent tasks gated by a semaphore and
//! collected by awaiting the join handles in enumeration order, so the
//! result sequence mirrors discovery order even though completion order
//! is arbitrary.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crate::error::{BatchError, ConvertError, ConvertOutcome};
use crate::pipeline::discovery::SourceFile;
use crate::types::ConversionResult;

/// Runs per-file conversions across a bounded worker pool.
pub struct BatchDispatcher {
    max_workers: usize,
}

impl BatchDispatcher {
    /// Create a dispatcher bounded to `max_workers` concurrent conversions.
    pub fn new(max_workers: usize) -> Self {
        Self {
            max_workers: max_workers.max(1),
        }
    }

    /// Convert every file, invoking `on_result` once per file in
    /// enumeration order as results become available.
    ///
    /// Each conversion runs in isolation: a failure (or a panic in a
    /// codec, surfaced as a `Task` failure) never cancels siblings. The
    /// returned sequence has exactly one result per input file, in input
    /// order.
    pub async fn run<C, F>(
        &self,
        files: &[SourceFile],
        convert: C,
        mut on_result: F,
    ) -> Vec<ConversionResult>
    where
        C: Fn(&Path) -> ConvertOutcome + Send + Sync + 'static,
        F: FnMut(usize, &ConversionResult),
    {
        let semaphore = Arc::new(Semaphore::new(self.max_workers));
        let convert = Arc::new(convert);
        let mut handles: Vec<JoinHandle<ConvertOutcome>> = Vec::with_capacity(files.len());

        for file in files {
            // Admission control: the semaphore bounds in-flight
            // conversions, not submission of the remaining queue.
            let permit = match semaphore.clone().acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    tracing::warn!("Worker pool closed unexpectedly — stopping submission");
                    break;
                }
            };

            let convert = convert.clone();
            let input = file.path.clone();
            handles.push(tokio::spawn(async move {
                let worker_input = input.clone();
                let joined = tokio::task::spawn_blocking(move || convert(&worker_input)).await;
                drop(permit);
                joined.unwrap_or_else(|e| {
                    Err(ConvertError::Task {
                        path: input,
                        message: e.to_string(),
                    })
                })
            }));
        }

        let mut results = Vec::with_capacity(files.len());
        let mut handles = handles.into_iter();
        for (index, file) in files.iter().enumerate() {
            let outcome = match handles.next() {
                Some(handle) => handle.await.unwrap_or_else(|e| {
                    Err(ConvertError::Task {
                        path: file.path.clone(),
                        message: e.to_string(),
                    })
                }),
                // Submission stopped early; record the shortfall rather
                // than dropping the file from the sequence.
                None => Err(ConvertError::Task {
                    path: file.path.clone(),
                    message: "worker pool closed before submission".to_string(),
                }),
            };

            let result = ConversionResult {
                input: file.path.clone(),
                outcome,
            };
            on_result(index, &result);
            results.push(result);
        }

        results
    }
}

/// Check that the input path exists and is a directory.
pub fn ensure_input_dir(path: &Path) -> Result<(), BatchError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(BatchError::InvalidInputDir(path.to_path_buf()))
    }
}

/// Check the output path is a usable directory, creating it when allowed.
pub fn ensure_output_dir(path: &Path, create: bool) -> Result<(), BatchError> {
    if path.exists() {
        if path.is_dir() {
            Ok(())
        } else {
            Err(BatchError::InvalidOutputDir(path.to_path_buf()))
        }
    } else if create {
        std::fs::create_dir_all(path).map_err(|source| BatchError::CreateOutputDir {
            path: path.to_path_buf(),
            source,
        })
    } else {
        Err(BatchError::InvalidOutputDir(path.to_path_buf()))
    }
}
