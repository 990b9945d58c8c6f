//! # Background Conversion
//!
//! Runs [`convert`] on a worker thread so the caller stays responsive.
//! Progress strings arrive over a channel; cancellation takes effect at the
//! next pipeline stage boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use mesh_ingest::LoaderRegistry;

use crate::convert::{convert, ConversionOutcome, ConversionRequest};
use crate::error::{ConvertError, ConvertResult};

/// Handle to a conversion running on a worker thread.
pub struct ConversionHandle {
    progress: Receiver<String>,
    cancel: Arc<AtomicBool>,
    worker: JoinHandle<ConvertResult<ConversionOutcome>>,
}

impl ConversionHandle {
    /// Progress messages, in order. The channel closes when the worker ends.
    pub fn progress(&self) -> &Receiver<String> {
        &self.progress
    }

    /// Asks the worker to stop at the next stage boundary.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Returns true once the worker has finished.
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Waits for the worker and returns its result.
    pub fn join(self) -> ConvertResult<ConversionOutcome> {
        self.worker
            .join()
            .map_err(|_| ConvertError::WorkerPanicked)?
    }
}

/// Starts `request` on a new thread.
///
/// # Example
///
/// ```rust,no_run
/// use converter::{spawn_conversion, ConversionRequest, MeshSource};
/// use mesh_ingest::LoaderRegistry;
///
/// let request = ConversionRequest::new(MeshSource::File("hull.stl".into()), "hull.json");
/// let handle = spawn_conversion(request, LoaderRegistry::with_defaults());
/// for message in handle.progress() {
///     println!("{message}");
/// }
/// let outcome = handle.join()?;
/// println!("{} blocks", outcome.stats.final_voxels);
/// # Ok::<(), converter::ConvertError>(())
/// ```
pub fn spawn_conversion(request: ConversionRequest, registry: LoaderRegistry) -> ConversionHandle {
    let (sender, progress) = mpsc::channel();
    let cancel = Arc::new(AtomicBool::new(false));
    let worker_cancel = Arc::clone(&cancel);

    let worker = thread::spawn(move || {
        let result = convert(&request, &registry, &sender, Some(worker_cancel));
        if let Err(err) = &result {
            log::debug!("background conversion ended with: {err}");
        }
        result
    });

    ConversionHandle {
        progress,
        cancel,
        worker,
    }
}
