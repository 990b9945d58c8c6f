//! # Progress Reporting
//!
//! One-way sink for human-readable status strings emitted at pipeline
//! checkpoints. Sinks are purely observational: a failing or slow consumer
//! never changes the result of a conversion.

use std::sync::mpsc::Sender;

/// Receives status messages from the pipeline.
pub trait ProgressSink {
    /// Reports a status message.
    fn report(&self, message: &str);
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _message: &str) {}
}

/// Forwards messages to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&self, message: &str) {
        log::info!("{message}");
    }
}

/// Adapts a closure into a progress sink.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use voxel_core::{FnProgress, ProgressSink};
///
/// let seen = RefCell::new(Vec::new());
/// let sink = FnProgress(|m: &str| seen.borrow_mut().push(m.to_string()));
/// sink.report("rasterizing");
/// assert_eq!(seen.borrow().as_slice(), ["rasterizing"]);
/// ```
pub struct FnProgress<F>(pub F);

impl<F: Fn(&str)> ProgressSink for FnProgress<F> {
    fn report(&self, message: &str) {
        (self.0)(message)
    }
}

impl ProgressSink for Sender<String> {
    fn report(&self, message: &str) {
        // A dropped receiver only means nobody is listening any more
        let _ = self.send(message.to_string());
    }
}

impl<P: ProgressSink + ?Sized> ProgressSink for &P {
    fn report(&self, message: &str) {
        (**self).report(message)
    }
}
