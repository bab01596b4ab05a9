//! The [`Host`] trait: capabilities the building-model application
//! provides to the pipeline, and the [`RunStatus`] returned to it.
//!
//! The pipeline never manages the transaction lifecycle itself. It
//! hands the whole run to [`Host::run_in_transaction`] and relies on
//! the host to make the mutations atomic: on failure the model is
//! restored to its pre-run state before the call returns.

use crate::error::{HostError, PaintError};
use crate::record::Record;

/// Host-provided capabilities consumed by the pipeline.
///
/// Concrete implementations live outside this workspace (the building
/// modeler's plugin layer); [`halftone-test-utils`] provides a mock for
/// testing.
///
/// [`halftone-test-utils`]: https://docs.rs/halftone-test-utils
pub trait Host {
    /// The host's record handle type.
    type Record: Record;

    /// Every room record currently in the model, as a materialized
    /// snapshot that stays stable for the duration of one run.
    fn fetch_rooms(&mut self) -> Result<Vec<Self::Record>, HostError>;

    /// Execute `action` atomically against the model.
    ///
    /// On `Ok`, every mutation performed by `action` becomes permanent.
    /// On `Err`, the host must roll back all mutations `action`
    /// attempted before returning the error. The pipeline supplies the
    /// transaction `name` for the host's undo history.
    fn run_in_transaction<T>(
        &mut self,
        name: &str,
        action: impl FnOnce(&mut Self) -> Result<T, PaintError>,
    ) -> Result<T, PaintError>;

    /// Surface a fatal error to the operator.
    ///
    /// Invoked at most once per failed run, after the transaction has
    /// rolled back.
    fn report_error(&mut self, title: &str, message: &str);
}

/// Binary outcome of one pipeline run, returned to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunStatus<M> {
    /// All qualifying mutations were applied and committed.
    Succeeded(M),
    /// The run aborted; the transaction rolled back and the error was
    /// reported to the operator.
    Failed,
}

impl<M> RunStatus<M> {
    /// True if the run committed.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}
