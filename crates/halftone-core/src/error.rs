//! Error types for the halftone pipeline.
//!
//! Organized by subsystem: field writes (host parameter storage), host
//! record enumeration, and the run-level [`PaintError`] that wraps both.
//! Unparseable zone keys are deliberately absent here — a classification
//! miss is an expected outcome, not an error (the projection simply
//! carries no flat number).

use std::error::Error;
use std::fmt;

/// A field write was rejected by the host.
///
/// Raised by [`Record::set_field`](crate::record::Record::set_field)
/// for read-only or type-mismatched fields. Fatal for the whole run:
/// the surrounding transaction must roll back every mutation already
/// attempted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldWriteError {
    /// Name of the field that rejected the write.
    pub field: String,
    /// Host-supplied description of the rejection.
    pub reason: String,
}

impl fmt::Display for FieldWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}' rejected write: {}", self.field, self.reason)
    }
}

impl Error for FieldWriteError {}

/// Record enumeration failed on the host side.
///
/// Returned by [`Host::fetch_rooms`](crate::host::Host::fetch_rooms)
/// when the model cannot produce a stable snapshot of room records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostError {
    /// Host-supplied description of the failure.
    pub reason: String,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host record enumeration failed: {}", self.reason)
    }
}

impl Error for HostError {}

/// Fatal error for a single pipeline run.
///
/// Any variant aborts the run: no partial mutations may persist, so the
/// host rolls the transaction back as a unit and reports the failure to
/// the operator. The pipeline performs no retries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintError {
    /// A field write was rejected mid-mutation.
    FieldWrite(FieldWriteError),
    /// Room records could not be enumerated.
    Fetch(HostError),
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldWrite(e) => write!(f, "paint aborted: {e}"),
            Self::Fetch(e) => write!(f, "paint aborted: {e}"),
        }
    }
}

impl Error for PaintError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FieldWrite(e) => Some(e),
            Self::Fetch(e) => Some(e),
        }
    }
}

impl From<FieldWriteError> for PaintError {
    fn from(e: FieldWriteError) -> Self {
        Self::FieldWrite(e)
    }
}

impl From<HostError> for PaintError {
    fn from(e: HostError) -> Self {
        Self::Fetch(e)
    }
}
