//! The [`Record`] trait: the pipeline's only touchpoint to host data.

use crate::error::FieldWriteError;

/// A handle onto one spatial "room" element owned by the host model.
///
/// Records carry a loosely-typed bag of named string fields. The
/// pipeline reads and writes fields strictly by name and never creates
/// or destroys records; identity is whatever the host's handle equality
/// says it is.
///
/// Implementations are expected to be cheap handles — a run holds a
/// materialized `Vec` of them for its whole duration.
pub trait Record {
    /// Current string value of the named field.
    ///
    /// Returns the empty string if the field is absent or unset; a
    /// missing field must never fail.
    fn field(&self, name: &str) -> String;

    /// Set the named field's string value.
    ///
    /// May fail for a read-only or type-mismatched field. Such a
    /// failure is fatal for the whole run: the caller propagates it and
    /// the surrounding transaction rolls back every mutation attempted
    /// so far.
    fn set_field(&mut self, name: &str, value: &str) -> Result<(), FieldWriteError>;
}
