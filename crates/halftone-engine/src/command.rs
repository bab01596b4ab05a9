//! Host-facing command wrapper: fetch, transaction, error reporting.

use halftone_core::{Host, RunStatus};

use crate::config::{PaintSchema, SchemaError};
use crate::metrics::PaintMetrics;
use crate::paint::Painter;

/// One-shot command that runs the paint pipeline against a host model.
///
/// Mirrors the flow the host expects from a plugin command: fetch the
/// room snapshot, run the pipeline inside the host's atomic
/// transaction, and on any fatal error let the transaction roll back,
/// report once to the operator, and signal failure.
///
/// # Examples
///
/// ```
/// use halftone_core::Record;
/// use halftone_engine::{PaintCommand, PaintSchema};
/// use halftone_test_utils::{apartment, MockHost};
///
/// let mut host = MockHost::new(vec![
///     apartment("1", "A", "X", "Квартира 03", "S1"),
///     apartment("1", "A", "X", "Квартира 04", "S2"),
/// ]);
/// let command = PaintCommand::new(PaintSchema::default()).unwrap();
/// let status = command.execute(&mut host);
/// assert!(status.is_success());
/// assert_eq!(host.record(0).field("ROM_Подзона_Index"), "S1.Полутон");
/// ```
#[derive(Clone, Debug)]
pub struct PaintCommand {
    painter: Painter,
}

impl PaintCommand {
    /// Build the command, validating the schema up front.
    pub fn new(schema: PaintSchema) -> Result<Self, SchemaError> {
        Ok(Self {
            painter: Painter::new(schema)?,
        })
    }

    /// Run the pipeline against `host`.
    ///
    /// Returns [`RunStatus::Succeeded`] with the run's metrics once the
    /// transaction commits. On any fatal error the host has already
    /// rolled the model back to its pre-run state; the error is
    /// reported to the operator exactly once and
    /// [`RunStatus::Failed`] is returned.
    pub fn execute<H: Host>(&self, host: &mut H) -> RunStatus<PaintMetrics> {
        let transaction_name = self.painter.schema().transaction_name.clone();
        let outcome = host.run_in_transaction(&transaction_name, |model| {
            let mut records = model.fetch_rooms()?;
            self.painter.paint(&mut records)
        });
        match outcome {
            Ok(metrics) => RunStatus::Succeeded(metrics),
            Err(err) => {
                let title = self.painter.schema().error_title.clone();
                host.report_error(&title, &err.to_string());
                RunStatus::Failed
            }
        }
    }
}
