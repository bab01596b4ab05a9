//! Halftone: an apartment adjacency shading pipeline for building models.
//!
//! Scans a model's room records, groups them level → block → sub-zone →
//! zone, parses each zone key into a flat number, and tags the rooms of
//! the lower flat of every numerically-adjacent pair with a derived
//! shading value. The host application owns the records, the
//! transaction, and the operator UI; this workspace owns the
//! classification and mutation logic.
//!
//! # Quick start
//!
//! ```rust
//! use halftone::prelude::*;
//! use halftone_test_utils::{apartment, MockHost};
//!
//! // Two flats 03 and 04 share a sub-zone: 03 is the lower member of
//! // an adjacent pair, so its rooms get the shading tag.
//! let mut host = MockHost::new(vec![
//!     apartment("1", "A", "X", "Квартира 03", "S1"),
//!     apartment("1", "A", "X", "Квартира 04", "S2"),
//! ]);
//!
//! let command = PaintCommand::new(PaintSchema::default()).unwrap();
//! let status = command.execute(&mut host);
//!
//! assert!(status.is_success());
//! assert_eq!(host.record(0).field("ROM_Подзона_Index"), "S1.Полутон");
//! assert_eq!(host.record(1).field("ROM_Подзона_Index"), "");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `halftone-core` | `Record`/`Host` traits, `ZoneProjection`, error taxonomy |
//! | [`engine`] | `halftone-engine` | `Painter` pipeline, `PaintSchema`, `PaintCommand`, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core traits, the zone-key parser, and error types (`halftone-core`).
pub use halftone_core as types;

/// The grouping/adjacency/mutation engine (`halftone-engine`).
pub use halftone_engine as engine;

/// Common imports for typical halftone usage.
///
/// ```rust
/// use halftone::prelude::*;
/// ```
pub mod prelude {
    // Core traits and types
    pub use halftone_core::{Host, Record, RunStatus, ZoneProjection};

    // Errors
    pub use halftone_core::{FieldWriteError, HostError, PaintError};

    // Engine
    pub use halftone_engine::{PaintCommand, PaintMetrics, PaintSchema, Painter, SchemaError};
}
