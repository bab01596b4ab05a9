//! Core traits and types for the halftone room-shading pipeline.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the touchpoints to the host building model ([`Record`], [`Host`]),
//! the zone-key parser ([`ZoneProjection`]), and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod host;
pub mod projection;
pub mod record;

pub use error::{FieldWriteError, HostError, PaintError};
pub use host::{Host, RunStatus};
pub use projection::ZoneProjection;
pub use record::Record;
