//! Grouping, adjacency scanning, and shading mutation engine.
//!
//! The pipeline takes a snapshot of room records, partitions it through
//! four nested grouping levels (level → block → sub-zone → zone),
//! parses each zone key into a flat number, and tags the rooms of the
//! lower flat of every numerically-adjacent pair with a derived shading
//! value. [`Painter`] is the pipeline itself; [`PaintCommand`] wraps it
//! in the host's fetch / transaction / error-report flow.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod config;
pub mod group;
pub mod metrics;
pub mod paint;
pub mod scan;

pub use command::PaintCommand;
pub use config::{PaintSchema, SchemaError};
pub use metrics::PaintMetrics;
pub use paint::Painter;
