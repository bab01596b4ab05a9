//! Per-run counters for the paint pipeline.
//!
//! [`PaintMetrics`] is populated during one [`Painter::paint`] call and
//! returned to the host on success, giving telemetry over classification
//! and mutation volume without changing pipeline behavior.
//!
//! [`Painter::paint`]: crate::paint::Painter::paint

/// Counters collected during a single pipeline run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaintMetrics {
    /// Records in the host snapshot before filtering.
    pub records_scanned: u64,
    /// Records whose zone field carried the apartment-family marker.
    pub records_matched: u64,
    /// Level groups formed from the matched records.
    pub level_groups: u64,
    /// Zone groups formed across all sub-zones (known and unknown).
    pub zone_groups: u64,
    /// Zone groups dropped because their key carried no flat number.
    pub unknown_groups_dropped: u64,
    /// Numerically-adjacent flat pairs found across all sub-zones.
    pub adjacent_pairs: u64,
    /// Zone groups whose records were painted.
    pub groups_painted: u64,
    /// Individual records painted.
    pub records_painted: u64,
}
