//! The paint pipeline: filter, nested grouping, projection, adjacency
//! scan, and field mutation.
//!
//! [`Painter`] owns a validated [`PaintSchema`] and runs the whole
//! pipeline synchronously over a mutable record snapshot. The first
//! rejected field write aborts the run; the caller's transaction is
//! responsible for rolling back anything written before the fault.

use halftone_core::{PaintError, Record, ZoneProjection};
use smallvec::SmallVec;

use crate::config::{PaintSchema, SchemaError};
use crate::group::partition_by;
use crate::metrics::PaintMetrics;
use crate::scan;

/// The classification and shading pipeline.
///
/// Construct once per schema and reuse across runs; each
/// [`paint()`](Painter::paint) call is independent and leaves no state
/// behind.
#[derive(Clone, Debug)]
pub struct Painter {
    schema: PaintSchema,
}

impl Painter {
    /// Build a painter from a schema, validating it once up front.
    pub fn new(schema: PaintSchema) -> Result<Self, SchemaError> {
        schema.validate()?;
        Ok(Self { schema })
    }

    /// The schema this painter runs with.
    pub fn schema(&self) -> &PaintSchema {
        &self.schema
    }

    /// Run the full pipeline over one record snapshot.
    ///
    /// Records whose zone field does not carry the apartment-family
    /// marker are excluded entirely. The rest are partitioned by level,
    /// block, and sub-zone; within each sub-zone the zone groups are
    /// projected into flat numbers, sorted ascending, and scanned for
    /// numerically-adjacent pairs. Every record of the earlier member
    /// of a qualifying pair gets its sub-zone-index field overwritten
    /// with `calculated-sub-zone-id + color-suffix`.
    ///
    /// The overwrite is unconditional, so rerunning against an
    /// unchanged model rewrites identical values.
    pub fn paint<R: Record>(&self, records: &mut [R]) -> Result<PaintMetrics, PaintError> {
        let mut metrics = PaintMetrics {
            records_scanned: records.len() as u64,
            ..PaintMetrics::default()
        };

        let matched: Vec<usize> = (0..records.len())
            .filter(|&idx| {
                records[idx]
                    .field(&self.schema.zone_field)
                    .contains(&self.schema.apartment_marker)
            })
            .collect();
        metrics.records_matched = matched.len() as u64;

        // Only the innermost (zone) ordering is load-bearing; the outer
        // levels are processed independently of each other.
        let by_level = partition_by(records, &matched, |r| r.field(&self.schema.level_field));
        metrics.level_groups = by_level.len() as u64;
        for level_members in by_level.values() {
            let by_block = partition_by(records, level_members, |r| {
                r.field(&self.schema.block_field)
            });
            for block_members in by_block.values() {
                let by_sub_zone = partition_by(records, block_members, |r| {
                    r.field(&self.schema.sub_zone_field)
                });
                for sub_zone_members in by_sub_zone.values() {
                    self.paint_sub_zone(records, sub_zone_members, &mut metrics)?;
                }
            }
        }

        Ok(metrics)
    }

    /// Project, sort, scan, and mutate one sub-zone's zone groups.
    fn paint_sub_zone<R: Record>(
        &self,
        records: &mut [R],
        members: &[usize],
        metrics: &mut PaintMetrics,
    ) -> Result<(), PaintError> {
        let by_zone = partition_by(records, members, |r| r.field(&self.schema.zone_field));
        metrics.zone_groups += by_zone.len() as u64;

        let mut projections: SmallVec<[ZoneProjection; 8]> = by_zone
            .into_iter()
            .map(|(key, group)| ZoneProjection::new(key, group))
            .collect();
        let total = projections.len();
        projections.retain(|p| !p.is_unknown());
        metrics.unknown_groups_dropped += (total - projections.len()) as u64;

        // Stable sort: distinct keys with equal flat numbers keep their
        // encounter order.
        projections.sort_by_key(|p| p.flat_number());

        let selected = scan::paint_set(&projections);
        metrics.adjacent_pairs += selected.len() as u64;
        for idx in selected {
            metrics.groups_painted += 1;
            for &member in projections[idx].members() {
                let value = format!(
                    "{}{}",
                    records[member].field(&self.schema.calc_sub_zone_id_field),
                    self.schema.color_suffix
                );
                records[member].set_field(&self.schema.sub_zone_index_field, &value)?;
                metrics.records_painted += 1;
            }
        }
        Ok(())
    }
}
