//! Reusable record fixtures.
//!
//! Builders for the two record shapes most tests need: an
//! apartment-family room with the full production field set, and a
//! non-apartment room that the pipeline must ignore.

use crate::MockRecord;

/// An apartment-family room record with the production field names.
///
/// `zone` is the raw zone key (e.g. `"Квартира 03"`); `calc_id` is the
/// calculated sub-zone id the shading value derives from. The
/// sub-zone-index write target starts unset.
pub fn apartment(level: &str, block: &str, sub_zone: &str, zone: &str, calc_id: &str) -> MockRecord {
    MockRecord::new()
        .with_field("ROM_Зона", zone)
        .with_field("Level", level)
        .with_field("BS_Блок", block)
        .with_field("ROM_Подзона", sub_zone)
        .with_field("ROM_Расчетная_подзона_ID", calc_id)
}

/// A room outside the apartment zone family (same field set, zone key
/// without the family marker). Must never be grouped, parsed, or
/// painted, regardless of its key shape.
pub fn non_apartment(level: &str, block: &str, sub_zone: &str, zone: &str) -> MockRecord {
    MockRecord::new()
        .with_field("ROM_Зона", zone)
        .with_field("Level", level)
        .with_field("BS_Блок", block)
        .with_field("ROM_Подзона", sub_zone)
        .with_field("ROM_Расчетная_подзона_ID", "unused")
}
