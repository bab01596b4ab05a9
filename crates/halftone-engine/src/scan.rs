//! Adjacency scan over a sub-zone's sorted flat projections.

use halftone_core::ZoneProjection;
use smallvec::SmallVec;

/// Indices of projections selected for painting.
///
/// Sub-zones hold short runs of flats, so the set stays inline for
/// typical inputs.
pub type PaintSet = SmallVec<[usize; 8]>;

/// Scan `sorted` (ascending by flat number, unknowns already removed)
/// and select every projection that is the earlier member of a
/// numerically-adjacent pair.
///
/// One linear pass with a single unit of lookback: each projection is
/// compared against its immediate predecessor, and the *predecessor* is
/// selected when the flat numbers differ by exactly one. A projection
/// with no qualifying successor is never selected on its own account —
/// the last projection in the sequence, and any flat without a numeric
/// neighbor above it, stay untouched.
///
/// # Examples
///
/// ```
/// use halftone_core::ZoneProjection;
/// use halftone_engine::scan::paint_set;
///
/// let flats: Vec<ZoneProjection> = ["Кв 01", "Кв 02", "Кв 04", "Кв 05", "Кв 07"]
///     .iter()
///     .map(|k| ZoneProjection::new(*k, vec![]))
///     .collect();
/// // Pairs (01,02) and (04,05) qualify; the earlier member of each is selected.
/// assert_eq!(paint_set(&flats).as_slice(), &[0, 2]);
/// ```
pub fn paint_set(sorted: &[ZoneProjection]) -> PaintSet {
    let mut selected = PaintSet::new();
    let mut previous: Option<(usize, u32)> = None;
    for (idx, projection) in sorted.iter().enumerate() {
        // Unknowns are filtered before the scan; a missing number here
        // is a caller bug, skipped rather than paint the wrong group.
        let Some(flat) = projection.flat_number() else {
            continue;
        };
        if let Some((prev_idx, prev_flat)) = previous {
            if prev_flat.abs_diff(flat) == 1 {
                selected.push(prev_idx);
            }
        }
        previous = Some((idx, flat));
    }
    selected
}
