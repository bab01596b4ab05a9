//! Encounter-ordered partitioning used at every grouping level.

use halftone_core::Record;
use indexmap::IndexMap;

/// Partition `indices` into groups keyed by `key_of`, preserving
/// encounter order both among keys and within each group.
///
/// The same function serves all four grouping levels (level, block,
/// sub-zone, zone); the outer three levels only need each group to be
/// processed independently, but deterministic iteration keeps runs
/// reproducible and tests simple.
pub fn partition_by<R, F>(records: &[R], indices: &[usize], key_of: F) -> IndexMap<String, Vec<usize>>
where
    R: Record,
    F: Fn(&R) -> String,
{
    let mut groups: IndexMap<String, Vec<usize>> = IndexMap::new();
    for &idx in indices {
        let key = key_of(&records[idx]);
        groups.entry(key).or_default().push(idx);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use halftone_test_utils::MockRecord;

    fn records(levels: &[&str]) -> Vec<MockRecord> {
        levels
            .iter()
            .copied()
            .map(|lvl| MockRecord::new().with_field("Level", lvl))
            .collect()
    }

    #[test]
    fn groups_preserve_encounter_order() {
        let recs = records(&["2", "1", "2", "3", "1"]);
        let indices: Vec<usize> = (0..recs.len()).collect();
        let groups = partition_by(&recs, &indices, |r| r.field("Level"));

        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, ["2", "1", "3"]);
        assert_eq!(groups["2"], vec![0, 2]);
        assert_eq!(groups["1"], vec![1, 4]);
        assert_eq!(groups["3"], vec![3]);
    }

    #[test]
    fn missing_field_groups_under_empty_key() {
        let recs = vec![MockRecord::new(), MockRecord::new().with_field("Level", "1")];
        let indices = vec![0, 1];
        let groups = partition_by(&recs, &indices, |r| r.field("Level"));
        assert_eq!(groups[""], vec![0]);
        assert_eq!(groups["1"], vec![1]);
    }

    #[test]
    fn empty_index_slice_yields_no_groups() {
        let recs = records(&["1"]);
        let groups = partition_by(&recs, &[], |r| r.field("Level"));
        assert!(groups.is_empty());
    }
}
