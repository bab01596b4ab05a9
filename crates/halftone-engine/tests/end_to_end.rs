//! Integration test: full fetch → group → scan → mutate flow through
//! the host command wrapper.

use halftone_core::Record;
use halftone_engine::{PaintCommand, PaintSchema};
use halftone_test_utils::{apartment, non_apartment, MockHost, MockRecord};

/// Two rooms share level "1", block "A", sub-zone "X" with zone keys
/// "Кв 03" and "Кв 04": the lower flat's room gets the shading tag,
/// the higher one stays untouched.
#[test]
fn adjacent_pair_tags_lower_flat() {
    let mut host = MockHost::new(vec![
        apartment("1", "A", "X", "Кв 03", "S1"),
        apartment("1", "A", "X", "Кв 04", "S2"),
    ]);
    let schema = PaintSchema {
        apartment_marker: "Кв".into(),
        ..PaintSchema::default()
    };
    let command = PaintCommand::new(schema).unwrap();

    let status = command.execute(&mut host);

    assert!(status.is_success());
    assert_eq!(host.record(0).field("ROM_Подзона_Index"), "S1.Полутон");
    assert_eq!(host.record(1).field("ROM_Подзона_Index"), "");
    assert_eq!(host.last_transaction(), Some("FillColorTransaction"));
    assert!(host.reported().is_empty());
}

#[test]
fn gapped_flat_sequence_tags_pair_starts_only() {
    // Flats 1,2,4,5,7 in one sub-zone: qualifying pairs are (1,2) and
    // (4,5); flats 2, 5, 7 are never the earlier member of a pair.
    let mut host = MockHost::new(vec![
        apartment("1", "A", "X", "Квартира 01", "K1"),
        apartment("1", "A", "X", "Квартира 02", "K2"),
        apartment("1", "A", "X", "Квартира 04", "K4"),
        apartment("1", "A", "X", "Квартира 05", "K5"),
        apartment("1", "A", "X", "Квартира 07", "K7"),
    ]);
    let command = PaintCommand::new(PaintSchema::default()).unwrap();

    let status = command.execute(&mut host);
    assert!(status.is_success());

    assert_eq!(host.record(0).field("ROM_Подзона_Index"), "K1.Полутон");
    assert_eq!(host.record(1).field("ROM_Подзона_Index"), "");
    assert_eq!(host.record(2).field("ROM_Подзона_Index"), "K4.Полутон");
    assert_eq!(host.record(3).field("ROM_Подзона_Index"), "");
    assert_eq!(host.record(4).field("ROM_Подзона_Index"), "");
}

#[test]
fn non_apartment_rooms_are_ignored_whatever_their_key() {
    // The corridor's key even ends in two digits adjacent to flat 03;
    // it still must not participate.
    let mut host = MockHost::new(vec![
        apartment("1", "A", "X", "Квартира 03", "S1"),
        non_apartment("1", "A", "X", "Коридор 04"),
        non_apartment("1", "A", "X", "МОП"),
    ]);
    let command = PaintCommand::new(PaintSchema::default()).unwrap();

    let status = command.execute(&mut host);
    assert!(status.is_success());

    for i in 0..host.record_count() {
        assert_eq!(host.record(i).field("ROM_Подзона_Index"), "");
    }
}

#[test]
fn unknown_keys_drop_out_without_breaking_the_scan() {
    // The unparseable key sits between flats 01 and 02 in encounter
    // order; the numeric sequence still pairs (01,02).
    let mut host = MockHost::new(vec![
        apartment("1", "A", "X", "Квартира 01", "S1"),
        apartment("1", "A", "X", "Квартира без номера", "S9"),
        apartment("1", "A", "X", "Квартира 02", "S2"),
    ]);
    let command = PaintCommand::new(PaintSchema::default()).unwrap();

    let status = command.execute(&mut host);
    assert!(status.is_success());

    assert_eq!(host.record(0).field("ROM_Подзона_Index"), "S1.Полутон");
    assert_eq!(host.record(1).field("ROM_Подзона_Index"), "");
    assert_eq!(host.record(2).field("ROM_Подзона_Index"), "");
}

#[test]
fn metrics_reflect_the_run() {
    use halftone_core::RunStatus;

    let mut host = MockHost::new(vec![
        apartment("1", "A", "X", "Квартира 01", "S1"),
        apartment("1", "A", "X", "Квартира 02", "S2"),
        apartment("2", "A", "X", "Квартира 09", "S3"),
        apartment("1", "A", "X", "Квартира ??", "S4"),
        non_apartment("1", "A", "X", "Лестница"),
    ]);
    let command = PaintCommand::new(PaintSchema::default()).unwrap();

    let RunStatus::Succeeded(metrics) = command.execute(&mut host) else {
        panic!("run failed");
    };
    assert_eq!(metrics.records_scanned, 5);
    assert_eq!(metrics.records_matched, 4);
    assert_eq!(metrics.level_groups, 2);
    assert_eq!(metrics.zone_groups, 4);
    assert_eq!(metrics.unknown_groups_dropped, 1);
    assert_eq!(metrics.adjacent_pairs, 1);
    assert_eq!(metrics.groups_painted, 1);
    assert_eq!(metrics.records_painted, 1);
}

#[test]
fn empty_model_succeeds_with_zero_metrics() {
    use halftone_core::RunStatus;

    let mut host = MockHost::new(Vec::<MockRecord>::new());
    let command = PaintCommand::new(PaintSchema::default()).unwrap();
    let RunStatus::Succeeded(metrics) = command.execute(&mut host) else {
        panic!("run failed");
    };
    assert_eq!(metrics.records_scanned, 0);
    assert_eq!(metrics.groups_painted, 0);
}
