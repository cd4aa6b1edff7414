use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use rstest::rstest;
use slotdesk_core::{
    errors::DeskError,
    grid::SlotGrid,
    models::slot::{DisabledSlot, SlotCell, WeekDay},
};

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn test_morning_grid_labels() {
    let grid = SlotGrid::new(9, 12, 60).unwrap();

    assert_eq!(grid.bucket_count(), 3);
    assert_eq!(grid.labels(), vec!["09:00", "10:00", "11:00"]);
}

#[rstest]
#[case(9, 12, 60, 3)]
#[case(9, 12, 45, 4)]
#[case(0, 24, 30, 48)]
#[case(8, 9, 90, 1)]
#[case(22, 24, 25, 5)]
fn test_bucket_count_is_ceiling(
    #[case] start: u32,
    #[case] end: u32,
    #[case] minutes: u32,
    #[case] expected: usize,
) {
    let grid = SlotGrid::new(start, end, minutes).unwrap();
    assert_eq!(grid.bucket_count(), expected);
    assert!(grid.bucket_count() >= 1);
}

#[rstest]
#[case(30, 40, 23, 24)]
#[case(10, 5, 10, 11)]
#[case(10, 10, 10, 11)]
#[case(0, 99, 0, 24)]
fn test_hour_range_is_clamped(
    #[case] start: u32,
    #[case] end: u32,
    #[case] expected_start: u32,
    #[case] expected_end: u32,
) {
    let grid = SlotGrid::new(start, end, 60).unwrap();
    assert_eq!(grid.start_hour(), expected_start);
    assert_eq!(grid.end_hour(), expected_end);
    assert!(grid.bucket_count() >= 1);
}

#[test]
fn test_zero_duration_is_rejected() {
    let result = SlotGrid::new(9, 17, 0);
    assert!(matches!(result, Err(DeskError::Validation(_))));
}

#[test]
fn test_labels_wrap_past_midnight() {
    // 23:00 - 24:00 in 45 minute buckets overruns into the next day.
    let grid = SlotGrid::new(23, 24, 45).unwrap();
    assert_eq!(grid.labels(), vec!["23:00", "23:45"]);

    let (start, end) = grid.time_range(SlotCell::new(WeekDay::Friday, 1));
    assert_eq!(start, time(23, 45));
    assert_eq!(end, time(0, 30));
}

#[test]
fn test_time_range_for_cell() {
    let grid = SlotGrid::new(9, 17, 30).unwrap();
    let (start, end) = grid.time_range(SlotCell::new(WeekDay::Tuesday, 3));
    assert_eq!(start, time(10, 30));
    assert_eq!(end, time(11, 0));
}

#[rstest]
#[case(time(9, 0), Some(0))]
#[case(time(9, 29), Some(0))]
#[case(time(9, 30), Some(1))]
#[case(time(11, 30), Some(5))]
#[case(time(12, 0), None)]
#[case(time(8, 0), None)]
fn test_slot_index_for_start_time(#[case] start: NaiveTime, #[case] expected: Option<usize>) {
    let grid = SlotGrid::new(9, 12, 30).unwrap();
    assert_eq!(grid.slot_index_for(start), expected);
}

#[test]
fn test_slot_index_counts_minutes_past_the_hour() {
    // Dividing whole hours by the bucket size would put 09:30 in bucket 0
    // and 09:45 in bucket 0 on a quarter-hour grid.
    let half_hours = SlotGrid::new(9, 12, 30).unwrap();
    assert_eq!(half_hours.slot_index_for(time(9, 30)), Some(1));
    assert_eq!(half_hours.slot_index_for(time(10, 15)), Some(2));

    let quarters = SlotGrid::new(9, 12, 15).unwrap();
    assert_eq!(quarters.slot_index_for(time(9, 45)), Some(3));
    assert_eq!(quarters.slot_index_for(time(11, 59)), Some(11));
}

#[test]
fn test_cells_cover_every_weekday() {
    let grid = SlotGrid::new(9, 12, 60).unwrap();
    let cells: Vec<SlotCell> = grid.cells().collect();

    assert_eq!(cells.len(), 21);
    assert_eq!(cells[0], SlotCell::new(WeekDay::Monday, 0));
    assert_eq!(cells[20], SlotCell::new(WeekDay::Sunday, 2));
}

#[test]
fn test_row_hidden_only_when_disabled_on_all_days() {
    let grid = SlotGrid::new(9, 12, 60).unwrap();

    let mut disabled: Vec<DisabledSlot> = WeekDay::ALL
        .into_iter()
        .map(|day| DisabledSlot::new(SlotCell::new(day, 1)))
        .collect();
    // Row 2 is disabled everywhere except Sunday.
    disabled.extend(
        WeekDay::ALL[..6]
            .iter()
            .map(|&day| DisabledSlot::new(SlotCell::new(day, 2))),
    );

    assert!(grid.is_row_hidden(1, &disabled));
    assert!(!grid.is_row_hidden(2, &disabled));
    assert_eq!(grid.visible_rows(&disabled), vec![0, 2]);
    assert_eq!(grid.visible_rows(&[]), vec![0, 1, 2]);
}
