use pretty_assertions::assert_eq;
use slotdesk_client::display::render_grid;
use slotdesk_core::{
    grid::SlotGrid,
    models::slot::{DisabledSlot, SlotCell, WeekDay},
    selection::SlotSelection,
};

#[test]
fn test_render_grid_marks_and_hides_rows() {
    let grid = SlotGrid::new(9, 12, 60).unwrap();
    let mut disabled: Vec<DisabledSlot> = WeekDay::ALL
        .into_iter()
        .map(|day| DisabledSlot::new(SlotCell::new(day, 2)))
        .collect();
    disabled.push(DisabledSlot::new(SlotCell::new(WeekDay::Sunday, 0)));

    let mut selection = SlotSelection::new(grid).with_disabled(disabled);
    selection.toggle(WeekDay::Monday, 0).unwrap();
    selection.toggle(WeekDay::Wednesday, 1).unwrap();

    let expected = [
        "       Mon Tue Wed Thu Fri Sat Sun",
        "09:00    #   .   .   .   .   .   x",
        "10:00    .   .   #   .   .   .   .",
        "",
    ]
    .join("\n");
    assert_eq!(render_grid(&selection), expected);
}
